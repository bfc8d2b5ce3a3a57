//! Client facade.
//!
//! [`Client`] owns the driver handle, the provider version stamped into query
//! metadata, and the sensitive-attribute lookup. Family implementations hold
//! a clone and funnel every operation through [`Client::exec_options`] or
//! [`Client::query_options`], which run the fixed pipeline:
//!
//! 1. validate the option tree (nothing is sent on failure)
//! 2. render it to SQL
//! 3. refuse to dispatch when the context is already cancelled or expired
//! 4. append the query metadata comment when the context carries metadata
//! 5. execute, racing the driver against cancellation and the deadline
//! 6. decode rows for read operations

use crate::database_roles::DatabaseRolesImpl;
use crate::databases::DatabasesImpl;
use crate::ddl::{render, SqlRender};
use crate::decode::{decode_rows, FromRow};
use crate::error::{SdkError, SdkResult};
use crate::network_policies::NetworkPoliciesImpl;
use crate::parameters::ParametersImpl;
use crate::roles::RolesImpl;
use crate::validation::Validate;
use crate::warehouses::WarehousesImpl;
use sf_core::tracking::append_metadata;
use sf_core::{Context, DriverConfig, SensitiveAttributes, SensitiveRegistry, PROVIDER_VERSION};
use sf_db::{Connector, DbError, DbResult, Driver};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Placeholder logged and reported instead of SQL for sensitive resources.
pub const MASKED_SQL: &str = "<masked>";

/// Operation label and target carried into errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub operation: &'static str,
    pub identifier: Option<String>,
}

impl Call {
    /// An empty identifier (an unset name) is treated as absent.
    pub fn new(operation: &'static str, identifier: Option<String>) -> Self {
        Self {
            operation,
            identifier: identifier.filter(|id| !id.is_empty()),
        }
    }
}

struct Statement {
    sql: String,
    display: String,
}

#[derive(Clone)]
pub struct Client {
    driver: Arc<dyn Driver>,
    version: String,
    sensitive: Arc<dyn SensitiveAttributes>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("driver", &self.driver.db_type())
            .field("version", &self.version)
            .finish()
    }
}

impl Client {
    /// Client over an open driver, masking per `~/.snowflake/sensitive`.
    pub fn new(driver: Arc<dyn Driver>) -> Self {
        Self {
            driver,
            version: PROVIDER_VERSION.to_string(),
            sensitive: Arc::new(SensitiveRegistry::global()),
        }
    }

    /// Resolve `explicit` against the environment and profile file, then
    /// open a driver through `connector`.
    pub async fn connect(connector: &dyn Connector, explicit: DriverConfig) -> SdkResult<Self> {
        let config = DriverConfig::load(explicit)?;
        Self::connect_with_config(connector, config).await
    }

    /// Open a driver from an already resolved configuration.
    pub async fn connect_with_config(
        connector: &dyn Connector,
        config: DriverConfig,
    ) -> SdkResult<Self> {
        config.validate()?;
        let driver = connector
            .connect(&config)
            .await
            .map_err(SdkError::Connection)?;
        log::debug!(
            "Connected {} driver for account {}",
            driver.db_type(),
            config.account.as_deref().unwrap_or_default()
        );
        Ok(Self::new(driver))
    }

    /// Version used when the context metadata does not pin one.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_sensitive_attributes(mut self, sensitive: Arc<dyn SensitiveAttributes>) -> Self {
        self.sensitive = sensitive;
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    pub fn database_roles(&self) -> DatabaseRolesImpl {
        DatabaseRolesImpl::new(self.clone())
    }

    pub fn databases(&self) -> DatabasesImpl {
        DatabasesImpl::new(self.clone())
    }

    pub fn network_policies(&self) -> NetworkPoliciesImpl {
        NetworkPoliciesImpl::new(self.clone())
    }

    pub fn parameters(&self) -> ParametersImpl {
        ParametersImpl::new(self.clone())
    }

    pub fn roles(&self) -> RolesImpl {
        RolesImpl::new(self.clone())
    }

    pub fn warehouses(&self) -> WarehousesImpl {
        WarehousesImpl::new(self.clone())
    }

    /// Validate, render and execute a DDL option tree.
    pub async fn exec_options<T>(
        &self,
        ctx: &Context,
        call: Call,
        opts: Option<&T>,
    ) -> SdkResult<u64>
    where
        T: Validate + SqlRender,
    {
        let statement = self.prepare(ctx, &call, opts)?;
        self.run(ctx, &call, &statement, self.driver.exec(ctx, &statement.sql))
            .await
    }

    /// Validate, render and execute a read option tree, decoding every row.
    pub async fn query_options<T, R>(
        &self,
        ctx: &Context,
        call: Call,
        opts: Option<&T>,
    ) -> SdkResult<Vec<R>>
    where
        T: Validate + SqlRender,
        R: FromRow,
    {
        let statement = self.prepare(ctx, &call, opts)?;
        let rows = self
            .run(ctx, &call, &statement, self.driver.query(ctx, &statement.sql))
            .await?;
        decode_rows(&rows).map_err(|source| SdkError::Decode {
            operation: call.operation,
            identifier: call.identifier.clone(),
            source,
        })
    }

    fn prepare<T>(&self, ctx: &Context, call: &Call, opts: Option<&T>) -> SdkResult<Statement>
    where
        T: Validate + SqlRender,
    {
        let Some(opts) = opts else {
            return Err(SdkError::NilOptions {
                operation: call.operation,
                identifier: call.identifier.clone(),
            });
        };
        opts.validate().map_err(|source| SdkError::Validation {
            operation: call.operation,
            identifier: call.identifier.clone(),
            source,
        })?;

        let mut sql = render(opts);

        if ctx.is_cancelled() {
            return Err(SdkError::Cancelled {
                operation: call.operation,
                identifier: call.identifier.clone(),
            });
        }
        if ctx.is_expired() {
            return Err(SdkError::DeadlineExceeded {
                operation: call.operation,
                identifier: call.identifier.clone(),
            });
        }

        let mut masked = false;
        if let Some(metadata) = ctx.metadata() {
            sql = append_metadata(&sql, &metadata.to_query_metadata(&self.version)).map_err(
                |source| SdkError::Metadata {
                    operation: call.operation,
                    identifier: call.identifier.clone(),
                    source,
                },
            )?;
            masked = metadata
                .subject()
                .is_some_and(|subject| self.sensitive.has_sensitive_attributes(subject));
        }

        let display = if masked {
            MASKED_SQL.to_string()
        } else {
            sql.clone()
        };
        log::debug!(
            "[{}] {}: {}",
            self.driver.db_type(),
            call.operation,
            display
        );
        Ok(Statement { sql, display })
    }

    async fn run<O, F>(
        &self,
        ctx: &Context,
        call: &Call,
        statement: &Statement,
        fut: F,
    ) -> SdkResult<O>
    where
        F: Future<Output = DbResult<O>>,
    {
        let result = tokio::select! {
            biased;
            _ = ctx.cancelled() => {
                return Err(SdkError::Cancelled {
                    operation: call.operation,
                    identifier: call.identifier.clone(),
                })
            }
            _ = ctx.deadline_reached() => {
                return Err(SdkError::DeadlineExceeded {
                    operation: call.operation,
                    identifier: call.identifier.clone(),
                })
            }
            result = fut => result,
        };
        result.map_err(|e| self.map_driver_error(call, statement, e))
    }

    fn map_driver_error(&self, call: &Call, statement: &Statement, error: DbError) -> SdkError {
        if error.is_object_not_found() {
            return SdkError::ObjectNotFound {
                operation: call.operation,
                identifier: call.identifier.clone(),
                message: error.message().into_owned(),
            };
        }
        if matches!(error, DbError::Cancelled) {
            return SdkError::Cancelled {
                operation: call.operation,
                identifier: call.identifier.clone(),
            };
        }
        SdkError::Driver {
            operation: call.operation,
            identifier: call.identifier.clone(),
            sql: statement.display.clone(),
            source: error,
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
