// @generated by sf-gen from the DatabaseRoles definition. Do not edit.
#![allow(unused_imports)]

use super::dto_gen::*;
use super::interface_gen::*;
use crate::client::{Call, Client};
use crate::error::SdkResult;
use async_trait::async_trait;
use sf_core::{Context, ObjectIdentifier};

#[derive(Debug, Clone)]
pub struct DatabaseRolesImpl {
    client: Client,
}

impl DatabaseRolesImpl {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DatabaseRoles for DatabaseRolesImpl {
    async fn create(&self, ctx: &Context, request: &CreateDatabaseRoleRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("CreateDatabaseRole", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn alter(&self, ctx: &Context, request: &AlterDatabaseRoleRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("AlterDatabaseRole", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn drop(&self, ctx: &Context, request: &DropDatabaseRoleRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("DropDatabaseRole", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn show(&self, ctx: &Context, request: &ShowDatabaseRoleRequest) -> SdkResult<Vec<DatabaseRole>> {
        let opts = request.to_opts();
        let call = Call::new("ShowDatabaseRole", Some(opts.in_database.fully_qualified_name()));
        self.client.query_options(ctx, call, Some(&opts)).await
    }
}
