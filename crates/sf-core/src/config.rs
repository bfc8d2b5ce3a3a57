//! Driver configuration and its resolution.
//!
//! The SDK does not talk to Snowflake itself; it hands a resolved
//! [`DriverConfig`] to a connector. Every option is optional at this layer
//! and is resolved field by field with the precedence
//! explicit value > `SNOWFLAKE_<UPPER>` environment variable > profile file.
//! Anything still unset is left to the driver's own default.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Profile used when neither the caller nor the environment selects one.
pub const DEFAULT_PROFILE: &str = "default";

/// Environment variable overriding the profile file location.
pub const CONFIG_PATH_ENV: &str = "SNOWFLAKE_CONFIG_PATH";

const ENV_PREFIX: &str = "SNOWFLAKE_";

/// A credential value. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// How the driver authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Authenticator {
    Snowflake,
    Oauth,
    ExternalBrowser,
    Okta,
    Jwt,
    TokenAccessor,
    UsernamePasswordMfa,
}

impl Authenticator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Authenticator::Snowflake => "snowflake",
            Authenticator::Oauth => "oauth",
            Authenticator::ExternalBrowser => "external-browser",
            Authenticator::Okta => "okta",
            Authenticator::Jwt => "jwt",
            Authenticator::TokenAccessor => "token-accessor",
            Authenticator::UsernamePasswordMfa => "username-password-mfa",
        }
    }
}

impl fmt::Display for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Authenticator {
    type Err = CoreError;

    /// Case-insensitive; `_` is accepted in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "snowflake" => Ok(Authenticator::Snowflake),
            "oauth" => Ok(Authenticator::Oauth),
            "external-browser" | "externalbrowser" => Ok(Authenticator::ExternalBrowser),
            "okta" => Ok(Authenticator::Okta),
            "jwt" | "snowflake-jwt" => Ok(Authenticator::Jwt),
            "token-accessor" => Ok(Authenticator::TokenAccessor),
            "username-password-mfa" => Ok(Authenticator::UsernamePasswordMfa),
            _ => Err(CoreError::ConfigInvalid {
                message: format!(
                    "unknown authenticator '{s}', expected one of: snowflake, oauth, \
                     external-browser, okta, jwt, token-accessor, username-password-mfa"
                ),
            }),
        }
    }
}

/// OAuth refresh-token flow settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OauthRefresh {
    pub endpoint: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<Secret>,
    pub redirect_uri: Option<String>,
}

impl OauthRefresh {
    /// Every field of the refresh flow is present.
    pub fn is_complete(&self) -> bool {
        self.endpoint.is_some()
            && self.client_id.is_some()
            && self.client_secret.is_some()
            && self.redirect_uri.is_some()
    }

    fn or(self, lower: Self) -> Self {
        Self {
            endpoint: self.endpoint.or(lower.endpoint),
            client_id: self.client_id.or(lower.client_id),
            client_secret: self.client_secret.or(lower.client_secret),
            redirect_uri: self.redirect_uri.or(lower.redirect_uri),
        }
    }
}

/// Connection options handed to the driver. Timeouts are in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriverConfig {
    pub account: Option<String>,
    pub user: Option<String>,
    pub password: Option<Secret>,
    pub warehouse: Option<String>,
    pub role: Option<String>,
    pub region: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub protocol: Option<String>,
    pub authenticator: Option<Authenticator>,
    pub private_key: Option<Secret>,
    pub private_key_passphrase: Option<Secret>,
    pub token: Option<Secret>,
    pub oauth_refresh: Option<OauthRefresh>,
    pub okta_url: Option<String>,
    pub passcode: Option<Secret>,
    pub passcode_in_password: Option<bool>,
    pub login_timeout: Option<u64>,
    pub request_timeout: Option<u64>,
    pub jwt_expire_timeout: Option<u64>,
    pub client_timeout: Option<u64>,
    pub jwt_client_timeout: Option<u64>,
    pub external_browser_timeout: Option<u64>,
    pub insecure_mode: Option<bool>,
    pub ocsp_fail_open: Option<bool>,
    pub keep_session_alive: Option<bool>,
    pub disable_telemetry: Option<bool>,
    pub client_request_mfa_token: Option<bool>,
    pub client_store_temporary_credential: Option<bool>,
    pub disable_query_context_cache: Option<bool>,
    pub validate_default_parameters: Option<bool>,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
    pub profile: Option<String>,
}

/// Field-wise `Option::or` over every scalar option.
macro_rules! merge_scalars {
    ($high:ident, $low:ident; $($field:ident),* $(,)?) => {
        DriverConfig {
            $($field: $high.$field.or($low.$field),)*
            oauth_refresh: match ($high.oauth_refresh, $low.oauth_refresh) {
                (Some(h), Some(l)) => Some(h.or(l)),
                (h, l) => h.or(l),
            },
            params: {
                let mut params = $low.params;
                params.extend($high.params);
                params
            },
        }
    };
}

impl DriverConfig {
    /// Merge with a lower-precedence source; values already set win.
    /// `params` are merged key by key.
    pub fn or(self, lower: DriverConfig) -> DriverConfig {
        let high = self;
        let low = lower;
        merge_scalars!(high, low;
            account, user, password, warehouse, role, region, host, port, protocol,
            authenticator, private_key, private_key_passphrase, token, okta_url, passcode,
            passcode_in_password, login_timeout, request_timeout, jwt_expire_timeout,
            client_timeout, jwt_client_timeout, external_browser_timeout, insecure_mode,
            ocsp_fail_open, keep_session_alive, disable_telemetry, client_request_mfa_token,
            client_store_temporary_credential, disable_query_context_cache,
            validate_default_parameters, profile,
        )
    }

    /// Read `SNOWFLAKE_<UPPER>` variables through `lookup`.
    ///
    /// Nested OAuth refresh options are read from
    /// `SNOWFLAKE_OAUTH_REFRESH_<FIELD>`. Values that fail to parse are
    /// reported rather than ignored.
    pub fn from_env_with<F>(lookup: F) -> CoreResult<DriverConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvReader { lookup };
        let oauth_refresh = OauthRefresh {
            endpoint: env.string("oauth_refresh_endpoint"),
            client_id: env.string("oauth_refresh_client_id"),
            client_secret: env.secret("oauth_refresh_client_secret"),
            redirect_uri: env.string("oauth_refresh_redirect_uri"),
        };
        Ok(DriverConfig {
            account: env.string("account"),
            user: env.string("user"),
            password: env.secret("password"),
            warehouse: env.string("warehouse"),
            role: env.string("role"),
            region: env.string("region"),
            host: env.string("host"),
            port: env.parsed("port")?,
            protocol: env.string("protocol"),
            authenticator: env.parsed("authenticator")?,
            private_key: env.secret("private_key"),
            private_key_passphrase: env.secret("private_key_passphrase"),
            token: env.secret("token"),
            oauth_refresh: (oauth_refresh != OauthRefresh::default()).then_some(oauth_refresh),
            okta_url: env.string("okta_url"),
            passcode: env.secret("passcode"),
            passcode_in_password: env.parsed("passcode_in_password")?,
            login_timeout: env.parsed("login_timeout")?,
            request_timeout: env.parsed("request_timeout")?,
            jwt_expire_timeout: env.parsed("jwt_expire_timeout")?,
            client_timeout: env.parsed("client_timeout")?,
            jwt_client_timeout: env.parsed("jwt_client_timeout")?,
            external_browser_timeout: env.parsed("external_browser_timeout")?,
            insecure_mode: env.parsed("insecure_mode")?,
            ocsp_fail_open: env.parsed("ocsp_fail_open")?,
            keep_session_alive: env.parsed("keep_session_alive")?,
            disable_telemetry: env.parsed("disable_telemetry")?,
            client_request_mfa_token: env.parsed("client_request_mfa_token")?,
            client_store_temporary_credential: env.parsed("client_store_temporary_credential")?,
            disable_query_context_cache: env.parsed("disable_query_context_cache")?,
            validate_default_parameters: env.parsed("validate_default_parameters")?,
            params: BTreeMap::new(),
            profile: env.string("profile"),
        })
    }

    /// Read the process environment.
    pub fn from_env() -> CoreResult<DriverConfig> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Merge `explicit`, `env` and the selected profile, then validate.
    ///
    /// A profile named explicitly (by the caller or `SNOWFLAKE_PROFILE`) must
    /// exist; the implicit `default` profile may be absent.
    pub fn resolve(
        explicit: DriverConfig,
        env: DriverConfig,
        profiles: Option<&ProfileFile>,
    ) -> CoreResult<DriverConfig> {
        let requested = explicit.profile.clone().or_else(|| env.profile.clone());
        let name = requested
            .clone()
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

        let profile = match profiles.and_then(|p| p.profile(&name)) {
            Some(profile) => profile.clone(),
            None if requested.is_some() => {
                return Err(CoreError::ConfigInvalid {
                    message: format!("profile '{name}' not found"),
                })
            }
            None => DriverConfig::default(),
        };

        let mut resolved = explicit.or(env).or(profile);
        resolved.profile = Some(name);
        resolved.validate()?;
        Ok(resolved)
    }

    /// Resolve against the process environment and the profile file at
    /// `SNOWFLAKE_CONFIG_PATH` or `~/.snowflake/config`, if it exists.
    pub fn load(explicit: DriverConfig) -> CoreResult<DriverConfig> {
        let env = Self::from_env()?;
        let path = std::env::var(CONFIG_PATH_ENV)
            .ok()
            .map(PathBuf::from)
            .or_else(ProfileFile::default_path);
        let profiles = match path {
            Some(path) if path.exists() => Some(ProfileFile::load(&path)?),
            _ => None,
        };
        Self::resolve(explicit, env, profiles.as_ref())
    }

    /// Check the per-authenticator requirements.
    pub fn validate(&self) -> CoreResult<()> {
        fn missing(field: &str, why: &str) -> CoreError {
            CoreError::ConfigInvalid {
                message: format!("'{field}' is required{why}"),
            }
        }

        if self.account.as_deref().map_or(true, str::is_empty) {
            return Err(missing("account", ""));
        }
        if self.user.as_deref().map_or(true, str::is_empty) {
            return Err(missing("user", ""));
        }

        match self.authenticator.unwrap_or(Authenticator::Snowflake) {
            Authenticator::Snowflake if self.password.is_none() => {
                Err(missing("password", " for the snowflake authenticator"))
            }
            Authenticator::UsernamePasswordMfa if self.password.is_none() => Err(missing(
                "password",
                " for the username-password-mfa authenticator",
            )),
            Authenticator::Jwt if self.private_key.is_none() => {
                Err(missing("private_key", " for the jwt authenticator"))
            }
            Authenticator::Oauth
                if self.token.is_none()
                    && !self.oauth_refresh.as_ref().is_some_and(OauthRefresh::is_complete) =>
            {
                Err(CoreError::ConfigInvalid {
                    message: "the oauth authenticator needs 'token' or a complete 'oauth_refresh'"
                        .to_string(),
                })
            }
            Authenticator::Okta if self.okta_url.is_none() => {
                Err(missing("okta_url", " for the okta authenticator"))
            }
            _ => Ok(()),
        }
    }
}

struct EnvReader<F> {
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn key(field: &str) -> String {
        format!("{ENV_PREFIX}{}", field.to_ascii_uppercase())
    }

    fn string(&self, field: &str) -> Option<String> {
        (self.lookup)(&Self::key(field)).filter(|v| !v.is_empty())
    }

    fn secret(&self, field: &str) -> Option<Secret> {
        self.string(field).map(Secret)
    }

    fn parsed<T>(&self, field: &str) -> CoreResult<Option<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let key = Self::key(field);
        match self.string(field) {
            None => Ok(None),
            Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
                CoreError::ConfigInvalid {
                    message: format!("{key}: cannot parse '{raw}': {e}"),
                }
            }),
        }
    }
}

/// Named connection profiles, one TOML table per profile.
///
/// ```toml
/// [default]
/// account = "ORG-ACCOUNT"
/// user = "TERRAFORM"
/// authenticator = "jwt"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFile {
    profiles: BTreeMap<String, DriverConfig>,
}

impl ProfileFile {
    /// `~/.snowflake/config`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".snowflake").join("config"))
    }

    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| match e {
            CoreError::ConfigParseError { message, .. } => CoreError::ConfigParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn parse(content: &str) -> CoreResult<Self> {
        let profiles: BTreeMap<String, DriverConfig> =
            toml::from_str(content).map_err(|e| CoreError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { profiles })
    }

    pub fn profile(&self, name: &str) -> Option<&DriverConfig> {
        self.profiles.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
