//! Endpoint configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

pub const PRODUCTION_BASE_URL: &str = "https://api.asaas.com/v3";
pub const SANDBOX_BASE_URL: &str = "https://sandbox.asaas.com/api/v3";

pub const ENV_API_KEY: &str = "ASAAS_API_KEY";
pub const ENV_ENVIRONMENT: &str = "ASAAS_ENVIRONMENT";
pub const ENV_BASE_URL: &str = "ASAAS_BASE_URL";

/// Which Asaas deployment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

/// Immutable client configuration: credential plus endpoint selection.
///
/// An explicit base URL wins over the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct AsaasConfig {
    api_key: String,
    environment: Environment,
    base_url: Option<String>,
}

impl AsaasConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            environment: Environment::default(),
            base_url: None,
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Read `ASAAS_API_KEY`, `ASAAS_ENVIRONMENT` and `ASAAS_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(ENV_API_KEY)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(ENV_API_KEY))?;
        let mut config = Self::new(api_key);
        if let Some(env) = lookup(ENV_ENVIRONMENT).filter(|v| !v.is_empty()) {
            config.environment = env.parse()?;
        }
        config.base_url = lookup(ENV_BASE_URL).filter(|v| !v.is_empty());
        Ok(config)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The resolved base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
            .trim_end_matches('/')
    }
}

impl fmt::Debug for AsaasConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsaasConfig")
            .field("api_key", &"<redacted>")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url())
            .finish()
    }
}
