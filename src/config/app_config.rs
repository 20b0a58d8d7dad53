//! Layered application settings

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub billing: BillingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Prometheus scrape endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

/// Identity directory (Cognito user pool) settings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub user_pool_id: String,
    /// Falls back to the AWS default region chain when unset
    #[serde(default)]
    pub region: Option<String>,
}

impl DirectoryConfig {
    /// Region to use in URLs, `None` when it cannot be derived
    fn effective_region(&self) -> Option<&str> {
        self.region
            .as_deref()
            .or_else(|| self.user_pool_id.split_once('_').map(|(region, _)| region))
            .filter(|r| !r.is_empty())
    }

    /// Issuer of the user pool tokens
    pub fn issuer(&self) -> Option<String> {
        if self.user_pool_id.is_empty() {
            return None;
        }

        self.effective_region().map(|region| {
            format!(
                "https://cognito-idp.{}.amazonaws.com/{}",
                region, self.user_pool_id
            )
        })
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// RS256 tokens checked against the user pool JWKS
    #[default]
    Jwks,
    /// HS256 tokens signed with a shared secret
    Secret,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub mode: AuthMode,
    #[serde(default)]
    pub secret: Option<String>,
    /// Expected `iss`; derived from the user pool in JWKS mode when unset
    #[serde(default)]
    pub issuer: Option<String>,
    /// Derived from the issuer when unset
    #[serde(default)]
    pub jwks_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// `memory` or `postgres`
    pub backend: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

/// Price to plan mapping used by the subscription resolver
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BillingConfig {
    #[serde(default)]
    pub plans: Vec<PlanMapping>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PlanMapping {
    pub price_id: String,
    pub id: String,
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            url: None,
            max_connections: default_max_connections(),
        }
    }
}

impl AppConfig {
    /// Layered load: `config/default`, `config/local`, then `APP__*` variables
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Resolved JWKS URL in JWKS mode
    pub fn jwks_url(&self) -> Option<String> {
        self.auth.jwks_url.clone().or_else(|| {
            self.issuer()
                .map(|issuer| format!("{}/.well-known/jwks.json", issuer))
        })
    }

    /// Expected token issuer, explicit or derived from the user pool
    pub fn issuer(&self) -> Option<String> {
        self.auth.issuer.clone().or_else(|| match self.auth.mode {
            AuthMode::Jwks => self.directory.issuer(),
            AuthMode::Secret => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.auth.mode, AuthMode::Jwks);
        assert_eq!(config.storage.backend, "memory");
        assert!(config.billing.plans.is_empty());
    }

    #[test]
    fn test_full_file() {
        let config = from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            port = 3000

            [logging]
            level = "debug"
            format = "json"

            [directory]
            user_pool_id = "eu-west-1_AbCdEf"

            [auth]
            mode = "jwks"

            [storage]
            backend = "postgres"
            url = "postgres://localhost/admin"

            [[billing.plans]]
            price_id = "price_pro"
            id = "PRO"
            name = "Pro"
            "#,
        );

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.storage.url.as_deref(), Some("postgres://localhost/admin"));
        assert_eq!(config.storage.max_connections, 10);
        assert_eq!(
            config.billing.plans,
            vec![PlanMapping {
                price_id: "price_pro".to_string(),
                id: "PRO".to_string(),
                name: "Pro".to_string(),
            }]
        );
        assert_eq!(
            config.issuer().as_deref(),
            Some("https://cognito-idp.eu-west-1.amazonaws.com/eu-west-1_AbCdEf")
        );
        assert_eq!(
            config.jwks_url().as_deref(),
            Some("https://cognito-idp.eu-west-1.amazonaws.com/eu-west-1_AbCdEf/.well-known/jwks.json")
        );
    }

    #[test]
    fn test_explicit_region_and_urls_win() {
        let config = from_toml(
            r#"
            [directory]
            user_pool_id = "eu-west-1_AbCdEf"
            region = "us-east-1"

            [auth]
            jwks_url = "http://localhost:9000/jwks.json"
            "#,
        );

        assert_eq!(
            config.issuer().as_deref(),
            Some("https://cognito-idp.us-east-1.amazonaws.com/eu-west-1_AbCdEf")
        );
        assert_eq!(config.jwks_url().as_deref(), Some("http://localhost:9000/jwks.json"));
    }

    #[test]
    fn test_secret_mode_has_no_derived_issuer() {
        let config = from_toml(
            r#"
            [directory]
            user_pool_id = "eu-west-1_AbCdEf"

            [auth]
            mode = "secret"
            secret = "dev-secret"
            "#,
        );

        assert_eq!(config.auth.mode, AuthMode::Secret);
        assert!(config.issuer().is_none());
    }

    #[test]
    fn test_partial_metrics_section_keeps_path() {
        let config = from_toml(
            r#"
            [metrics]
            enabled = false
            "#,
        );

        assert!(!config.metrics.enabled);
        assert_eq!(config.metrics.path, "/metrics");
    }
}
