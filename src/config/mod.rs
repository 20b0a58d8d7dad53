//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, AuthMode, BillingConfig, DirectoryConfig, LogFormat, LoggingConfig,
    MetricsConfig, PlanMapping, ServerConfig, StorageSettings,
};
