//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DiscordConfig, Environment, HttpConfig,
    RedisConfig, ServerConfig,
};
