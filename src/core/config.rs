//! Server configuration
//!
//! All options can be overridden through environment variables:
//!
//! | Env var | Default | Description |
//! |---------|---------|-------------|
//! | WORK_DIR | ./data | working directory holding the embedded database |
//! | HTTP_PORT | 8000 | HTTP service port |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | LOG_LEVEL | info | default tracing filter |
//!
//! # Example
//!
//! ```ignore
//! WORK_DIR=/var/lib/confiserie HTTP_PORT=8080 cargo run
//! ```

#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the embedded database files
    pub work_dir: String,
    /// HTTP service port
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override part of the configuration, 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
