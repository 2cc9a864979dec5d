/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | BUSINESS_CONFIG | (built-in profile) | Path to the business profile JSON |
/// | ADMIN_TOKEN | (unset) | Operator credential; operator routes are disabled when unset |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_LEVEL | info | tracing filter level |
/// | LOG_DIR | (unset) | Daily-rolling log file directory |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | How long to drain connections after ctrl-c |
///
/// # Example
///
/// ```ignore
/// BUSINESS_CONFIG=/etc/loyaltap/coffee-star.json HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Path to the business profile JSON; None uses the built-in default
    pub business_config: Option<String>,
    /// Shared operator credential for admin routes.
    ///
    /// The source drafts never settled on an admin authorization policy;
    /// a single explicit token is the minimal one chosen here. Integrators
    /// wanting per-operator identity should front this server with their
    /// own identity-aware proxy.
    pub admin_token: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Graceful shutdown timeout (ms)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            business_config: std::env::var("BUSINESS_CONFIG").ok(),
            admin_token: std::env::var("ADMIN_TOKEN").ok().filter(|t| !t.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// Override selected values, mainly for tests.
    pub fn with_overrides(http_port: u16, admin_token: Option<String>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.admin_token = admin_token;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
