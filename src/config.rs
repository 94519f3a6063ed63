use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_FILTER: &str = "snake_scores=debug,tower_http=debug";
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:3000",
    "http://127.0.0.1:5173",
    "http://127.0.0.1:3000",
    "http://localhost:8201",
    "http://localhost:8200",
    "http://frontend",
];

/// Process configuration, built once at startup and handed to whoever needs it
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// PostgreSQL connection string; `None` runs against the in-memory store
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    /// Origins allowed by the CORS layer
    pub allowed_origins: Vec<String>,
    /// Fallback tracing filter when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `DATABASE_URL` (default: unset, in-memory store)
    /// - `HOST` (default: 0.0.0.0)
    /// - `PORT` (default: 8000)
    /// - `ALLOWED_ORIGINS` comma-separated (default: local dev servers and the Docker frontend)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let host = lookup("HOST")
            .map(|host| host.trim().to_string())
            .filter(|host| !host.is_empty())
            .unwrap_or(defaults.host);

        let port = lookup("PORT")
            .and_then(|port| port.trim().parse().ok())
            .unwrap_or(defaults.port);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.allowed_origins);

        Self {
            database_url,
            host,
            port,
            allowed_origins,
            log_filter: defaults.log_filter,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
