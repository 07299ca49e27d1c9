/// Default remote source for the recognised breed list.
pub const DEFAULT_BREEDS_API_URL: &str = "https://api.thecatapi.com/v1/breeds";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// URL returning the JSON list of recognised breeds.
    pub breeds_api_url: String,
    /// Timeout for the breed list request in seconds (default: `10`).
    pub breeds_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                               |
    /// |------------------------|---------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                             |
    /// | `PORT`                 | `8000`                                |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`               |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                  |
    /// | `BREEDS_API_URL`       | `https://api.thecatapi.com/v1/breeds` |
    /// | `BREEDS_TIMEOUT_SECS`  | `10`                                  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let breeds_api_url =
            std::env::var("BREEDS_API_URL").unwrap_or_else(|_| DEFAULT_BREEDS_API_URL.into());

        let breeds_timeout_secs: u64 = std::env::var("BREEDS_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("BREEDS_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            breeds_api_url,
            breeds_timeout_secs,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
