//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Lexicon overrides applied in order; later files win.
    pub lexicon_paths: Vec<PathBuf>,
    /// `*`, a comma-separated origin list, or `None` for no CORS layer.
    pub cors_allowed_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            lexicon_paths: Vec::new(),
            cors_allowed_origins: None,
        }
    }
}

impl ServerConfig {
    /// Read `SERVER_HOST`, `SERVER_PORT` (or `PORT`), `HORROR_LEXICON`
    /// (a path list in the platform's `PATH` format) and `CORS_ALLOWED_ORIGINS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = non_empty("SERVER_PORT")
            .or_else(|| non_empty("PORT"))
            .and_then(|raw| match raw.parse() {
                Ok(port) => Some(port),
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring unparseable port");
                    None
                }
            })
            .unwrap_or(defaults.port);

        Self {
            host: non_empty("SERVER_HOST").unwrap_or(defaults.host),
            port,
            lexicon_paths: non_empty("HORROR_LEXICON")
                .map(|raw| std::env::split_paths(&raw).collect())
                .unwrap_or_default(),
            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS"),
        }
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}
