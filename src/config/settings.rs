use std::env;
use std::path::{Path, PathBuf};

/// Process configuration pulled from the environment at startup
#[derive(Debug, Clone)]
pub struct Settings {
    database_url: String,
    host: String,
    port: u16,
    public_dir: PathBuf,
}

impl Settings {
    /// Load settings from environment variables, falling back to the
    /// development defaults.
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://alibi.db?mode=rwc".to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        let public_dir = env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        Self {
            database_url,
            host,
            port,
            public_dir,
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }
}
