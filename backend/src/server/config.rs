//! Application configuration loaded via OrthoConfig.
//!
//! Values merge CLI flags, `MICROBLOG_*` environment variables, and an
//! optional config file, with CLI taking precedence.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MEDIA_DIR: &str = "media";

/// Runtime settings for the backend process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MICROBLOG")]
pub struct AppConfig {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Socket address to bind the HTTP listener to.
    pub bind_addr: Option<String>,
    /// Directory receiving uploaded media files.
    pub media_dir: Option<PathBuf>,
    /// Insert the demo users and follow edges into an empty database at
    /// startup.
    #[ortho_config(default = true)]
    pub seed_demo_data: bool,
}

impl AppConfig {
    /// Return the configured database URL.
    ///
    /// # Errors
    /// Fails when neither flag, environment, nor file supplied one; there is
    /// no usable fallback for a connection string.
    pub fn database_url(&self) -> Result<&str, std::io::Error> {
        self.database_url.as_deref().ok_or_else(|| {
            std::io::Error::other("MICROBLOG_DATABASE_URL (or --database-url) is required")
        })
    }

    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the configured media directory, falling back to the default.
    pub fn media_dir(&self) -> PathBuf {
        self.media_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_DIR))
    }
}
