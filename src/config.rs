//! Server configuration.
//!
//! Loaded with figment from (highest precedence first):
//! 1. Environment variables prefixed with `QUICKNOTE_` (e.g. `QUICKNOTE_UPLOAD_DIR`)
//! 2. An optional `quicknote.toml` in the working directory
//! 3. Built-in defaults

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "quicknote.toml";
pub const ENV_PREFIX: &str = "QUICKNOTE_";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_UPLOAD_DIR: &str = "/tmp/uploads/";
pub const DEFAULT_DB_PATH: &str = ".quicknote_db";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server listens on.
    pub bind_addr: String,
    /// Directory uploaded images are written to and served from.
    pub upload_dir: PathBuf,
    /// Location of the embedded note database.
    pub db_path: PathBuf,
    /// Upper bound on a single request body, attachments included.
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    /// Load from defaults, `quicknote.toml`, and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    /// Same as [`Config::load`] but with an explicit config file path.
    /// A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Config = Self::figment(path).extract()?;
        config.validate()?;
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn validate(&self) -> Result<()> {
        if self.upload_dir.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                message: "upload_dir must not be empty".to_string(),
            });
        }
        if self.max_upload_bytes == 0 {
            return Err(Error::ConfigValidation {
                message: "max_upload_bytes must be greater than 0".to_string(),
            });
        }
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .map_err(|e| Error::ConfigValidation {
                message: format!("invalid bind_addr '{}': {}", self.bind_addr, e),
            })
    }
}
