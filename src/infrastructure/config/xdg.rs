//! TOML config file under the user's config directory
//!
//! Reads treat a missing file as an empty config. Writes go through a temp
//! file in the same directory and a rename, so a crash mid-save never leaves
//! a truncated config behind.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

const APP_DIR: &str = "timed-print";
const CONFIG_FILE: &str = "config.toml";
const HEADER: &str = "# timed-print settings (see `timed-print config --help`)\n";

/// Config store rooted at `$XDG_CONFIG_HOME/timed-print/config.toml`
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        Self::with_path(default_config_path())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(APP_DIR)
        .join(CONFIG_FILE)
}

fn decode(content: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

fn encode(config: &AppConfig) -> Result<String, ConfigError> {
    let body =
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))?;
    Ok(format!("{HEADER}{body}"))
}

/// Replace `path` with `content` via temp file + rename
fn write_atomically(path: &Path, content: &str) -> io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => decode(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(AppConfig::empty()),
            Err(e) => Err(ConfigError::ReadError(e.to_string())),
        }
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = encode(config)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&path, &content))
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = encode(&AppConfig::defaults())?;
        let created = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await;

        let mut file = match created {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(ConfigError::AlreadyExists(
                    self.path.to_string_lossy().to_string(),
                ));
            }
            Err(e) => return Err(ConfigError::WriteError(e.to_string())),
        };

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        Ok(())
    }
}
