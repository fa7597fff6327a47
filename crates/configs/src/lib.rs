use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DATA_FILE_ENV: &str = "RESTAURANTS_DATA_FILE";
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the file-backed repository keeps its JSON map.
/// Left empty when absent so `normalize_from_env` can consult the environment.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_data_file() -> PathBuf { PathBuf::from("data/restaurants.json") }
fn default_log_format() -> String { "compact".to_string() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if !Path::new(&path).exists() {
        return Ok(AppConfig::default());
    }
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

pub fn from_toml_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.storage.normalize_from_env();
        self.storage.validate()?;
        self.logging.normalize()?;
        Ok(())
    }
}

impl StorageConfig {
    /// A missing or blank `data_file` is filled from `RESTAURANTS_DATA_FILE`, then the default.
    pub fn normalize_from_env(&mut self) {
        if self.data_file.as_os_str().to_string_lossy().trim().is_empty() {
            self.data_file = std::env::var(DATA_FILE_ENV)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(default_data_file);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_file.is_dir() {
            return Err(anyhow!("storage.data_file must name a file, got directory {}", self.data_file.display()));
        }
        if self.data_file.file_name().is_none() {
            return Err(anyhow!("storage.data_file has no file name: {}", self.data_file.display()));
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn normalize(&mut self) -> Result<()> {
        let format = self.format.trim().to_ascii_lowercase();
        if format.is_empty() {
            self.format = default_log_format();
            return Ok(());
        }
        if !LOG_FORMATS.contains(&format.as_str()) {
            return Err(anyhow!("logging.format must be one of {:?}, got {:?}", LOG_FORMATS, self.format));
        }
        self.format = format;
        Ok(())
    }
}
