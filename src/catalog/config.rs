use crate::error::{CatalogError, Result};
use crate::store::chained::DEFAULT_BUCKETS;
use crate::store::StoreBackend;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "catalog.json";
const DEFAULT_FILE_EXT: &str = ".csv";

/// Session configuration, read from `catalog.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Extension of the data files offered by the load menu (e.g. ".csv")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,

    #[serde(default)]
    pub backend: StoreBackend,

    /// Buckets for the chained backend. Fixed for the whole session.
    #[serde(default = "default_bucket_count")]
    pub bucket_count: usize,

    #[serde(default)]
    pub show_timings: bool,
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

fn default_bucket_count() -> usize {
    DEFAULT_BUCKETS
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file_ext: default_file_ext(),
            backend: StoreBackend::default(),
            bucket_count: DEFAULT_BUCKETS,
            show_timings: false,
        }
    }
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config: CatalogConfig = serde_json::from_str(&content)?;
        let ext = config.file_ext.clone();
        config.set_file_ext(&ext);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(CatalogError::Config(
                "bucket_count must be greater than zero".to_string(),
            ));
        }
        if self.file_ext.len() < 2 {
            return Err(CatalogError::Config("file_ext cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn get_file_ext(&self) -> &str {
        &self.file_ext
    }

    /// Set the file extension (normalizes to start with a dot)
    pub fn set_file_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
    }
}
