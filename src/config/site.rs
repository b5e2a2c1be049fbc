//! Blog configuration (blog.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, ScaffoldError};

/// Name of the optional configuration file in the blog root
pub const CONFIG_FILE: &str = "blog.yml";

/// Blog layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Directory holding one sub-directory per post, relative to the root
    pub content_dir: String,
    /// File name of the post inside its directory
    pub index_file: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            content_dir: "content/blog".to_string(),
            index_file: "index.md".to_string(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;
        serde_yaml::from_str(&content).map_err(|source| ScaffoldError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `blog.yml` from the given root, falling back to defaults when absent
    pub fn load_or_default<P: AsRef<Path>>(root: P) -> Result<Self> {
        let config_path = root.as_ref().join(CONFIG_FILE);
        if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}
