//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{PolexError, Result};

/// Main configuration for the polex pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolexConfig {
    /// Output configuration.
    pub output: OutputConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,
}

impl Default for PolexConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            pdf: PdfConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default path for the saved JSON record when none is given.
    pub default_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_path: "policy_output.json".to_string(),
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum extracted text length before a low-content warning is logged.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_text_length: 50,
        }
    }
}

impl PolexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| PolexError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| PolexError::Config(e.to_string()))?;
        std::fs::write(path, content).map_err(PolexError::Io)
    }
}
