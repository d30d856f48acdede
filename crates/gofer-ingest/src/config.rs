//! Configuration loading for the ingest binary.
//! Reads gofer.toml from the current directory or the path in GOFER_CONFIG.

use std::path::Path;

use gofer_common::{GoferError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ingest: IngestConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// GAF 2.2 annotation file to transform.
    pub gaf_path: String,
    /// gaf-eco-mapping.txt reference file.
    #[serde(default = "default_eco_map_path")]
    pub eco_map_path: String,
    /// NDJSON output destination.
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_eco_map_path() -> String { "data/gaf-eco-mapping.txt".to_string() }
fn default_output_path()  -> String { "output/go_annotation.jsonl".to_string() }

impl Config {
    /// Load from GOFER_CONFIG if set, else ./gofer.toml.
    pub fn load() -> Result<Self> {
        let path = std::env::var("GOFER_CONFIG").unwrap_or_else(|_| "gofer.toml".to_string());
        Self::from_path(&path)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            GoferError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Ok(toml::from_str(&text)?)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
