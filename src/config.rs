use serde::Deserialize;
use std::{fs, io, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read toolchain configuration: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid toolchain configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Static, per-toolchain settings supplied once at setup.
///
/// Nothing here derives from an individual build request; the invoking
/// framework constructs one of these per configured toolchain and reuses it
/// across requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CompilerConfig {
    /// Toolchain name, used in diagnostics only.
    pub name: Option<String>,
    /// Extra tokens requesting Intel-syntax assembly, space separated.
    /// Absent or empty when the toolchain has no Intel-syntax support.
    pub intel_asm: Option<String>,
}

impl CompilerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
