use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{FingerError, FingerResult};

/// Selects which of the 14 fingerprint fields are emitted.
///
/// `Full` is the ground-truth mode: every field keeps its computed value.
/// The other modes blank out the fields their feature table does not list;
/// the field count stays at 14 in every mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    #[default]
    Full,
    Core,
    All,
    Standard,
    Minimal,
    Fuzzy,
}

impl ReportMode {
    /// Parse a mode name from user input (CLI flag, config override).
    ///
    /// An unknown name is a configuration error, rejected before any
    /// fingerprint computation begins.
    pub fn parse(name: &str) -> FingerResult<Self> {
        match name {
            "full" => Ok(ReportMode::Full),
            "core" => Ok(ReportMode::Core),
            "all" => Ok(ReportMode::All),
            "standard" => Ok(ReportMode::Standard),
            "minimal" => Ok(ReportMode::Minimal),
            "fuzzy" => Ok(ReportMode::Fuzzy),
            other => Err(FingerError::BadReportMode(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportMode::Full => "full",
            ReportMode::Core => "core",
            ReportMode::All => "all",
            ReportMode::Standard => "standard",
            ReportMode::Minimal => "minimal",
            ReportMode::Fuzzy => "fuzzy",
        }
    }
}

/// Top-level runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FingerConfig {
    /// Which fingerprint fields to emit. Defaults to the full 14-field output.
    #[serde(default)]
    pub report_mode: ReportMode,
    /// Directory holding the lexicon-table JSON artifacts. When absent the
    /// builtin tables compiled into the library are used.
    #[serde(default)]
    pub lexicon_dir: Option<PathBuf>,
}

impl Default for FingerConfig {
    fn default() -> Self {
        Self {
            report_mode: ReportMode::Full,
            lexicon_dir: None,
        }
    }
}

impl FingerConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for consistency.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(ref dir) = self.lexicon_dir {
            if !dir.is_dir() {
                anyhow::bail!("lexicon_dir '{}' is not a directory", dir.display());
            }
        }
        Ok(())
    }
}
