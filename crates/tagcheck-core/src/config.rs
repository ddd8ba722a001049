use serde::{Deserialize, Serialize};
use std::path::Path;
use tagcheck_syntax::ScanMode;

/// Where intermediate open tags go when an end tag is resolved deeper in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchPolicy {
    /// Record each skipped tag as a [`Mismatch`](crate::DiagnosticKind::Mismatch) error.
    #[default]
    Report,
    /// Move each skipped tag to the extras queue as an orphan.
    Extras,
}

/// Validator settings.
///
/// Persisted as JSON:
///
/// ```json
/// { "mismatch_policy": "report", "scan_mode": "tags" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub mismatch_policy: MismatchPolicy,
    pub scan_mode: ScanMode,
}

impl ValidatorConfig {
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        log::debug!("Loaded validator config from {:?}: {:?}", path, config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tagcheck.json");
        let config = ValidatorConfig {
            mismatch_policy: MismatchPolicy::Extras,
            scan_mode: ScanMode::Lines,
        };
        config.save(&path).unwrap();
        assert_eq!(ValidatorConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: ValidatorConfig = serde_json::from_str(r#"{ "scan_mode": "lines" }"#).unwrap();
        assert_eq!(config.mismatch_policy, MismatchPolicy::Report);
        assert_eq!(config.scan_mode, ScanMode::Lines);
    }

    #[test]
    fn test_load_rejects_unknown_policy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "mismatch_policy": "ignore" }"#).unwrap();
        assert!(ValidatorConfig::load(&path).is_err());
    }
}
