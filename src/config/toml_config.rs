use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML overrides for model, pacing and plan settings. Every
/// field is optional; unset values fall back to CLI flags or defaults
/// during `PlannerConfig::resolve`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub model: Option<ModelConfig>,
    pub pacing: Option<PacingConfig>,
    pub plan: Option<PlanConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    pub name: Option<String>,
    pub api_base: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PacingConfig {
    pub delay_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    pub weeks: Option<usize>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_loads_all_tables() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [model]
            name = "gemini-1.5-flash"
            api_base = "http://localhost:8080"

            [pacing]
            delay_secs = 2

            [plan]
            weeks = 6
            "#
        )
        .unwrap();

        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(config.model.unwrap().name.as_deref(), Some("gemini-1.5-flash"));
        assert_eq!(config.pacing.unwrap().delay_secs, Some(2));
        assert_eq!(config.plan.unwrap().weeks, Some(6));
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let file = NamedTempFile::new().unwrap();
        let config = FileConfig::from_file(file.path()).unwrap();
        assert!(config.model.is_none());
        assert!(config.pacing.is_none());
        assert!(config.plan.is_none());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(FileConfig::from_file("/nonexistent/skillmap.toml").is_err());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not [valid toml").unwrap();
        assert!(FileConfig::from_file(file.path()).is_err());
    }
}
