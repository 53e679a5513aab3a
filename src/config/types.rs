use serde::{Deserialize, Serialize};

use crate::cli::CompressionLevel;

/// PNG compression level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

impl CompressConfig {
    pub fn to_level(&self) -> Option<CompressionLevel> {
        match self {
            CompressConfig::Level(n) if *n <= 6 => Some(CompressionLevel::Level(*n)),
            CompressConfig::Max(s) if s.eq_ignore_ascii_case("max") => Some(CompressionLevel::Max),
            _ => None,
        }
    }
}

/// Config file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CropConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Source sprite sheet
    pub source: Option<String>,
    /// Output directory for sprite files
    pub output_dir: String,
    /// Keep N pixels of transparent border after trimming
    pub trim_margin: u32,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            version: 1,
            source: None,
            output_dir: ".".to_string(),
            trim_margin: 0,
            compress: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: CropConfig = serde_json::from_str(r#"{"source": "sheet.png"}"#).unwrap();
        assert_eq!(config.source.as_deref(), Some("sheet.png"));
        assert_eq!(config.output_dir, ".");
        assert_eq!(config.trim_margin, 0);
        assert!(config.compress.is_none());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = serde_json::from_str::<CropConfig>(r#"{"sourse": "sheet.png"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_compress_config_forms() {
        let config: CropConfig = serde_json::from_str(r#"{"compress": 3}"#).unwrap();
        assert_eq!(
            config.compress.and_then(|c| c.to_level()),
            Some(CompressionLevel::Level(3))
        );

        let config: CropConfig = serde_json::from_str(r#"{"compress": "max"}"#).unwrap();
        assert_eq!(
            config.compress.and_then(|c| c.to_level()),
            Some(CompressionLevel::Max)
        );

        assert_eq!(CompressConfig::Level(9).to_level(), None);
        assert_eq!(CompressConfig::Max("fast".into()).to_level(), None);
    }
}
