use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::CropConfig;

/// A loaded configuration file with its associated directory.
///
/// Paths in the config are relative to the config file location,
/// so we need to track where the config was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: CropConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: CropConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        if config.version != 1 {
            anyhow::bail!(
                "unsupported config version {} in {}",
                config.version,
                path.display()
            );
        }

        let config_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Resolve the source sheet relative to the config file directory.
    pub fn resolve_source(&self) -> Option<PathBuf> {
        self.config
            .source
            .as_ref()
            .map(|source| self.config_dir.join(source))
    }

    /// Resolve the output directory relative to the config file directory.
    pub fn resolve_output_dir(&self) -> PathBuf {
        self.config_dir.join(&self.config.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crop.json");
        std::fs::write(
            &path,
            r#"{"version": 1, "source": "art/sheet.png", "output_dir": "avatars"}"#,
        )
        .unwrap();

        let loaded = LoadedConfig::load(&path).unwrap();

        assert_eq!(loaded.resolve_source(), Some(dir.path().join("art/sheet.png")));
        assert_eq!(loaded.resolve_output_dir(), dir.path().join("avatars"));
    }

    #[test]
    fn test_absolute_paths_kept() {
        let loaded = LoadedConfig {
            config: CropConfig {
                source: Some("/abs/sheet.png".to_string()),
                ..CropConfig::default()
            },
            config_dir: PathBuf::from("/project"),
        };

        assert_eq!(loaded.resolve_source(), Some(PathBuf::from("/abs/sheet.png")));
    }

    #[test]
    fn test_bad_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crop.json");
        std::fs::write(&path, r#"{"version": 2}"#).unwrap();

        let err = LoadedConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported config version"));
    }

    #[test]
    fn test_missing_config_file() {
        let err = LoadedConfig::load(Path::new("no/such/crop.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
