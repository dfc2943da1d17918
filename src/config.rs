//! Manifest build configuration.
//!
//! The layout of the icon tree is fixed: the binary always scans the same
//! styles under the same root and writes the same output file. These values
//! live in [`ManifestConfig`] rather than being scattered through the scanner
//! so tests can point a builder at a temporary tree without touching the
//! defaults.
//!
//! ## Expected Layout
//!
//! ```text
//! icons/solar/                     # Icon root
//! ├── bold/                        # Style (one per ICON_TYPES entry)
//! │   ├── arrows/                  # Category
//! │   │   ├── arrow_up.svg         # Icon
//! │   │   └── arrow_down.svg
//! │   └── sp_internal/             # Reserved prefix, never scanned
//! ├── linear/
//! │   └── weather/
//! │       └── sun.svg
//! └── ...
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Style directories scanned, in scan order.
pub const ICON_TYPES: &[&str] = &[
    "bold",
    "bold_duotone",
    "broken",
    "line_duotone",
    "linear",
    "outline",
];

/// Directory holding one subdirectory per style, relative to the working directory.
pub const ICONS_DIR: &str = "icons/solar";

/// Prefix joined in front of `<type>/<category>/<file>` in every record path.
pub const PATH_PREFIX: &str = "icons/solar";

/// Category directories starting with this prefix are skipped.
pub const RESERVED_CATEGORY_PREFIX: &str = "sp_";

/// Only files ending with this suffix are icons.
pub const ICON_SUFFIX: &str = ".svg";

/// Manifest location, relative to the working directory.
pub const OUTPUT_FILE: &str = "manifest.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything the builder needs to know about where icons live and where
/// the manifest goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// Style names, scanned in this order.
    pub icon_types: Vec<String>,
    /// Filesystem directory containing the style directories.
    pub icons_dir: PathBuf,
    /// Forward-slash prefix for record paths, independent of `icons_dir`.
    pub path_prefix: String,
    pub reserved_prefix: String,
    pub icon_suffix: String,
    /// Where the serialized manifest is written.
    pub output_file: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            icon_types: ICON_TYPES.iter().map(|t| t.to_string()).collect(),
            icons_dir: PathBuf::from(ICONS_DIR),
            path_prefix: PATH_PREFIX.to_string(),
            reserved_prefix: RESERVED_CATEGORY_PREFIX.to_string(),
            icon_suffix: ICON_SUFFIX.to_string(),
            output_file: PathBuf::from(OUTPUT_FILE),
        }
    }
}

impl ManifestConfig {
    /// Default layout rooted somewhere other than the working directory.
    ///
    /// Record paths keep the stock prefix; only the filesystem locations move.
    pub fn rooted_at(icons_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            icons_dir: icons_dir.into(),
            output_file: output_file.into(),
            ..Self::default()
        }
    }

    /// Reject configurations that could never produce a sensible manifest.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.icon_types.is_empty() {
            return Err(ConfigError::Validation(
                "icon_types must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for icon_type in &self.icon_types {
            if icon_type.is_empty() {
                return Err(ConfigError::Validation(
                    "icon_types must not contain empty names".into(),
                ));
            }
            if !seen.insert(icon_type.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate icon type: {icon_type}"
                )));
            }
        }
        if self.reserved_prefix.is_empty() {
            return Err(ConfigError::Validation(
                "reserved_prefix must not be empty".into(),
            ));
        }
        if self.icon_suffix.is_empty() {
            return Err(ConfigError::Validation(
                "icon_suffix must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Join the record path prefix with the given segments using `/`.
    pub fn record_path(&self, icon_type: &str, category: &str, file_name: &str) -> String {
        if self.path_prefix.is_empty() {
            format!("{icon_type}/{category}/{file_name}")
        } else {
            format!(
                "{}/{icon_type}/{category}/{file_name}",
                self.path_prefix.trim_end_matches('/')
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_fixed_layout() {
        let config = ManifestConfig::default();
        assert_eq!(
            config.icon_types,
            vec![
                "bold",
                "bold_duotone",
                "broken",
                "line_duotone",
                "linear",
                "outline"
            ]
        );
        assert_eq!(config.icons_dir, PathBuf::from("icons/solar"));
        assert_eq!(config.output_file, PathBuf::from("manifest.json"));
        assert_eq!(config.reserved_prefix, "sp_");
        assert_eq!(config.icon_suffix, ".svg");
    }

    #[test]
    fn default_config_passes_validation() {
        assert!(ManifestConfig::default().validate().is_ok());
    }

    #[test]
    fn rooted_at_keeps_record_prefix() {
        let config = ManifestConfig::rooted_at("/tmp/icons", "/tmp/out.json");
        assert_eq!(config.icons_dir, PathBuf::from("/tmp/icons"));
        assert_eq!(config.output_file, PathBuf::from("/tmp/out.json"));
        assert_eq!(config.path_prefix, "icons/solar");
    }

    #[test]
    fn record_path_joins_with_forward_slashes() {
        let config = ManifestConfig::default();
        assert_eq!(
            config.record_path("linear", "arrows", "arrow-up.svg"),
            "icons/solar/linear/arrows/arrow-up.svg"
        );
    }

    #[test]
    fn record_path_tolerates_trailing_slash_in_prefix() {
        let config = ManifestConfig {
            path_prefix: "icons/".into(),
            ..ManifestConfig::default()
        };
        assert_eq!(config.record_path("bold", "a", "b.svg"), "icons/bold/a/b.svg");
    }

    #[test]
    fn record_path_without_prefix() {
        let config = ManifestConfig {
            path_prefix: String::new(),
            ..ManifestConfig::default()
        };
        assert_eq!(config.record_path("bold", "a", "b.svg"), "bold/a/b.svg");
    }

    #[test]
    fn validate_empty_types() {
        let config = ManifestConfig {
            icon_types: vec![],
            ..ManifestConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("icon_types must not be empty"));
    }

    #[test]
    fn validate_duplicate_types() {
        let config = ManifestConfig {
            icon_types: vec!["bold".into(), "linear".into(), "bold".into()],
            ..ManifestConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate icon type: bold"));
    }

    #[test]
    fn validate_empty_suffix() {
        let config = ManifestConfig {
            icon_suffix: String::new(),
            ..ManifestConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_empty_reserved_prefix() {
        let config = ManifestConfig {
            reserved_prefix: String::new(),
            ..ManifestConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<ManifestConfig, _> =
            serde_json::from_str(r#"{"icon_types": ["bold"], "colour": "red"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: ManifestConfig =
            serde_json::from_str(r#"{"icon_types": ["linear"]}"#).unwrap();
        assert_eq!(config.icon_types, vec!["linear"]);
        assert_eq!(config.icon_suffix, ".svg");
    }
}
