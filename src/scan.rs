//! Filesystem scanning.
//!
//! Walks `<icons_dir>/<type>/<category>/*.svg` for every configured style and
//! produces one [`IconRecord`] per icon file.
//!
//! ## Failure Isolation
//!
//! Problems with a single unit of work never abort the scan:
//!
//! - **Missing style directory**: the style is skipped with a warning.
//! - **Unreadable category**: the category is skipped with a warning. Its
//!   listing is read in full before any record is produced, so a failing
//!   category contributes nothing.
//!
//! A style path that exists but cannot be listed (including one that is a
//! regular file) is a different matter: that points at a broken icon root,
//! and [`ScanError`] is returned.
//!
//! Category directory names are kept as raw `OsString`s for filesystem
//! access; only the record fields are converted (lossily) to UTF-8.
//!
//! ## Ordering
//!
//! Category and file listings are sorted by name before use. Directory
//! iteration order is filesystem-dependent, and the manifest must be
//! reproducible across machines.
//!
//! Warnings are both logged through `tracing` as they happen and returned in
//! [`ScanResult::warnings`].

use crate::config::ManifestConfig;
use crate::types::IconRecord;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Could not read type folder {}: {source}", path.display())]
    TypeDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A non-fatal problem encountered while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    /// The style has no directory under the icon root.
    MissingType { icon_type: String },
    /// A category directory could not be listed.
    UnreadableCategory {
        icon_type: String,
        category: String,
        path: PathBuf,
        message: String,
    },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::MissingType { icon_type } => {
                write!(f, "Type folder not found: {icon_type}")
            }
            ScanWarning::UnreadableCategory { path, message, .. } => {
                write!(f, "Could not read {}: {message}", path.display())
            }
        }
    }
}

/// Records in scan order plus every warning raised along the way.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub icons: Vec<IconRecord>,
    pub warnings: Vec<ScanWarning>,
}

impl ScanResult {
    fn warn(&mut self, warning: ScanWarning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }
}

pub fn scan(config: &ManifestConfig) -> Result<ScanResult, ScanError> {
    let mut result = ScanResult::default();

    for icon_type in &config.icon_types {
        let type_path = config.icons_dir.join(icon_type);

        if !type_path.exists() {
            result.warn(ScanWarning::MissingType {
                icon_type: icon_type.clone(),
            });
            continue;
        }

        // Also fails when the style path is a regular file.
        let categories =
            list_categories(&type_path, config).map_err(|source| ScanError::TypeDir {
                path: type_path.clone(),
                source,
            })?;

        for category in categories {
            let category_path = type_path.join(&category.dir_name);
            let listing = list_icon_files(&category_path, config);
            push_category(
                &mut result,
                config,
                icon_type,
                category.name,
                category_path,
                listing,
            );
        }
    }

    Ok(result)
}

/// Record one category's icons, or a warning if its listing failed.
fn push_category(
    result: &mut ScanResult,
    config: &ManifestConfig,
    icon_type: &str,
    category: String,
    path: PathBuf,
    listing: io::Result<Vec<String>>,
) {
    match listing {
        Ok(files) => {
            for file in files {
                result
                    .icons
                    .push(icon_record(config, icon_type, &category, file));
            }
        }
        Err(err) => result.warn(ScanWarning::UnreadableCategory {
            icon_type: icon_type.to_string(),
            category,
            path,
            message: err.to_string(),
        }),
    }
}

fn icon_record(
    config: &ManifestConfig,
    icon_type: &str,
    category: &str,
    file_name: String,
) -> IconRecord {
    let name = file_name
        .strip_suffix(config.icon_suffix.as_str())
        .unwrap_or(&file_name)
        .to_string();
    IconRecord {
        path: config.record_path(icon_type, category, &file_name),
        icon_type: icon_type.to_string(),
        category: category.to_string(),
        name,
    }
}

/// A category directory as found on disk.
#[derive(Debug)]
struct Category {
    /// Exact directory name, used to build filesystem paths.
    dir_name: OsString,
    /// Name as written into records.
    name: String,
}

/// Category directories under a style, sorted by name.
fn list_categories(type_path: &Path, config: &ManifestConfig) -> io::Result<Vec<Category>> {
    let mut categories = Vec::new();
    for entry in fs::read_dir(type_path)? {
        let entry = entry?;
        let dir_name = entry.file_name();
        let name = dir_name.to_string_lossy().to_string();
        if entry.path().is_dir() && !name.starts_with(config.reserved_prefix.as_str()) {
            categories.push(Category { dir_name, name });
        }
    }
    categories.sort_by(|a, b| a.dir_name.cmp(&b.dir_name));
    Ok(categories)
}

/// Names of the icon files directly inside a category, sorted.
///
/// Any error while listing fails the whole category.
fn list_icon_files(category_path: &Path, config: &ManifestConfig) -> io::Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(category_path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if entry.path().is_file() && name.ends_with(config.icon_suffix.as_str()) {
            files.push(name);
        }
    }
    files.sort();
    Ok(files)
}
