//! Shared test utilities for the solar-manifest test suite.
//!
//! Builds throwaway icon trees and provides small extractors that keep
//! assertions readable.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = icon_tree(&[("linear", "arrows", &["arrow-up.svg", "notes.txt"])]);
//! let result = scan(&config_for(tmp.path())).unwrap();
//! assert_eq!(icon_names(&result.icons), vec!["arrow-up"]);
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::ManifestConfig;
use crate::types::IconRecord;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp icon root with `(type, category, files)` entries.
///
/// Categories are always created, even with an empty file list. Every file
/// gets a tiny SVG body.
pub fn icon_tree(entries: &[(&str, &str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (icon_type, category, files) in entries {
        let dir = tmp.path().join(icon_type).join(category);
        fs::create_dir_all(&dir).unwrap();
        for file in *files {
            fs::write(dir.join(file), "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();
        }
    }
    tmp
}

/// Stock config scanning `root`, writing `manifest.json` inside it.
pub fn config_for(root: &Path) -> ManifestConfig {
    ManifestConfig::rooted_at(root, root.join("manifest.json"))
}

// =========================================================================
// Extractors
// =========================================================================

/// Icon names in manifest order.
pub fn icon_names(icons: &[IconRecord]) -> Vec<&str> {
    icons.iter().map(|i| i.name.as_str()).collect()
}

/// Set contents as plain `&str`s, in set order.
pub fn sorted_strings(set: &BTreeSet<String>) -> Vec<&str> {
    set.iter().map(String::as_str).collect()
}
