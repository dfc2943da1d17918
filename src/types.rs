//! Types shared between the scanner, the manifest, and the console output.
//!
//! [`IconRecord`] is serialized verbatim into `manifest.json`, so its field
//! names are part of the contract with the gallery viewer.

use serde::{Deserialize, Serialize};

/// One icon file discovered during the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Forward-slash path, e.g. `icons/solar/linear/arrows/arrow-up.svg`
    pub path: String,
    /// Style directory the icon was found under
    #[serde(rename = "type")]
    pub icon_type: String,
    /// Category directory within the style
    pub category: String,
    /// File name with the `.svg` suffix removed
    pub name: String,
}
