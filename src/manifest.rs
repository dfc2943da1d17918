//! Manifest assembly and persistence.
//!
//! Turns the scan result into the [`Manifest`] document and writes it as
//! pretty-printed JSON:
//!
//! ```json
//! {
//!   "generated": "2026-10-19T08:15:30.123Z",
//!   "totalCount": 1,
//!   "types": ["linear"],
//!   "categories": ["arrows"],
//!   "icons": [
//!     {
//!       "path": "icons/solar/linear/arrows/arrow-up.svg",
//!       "type": "linear",
//!       "category": "arrows",
//!       "name": "arrow-up"
//!     }
//!   ]
//! }
//! ```
//!
//! `types` and `categories` are sorted independently of `icons`, which keeps
//! scan order.

use crate::config::{ConfigError, ManifestConfig};
use crate::output;
use crate::scan::{self, ScanError};
use crate::types::IconRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The document consumed by the gallery viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(serialize_with = "serialize_timestamp")]
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub generated: DateTime<Utc>,
    /// Always `icons.len()`
    pub total_count: usize,
    pub types: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    pub icons: Vec<IconRecord>,
}

impl Manifest {
    /// Build a manifest from scanned icons, stamped with `generated`.
    pub fn new(icons: Vec<IconRecord>, generated: DateTime<Utc>) -> Self {
        let types = icons.iter().map(|i| i.icon_type.clone()).collect();
        let categories = icons.iter().map(|i| i.category.clone()).collect();
        Self {
            generated,
            total_count: icons.len(),
            types,
            categories,
            icons,
        }
    }
}

/// Build a manifest stamped with the current time.
pub fn build_manifest(icons: Vec<IconRecord>) -> Manifest {
    Manifest::new(icons, Utc::now())
}

/// Millisecond precision with a `Z` suffix, e.g. `2026-10-19T08:15:30.123Z`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_timestamp(ts))
}

fn deserialize_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(d)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

/// Serialize with two-space indentation and overwrite `config.output_file`.
pub fn write_manifest(manifest: &Manifest, config: &ManifestConfig) -> Result<(), ManifestError> {
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&config.output_file, json).map_err(|source| ManifestError::Write {
        path: config.output_file.clone(),
        source,
    })
}

/// Full pipeline: validate, scan, build, write, report.
///
/// Warnings go out through `tracing` during the scan; progress and the
/// final summary are printed to stdout.
pub fn run(config: &ManifestConfig) -> Result<Manifest, ManifestError> {
    config.validate()?;

    output::print_scan_start();
    let scanned = scan::scan(config)?;
    let manifest = build_manifest(scanned.icons);
    write_manifest(&manifest, config)?;
    output::print_run_summary(&manifest, &config.output_file);

    Ok(manifest)
}
