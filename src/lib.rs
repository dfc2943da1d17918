//! # Solar Manifest
//!
//! Builds `manifest.json`, the catalog the Solar icon gallery loads to know
//! which icons exist. The filesystem is the data source: every
//! `icons/solar/<type>/<category>/<name>.svg` becomes one entry.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan    icons/solar/  →  records + warnings   (filesystem → structured data)
//! 2. Build   records       →  Manifest             (sorted types and categories)
//! 3. Write   Manifest      →  manifest.json        (pretty-printed JSON)
//! ```
//!
//! The run is a single linear pass. A missing style directory or an
//! unreadable category is logged and skipped; only a broken icon root or a
//! failed write aborts.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Fixed layout: style list, icon root, reserved prefix, output file |
//! | [`scan`] | Walks the icon root, produces [`types::IconRecord`]s and warnings |
//! | [`manifest`] | Builds the [`manifest::Manifest`], writes it, runs the whole pipeline |
//! | [`types`] | `IconRecord`, serialized verbatim into the manifest |
//! | [`output`] | Console formatting for every command |
//! | [`naming`] | snake_case conversion for icon file and folder names |
//! | [`snake_case`] | Copies a raw icon export into a snake_case tree |
//!
//! # Design Decisions
//!
//! ## Sorted Listings
//!
//! Directory iteration order depends on the filesystem. Categories and files
//! are sorted by name so the same tree yields the same manifest everywhere;
//! only `generated` changes between runs.
//!
//! ## Names, Not Content
//!
//! No SVG is opened. A file is an icon because of where it sits and what it
//! is called.

pub mod config;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod scan;
pub mod snake_case;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
