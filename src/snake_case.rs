//! Copy a raw icon set into a snake_case tree.
//!
//! The icon tree consumed by [`scan`](crate::scan) is prepared from an
//! upstream export whose folder and file names contain spaces, commas, and
//! mixed case. This module copies that export into a sibling folder with
//! every path component passed through [`to_snake_case`]:
//!
//! ```text
//! SVG/                              solar/
//! └── Bold/                         └── bold/
//!     └── Arrows, Action/     →         └── arrows_action/
//!         └── Arrow Up.svg                  └── arrow_up.svg
//! ```
//!
//! Planning ([`plan_copy`]) only reads the source tree. [`apply_copy`]
//! performs the copy; by default the CLI prints the plan and stops.

use crate::naming::to_snake_case;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Output folder name used when none is given.
pub const DEFAULT_OUTPUT_FOLDER: &str = "solar";

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("Path {} does not exist", .0.display())]
    MissingSource(PathBuf),
    #[error("Output folder {} already exists (use --force to replace it)", .0.display())]
    OutputExists(PathBuf),
    #[error("Output folder {} would replace the source", .0.display())]
    OutputIsSource(PathBuf),
    #[error("Output folder must be a single folder name, got {0:?}")]
    InvalidOutputFolder(String),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A single file copy from the source tree to its renamed location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOp {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// Every directory and file the copy would create, in walk order.
#[derive(Debug, Clone)]
pub struct CopyPlan {
    pub source_root: PathBuf,
    pub output_root: PathBuf,
    /// Renamed directories, including `output_root` itself.
    pub directories: Vec<PathBuf>,
    pub files: Vec<CopyOp>,
}

impl CopyPlan {
    /// `path` relative to the directory containing both source and output.
    ///
    /// Used for display; falls back to the full path.
    pub fn display_path(&self, path: &Path) -> String {
        let base = self.source_root.parent().unwrap_or(Path::new(""));
        path.strip_prefix(base)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string()
    }
}

/// A file that failed to copy; the rest of the copy carries on.
#[derive(Debug)]
pub struct CopyFailure {
    pub op: CopyOp,
    pub error: io::Error,
}

/// What happened to one planned file.
#[derive(Debug)]
pub enum CopyOutcome {
    Copied(CopyOp),
    Failed(CopyFailure),
}

/// Result of [`apply_copy`]: one outcome per planned file, in walk order.
#[derive(Debug, Default)]
pub struct CopyReport {
    pub outcomes: Vec<CopyOutcome>,
}

impl CopyReport {
    pub fn copied_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, CopyOutcome::Copied(_)))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CopyFailure> {
        self.outcomes.iter().filter_map(|o| match o {
            CopyOutcome::Failed(failure) => Some(failure),
            CopyOutcome::Copied(_) => None,
        })
    }
}

/// Convert every component of a relative path.
fn snake_case_path(rel: &Path) -> PathBuf {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(to_snake_case(&part.to_string_lossy())),
            _ => None,
        })
        .collect()
}

/// `output_folder` must name exactly one directory: no separators, no `.`
/// or `..`, not empty, not absolute.
fn check_output_folder(output_folder: &str) -> Result<(), CopyError> {
    let mut components = Path::new(output_folder).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(CopyError::InvalidOutputFolder(output_folder.to_string())),
    }
}

fn canonicalize(path: &Path) -> Result<PathBuf, CopyError> {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    fs::canonicalize(path).map_err(|source| CopyError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reject an output root that is, contains, or lies inside the source once
/// symlinks and relative components are resolved.
fn check_output_root(source_root: &Path, output_root: &Path) -> Result<(), CopyError> {
    let source = canonicalize(source_root)?;
    let output = match fs::canonicalize(output_root) {
        Ok(path) => path,
        // Not created yet: resolve the parent it will be created in.
        Err(_) => {
            let name = output_root.file_name().ok_or_else(|| {
                CopyError::InvalidOutputFolder(output_root.display().to_string())
            })?;
            canonicalize(output_root.parent().unwrap_or(Path::new("")))?.join(name)
        }
    };
    if source.starts_with(&output) || output.starts_with(&source) {
        return Err(CopyError::OutputIsSource(output_root.to_path_buf()));
    }
    Ok(())
}

/// Work out where everything under `source_root` goes.
///
/// The output root is `<parent of source_root>/<output_folder>`, where
/// `output_folder` is a single folder name.
pub fn plan_copy(source_root: &Path, output_folder: &str) -> Result<CopyPlan, CopyError> {
    if !source_root.exists() {
        return Err(CopyError::MissingSource(source_root.to_path_buf()));
    }
    check_output_folder(output_folder)?;

    let parent = source_root.parent().unwrap_or(Path::new(""));
    let output_root = parent.join(output_folder);
    check_output_root(source_root, &output_root)?;

    let mut plan = CopyPlan {
        source_root: source_root.to_path_buf(),
        output_root: output_root.clone(),
        directories: Vec::new(),
        files: Vec::new(),
    };

    for entry in WalkDir::new(source_root).sort_by_file_name() {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(source_root)
            .unwrap_or(entry.path());
        let renamed = snake_case_path(rel);
        // The source root itself maps onto the output root.
        let target = if renamed.as_os_str().is_empty() {
            output_root.clone()
        } else {
            output_root.join(renamed)
        };

        if entry.file_type().is_dir() {
            plan.directories.push(target);
        } else {
            plan.files.push(CopyOp {
                source: entry.path().to_path_buf(),
                target,
            });
        }
    }

    Ok(plan)
}

/// Create the planned directories and copy the planned files.
///
/// An existing output folder is refused unless `force` is set, in which case
/// it is deleted first. An output root overlapping the source is always
/// refused. Directory creation failures abort; individual file copy failures
/// are collected in the report.
pub fn apply_copy(plan: &CopyPlan, force: bool) -> Result<CopyReport, CopyError> {
    check_output_root(&plan.source_root, &plan.output_root)?;

    if plan.output_root.exists() {
        if !force {
            return Err(CopyError::OutputExists(plan.output_root.clone()));
        }
        tracing::info!("Deleting existing {}", plan.output_root.display());
        fs::remove_dir_all(&plan.output_root).map_err(|source| CopyError::Io {
            path: plan.output_root.clone(),
            source,
        })?;
    }

    for dir in &plan.directories {
        fs::create_dir_all(dir).map_err(|source| CopyError::Io {
            path: dir.clone(),
            source,
        })?;
    }

    let mut report = CopyReport::default();
    for op in &plan.files {
        match fs::copy(&op.source, &op.target) {
            Ok(_) => report.outcomes.push(CopyOutcome::Copied(op.clone())),
            Err(error) => {
                tracing::warn!("Error copying {}: {error}", op.source.display());
                report.outcomes.push(CopyOutcome::Failed(CopyFailure {
                    op: op.clone(),
                    error,
                }));
            }
        }
    }

    Ok(report)
}
