//! CLI output formatting.
//!
//! Each command has `format_*` functions (returning `Vec<String>`) for
//! testability and `print_*` wrappers that write to stdout. Format functions
//! are pure: no I/O, no side effects.
//!
//! Warnings are not formatted here. They are emitted as `tracing` events by
//! the code that detects them and end up on stderr.
//!
//! # Output Format
//!
//! ## Manifest build
//!
//! ```text
//! Scanning icons...
//! ✓ Generated manifest.json
//!   - Total icons: 1240
//!   - Types: 6
//!   - Categories: 37
//! ```
//!
//! ## snake-case (dry run)
//!
//! ```text
//! DRY RUN - Processing files and folders...
//!
//! Would copy: SVG/Bold/Arrows, Action/Arrow Up.svg
//!         to: solar/bold/arrows_action/arrow_up.svg
//!
//! Would copy 1 files
//! ```

use crate::manifest::Manifest;
use crate::snake_case::{CopyOutcome, CopyPlan, CopyReport};
use std::path::Path;

const BANNER_WIDTH: usize = 60;

// ============================================================================
// Manifest build
// ============================================================================

pub fn print_scan_start() {
    println!("Scanning icons...");
}

/// Completion block: output file plus the three headline counts.
pub fn format_run_summary(manifest: &Manifest, output_file: &Path) -> Vec<String> {
    let file_name = output_file
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| output_file.display().to_string());
    vec![
        format!("\u{2713} Generated {}", file_name),
        format!("  - Total icons: {}", manifest.total_count),
        format!("  - Types: {}", manifest.types.len()),
        format!("  - Categories: {}", manifest.categories.len()),
    ]
}

pub fn print_run_summary(manifest: &Manifest, output_file: &Path) {
    for line in format_run_summary(manifest, output_file) {
        println!("{}", line);
    }
}

// ============================================================================
// snake-case copy
// ============================================================================

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Preview of a copy: one `Would copy` / `to` pair per file and a closing banner.
pub fn format_copy_plan(plan: &CopyPlan) -> Vec<String> {
    let mut lines = vec![
        "DRY RUN - Processing files and folders...".to_string(),
        String::new(),
    ];

    for op in &plan.files {
        lines.push(format!("Would copy: {}", plan.display_path(&op.source)));
        lines.push(format!("        to: {}", plan.display_path(&op.target)));
        lines.push(String::new());
    }

    lines.push(format!("Would copy {} files", plan.files.len()));
    lines.push(String::new());
    lines.push(banner());
    lines.push("This was a DRY RUN. No files were actually copied.".to_string());
    lines.push("To apply changes, re-run with --apply".to_string());
    lines.push(banner());
    lines
}

pub fn print_copy_plan(plan: &CopyPlan) {
    for line in format_copy_plan(plan) {
        println!("{}", line);
    }
}

/// Outcome of an applied copy, in walk order, failures marked with `✗`.
pub fn format_copy_report(plan: &CopyPlan, report: &CopyReport) -> Vec<String> {
    let mut lines = vec!["Processing files and folders...".to_string(), String::new()];

    for outcome in &report.outcomes {
        match outcome {
            CopyOutcome::Copied(op) => {
                lines.push(format!("\u{2713} Copied: {}", plan.display_path(&op.source)));
                lines.push(format!("      to: {}", plan.display_path(&op.target)));
            }
            CopyOutcome::Failed(failure) => {
                lines.push(format!(
                    "\u{2717} Error copying {}: {}",
                    failure.op.source.display(),
                    failure.error
                ));
            }
        }
        lines.push(String::new());
    }

    lines.push(format!("Copied {} files", report.copied_count()));
    lines.push(String::new());
    lines.push(format!(
        "\u{2713} All files copied to: {}",
        plan.output_root.display()
    ));
    lines
}

pub fn print_copy_report(plan: &CopyPlan, report: &CopyReport) {
    for line in format_copy_report(plan, report) {
        println!("{}", line);
    }
}
