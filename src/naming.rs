//! Filename normalization for the icon tree.
//!
//! Icon sets ship with names like `Arrows, Action/Arrow Up-Bold.SVG`. The
//! gallery expects every directory and file under `icons/solar` to be
//! snake_case: starting with `[a-z]` and containing only `[a-z0-9_]`, plus a
//! lowercase extension for files.
//!
//! ## Conversion Rules
//!
//! - The extension (after the last `.`) is split off and lowercased
//! - `,` `-` `_` become word separators
//! - Any other character that is not an ASCII letter, digit, or whitespace is dropped
//! - Words are lowercased and joined with `_`
//! - A leading digit gets an `n` prefix: `24-hours` → `n24_hours`
//! - An empty result becomes `unnamed`
//!
//! Examples:
//! - `"Arrows, Action"` → `"arrows_action"`
//! - `"Arrow Up-Bold.SVG"` → `"arrow_up_bold.svg"`
//! - `"3D Box.svg"` → `"n3d_box.svg"`
//! - `"(!).svg"` → `"unnamed.svg"`

/// Convert a single path component to snake_case.
pub fn to_snake_case(name: &str) -> String {
    let (base, extension) = match name.rsplit_once('.') {
        Some((base, ext)) => (base, ext),
        None => (name, ""),
    };

    let mut cleaned = String::with_capacity(base.len());
    for c in base.chars() {
        match c {
            ',' | '-' | '_' => cleaned.push(' '),
            c if c.is_ascii_alphanumeric() => cleaned.push(c.to_ascii_lowercase()),
            c if c.is_whitespace() => cleaned.push(' '),
            _ => {}
        }
    }

    let mut snake = cleaned.split_whitespace().collect::<Vec<_>>().join("_");

    if snake.starts_with(|c: char| c.is_ascii_digit()) {
        snake.insert(0, 'n');
    }
    if snake.is_empty() {
        snake.push_str("unnamed");
    }

    if extension.is_empty() {
        snake
    } else {
        format!("{snake}.{}", extension.to_lowercase())
    }
}
