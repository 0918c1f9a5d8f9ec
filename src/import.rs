//! ArduPilot parameter file importer.
//!
//! Parses the plain-text parameter format ground stations export: one
//! `NAME,VALUE` pair per line (whitespace separation also accepted), with
//! `#` comment lines and blank lines skipped. The importer produces the
//! `(name, value, category)` tuples consumed by
//! [`crate::catalog::ParameterCatalog::load`]; it never touches the catalog
//! itself.

use crate::category::UNCATEGORIZED;
use crate::error::{Error, Result};
use camino::Utf8Path;
use tracing::debug;

/// Infer a category identifier from a parameter name: the text before the
/// first underscore, lowercased, with any trailing instance digits stripped
/// so numbered groups collapse (`RC1_MIN` and `RC12_MIN` are both `rc`,
/// `BATT2_CAPACITY` is `batt`). Names without an underscore fall back to the
/// default category.
pub fn infer_category(name: &str) -> String {
    match name.split_once('_') {
        Some((prefix, _)) => {
            let base = prefix.trim_end_matches(|c: char| c.is_ascii_digit());
            if base.is_empty() {
                UNCATEGORIZED.to_string()
            } else {
                base.to_lowercase()
            }
        }
        None => UNCATEGORIZED.to_string(),
    }
}

/// Parse parameter file text into `(name, value, category)` tuples.
///
/// Lines are split on the first `,`, falling back to the first whitespace
/// run. A non-comment line without a separator fails with
/// [`Error::ParamFileFormat`] carrying its 1-based line number.
pub fn parse_param_text(text: &str) -> Result<Vec<(String, String, String)>> {
    let mut entries = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (name, value) = split_line(line).ok_or_else(|| Error::ParamFileFormat {
            line: index + 1,
            message: format!("expected NAME,VALUE but got '{line}'"),
        })?;
        if name.is_empty() {
            return Err(Error::ParamFileFormat {
                line: index + 1,
                message: "empty parameter name".to_string(),
            });
        }
        let category = infer_category(name);
        entries.push((name.to_string(), value.to_string(), category));
    }
    Ok(entries)
}

/// Read and parse a parameter file from disk.
pub fn parse_param_file(path: impl AsRef<Utf8Path>) -> Result<Vec<(String, String, String)>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let entries = parse_param_text(&text)?;
    debug!(%path, count = entries.len(), "parsed parameter file");
    Ok(entries)
}

/// Split a parameter line into name and value at the first `,`, or at the
/// first whitespace run when no comma is present.
fn split_line(line: &str) -> Option<(&str, &str)> {
    if let Some((name, value)) = line.split_once(',') {
        return Some((name.trim(), value.trim()));
    }
    let (name, value) = line.split_once(char::is_whitespace)?;
    Some((name.trim(), value.trim()))
}
