//! Selected-parameter exporter.
//!
//! Writes the currently selected subset back out in the plain `NAME,VALUE`
//! line format, in catalog insertion order. The selection tracker's
//! [`selected_names`](crate::selection::SelectionTracker::selected_names) is
//! the authoritative view of what gets exported.

use crate::catalog::ParameterCatalog;
use crate::error::Result;
use crate::selection::SelectionTracker;
use camino::Utf8Path;
use std::fmt::Write as _;
use tracing::info;

/// Render the selected parameters as parameter-file text.
///
/// One `NAME,VALUE` line per selected parameter, catalog insertion order.
/// Fails with [`crate::error::Error::NotFound`] if the tracker holds a name
/// the catalog does not (i.e. it was attached to a different catalog).
pub fn render_selected(
    catalog: &ParameterCatalog,
    selection: &SelectionTracker,
) -> Result<String> {
    let mut out = String::new();
    for name in selection.selected_names() {
        let param = catalog.get(name)?;
        // Infallible: writing to a String cannot fail.
        let _ = writeln!(out, "{},{}", param.name, param.value);
    }
    Ok(out)
}

/// Write the selected parameters to a file at `path`.
pub fn write_selected(
    path: impl AsRef<Utf8Path>,
    catalog: &ParameterCatalog,
    selection: &SelectionTracker,
) -> Result<()> {
    let path = path.as_ref();
    let text = render_selected(catalog, selection)?;
    std::fs::write(path, &text)?;
    info!(%path, count = selection.selected_count(), "wrote extracted parameters");
    Ok(())
}
