//! Selection tracking for parameter export.
//!
//! Tracks which parameters the operator has marked for extraction,
//! independent of any widget. Keeping this state outside the UI means it is
//! testable on its own and several views (e.g. a filtered list and the full
//! list) can share one selection without re-deriving it from checkbox state.
//!
//! # Usage
//!
//! ```rust,ignore
//! use paramex::selection::SelectionTracker;
//!
//! let mut sel = SelectionTracker::new();
//! sel.attach(&catalog);
//! sel.set_selected("RC1_MIN", false)?;
//! let names: Vec<&str> = sel.selected_names().collect();
//! ```

use crate::catalog::ParameterCatalog;
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Per-parameter selected/unselected flags, keyed by parameter name.
///
/// Entries mirror the catalog the tracker was attached to, in the same
/// insertion order. The tracker holds only names and booleans, never
/// parameter data, so attaching is cheap and detaching needs no cleanup.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    flags: IndexMap<String, bool>,
}

impl SelectionTracker {
    /// Create a tracker with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize one entry per catalog parameter, all selected.
    ///
    /// Replaces any previous state; matches the default-checked behavior of
    /// the parameter rows in the UI.
    pub fn attach(&mut self, catalog: &ParameterCatalog) {
        self.flags = catalog.all().map(|p| (p.name.clone(), true)).collect();
    }

    /// Set the flag for `name`, returning the previous value so callers can
    /// detect no-op toggles. Fails with [`Error::NotFound`] for untracked
    /// names.
    pub fn set_selected(&mut self, name: &str, selected: bool) -> Result<bool> {
        match self.flags.get_mut(name) {
            Some(flag) => {
                let previous = *flag;
                *flag = selected;
                Ok(previous)
            }
            None => Err(Error::not_found(name)),
        }
    }

    /// Whether `name` is currently selected. Fails with [`Error::NotFound`]
    /// for untracked names.
    pub fn is_selected(&self, name: &str) -> Result<bool> {
        self.flags
            .get(name)
            .copied()
            .ok_or_else(|| Error::not_found(name))
    }

    /// Currently selected names in catalog insertion order. This is the
    /// authoritative "what to export" view.
    pub fn selected_names(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(name, _)| name.as_str())
    }

    /// Mark every tracked parameter selected. Total and idempotent.
    pub fn select_all(&mut self) {
        for flag in self.flags.values_mut() {
            *flag = true;
        }
    }

    /// Mark every tracked parameter unselected. Total and idempotent.
    pub fn deselect_all(&mut self) {
        for flag in self.flags.values_mut() {
            *flag = false;
        }
    }

    /// Number of tracked parameters.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns true if no parameters are tracked.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Number of currently selected parameters.
    pub fn selected_count(&self) -> usize {
        self.flags.values().filter(|s| **s).count()
    }
}
