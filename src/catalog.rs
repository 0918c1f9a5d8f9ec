//! Insertion-ordered parameter catalog.
//!
//! The catalog is the authoritative set of known parameters. Iteration order
//! is insertion order, which keeps UI layout and export output reproducible.
//! Lookups by name are O(1) expected.
//!
//! The catalog is single-owner by design: mutation goes through `&mut self`
//! and there is no internal locking. A concurrent embedding must synchronize
//! externally or work on cloned snapshots.

use crate::error::{Error, Result};
use crate::model::Parameter;
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::debug;

/// Insertion-ordered collection of [`Parameter`]s, unique by name.
#[derive(Debug, Clone, Default)]
pub struct ParameterCatalog {
    params: IndexMap<String, Parameter>,
}

impl ParameterCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-populate from `(name, value, category)` tuples.
    ///
    /// Atomic per call: duplicates — against existing entries or within the
    /// batch — are detected before any insertion, so a failing `load` leaves
    /// the catalog exactly as it was.
    pub fn load<I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String, String)>,
    {
        let entries: Vec<(String, String, String)> = entries.into_iter().collect();

        let mut batch_names: HashSet<&str> = HashSet::with_capacity(entries.len());
        for (name, _, _) in &entries {
            if name.is_empty() {
                return Err(Error::invalid_argument("parameter name must not be empty"));
            }
            if self.params.contains_key(name.as_str()) || !batch_names.insert(name.as_str()) {
                return Err(Error::duplicate(name));
            }
        }

        debug!(count = entries.len(), "loading parameters into catalog");
        for (name, value, category) in entries {
            self.params
                .insert(name.clone(), Parameter::new(name, value, category));
        }
        Ok(())
    }

    /// Register a single parameter. Same uniqueness and empty-name rules as
    /// [`ParameterCatalog::load`].
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid_argument("parameter name must not be empty"));
        }
        if self.params.contains_key(&name) {
            return Err(Error::duplicate(name));
        }
        self.params
            .insert(name.clone(), Parameter::new(name, value.into(), category.into()));
        Ok(())
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Result<&Parameter> {
        self.params.get(name).ok_or_else(|| Error::not_found(name))
    }

    /// Iterate over all parameters in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Parameter> {
        self.params.values()
    }

    /// Number of parameters in the catalog.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if the catalog holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, value: &str, cat: &str) -> (String, String, String) {
        (name.to_string(), value.to_string(), cat.to_string())
    }

    #[test]
    fn test_load_and_get() {
        let mut catalog = ParameterCatalog::new();
        catalog
            .load(vec![
                entry("RC1_MIN", "1100", "rc"),
                entry("RC1_MAX", "1900", "rc"),
            ])
            .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("RC1_MIN").unwrap().value, "1100");
    }

    #[test]
    fn test_get_unknown_fails() {
        let catalog = ParameterCatalog::new();
        assert!(matches!(
            catalog.get("MISSING"),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut catalog = ParameterCatalog::new();
        catalog
            .load(vec![
                entry("Z_LAST", "1", "z"),
                entry("A_FIRST", "2", "a"),
                entry("M_MIDDLE", "3", "m"),
            ])
            .unwrap();
        let names: Vec<&str> = catalog.all().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Z_LAST", "A_FIRST", "M_MIDDLE"]);
    }

    #[test]
    fn test_duplicate_in_batch_is_atomic() {
        let mut catalog = ParameterCatalog::new();
        let err = catalog
            .load(vec![
                entry("RC1_MIN", "1100", "rc"),
                entry("RC1_MIN", "1200", "rc"),
            ])
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateParameter { ref name } if name == "RC1_MIN"));
        assert!(catalog.is_empty(), "failed load must not partially apply");
    }

    #[test]
    fn test_duplicate_against_existing_is_atomic() {
        let mut catalog = ParameterCatalog::new();
        catalog.load(vec![entry("RC1_MIN", "1100", "rc")]).unwrap();
        let err = catalog
            .load(vec![
                entry("GPS_TYPE", "1", "gps"),
                entry("RC1_MIN", "1200", "rc"),
            ])
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateParameter { .. }));
        // The catalog keeps its pre-call state: no GPS_TYPE, old RC1_MIN value.
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("RC1_MIN").unwrap().value, "1100");
        assert!(catalog.get("GPS_TYPE").is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut catalog = ParameterCatalog::new();
        assert!(matches!(
            catalog.insert("", "1", "rc"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            catalog.load(vec![entry("", "1", "rc")]),
            Err(Error::InvalidArgument(_))
        ));
    }
}
