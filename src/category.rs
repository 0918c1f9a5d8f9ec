//! Category registry: identifier → display color.
//!
//! Categories are static configuration, registered once at startup and
//! immutable afterwards. Resolution never fails: parameter sources may
//! reference categories the registry does not know about yet, and those
//! degrade to the default (black) category instead of erroring.

use crate::error::{Error, Result};
use crate::model::{Category, Rgb};
use indexmap::IndexMap;

/// Default identifier returned for unknown categories and used by the
/// importer for names it cannot classify.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Registry of known [`Category`] entries.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: IndexMap<String, Category>,
    default: Category,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            categories: IndexMap::new(),
            default: Category::new(UNCATEGORIZED, Rgb::BLACK),
        }
    }
}

impl CategoryRegistry {
    /// Create an empty registry (only the default category resolves).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the common ArduPilot parameter groups,
    /// each with a stable display color.
    pub fn with_default_palette() -> Self {
        let mut reg = Self::new();
        for &(identifier, r, g, b) in DEFAULT_PALETTE {
            // Palette entries are hardcoded in-range, so this cannot fail.
            let _ = reg.register(identifier, r, g, b);
        }
        reg
    }

    /// Register a category with the given color channels.
    ///
    /// Channels are taken as `i32` so out-of-range input is representable;
    /// anything outside 0–255 fails with [`Error::InvalidColor`].
    /// Re-registering an identifier fails with [`Error::InvalidArgument`]:
    /// categories are loaded once and stay stable for the process lifetime.
    pub fn register(&mut self, identifier: impl Into<String>, r: i32, g: i32, b: i32) -> Result<()> {
        let identifier = identifier.into();
        let in_range = |c: i32| (0..=255).contains(&c);
        if !(in_range(r) && in_range(g) && in_range(b)) {
            return Err(Error::InvalidColor { identifier, r, g, b });
        }
        if self.categories.contains_key(&identifier) {
            return Err(Error::invalid_argument(format!(
                "category '{identifier}' is already registered"
            )));
        }
        let color = Rgb::new(r as u8, g as u8, b as u8);
        self.categories
            .insert(identifier.clone(), Category::new(identifier, color));
        Ok(())
    }

    /// Resolve an identifier to its category, or the default category if
    /// unknown. Never fails.
    pub fn resolve(&self, identifier: &str) -> &Category {
        self.categories.get(identifier).unwrap_or(&self.default)
    }

    /// The default "uncategorized" category.
    pub fn default_category(&self) -> &Category {
        &self.default
    }

    /// Number of registered categories (excluding the default).
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if no categories have been registered.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Stable colors for the common ArduPilot parameter groups.
const DEFAULT_PALETTE: &[(&str, i32, i32, i32)] = &[
    ("rc", 86, 156, 214),
    ("servo", 78, 201, 176),
    ("batt", 220, 170, 80),
    ("gps", 181, 206, 168),
    ("compass", 197, 134, 192),
    ("ahrs", 156, 220, 254),
    ("ins", 215, 186, 125),
    ("ek", 78, 154, 214),
    ("arming", 206, 145, 120),
    ("mot", 255, 123, 114),
    ("atc", 126, 231, 135),
    ("psc", 255, 166, 87),
    ("wpnav", 121, 192, 255),
    ("fence", 210, 168, 255),
    ("log", 139, 148, 158),
    ("serial", 163, 190, 140),
];
