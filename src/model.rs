use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Rgb
// ────────────────────────────────────────────────────────────────────────────

/// An RGB color triple used to classify parameter categories.
///
/// Color is a semantic attribute of a [`Category`], not a presentation-layer
/// color object; the UI decides how (and whether) to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a generic `"rgb(r, g, b)"` string suitable for stylesheets.
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Category
// ────────────────────────────────────────────────────────────────────────────

/// A parameter grouping label with an associated display color.
///
/// Categories are static configuration: registered once at startup via
/// [`crate::category::CategoryRegistry`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable classification key (e.g. `"rc"`, `"gps"`).
    pub identifier: String,
    pub color: Rgb,
}

impl Category {
    pub fn new(identifier: impl Into<String>, color: Rgb) -> Self {
        Self {
            identifier: identifier.into(),
            color,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Parameter
// ────────────────────────────────────────────────────────────────────────────

/// A named flight-controller configuration value.
///
/// `value` is the display representation as read from the parameter source;
/// no numeric semantics are enforced here. `category` holds a registry
/// identifier and resolves through the [`crate::category::CategoryRegistry`],
/// which degrades unknown identifiers to the default category rather than
/// failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Unique name within a catalog (e.g. `"RC1_MIN"`).
    pub name: String,
    /// Current value, display-only.
    pub value: String,
    /// Category registry identifier.
    pub category: String,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_string_formatting() {
        assert_eq!(Rgb::new(255, 128, 0).to_rgb_string(), "rgb(255, 128, 0)");
        assert_eq!(Rgb::BLACK.to_rgb_string(), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_parameter_roundtrips_through_json() {
        let p = Parameter::new("RC1_MIN", "1100", "rc");
        let json = serde_json::to_string(&p).unwrap();
        let back: Parameter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
