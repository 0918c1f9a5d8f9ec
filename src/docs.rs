//! Per-vehicle documentation link derivation.
//!
//! ArduPilot publishes one parameter reference page per vehicle family; each
//! parameter is addressable there through a fragment anchor derived from its
//! name. Link derivation is a pure function: no network access, no caching,
//! and identical input always yields identical URLs.

use crate::error::{Error, Result};

/// The five ArduPilot vehicle families with published parameter references,
/// in their fixed presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleFamily {
    Plane,
    Copter,
    Rover,
    Sub,
    AntennaTracker,
}

impl VehicleFamily {
    /// All families in presentation order.
    pub const ALL: [VehicleFamily; 5] = [
        VehicleFamily::Plane,
        VehicleFamily::Copter,
        VehicleFamily::Rover,
        VehicleFamily::Sub,
        VehicleFamily::AntennaTracker,
    ];

    /// Human-readable family name.
    pub fn label(&self) -> &'static str {
        match self {
            VehicleFamily::Plane => "Plane",
            VehicleFamily::Copter => "Copter",
            VehicleFamily::Rover => "Rover",
            VehicleFamily::Sub => "Sub",
            VehicleFamily::AntennaTracker => "AntennaTracker",
        }
    }

    /// Base URL of this family's parameter reference page.
    pub fn base_url(&self) -> &'static str {
        match self {
            VehicleFamily::Plane => "https://ardupilot.org/plane/docs/parameters.html",
            VehicleFamily::Copter => "https://ardupilot.org/copter/docs/parameters.html",
            VehicleFamily::Rover => "https://ardupilot.org/rover/docs/parameters.html",
            VehicleFamily::Sub => "https://ardupilot.org/sub/docs/parameters.html",
            VehicleFamily::AntennaTracker => {
                "https://ardupilot.org/antennatracker/docs/parameters.html"
            }
        }
    }
}

/// Fragment anchor for a parameter name: lowercased, underscores replaced
/// with hyphens (e.g. `RC1_MIN` → `rc1-min`).
fn doc_anchor(parameter_name: &str) -> String {
    parameter_name.to_lowercase().replace('_', "-")
}

/// Documentation URLs for `parameter_name`, one per vehicle family, in the
/// fixed order Plane, Copter, Rover, Sub, AntennaTracker.
///
/// Fails with [`Error::InvalidArgument`] for an empty name; there are no
/// other failure modes.
pub fn doc_links(parameter_name: &str) -> Result<Vec<(VehicleFamily, String)>> {
    if parameter_name.is_empty() {
        return Err(Error::invalid_argument(
            "parameter name must not be empty",
        ));
    }
    let anchor = doc_anchor(parameter_name);
    Ok(VehicleFamily::ALL
        .iter()
        .map(|family| (*family, format!("{}#{}", family.base_url(), anchor)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_lowercases_and_hyphenates() {
        assert_eq!(doc_anchor("RC1_MIN"), "rc1-min");
        assert_eq!(doc_anchor("COMPASS_OFS_X"), "compass-ofs-x");
        assert_eq!(doc_anchor("ANGLE_MAX"), "angle-max");
    }

    #[test]
    fn test_doc_links_fixed_order_and_anchors() {
        let links = doc_links("RC1_MIN").unwrap();
        assert_eq!(links.len(), 5);

        let families: Vec<VehicleFamily> = links.iter().map(|(f, _)| *f).collect();
        assert_eq!(families, VehicleFamily::ALL);

        for (family, url) in &links {
            assert!(url.starts_with(family.base_url()));
            assert!(url.ends_with("#rc1-min"), "unexpected url {url}");
        }
    }

    #[test]
    fn test_doc_links_deterministic() {
        assert_eq!(doc_links("GPS_TYPE").unwrap(), doc_links("GPS_TYPE").unwrap());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(doc_links(""), Err(Error::InvalidArgument(_))));
    }
}
