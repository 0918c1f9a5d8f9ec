//! Core model for an ArduPilot parameter extractor.
//!
//! This crate holds the state behind a parameter-extraction tool, kept
//! strictly separate from any UI:
//!
//! - [`catalog`] – Insertion-ordered catalog of parameters, unique by name
//! - [`category`] – Category registry mapping identifiers to display colors
//! - [`selection`] – Widget-independent selected/unselected tracking
//! - [`docs`] – Pure derivation of per-vehicle documentation URLs
//! - [`import`] / [`export`] – Parameter-file reading and selected-subset
//!   writing
//!
//! The binary `paramex` wraps these in a small CLI.

pub mod catalog;
pub mod category;
pub mod docs;
pub mod error;
pub mod export;
pub mod import;
pub mod model;
pub mod selection;

pub use catalog::ParameterCatalog;
pub use category::{CategoryRegistry, UNCATEGORIZED};
pub use docs::{VehicleFamily, doc_links};
pub use error::{Error, Result};
pub use export::{render_selected, write_selected};
pub use import::{infer_category, parse_param_file, parse_param_text};
pub use model::{Category, Parameter, Rgb};
pub use selection::SelectionTracker;
