//! wayfare-tags: Static tag catalog for travel markers.
//!
//! Markers carry up to three tag ids; the first is the "primary" tag that
//! drives map-icon coloring and single-tag groupings. The catalog is fixed
//! at compile time and lookup is fail-soft: an unknown or empty id resolves
//! to the `default` sentinel instead of an error.

pub mod catalog;

pub use catalog::*;
