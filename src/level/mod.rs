//! Level generation.
//!
//! Difficulty policy (which options a given level index gets) lives in
//! [`DifficultyCurve`](crate::core::DifficultyCurve); this module only turns
//! options into a layout.

pub mod generator;

pub use generator::generate_level;
