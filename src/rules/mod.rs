//! Puzzle rules: pour legality, pour execution, terminal states.
//!
//! Rules are free functions over a bottle slice. They never touch counters,
//! persistence, or presentation; the caller (usually a
//! [`Session`](crate::session::Session)) does that after a move commits.

pub mod pour;
pub mod outcome;

pub use pour::{any_pour_allowed, apply_pour, evaluate_pour, legal_pours, PourPreview, PourResult};
pub use outcome::{check_win, is_stuck, outcome, Outcome};
