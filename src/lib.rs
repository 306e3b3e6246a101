//! # liquid-sort
//!
//! State and rules engine for liquid-sort puzzles: colored segments stacked
//! in bottles are consolidated into single-color bottles by pouring.
//!
//! ## Design Principles
//!
//! 1. **Rules are pure functions**: `evaluate_pour` never mutates, and
//!    `apply_pour` either commits a whole pour or nothing.
//!
//! 2. **Bottles are addressed by ID**: a `BottleId` is a stable index into
//!    `GameState`; self-pours are detected by ID, not by contents.
//!
//! 3. **Rejections are values**: illegal moves come back as
//!    `allowed: false` / `success: false`. Only broken configuration or
//!    corrupted saves are errors.
//!
//! 4. **Plain data on the boundary**: every state type is serde-serializable
//!    and round-trips through JSON unchanged.
//!
//! ## Modules
//!
//! - `core`: Colors, bottles, game state, RNG, configuration
//! - `rules`: Pour engine and win/deadlock checks
//! - `level`: Randomized level generation
//! - `session`: Click-driven play, level progression, save/restore
//! - `error`: Configuration, state, and save errors
//!
//! ## Example
//!
//! ```
//! use liquid_sort::{BottleId, ClickOutcome, Session};
//!
//! let mut session = Session::with_seed(42).unwrap();
//! let first_filled = BottleId::new(0);
//! assert_eq!(session.click(first_filled), ClickOutcome::Selected(first_filled));
//! ```

pub mod core;
pub mod error;
pub mod level;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Bottle, BottleId, BottleShape, Color, DisplayMode,
    GameRng, GameRngState, GameState,
    DifficultyCurve, LevelOptions,
    EXTRA_BOTTLE_CAPACITY, MAX_EXTRA_BOTTLES, PALETTE,
};

pub use crate::error::{ConfigError, SaveError, SessionError, StateError};

pub use crate::level::generate_level;

pub use crate::rules::{
    apply_pour, check_win, evaluate_pour, is_stuck, outcome,
    Outcome, PourPreview, PourResult,
};

pub use crate::session::{ClickOutcome, SaveData, Session};
