//! Core puzzle types: colors, bottles, state, RNG, configuration.
//!
//! These are plain data types. Rules that operate on them live in
//! [`crate::rules`]; level construction lives in [`crate::level`].

pub mod color;
pub mod bottle;
pub mod state;
pub mod rng;
pub mod config;

pub use color::{Color, PALETTE};
pub use bottle::{Bottle, BottleId, BottleShape, DisplayMode};
pub use state::{GameState, EXTRA_BOTTLE_CAPACITY, MAX_EXTRA_BOTTLES};
pub use rng::{GameRng, GameRngState};
pub use config::{DifficultyCurve, LevelOptions};
