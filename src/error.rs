//! Error types.
//!
//! Gameplay rejections (illegal pours, clicks on the wrong bottle) are plain
//! values, not errors. The types here cover broken configuration and
//! corrupted state, which are only detected at construction or load time.

/// Errors raised while validating level configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("bottle capacity must be > 0")]
    ZeroCapacity,

    #[error("requested {requested} colors but the palette only has {available}")]
    PaletteExhausted { requested: usize, available: usize },

    #[error("difficulty curve invalid: {0}")]
    InvalidCurve(String),
}

/// Errors raised when a bottle or game state breaks an invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("bottle capacity must be > 0")]
    ZeroCapacity,

    #[error("bottle holds {len} segments but its capacity is {capacity}")]
    Overfilled { len: usize, capacity: usize },

    #[error("{used} extra bottles used, at most {max} allowed")]
    TooManyExtraBottles { used: u8, max: u8 },
}

/// Errors raised while decoding saved games.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to parse save data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("saved state is invalid: {0}")]
    InvalidState(#[from] StateError),

    #[error("saved level index must be >= 1")]
    InvalidLevel,
}

/// Errors raised when resuming a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Save(#[from] SaveError),
}
