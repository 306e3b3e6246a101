//! Random level layouts.
//!
//! A level is a random permutation of `num_colors × slots_per_bottle`
//! segments, cut into `num_colors` full bottles, followed by
//! `empty_bottles` empty ones. Every color is present exactly
//! `slots_per_bottle` times, so the solved arrangement always exists;
//! reachability by legal pours is not checked.

use tracing::debug;

use crate::core::{Bottle, Color, GameRng, GameState, LevelOptions};
use crate::error::{ConfigError, StateError};

/// Build a shuffled level.
///
/// ```
/// use liquid_sort::core::{GameRng, LevelOptions};
/// use liquid_sort::level::generate_level;
///
/// let mut rng = GameRng::new(1);
/// let state = generate_level(&LevelOptions::default(), &mut rng).unwrap();
/// assert_eq!(state.bottle_count(), 6);
/// assert_eq!(state.total_segments(), 16);
/// ```
pub fn generate_level(options: &LevelOptions, rng: &mut GameRng) -> Result<GameState, ConfigError> {
    options.validate()?;
    let capacity = options.slots_per_bottle;

    let colors = Color::palette(options.num_colors).ok_or(ConfigError::PaletteExhausted {
        requested: options.num_colors,
        available: crate::core::PALETTE.len(),
    })?;

    let mut pool: Vec<Color> = colors
        .iter()
        .flat_map(|color| std::iter::repeat(color.clone()).take(capacity))
        .collect();
    rng.shuffle(&mut pool);

    let mut bottles = Vec::with_capacity(options.bottle_count());
    for chunk in pool.chunks(capacity) {
        bottles.push(Bottle::with_segments(capacity, chunk.iter().cloned()).map_err(zero_capacity)?);
    }
    bottles.extend((0..options.empty_bottles).map(|_| Bottle::new(capacity)));

    debug!(
        num_colors = options.num_colors,
        slots_per_bottle = capacity,
        empty_bottles = options.empty_bottles,
        "generated level layout"
    );

    Ok(GameState::new(bottles))
}

/// Chunks never exceed the capacity, so only a zero capacity can fail here,
/// and `validate` already rejected that.
fn zero_capacity(_: StateError) -> ConfigError {
    ConfigError::ZeroCapacity
}
