//! Level configuration.
//!
//! - `LevelOptions`: the shape of one generated level
//! - `DifficultyCurve`: maps a level index to `LevelOptions`, and decides
//!   which levels are "special" (hidden contents)
//!
//! Both deserialize with `#[serde(default)]`, so partial configuration
//! documents fill in the remaining fields from the defaults.

use serde::{Deserialize, Serialize};

use super::color::PALETTE;
use crate::error::ConfigError;

/// Parameters for a single generated level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelOptions {
    /// Number of distinct colors, one filled bottle each.
    pub num_colors: usize,
    /// Capacity of every level bottle.
    pub slots_per_bottle: usize,
    /// Extra empty bottles appended after the filled ones.
    pub empty_bottles: usize,
}

impl Default for LevelOptions {
    fn default() -> Self {
        Self {
            num_colors: 4,
            slots_per_bottle: 4,
            empty_bottles: 2,
        }
    }
}

impl LevelOptions {
    /// Create level options.
    #[must_use]
    pub const fn new(num_colors: usize, slots_per_bottle: usize, empty_bottles: usize) -> Self {
        Self {
            num_colors,
            slots_per_bottle,
            empty_bottles,
        }
    }

    /// Total bottle count of a level generated from these options.
    #[must_use]
    pub const fn bottle_count(&self) -> usize {
        self.num_colors + self.empty_bottles
    }

    /// Reject options the generator cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slots_per_bottle == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.num_colors > PALETTE.len() {
            return Err(ConfigError::PaletteExhausted {
                requested: self.num_colors,
                available: PALETTE.len(),
            });
        }
        Ok(())
    }
}

/// Level-index driven difficulty policy.
///
/// Colors and slots grow by one every `colors_every` / `slots_every` levels
/// and are clamped at their maximums. With the defaults:
///
/// ```
/// use liquid_sort::core::DifficultyCurve;
///
/// let curve = DifficultyCurve::default();
/// assert_eq!(curve.options_for(1).num_colors, 4);
/// assert_eq!(curve.options_for(3).num_colors, 5);
/// assert_eq!(curve.options_for(5).slots_per_bottle, 5);
/// assert!(curve.is_special(5));
/// assert!(!curve.is_special(6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyCurve {
    pub base_colors: usize,
    pub colors_every: u32,
    pub max_colors: usize,
    pub base_slots: usize,
    pub slots_every: u32,
    pub max_slots: usize,
    pub empty_bottles: usize,
    /// Every n-th level hides bottle contents. 0 disables special levels.
    pub special_every: u32,
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self {
            base_colors: 4,
            colors_every: 3,
            max_colors: 10,
            base_slots: 4,
            slots_every: 5,
            max_slots: 10,
            empty_bottles: 2,
            special_every: 5,
        }
    }
}

impl DifficultyCurve {
    /// Level options for a 1-based level index.
    ///
    /// A zero step disables growth for that dimension.
    #[must_use]
    pub fn options_for(&self, level: u32) -> LevelOptions {
        let colors = self.base_colors + level.checked_div(self.colors_every).unwrap_or(0) as usize;
        let slots = self.base_slots + level.checked_div(self.slots_every).unwrap_or(0) as usize;
        LevelOptions {
            num_colors: colors.min(self.max_colors),
            slots_per_bottle: slots.min(self.max_slots),
            empty_bottles: self.empty_bottles,
        }
    }

    /// Whether `level` is a special (hidden contents) level.
    #[must_use]
    pub fn is_special(&self, level: u32) -> bool {
        self.special_every != 0 && level % self.special_every == 0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors_every == 0 || self.slots_every == 0 {
            return Err(ConfigError::InvalidCurve(
                "colors_every and slots_every must be > 0".into(),
            ));
        }
        if self.base_colors > self.max_colors || self.base_slots > self.max_slots {
            return Err(ConfigError::InvalidCurve(
                "base values must not exceed their maximums".into(),
            ));
        }
        if self.base_slots == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.max_colors > PALETTE.len() {
            return Err(ConfigError::PaletteExhausted {
                requested: self.max_colors,
                available: PALETTE.len(),
            });
        }
        Ok(())
    }
}
