//! Game state: the bottle collection and its counters.
//!
//! `GameState` is plain data. It derives `Serialize`/`Deserialize` so a
//! persistence layer can store it verbatim; rule functions in
//! [`crate::rules`] take its bottles by explicit reference.
//!
//! ## Segment conservation
//!
//! Pours move segments between bottles and never create or destroy them.
//! The only operation that changes the bottle set mid-level is
//! [`GameState::add_extra_bottle`], which adds capacity but no segments.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::bottle::{Bottle, BottleId, BottleShape, DisplayMode};
use super::color::Color;
use crate::error::StateError;

/// Extra bottles a player may add to one level.
pub const MAX_EXTRA_BOTTLES: u8 = 2;

/// Capacity of an extra bottle.
pub const EXTRA_BOTTLE_CAPACITY: usize = 1;

/// Complete puzzle state for one level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    bottles: Vec<Bottle>,
    move_count: u32,
    extra_bottles_used: u8,
    /// Special levels hide everything but each bottle's top run.
    #[serde(default)]
    special: bool,
}

impl GameState {
    /// Create a fresh state from a bottle layout.
    #[must_use]
    pub fn new(bottles: Vec<Bottle>) -> Self {
        Self {
            bottles,
            move_count: 0,
            extra_bottles_used: 0,
            special: false,
        }
    }

    // === Bottles ===

    #[must_use]
    pub fn bottles(&self) -> &[Bottle] {
        &self.bottles
    }

    /// Mutable view of the bottles. The slice cannot grow or shrink, so
    /// bottle IDs stay valid.
    pub fn bottles_mut(&mut self) -> &mut [Bottle] {
        &mut self.bottles
    }

    #[must_use]
    pub fn bottle(&self, id: BottleId) -> Option<&Bottle> {
        self.bottles.get(id.index())
    }

    #[must_use]
    pub fn bottle_count(&self) -> usize {
        self.bottles.len()
    }

    pub fn bottle_ids(&self) -> impl Iterator<Item = BottleId> {
        BottleId::all(self.bottles.len())
    }

    /// Total number of segments across all bottles.
    #[must_use]
    pub fn total_segments(&self) -> usize {
        self.bottles.iter().map(Bottle::len).sum()
    }

    /// Total number of slots across all bottles.
    #[must_use]
    pub fn total_capacity(&self) -> usize {
        self.bottles.iter().map(Bottle::capacity).sum()
    }

    /// Segment count per color.
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for segment in self.bottles.iter().flat_map(Bottle::segments) {
            *counts.entry(segment.clone()).or_insert(0) += 1;
        }
        counts
    }

    // === Moves ===

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Count one successful pour.
    pub fn record_move(&mut self) {
        self.move_count = self.move_count.saturating_add(1);
    }

    // === Extra bottles ===

    #[must_use]
    pub fn extra_bottles_used(&self) -> u8 {
        self.extra_bottles_used
    }

    #[must_use]
    pub fn extra_bottles_remaining(&self) -> u8 {
        MAX_EXTRA_BOTTLES.saturating_sub(self.extra_bottles_used)
    }

    /// Append an empty single-slot glass.
    ///
    /// Returns `None` once the per-level limit is reached.
    pub fn add_extra_bottle(&mut self) -> Option<BottleId> {
        if self.extra_bottles_used >= MAX_EXTRA_BOTTLES {
            return None;
        }
        let id = BottleId::new(self.bottles.len());
        self.bottles
            .push(Bottle::new(EXTRA_BOTTLE_CAPACITY).with_shape(BottleShape::Glass));
        self.extra_bottles_used += 1;
        Some(id)
    }

    // === Special levels ===

    #[must_use]
    pub fn is_special(&self) -> bool {
        self.special
    }

    /// Mark the level special, hiding all bottles' contents below their top
    /// run. Clearing the flag restores normal display.
    pub fn set_special(&mut self, special: bool) {
        self.special = special;
        let display = if special {
            DisplayMode::HiddenTopRun
        } else {
            DisplayMode::Normal
        };
        for bottle in &mut self.bottles {
            bottle.set_display(display);
        }
    }

    /// Check invariants that deserialization alone cannot enforce.
    ///
    /// Bottle capacities are already checked when each bottle is decoded.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.extra_bottles_used > MAX_EXTRA_BOTTLES {
            return Err(StateError::TooManyExtraBottles {
                used: self.extra_bottles_used,
                max: MAX_EXTRA_BOTTLES,
            });
        }
        Ok(())
    }
}
