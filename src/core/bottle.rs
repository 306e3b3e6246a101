//! Bottles: fixed-capacity stacks of liquid segments.
//!
//! ## Layout
//!
//! Segments are stored bottom-first: `segments()[0]` is the bottom of the
//! bottle and the last element is the top, the first segment to be poured out.
//!
//! ## Invariant
//!
//! `len() <= capacity()` at all times. Every constructor and mutator keeps it,
//! and deserialization rejects records that break it instead of truncating.
//!
//! ```
//! use liquid_sort::core::{Bottle, Color};
//!
//! let red = Color::new("#FF0000");
//! let mut bottle = Bottle::new(4);
//! assert!(bottle.push(red.clone()));
//! assert!(bottle.push(red.clone()));
//! assert_eq!(bottle.top_run_length(), 2);
//! assert!(!bottle.push(Color::new("#00FF00"))); // top is red
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use crate::error::StateError;

/// Stable handle of a bottle within a `GameState`.
///
/// Bottles are never removed or reordered during a level, so the index of a
/// bottle identifies it for the lifetime of the level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BottleId(pub usize);

impl BottleId {
    /// Create a new bottle ID.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw index into the bottle list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Iterate over all bottle IDs for a state with `count` bottles.
    pub fn all(count: usize) -> impl Iterator<Item = BottleId> {
        (0..count).map(BottleId)
    }
}

impl std::fmt::Display for BottleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bottle({})", self.0)
    }
}

/// How a bottle's contents are presented. Never affects pour legality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Every segment is visible.
    #[default]
    Normal,
    /// Only the top run is visible; the rest of the stack is concealed.
    HiddenTopRun,
}

/// Physical shape of a bottle. Never affects pour legality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BottleShape {
    /// A regular level bottle.
    #[default]
    Bottle,
    /// A small glass granted by the extra-bottle power-up.
    Glass,
}

/// An ordered stack of segments with fixed capacity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BottleRecord", into = "BottleRecord")]
pub struct Bottle {
    capacity: usize,
    /// Bottom first; top = last element.
    segments: SmallVec<[Color; 4]>,
    display: DisplayMode,
    shape: BottleShape,
}

impl Bottle {
    /// Create an empty bottle.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`Bottle::with_segments`] for
    /// capacities coming from untrusted input.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Bottle capacity must be > 0");

        Self {
            capacity,
            segments: SmallVec::new(),
            display: DisplayMode::Normal,
            shape: BottleShape::Bottle,
        }
    }

    /// Create a bottle pre-filled with `segments` (bottom first).
    ///
    /// Segments are placed as given, without the single-color rule that
    /// [`Bottle::push`] applies; shuffled level layouts need mixed stacks.
    pub fn with_segments(
        capacity: usize,
        segments: impl IntoIterator<Item = Color>,
    ) -> Result<Self, StateError> {
        if capacity == 0 {
            return Err(StateError::ZeroCapacity);
        }
        let segments: SmallVec<[Color; 4]> = segments.into_iter().collect();
        if segments.len() > capacity {
            return Err(StateError::Overfilled {
                len: segments.len(),
                capacity,
            });
        }

        Ok(Self {
            capacity,
            segments,
            display: DisplayMode::Normal,
            shape: BottleShape::Bottle,
        })
    }

    /// Set the display mode.
    #[must_use]
    pub fn with_display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    /// Set the bottle shape.
    #[must_use]
    pub fn with_shape(mut self, shape: BottleShape) -> Self {
        self.shape = shape;
        self
    }

    // === Queries ===

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of segments currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.segments.len() == self.capacity
    }

    /// Number of free slots.
    #[must_use]
    pub fn free_space(&self) -> usize {
        self.capacity - self.segments.len()
    }

    /// All segments, bottom first.
    #[must_use]
    pub fn segments(&self) -> &[Color] {
        &self.segments
    }

    #[must_use]
    pub fn display(&self) -> DisplayMode {
        self.display
    }

    pub fn set_display(&mut self, display: DisplayMode) {
        self.display = display;
    }

    #[must_use]
    pub fn shape(&self) -> BottleShape {
        self.shape
    }

    /// The top segment, or `None` if the bottle is empty.
    #[must_use]
    pub fn top_color(&self) -> Option<&Color> {
        self.segments.last()
    }

    /// Count of consecutive segments from the top sharing the top color.
    ///
    /// Zero for an empty bottle. This is the most a single pour can move.
    #[must_use]
    pub fn top_run_length(&self) -> usize {
        let Some(top) = self.top_color() else {
            return 0;
        };
        self.segments
            .iter()
            .rev()
            .take_while(|segment| *segment == top)
            .count()
    }

    /// Segments a renderer should show, bottom first.
    ///
    /// `HiddenTopRun` bottles reveal only their top run.
    #[must_use]
    pub fn visible_segments(&self) -> &[Color] {
        match self.display {
            DisplayMode::Normal => &self.segments,
            DisplayMode::HiddenTopRun => {
                let hidden = self.segments.len() - self.top_run_length();
                &self.segments[hidden..]
            }
        }
    }

    /// Whether `color` can be poured on top of this bottle.
    ///
    /// False if full, true if empty, otherwise true iff the top matches.
    #[must_use]
    pub fn can_receive(&self, color: &Color) -> bool {
        if self.is_full() {
            return false;
        }
        match self.top_color() {
            None => true,
            Some(top) => top == color,
        }
    }

    /// Full and monochrome. An empty bottle is never complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_full() && self.top_run_length() == self.capacity
    }

    // === Mutation ===

    /// Push a segment if [`Bottle::can_receive`] allows it.
    ///
    /// Returns false and leaves the bottle untouched otherwise.
    pub fn push(&mut self, color: Color) -> bool {
        if !self.can_receive(&color) {
            return false;
        }
        self.segments.push(color);
        true
    }

    /// Remove and return the top segment.
    pub fn pop_top(&mut self) -> Option<Color> {
        self.segments.pop()
    }
}

/// Plain record used on the serialization boundary.
#[derive(Serialize, Deserialize)]
struct BottleRecord {
    capacity: usize,
    segments: Vec<Color>,
    #[serde(default)]
    display: DisplayMode,
    #[serde(default)]
    shape: BottleShape,
}

impl TryFrom<BottleRecord> for Bottle {
    type Error = StateError;

    fn try_from(record: BottleRecord) -> Result<Self, Self::Error> {
        Ok(Bottle::with_segments(record.capacity, record.segments)?
            .with_display(record.display)
            .with_shape(record.shape))
    }
}

impl From<Bottle> for BottleRecord {
    fn from(bottle: Bottle) -> Self {
        Self {
            capacity: bottle.capacity,
            segments: bottle.segments.into_vec(),
            display: bottle.display,
            shape: bottle.shape,
        }
    }
}
