//! Pour legality and execution.
//!
//! Evaluation and application are separate so a presentation layer can
//! preview a pour (to animate exactly the moving quantity) before the state
//! is committed. Both are keyed by `BottleId`; a self-pour is detected by
//! comparing IDs, never by comparing bottle contents.
//!
//! ```
//! use liquid_sort::core::{Bottle, BottleId, Color};
//! use liquid_sort::rules::{apply_pour, evaluate_pour};
//!
//! let r = Color::new("R");
//! let mut bottles = vec![
//!     Bottle::with_segments(4, [r.clone(), r.clone(), r.clone(), r.clone()]).unwrap(),
//!     Bottle::new(4),
//! ];
//!
//! let preview = evaluate_pour(&bottles, BottleId::new(0), BottleId::new(1));
//! assert!(preview.allowed);
//! assert_eq!(preview.units, 4);
//!
//! let result = apply_pour(&mut bottles, BottleId::new(0), BottleId::new(1));
//! assert!(result.success);
//! assert!(bottles[0].is_empty());
//! assert!(bottles[1].is_complete());
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Bottle, BottleId, Color};

/// Outcome of evaluating a pour without performing it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PourPreview {
    pub allowed: bool,
    /// Color that would move. `None` when not allowed.
    pub color: Option<Color>,
    /// Segments that would move. Zero when not allowed.
    pub units: usize,
}

impl PourPreview {
    fn denied() -> Self {
        Self::default()
    }
}

/// Outcome of performing a pour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PourResult {
    pub success: bool,
    pub units_poured: usize,
}

impl PourResult {
    /// The result of a rejected pour.
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            success: false,
            units_poured: 0,
        }
    }
}

/// Evaluate pouring from `source` into `target`.
///
/// Checks, in order, stopping at the first failure:
/// 1. `source != target`
/// 2. both IDs name a bottle
/// 3. source is not empty
/// 4. target is not full
/// 5. target can receive the source's top color
///
/// The unit count is the source's top run, bounded by the target's free space.
#[must_use]
pub fn evaluate_pour(bottles: &[Bottle], source: BottleId, target: BottleId) -> PourPreview {
    if source == target {
        return PourPreview::denied();
    }
    let (Some(from), Some(to)) = (bottles.get(source.index()), bottles.get(target.index())) else {
        return PourPreview::denied();
    };
    evaluate_between(from, to)
}

/// Evaluate a pour between two distinct bottles.
fn evaluate_between(source: &Bottle, target: &Bottle) -> PourPreview {
    if source.is_empty() || target.is_full() {
        return PourPreview::denied();
    }
    let Some(color) = source.top_color() else {
        return PourPreview::denied();
    };
    if !target.can_receive(color) {
        return PourPreview::denied();
    }

    PourPreview {
        allowed: true,
        color: Some(color.clone()),
        units: source.top_run_length().min(target.free_space()),
    }
}

/// Pour from `source` into `target`.
///
/// Rejected pours leave both bottles untouched and report zero units, so this
/// is safe to call speculatively. Move counting is the caller's job.
pub fn apply_pour(bottles: &mut [Bottle], source: BottleId, target: BottleId) -> PourResult {
    let preview = evaluate_pour(bottles, source, target);
    if !preview.allowed {
        return PourResult::failed();
    }

    // Distinct and in range: checked by evaluate_pour.
    let (from, to) = pair_mut(bottles, source.index(), target.index());
    for _ in 0..preview.units {
        // The moving run is monochrome and fits, so every push succeeds.
        if let Some(segment) = from.pop_top() {
            let pushed = to.push(segment);
            debug_assert!(pushed, "validated pour rejected a segment");
        }
    }

    PourResult {
        success: true,
        units_poured: preview.units,
    }
}

/// Whether any ordered pair of distinct bottles admits a pour.
#[must_use]
pub fn any_pour_allowed(bottles: &[Bottle]) -> bool {
    bottles.iter().enumerate().any(|(i, source)| {
        bottles
            .iter()
            .enumerate()
            .any(|(j, target)| i != j && evaluate_between(source, target).allowed)
    })
}

/// All currently legal pours as `(source, target, units)`.
#[must_use]
pub fn legal_pours(bottles: &[Bottle]) -> Vec<(BottleId, BottleId, usize)> {
    let ids: Vec<BottleId> = BottleId::all(bottles.len()).collect();
    let mut pours = Vec::new();
    for &source in &ids {
        for &target in &ids {
            let preview = evaluate_pour(bottles, source, target);
            if preview.allowed {
                pours.push((source, target, preview.units));
            }
        }
    }
    pours
}

/// Two mutable references into one slice. `a` and `b` must differ.
fn pair_mut(bottles: &mut [Bottle], a: usize, b: usize) -> (&mut Bottle, &mut Bottle) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = bottles.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = bottles.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
