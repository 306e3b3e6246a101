//! Terminal-state detection.

use serde::{Deserialize, Serialize};

use super::pour::any_pour_allowed;
use crate::core::Bottle;

/// Where a board stands after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every bottle is empty or complete.
    Won,
    /// Not won, and no pour is legal.
    Stuck,
    /// At least one legal pour remains.
    InProgress,
}

impl Outcome {
    /// Whether the level is over, either way.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// True iff every bottle is empty or complete.
#[must_use]
pub fn check_win(bottles: &[Bottle]) -> bool {
    bottles
        .iter()
        .all(|bottle| bottle.is_empty() || bottle.is_complete())
}

/// True iff no ordered pair of distinct bottles admits a pour.
///
/// Only meaningful when [`check_win`] is false; use [`outcome`] to get both
/// checks in the right order. O(n²) in the bottle count.
#[must_use]
pub fn is_stuck(bottles: &[Bottle]) -> bool {
    !any_pour_allowed(bottles)
}

/// Classify the board. A won board is never reported as stuck.
#[must_use]
pub fn outcome(bottles: &[Bottle]) -> Outcome {
    if check_win(bottles) {
        Outcome::Won
    } else if is_stuck(bottles) {
        Outcome::Stuck
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn bottle(capacity: usize, codes: &[&str]) -> Bottle {
        Bottle::with_segments(capacity, codes.iter().map(|&code| Color::new(code))).unwrap()
    }

    #[test]
    fn test_win_with_empty_bottles() {
        let bottles = vec![bottle(2, &["R", "R"]), Bottle::new(2), bottle(2, &["G", "G"])];
        assert!(check_win(&bottles));
        assert_eq!(outcome(&bottles), Outcome::Won);
    }

    #[test]
    fn test_all_empty_is_win() {
        assert!(check_win(&[Bottle::new(3), Bottle::new(3)]));
        assert!(check_win(&[]));
    }

    #[test]
    fn test_partial_bottle_blocks_win() {
        let bottles = vec![bottle(3, &["R", "R"]), bottle(3, &["R"])];
        assert!(!check_win(&bottles));
        assert_eq!(outcome(&bottles), Outcome::InProgress);
    }

    #[test]
    fn test_stuck() {
        let bottles = vec![bottle(2, &["R", "G"]), bottle(2, &["G", "R"])];
        assert!(!check_win(&bottles));
        assert!(is_stuck(&bottles));
        assert_eq!(outcome(&bottles), Outcome::Stuck);
        assert!(Outcome::Stuck.is_terminal());
    }

    #[test]
    fn test_won_board_is_not_reported_stuck() {
        // Every bottle complete: no pour is legal, yet the result is a win.
        let bottles = vec![bottle(2, &["R", "R"]), bottle(2, &["G", "G"])];
        assert!(is_stuck(&bottles));
        assert_eq!(outcome(&bottles), Outcome::Won);
    }

    #[test]
    fn test_in_progress_not_terminal() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Won.is_terminal());
    }
}
