//! Pour engine and terminal-state integration tests.
//!
//! These walk through the canonical puzzle scenarios end to end using only
//! the public API.

use liquid_sort::{
    apply_pour, check_win, evaluate_pour, is_stuck, outcome, Bottle, BottleId, Color, Outcome,
    PourPreview, PourResult,
};

fn c(code: &str) -> Color {
    Color::new(code)
}

fn bottle(capacity: usize, codes: &[&str]) -> Bottle {
    Bottle::with_segments(capacity, codes.iter().map(|&code| c(code))).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

/// A full monochrome bottle empties into an empty one and the board is won.
#[test]
fn test_full_bottle_into_empty_wins() {
    let mut bottles = vec![bottle(4, &["R", "R", "R", "R"]), Bottle::new(4)];
    let (source, target) = (BottleId::new(0), BottleId::new(1));

    assert_eq!(
        evaluate_pour(&bottles, source, target),
        PourPreview {
            allowed: true,
            color: Some(c("R")),
            units: 4,
        }
    );

    let result = apply_pour(&mut bottles, source, target);
    assert_eq!(
        result,
        PourResult {
            success: true,
            units_poured: 4,
        }
    );
    assert!(bottles[0].is_empty());
    assert_eq!(bottles[1].len(), 4);
    assert!(check_win(&bottles));
}

/// Free space in the target bounds the pour and completes the target.
#[test]
fn test_pour_completes_target() {
    let mut bottles = vec![bottle(4, &["R", "G"]), bottle(4, &["G", "G", "G"])];
    let (source, target) = (BottleId::new(0), BottleId::new(1));

    let preview = evaluate_pour(&bottles, source, target);
    assert!(preview.allowed);
    assert_eq!(preview.color, Some(c("G")));
    assert_eq!(preview.units, 1);

    apply_pour(&mut bottles, source, target);
    assert_eq!(bottles[0].segments(), &[c("R")]);
    assert_eq!(bottles[1].segments(), &[c("G"), c("G"), c("G"), c("G")]);
    assert!(bottles[1].is_complete());
}

/// Nothing can be poured out of an empty bottle.
#[test]
fn test_empty_source_never_allowed() {
    let targets = [Bottle::new(4), bottle(4, &["R"]), bottle(4, &["R", "R", "R", "R"])];
    for target in targets {
        let bottles = vec![Bottle::new(4), target];
        let preview = evaluate_pour(&bottles, BottleId::new(0), BottleId::new(1));
        assert!(!preview.allowed);
        assert_eq!(preview.units, 0);
        assert_eq!(preview.color, None);
    }
}

/// Run length counts from the top: top-to-bottom [A, A, A, B] gives 3.
#[test]
fn test_top_run_length_from_top() {
    let b = bottle(4, &["B", "A", "A", "A"]);
    assert_eq!(b.top_run_length(), 3);
}

// =============================================================================
// Multi-step play
// =============================================================================

/// Sort a small board by hand and watch the outcome change.
#[test]
fn test_solve_small_board() {
    let mut bottles = vec![
        bottle(2, &["R", "G"]),
        bottle(2, &["G", "R"]),
        Bottle::new(2),
    ];
    assert_eq!(outcome(&bottles), Outcome::InProgress);

    let moves = [(0, 2), (1, 0), (1, 2)];
    for (source, target) in moves {
        let result = apply_pour(&mut bottles, BottleId::new(source), BottleId::new(target));
        assert!(result.success, "pour {source} -> {target} should succeed");
    }

    // Bottle 0: [R, R], bottle 1: [], bottle 2: [G, G]
    assert!(bottles[0].is_complete());
    assert!(bottles[1].is_empty());
    assert!(bottles[2].is_complete());
    assert_eq!(outcome(&bottles), Outcome::Won);
}

/// A non-winning board with no legal pour is stuck.
#[test]
fn test_stuck_board() {
    let bottles = vec![
        bottle(3, &["R", "G", "B"]),
        bottle(3, &["G", "B", "R"]),
        bottle(3, &["B", "R", "G"]),
    ];
    assert!(!check_win(&bottles));
    assert!(is_stuck(&bottles));
    assert_eq!(outcome(&bottles), Outcome::Stuck);
}

/// Rejected pours can be retried freely without side effects.
#[test]
fn test_speculative_pours_are_harmless() {
    let mut bottles = vec![bottle(3, &["R", "G"]), bottle(3, &["B"])];
    let before = bottles.clone();
    for _ in 0..3 {
        assert_eq!(
            apply_pour(&mut bottles, BottleId::new(0), BottleId::new(1)),
            PourResult::failed()
        );
        assert_eq!(
            apply_pour(&mut bottles, BottleId::new(0), BottleId::new(0)),
            PourResult::failed()
        );
    }
    assert_eq!(bottles, before);
}
