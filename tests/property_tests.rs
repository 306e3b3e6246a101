//! Property tests for the pour engine.
//!
//! Boards come from the level generator with random options and seeds; each
//! case then fires a random sequence of pour attempts, legal or not.

use liquid_sort::rules::evaluate_pour;
use liquid_sort::{
    apply_pour, check_win, generate_level, is_stuck, outcome, BottleId, GameRng, GameState,
    LevelOptions, Outcome,
};
use proptest::prelude::*;

fn board() -> impl Strategy<Value = GameState> {
    (1usize..=6, 1usize..=5, 0usize..=3, any::<u64>()).prop_map(
        |(num_colors, slots, empty, seed)| {
            let options = LevelOptions::new(num_colors, slots, empty);
            generate_level(&options, &mut GameRng::new(seed)).unwrap()
        },
    )
}

fn attempts() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..10, 0usize..10), 0..60)
}

/// Brute-force deadlock check over every ordered pair.
fn no_pair_allowed(state: &GameState) -> bool {
    let ids: Vec<BottleId> = state.bottle_ids().collect();
    ids.iter().all(|&i| {
        ids.iter()
            .all(|&j| i == j || !evaluate_pour(state.bottles(), i, j).allowed)
    })
}

proptest! {
    #[test]
    fn prop_segments_conserved(mut state in board(), moves in attempts()) {
        let total = state.total_segments();
        let counts = state.color_counts();
        for (s, t) in moves {
            apply_pour(state.bottles_mut(), BottleId::new(s), BottleId::new(t));
            prop_assert_eq!(state.total_segments(), total);
        }
        prop_assert_eq!(state.color_counts(), counts);
    }

    #[test]
    fn prop_capacity_never_exceeded(mut state in board(), moves in attempts()) {
        for (s, t) in moves {
            apply_pour(state.bottles_mut(), BottleId::new(s), BottleId::new(t));
            for bottle in state.bottles() {
                prop_assert!(bottle.len() <= bottle.capacity());
            }
        }
    }

    #[test]
    fn prop_failed_pour_is_noop(mut state in board(), moves in attempts()) {
        for (s, t) in moves {
            let (source, target) = (BottleId::new(s), BottleId::new(t));
            let preview = evaluate_pour(state.bottles(), source, target);
            let before = state.clone();
            let result = apply_pour(state.bottles_mut(), source, target);

            prop_assert_eq!(result.success, preview.allowed);
            prop_assert_eq!(result.units_poured, preview.units);
            if !preview.allowed {
                prop_assert_eq!(result.units_poured, 0);
                prop_assert_eq!(&state, &before);
            }
        }
    }

    #[test]
    fn prop_stuck_iff_no_pair_allowed(mut state in board(), moves in attempts()) {
        for (s, t) in moves {
            apply_pour(state.bottles_mut(), BottleId::new(s), BottleId::new(t));
            prop_assert_eq!(is_stuck(state.bottles()), no_pair_allowed(&state));
        }
    }

    #[test]
    fn prop_won_is_never_stuck(mut state in board(), moves in attempts()) {
        for (s, t) in moves {
            apply_pour(state.bottles_mut(), BottleId::new(s), BottleId::new(t));
        }
        let result = outcome(state.bottles());
        prop_assert_eq!(result == Outcome::Won, check_win(state.bottles()));
        if check_win(state.bottles()) {
            prop_assert_ne!(result, Outcome::Stuck);
        }
    }

    #[test]
    fn prop_json_roundtrip(state in board()) {
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(serde_json::to_string(&restored).unwrap(), json);
        prop_assert_eq!(restored, state);
    }
}
