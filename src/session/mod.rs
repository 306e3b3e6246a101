//! Interactive sessions.
//!
//! A `Session` drives one player through a sequence of levels. It owns the
//! `GameState` and implements the input contract of the presentation layer:
//! bottles are clicked one at a time, the first click selects a source and
//! the second pours into a target.
//!
//! ## Selection rules
//!
//! - Nothing selected: a non-empty bottle becomes selected; empty ones are
//!   ignored.
//! - Clicking the selected bottle again deselects it.
//! - Clicking another bottle attempts the pour. A legal pour is applied and
//!   counted; an illegal one drops the selection and selects the clicked
//!   bottle instead (if it has anything to pour).
//!
//! Once a level is won, further clicks are ignored until the caller
//! advances or restarts.

pub mod save;

pub use save::SaveData;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{BottleId, DifficultyCurve, GameRng, GameState};
use crate::error::{ConfigError, SessionError};
use crate::level::generate_level;
use crate::rules::{apply_pour, evaluate_pour, outcome, Outcome, PourPreview, PourResult};

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// The bottle is now the pour source.
    Selected(BottleId),
    /// The selected bottle was clicked again.
    Deselected,
    /// A pour was applied and counted.
    Poured {
        source: BottleId,
        target: BottleId,
        result: PourResult,
        outcome: Outcome,
    },
    /// The pour was illegal. The clicked bottle is selected if non-empty.
    Rejected { reselected: Option<BottleId> },
    /// Nothing changed (unknown or empty bottle, or the level is over).
    Ignored,
}

/// One player's run through the levels.
#[derive(Clone, Debug)]
pub struct Session {
    state: GameState,
    level: u32,
    curve: DifficultyCurve,
    rng: GameRng,
    selected: Option<BottleId>,
}

impl Session {
    /// Start at level 1.
    pub fn new(curve: DifficultyCurve, rng: GameRng) -> Result<Self, ConfigError> {
        curve.validate()?;
        let mut session = Self {
            state: GameState::new(Vec::new()),
            level: 1,
            curve,
            rng,
            selected: None,
        };
        session.start_level()?;
        Ok(session)
    }

    /// Start at level 1 with the default curve and a fixed seed.
    pub fn with_seed(seed: u64) -> Result<Self, ConfigError> {
        Self::new(DifficultyCurve::default(), GameRng::new(seed))
    }

    /// Resume from saved data.
    ///
    /// The save is validated again, since its fields are public and it may
    /// have been decoded without [`SaveData::from_json`]. The saved RNG state
    /// is used if present; otherwise `rng` is.
    pub fn from_save(save: SaveData, curve: DifficultyCurve, rng: GameRng) -> Result<Self, SessionError> {
        curve.validate()?;
        save.validate()?;
        Ok(Self::resume(save, curve, rng))
    }

    /// Resume from a JSON save, or start fresh if the save is unusable.
    pub fn restore_or_new(json: &str, curve: DifficultyCurve, rng: GameRng) -> Result<Self, ConfigError> {
        curve.validate()?;
        match SaveData::from_json(json) {
            Ok(save) => Ok(Self::resume(save, curve, rng)),
            Err(err) => {
                warn!(error = %err, "discarding saved game, starting a new one");
                Self::new(curve, rng)
            }
        }
    }

    fn resume(save: SaveData, curve: DifficultyCurve, rng: GameRng) -> Self {
        let rng = save.rng.as_ref().map_or(rng, GameRng::from_state);
        info!(level = save.current_level, "restored saved session");
        Self {
            state: save.game_state,
            level: save.current_level,
            curve,
            rng,
            selected: None,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// 1-based level index.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn curve(&self) -> &DifficultyCurve {
        &self.curve
    }

    #[must_use]
    pub fn selected(&self) -> Option<BottleId> {
        self.selected
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        outcome(self.state.bottles())
    }

    /// Preview pouring the selected bottle into `target`.
    #[must_use]
    pub fn preview(&self, target: BottleId) -> Option<PourPreview> {
        self.selected
            .map(|source| evaluate_pour(self.state.bottles(), source, target))
    }

    // === Input ===

    /// Handle a click on a bottle.
    pub fn click(&mut self, id: BottleId) -> ClickOutcome {
        let Some(bottle) = self.state.bottle(id) else {
            return ClickOutcome::Ignored;
        };
        if self.outcome() == Outcome::Won {
            return ClickOutcome::Ignored;
        }
        let clicked_empty = bottle.is_empty();

        match self.selected {
            None if clicked_empty => ClickOutcome::Ignored,
            None => {
                debug!(bottle = %id, "selected");
                self.selected = Some(id);
                ClickOutcome::Selected(id)
            }
            Some(source) if source == id => {
                debug!(bottle = %id, "deselected");
                self.selected = None;
                ClickOutcome::Deselected
            }
            Some(source) => {
                let result = self.pour(source, id);
                if result.success {
                    return ClickOutcome::Poured {
                        source,
                        target: id,
                        result,
                        outcome: self.outcome(),
                    };
                }
                self.selected = (!clicked_empty).then_some(id);
                ClickOutcome::Rejected {
                    reselected: self.selected,
                }
            }
        }
    }

    /// Pour directly, bypassing selection. Successful pours are counted and
    /// clear the selection.
    pub fn pour(&mut self, source: BottleId, target: BottleId) -> PourResult {
        let result = apply_pour(self.state.bottles_mut(), source, target);
        if result.success {
            self.state.record_move();
            self.selected = None;
            debug!(
                %source,
                %target,
                units = result.units_poured,
                moves = self.state.move_count(),
                "poured"
            );
        }
        result
    }

    /// Use the extra-bottle power-up. Clears the selection.
    pub fn add_extra_bottle(&mut self) -> Option<BottleId> {
        let id = self.state.add_extra_bottle()?;
        self.selected = None;
        debug!(bottle = %id, remaining = self.state.extra_bottles_remaining(), "added extra bottle");
        Some(id)
    }

    // === Level flow ===

    /// Regenerate the current level with a new layout.
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        self.start_level()
    }

    /// Move to the next level.
    pub fn advance_level(&mut self) -> Result<(), ConfigError> {
        self.level = self.level.saturating_add(1);
        self.start_level()
    }

    /// Snapshot for persistence.
    #[must_use]
    pub fn save_data(&self) -> SaveData {
        SaveData {
            current_level: self.level,
            game_state: self.state.clone(),
            rng: Some(self.rng.state()),
        }
    }

    fn start_level(&mut self) -> Result<(), ConfigError> {
        let options = self.curve.options_for(self.level);
        let mut state = generate_level(&options, &mut self.rng)?;
        let special = self.curve.is_special(self.level);
        state.set_special(special);

        info!(
            level = self.level,
            num_colors = options.num_colors,
            slots_per_bottle = options.slots_per_bottle,
            special,
            "started level"
        );
        self.state = state;
        self.selected = None;
        Ok(())
    }
}
