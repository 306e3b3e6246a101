//! Saved games.
//!
//! `SaveData` is the record a persistence layer stores between runs. It is
//! encoded as JSON; decoding re-checks every state invariant, and a record
//! that fails is rejected as a whole rather than repaired.

use serde::{Deserialize, Serialize};

use crate::core::{GameRngState, GameState};
use crate::error::SaveError;

/// Everything needed to resume a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    /// 1-based level index.
    pub current_level: u32,
    pub game_state: GameState,
    /// Generator state, so restarts after a restore stay deterministic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng: Option<GameRngState>,
}

impl SaveData {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode and validate.
    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        let data: SaveData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.current_level == 0 {
            return Err(SaveError::InvalidLevel);
        }
        self.game_state.validate()?;
        Ok(())
    }
}
