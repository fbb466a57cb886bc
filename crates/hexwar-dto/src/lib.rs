//! Wire shapes for the five external operations (`init_match`,
//! `start_match`, `submit_orders`, `get_state`, `get_match_config`). These
//! are dumb, public, serde-derived structs; conversions to/from internal
//! types live on the scheduler, not here.

use hexwar_core::{MatchId, PlayerId, Tick};
use hexwar_state::{Order, Resources};
use hexwar_view::MatchView;
use serde::{Deserialize, Serialize};

/// Request payload for `init_match`. Mirrors the original
/// `GameInitRequest`: a match id plus the seed resources granted to each
/// side. Maps to `POST /matches` in the reference FastAPI server.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchManifest {
    pub match_id: MatchId,
    pub initial_resources: Resources,
}

/// Request payload for `submit_orders`. `tick` is advisory only — see
/// `hexwar-dto`'s module doc. Maps to `POST /matches/{id}/orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderSubmission {
    pub tick: Tick,
    pub orders: Vec<Order>,
}

/// Response payload for `submit_orders`: how many of the submitted orders
/// were accepted into the buffer (all-or-nothing per spec: either every
/// order in the submission or none, since a rate-limit breach rejects the
/// whole batch).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OrderReceipt {
    pub accepted: usize,
}

/// Static per-match ruleset, unchanged for the lifetime of a match.
/// Mirrors the original `GameConstants`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GameConstants {
    pub def_constant: i32,
    pub max_rounds: u32,
}

impl Default for GameConstants {
    fn default() -> Self {
        Self {
            def_constant: hexwar_core::DEF_CONSTANT as i32,
            max_rounds: 3,
        }
    }
}

/// Response payload for `get_match_config`: everything a client needs
/// once, before it starts polling `get_state` every tick. Maps to
/// `GET /matches/{id}/config`.
#[derive(Debug, Clone, Serialize)]
pub struct MatchConfig {
    pub match_id: MatchId,
    pub viewer: Option<PlayerId>,
    pub map_radius: i32,
    pub constants: GameConstants,
}

/// Response payload for `get_state`: `V`'s projection, addressed by
/// match id for a client juggling more than one match. Maps to
/// `GET /matches/{id}/state`.
#[derive(Debug, Clone, Serialize)]
pub struct MatchStateResponse {
    pub match_id: MatchId,
    #[serde(flatten)]
    pub view: MatchView,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// the default ruleset matches the original's hardcoded constants
    #[test]
    fn default_constants_match_reference() {
        let constants = GameConstants::default();
        assert_eq!(constants.def_constant, 25);
        assert_eq!(constants.max_rounds, 3);
    }
}
