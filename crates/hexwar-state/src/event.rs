use hexwar_catalog::UnitKind;
use hexwar_core::{Hp, PlayerId, UnitId};
use hexwar_hex::Hex;
use serde::{Deserialize, Serialize};

/// Outcome of [`crate::MatchState::status`] once a match ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VictoryResult {
    #[serde(rename = "WIN")]
    Win,
    #[serde(rename = "DRAW")]
    Draw,
}

/// Something the tick engine produced this tick. Cleared at the start of
/// every tick and repopulated during phase execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    #[serde(rename = "COMBAT")]
    Combat {
        location: Hex,
        defender: PlayerId,
        damage_in: Hp,
        casualties: Vec<UnitId>,
    },
    #[serde(rename = "BUILD")]
    Build {
        location: Hex,
        kind: UnitKind,
        owner: PlayerId,
    },
    #[serde(rename = "RESEARCH")]
    Research { tech_id: String, owner: PlayerId },
    #[serde(rename = "ELIMINATION")]
    Elimination {
        result: VictoryResult,
        winner: Option<PlayerId>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    /// the wire tag is the canonical string label, not the Rust variant name
    #[test]
    fn combat_event_serializes_with_canonical_tag() {
        let event = Event::Research {
            tech_id: "INFANTRY_TIER_1".into(),
            owner: PlayerId::default(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "RESEARCH");
        assert_eq!(json["tech_id"], "INFANTRY_TIER_1");
    }
}
