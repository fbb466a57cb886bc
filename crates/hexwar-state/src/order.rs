use hexwar_catalog::UnitKind;
use hexwar_core::{FacilityId, UnitId};
use hexwar_hex::Hex;
use serde::{Deserialize, Serialize};

/// A player-submitted intent for the upcoming tick. A proper tagged enum,
/// not a struct with optional fields and runtime validators — each
/// variant carries exactly the fields it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Order {
    #[serde(rename = "MOVE")]
    Move { unit_id: UnitId, dest: Hex },
    #[serde(rename = "BUILD")]
    Build {
        facility_id: FacilityId,
        unit_kind: UnitKind,
    },
    #[serde(rename = "RESEARCH")]
    Research { tech_id: String },
}
