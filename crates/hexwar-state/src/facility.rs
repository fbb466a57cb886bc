use hexwar_catalog::UnitKind;
use hexwar_core::{FacilityId, PlayerId};
use hexwar_hex::Hex;

/// A stationary build facility. Present for the lifetime of the match.
#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    id: FacilityId,
    owner: PlayerId,
    position: Hex,
    /// Build queue. Reserved per spec; no engine phase consults it.
    queue: Vec<UnitKind>,
}

impl Facility {
    pub fn new(owner: PlayerId, position: Hex) -> Self {
        Self {
            id: FacilityId::default(),
            owner,
            position,
            queue: Vec::new(),
        }
    }

    pub fn id(&self) -> FacilityId {
        self.id
    }
    pub fn owner(&self) -> PlayerId {
        self.owner
    }
    pub fn position(&self) -> Hex {
        self.position
    }
    pub fn queue(&self) -> &[UnitKind] {
        &self.queue
    }
}
