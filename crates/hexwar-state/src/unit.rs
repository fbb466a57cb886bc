use hexwar_catalog::{stats, UnitKind};
use hexwar_core::{Hp, Mp, PlayerId, UnitId, DEATH_THRESHOLD};
use hexwar_hex::Hex;

/// A unit present on the map. Mutated only by the tick engine.
///
/// # Fields
///
/// - `kind` — archetype, looked up in the catalog for base stats
/// - `position` — current hex
/// - `hp` — current hit points; unit is pruned once it falls to or below
///   [`DEATH_THRESHOLD`]
/// - `mp` — movement points remaining this tick
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    id: UnitId,
    owner: PlayerId,
    kind: UnitKind,
    position: Hex,
    hp: Hp,
    mp: Mp,
}

impl Unit {
    /// Spawns a fresh unit at full HP and full MP.
    pub fn spawn(owner: PlayerId, kind: UnitKind, position: Hex) -> Self {
        let s = stats(kind);
        Self {
            id: UnitId::default(),
            owner,
            kind,
            position,
            hp: s.max_hp,
            mp: s.max_mp,
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }
    pub fn owner(&self) -> PlayerId {
        self.owner
    }
    pub fn kind(&self) -> UnitKind {
        self.kind
    }
    pub fn position(&self) -> Hex {
        self.position
    }
    pub fn hp(&self) -> Hp {
        self.hp
    }
    pub fn mp(&self) -> Mp {
        self.mp
    }
    pub fn max_hp(&self) -> Hp {
        stats(self.kind).max_hp
    }

    pub fn set_position(&mut self, position: Hex) {
        self.position = position;
    }
    pub fn set_mp(&mut self, mp: Mp) {
        self.mp = mp;
    }
    /// Spends one MP on a successful move, floored at 0.
    pub fn spend_mp(&mut self) {
        self.mp = self.mp.saturating_sub(1);
    }
    /// Deducts `damage` from current HP, floored at 0.
    pub fn apply_damage(&mut self, damage: Hp) {
        self.hp = (self.hp - damage).max(0.0);
    }
    /// True once HP has fallen to or below the prune threshold.
    pub fn is_dead(&self) -> bool {
        self.hp <= DEATH_THRESHOLD
    }
}
