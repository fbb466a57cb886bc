//! Unit archetype parameters as plain data. No file I/O, no config crate:
//! balance changes are a recompile, not a load path, matching how the
//! rest of the workspace keeps tuning numbers as `pub const`s.

use hexwar_core::{Chips, Hp, Mp};
use serde::{Deserialize, Serialize};

/// Research tech id that boosts `LightInfantry` attack and defense by 10%.
pub const INFANTRY_TIER_1: &str = "INFANTRY_TIER_1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Chief,
    #[serde(rename = "Light Infantry")]
    LightInfantry,
    Scout,
    Armored,
    Mechanized,
    #[serde(rename = "Special Forces")]
    SpecialForces,
}

/// Resource cost to build a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cost {
    pub m: Chips,
    pub f: Chips,
    pub i: Chips,
}

/// Static per-kind stats, before any research modifier is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub max_hp: Hp,
    pub max_mp: Mp,
    pub base_atk: f32,
    pub base_def: f32,
    pub cost: Cost,
    pub upkeep_per_10: Chips,
}

const fn cost(m: Chips, f: Chips, i: Chips) -> Cost {
    Cost { m, f, i }
}

/// Looks up the base stats for a unit kind. This is the catalog (component C).
pub const fn stats(kind: UnitKind) -> Stats {
    match kind {
        UnitKind::Chief => Stats {
            max_hp: 150.0,
            max_mp: 1,
            base_atk: 12.0,
            base_def: 12.0,
            cost: cost(0, 0, 0),
            upkeep_per_10: 0,
        },
        UnitKind::LightInfantry => Stats {
            max_hp: 60.0,
            max_mp: 2,
            base_atk: 10.0,
            base_def: 6.0,
            cost: cost(40, 0, 0),
            upkeep_per_10: 0,
        },
        UnitKind::Scout => Stats {
            max_hp: 40.0,
            max_mp: 3,
            base_atk: 6.0,
            base_def: 4.0,
            cost: cost(60, 0, 0),
            upkeep_per_10: 0,
        },
        UnitKind::Armored => Stats {
            max_hp: 120.0,
            max_mp: 1,
            base_atk: 20.0,
            base_def: 16.0,
            cost: cost(120, 40, 0),
            upkeep_per_10: 4,
        },
        UnitKind::Mechanized => Stats {
            max_hp: 90.0,
            max_mp: 2,
            base_atk: 18.0,
            base_def: 12.0,
            cost: cost(140, 60, 0),
            upkeep_per_10: 6,
        },
        UnitKind::SpecialForces => Stats {
            max_hp: 80.0,
            max_mp: 2,
            base_atk: 14.0,
            base_def: 10.0,
            cost: cost(80, 0, 30),
            upkeep_per_10: 0,
        },
    }
}

/// Attack value with research modifiers applied. `has_upgrade` should
/// answer whether the owning player has researched a given tech id.
pub fn attack(kind: UnitKind, has_upgrade: impl Fn(&str) -> bool) -> f32 {
    let base = stats(kind).base_atk;
    if kind == UnitKind::LightInfantry && has_upgrade(INFANTRY_TIER_1) {
        base * 1.10
    } else {
        base
    }
}

/// Defense value with research modifiers applied.
pub fn defense(kind: UnitKind, has_upgrade: impl Fn(&str) -> bool) -> f32 {
    let base = stats(kind).base_def;
    if kind == UnitKind::LightInfantry && has_upgrade(INFANTRY_TIER_1) {
        base * 1.10
    } else {
        base
    }
}
