//! Per-viewer projection of a [`MatchState`] (component V). `project` is
//! a pure function producing a structurally independent copy — the
//! caller can never mutate the source state through the returned view.

use hexwar_catalog::UnitKind;
use hexwar_core::{FacilityId, Hp, Mp, PlayerId, Tick, UnitId};
use hexwar_hex::Hex;
use hexwar_state::{Event, MatchState, MatchStatus, Resources, Viewer};
use serde::Serialize;

/// Re-exported so a stricter line-of-sight policy can be layered on top
/// of the trivial fog-of-war this crate ships without touching the tick
/// engine. Unused by `project` today.
pub use hexwar_hex::linedraw;

#[derive(Debug, Clone, Serialize)]
pub struct UnitView {
    pub id: UnitId,
    pub kind: UnitKind,
    pub position: Hex,
    pub hp: Hp,
    pub mp: Mp,
    pub owner: PlayerId,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacilityView {
    pub id: FacilityId,
    pub position: Hex,
    pub owner: PlayerId,
    pub queue: Vec<UnitKind>,
}

/// A read-only, per-viewer rendering of a match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchView {
    pub tick: Tick,
    pub status: MatchStatus,
    pub resources: Resources,
    pub upgrades: Vec<String>,
    /// The viewer's own units (or, for an observer, every unit).
    pub units: Vec<UnitView>,
    /// Enemy units visible under the current fog-of-war policy. The core
    /// spec ships trivial FoW: every non-owned unit is visible. Empty for
    /// an observer, whose `units` already covers everyone.
    pub visible_units: Vec<UnitView>,
    pub facilities: Vec<FacilityView>,
    pub events: Vec<Event>,
}

fn unit_view(unit: &hexwar_state::Unit) -> UnitView {
    UnitView {
        id: unit.id(),
        kind: unit.kind(),
        position: unit.position(),
        hp: unit.hp(),
        mp: unit.mp(),
        owner: unit.owner(),
    }
}

fn facility_view(facility: &hexwar_state::Facility) -> FacilityView {
    FacilityView {
        id: facility.id(),
        position: facility.position(),
        owner: facility.owner(),
        queue: facility.queue().to_vec(),
    }
}

/// Produces `viewer`'s projection of `state`.
pub fn project(state: &MatchState, viewer: Viewer) -> MatchView {
    let facilities = state.facilities().map(facility_view).collect();
    let events = state.events().to_vec();

    match viewer.player() {
        None => {
            // Observer: sees everyone, plus a reference player's
            // resources so the view has something to show for them.
            let reference = state
                .resources_owners()
                .min()
                .map(|player| state.resources(player))
                .unwrap_or_default();
            MatchView {
                tick: state.tick(),
                status: state.status(),
                resources: reference,
                upgrades: Vec::new(),
                units: state.units().map(unit_view).collect(),
                visible_units: Vec::new(),
                facilities,
                events,
            }
        }
        Some(player) => {
            let units = state
                .units()
                .filter(|u| u.owner() == player)
                .map(unit_view)
                .collect();
            let visible_units = state
                .units()
                .filter(|u| u.owner() != player)
                .map(unit_view)
                .collect();
            let upgrades = state.upgrades(player).map(str::to_owned).collect();
            MatchView {
                tick: state.tick(),
                status: state.status(),
                resources: state.resources(player),
                upgrades,
                units,
                visible_units,
                facilities,
                events,
            }
        }
    }
}
