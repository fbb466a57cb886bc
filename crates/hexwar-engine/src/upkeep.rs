use hexwar_catalog::stats;
use hexwar_core::{Mp, UnitId, STARVATION_MP_FACTOR, UPKEEP_INTERVAL};
use hexwar_state::MatchState;

/// Phase 0: resets every unit's MP to its max, debiting Fuel for units
/// with upkeep every [`UPKEEP_INTERVAL`] ticks. A unit whose owner can't
/// pay takes the starvation penalty instead of a full refresh.
pub fn run(state: &mut MatchState) {
    let is_upkeep_tick = state.tick() % UPKEEP_INTERVAL == 0;
    let ids: Vec<UnitId> = state.units().map(|u| u.id()).collect();

    for id in ids {
        let (owner, kind) = {
            let unit = state.unit(id).expect("collected id must exist");
            (unit.owner(), unit.kind())
        };
        let s = stats(kind);
        let max_mp = s.max_mp;

        let new_mp = if is_upkeep_tick && s.upkeep_per_10 > 0 {
            let mut resources = state.resources(owner);
            if resources.f >= s.upkeep_per_10 {
                resources.f -= s.upkeep_per_10;
                state.set_resources(owner, resources);
                max_mp
            } else {
                ((max_mp as f32) * STARVATION_MP_FACTOR).floor() as Mp
            }
        } else {
            max_mp
        };

        state.unit_mut(id).expect("collected id must exist").set_mp(new_mp);
    }
}
