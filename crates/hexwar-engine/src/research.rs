use hexwar_core::{PlayerId, RESEARCH_COST};
use hexwar_state::{Event, MatchState, Order};

/// Phase 1: applies RESEARCH orders in submission order. Idempotent if
/// already researched; silently dropped if Intel is insufficient.
pub fn run(state: &mut MatchState, orders: &[(PlayerId, Order)]) {
    for (player, order) in orders {
        let Order::Research { tech_id } = order else {
            continue;
        };
        if state.has_upgrade(*player, tech_id) {
            continue;
        }
        let mut resources = state.resources(*player);
        if resources.i < RESEARCH_COST {
            continue;
        }
        resources.i -= RESEARCH_COST;
        state.set_resources(*player, resources);
        state.research(*player, tech_id.clone());
        state.push_event(Event::Research {
            tech_id: tech_id.clone(),
            owner: *player,
        });
    }
}
