use hexwar_catalog::stats;
use hexwar_core::{PlayerId, STACK_CAP};
use hexwar_state::{Event, MatchState, Order, Unit};

/// Phase 2: applies BUILD orders in submission order. Verifies facility
/// ownership and stack capacity, then debits cost and spawns the unit.
/// Newly built units do not move this tick but are eligible for combat.
pub fn run(state: &mut MatchState, orders: &[(PlayerId, Order)]) {
    for (player, order) in orders {
        let Order::Build {
            facility_id,
            unit_kind,
        } = order
        else {
            continue;
        };

        let Some(facility) = state.facility(*facility_id) else {
            continue;
        };
        if facility.owner() != *player {
            continue;
        }
        let position = facility.position();

        let occupants = state.units().filter(|u| u.position() == position).count();
        if occupants >= STACK_CAP {
            continue;
        }

        let cost = stats(*unit_kind).cost;
        let resources = state.resources(*player);
        if !resources.can_afford(cost.m, cost.f, cost.i) {
            continue;
        }

        let mut resources = resources;
        resources.debit(cost.m, cost.f, cost.i);
        state.set_resources(*player, resources);

        let unit = Unit::spawn(*player, *unit_kind, position);
        state.insert_unit(unit);
        state.push_event(Event::Build {
            location: position,
            kind: *unit_kind,
            owner: *player,
        });
    }
}
