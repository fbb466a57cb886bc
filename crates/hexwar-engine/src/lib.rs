//! The tick engine (component E): a pure `advance` function implementing
//! the six-phase tick in strict order. Phase order is part of the
//! contract — it defines the timing rules visible to players.

mod build;
mod combat;
mod movement;
mod research;
mod upkeep;
mod victory;

use hexwar_core::PlayerId;
use hexwar_state::{MatchState, Order};

/// Advances `state` by exactly one tick given the orders accumulated
/// since the previous tick. Clones at the start and mutates the clone,
/// matching the reference engine's per-tick cloning discipline; the
/// caller observes either the old or the new value, never a partial one.
///
/// Invalid orders never produce an error: they are silently dropped by
/// whichever phase would have applied them.
pub fn advance(state: &MatchState, orders: Vec<(PlayerId, Order)>) -> MatchState {
    let mut next = state.clone();
    next.begin_tick();

    upkeep::run(&mut next);
    research::run(&mut next, &orders);
    build::run(&mut next, &orders);
    movement::run(&mut next, &orders);
    combat::run(&mut next);
    victory::run(&mut next);

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexwar_catalog::UnitKind;
    use hexwar_hex::Hex;
    use hexwar_state::{Facility, MatchStatus, Resources, Unit};

    fn state_with_radius(radius: i32) -> MatchState {
        MatchState::new(radius)
    }

    fn spawn(state: &mut MatchState, owner: PlayerId, kind: UnitKind, at: Hex) -> hexwar_core::UnitId {
        let unit = Unit::spawn(owner, kind, at);
        let id = unit.id();
        state.insert_unit(unit);
        id
    }

    /// idle tick: no orders leaves positions, HP untouched, refreshes MP,
    /// and produces no events
    #[test]
    fn idle_tick_only_refreshes_mp() {
        let red = PlayerId::default();
        let blue = PlayerId::default();
        let mut state = state_with_radius(20);
        let red_unit = spawn(&mut state, red, UnitKind::LightInfantry, Hex::new(0, 0));
        let blue_unit = spawn(&mut state, blue, UnitKind::LightInfantry, Hex::new(5, 5));
        state.set_status(MatchStatus::Active);

        let next = advance(&state, vec![]);

        assert_eq!(next.unit(red_unit).unwrap().position(), Hex::new(0, 0));
        assert_eq!(next.unit(blue_unit).unwrap().position(), Hex::new(5, 5));
        assert_eq!(next.unit(red_unit).unwrap().mp(), 2);
        assert_eq!(next.unit(blue_unit).unwrap().mp(), 2);
        assert_eq!(next.unit(red_unit).unwrap().hp(), 60.0);
        assert!(next.events().is_empty());
    }

    /// same-target contention: higher (mp, id-hash) wins, loser stays put
    /// with its MP untouched and exactly one unit ends up on the target
    #[test]
    fn same_target_contention_resolves_to_one_winner() {
        let red = PlayerId::default();
        let mut state = state_with_radius(20);
        let a = spawn(&mut state, red, UnitKind::LightInfantry, Hex::new(0, 0));
        let b = spawn(&mut state, red, UnitKind::LightInfantry, Hex::new(2, 0));
        state.set_status(MatchStatus::Active);

        let dest = Hex::new(1, 0);
        let orders = vec![
            (red, Order::Move { unit_id: a, dest }),
            (red, Order::Move { unit_id: b, dest }),
        ];
        let next = advance(&state, orders);

        let at_dest = next.units().filter(|u| u.position() == dest).count();
        assert_eq!(at_dest, 1);
        let loser_origin_count = [Hex::new(0, 0), Hex::new(2, 0)]
            .iter()
            .filter(|&&origin| next.units().any(|u| u.position() == origin))
            .count();
        assert_eq!(loser_origin_count, 1);
    }

    /// head-to-head hostile swap: both units bounce and stay at origin
    #[test]
    fn hostile_head_to_head_swap_bounces_both() {
        let red = PlayerId::default();
        let blue = PlayerId::default();
        let mut state = state_with_radius(20);
        let r = spawn(&mut state, red, UnitKind::LightInfantry, Hex::new(0, 0));
        let b = spawn(&mut state, blue, UnitKind::LightInfantry, Hex::new(1, 0));
        state.set_status(MatchStatus::Active);

        let orders = vec![
            (red, Order::Move { unit_id: r, dest: Hex::new(1, 0) }),
            (blue, Order::Move { unit_id: b, dest: Hex::new(0, 0) }),
        ];
        let next = advance(&state, orders);

        assert_eq!(next.unit(r).unwrap().position(), Hex::new(0, 0));
        assert_eq!(next.unit(b).unwrap().position(), Hex::new(1, 0));
    }

    /// armored vs five light infantry: focus-fire EHP math matches the
    /// documented arithmetic on both sides of the engagement
    #[test]
    fn armored_vs_five_infantry_focus_fire() {
        let blue = PlayerId::default();
        let red = PlayerId::default();
        let mut state = state_with_radius(20);
        spawn(&mut state, blue, UnitKind::Armored, Hex::new(0, 0));
        for _ in 0..5 {
            spawn(&mut state, red, UnitKind::LightInfantry, Hex::new(1, 0));
        }
        state.set_status(MatchStatus::Active);

        let next = advance(&state, vec![]);

        let armored_hp = next
            .units()
            .find(|u| u.kind() == UnitKind::Armored)
            .unwrap()
            .hp();
        assert!((armored_hp - 89.51).abs() < 0.1);

        let infantry_hps: Vec<f32> = next
            .units()
            .filter(|u| u.kind() == UnitKind::LightInfantry)
            .map(|u| u.hp())
            .collect();
        assert_eq!(infantry_hps.len(), 5);
        let damaged = infantry_hps.iter().filter(|&&hp| hp < 60.0).count();
        assert_eq!(damaged, 1);
    }

    /// upkeep starvation: insufficient fuel sets MP to the floor of 75%
    /// of max without debiting fuel; next tick's normal refresh restores it
    #[test]
    fn upkeep_starvation_then_recovery() {
        let blue = PlayerId::default();
        let mut state = state_with_radius(20);
        let unit = spawn(&mut state, blue, UnitKind::Armored, Hex::new(0, 0));
        state.set_resources(blue, Resources::new(0, 2, 0));
        state.set_status(MatchStatus::Active);

        let mut current = state;
        for _ in 0..10 {
            current = advance(&current, vec![]);
        }
        assert_eq!(current.tick(), 10);
        assert_eq!(current.unit(unit).unwrap().mp(), 0);
        assert_eq!(current.resources(blue).f, 2);

        let eleventh = advance(&current, vec![]);
        assert_eq!(eleventh.unit(unit).unwrap().mp(), 1);
    }

    /// victory by chief elimination: a lethal hit ends the match and
    /// names the sole remaining player as winner
    #[test]
    fn victory_by_chief_elimination() {
        let red = PlayerId::default();
        let blue = PlayerId::default();
        let mut state = state_with_radius(20);
        let chief = Unit::spawn(red, UnitKind::Chief, Hex::new(0, 0));
        let chief_id = chief.id();
        state.insert_unit(chief);
        // force the chief to 1 hp by direct damage before the tick
        state.unit_mut(chief_id).unwrap().apply_damage(149.0);
        spawn(&mut state, blue, UnitKind::Armored, Hex::new(1, 0));
        state.set_status(MatchStatus::Active);

        let next = advance(&state, vec![]);

        assert_eq!(next.status(), MatchStatus::Finished);
        assert!(next.unit(chief_id).is_none());
    }

    /// determinism: the same state and orders always produce the same
    /// visible outcome
    #[test]
    fn advance_is_deterministic() {
        let red = PlayerId::default();
        let mut state = state_with_radius(20);
        spawn(&mut state, red, UnitKind::Scout, Hex::new(0, 0));
        state.set_status(MatchStatus::Active);

        let a = advance(&state, vec![]);
        let b = advance(&state, vec![]);
        assert_eq!(a.tick(), b.tick());
        let a_positions: Vec<Hex> = a.units().map(|u| u.position()).collect();
        let b_positions: Vec<Hex> = b.units().map(|u| u.position()).collect();
        assert_eq!(a_positions, b_positions);
    }

    /// stack cap: a build order against a full hex is dropped
    #[test]
    fn build_respects_stack_cap() {
        let red = PlayerId::default();
        let mut state = state_with_radius(20);
        let facility = Facility::new(red, Hex::new(0, 0));
        let facility_id = facility.id();
        state.insert_facility(facility);
        for _ in 0..10 {
            spawn(&mut state, red, UnitKind::Scout, Hex::new(0, 0));
        }
        state.set_resources(red, Resources::new(10_000, 10_000, 10_000));
        state.set_status(MatchStatus::Active);

        let orders = vec![(
            red,
            Order::Build {
                facility_id,
                unit_kind: UnitKind::Scout,
            },
        )];
        let next = advance(&state, orders);
        let occupants = next.units().filter(|u| u.position() == Hex::new(0, 0)).count();
        assert_eq!(occupants, 10);
    }

    /// research permanence: an upgrade researched at tick T is still
    /// present several ticks later
    #[test]
    fn research_is_permanent() {
        let red = PlayerId::default();
        let mut state = state_with_radius(20);
        state.set_resources(red, Resources::new(0, 0, 500));
        state.set_status(MatchStatus::Active);

        let orders = vec![(
            red,
            Order::Research {
                tech_id: "INFANTRY_TIER_1".into(),
            },
        )];
        let mut current = advance(&state, orders);
        assert!(current.has_upgrade(red, "INFANTRY_TIER_1"));

        for _ in 0..5 {
            current = advance(&current, vec![]);
        }
        assert!(current.has_upgrade(red, "INFANTRY_TIER_1"));
    }

    /// combat conservation: a massively overkilled unit is pruned with no
    /// negative HP artifact, because credited death damage is capped at
    /// exactly its pre-tick HP rather than the full raw-damage budget
    #[test]
    fn combat_never_overkills_accounting() {
        let blue = PlayerId::default();
        let red = PlayerId::default();
        let mut state = state_with_radius(20);
        spawn(&mut state, blue, UnitKind::Scout, Hex::new(0, 0));
        for _ in 0..5 {
            spawn(&mut state, red, UnitKind::Armored, Hex::new(1, 0));
        }
        state.set_status(MatchStatus::Active);

        let next = advance(&state, vec![]);
        assert!(next.units().all(|u| u.kind() != UnitKind::Scout));
        assert!(next.units().all(|u| u.hp() >= 0.0));
    }
}
