use std::collections::HashMap;

use hexwar_catalog::{attack, defense};
use hexwar_core::{Hp, UnitId, DEF_CONSTANT};
use hexwar_hex::{neighbors, Hex};
use hexwar_state::{Event, MatchState};

/// Phase 4: simultaneous combat. Every hex's incoming damage is computed
/// from the pre-tick position/HP snapshot, then all damage is applied in
/// one pass so no hex sees the effect of another hex's combat this tick.
pub fn run(state: &mut MatchState) {
    let mut by_hex: HashMap<Hex, Vec<UnitId>> = HashMap::new();
    for unit in state.units() {
        by_hex.entry(unit.position()).or_default().push(unit.id());
    }

    let mut pending: HashMap<UnitId, Hp> = HashMap::new();

    for (&hex, defenders) in &by_hex {
        if defenders.is_empty() {
            continue;
        }
        let owner_def = state.unit(defenders[0]).unwrap().owner();

        let mut raw_incoming: f32 = 0.0;
        for neighbor in neighbors(hex) {
            let Some(attackers) = by_hex.get(&neighbor) else {
                continue;
            };
            for &att_id in attackers {
                let attacker = state.unit(att_id).unwrap();
                if attacker.owner() == owner_def {
                    continue;
                }
                let atk_owner = attacker.owner();
                let base_atk = attack(attacker.kind(), |tech| state.has_upgrade(atk_owner, tech));
                let efficiency = attacker.hp() / attacker.max_hp();
                raw_incoming += base_atk * efficiency;
            }
        }
        if raw_incoming <= 0.0 {
            continue;
        }

        let mut ordered = defenders.clone();
        ordered.sort_by(|&a, &b| {
            state
                .unit(a)
                .unwrap()
                .hp()
                .partial_cmp(&state.unit(b).unwrap().hp())
                .unwrap()
        });

        let mut remaining = raw_incoming;
        for &def_id in &ordered {
            if remaining <= 0.0 {
                break;
            }
            let defender = state.unit(def_id).unwrap();
            let base_def = defense(defender.kind(), |tech| state.has_upgrade(owner_def, tech));
            let total_def = base_def; // terrain_def(h) hook is always 0 in the core
            let mitigation = total_def / (total_def + DEF_CONSTANT);
            let hp = defender.hp();
            let ehp = hp / (1.0 - mitigation);

            if remaining >= ehp {
                remaining -= ehp;
                pending.insert(def_id, hp);
                state.push_event(Event::Combat {
                    location: hex,
                    defender: owner_def,
                    damage_in: ehp,
                    casualties: vec![def_id],
                });
            } else {
                let real_damage = remaining * (1.0 - mitigation);
                pending.insert(def_id, real_damage);
                remaining = 0.0;
            }
        }
    }

    for (&id, &damage) in &pending {
        if let Some(unit) = state.unit_mut(id) {
            unit.apply_damage(damage);
        }
    }
    state.retain_units(|u| !u.is_dead());
}
