use std::collections::{HashMap, HashSet};

use hexwar_core::{fnv1a_63, PlayerId, UnitId, STACK_CAP};
use hexwar_hex::{distance, Hex};
use hexwar_state::{MatchState, Order};

/// Phase 3: lock-and-bounce movement. Resolves contention, head-to-head
/// swaps, and chain dependencies into a `bounced` set before applying
/// the surviving moves.
pub fn run(state: &mut MatchState, orders: &[(PlayerId, Order)]) {
    let mut intentions: HashMap<UnitId, Hex> = HashMap::new();
    let mut origins: HashMap<UnitId, Hex> = HashMap::new();

    for (player, order) in orders {
        let Order::Move { unit_id, dest } = order else {
            continue;
        };
        let Some(unit) = state.unit(*unit_id) else {
            continue;
        };
        if unit.owner() != *player {
            continue;
        }
        if distance(Hex::ORIGIN, *dest) > state.map_radius() {
            continue;
        }
        intentions.insert(*unit_id, *dest);
        origins.insert(*unit_id, unit.position());
    }

    // Pre-move occupancy snapshot; movement never mutates this map.
    let mut occupancy: HashMap<Hex, Vec<UnitId>> = HashMap::new();
    for unit in state.units() {
        occupancy.entry(unit.position()).or_default().push(unit.id());
    }

    let mut bounced: HashSet<UnitId> = HashSet::new();

    // Sub-phase A: same-target contention, highest (mp, id-hash) wins.
    let mut targets: HashMap<Hex, Vec<UnitId>> = HashMap::new();
    for (&uid, &target) in &intentions {
        targets.entry(target).or_default().push(uid);
    }
    for uids in targets.values() {
        if uids.len() < 2 {
            continue;
        }
        let mut sorted = uids.clone();
        sorted.sort_by_key(|&uid| {
            let mp = state.unit(uid).expect("intent must reference live unit").mp();
            let hash = fnv1a_63(&uid.inner().to_string());
            (mp, hash)
        });
        for &loser in &sorted[..sorted.len() - 1] {
            bounced.insert(loser);
        }
    }

    // Sub-phase B: hostile head-to-head swap, both parties bounce.
    for (&uid, &target) in &intentions {
        if bounced.contains(&uid) {
            continue;
        }
        let Some(occupants) = occupancy.get(&target) else {
            continue;
        };
        for &occ in occupants {
            if intentions.get(&occ) == Some(&origins[&uid]) {
                let u_owner = state.unit(uid).unwrap().owner();
                let occ_owner = state.unit(occ).unwrap().owner();
                if occ_owner != u_owner {
                    bounced.insert(uid);
                    bounced.insert(occ);
                }
            }
        }
    }

    // Sub-phase C: chain dependency fixed point.
    loop {
        let mut stable = true;
        for (&uid, &target) in &intentions {
            if bounced.contains(&uid) {
                continue;
            }
            let occupants = occupancy.get(&target).cloned().unwrap_or_default();
            let u_owner = state.unit(uid).unwrap().owner();
            let mut blocked = false;
            for &occ in &occupants {
                let occ_owner = state.unit(occ).unwrap().owner();
                if occ_owner != u_owner {
                    blocked = true;
                } else if !intentions.contains_key(&occ) {
                    if occupants.len() >= STACK_CAP {
                        blocked = true;
                    }
                } else if bounced.contains(&occ) && occupants.len() >= STACK_CAP {
                    blocked = true;
                }
            }
            if blocked && bounced.insert(uid) {
                stable = false;
            }
        }
        if stable {
            break;
        }
    }

    // Execution.
    for (&uid, &target) in &intentions {
        if bounced.contains(&uid) {
            continue;
        }
        if let Some(unit) = state.unit_mut(uid) {
            unit.set_position(target);
            unit.spend_mp();
        }
    }
}
