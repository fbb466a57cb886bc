use std::collections::HashSet;

use hexwar_catalog::UnitKind;
use hexwar_core::PlayerId;
use hexwar_state::{Event, MatchState, MatchStatus, VictoryResult};

/// Phase 5: a match ends the moment zero or one players retain a living
/// Chief. The set of alive Chiefs can only shrink within a match.
pub fn run(state: &mut MatchState) {
    let alive_chiefs: HashSet<PlayerId> = state
        .units()
        .filter(|u| u.kind() == UnitKind::Chief)
        .map(|u| u.owner())
        .collect();

    if alive_chiefs.is_empty() {
        state.set_status(MatchStatus::Finished);
        state.push_event(Event::Elimination {
            result: VictoryResult::Draw,
            winner: None,
        });
        log::info!("match finished at tick {}: draw, no chiefs survive", state.tick());
    } else if alive_chiefs.len() == 1 {
        let winner = *alive_chiefs.iter().next().unwrap();
        state.set_status(MatchStatus::Finished);
        state.push_event(Event::Elimination {
            result: VictoryResult::Win,
            winner: Some(winner),
        });
        log::info!("match finished at tick {}: {winner} wins", state.tick());
    }
}
