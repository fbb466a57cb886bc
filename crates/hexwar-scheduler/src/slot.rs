use std::sync::Arc;

use hexwar_core::PlayerId;
use hexwar_state::{MatchState, OrderBuffer};
use parking_lot::RwLock;

/// Everything the scheduler owns for one match: the state pointer (swapped
/// wholesale after every tick) and the intake buffer, plus the two seeded
/// player identities handed out by `init_match`.
pub struct MatchSlot {
    pub(crate) state: RwLock<Arc<MatchState>>,
    pub(crate) buffer: OrderBuffer,
    pub(crate) red: PlayerId,
    pub(crate) blue: PlayerId,
}

impl MatchSlot {
    pub(crate) fn new(state: MatchState, red: PlayerId, blue: PlayerId) -> Self {
        Self {
            state: RwLock::new(Arc::new(state)),
            buffer: OrderBuffer::new(),
            red,
            blue,
        }
    }

    /// Cheap clone of the current state pointer. A reader observes either
    /// the pre-tick or post-tick state in full, never a partial mix.
    pub(crate) fn snapshot(&self) -> Arc<MatchState> {
        self.state.read().clone()
    }
}
