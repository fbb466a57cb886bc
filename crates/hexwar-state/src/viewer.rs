use hexwar_core::PlayerId;

/// The identity submitting orders or requesting a projection. An
/// observer has no owned units, may read, and may never write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Player(PlayerId),
    Observer,
}

impl Viewer {
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Viewer::Player(id) => Some(id),
            Viewer::Observer => None,
        }
    }
}
