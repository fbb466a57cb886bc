use hexwar_core::Chips;
use serde::{Deserialize, Serialize};

/// Per-player resource pools: Materials, Fuel, Intel. All non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resources {
    #[serde(rename = "M")]
    pub m: Chips,
    #[serde(rename = "F")]
    pub f: Chips,
    #[serde(rename = "I")]
    pub i: Chips,
}

impl Resources {
    pub fn new(m: Chips, f: Chips, i: Chips) -> Self {
        Self { m, f, i }
    }

    /// True if this pool can afford `cost` in every resource.
    pub fn can_afford(&self, m: Chips, f: Chips, i: Chips) -> bool {
        self.m >= m && self.f >= f && self.i >= i
    }

    /// Debits `(m, f, i)`. Caller must check `can_afford` first; this
    /// never goes negative on its own but will if misused, same as the
    /// reference implementation's unchecked subtraction.
    pub fn debit(&mut self, m: Chips, f: Chips, i: Chips) {
        self.m -= m;
        self.f -= f;
        self.i -= i;
    }
}
