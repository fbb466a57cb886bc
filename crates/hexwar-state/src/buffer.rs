use std::sync::Mutex;

use hexwar_core::{PlayerId, ScheduleError, ORDER_RATE_LIMIT};

use crate::{Order, Viewer};

/// The per-match, tick-scoped queue of `(player_id, order)` pairs
/// accepted between ticks (component B). Enqueue is permitted at any
/// time; draining is what the scheduler does once per cadence tick.
#[derive(Default)]
pub struct OrderBuffer {
    inner: Mutex<Vec<(PlayerId, Order)>>,
}

impl OrderBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `orders` tagged with `viewer`'s identity. An observer's
    /// submission is silently discarded (returns `Ok(0)`); a submission
    /// over the rate limit is rejected wholesale rather than truncated.
    pub fn submit(&self, viewer: Viewer, orders: Vec<Order>) -> Result<usize, ScheduleError> {
        let Some(player) = viewer.player() else {
            return Ok(0);
        };
        if orders.len() > ORDER_RATE_LIMIT {
            return Err(ScheduleError::RateLimitBreach {
                submitted: orders.len(),
                limit: ORDER_RATE_LIMIT,
            });
        }
        let count = orders.len();
        let mut guard = self.inner.lock().expect("order buffer poisoned");
        guard.extend(orders.into_iter().map(|order| (player, order)));
        Ok(count)
    }

    /// Atomically swaps in a fresh empty buffer and returns everything
    /// accumulated since the previous drain.
    pub fn drain(&self) -> Vec<(PlayerId, Order)> {
        let mut guard = self.inner.lock().expect("order buffer poisoned");
        std::mem::take(&mut *guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// observer submissions are discarded without error and without
    /// appearing in the drained batch
    #[test]
    fn observer_submission_is_discarded() {
        let buffer = OrderBuffer::new();
        let accepted = buffer
            .submit(
                Viewer::Observer,
                vec![Order::Research {
                    tech_id: "X".into(),
                }],
            )
            .unwrap();
        assert_eq!(accepted, 0);
        assert!(buffer.drain().is_empty());
    }

    /// a submission over the rate limit is rejected wholesale
    #[test]
    fn rate_limit_breach_rejects_whole_submission() {
        let buffer = OrderBuffer::new();
        let player = PlayerId::default();
        let orders: Vec<Order> = (0..51)
            .map(|_| Order::Research {
                tech_id: "X".into(),
            })
            .collect();
        let result = buffer.submit(Viewer::Player(player), orders);
        assert!(result.is_err());
        assert!(buffer.drain().is_empty());
    }

    /// drain empties the buffer and a second drain sees nothing new
    #[test]
    fn drain_is_atomic_and_empties_buffer() {
        let buffer = OrderBuffer::new();
        let player = PlayerId::default();
        buffer
            .submit(
                Viewer::Player(player),
                vec![Order::Research {
                    tech_id: "X".into(),
                }],
            )
            .unwrap();
        assert_eq!(buffer.drain().len(), 1);
        assert!(buffer.drain().is_empty());
    }
}
