//! The match registry and fixed-cadence tick loop (component M). A
//! `Scheduler` owns every in-memory match and exposes the five external
//! operations (spec §6) as inherent methods; the (out-of-scope) transport
//! layer calls these directly.

mod slot;

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock as StdRwLock;
use std::time::Duration;

use hexwar_catalog::UnitKind;
use hexwar_core::{MatchId, PlayerId, ScheduleError, DEFAULT_MAP_RADIUS, TICK_INTERVAL_MS};
use hexwar_dto::{GameConstants, MatchConfig};
use hexwar_hex::Hex;
use hexwar_state::{Facility, MatchState, MatchStatus, Order, Resources, Unit, Viewer};
use hexwar_view::MatchView;

use slot::MatchSlot;

/// Opposing starting coordinates for the default two-player seed, taken
/// from the reference engine's `initialize_dynamic`.
const RED_SEED: Hex = Hex { q: -3, r: -3 };
const BLUE_SEED: Hex = Hex { q: 3, r: 3 };

/// The two player identities a freshly-seeded match hands back, so the
/// (out-of-scope) transport layer can associate them with client tokens.
#[derive(Debug, Clone, Copy)]
pub struct MatchSeed {
    pub red: PlayerId,
    pub blue: PlayerId,
}

/// Owns every match this process is running. `matches` is a plain
/// `std::sync::RwLock`-guarded map — match creation/removal is rare and
/// coarse-grained, unlike the per-tick state swap each slot does on its
/// own `parking_lot::RwLock`.
#[derive(Default)]
pub struct Scheduler {
    matches: StdRwLock<HashMap<MatchId, Arc<MatchSlot>>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `match_id` in WAITING with the two-player default seed: one
    /// Chief and one Facility per side at fixed opposing coordinates, each
    /// side granted `initial_resources`. Idempotent: a match that already
    /// exists is left untouched and its existing seed is returned.
    pub fn init_match(&self, match_id: MatchId, initial_resources: Resources) -> MatchSeed {
        let mut matches = self.matches.write().expect("registry poisoned");
        if let Some(slot) = matches.get(&match_id) {
            return MatchSeed {
                red: slot.red,
                blue: slot.blue,
            };
        }

        let red = PlayerId::default();
        let blue = PlayerId::default();
        let mut state = MatchState::new(DEFAULT_MAP_RADIUS);
        state.insert_unit(Unit::spawn(red, UnitKind::Chief, RED_SEED));
        state.insert_unit(Unit::spawn(blue, UnitKind::Chief, BLUE_SEED));
        state.insert_facility(Facility::new(red, RED_SEED));
        state.insert_facility(Facility::new(blue, BLUE_SEED));
        state.set_resources(red, initial_resources);
        state.set_resources(blue, initial_resources);

        log::info!("match {match_id} created");
        matches.insert(match_id, Arc::new(MatchSlot::new(state, red, blue)));
        MatchSeed { red, blue }
    }

    /// Transitions `match_id` WAITING -> ACTIVE.
    pub fn start_match(&self, match_id: MatchId) -> Result<(), ScheduleError> {
        let slot = self.slot(match_id)?;
        let mut guard = slot.state.write();
        if guard.status() != MatchStatus::Waiting {
            return Err(ScheduleError::IllegalTransition { expected: "WAITING" });
        }
        let mut next = (**guard).clone();
        next.set_status(MatchStatus::Active);
        *guard = Arc::new(next);
        log::info!("match {match_id} started");
        Ok(())
    }

    /// Appends `orders` to `match_id`'s intake buffer, tagged with
    /// `viewer`'s identity. Returns the accepted count (`0` for an
    /// observer, whose submission is discarded without error).
    pub fn submit_orders(
        &self,
        match_id: MatchId,
        viewer: Viewer,
        orders: Vec<Order>,
    ) -> Result<usize, ScheduleError> {
        let slot = self.slot(match_id)?;
        slot.buffer.submit(viewer, orders)
    }

    /// Returns `viewer`'s projection of `match_id`'s current state.
    pub fn get_state(&self, match_id: MatchId, viewer: Viewer) -> Result<MatchView, ScheduleError> {
        let slot = self.slot(match_id)?;
        let state = slot.snapshot();
        Ok(hexwar_view::project(&state, viewer))
    }

    /// Returns the static configuration a client needs before it starts
    /// polling `get_state`: match id, resolved viewer identity, map
    /// radius, and the fixed ruleset constants.
    pub fn get_match_config(
        &self,
        match_id: MatchId,
        viewer: Viewer,
    ) -> Result<MatchConfig, ScheduleError> {
        let slot = self.slot(match_id)?;
        let state = slot.snapshot();
        Ok(MatchConfig {
            match_id,
            viewer: viewer.player(),
            map_radius: state.map_radius(),
            constants: GameConstants::default(),
        })
    }

    fn slot(&self, match_id: MatchId) -> Result<Arc<MatchSlot>, ScheduleError> {
        self.matches
            .read()
            .expect("registry poisoned")
            .get(&match_id)
            .cloned()
            .ok_or(ScheduleError::UnknownMatch(match_id))
    }

    /// Advances every ACTIVE match exactly one tick: drains its buffer,
    /// runs `advance`, and swaps in the result. Matches not yet started
    /// (or already finished) are skipped.
    pub fn tick_all(&self) {
        let matches = self.matches.read().expect("registry poisoned");
        for slot in matches.values() {
            let current = slot.snapshot();
            if current.status() != MatchStatus::Active {
                continue;
            }
            let orders = slot.buffer.drain();
            let next = hexwar_engine::advance(&current, orders);
            *slot.state.write() = Arc::new(next);
        }
    }

    /// Runs the fixed-rate cadence loop, ticking every matching every
    /// [`TICK_INTERVAL_MS`] until a shutdown is requested.
    pub async fn run_cadence(&self) {
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_INTERVAL_MS));
        loop {
            interval.tick().await;
            if hexwar_core::shutdown_requested() {
                log::info!("cadence loop stopping, shutdown requested");
                break;
            }
            self.tick_all();
        }
    }
}
