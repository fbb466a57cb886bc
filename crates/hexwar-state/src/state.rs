use std::collections::{HashMap, HashSet};

use hexwar_core::{FacilityId, PlayerId, Tick, UnitId};

use crate::{Event, Facility, Resources, Unit};

/// Lifecycle status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MatchStatus {
    #[serde(rename = "WAITING")]
    Waiting,
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "FINISHED")]
    Finished,
}

/// The in-memory record of a single match. Exclusively owned by the
/// scheduler's match slot; the tick engine is the only writer.
///
/// # Fields
///
/// - `tick` — ticks elapsed since creation
/// - `status` — lifecycle state
/// - `units` / `facilities` — by id
/// - `resources` / `upgrades` — per player
/// - `events` — produced by the most recent tick only
/// - `map_radius` — bound used by Phase 3's out-of-bounds check
#[derive(Debug, Clone)]
pub struct MatchState {
    tick: Tick,
    status: MatchStatus,
    units: HashMap<UnitId, Unit>,
    facilities: HashMap<FacilityId, Facility>,
    resources: HashMap<PlayerId, Resources>,
    upgrades: HashMap<PlayerId, HashSet<String>>,
    events: Vec<Event>,
    map_radius: i32,
}

impl MatchState {
    pub fn new(map_radius: i32) -> Self {
        Self {
            tick: 0,
            status: MatchStatus::Waiting,
            units: HashMap::new(),
            facilities: HashMap::new(),
            resources: HashMap::new(),
            upgrades: HashMap::new(),
            events: Vec::new(),
            map_radius,
        }
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }
    pub fn status(&self) -> MatchStatus {
        self.status
    }
    pub fn set_status(&mut self, status: MatchStatus) {
        self.status = status;
    }
    pub fn map_radius(&self) -> i32 {
        self.map_radius
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }
    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(&id)
    }
    pub fn units_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.units.values_mut()
    }
    pub fn insert_unit(&mut self, unit: Unit) {
        self.units.insert(unit.id(), unit);
    }
    /// Removes every unit for which `predicate` is false.
    pub fn retain_units(&mut self, mut predicate: impl FnMut(&Unit) -> bool) {
        self.units.retain(|_, u| predicate(u));
    }

    pub fn facilities(&self) -> impl Iterator<Item = &Facility> {
        self.facilities.values()
    }
    pub fn facility(&self, id: FacilityId) -> Option<&Facility> {
        self.facilities.get(&id)
    }
    pub fn insert_facility(&mut self, facility: Facility) {
        self.facilities.insert(facility.id(), facility);
    }

    pub fn resources(&self, player: PlayerId) -> Resources {
        self.resources.get(&player).copied().unwrap_or_default()
    }
    pub fn resources_mut(&mut self, player: PlayerId) -> &mut Resources {
        self.resources.entry(player).or_default()
    }
    pub fn set_resources(&mut self, player: PlayerId, resources: Resources) {
        self.resources.insert(player, resources);
    }
    /// Players with a resources entry. An observer's view uses this to
    /// pick a deterministic reference player (the smallest id) to show.
    pub fn resources_owners(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.resources.keys().copied()
    }

    pub fn has_upgrade(&self, player: PlayerId, tech_id: &str) -> bool {
        self.upgrades
            .get(&player)
            .is_some_and(|set| set.contains(tech_id))
    }
    pub fn upgrades(&self, player: PlayerId) -> impl Iterator<Item = &str> {
        self.upgrades
            .get(&player)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }
    pub fn research(&mut self, player: PlayerId, tech_id: String) {
        self.upgrades.entry(player).or_default().insert(tech_id);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
    pub fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Advances to the next tick's blank slate: increments the counter
    /// and clears last tick's events, but leaves everything else as the
    /// caller (the engine, at the start of `advance`) provided it.
    pub fn begin_tick(&mut self) {
        self.tick += 1;
        self.events.clear();
    }
}
