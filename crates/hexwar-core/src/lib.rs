//! Shared primitives for the hexwar workspace: identifiers, numeric type
//! aliases, tuning constants, and (behind the `server` feature) the
//! logging and shutdown bootstrap used by the match scheduler binary.

use std::marker::PhantomData;

// ---------------------------------------------------------------------
// TYPE ALIASES
// ---------------------------------------------------------------------

/// A tick counter. Monotonically increasing from 0.
pub type Tick = u64;
/// A resource pool quantity (Materials, Fuel, or Intel). Non-negative.
pub type Chips = i32;
/// Hit points. Tracked as a real number so EHP math stays exact.
pub type Hp = f32;
/// Movement points. Non-negative.
pub type Mp = u8;
/// Axial coordinate component.
pub type Coord = i32;

// ---------------------------------------------------------------------
// IDENTITY TYPES
// ---------------------------------------------------------------------

/// A type-tagged wrapper around a UUID, so a `UnitId` and a `FacilityId`
/// can't be swapped at a call site even though both are backed by the
/// same representation.
pub struct Id<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
    /// Reinterprets this id as belonging to a different tagged type.
    pub fn cast<U>(self) -> Id<U> {
        Id {
            inner: self.inner,
            marker: PhantomData,
        }
    }
}

impl<T> From<Id<T>> for uuid::Uuid {
    fn from(id: Id<T>) -> Self {
        id.inner
    }
}

impl<T> From<uuid::Uuid> for Id<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for Id<T> {}
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Eq for Id<T> {}
impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}
impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}
impl<T> std::fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("Id").field(&self.inner).finish()
    }
}
impl<T> std::fmt::Display for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl<T> serde::Serialize for Id<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

impl<'de, T> serde::Deserialize<'de> for Id<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self {
            inner: uuid::Uuid::deserialize(deserializer)?,
            marker: PhantomData,
        })
    }
}

/// Marker type for [`Id<Player>`]; a player identity has no stable string
/// form beyond the wire layer, so it is carried as a uuid internally.
pub struct Player;
pub type PlayerId = Id<Player>;

/// Marker type for [`Id<Unit>`].
pub struct UnitTag;
pub type UnitId = Id<UnitTag>;

/// Marker type for [`Id<Facility>`].
pub struct FacilityTag;
pub type FacilityId = Id<FacilityTag>;

/// Marker type for [`Id<Match>`].
pub struct MatchTag;
pub type MatchId = Id<MatchTag>;

// ---------------------------------------------------------------------
// GAME TUNING CONSTANTS
// ---------------------------------------------------------------------

/// Mitigation formula denominator offset: `mitigation = def / (def + DEF_CONSTANT)`.
pub const DEF_CONSTANT: f32 = 25.0;
/// Research cost in Intel, debited once on success.
pub const RESEARCH_COST: Chips = 200;
/// Tick interval at which upkeep is debited and MP is refreshed/starved.
pub const UPKEEP_INTERVAL: Tick = 10;
/// Starvation MP multiplier applied when upkeep can't be paid.
pub const STARVATION_MP_FACTOR: f32 = 0.75;
/// Units alive at or below this HP are pruned at the end of a tick.
pub const DEATH_THRESHOLD: Hp = 0.5;
/// Maximum number of units permitted on a single hex.
pub const STACK_CAP: usize = 10;
/// Maximum number of orders accepted in one `submit_orders` call.
pub const ORDER_RATE_LIMIT: usize = 50;
/// Default fixed-rate cadence of the match scheduler, one tick per second.
pub const TICK_INTERVAL_MS: u64 = 1000;
/// Map radius used by the default two-player seed.
pub const DEFAULT_MAP_RADIUS: i32 = 20;

// ---------------------------------------------------------------------
// DETERMINISTIC HASHING
// ---------------------------------------------------------------------

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// FNV-1a over the UTF-8 bytes of `s`, truncated to 63 bits so the result
/// fits a non-negative `i64` on every platform. Used as the stable
/// id-derived tiebreaker in Phase 3's same-target contention sub-phase.
pub fn fnv1a_63(s: &str) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in s.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash & 0x7fff_ffff_ffff_ffff
}

// ---------------------------------------------------------------------
// ERRORS
// ---------------------------------------------------------------------

/// Errors surfaced by the five external scheduler operations. Tactical
/// order failures never produce one of these — they are dropped inside
/// the tick engine, not here.
#[derive(Debug)]
pub enum ScheduleError {
    UnknownMatch(MatchId),
    IllegalTransition { expected: &'static str },
    RateLimitBreach { submitted: usize, limit: usize },
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnknownMatch(id) => write!(f, "no match with id {id}"),
            Self::IllegalTransition { expected } => {
                write!(f, "illegal transition: match must be {expected}")
            }
            Self::RateLimitBreach { submitted, limit } => {
                write!(f, "rate limit breach: submitted {submitted}, limit {limit}")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

// ---------------------------------------------------------------------
// RUNTIME UTILITIES (server feature)
// ---------------------------------------------------------------------

#[cfg(feature = "server")]
pub fn log() {
    use simplelog::*;
    std::fs::create_dir_all("logs").ok();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = format!("logs/hexwar-{stamp}.log");
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let file = std::fs::File::create(&path).expect("open log file");
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Debug, config, file),
    ])
    .expect("init logger");
}

static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// True once a shutdown has been requested; the scheduler's cadence loop
/// checks this at each tick boundary and exits cleanly.
#[cfg(feature = "server")]
pub fn shutdown_requested() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
}

#[cfg(not(feature = "server"))]
pub fn shutdown_requested() -> bool {
    false
}

/// Spawns a task that sets the shutdown flag on Ctrl-C.
#[cfg(feature = "server")]
pub fn install_shutdown_handler() {
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("shutdown requested, finishing in-flight tick");
            INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
        }
    });
}
