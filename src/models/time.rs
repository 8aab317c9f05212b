//! Simulation time representation.
//!
//! # Time Representation
//!
//! The engine runs on integer **ticks** at a resolution of 1/1000 of one
//! boundary time unit. Boundary values (`f64` time units, as presentation
//! layers produce them) are converted to ticks exactly once, when a run is
//! set up; everything after that is integer arithmetic. A burst time of
//! `1.5` becomes 1500 ticks and survives any number of delta subtractions
//! without drift, which a raw `f64` accumulator cannot guarantee.
//!
//! | Boundary value | Ticks |
//! |----------------|-------|
//! | 1.0 time unit  | 1000  |
//! | 1.5 time units | 1500  |
//! | 0.001 time units | 1   |

/// Engine-internal time, in ticks.
pub type Ticks = i64;

/// Number of ticks in one boundary time unit.
pub const TICKS_PER_UNIT: Ticks = 1_000;

/// Largest boundary time value a run may carry, in time units.
///
/// Validation bounds the simulation horizon (latest arrival plus total
/// burst time) to this value, so every event time the engine computes
/// fits in [`Ticks`] with room for the additions in between. `f64` to
/// integer casts saturate; unchecked huge inputs would quantize to
/// `i64::MAX` and corrupt the clock.
pub const MAX_TIME_UNITS: f64 = 1.0e12;

/// Converts a boundary time value to ticks, rounding to the nearest tick.
pub fn units_to_ticks(units: f64) -> Ticks {
    (units * TICKS_PER_UNIT as f64).round() as Ticks
}

/// Converts a positive boundary duration (burst time, quantum) to ticks.
///
/// Durations that are positive at the boundary never quantize below one
/// tick, so a validated job cannot enter the engine with nothing to run.
pub fn duration_to_ticks(units: f64) -> Ticks {
    units_to_ticks(units).max(1)
}

/// Converts ticks back to boundary time units.
pub fn ticks_to_units(ticks: Ticks) -> f64 {
    ticks as f64 / TICKS_PER_UNIT as f64
}
