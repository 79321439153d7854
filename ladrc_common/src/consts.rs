//! System-wide constants for the LADRC workspace.
//!
//! Single source of truth for all numeric limits and defaults.
//! Imported by all crates — no duplication permitted.

use static_assertions::const_assert;

/// Highest supported process order `nx`.
pub const MAX_PROCESS_ORDER: usize = 7;

/// Capacity of the extended state vector (`nx + 1` at the highest order).
pub const MAX_EXTENDED_ORDER: usize = MAX_PROCESS_ORDER + 1;

const_assert!(MAX_PROCESS_ORDER >= 1);
// Binomial gain coefficients stay exact integers in f64 up to this order.
const_assert!(MAX_EXTENDED_ORDER <= 20);

/// Default sampling interval in microseconds (1 kHz = 1000 µs).
pub const CYCLE_TIME_US: u32 = 1000;

/// Shortest accepted sampling interval [µs].
pub const CYCLE_TIME_US_MIN: u32 = 10;

/// Longest accepted sampling interval [µs] (1 s).
pub const CYCLE_TIME_US_MAX: u32 = 1_000_000;

/// Largest `|λ·h|` for which classical RK4 is stable on a real negative
/// eigenvalue `λ`. The observer's poles all sit at `-wo`, so `wo·h` must not
/// exceed it.
pub const RK4_STABILITY_LIMIT: f64 = 2.785;

/// Observer-to-controller bandwidth ratio below which a warning is logged.
pub const MIN_OBSERVER_SEPARATION: f64 = 3.0;
