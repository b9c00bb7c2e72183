//! Exact shift scheduler and plan KPIs.
//!
//! # Algorithm
//!
//! `ShiftScheduler` runs a forward dynamic program whose states are the
//! subsets of employees working each day. It is exact, and exponential in
//! the employee count, so instances are bounded by `SchedulerConfig`.
//!
//! # Tie-breaking
//!
//! Subsets are enumerated in increasing bitmask order and improvements use
//! strict `<`. Among equal-cost end states the lowest bitmask wins, and
//! among equal-cost predecessors the lowest bitmask is kept. Results are
//! deterministic.
//!
//! # KPI
//!
//! `PlanKpi` summarises cost distribution and shift balance of a plan.

mod dp;
mod kpi;

pub use dp::{SchedulerConfig, ShiftScheduler, MAX_SUPPORTED_DAYS, MAX_SUPPORTED_EMPLOYEES};
pub use kpi::PlanKpi;
