//! Shift scheduling domain models.
//!
//! Provides the input instance, the subset state used by the DP engine,
//! and the plan returned to callers.
//!
//! # Representation
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Instance` | Availability, preference, and headcount over E × D |
//! | `Subset` | Employees working one day, as an E-bit mask |
//! | `DayPlan` | The subset chosen for one day and its cost |
//! | `ShiftPlan` | All days in order plus the total cost |

mod instance;
mod plan;
mod subset;

pub use instance::Instance;
pub use plan::{DayPlan, Infeasibility, ScheduleOutcome, ShiftPlan};
pub use subset::Subset;
