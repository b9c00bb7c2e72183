//! Exact daily shift assignment for small teams.
//!
//! Given who is available each day, what each assignment costs, and the
//! exact headcount each day needs, finds the minimum-cost sequence of daily
//! work subsets, or reports that none exists.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Instance`, `Subset`, `DayPlan`,
//!   `ShiftPlan`, `ScheduleOutcome`
//! - **`scheduler`**: `ShiftScheduler` (subset DP) and `PlanKpi`
//! - **`validation`**: Instance shape checks and plan verification
//! - **`demo_data`**: Seeded random instances
//!
//! # Example
//!
//! ```
//! use u_shift::models::Instance;
//! use u_shift::scheduler::ShiftScheduler;
//!
//! let instance = Instance::new(2, 2)
//!     .with_availability_flags(vec![vec![1, 0], vec![1, 1]])
//!     .with_preference(vec![vec![1, 1], vec![1, 1]])
//!     .with_required(vec![1, 1]);
//!
//! let outcome = ShiftScheduler::new().schedule(&instance).unwrap();
//! let plan = outcome.plan().unwrap();
//! assert_eq!(plan.employees_on(1), vec![1]);
//! assert_eq!(plan.total_cost, 2);
//! ```
//!
//! # References
//!
//! - Bellman (1957), "Dynamic Programming"
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"

pub mod demo_data;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::SchedulerError;
