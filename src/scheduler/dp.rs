//! Exact shift scheduler: forward DP over employee subsets.
//!
//! # Algorithm
//!
//! 1. For each day, enumerate subsets `[0, 2^E)` and keep the valid ones
//!    (everyone available, headcount exact) with their cost.
//! 2. Day 0: each valid subset costs its own preference sum.
//! 3. Day d: relax every valid subset against every reachable subset of
//!    day d-1 in increasing index order. Strict `<`, so the earliest
//!    predecessor wins ties.
//! 4. Pick the lowest-indexed subset with minimum cost on the last day.
//! 5. Follow back pointers to day 0.
//!
//! Days do not constrain each other, so a day with no valid subset is the
//! only way a layer becomes unreachable; the run stops there as infeasible.
//!
//! Cumulative costs are held as `i128`, so intermediate sums never
//! overflow. Only the chosen plan has to fit in `i64`.
//!
//! # Complexity
//! O(D · 4^E) time, O(D · 2^E) space.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::SchedulerError;
use crate::models::{DayPlan, Infeasibility, Instance, ScheduleOutcome, ShiftPlan, Subset};
use crate::validation::validate_instance;

/// Widest employee count the dense DP table is allowed to cover.
pub const MAX_SUPPORTED_EMPLOYEES: usize = 16;

/// Longest horizon the scheduler can be configured for.
pub const MAX_SUPPORTED_DAYS: usize = 31;

/// Scheduler limits.
///
/// Instances above these bounds are rejected before any table is
/// allocated. Defaults are 10 employees and 7 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Maximum employee count (subset width).
    pub max_employees: usize,
    /// Maximum horizon length in days.
    pub max_days: usize,
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            max_employees: 10,
            max_days: 7,
        }
    }

    /// Sets the employee limit (clamped to [`MAX_SUPPORTED_EMPLOYEES`]).
    pub fn with_max_employees(mut self, max_employees: usize) -> Self {
        self.max_employees = max_employees.min(MAX_SUPPORTED_EMPLOYEES);
        self
    }

    /// Sets the day limit (clamped to [`MAX_SUPPORTED_DAYS`]).
    pub fn with_max_days(mut self, max_days: usize) -> Self {
        self.max_days = max_days.min(MAX_SUPPORTED_DAYS);
        self
    }

    /// Employee limit actually enforced.
    ///
    /// Fields are public and deserializable, so the hard cap is applied
    /// here as well as in the builder.
    #[inline]
    pub fn effective_max_employees(&self) -> usize {
        self.max_employees.min(MAX_SUPPORTED_EMPLOYEES)
    }

    /// Day limit actually enforced.
    #[inline]
    pub fn effective_max_days(&self) -> usize {
        self.max_days.min(MAX_SUPPORTED_DAYS)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Dense `(day, subset)` cost and back-pointer table for one run.
struct DpTable {
    width: usize,
    cost: Vec<Option<i128>>,
    back: Vec<Option<Subset>>,
}

impl DpTable {
    fn new(days: usize, width: usize) -> Self {
        Self {
            width,
            cost: vec![None; days * width],
            back: vec![None; days * width],
        }
    }

    #[inline]
    fn slot(&self, day: usize, subset: Subset) -> usize {
        day * self.width + subset.index()
    }

    #[inline]
    fn cost(&self, day: usize, subset: Subset) -> Option<i128> {
        self.cost[self.slot(day, subset)]
    }

    #[inline]
    fn back(&self, day: usize, subset: Subset) -> Option<Subset> {
        self.back[self.slot(day, subset)]
    }

    /// Stores `candidate` if it strictly improves the cell.
    fn relax(&mut self, day: usize, subset: Subset, candidate: i128, from: Option<Subset>) {
        let slot = self.slot(day, subset);
        if self.cost[slot].map_or(true, |current| candidate < current) {
            self.cost[slot] = Some(candidate);
            self.back[slot] = from;
        }
    }
}

/// Exact minimum-cost shift scheduler.
///
/// # Example
///
/// ```
/// use u_shift::models::{Instance, Subset};
/// use u_shift::scheduler::ShiftScheduler;
///
/// let instance = Instance::new(2, 1)
///     .with_preference(vec![vec![5], vec![3]])
///     .with_required(vec![1]);
///
/// let outcome = ShiftScheduler::new().schedule(&instance).unwrap();
/// let plan = outcome.plan().unwrap();
/// assert_eq!(plan.subset_on(0), Some(Subset::from_employees([1])));
/// assert_eq!(plan.total_cost, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftScheduler {
    config: SchedulerConfig,
}

impl ShiftScheduler {
    /// Creates a scheduler with default limits.
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::new(),
        }
    }

    /// Sets the limits.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Current limits.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Computes the minimum-cost plan for `instance`.
    ///
    /// # Errors
    /// - [`SchedulerError::InvalidDimensions`] if E or D exceed the limits.
    /// - [`SchedulerError::InvalidInput`] if matrix shapes do not match.
    /// - [`SchedulerError::CostOverflow`] if the optimal plan's total or one
    ///   of its daily costs does not fit in `i64`.
    ///
    /// An instance with no feasible plan is `Ok(ScheduleOutcome::Infeasible)`.
    pub fn schedule(&self, instance: &Instance) -> Result<ScheduleOutcome, SchedulerError> {
        self.check_dimensions(instance)?;
        validate_instance(instance).map_err(|errors| {
            warn!(errors = errors.len(), "rejected malformed instance");
            SchedulerError::InvalidInput(errors)
        })?;

        let days = instance.day_count;
        if days == 0 {
            info!("empty horizon, nothing to schedule");
            return Ok(ScheduleOutcome::Optimal(ShiftPlan::new()));
        }

        let mut table = DpTable::new(days, Subset::space_size(instance.employee_count));
        let mut reachable: Vec<Subset> = Vec::new();

        for day in 0..days {
            let layer = valid_layer(instance, day);

            for &(subset, cost) in &layer {
                if day == 0 {
                    table.relax(0, subset, cost, None);
                    continue;
                }
                for &prev in &reachable {
                    if let Some(prev_cost) = table.cost(day - 1, prev) {
                        table.relax(day, subset, prev_cost + cost, Some(prev));
                    }
                }
            }

            reachable = layer
                .iter()
                .map(|&(subset, _)| subset)
                .filter(|&subset| table.cost(day, subset).is_some())
                .collect();

            debug!(
                day,
                valid = layer.len(),
                reachable = reachable.len(),
                "filled DP layer"
            );

            if reachable.is_empty() {
                return Ok(infeasible(instance, day));
            }
        }

        let last = days - 1;
        let mut best: Option<(Subset, i128)> = None;
        for &subset in &reachable {
            if let Some(cost) = table.cost(last, subset) {
                if best.map_or(true, |(_, best_cost)| cost < best_cost) {
                    best = Some((subset, cost));
                }
            }
        }
        let Some((end, wide_total)) = best else {
            return Ok(infeasible(instance, last));
        };
        let total_cost = i64::try_from(wide_total).map_err(|_| {
            warn!(total = %wide_total, "optimal cost exceeds i64");
            SchedulerError::CostOverflow { day: last }
        })?;

        let plan = backtrack(instance, &table, end, total_cost)?;

        info!(
            employees = instance.employee_count,
            days,
            total_cost,
            "found optimal shift plan"
        );
        Ok(ScheduleOutcome::Optimal(plan))
    }

    fn check_dimensions(&self, instance: &Instance) -> Result<(), SchedulerError> {
        let max_employees = self.config.effective_max_employees();
        let max_days = self.config.effective_max_days();
        if instance.employee_count > max_employees || instance.day_count > max_days {
            warn!(
                employees = instance.employee_count,
                days = instance.day_count,
                max_employees,
                max_days,
                "instance exceeds configured limits"
            );
            return Err(SchedulerError::InvalidDimensions {
                employees: instance.employee_count,
                days: instance.day_count,
                max_employees,
                max_days,
            });
        }
        Ok(())
    }
}

/// Valid subsets for `day` with their costs, in increasing subset order.
fn valid_layer(instance: &Instance, day: usize) -> Vec<(Subset, i128)> {
    Subset::all(instance.employee_count)
        .filter(|&subset| instance.is_valid_subset(subset, day))
        .map(|subset| (subset, instance.subset_cost_wide(subset, day)))
        .collect()
}

/// Walks back pointers from the chosen end state and rebuilds the plan.
fn backtrack(
    instance: &Instance,
    table: &DpTable,
    end: Subset,
    total_cost: i64,
) -> Result<ShiftPlan, SchedulerError> {
    let days = instance.day_count;
    let mut path = Vec::with_capacity(days);
    let mut cursor = Some(end);
    let mut day = days;

    while let Some(subset) = cursor {
        day -= 1;
        path.push(subset);
        cursor = if day == 0 {
            None
        } else {
            table.back(day, subset)
        };
    }
    debug_assert_eq!(path.len(), days);
    path.reverse();

    // Prefix sums may leave i64 even when the total fits, so the total is
    // taken from the table rather than re-accumulated.
    let day_plans = path
        .into_iter()
        .enumerate()
        .map(|(day, subset)| {
            instance
                .subset_cost(subset, day)
                .map(|cost| DayPlan::new(day, subset, cost))
                .ok_or(SchedulerError::CostOverflow { day })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ShiftPlan {
        days: day_plans,
        total_cost,
    })
}

fn infeasible(instance: &Instance, day: usize) -> ScheduleOutcome {
    let infeasibility = Infeasibility {
        day,
        required: instance.required_on(day),
        available: instance.available_count(day),
    };
    info!(
        day,
        required = infeasibility.required,
        available = infeasibility.available,
        "no feasible shift plan"
    );
    ScheduleOutcome::Infeasible(infeasibility)
}
