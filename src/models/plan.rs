//! Shift plan (solution) model.
//!
//! A plan is the optimal sequence of daily work subsets with its total
//! cost. A run that cannot satisfy every day yields an [`Infeasibility`]
//! instead, wrapped in [`ScheduleOutcome`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Subset;

/// The subset working one day of the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day index (0-based).
    pub day: usize,
    /// Employees working this day.
    pub subset: Subset,
    /// Cost of this day's subset.
    pub cost: i64,
}

/// A complete shift plan, one [`DayPlan`] per day in day order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPlan {
    /// Daily assignments, ordered by day.
    pub days: Vec<DayPlan>,
    /// Sum of all daily costs.
    pub total_cost: i64,
}

/// Why a run found no plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infeasibility {
    /// First day with no valid subset.
    pub day: usize,
    /// Headcount required that day.
    pub required: usize,
    /// Employees available that day.
    pub available: usize,
}

/// Result of a scheduling run on a structurally valid instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleOutcome {
    /// Minimum-cost plan.
    Optimal(ShiftPlan),
    /// No day-by-day assignment satisfies every constraint.
    Infeasible(Infeasibility),
}

impl DayPlan {
    /// Creates a day plan.
    pub fn new(day: usize, subset: Subset, cost: i64) -> Self {
        Self { day, subset, cost }
    }

    /// Number of employees working.
    #[inline]
    pub fn headcount(&self) -> usize {
        self.subset.len()
    }
}

impl ShiftPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a day; the total cost is updated.
    ///
    /// The total saturates at the `i64` bounds instead of overflowing.
    /// Plans whose prefix sums leave `i64` should set `total_cost` directly.
    pub fn push_day(&mut self, day: DayPlan) {
        self.total_cost = self.total_cost.saturating_add(day.cost);
        self.days.push(day);
    }

    /// Number of days covered.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Daily subsets as raw bitmasks.
    pub fn masks(&self) -> Vec<u32> {
        self.days.iter().map(|d| d.subset.mask()).collect()
    }

    /// Subset working on `day`.
    pub fn subset_on(&self, day: usize) -> Option<Subset> {
        self.days.get(day).map(|d| d.subset)
    }

    /// Employee indices working on `day` (empty outside the horizon).
    pub fn employees_on(&self, day: usize) -> Vec<usize> {
        self.subset_on(day)
            .map(|s| s.employees().collect())
            .unwrap_or_default()
    }

    /// Days on which `employee` works.
    pub fn shifts_for(&self, employee: usize) -> Vec<usize> {
        self.days
            .iter()
            .filter(|d| d.subset.contains(employee))
            .map(|d| d.day)
            .collect()
    }

    /// Cost of a single day.
    pub fn cost_of_day(&self, day: usize) -> Option<i64> {
        self.days.get(day).map(|d| d.cost)
    }
}

/// Renders one `Day <n>: <mask>` line per day (1-based), then the total.
impl fmt::Display for ShiftPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.days {
            writeln!(f, "Day {}: {}", d.day + 1, d.subset.mask())?;
        }
        write!(f, "Minimum Cost: {}", self.total_cost)
    }
}

impl fmt::Display for Infeasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "day {} needs {} employee(s) but only {} available",
            self.day + 1,
            self.required,
            self.available
        )
    }
}

impl ScheduleOutcome {
    /// Whether a plan was found.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Optimal(_))
    }

    /// The plan, if feasible.
    pub fn plan(&self) -> Option<&ShiftPlan> {
        match self {
            Self::Optimal(plan) => Some(plan),
            Self::Infeasible(_) => None,
        }
    }

    /// Consumes the outcome, returning the plan if feasible.
    pub fn into_plan(self) -> Option<ShiftPlan> {
        match self {
            Self::Optimal(plan) => Some(plan),
            Self::Infeasible(_) => None,
        }
    }

    /// Total cost, if feasible.
    pub fn total_cost(&self) -> Option<i64> {
        self.plan().map(|p| p.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> ShiftPlan {
        let mut plan = ShiftPlan::new();
        plan.push_day(DayPlan::new(0, Subset::from_employees([0, 2]), 5));
        plan.push_day(DayPlan::new(1, Subset::from_employees([1]), -2));
        plan.push_day(DayPlan::new(2, Subset::from_employees([0, 1]), 4));
        plan
    }

    #[test]
    fn test_push_day_accumulates_cost() {
        let plan = sample_plan();
        assert_eq!(plan.total_cost, 7);
        assert_eq!(plan.day_count(), 3);
    }

    #[test]
    fn test_push_day_saturates() {
        let mut plan = ShiftPlan::new();
        plan.push_day(DayPlan::new(0, Subset::from_mask(1), i64::MAX));
        plan.push_day(DayPlan::new(1, Subset::from_mask(1), 5));
        assert_eq!(plan.total_cost, i64::MAX);

        let mut low = ShiftPlan::new();
        low.push_day(DayPlan::new(0, Subset::from_mask(1), i64::MIN));
        low.push_day(DayPlan::new(1, Subset::from_mask(1), -1));
        assert_eq!(low.total_cost, i64::MIN);
    }

    #[test]
    fn test_masks() {
        assert_eq!(sample_plan().masks(), vec![0b101, 0b010, 0b011]);
    }

    #[test]
    fn test_employees_on() {
        let plan = sample_plan();
        assert_eq!(plan.employees_on(0), vec![0, 2]);
        assert!(plan.employees_on(9).is_empty());
    }

    #[test]
    fn test_shifts_for() {
        let plan = sample_plan();
        assert_eq!(plan.shifts_for(0), vec![0, 2]);
        assert_eq!(plan.shifts_for(1), vec![1, 2]);
        assert_eq!(plan.shifts_for(2), vec![0]);
        assert!(plan.shifts_for(3).is_empty());
    }

    #[test]
    fn test_cost_of_day() {
        let plan = sample_plan();
        assert_eq!(plan.cost_of_day(1), Some(-2));
        assert_eq!(plan.cost_of_day(3), None);
    }

    #[test]
    fn test_display_format() {
        let text = sample_plan().to_string();
        assert_eq!(text, "Day 1: 5\nDay 2: 2\nDay 3: 3\nMinimum Cost: 7");
    }

    #[test]
    fn test_outcome_accessors() {
        let ok = ScheduleOutcome::Optimal(sample_plan());
        assert!(ok.is_feasible());
        assert_eq!(ok.total_cost(), Some(7));

        let bad = ScheduleOutcome::Infeasible(Infeasibility {
            day: 0,
            required: 1,
            available: 0,
        });
        assert!(!bad.is_feasible());
        assert!(bad.plan().is_none());
        assert_eq!(bad.total_cost(), None);
    }

    #[test]
    fn test_zero_cost_plan_distinct_from_infeasible() {
        let empty = ScheduleOutcome::Optimal(ShiftPlan::new());
        assert_eq!(empty.total_cost(), Some(0));
        assert!(empty.is_feasible());
    }

    #[test]
    fn test_outcome_serde() {
        let ok = ScheduleOutcome::Optimal(sample_plan());
        let json = serde_json::to_string(&ok).unwrap();
        let back: ScheduleOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ok);
    }
}
