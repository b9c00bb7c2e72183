//! Shift plan quality metrics (KPIs).
//!
//! Summarises a plan beyond its total cost: where the cost falls and how
//! evenly shifts are spread across employees.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Cost | Sum of daily subset costs |
//! | Cost by Day | Cost of each day's subset |
//! | Shifts by Employee | Days worked per employee |
//! | Shift Spread | Max shifts - min shifts |
//! | Avg Cost per Shift | Total cost / total shifts |

use crate::models::{Instance, ShiftPlan};

/// Shift plan performance indicators.
#[derive(Debug, Clone)]
pub struct PlanKpi {
    /// Total plan cost.
    pub total_cost: i64,
    /// Cost of each day, in day order.
    pub cost_by_day: Vec<i64>,
    /// Days worked, indexed by employee.
    pub shifts_by_employee: Vec<usize>,
    /// Total employee-days assigned.
    pub total_shifts: usize,
    /// Fewest shifts worked by any employee.
    pub min_shifts: usize,
    /// Most shifts worked by any employee.
    pub max_shifts: usize,
    /// Average cost per assigned shift (0.0 if none).
    pub avg_cost_per_shift: f64,
}

impl PlanKpi {
    /// Computes KPIs from a plan and its instance.
    ///
    /// The instance supplies the employee count so that employees with no
    /// shifts are counted.
    pub fn calculate(plan: &ShiftPlan, instance: &Instance) -> Self {
        let mut shifts_by_employee = vec![0usize; instance.employee_count];
        for day in &plan.days {
            for e in day.subset.employees() {
                if let Some(count) = shifts_by_employee.get_mut(e) {
                    *count += 1;
                }
            }
        }

        let total_shifts: usize = shifts_by_employee.iter().sum();
        let min_shifts = shifts_by_employee.iter().copied().min().unwrap_or(0);
        let max_shifts = shifts_by_employee.iter().copied().max().unwrap_or(0);

        let avg_cost_per_shift = if total_shifts == 0 {
            0.0
        } else {
            plan.total_cost as f64 / total_shifts as f64
        };

        Self {
            total_cost: plan.total_cost,
            cost_by_day: plan.days.iter().map(|d| d.cost).collect(),
            shifts_by_employee,
            total_shifts,
            min_shifts,
            max_shifts,
            avg_cost_per_shift,
        }
    }

    /// Difference between the busiest and least busy employee.
    #[inline]
    pub fn shift_spread(&self) -> usize {
        self.max_shifts - self.min_shifts
    }

    /// Whether the plan stays within a cost budget and a shift spread.
    pub fn meets_thresholds(&self, max_cost: i64, max_spread: usize) -> bool {
        self.total_cost <= max_cost && self.shift_spread() <= max_spread
    }
}
