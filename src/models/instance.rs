//! Problem instance model.
//!
//! An instance fixes the planning horizon: how many employees and days,
//! who is available when, what each assignment costs, and the exact
//! headcount each day needs. Instances are immutable inputs to the
//! scheduler.

use serde::{Deserialize, Serialize};

use super::Subset;

/// A shift assignment problem over `employee_count × day_count`.
///
/// Matrices are indexed `[employee][day]`. Preference values are costs:
/// lower is better, negative values act as bonuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Number of employees (E).
    pub employee_count: usize,
    /// Number of days in the horizon (D).
    pub day_count: usize,
    /// `availability[e][d]`: employee `e` may work on day `d`.
    pub availability: Vec<Vec<bool>>,
    /// `preference[e][d]`: cost of assigning employee `e` on day `d`.
    pub preference: Vec<Vec<i64>>,
    /// `required[d]`: exact headcount for day `d`.
    pub required: Vec<usize>,
}

impl Instance {
    /// Creates an instance where everyone is available, every assignment
    /// costs zero and no day needs anyone.
    pub fn new(employee_count: usize, day_count: usize) -> Self {
        Self {
            employee_count,
            day_count,
            availability: vec![vec![true; day_count]; employee_count],
            preference: vec![vec![0; day_count]; employee_count],
            required: vec![0; day_count],
        }
    }

    /// Sets the availability matrix.
    pub fn with_availability(mut self, availability: Vec<Vec<bool>>) -> Self {
        self.availability = availability;
        self
    }

    /// Sets the availability matrix from 0/1 flags (non-zero = available).
    pub fn with_availability_flags(mut self, flags: Vec<Vec<u8>>) -> Self {
        self.availability = flags
            .into_iter()
            .map(|row| row.into_iter().map(|f| f != 0).collect())
            .collect();
        self
    }

    /// Sets the preference (cost) matrix.
    pub fn with_preference(mut self, preference: Vec<Vec<i64>>) -> Self {
        self.preference = preference;
        self
    }

    /// Sets the per-day required headcount.
    pub fn with_required(mut self, required: Vec<usize>) -> Self {
        self.required = required;
        self
    }

    /// Whether `employee` may work on `day`. Missing cells read as unavailable.
    #[inline]
    pub fn is_available(&self, employee: usize, day: usize) -> bool {
        self.availability
            .get(employee)
            .and_then(|r| r.get(day))
            .copied()
            .unwrap_or(false)
    }

    /// Headcount required on `day` (zero outside the horizon).
    #[inline]
    pub fn required_on(&self, day: usize) -> usize {
        self.required.get(day).copied().unwrap_or(0)
    }

    /// Number of employees available on `day`.
    pub fn available_count(&self, day: usize) -> usize {
        (0..self.employee_count)
            .filter(|&e| self.is_available(e, day))
            .count()
    }

    /// Whether `subset` may work `day`.
    ///
    /// Every member must be an employee of this instance and available on
    /// `day`, and the subset size must equal `required[day]` exactly.
    /// Over-staffing is as invalid as under-staffing.
    pub fn is_valid_subset(&self, subset: Subset, day: usize) -> bool {
        if day >= self.day_count {
            return false;
        }
        let mut count = 0;
        for e in subset.employees() {
            if e >= self.employee_count || !self.is_available(e, day) {
                return false;
            }
            count += 1;
        }
        count == self.required_on(day)
    }

    /// Sum of `preference[e][day]` over the members of `subset`.
    ///
    /// Does not check validity. Returns `None` only if the sum overflows `i64`.
    pub fn subset_cost(&self, subset: Subset, day: usize) -> Option<i64> {
        subset.employees().try_fold(0i64, |acc, e| {
            let cost = self
                .preference
                .get(e)
                .and_then(|r| r.get(day))
                .copied()
                .unwrap_or(0);
            acc.checked_add(cost)
        })
    }

    /// [`Self::subset_cost`] widened to `i128`, which cannot overflow for
    /// any subset of up to 32 employees.
    pub fn subset_cost_wide(&self, subset: Subset, day: usize) -> i128 {
        subset
            .employees()
            .filter_map(|e| self.preference.get(e).and_then(|r| r.get(day)))
            .map(|&cost| i128::from(cost))
            .sum()
    }
}
