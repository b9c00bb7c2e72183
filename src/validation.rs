//! Input validation and plan verification.
//!
//! Checks structural integrity of an instance before scheduling:
//! - Availability matrix is E × D
//! - Preference matrix is E × D
//! - Required headcount has one entry per day
//!
//! Also verifies a finished plan against its instance, reporting every
//! day that breaks headcount or availability.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Instance, ShiftPlan, Subset};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Availability rows or columns do not match E × D.
    AvailabilityShape,
    /// Preference rows or columns do not match E × D.
    PreferenceShape,
    /// Required headcount length differs from D.
    RequiredShape,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the shape of an instance.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &Instance) -> ValidationResult {
    let mut errors = Vec::new();

    check_matrix_shape(
        instance.availability.iter().map(Vec::len),
        instance.employee_count,
        instance.day_count,
        "availability",
        ValidationErrorKind::AvailabilityShape,
        &mut errors,
    );
    check_matrix_shape(
        instance.preference.iter().map(Vec::len),
        instance.employee_count,
        instance.day_count,
        "preference",
        ValidationErrorKind::PreferenceShape,
        &mut errors,
    );

    if instance.required.len() != instance.day_count {
        errors.push(ValidationError::new(
            ValidationErrorKind::RequiredShape,
            format!(
                "required headcount has {} entries, expected {}",
                instance.required.len(),
                instance.day_count
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_matrix_shape(
    row_lengths: impl ExactSizeIterator<Item = usize>,
    rows: usize,
    cols: usize,
    name: &str,
    kind: ValidationErrorKind,
    errors: &mut Vec<ValidationError>,
) {
    if row_lengths.len() != rows {
        errors.push(ValidationError::new(
            kind,
            format!("{name} matrix has {} rows, expected {rows}", row_lengths.len()),
        ));
        return;
    }
    for (employee, len) in row_lengths.enumerate() {
        if len != cols {
            errors.push(ValidationError::new(
                kind.clone(),
                format!("{name} row for employee {employee} has {len} days, expected {cols}"),
            ));
        }
    }
}

/// A constraint broken by a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanViolation {
    /// Plan covers a different number of days than the instance.
    DayCountMismatch { expected: usize, actual: usize },
    /// Headcount on a day differs from the requirement.
    Headcount {
        day: usize,
        required: usize,
        assigned: usize,
    },
    /// An unavailable (or nonexistent) employee was assigned.
    Unavailable { day: usize, employee: usize },
    /// Recorded cost differs from the instance preferences.
    CostMismatch { expected: i128, actual: i64 },
}

/// Verifies a plan against its instance.
///
/// Returns every violation found; an empty vector means the plan honours
/// headcount and availability on every day and its costs are consistent.
pub fn verify_plan(instance: &Instance, plan: &ShiftPlan) -> Vec<PlanViolation> {
    let mut violations = Vec::new();

    if plan.day_count() != instance.day_count {
        violations.push(PlanViolation::DayCountMismatch {
            expected: instance.day_count,
            actual: plan.day_count(),
        });
    }

    let mut expected_total: i128 = 0;
    for (day, day_plan) in plan.days.iter().enumerate() {
        let subset: Subset = day_plan.subset;

        let required = instance.required_on(day);
        if subset.len() != required {
            violations.push(PlanViolation::Headcount {
                day,
                required,
                assigned: subset.len(),
            });
        }

        for employee in subset.employees() {
            if employee >= instance.employee_count || !instance.is_available(employee, day) {
                violations.push(PlanViolation::Unavailable { day, employee });
            }
        }

        expected_total += instance.subset_cost_wide(subset, day);
    }

    if expected_total != i128::from(plan.total_cost) {
        violations.push(PlanViolation::CostMismatch {
            expected: expected_total,
            actual: plan.total_cost,
        });
    }

    violations
}
