//! Scheduler errors.
//!
//! Rejected inputs and arithmetic failures. An instance with no feasible
//! plan is not an error; see [`crate::models::ScheduleOutcome`].

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by [`crate::scheduler::ShiftScheduler::schedule`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulerError {
    /// Employee or day count exceeds the configured maximum.
    #[error(
        "instance of {employees} employees x {days} days exceeds limit of {max_employees} x {max_days}"
    )]
    InvalidDimensions {
        employees: usize,
        days: usize,
        max_employees: usize,
        max_days: usize,
    },
    /// Matrix shapes do not match the declared dimensions.
    #[error("invalid instance: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
    /// Accumulated cost left the `i64` range.
    #[error("cost overflow on day {day}")]
    CostOverflow { day: usize },
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_dimensions_message() {
        let err = SchedulerError::InvalidDimensions {
            employees: 12,
            days: 3,
            max_employees: 10,
            max_days: 7,
        };
        assert_eq!(
            err.to_string(),
            "instance of 12 employees x 3 days exceeds limit of 10 x 7"
        );
    }

    #[test]
    fn test_invalid_input_message_joins() {
        let err = SchedulerError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::AvailabilityShape, "a"),
            ValidationError::new(ValidationErrorKind::RequiredShape, "b"),
        ]);
        assert_eq!(err.to_string(), "invalid instance: a; b");
    }
}
