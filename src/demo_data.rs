//! Seeded demo instance generators.
//!
//! Produces reproducible random instances for examples, benchmarks, and
//! property tests. The same parameters and seed always yield the same
//! instance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Instance;

/// Built-in demo presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoData {
    /// 4 employees over 3 days.
    Small,
    /// 8 employees over a 7-day week, sparser availability.
    Week,
}

impl std::str::FromStr for DemoData {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SMALL" => Ok(DemoData::Small),
            "WEEK" => Ok(DemoData::Week),
            _ => Err(()),
        }
    }
}

impl DemoData {
    /// Preset name as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoData::Small => "SMALL",
            DemoData::Week => "WEEK",
        }
    }

    /// Generation parameters for this preset.
    pub fn parameters(&self) -> DemoParameters {
        match self {
            DemoData::Small => DemoParameters::new(4, 3),
            DemoData::Week => DemoParameters::new(8, 7)
                .with_availability_rate(0.65)
                .with_preference_range(-2, 12),
        }
    }
}

/// Shape and distribution of a generated instance.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoParameters {
    /// Number of employees (E).
    pub employee_count: usize,
    /// Number of days (D).
    pub day_count: usize,
    /// Probability that an employee is available on a given day.
    pub availability_rate: f64,
    /// Lowest preference value (inclusive).
    pub min_preference: i64,
    /// Highest preference value (inclusive).
    pub max_preference: i64,
    /// When set, each day's headcount never exceeds that day's availability.
    pub satisfiable: bool,
}

impl DemoParameters {
    /// Creates parameters with 80% availability, preferences in `0..=10`,
    /// and satisfiable headcounts.
    pub fn new(employee_count: usize, day_count: usize) -> Self {
        Self {
            employee_count,
            day_count,
            availability_rate: 0.8,
            min_preference: 0,
            max_preference: 10,
            satisfiable: true,
        }
    }

    /// Sets the availability probability (clamped to `[0, 1]`; non-finite
    /// values mean always available).
    pub fn with_availability_rate(mut self, rate: f64) -> Self {
        self.availability_rate = if rate.is_finite() {
            rate.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self
    }

    /// Sets the preference range; bounds are swapped if reversed.
    pub fn with_preference_range(mut self, min: i64, max: i64) -> Self {
        self.min_preference = min.min(max);
        self.max_preference = min.max(max);
        self
    }

    /// Whether headcounts are capped at each day's availability.
    pub fn with_satisfiable(mut self, satisfiable: bool) -> Self {
        self.satisfiable = satisfiable;
        self
    }
}

/// Generates a demo instance with seed 0.
pub fn generate(demo: DemoData) -> Instance {
    generate_with(&demo.parameters(), 0)
}

/// Generates an instance from explicit parameters and a seed.
pub fn generate_with(params: &DemoParameters, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let (employees, days) = (params.employee_count, params.day_count);
    let (low, high) = (
        params.min_preference.min(params.max_preference),
        params.min_preference.max(params.max_preference),
    );
    let rate = if params.availability_rate.is_finite() {
        params.availability_rate.clamp(0.0, 1.0)
    } else {
        1.0
    };

    let availability: Vec<Vec<bool>> = (0..employees)
        .map(|_| (0..days).map(|_| rng.random_bool(rate)).collect())
        .collect();

    let preference: Vec<Vec<i64>> = (0..employees)
        .map(|_| (0..days).map(|_| rng.random_range(low..=high)).collect())
        .collect();

    let instance = Instance::new(employees, days)
        .with_availability(availability)
        .with_preference(preference);

    let required = (0..days)
        .map(|day| {
            let cap = if params.satisfiable {
                instance.available_count(day)
            } else {
                employees
            };
            rng.random_range(0..=cap)
        })
        .collect();

    instance.with_required(required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ShiftScheduler;
    use crate::validation::validate_instance;

    #[test]
    fn test_generate_shape() {
        let inst = generate(DemoData::Week);
        assert_eq!(inst.employee_count, 8);
        assert_eq!(inst.day_count, 7);
        assert!(validate_instance(&inst).is_ok());
    }

    #[test]
    fn test_generate_deterministic() {
        let params = DemoData::Small.parameters();
        assert_eq!(generate_with(&params, 7), generate_with(&params, 7));
    }

    #[test]
    fn test_preference_range() {
        let params = DemoParameters::new(5, 5).with_preference_range(3, -3);
        let inst = generate_with(&params, 11);
        assert!(inst.preference.iter().flatten().all(|&p| (-3..=3).contains(&p)));
    }

    #[test]
    fn test_satisfiable_instances_are_feasible() {
        let scheduler = ShiftScheduler::new();
        for seed in 0..20 {
            let inst = generate_with(&DemoData::Small.parameters(), seed);
            for day in 0..inst.day_count {
                assert!(inst.required[day] <= inst.available_count(day));
            }
            assert!(scheduler.schedule(&inst).unwrap().is_feasible());
        }
    }

    #[test]
    fn test_parse_demo_name() {
        assert_eq!("week".parse::<DemoData>(), Ok(DemoData::Week));
        assert_eq!(DemoData::Small.as_str(), "SMALL");
        assert!("huge".parse::<DemoData>().is_err());
    }
}
