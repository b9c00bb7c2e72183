//! Employee subset (bitmask) model.
//!
//! A subset is the DP state: bit `i` set means employee `i` works that day.
//! Subsets double as dense indices into per-day DP layers, so the
//! representation stays a plain unsigned integer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A set of employees encoded as a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subset(u32);

impl Subset {
    /// The empty subset (nobody works).
    pub const EMPTY: Subset = Subset(0);

    /// Wraps a raw bitmask.
    #[inline]
    pub fn from_mask(mask: u32) -> Self {
        Self(mask)
    }

    /// Builds a subset from employee indices.
    ///
    /// Indices of 32 or more cannot be represented and are ignored.
    pub fn from_employees<I: IntoIterator<Item = usize>>(employees: I) -> Self {
        let mask = employees
            .into_iter()
            .filter(|&e| e < u32::BITS as usize)
            .fold(0u32, |acc, e| acc | (1 << e));
        Self(mask)
    }

    /// Raw bitmask.
    #[inline]
    pub fn mask(self) -> u32 {
        self.0
    }

    /// Dense index of this subset within a DP layer.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether employee `employee` is in the subset.
    #[inline]
    pub fn contains(self, employee: usize) -> bool {
        employee < u32::BITS as usize && self.0 & (1 << employee) != 0
    }

    /// Number of employees in the subset (population count).
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the subset is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Employee indices in ascending order.
    pub fn employees(self) -> impl Iterator<Item = usize> {
        let mask = self.0;
        (0..u32::BITS as usize).filter(move |&e| mask & (1 << e) != 0)
    }

    /// Number of subsets over `employee_count` employees (`2^E`).
    ///
    /// Callers bound `employee_count` before calling; see
    /// [`crate::scheduler::MAX_SUPPORTED_EMPLOYEES`].
    #[inline]
    pub fn space_size(employee_count: usize) -> usize {
        1usize << employee_count
    }

    /// Enumerates every subset of `employee_count` employees in increasing
    /// numeric order.
    pub fn all(employee_count: usize) -> impl Iterator<Item = Subset> {
        (0..Self::space_size(employee_count) as u32).map(Subset)
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, e) in self.employees().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "}}")
    }
}

impl From<u32> for Subset {
    fn from(mask: u32) -> Self {
        Self(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_employees() {
        let s = Subset::from_employees([0, 2]);
        assert_eq!(s.mask(), 0b101);
        assert!(s.contains(0));
        assert!(!s.contains(1));
        assert!(s.contains(2));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_employees_ascending() {
        let s = Subset::from_mask(0b1010_0001);
        assert_eq!(s.employees().collect::<Vec<_>>(), vec![0, 5, 7]);
    }

    #[test]
    fn test_empty() {
        assert!(Subset::EMPTY.is_empty());
        assert_eq!(Subset::EMPTY.len(), 0);
        assert_eq!(Subset::EMPTY.employees().count(), 0);
        assert!(!Subset::EMPTY.contains(40));
    }

    #[test]
    fn test_all_enumeration_order() {
        let all: Vec<u32> = Subset::all(3).map(Subset::mask).collect();
        assert_eq!(all, (0..8).collect::<Vec<_>>());
        assert_eq!(Subset::all(0).count(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Subset::from_employees([1, 3]).to_string(), "{1, 3}");
        assert_eq!(Subset::EMPTY.to_string(), "{}");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Subset::from_mask(6)).unwrap();
        assert_eq!(json, "6");
        let back: Subset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Subset::from_mask(6));
    }
}
