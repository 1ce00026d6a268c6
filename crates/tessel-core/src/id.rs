//! Strongly-typed step counter.

use std::fmt;

/// Monotonically increasing step counter.
///
/// Incremented each time the simulation sweeps the grid once. Steps that
/// are no-ops (a settled terrain rule) do not advance it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl StepId {
    /// The id following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(StepId::default(), StepId(0));
    }

    #[test]
    fn next_increments() {
        assert_eq!(StepId(41).next(), StepId(42));
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(StepId(7).to_string(), "7");
    }
}
