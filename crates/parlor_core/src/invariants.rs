//! First-class board invariants.
//!
//! Invariants are logical properties that must hold after every resolved move.
//! Engines compose them into sets and assert them in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Joins violation descriptions into one line for logging.
    pub fn summarize(violations: &[InvariantViolation]) -> String {
        violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two and three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;
    struct Positive;
    struct Small;

    impl Invariant<i32> for Even {
        fn holds(state: &i32) -> bool {
            state % 2 == 0
        }

        fn description() -> &'static str {
            "value is even"
        }
    }

    impl Invariant<i32> for Positive {
        fn holds(state: &i32) -> bool {
            *state > 0
        }

        fn description() -> &'static str {
            "value is positive"
        }
    }

    impl Invariant<i32> for Small {
        fn holds(state: &i32) -> bool {
            *state < 100
        }

        fn description() -> &'static str {
            "value is small"
        }
    }

    #[test]
    fn test_set_holds() {
        assert!(<(Even, Positive, Small)>::check_all(&42_i32).is_ok());
        assert!(<(Even, Positive, Small)>::check_all(&2_i32).is_ok());
    }

    #[test]
    fn test_set_collects_every_violation() {
        let violations = <(Even, Positive, Small)>::check_all(&-3_i32).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            InvariantViolation::summarize(&violations),
            "value is even; value is positive"
        );
    }
}
