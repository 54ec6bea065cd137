//! Step counts at which a walk reaches an end node, as periodic sets.

use std::fmt::Display;

use crate::number_theory::{DiophantineError, diophantine};

/// The integer type for step counts.
pub type StepNumber = i64;

/// Intermediate type for merge arithmetic.
type Wide = i128;

/// A set of step counts: `value` alone when `offset` is 0, otherwise
/// `value, value + offset, value + 2*offset, ...`.
///
/// Both fields are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeriodicStep {
    pub value: StepNumber,
    pub offset: StepNumber,
}

impl Display for PeriodicStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.offset == 0 {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} + k*{}", self.value, self.offset)
        }
    }
}

/// An error merging two [`PeriodicStep`]s.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StepMergeError {
    #[error("step counts overflowed while merging {0} with {1}")]
    Overflow(PeriodicStep, PeriodicStep),

    #[error(transparent)]
    Diophantine(#[from] DiophantineError),
}

impl PeriodicStep {
    /// A step count that is reached only once.
    #[must_use]
    pub fn fixed(value: StepNumber) -> Self {
        Self { value, offset: 0 }
    }

    /// A step count reached again every `offset` steps.
    #[must_use]
    pub fn periodic(value: StepNumber, offset: StepNumber) -> Self {
        Self { value, offset }
    }

    /// Whether `step` is a member of this set.
    #[must_use]
    pub fn contains(&self, step: StepNumber) -> bool {
        if step < self.value {
            false
        } else if self.offset == 0 {
            step == self.value
        } else {
            (step - self.value) % self.offset == 0
        }
    }

    /// The intersection of two step sets, or `None` if they never coincide.
    ///
    /// The merged value is the smallest common member not below either input's value, and the
    /// merged period is the lcm of both periods. When exactly one input is fixed, the merge is
    /// fixed too.
    ///
    /// # Errors
    ///
    /// A merged value or period that does not fit in [`StepNumber`] is returned as a
    /// [`StepMergeError`].
    pub fn merge(&self, other: &Self) -> Result<Option<Self>, StepMergeError> {
        if self.offset == 0 && other.offset == 0 {
            return Ok((self.value == other.value).then_some(*self));
        }

        // products of two step numbers stay well inside i128
        let (value, offset) = (Wide::from(self.value), Wide::from(self.offset));
        let (other_value, other_offset) = (Wide::from(other.value), Wide::from(other.offset));

        // value + x * offset = other_value + y * other_offset
        let Some((root, _)) = diophantine(offset, -other_offset, other_value - value)? else {
            return Ok(None);
        };

        // x is only needed modulo its own period, which keeps the candidate below value + lcm
        let x_period = root.offset.abs();
        let x = if x_period == 0 {
            root.x
        } else {
            root.x.rem_euclid(x_period)
        };

        let candidate = value + x * offset;
        let merged_offset = offset * x_period;
        let min_value = value.max(other_value);

        let merged_value = if merged_offset == 0 {
            if candidate < min_value {
                return Ok(None);
            }
            candidate
        } else {
            min_value + (candidate - min_value).rem_euclid(merged_offset)
        };

        let narrow = |wide: Wide| {
            StepNumber::try_from(wide).map_err(|_| StepMergeError::Overflow(*self, *other))
        };
        let merged = Self {
            value: narrow(merged_value)?,
            offset: narrow(merged_offset)?,
        };

        debug_assert!(self.contains(merged.value) && other.contains(merged.value));
        Ok(Some(merged))
    }
}
