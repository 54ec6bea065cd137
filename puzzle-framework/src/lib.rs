//! Traits for parsing puzzle input and solving it in two parts.
//!
//! A puzzle is described by an input type implementing [`ParseData`] and a solver type
//! implementing [`Solution`] once for [`PartOne`] and once for [`PartTwo`]. The [`runner`] module
//! drives both through an [`OutputHandler`][runner::OutputHandler].
//!
//! ```
//! use puzzle_framework::{DynamicResult, ParseData, PartOne, Solution};
//!
//! struct Widths(Vec<usize>);
//!
//! impl ParseData for Widths {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         Ok(Self(input.lines().map(str::len).collect()))
//!     }
//! }
//!
//! struct Widest;
//!
//! impl Solution<PartOne> for Widest {
//!     type Input = Widths;
//!     type Output = usize;
//!
//!     fn solve(input: &Widths) -> DynamicResult<usize> {
//!         Ok(input.0.iter().copied().max().unwrap_or_default())
//!     }
//! }
//! ```

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod parsing;
pub mod runner;

mod private {
    /// Sealing trait; only this crate can implement [`Part`][super::Part].
    pub trait Sealed {}
}

/// A boxed error of any kind, sendable across threads.
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result whose error is a [`DynamicError`].
pub type DynamicResult<T> = Result<T, DynamicError>;

/// Which half of a puzzle is being solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// Type-level tag selecting a puzzle half for [`Solution`].
pub trait Part: private::Sealed {
    fn kind() -> PartKind;
}

/// Tag for the first half of a puzzle.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Tag for the second half of a puzzle.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// Solves one [`Part`] of a puzzle from its parsed input.
pub trait Solution<P: Part> {
    /// The parsed input, borrowed by [`Solution::solve`].
    type Input: ?Sized;

    /// The answer, printed by the runner.
    type Output: Display;

    /// Compute the answer.
    ///
    /// # Errors
    ///
    /// Any failure to find an answer (invalid input, no solution, arithmetic overflow) is
    /// returned as a [`DynamicError`].
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// Builds a value from the raw puzzle input text.
pub trait ParseData {
    /// Parse the whole input.
    ///
    /// # Errors
    ///
    /// Malformed input is returned as a [`DynamicError`].
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}
