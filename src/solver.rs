use std::collections::HashSet;

use puzzle_framework::runner::solution_runner;
use puzzle_framework::{DynamicResult, PartOne, PartTwo, Solution};

use crate::network::{Network, NodeId};
use crate::step::{PeriodicStep, StepMergeError, StepNumber};
use crate::walker::WalkError;

#[solution_runner(
    name = "Haunted Wasteland",
    parsed = Network,
    part_one = HauntedWasteland,
    part_two = HauntedWasteland
)]
pub struct HauntedWasteland;

/// Label of the node part one starts from.
const START_LABEL: &str = "AAA";
/// Label of the node part one walks to.
const END_LABEL: &str = "ZZZ";
/// Suffix of the labels part two starts from.
const START_SUFFIX: char = 'A';
/// Suffix of the labels part two walks to.
const END_SUFFIX: char = 'Z';

/// An error finding a path length through a [`Network`].
#[derive(thiserror::Error, Debug)]
pub enum SolveError {
    #[error("no node is labeled {0:?}")]
    UnknownLabel(String),

    #[error("no node label ends with {0:?}")]
    NoMatchingNodes(char),

    #[error("walking from {start:?} never reaches {end:?}")]
    Unreachable { start: String, end: String },

    #[error("walks from every start node never reach end nodes on the same step")]
    NoSimultaneousSolution,

    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error(transparent)]
    Merge(#[from] StepMergeError),
}

/// Intersect every step of `left` with every step of `right`, keeping the non-empty results.
fn merge_all(
    left: &[PeriodicStep],
    right: &[PeriodicStep],
) -> Result<Vec<PeriodicStep>, StepMergeError> {
    let mut merged = Vec::new();
    for a in left {
        for b in right {
            if let Some(step) = a.merge(b)? {
                merged.push(step);
            }
        }
    }
    merged.sort_unstable();
    merged.dedup();
    Ok(merged)
}

impl Network {
    fn node_id(&self, label: &str) -> Result<NodeId, SolveError> {
        self.labels()
            .get(label)
            .ok_or_else(|| SolveError::UnknownLabel(label.to_owned()))
    }

    /// The number of steps a walk from `start_label` takes to first reach `end_label`.
    ///
    /// # Errors
    ///
    /// Either label missing from the network, or an end that is never reached, is a
    /// [`SolveError`].
    pub fn shortest_path_length(
        &self,
        start_label: &str,
        end_label: &str,
    ) -> Result<StepNumber, SolveError> {
        let start = self.node_id(start_label)?;
        let end = self.node_id(end_label)?;

        let steps = self.end_visits(start, |node| node == end)?;
        steps
            .first()
            .map(|step| step.value)
            .ok_or_else(|| SolveError::Unreachable {
                start: start_label.to_owned(),
                end: end_label.to_owned(),
            })
    }

    /// The smallest number of steps after which simultaneous walks from every node labeled with
    /// `start_suffix` all stand on nodes labeled with `end_suffix`.
    ///
    /// Each walk's arrivals are periodic step sets; the sets of successive walks are intersected
    /// pairwise and the smallest surviving value is the answer.
    ///
    /// # Errors
    ///
    /// No labels with either suffix, or walks that never line up, is a [`SolveError`].
    pub fn shortest_simultaneous_path_length(
        &self,
        start_suffix: char,
        end_suffix: char,
    ) -> Result<StepNumber, SolveError> {
        let labels = self.labels();
        let end_nodes: HashSet<NodeId> = labels.ids_with_suffix(end_suffix).collect();
        if end_nodes.is_empty() {
            return Err(SolveError::NoMatchingNodes(end_suffix));
        }

        let mut candidates: Option<Vec<PeriodicStep>> = None;
        for start in labels.ids_with_suffix(start_suffix) {
            let steps = self.end_visits(start, |node| end_nodes.contains(&node))?;

            let merged = match candidates {
                None => steps,
                Some(previous) => merge_all(&previous, &steps)?,
            };
            tracing::debug!(
                start = labels.label(start),
                candidates = merged.len(),
                "merged walk arrivals"
            );

            if merged.is_empty() {
                return Err(SolveError::NoSimultaneousSolution);
            }
            candidates = Some(merged);
        }

        candidates
            .ok_or(SolveError::NoMatchingNodes(start_suffix))?
            .iter()
            .map(|step| step.value)
            .min()
            .ok_or(SolveError::NoSimultaneousSolution)
    }
}

/*
For part 1, follow the directions from `AAA` until reaching `ZZZ`, repeating the directions as
needed, and count the steps.
*/

impl Solution<PartOne> for HauntedWasteland {
    type Input = Network;
    type Output = StepNumber;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.shortest_path_length(START_LABEL, END_LABEL)?)
    }
}

/*
For part 2, walk from every node ending in `A` at once and count the steps until every walk is on a
node ending in `Z` at the same time.
*/

impl Solution<PartTwo> for HauntedWasteland {
    type Input = Network;
    type Output = StepNumber;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.shortest_simultaneous_path_length(START_SUFFIX, END_SUFFIX)?)
    }
}
