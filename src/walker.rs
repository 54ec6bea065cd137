//! Walking the network until the walk provably repeats.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::num::TryFromIntError;

use crate::network::{Network, NodeId};
use crate::step::{PeriodicStep, StepNumber};

/// An error walking a [`Network`].
#[derive(thiserror::Error, Debug)]
pub enum WalkError {
    #[error("step count does not fit in a step number")]
    StepCountOverflow(#[from] TryFromIntError),
}

impl Network {
    /// Walk from `start`, recording every step count at which the current node satisfies
    /// `is_end`, until the walk enters a cycle.
    ///
    /// A cycle is found at a checkpoint, the last step of a pass through the path, whose node was
    /// already seen at an earlier checkpoint. Visits after that earlier checkpoint repeat every
    /// cycle length and become periodic steps; earlier visits happen once and become fixed steps.
    ///
    /// The walk ends within one checkpoint per node, so it always terminates. The result is
    /// empty when no visited node satisfies `is_end`.
    ///
    /// # Errors
    ///
    /// A step count too large for [`StepNumber`] is a [`WalkError`].
    pub fn end_visits<P>(
        &self,
        start: NodeId,
        mut is_end: P,
    ) -> Result<Vec<PeriodicStep>, WalkError>
    where
        P: FnMut(NodeId) -> bool,
    {
        let path = self.path();
        let last_in_pass = path.cycle_len() - 1;

        // node at a checkpoint -> step count
        let mut checkpoints: HashMap<NodeId, usize> = HashMap::new();
        let mut visits = Vec::new();

        let mut current = start;
        let mut counter: usize = 0;

        let loop_start = loop {
            if is_end(current) {
                visits.push(counter);
            }

            if counter % path.cycle_len() == last_in_pass {
                match checkpoints.entry(current) {
                    Entry::Occupied(entry) => break *entry.get(),
                    Entry::Vacant(entry) => {
                        entry.insert(counter);
                    }
                }
            }

            current = self.next_node(current, path.direction_at(counter));
            counter += 1;
        };

        let cycle_len = counter - loop_start;
        tracing::debug!(
            start = self.labels().label(start),
            loop_start,
            cycle_len,
            visits = visits.len(),
            "walk entered a cycle"
        );

        let cycle_offset = StepNumber::try_from(cycle_len)?;
        visits
            .into_iter()
            .map(|visit| -> Result<_, WalkError> {
                let value = StepNumber::try_from(visit)?;
                Ok(if visit > loop_start {
                    PeriodicStep::periodic(value, cycle_offset)
                } else {
                    PeriodicStep::fixed(value)
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use puzzle_framework::{DynamicResult, ParseData};

    use super::*;

    fn walk(input: &str, start: &str, end: &str) -> DynamicResult<Vec<PeriodicStep>> {
        let network = Network::parse(input)?;
        let labels = network.labels();
        let start = labels.get(start).ok_or("unknown start")?;
        let end = labels.get(end).ok_or("unknown end")?;
        Ok(network.end_visits(start, |node| node == end)?)
    }

    #[test]
    fn visits_before_and_inside_cycle() -> DynamicResult<()> {
        let input = r"LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";
        // ZZZ is reached at step 6 and loops on itself; checkpoints are found at steps 2, 5, 8,
        // and 11 repeats the checkpoint at 8
        let steps = walk(input, "AAA", "ZZZ")?;
        assert_eq!(
            steps,
            [
                PeriodicStep::fixed(6),
                PeriodicStep::fixed(7),
                PeriodicStep::fixed(8),
                PeriodicStep::periodic(9, 3),
                PeriodicStep::periodic(10, 3),
                PeriodicStep::periodic(11, 3),
            ]
        );
        Ok(())
    }

    #[test]
    fn start_inside_cycle() -> DynamicResult<()> {
        let input = r"LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
XXX = (XXX, XXX)
";
        let steps = walk(input, "11A", "11Z")?;
        assert_eq!(steps, [PeriodicStep::periodic(2, 2)]);
        Ok(())
    }

    #[test]
    fn unreachable_end_gives_no_visits() -> DynamicResult<()> {
        let input = r"LR

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";
        assert!(walk(input, "AAA", "ZZZ")?.is_empty());
        Ok(())
    }

    #[test]
    fn terminates_on_long_single_cycle() -> DynamicResult<()> {
        // a ring of 50 nodes walked with a path of length 7
        let mut input = String::from("LRRLLRL\n\n");
        for index in 0..50 {
            let next = (index + 1) % 50;
            input.push_str(&format!("N{index:02} = (N{next:02}, N{next:02})\n"));
        }

        let steps = walk(&input, "N00", "N00")?;
        assert!(!steps.is_empty());
        assert_eq!(steps[0], PeriodicStep::fixed(0));
        assert!(
            steps
                .iter()
                .filter(|step| step.offset > 0)
                .all(|step| step.offset == 350 && step.value % 50 == 0)
        );
        Ok(())
    }
}
