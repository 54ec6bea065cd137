use std::collections::HashMap;
use std::collections::hash_map::Entry;

use puzzle_framework::parsing::InputScanner;
use puzzle_framework::{DynamicResult, ParseData};

/*
Input is a line of directions, an empty line, then one line per node of the network.

The directions line is a sequence of `L` and `R` characters, for left and right. It repeats for as
long as a walk needs it.

Each node line is a label, `=`, then a parenthesized `,`-separated pair of labels: the node reached
by going left, then the node reached by going right. Whitespace around the punctuation is ignored.
*/

/// A direction of travel through the node network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// An error when converting [`char`] to [`Direction`].
#[derive(thiserror::Error, Debug)]
pub enum DirectionCharError {
    #[error("unrecognized direction character: {0:?}")]
    UnrecognizedChar(char),
}

impl TryFrom<char> for Direction {
    type Error = DirectionCharError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' => Ok(Self::Left),
            'R' => Ok(Self::Right),
            _ => Err(DirectionCharError::UnrecognizedChar(value)),
        }
    }
}

/// A non-empty sequence of directions, repeated cyclically.
#[derive(Debug)]
pub struct Path(Vec<Direction>);

impl Path {
    /// The direction taken at a step count, wrapping around the sequence.
    #[must_use]
    pub fn direction_at(&self, step: usize) -> Direction {
        self.0[step % self.0.len()]
    }

    #[must_use]
    pub fn cycle_len(&self) -> usize {
        self.0.len()
    }
}

/// The identifier of a node, assigned in the order labels first appear in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Assigns [`NodeId`]s to labels, the first new label getting id 0.
#[derive(Debug, Default)]
pub struct LabelInterner {
    ids: HashMap<String, NodeId>,
    /// Labels indexed by id; its length is the next id to assign.
    labels: Vec<String>,
}

impl LabelInterner {
    /// Get the id for a label, assigning the next id if the label is new.
    pub fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = NodeId(self.labels.len());
        self.labels.push(label.to_owned());
        self.ids.insert(label.to_owned(), id);
        id
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    #[must_use]
    pub fn label(&self, id: NodeId) -> &str {
        &self.labels[id.0]
    }

    /// Ids of the labels ending with `suffix`, in id order.
    pub fn ids_with_suffix(&self, suffix: char) -> impl Iterator<Item = NodeId> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter(move |(_, label)| label.ends_with(suffix))
            .map(|(index, _)| NodeId(index))
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }
}

/// The parsed input: the directions to follow and the network of labeled nodes.
#[derive(Debug)]
pub struct Network {
    path: Path,
    labels: LabelInterner,
    /// Left and right connections, indexed by node id.
    connections: Vec<(NodeId, NodeId)>,
}

/// An error parsing a [`Network`] from input.
#[derive(thiserror::Error, Debug)]
pub enum ParseNetworkError {
    #[error("expected first line for directions")]
    NoDirections,

    #[error("no directions were parsed")]
    EmptyDirections,

    #[error("expected a block of lines of node connections for a network, after directions")]
    NoNetwork,

    #[error("expected \"=\" to delimit source label from connections")]
    ExpectedEqualDelimiter,

    #[error("expected parenthesis wrapping connections")]
    ExpectedParenthesisWrap,

    #[error("expected \",\" to delimit the connections")]
    ExpectedConnectionDelimiter,

    #[error("expected a non-empty node label")]
    EmptyLabel,

    #[error("node {0:?} is defined more than once")]
    DuplicateNode(String),

    #[error("node {0:?} is connected to but never defined")]
    UndefinedNode(String),
}

/// Split a node line into its source, left, and right labels.
fn split_node_line(line: &str) -> Result<(&str, &str, &str), ParseNetworkError> {
    let (source, connections) = line
        .split_once('=')
        .ok_or(ParseNetworkError::ExpectedEqualDelimiter)?;

    let connections = connections
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(ParseNetworkError::ExpectedParenthesisWrap)?;

    let (left, right) = connections
        .split_once(',')
        .ok_or(ParseNetworkError::ExpectedConnectionDelimiter)?;

    let labels = (source.trim(), left.trim(), right.trim());
    if labels.0.is_empty() || labels.1.is_empty() || labels.2.is_empty() {
        return Err(ParseNetworkError::EmptyLabel);
    }
    Ok(labels)
}

impl ParseData for Network {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);
        scanner.skip_empty();

        let directions: Vec<_> = scanner
            .next_in_sequence(|_, line| {
                line.trim()
                    .chars()
                    .map(Direction::try_from)
                    .collect::<Result<_, _>>()
            })?
            .ok_or(ParseNetworkError::NoDirections)?;

        if directions.is_empty() {
            return Err(ParseNetworkError::EmptyDirections.into());
        }

        scanner.skip_empty().ok_or(ParseNetworkError::NoNetwork)?;

        let mut labels = LabelInterner::default();
        let mut defined: HashMap<NodeId, (NodeId, NodeId)> = HashMap::new();

        while scanner.skip_empty().is_some() {
            scanner.collect_sequence(|_, line| -> DynamicResult<_> {
                let (source, left, right) = split_node_line(line)?;

                let source_id = labels.intern(source);
                let left_id = labels.intern(left);
                let right_id = labels.intern(right);

                match defined.entry(source_id) {
                    Entry::Occupied(_) => {
                        Err(ParseNetworkError::DuplicateNode(source.to_owned()).into())
                    }
                    Entry::Vacant(entry) => {
                        entry.insert((left_id, right_id));
                        Ok(())
                    }
                }
            })?;
        }

        let connections = (0..labels.node_count())
            .map(|index| {
                let id = NodeId(index);
                defined
                    .get(&id)
                    .copied()
                    .ok_or_else(|| ParseNetworkError::UndefinedNode(labels.label(id).to_owned()))
            })
            .collect::<Result<_, _>>()?;

        tracing::debug!(
            directions = directions.len(),
            nodes = labels.node_count(),
            "parsed network"
        );

        Ok(Self {
            path: Path(directions),
            labels,
            connections,
        })
    }
}

impl Network {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn labels(&self) -> &LabelInterner {
        &self.labels
    }

    /// The node reached from `current` by going in `direction`.
    #[must_use]
    pub fn next_node(&self, current: NodeId, direction: Direction) -> NodeId {
        let (left, right) = self.connections[current.0];
        match direction {
            Direction::Left => left,
            Direction::Right => right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";

    #[test]
    fn parses_directions_and_connections() -> DynamicResult<()> {
        let network = Network::parse(EXAMPLE_INPUT)?;

        assert_eq!(network.path().cycle_len(), 2);
        assert_eq!(network.path().direction_at(0), Direction::Right);
        assert_eq!(network.path().direction_at(3), Direction::Left);

        let start = network.labels().get("AAA").ok_or("missing AAA")?;
        let ccc = network.next_node(start, Direction::Right);
        assert_eq!(network.labels().label(ccc), "CCC");
        let zzz = network.next_node(ccc, Direction::Left);
        assert_eq!(network.labels().label(zzz), "ZZZ");
        Ok(())
    }

    #[test]
    fn interns_labels_in_first_seen_order() -> DynamicResult<()> {
        let network = Network::parse(EXAMPLE_INPUT)?;
        let labels = network.labels();

        let order = ["AAA", "BBB", "CCC", "DDD", "EEE", "ZZZ", "GGG"];
        for (index, label) in order.into_iter().enumerate() {
            assert_eq!(labels.get(label), Some(NodeId(index)), "{label}");
        }
        assert_eq!(labels.node_count(), order.len());
        Ok(())
    }

    #[test]
    fn ignores_whitespace_and_blank_lines() -> DynamicResult<()> {
        let input = "\n  LR  \n\n\n11A=(11B,XXX)\n\n  11B =  ( XXX ,11A )\nXXX = (XXX, XXX)\n\n";
        let network = Network::parse(input)?;

        assert_eq!(network.path().cycle_len(), 2);
        let labels = network.labels();
        let suffixed: Vec<_> = labels
            .ids_with_suffix('A')
            .map(|id| labels.label(id))
            .collect();
        assert_eq!(suffixed, ["11A"]);

        let b = labels.get("11B").ok_or("missing 11B")?;
        assert_eq!(labels.label(network.next_node(b, Direction::Right)), "11A");
        Ok(())
    }

    #[test]
    fn rejects_unknown_direction() {
        let error = Network::parse("LXR\n\nAAA = (AAA, AAA)\n");
        assert!(error.is_err());
    }

    #[test]
    fn rejects_missing_sections() {
        assert!(Network::parse("").is_err());
        assert!(Network::parse("LR\n\n").is_err());
    }

    #[test]
    fn rejects_malformed_node_lines() {
        for line in [
            "AAA (BBB, CCC)",
            "AAA = BBB, CCC",
            "AAA = (BBB CCC)",
            "AAA = (, CCC)",
            " = (BBB, CCC)",
        ] {
            let input = format!("L\n\n{line}\nBBB = (BBB, BBB)\nCCC = (CCC, CCC)\n");
            assert!(Network::parse(&input).is_err(), "{line:?} should be rejected");
        }
    }

    #[test]
    fn reports_malformed_line_number() {
        let result = Network::parse("L\n\nAAA = (AAA, AAA)\nBBB = BBB\n");
        let Err(error) = result else {
            panic!("missing parentheses should be rejected");
        };
        assert_eq!(error.to_string(), "failure parsing line 4");
    }

    #[test]
    fn rejects_duplicate_definitions() {
        let input = "L\n\nAAA = (AAA, AAA)\nAAA = (AAA, AAA)\n";
        assert!(Network::parse(input).is_err());
    }

    #[test]
    fn rejects_undefined_connections() {
        let result = Network::parse("L\n\nAAA = (BBB, AAA)\n");
        let Err(error) = result else {
            panic!("BBB is never defined");
        };
        assert!(error.to_string().contains("BBB"), "{error}");
    }
}
