//! Detectors for redundant move patterns in a scramble.
//!
//! All detectors compare faces by label only; the depth of a move is
//! ignored.

use std::fmt;

use serde::Serialize;

use crate::{Move, Rotation};

/// Returns the index pairs `[i, i+1]` where move `i+1` immediately undoes
/// move `i` on the same face: a clockwise turn followed by a
/// counterclockwise turn, or two half turns.
pub fn find_inverses(moves: &[Move]) -> Vec<[usize; 2]> {
    find_adjacent(moves, |a, b| {
        let is_inverse = matches!(
            (a.rotation, b.rotation),
            (Rotation::Half, Rotation::Half) | (Rotation::Clockwise, Rotation::CounterClockwise)
        );
        is_inverse && a.face.label == b.face.label
    })
}

/// Returns whether any move is immediately undone by the next one.
///
/// See [`find_inverses()`].
pub fn contains_inverses(moves: &[Move]) -> bool {
    !find_inverses(moves).is_empty()
}

/// Returns the index pairs `[i, i+1]` where moves `i` and `i+1` turn the
/// same face.
pub fn find_cancellations(moves: &[Move]) -> Vec<[usize; 2]> {
    find_adjacent(moves, |a, b| a.face.label == b.face.label)
}

/// Returns whether any two consecutive moves turn the same face.
pub fn contains_cancellation(moves: &[Move]) -> bool {
    !find_cancellations(moves).is_empty()
}

/// Returns the index pairs `[i, i+2]` where moves `i` and `i+2` turn the
/// same face and move `i+1` turns the face opposite it.
pub fn find_spaced_cancellations(moves: &[Move]) -> Vec<[usize; 2]> {
    moves
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[0].face.label == w[2].face.label && w[0].face.opposite == w[1].face.label)
        .map(|(i, _)| [i, i + 2])
        .collect()
}

/// Returns whether any move is repeated with only a move on the opposite
/// face in between.
pub fn contains_spaced_cancellation(moves: &[Move]) -> bool {
    !find_spaced_cancellations(moves).is_empty()
}

fn find_adjacent(moves: &[Move], mut f: impl FnMut(&Move, &Move) -> bool) -> Vec<[usize; 2]> {
    moves
        .windows(2)
        .enumerate()
        .filter(|(_, w)| f(&w[0], &w[1]))
        .map(|(i, _)| [i, i + 1])
        .collect()
}

/// Redundant move pattern that can be detected in a scramble.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Move immediately undone by the next move.
    Inverse,
    /// Two consecutive moves on the same face.
    Cancellation,
    /// Two moves on the same face with one move on the opposite face in
    /// between.
    SpacedCancellation,
}

impl Pattern {
    /// Returns the index pairs where the pattern occurs.
    pub fn find(self, moves: &[Move]) -> Vec<[usize; 2]> {
        match self {
            Pattern::Inverse => find_inverses(moves),
            Pattern::Cancellation => find_cancellations(moves),
            Pattern::SpacedCancellation => find_spaced_cancellations(moves),
        }
    }

    /// Returns whether the pattern occurs anywhere.
    pub fn is_in(self, moves: &[Move]) -> bool {
        match self {
            Pattern::Inverse => contains_inverses(moves),
            Pattern::Cancellation => contains_cancellation(moves),
            Pattern::SpacedCancellation => contains_spaced_cancellation(moves),
        }
    }

    /// Returns a plural description, such as `spaced cancellations`.
    pub fn plural(self) -> &'static str {
        match self {
            Pattern::Inverse => "inverses",
            Pattern::Cancellation => "cancellations",
            Pattern::SpacedCancellation => "spaced cancellations",
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Inverse => write!(f, "inverse"),
            Pattern::Cancellation => write!(f, "cancellation"),
            Pattern::SpacedCancellation => write!(f, "spaced cancellation"),
        }
    }
}

/// Set of patterns.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PatternSet(u8);

impl PatternSet {
    /// Returns the set of patterns that occur in `moves`.
    pub fn detect(moves: &[Move]) -> Self {
        <Pattern as strum::IntoEnumIterator>::iter()
            .filter(|p| p.is_in(moves))
            .collect()
    }

    /// Returns whether the set contains a pattern.
    pub fn contains(self, pattern: Pattern) -> bool {
        self.0 & pattern.bit() != 0
    }
    /// Adds a pattern to the set.
    pub fn insert(&mut self, pattern: Pattern) {
        self.0 |= pattern.bit();
    }
    /// Returns whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
    /// Returns an iterator over the patterns in the set.
    pub fn iter(self) -> impl Iterator<Item = Pattern> {
        <Pattern as strum::IntoEnumIterator>::iter().filter(move |&p| self.contains(p))
    }
}

impl FromIterator<Pattern> for PatternSet {
    fn from_iter<T: IntoIterator<Item = Pattern>>(iter: T) -> Self {
        let mut ret = Self::default();
        for pattern in iter {
            ret.insert(pattern);
        }
        ret
    }
}

impl Serialize for PatternSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Face;

    const CW: Rotation = Rotation::Clockwise;
    const CCW: Rotation = Rotation::CounterClockwise;
    const HALF: Rotation = Rotation::Half;

    fn mv(label: &str, rotation: Rotation, depth: u16) -> Move {
        let opposite = match label {
            "U" => "D",
            "D" => "U",
            "R" => "L",
            "L" => "R",
            "F" => "B",
            "B" => "F",
            _ => panic!("unknown face {label}"),
        };
        Move::new(Face::new(label, opposite), rotation, depth)
    }

    #[test]
    fn test_clockwise_then_counterclockwise() {
        let moves = [mv("U", CW, 1), mv("U", CCW, 1)];
        assert!(contains_inverses(&moves));
        assert!(contains_cancellation(&moves));
        assert!(!contains_spaced_cancellation(&moves));
        assert_eq!(find_inverses(&moves), [[0, 1]]);
    }

    #[test]
    fn test_inverse_is_directional() {
        // Counterclockwise then clockwise is not counted as an inverse.
        let moves = [mv("U", CCW, 1), mv("U", CW, 1)];
        assert!(!contains_inverses(&moves));
        assert!(contains_cancellation(&moves));

        let moves = [mv("F", HALF, 1), mv("F", HALF, 2)];
        assert!(contains_inverses(&moves));

        let moves = [mv("F", HALF, 1), mv("F", CW, 1)];
        assert!(!contains_inverses(&moves));
        assert_eq!(find_cancellations(&moves), [[0, 1]]);

        let moves = [mv("F", CW, 1), mv("B", CCW, 1)];
        assert!(!contains_inverses(&moves));
        assert!(!contains_cancellation(&moves));
    }

    #[test]
    fn test_spaced_cancellation() {
        let moves = [mv("R", CW, 1), mv("L", CW, 1), mv("R", HALF, 2)];
        assert!(contains_spaced_cancellation(&moves));
        assert_eq!(find_spaced_cancellations(&moves), [[0, 2]]);
        assert!(!contains_cancellation(&moves));

        // The middle move must be on the opposite face.
        let moves = [mv("R", CW, 1), mv("D", CW, 1), mv("R", CW, 1)];
        assert!(!contains_spaced_cancellation(&moves));

        let moves = [mv("U", CW, 1), mv("D", CW, 1), mv("U", CCW, 1), mv("D", CW, 1)];
        assert_eq!(find_spaced_cancellations(&moves), [[0, 2], [1, 3]]);
    }

    #[test]
    fn test_short_sequences() {
        for moves in [vec![], vec![mv("U", CW, 1)], vec![mv("U", CW, 1), mv("D", CW, 1)]] {
            assert!(PatternSet::detect(&moves).is_empty());
        }
    }

    #[test]
    fn test_pattern_set() {
        let moves = [mv("R", CW, 1), mv("R", CCW, 1), mv("L", CW, 1), mv("R", CW, 1)];
        let set = PatternSet::detect(&moves);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            [Pattern::Inverse, Pattern::Cancellation, Pattern::SpacedCancellation],
        );

        let moves = [mv("R", CW, 1), mv("R", CW, 1)];
        let set = PatternSet::detect(&moves);
        assert!(!set.contains(Pattern::Inverse));
        assert!(set.contains(Pattern::Cancellation));
        assert_eq!(Pattern::Cancellation.find(&moves), [[0, 1]]);
        assert_eq!(Pattern::SpacedCancellation.plural(), "spaced cancellations");
    }
}
