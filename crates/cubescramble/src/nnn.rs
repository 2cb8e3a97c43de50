use strum::IntoEnumIterator;

use crate::{Depth, Face, Puzzle, Rotation, ScrambleError};

/// Face labels of a cube, listed so that each consecutive pair is a pair of
/// opposite faces.
const FACE_LABELS: [&str; 6] = ["U", "D", "R", "L", "F", "B"];

/// Minimum number of moves in a scramble of any cube.
const MIN_SCRAMBLE_LENGTH: usize = 12;
/// Additional scramble moves for each layer beyond a 2x2x2.
const SCRAMBLE_MOVES_PER_LAYER: usize = 20;

/// Cube with `n` layers along each axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NxNxN {
    /// Number of layers along each axis.
    pub n: u16,
}

impl NxNxN {
    /// Constructs an NxNxN cube.
    ///
    /// Values of `n` less than 2 are accepted here, but they have no valid
    /// depths and so cannot be scrambled.
    pub const fn new(n: u16) -> Self {
        Self { n }
    }
}

impl Puzzle for NxNxN {
    fn name(&self) -> String {
        let n = self.n;
        format!("{n}x{n}x{n}")
    }

    fn scramble_length(&self) -> Result<usize, ScrambleError> {
        let extra_layers = usize::from(self.n.saturating_sub(2));
        Ok(MIN_SCRAMBLE_LENGTH.max(SCRAMBLE_MOVES_PER_LAYER * extra_layers))
    }

    fn faces(&self) -> Result<Vec<Face>, ScrambleError> {
        Ok(FACE_LABELS
            .iter()
            .enumerate()
            .map(|(i, &label)| Face::new(label, FACE_LABELS[i ^ 1]))
            .collect())
    }

    fn rotations(&self) -> Result<Vec<Rotation>, ScrambleError> {
        Ok(Rotation::iter().collect())
    }

    fn depths(&self) -> Result<Vec<Depth>, ScrambleError> {
        Ok((1..=self.n / 2).collect())
    }
}
