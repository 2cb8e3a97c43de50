use std::fmt;
use std::ops::Deref;

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use serde::Serialize;
use sha2::Digest;

use crate::{Move, Timestamp};

/// Sequence of moves that scrambles a puzzle.
///
/// Displays as the notation for each move, separated by spaces.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Scramble(Vec<Move>);

impl Scramble {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }
    pub(crate) fn push(&mut self, m: Move) {
        self.0.push(m);
    }

    /// Returns the moves in the scramble.
    pub fn moves(&self) -> &[Move] {
        &self.0
    }
    /// Consumes the scramble and returns its moves.
    pub fn into_moves(self) -> Vec<Move> {
        self.0
    }
}

impl From<Vec<Move>> for Scramble {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for Scramble {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for Scramble {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Scramble {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

/// Parameters to deterministically generate a scramble.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrambleParams {
    /// Timestamp when the scramble was requested.
    pub time: Timestamp,
    /// Random seed, probably sourced from a "true" RNG provided by the OS.
    pub seed: String,
}

impl ScrambleParams {
    /// Generates new parameters based on the current time and a random
    /// number.
    pub fn new() -> Self {
        let time = Timestamp::now();
        let random_u64: u64 = rand::rng().random();
        Self {
            time,
            seed: format!("{time}_{random_u64}"),
        }
    }

    /// Constructs parameters from a fixed seed string.
    ///
    /// The timestamp is the Unix epoch so that the same seed always produces
    /// the same scramble.
    pub fn from_seed(seed: impl ToString) -> Self {
        Self {
            time: Timestamp::epoch(),
            seed: seed.to_string(),
        }
    }

    /// Returns a random number generator determined entirely by the
    /// timestamp and seed.
    pub fn rng(&self) -> ChaCha12Rng {
        let mut sha256 = sha2::Sha256::new();
        sha256.update(self.time.to_string().as_bytes());
        sha256.update((self.seed.len() as u64).to_le_bytes());
        sha256.update(self.seed.as_bytes());
        ChaCha12Rng::from_seed(sha256.finalize().into())
    }
}

impl Default for ScrambleParams {
    fn default() -> Self {
        Self::new()
    }
}
