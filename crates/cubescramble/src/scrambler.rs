use itertools::iproduct;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::{Move, Puzzle, Scramble, ScrambleError, ScrambleParams};

/// Which moves may follow the previous move in a scramble.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(strum::EnumIter, strum::EnumString, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FilterPolicy {
    /// Every move is drawn from the whole move space, so consecutive moves
    /// may turn the same face.
    #[default]
    Unfiltered,
    /// Moves on the same face as the previous move are excluded.
    ExcludeSameFace,
    /// Moves on the same face as the previous move or on the face opposite
    /// it are excluded.
    ExcludeSameAxis,
}

impl FilterPolicy {
    /// Returns whether `next` may follow `prev` under this policy.
    pub fn allows(self, prev: &Move, next: &Move) -> bool {
        match self {
            FilterPolicy::Unfiltered => true,
            FilterPolicy::ExcludeSameFace => next.face.label != prev.face.label,
            FilterPolicy::ExcludeSameAxis => !prev.face.is_same_axis(&next.face),
        }
    }
}

/// Random-move scrambler for a puzzle.
///
/// The scrambler holds no state besides the puzzle and policy; the move
/// space is rebuilt for every scramble.
#[derive(Debug, Clone)]
pub struct Scrambler<P> {
    puzzle: P,
    policy: FilterPolicy,
}

impl<P: Puzzle> Scrambler<P> {
    /// Constructs a scrambler that draws every move from the whole move
    /// space.
    pub fn new(puzzle: P) -> Self {
        Self::with_policy(puzzle, FilterPolicy::default())
    }

    /// Constructs a scrambler with a specific filter policy.
    pub fn with_policy(puzzle: P, policy: FilterPolicy) -> Self {
        Self { puzzle, policy }
    }

    /// Returns the puzzle being scrambled.
    pub fn puzzle(&self) -> &P {
        &self.puzzle
    }
    /// Returns the filter policy.
    pub fn policy(&self) -> FilterPolicy {
        self.policy
    }

    /// Returns every move of the puzzle, ordered by face, then rotation,
    /// then depth.
    pub fn moveset(&self) -> Result<Vec<Move>, ScrambleError> {
        let faces = self.puzzle.faces()?;
        let rotations = self.puzzle.rotations()?;
        let depths = self.puzzle.depths()?;

        let moveset = iproduct!(faces, rotations, depths)
            .map(|(face, rotation, depth)| Move::new(face, rotation, depth))
            .collect::<Vec<_>>();
        log::debug!(
            "built moveset of {} moves for {}",
            moveset.len(),
            self.puzzle.name(),
        );
        Ok(moveset)
    }

    /// Generates a scramble using random numbers from `rng`.
    pub fn generate_scramble(&self, rng: &mut impl Rng) -> Result<Scramble, ScrambleError> {
        let length = self.puzzle.scramble_length()?;
        let moveset = self.moveset()?;
        if moveset.is_empty() {
            return Err(ScrambleError::InvalidConfiguration(format!(
                "{} has an empty move space",
                self.puzzle.name(),
            )));
        }

        let mut scramble = Scramble::with_capacity(length);
        for _ in 0..length {
            let next_move = self.next_move(&scramble, &moveset, rng)?;
            scramble.push(next_move);
        }
        log::trace!("generated scramble {scramble}");
        Ok(scramble)
    }

    /// Generates a scramble determined entirely by `params`.
    pub fn generate_scramble_from_params(
        &self,
        params: &ScrambleParams,
    ) -> Result<Scramble, ScrambleError> {
        self.generate_scramble(&mut params.rng())
    }

    /// Generates a scramble using the thread-local random number generator.
    pub fn generate_random_scramble(&self) -> Result<Scramble, ScrambleError> {
        self.generate_scramble(&mut rand::rng())
    }

    fn next_move(
        &self,
        scramble: &Scramble,
        moveset: &[Move],
        rng: &mut impl Rng,
    ) -> Result<Move, ScrambleError> {
        let chosen = match (scramble.last(), self.policy) {
            (None, _) | (Some(_), FilterPolicy::Unfiltered) => moveset.choose(rng),
            (Some(prev), policy) => {
                let candidates = moveset
                    .iter()
                    .filter(|m| policy.allows(prev, m))
                    .collect::<Vec<_>>();
                if candidates.is_empty() {
                    log::warn!("no move of {} may follow {prev}", self.puzzle.name());
                }
                candidates.choose(rng).copied()
            }
        };
        chosen.cloned().ok_or_else(|| {
            ScrambleError::InvalidConfiguration(format!(
                "no move of {} may follow the previous move under policy {}",
                self.puzzle.name(),
                self.policy,
            ))
        })
    }
}
