//! Random-move scrambler for NxNxN cubes, plus detectors for redundant move
//! patterns in the scrambles it generates.
//!
//! ```
//! use cubescramble::prelude::*;
//!
//! let scrambler = Scrambler::new(NxNxN::new(3));
//! let params = ScrambleParams::from_seed("example");
//! let scramble = scrambler.generate_scramble_from_params(&params).unwrap();
//! assert_eq!(scramble.len(), 20);
//! let _has_cancellation = contains_cancellation(&scramble);
//! ```

#[macro_use]
extern crate lazy_static;

pub mod analysis;
mod errors;
mod face;
mod moves;
mod nnn;
pub mod notation;
mod puzzle;
mod scramble;
mod scrambler;
mod timestamp;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::analysis::{
        Pattern, PatternSet, contains_cancellation, contains_inverses,
        contains_spaced_cancellation, find_cancellations, find_inverses,
        find_spaced_cancellations,
    };
    pub use crate::errors::{MoveParseError, ScrambleError};
    pub use crate::face::Face;
    pub use crate::moves::{Move, Rotation};
    pub use crate::nnn::NxNxN;
    pub use crate::notation::{parse_move, parse_scramble};
    pub use crate::puzzle::Puzzle;
    pub use crate::scramble::{Scramble, ScrambleParams};
    pub use crate::scrambler::{FilterPolicy, Scrambler};
    pub use crate::timestamp::Timestamp;
}

/// String type used for face labels.
pub type Str = lean_string::LeanString;

/// Layer depth of a move, counted from the outermost layer (`1`).
pub type Depth = u16;

/// Version string such as `cubescramble v1.2.3`.
pub const ENGINE_VERSION_STRING: &str =
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));
