use std::fmt;

use serde::{Serialize, Serializer};

use crate::{Depth, Face};

/// Direction and amount that a face is turned.
///
/// The order of the variants is the order in which rotations appear in a
/// move space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Rotation {
    /// Quarter turn clockwise, written with no suffix.
    Clockwise,
    /// Quarter turn counterclockwise, written `'`.
    CounterClockwise,
    /// Half turn, written `2`.
    Half,
}

impl Rotation {
    /// Returns the notation suffix for the rotation.
    pub fn suffix(self) -> &'static str {
        match self {
            Rotation::Clockwise => "",
            Rotation::CounterClockwise => "'",
            Rotation::Half => "2",
        }
    }

    /// Returns the rotation from a notation suffix, or `None` if `suffix` is
    /// not a valid rotation suffix.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(Rotation::Clockwise),
            "'" => Some(Rotation::CounterClockwise),
            "2" => Some(Rotation::Half),
            _ => None,
        }
    }

    /// Returns the rotation that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
            Rotation::Half => Rotation::Half,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Single move: a face turned by some rotation, along with every layer up
/// to `depth`.
///
/// Moves are not validated against any puzzle. A depth of `1` turns only
/// the outermost layer; larger depths are wide moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face being turned.
    pub face: Face,
    /// Rotation of the face.
    pub rotation: Rotation,
    /// Number of layers turned, counted from the outermost layer.
    pub depth: Depth,
}

impl Move {
    /// Constructs a new move.
    pub fn new(face: Face, rotation: Rotation, depth: Depth) -> Self {
        Self {
            face,
            rotation,
            depth,
        }
    }

    /// Returns whether the move turns more than the outermost layer.
    pub fn is_wide(&self) -> bool {
        self.depth > 1
    }
}

/// Canonical notation, such as `R`, `Uw'`, or `3Fw2`.
///
/// Depth 2 is implied by the `w` suffix, so the depth prefix only appears
/// for deeper moves.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.depth > 2 {
            write!(f, "{}", self.depth)?;
        }
        write!(f, "{}", self.face.label)?;
        if self.is_wide() {
            write!(f, "w")?;
        }
        write!(f, "{}", self.rotation)
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
