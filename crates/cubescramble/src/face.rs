use std::fmt;

use crate::Str;

/// Face of a puzzle that can be turned, along with the face on the opposite
/// side of the puzzle.
///
/// Faces are compared by label and opposite label only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Face {
    /// Label used in notation, such as `U`.
    pub label: Str,
    /// Label of the face on the opposite side of the puzzle, such as `D`.
    pub opposite: Str,
}

impl Face {
    /// Constructs a face from its label and the label of its opposite.
    pub fn new(label: impl Into<Str>, opposite: impl Into<Str>) -> Self {
        Self {
            label: label.into(),
            opposite: opposite.into(),
        }
    }

    /// Returns whether `other` is this face or the face opposite it.
    pub fn is_same_axis(&self, other: &Face) -> bool {
        self.label == other.label || self.opposite == other.label
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_axis() {
        let u = Face::new("U", "D");
        let d = Face::new("D", "U");
        let r = Face::new("R", "L");

        assert!(u.is_same_axis(&u));
        assert!(u.is_same_axis(&d));
        assert!(d.is_same_axis(&u));
        assert!(!u.is_same_axis(&r));
        assert!(!r.is_same_axis(&d));
    }
}
