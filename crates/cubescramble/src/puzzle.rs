use crate::{Depth, Face, Rotation, ScrambleError};

/// Move space of a twisty puzzle: which faces can be turned, how, and how
/// deep.
///
/// Every capability has a default implementation that returns
/// [`ScrambleError::NotImplemented`], so a puzzle variant that forgets one
/// fails as soon as a scrambler asks for it.
pub trait Puzzle {
    /// Returns a human-readable name for the puzzle, such as `3x3x3`.
    fn name(&self) -> String {
        "unnamed puzzle".to_owned()
    }

    /// Returns the number of moves in a scramble.
    fn scramble_length(&self) -> Result<usize, ScrambleError> {
        Err(ScrambleError::NotImplemented {
            capability: "scramble_length",
        })
    }

    /// Returns the faces that can be turned, in a fixed order.
    ///
    /// Each face carries the label of its opposite face.
    fn faces(&self) -> Result<Vec<Face>, ScrambleError> {
        Err(ScrambleError::NotImplemented {
            capability: "faces",
        })
    }

    /// Returns the rotations that a face can be turned by, in a fixed order.
    fn rotations(&self) -> Result<Vec<Rotation>, ScrambleError> {
        Err(ScrambleError::NotImplemented {
            capability: "rotations",
        })
    }

    /// Returns the depths that a face can be turned to, in a fixed order.
    fn depths(&self) -> Result<Vec<Depth>, ScrambleError> {
        Err(ScrambleError::NotImplemented {
            capability: "depths",
        })
    }

    /// Returns the face with the given label, if there is one.
    fn face(&self, label: &str) -> Result<Option<Face>, ScrambleError> {
        Ok(self.faces()?.into_iter().find(|face| &*face.label == label))
    }
}

impl<P: Puzzle + ?Sized> Puzzle for &P {
    fn name(&self) -> String {
        (**self).name()
    }
    fn scramble_length(&self) -> Result<usize, ScrambleError> {
        (**self).scramble_length()
    }
    fn faces(&self) -> Result<Vec<Face>, ScrambleError> {
        (**self).faces()
    }
    fn rotations(&self) -> Result<Vec<Rotation>, ScrambleError> {
        (**self).rotations()
    }
    fn depths(&self) -> Result<Vec<Depth>, ScrambleError> {
        (**self).depths()
    }
    fn face(&self, label: &str) -> Result<Option<Face>, ScrambleError> {
        (**self).face(label)
    }
}

impl<P: Puzzle + ?Sized> Puzzle for Box<P> {
    fn name(&self) -> String {
        (**self).name()
    }
    fn scramble_length(&self) -> Result<usize, ScrambleError> {
        (**self).scramble_length()
    }
    fn faces(&self) -> Result<Vec<Face>, ScrambleError> {
        (**self).faces()
    }
    fn rotations(&self) -> Result<Vec<Rotation>, ScrambleError> {
        (**self).rotations()
    }
    fn depths(&self) -> Result<Vec<Depth>, ScrambleError> {
        (**self).depths()
    }
    fn face(&self, label: &str) -> Result<Option<Face>, ScrambleError> {
        (**self).face(label)
    }
}
