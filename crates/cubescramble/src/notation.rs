//! Functions for parsing moves written in canonical notation.

use regex::Regex;

use crate::{Depth, Move, MoveParseError, Puzzle, Rotation, Scramble};

/// Parses a sequence of moves separated by whitespace.
pub fn parse_scramble<'a>(
    puzzle: &impl Puzzle,
    s: &'a str,
) -> Result<Scramble, MoveParseError<'a>> {
    let depths = puzzle.depths()?;
    s.split_whitespace()
        .map(|word| {
            let m = parse_move(puzzle, word)?;
            if depths.contains(&m.depth) {
                Ok(m)
            } else {
                Err(MoveParseError::BadDepth(word))
            }
        })
        .collect()
}

/// Parses a single move, such as `R`, `Uw'`, or `3Fw2`.
///
/// Face labels must be uppercase. The depth is not checked against the
/// puzzle's depths; use [`parse_scramble()`] for that.
pub fn parse_move<'a>(puzzle: &impl Puzzle, s: &'a str) -> Result<Move, MoveParseError<'a>> {
    const MOVE_PATTERN: &str = r"^(\d*)([A-Z]+)(w?)('|2)?$";
    // match the whole string     ^                    $
    // capture optional depth      (\d*)
    // capture face label               ([A-Z]+)
    // capture optional wide suffix            (w?)
    // capture optional rotation                   ('|2)?

    lazy_static! {
        static ref MOVE_REGEX: Regex = Regex::new(MOVE_PATTERN).expect("bad regex");
    }

    let captures = MOVE_REGEX
        .captures(s)
        .ok_or(MoveParseError::BadMove(s))?;
    // need `.get()` for lifetime reasons
    let group = |i| captures.get(i).map_or("", |m| m.as_str());
    let (depth_str, label, wide, rotation_str) = (group(1), group(2), group(3), group(4));

    let is_wide = !wide.is_empty();
    let depth: Depth = match (depth_str, is_wide) {
        ("", false) => 1,
        ("", true) => 2,
        (_, false) => return Err(MoveParseError::BadMove(s)),
        (d, true) => match d.parse() {
            Ok(d) if d >= 2 => d,
            _ => return Err(MoveParseError::BadDepth(d)),
        },
    };

    let face = puzzle
        .face(label)?
        .ok_or(MoveParseError::BadFace(label))?;
    let rotation = Rotation::from_suffix(rotation_str).ok_or(MoveParseError::BadMove(s))?;

    Ok(Move::new(face, rotation, depth))
}
