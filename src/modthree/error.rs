//! Text parsing errors.

use thiserror::Error;

/// Raised while turning text into `Bit`s, before any automaton runs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    #[error("invalid input: {character:?} at position {position} is not a binary digit")]
    InvalidCharacter { character: char, position: usize },
}
