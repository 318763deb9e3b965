//! The canonical mod-three automaton.
//!
//! Reading a binary number most significant bit first, the remainder modulo
//! three evolves as `rem ← (rem * 2 + bit) mod 3`. Three states, one per
//! remainder, and two symbols are enough to track it.
//!
//! This module also holds the thin collaborators around that automaton: a
//! parser from text to `Bit`s and the mapping from final state to remainder.

pub mod error;

pub use error::ParseError;

use crate::builder::ValidationError;
use crate::engine::{Dfa, RunError};
use crate::transitions;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Remainder classes, one state each.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Remainder {
    S0,
    S1,
    S2,
}

impl Remainder {
    /// The remainder this state stands for.
    pub fn value(self) -> u8 {
        match self {
            Self::S0 => 0,
            Self::S1 => 1,
            Self::S2 => 2,
        }
    }
}

/// States display as the remainder they stand for.
impl fmt::Display for Remainder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Binary input symbols.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// Numeric value of the digit.
    pub fn value(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    /// Map `'0'`/`'1'` to a bit.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            _ => None,
        }
    }
}

/// Characters skipped by `parse_binary`, so `1111_000` reads as `1111000`.
pub const SEPARATORS: [char; 3] = [' ', '\t', '_'];

/// Build the mod-three automaton. All states are final.
///
/// ```rust
/// use dfa_core::modthree::{self, Bit, Remainder};
///
/// let dfa = modthree::automaton().unwrap();
/// assert_eq!(dfa.run([Bit::One, Bit::Zero]).unwrap(), Remainder::S2);
/// ```
pub fn automaton() -> Result<Dfa<Remainder, Bit>, ValidationError<Remainder, Bit>> {
    use Bit::{One, Zero};
    use Remainder::{S0, S1, S2};

    Dfa::new(
        [S0, S1, S2],
        [Zero, One],
        S0,
        [S0, S1, S2],
        transitions! {
            S0 => { Zero => S0, One => S1 },
            S1 => { Zero => S2, One => S0 },
            S2 => { Zero => S1, One => S2 },
        },
        true,
    )
}

/// Parse a binary string into bits, skipping `SEPARATORS`.
///
/// Any other character is rejected along with its zero-based character
/// position in `input`.
pub fn parse_binary(input: &str) -> Result<Vec<Bit>, ParseError> {
    let mut bits = Vec::with_capacity(input.len());
    for (position, c) in input.chars().enumerate() {
        if SEPARATORS.contains(&c) {
            continue;
        }
        match Bit::from_char(c) {
            Some(bit) => bits.push(bit),
            None => {
                return Err(ParseError::InvalidCharacter {
                    character: c,
                    position,
                })
            }
        }
    }
    Ok(bits)
}

/// Run `bits` through `dfa` and map the final state to its remainder.
pub fn remainder(dfa: &Dfa<Remainder, Bit>, bits: &[Bit]) -> Result<u8, RunError<Remainder, Bit>> {
    dfa.run(bits).map(Remainder::value)
}

/// Arithmetic reference: fold `rem ← (rem * 2 + bit) mod 3` over `bits`.
pub fn reference_remainder(bits: &[Bit]) -> u8 {
    bits.iter().fold(0, |rem, bit| (rem * 2 + bit.value()) % 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn automaton_builds_without_error() {
        let result = automaton();

        assert!(result.is_ok());
        assert_eq!(result.unwrap().initial(), &Remainder::S0);
    }

    #[test]
    fn automaton_is_complete_and_accepts_everything() {
        let dfa = automaton().unwrap();

        assert!(dfa.is_complete());
        assert_eq!(dfa.states().len(), 3);
        assert_eq!(dfa.finals().len(), 3);
        assert!(dfa.accepts([Bit::One, Bit::One, Bit::Zero]).unwrap().0);
    }

    #[test]
    fn parse_skips_separators() {
        let bits = parse_binary("1 0_1\t1").unwrap();

        assert_eq!(bits, vec![Bit::One, Bit::Zero, Bit::One, Bit::One]);
    }

    #[test]
    fn parse_rejects_other_characters() {
        assert_eq!(
            parse_binary("10x1"),
            Err(ParseError::InvalidCharacter {
                character: 'x',
                position: 2
            })
        );
        assert!(parse_binary("2").is_err());
    }

    #[test]
    fn parse_empty_string_yields_no_bits() {
        assert_eq!(parse_binary("").unwrap(), Vec::<Bit>::new());
        assert_eq!(parse_binary("__").unwrap(), Vec::<Bit>::new());
    }

    #[test]
    fn remainder_matches_reference() {
        let dfa = automaton().unwrap();
        for input in ["", "0", "1", "10", "11", "1011", "1111", "1111_000", "110110"] {
            let bits = parse_binary(input).unwrap();
            assert_eq!(
                remainder(&dfa, &bits).unwrap(),
                reference_remainder(&bits),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn states_display_and_values() {
        assert_eq!(Remainder::S2.to_string(), "2");
        assert_eq!(Remainder::S0.to_string(), "0");
        assert_eq!(Remainder::S1.value(), 1);
        assert_eq!(Bit::from_char('1'), Some(Bit::One));
        assert_eq!(Bit::from_char('a'), None);
    }
}
