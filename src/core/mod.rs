//! Core automaton types.
//!
//! This module contains the plain data the rest of the crate is built on:
//! - The `Label` bound shared by states and symbols
//! - Insertion-ordered sets for Q, Σ and F
//! - The transition table δ
//! - Run traces recording the path an input takes
//!
//! Nothing in this module validates anything; see `builder` for that.

mod label;
mod set;
mod table;
mod trace;

pub use label::Label;
pub use set::OrderedSet;
pub use table::TransitionTable;
pub use trace::{RunTrace, TraceStep};
