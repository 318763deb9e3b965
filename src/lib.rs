//! dfa-core: a validated deterministic finite automaton library
//!
//! An automaton is the 5-tuple (Q, Σ, q0, F, δ). It is validated once when it
//! is built and is immutable afterwards, so execution never has to re-check
//! membership and the same `Dfa` can be shared freely between threads.
//!
//! # Core Concepts
//!
//! - **Labels**: states and symbols are any `Clone + Eq + Hash + Debug` type
//! - **Validation**: out-of-set references and missing transitions are
//!   rejected before anything runs
//! - **Execution**: `step`, `run` and `accepts` are pure functions of the
//!   automaton and their input
//!
//! # Example
//!
//! ```rust
//! use dfa_core::engine::Dfa;
//! use dfa_core::transitions;
//!
//! // Accepts binary strings with an even number of zeros.
//! let dfa = Dfa::new(
//!     ["even", "odd"],
//!     ['0', '1'],
//!     "even",
//!     ["even"],
//!     transitions! {
//!         "even" => { '0' => "odd", '1' => "even" },
//!         "odd" => { '0' => "even", '1' => "odd" },
//!     },
//!     true,
//! )
//! .unwrap();
//!
//! assert_eq!(dfa.run(&['1', '0', '0']).unwrap(), "even");
//! assert_eq!(dfa.accepts(&['0']).unwrap(), (false, "odd"));
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod modthree;

// Re-export commonly used types
pub use builder::{must, BuildError, DfaBuilder, ValidationError};
pub use core::{Label, OrderedSet, RunTrace, TraceStep, TransitionTable};
pub use engine::{Dfa, RunError, TransitionError};
