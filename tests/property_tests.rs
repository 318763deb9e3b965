//! Property-based tests for automaton execution.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use dfa_core::modthree::{self, Bit, Remainder};
use dfa_core::{Dfa, DfaBuilder, TransitionTable, ValidationError};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_bit()(one in any::<bool>()) -> Bit {
        if one { Bit::One } else { Bit::Zero }
    }
}

prop_compose! {
    fn arbitrary_state()(variant in 0..3u8) -> Remainder {
        match variant {
            0 => Remainder::S0,
            1 => Remainder::S1,
            _ => Remainder::S2,
        }
    }
}

prop_compose! {
    /// A random table over states 0..n and symbols 0..m, possibly partial.
    fn arbitrary_table(n: u8, m: u8)(
        entries in prop::collection::vec((0..n, 0..m, 0..n), 0..(n as usize * m as usize + 1))
    ) -> TransitionTable<u8, u8> {
        entries.into_iter().map(|(from, on, to)| ((from, on), to)).collect()
    }
}

proptest! {
    #[test]
    fn mod_three_matches_arithmetic(bits in prop::collection::vec(arbitrary_bit(), 1..=500)) {
        let dfa = modthree::automaton().unwrap();

        let state = dfa.run(&bits).unwrap();
        prop_assert_eq!(state.value(), modthree::reference_remainder(&bits));
    }

    #[test]
    fn run_is_deterministic(bits in prop::collection::vec(arbitrary_bit(), 0..100)) {
        let dfa = modthree::automaton().unwrap();

        prop_assert_eq!(dfa.run(&bits), dfa.run(&bits));
        prop_assert_eq!(dfa.accepts(&bits), dfa.accepts(&bits));
    }

    #[test]
    fn complete_automaton_step_is_total(state in arbitrary_state(), bit in arbitrary_bit()) {
        let dfa = modthree::automaton().unwrap();

        prop_assert!(dfa.step(&state, &bit).is_ok());
    }

    #[test]
    fn run_equals_fold_of_step(bits in prop::collection::vec(arbitrary_bit(), 0..50)) {
        let dfa = modthree::automaton().unwrap();

        let mut state = *dfa.initial();
        for bit in &bits {
            state = dfa.step(&state, bit).unwrap();
        }
        prop_assert_eq!(dfa.run(&bits).unwrap(), state);
    }

    #[test]
    fn trace_agrees_with_run(bits in prop::collection::vec(arbitrary_bit(), 0..50)) {
        let dfa = modthree::automaton().unwrap();
        let trace = dfa.trace(&bits).unwrap();

        prop_assert_eq!(trace.len(), bits.len());
        prop_assert_eq!(*trace.final_state(), dfa.run(&bits).unwrap());
        prop_assert_eq!(trace.path().len(), bits.len() + 1);
    }

    #[test]
    fn completeness_check_matches_missing_pairs(table in arbitrary_table(3, 2)) {
        let complete = table.len() == 6;
        let result = Dfa::new(0..3u8, 0..2u8, 0, [0], table.clone(), true);

        if complete {
            prop_assert!(result.is_ok());
        } else {
            let is_incomplete = matches!(
                result,
                Err(ValidationError::IncompleteTransitionFunction { missing, .. }) if missing == 6 - table.len()
            );
            prop_assert!(is_incomplete);
        }
    }

    #[test]
    fn partial_run_failure_keeps_progress(
        table in arbitrary_table(3, 2),
        input in prop::collection::vec(0..2u8, 0..20)
    ) {
        let dfa = DfaBuilder::new()
            .states(0..3u8)
            .alphabet(0..2u8)
            .initial(0)
            .transitions(table)
            .build()
            .unwrap();

        match dfa.run(&input) {
            Ok(state) => prop_assert!(dfa.states().contains(&state)),
            Err(err) => {
                let prefix = &input[..err.position()];
                prop_assert_eq!(dfa.run(prefix).unwrap(), *err.last_state());
                prop_assert!(dfa.step(err.last_state(), &input[err.position()]).is_err());
                prop_assert!(!dfa.recognizes(&input));
            }
        }
    }
}
