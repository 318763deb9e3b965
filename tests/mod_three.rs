//! Known vectors for the mod-three automaton.

use dfa_core::modthree::{self, Bit, Remainder};
use std::sync::Arc;

fn remainder_of(input: &str) -> u8 {
    let dfa = modthree::automaton().unwrap();
    let bits = modthree::parse_binary(input).unwrap();
    modthree::remainder(&dfa, &bits).unwrap()
}

#[test]
fn known_vectors() {
    let cases = [
        ("", 0),
        ("0", 0),
        ("1", 1),
        ("10", 2),
        ("11", 0),
        ("1011", 2),
        ("1111", 0),
        ("1111_000", 0),
    ];

    for (input, want) in cases {
        assert_eq!(remainder_of(input), want, "input {input:?}");
    }
}

#[test]
fn final_states_for_scenarios() {
    let dfa = modthree::automaton().unwrap();
    let cases = [
        ("", Remainder::S0),
        ("0", Remainder::S0),
        ("1", Remainder::S1),
        ("10", Remainder::S2),
        ("11", Remainder::S0),
        ("1011", Remainder::S2),
        ("1111", Remainder::S0),
    ];

    for (input, want) in cases {
        let bits = modthree::parse_binary(input).unwrap();
        assert_eq!(dfa.run(&bits).unwrap(), want, "input {input:?}");
    }
}

#[test]
fn empty_input_yields_initial_state() {
    let dfa = modthree::automaton().unwrap();
    let empty: Vec<Bit> = Vec::new();

    assert_eq!(dfa.run(&empty).unwrap(), *dfa.initial());
    assert_eq!(dfa.run(&empty).unwrap(), Remainder::S0);
}

#[test]
fn all_states_final_so_everything_is_accepted() {
    let dfa = modthree::automaton().unwrap();

    let (accepted, state) = dfa.accepts([Bit::Zero, Bit::One, Bit::One]).unwrap();
    assert!(accepted);
    assert_eq!(state, Remainder::S0);
}

#[test]
fn parse_errors_are_not_transition_errors() {
    let err = modthree::parse_binary("10 2").unwrap_err();

    assert_eq!(
        err,
        modthree::ParseError::InvalidCharacter {
            character: '2',
            position: 3
        }
    );
}

#[test]
fn shared_automaton_runs_concurrently() {
    let dfa = Arc::new(modthree::automaton().unwrap());
    let inputs = ["1011", "1111", "10", "110110", "1"];

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let dfa = Arc::clone(&dfa);
                scope.spawn(move || {
                    let bits = modthree::parse_binary(input).unwrap();
                    (0..100)
                        .map(|_| dfa.run(&bits).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for (handle, input) in handles.into_iter().zip(inputs) {
            let states = handle.join().unwrap();
            let bits = modthree::parse_binary(input).unwrap();
            let expected = modthree::reference_remainder(&bits);
            assert!(states.iter().all(|s| s.value() == expected));
        }
    });
}
