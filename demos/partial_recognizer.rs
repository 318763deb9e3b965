//! Partial Recognizer
//!
//! This demo builds an automaton whose transition function is deliberately
//! incomplete and uses it as a recognizer.
//!
//! Key concepts:
//! - Validation runs once, at construction
//! - An undefined transition is a value, not a panic
//! - `recognizes` reads an undefined transition as rejection
//! - `step` can drive input one symbol at a time
//!
//! Run with: cargo run --example partial_recognizer

use dfa_core::{must, DfaBuilder, ValidationError};

// Recognizes identifiers: a letter followed by letters or digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Lex {
    Start,
    Ident,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Class {
    Letter,
    Digit,
}

fn classify(c: char) -> Option<Class> {
    if c.is_ascii_alphabetic() {
        Some(Class::Letter)
    } else if c.is_ascii_digit() {
        Some(Class::Digit)
    } else {
        None
    }
}

fn main() {
    println!("=== Partial Recognizer Example ===\n");

    let builder = DfaBuilder::new()
        .states([Lex::Start, Lex::Ident])
        .alphabet([Class::Letter, Class::Digit])
        .initial(Lex::Start)
        .final_state(Lex::Ident)
        .transition(Lex::Start, Class::Letter, Lex::Ident)
        .transition(Lex::Ident, Class::Letter, Lex::Ident)
        .transition(Lex::Ident, Class::Digit, Lex::Ident);

    // Asking for a complete automaton fails: (Start, Digit) has no edge.
    match builder.clone().require_complete(true).build() {
        Ok(_) => println!("unexpected: built a complete automaton"),
        Err(e) => println!("require_complete: {}", e),
    }

    let dfa = must(builder.build());
    println!("Missing transitions: {:?}\n", dfa.missing_transitions());

    for word in ["x", "abc123", "9lives", "snake_case", ""] {
        let Some(classes) = word.chars().map(classify).collect::<Option<Vec<_>>>() else {
            println!("{:>12}: not in the alphabet", format!("{word:?}"));
            continue;
        };
        println!(
            "{:>12}: recognized = {}",
            format!("{word:?}"),
            dfa.recognizes(&classes)
        );
    }

    // Driving the automaton one symbol at a time.
    println!("\nStepping through \"a1\":");
    let mut state = *dfa.initial();
    for class in [Class::Letter, Class::Digit] {
        match dfa.step(&state, &class) {
            Ok(next) => {
                println!("  {:?} --{:?}--> {:?}", state, class, next);
                state = next;
            }
            Err(e) => {
                println!("  stopped: {}", e);
                break;
            }
        }
    }

    // A definition that references an unknown state never becomes a Dfa.
    let bad = DfaBuilder::new()
        .state(Lex::Start)
        .symbol(Class::Letter)
        .initial(Lex::Start)
        .transition(Lex::Start, Class::Letter, Lex::Ident)
        .build();
    if let Err(dfa_core::BuildError::Invalid(ValidationError::UnknownTargetState { target, .. })) =
        bad
    {
        println!("\nRejected definition: target {:?} is not a state", target);
    }

    println!("\n=== Example Complete ===");
}
