//! modthree - remainder of a binary number modulo three
//!
//! Parses a binary string, runs it through the mod-three automaton and
//! prints the final state and remainder.

use clap::{Parser, ValueEnum};
use dfa_core::modthree::{self, Remainder};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "modthree")]
#[command(about = "Compute a binary number modulo three with a finite automaton")]
#[command(version)]
struct Cli {
    /// Binary string; spaces, tabs and underscores are ignored (e.g. 1111_000)
    input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, env = "MODTHREE_FORMAT")]
    format: Format,

    /// Also print the states visited
    #[arg(short, long, env = "MODTHREE_TRACE")]
    trace: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    final_state: Remainder,
    remainder: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<Remainder>>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let input = cli.input.trim();
    let dfa = modthree::automaton().map_err(|e| format!("Build error: {}", e))?;

    let bits = modthree::parse_binary(input).map_err(|e| format!("Parse error: {}", e))?;
    tracing::debug!("Parsed {} bits from {:?}", bits.len(), input);

    let trace = dfa
        .trace(&bits)
        .map_err(|e| format!("Run error: {}", e))?;
    let final_state = *trace.final_state();

    let report = Report {
        input,
        final_state,
        remainder: final_state.value(),
        path: cli
            .trace
            .then(|| trace.path().into_iter().copied().collect()),
    };

    match cli.format {
        Format::Json => Ok(serde_json::to_string(&report)?),
        Format::Text => {
            let mut out = format!(
                "Input: {}\nFinal state: {}\nRemainder (mod 3): {}",
                report.input, report.final_state, report.remainder
            );
            if let Some(path) = &report.path {
                let path: Vec<String> = path.iter().map(ToString::to_string).collect();
                out.push_str(&format!("\nPath: {}", path.join(" -> ")));
            }
            Ok(out)
        }
    }
}
