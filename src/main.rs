// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use nope_compress::{CircuitType, ProofDocument, proof_to_names};

/// Compress a Groth16 proof into DNS-safe names.
///
/// Reads a snarkjs proof export, compresses its three curve points into a
/// single 1024-bit value, encodes that value over the DNS-label alphabet,
/// and prints the resulting name(s) on stdout, one per line.
#[derive(Parser, Debug)]
#[command(name = "nope-compress", version, about)]
struct Cli {
    /// Path to the proof.json exported by the proving pipeline.
    proof_file: PathBuf,

    /// 3-bit tag (0-7) naming the circuit the proof was produced for.
    circuit_type: u8,

    /// Domain name the proof will be published under.
    domain_name: String,
}

fn run(cli: &Cli) -> anyhow::Result<Vec<String>> {
    let circuit_type = CircuitType::new(cli.circuit_type)?;
    let document = ProofDocument::from_path(&cli.proof_file)
        .with_context(|| format!("reading {}", cli.proof_file.display()))?;
    let proof = document.try_into_proof()?;
    tracing::debug!(file = %cli.proof_file.display(), "proof document loaded");
    Ok(proof_to_names(&proof, circuit_type, &cli.domain_name)?)
}

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the resulting names.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // clap exits with 2 on bad arguments; the published contract is 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
        Err(err) => err.exit(),
    };

    match run(&cli) {
        Ok(names) => {
            for name in names {
                println!("{name}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
