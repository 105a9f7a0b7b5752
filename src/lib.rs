// src/lib.rs

//! Groth16 proof compression into DNS-safe names.
//!
//! A BN254 Groth16 proof is three curve points. [`compress`] drops each
//! point's y-coordinate, folding the choice of square root into the
//! retained x, and packs the result into one 1024-bit value. [`encode`]
//! rewrites that value in base 37 over the DNS-label alphabet with a
//! trailing checksum, and [`name`] joins the pieces with a circuit tag and
//! the target domain into one or two DNS names, depending on how much of
//! the 253-octet name limit the domain leaves free.
//!
//! The inverse transform lives in the consuming verifier. The contract
//! this crate owes it is bit-for-bit reproducibility: lane layout, digit
//! order, part boundaries, and checksum may never change.

pub mod compress;
pub mod encode;
pub mod error;
pub mod field;
pub mod name;
pub mod proof;

pub use compress::compress_proof;
pub use encode::{EncodedParts, encode_proof};
pub use error::{Error, Result};
pub use name::{CircuitType, assemble_names};
pub use proof::ProofDocument;

use ark_bn254::Bn254;
use ark_groth16::Proof;

/// Run the whole pipeline: compress, encode, assemble.
pub fn proof_to_names(
    proof: &Proof<Bn254>,
    circuit_type: CircuitType,
    domain: &str,
) -> Result<Vec<String>> {
    let packed = compress::compress_proof(proof)?;
    let parts = encode::encode_proof(packed);
    name::assemble_names(circuit_type, domain, &parts)
}
