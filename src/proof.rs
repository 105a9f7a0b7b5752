// src/proof.rs

//! The proof document as exported by the proving pipeline.
//!
//! snarkjs writes proofs as JSON with decimal-string coordinates and a
//! trailing projective component on every point (`"1"` for G1, `["1","0"]`
//! for G2). Only the affine coordinates matter here; the extras are
//! accepted and ignored. Points are built with `new_unchecked` on purpose:
//! curve membership is not assumed, the compressor's sign matching is what
//! rejects bad points.

use std::path::Path;

use ark_bn254::{Bn254, Fq, Fq2, G1Affine, G2Affine};
use ark_groth16::Proof;
use ruint::aliases::U256;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::field::u256_to_fq;

/// A parsed snarkjs proof export.
#[derive(Clone, Debug, Deserialize)]
pub struct ProofDocument {
    /// A in G1: `[x, y]`, possibly followed by a projective `"1"`.
    pub pi_a: Vec<String>,
    /// B in G2: rows `[x0, x1]` and `[y0, y1]`, possibly followed by
    /// `["1", "0"]`.
    pub pi_b: Vec<Vec<String>>,
    /// C in G1: like `pi_a`.
    pub pi_c: Vec<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub curve: Option<String>,
}

impl ProofDocument {
    /// Read and parse a proof document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Parse a proof document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Convert into an arkworks proof, checking document shape and
    /// coordinate ranges but not curve membership.
    pub fn try_into_proof(&self) -> Result<Proof<Bn254>> {
        self.check_shape()?;
        let a = G1Affine::new_unchecked(
            parse_fq(&self.pi_a[0], "pi_a[0]")?,
            parse_fq(&self.pi_a[1], "pi_a[1]")?,
        );
        let b = G2Affine::new_unchecked(
            Fq2::new(
                parse_fq(&self.pi_b[0][0], "pi_b[0][0]")?,
                parse_fq(&self.pi_b[0][1], "pi_b[0][1]")?,
            ),
            Fq2::new(
                parse_fq(&self.pi_b[1][0], "pi_b[1][0]")?,
                parse_fq(&self.pi_b[1][1], "pi_b[1][1]")?,
            ),
        );
        let c = G1Affine::new_unchecked(
            parse_fq(&self.pi_c[0], "pi_c[0]")?,
            parse_fq(&self.pi_c[1], "pi_c[1]")?,
        );
        Ok(Proof { a, b, c })
    }

    fn check_shape(&self) -> Result<()> {
        if let Some(protocol) = &self.protocol {
            if protocol != "groth16" {
                return Err(Error::Document(format!(
                    "protocol {protocol:?}, expected \"groth16\""
                )));
            }
        }
        if let Some(curve) = &self.curve {
            if curve != "bn128" {
                return Err(Error::Document(format!(
                    "curve {curve:?}, expected \"bn128\""
                )));
            }
        }
        if self.pi_a.len() < 2 {
            return Err(Error::Document("pi_a needs two coordinates".to_owned()));
        }
        if self.pi_b.len() < 2 || self.pi_b[0].len() < 2 || self.pi_b[1].len() < 2 {
            return Err(Error::Document(
                "pi_b needs two rows of two coordinates".to_owned(),
            ));
        }
        if self.pi_c.len() < 2 {
            return Err(Error::Document("pi_c needs two coordinates".to_owned()));
        }
        Ok(())
    }
}

/// Parse one decimal coordinate, rejecting non-digits and values at or
/// above the field modulus.
fn parse_fq(text: &str, coord: &str) -> Result<Fq> {
    let value = U256::from_str_radix(text, 10)
        .map_err(|_| Error::Document(format!("{coord}: {text:?} is not a decimal coordinate")))?;
    u256_to_fq(value).ok_or_else(|| {
        Error::Document(format!("{coord}: value at or above the field modulus"))
    })
}
