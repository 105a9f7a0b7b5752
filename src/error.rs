// src/error.rs

use thiserror::Error;

/// Everything that can go wrong between reading a proof document and
/// printing the final names.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed as JSON but does not describe a usable proof (missing
    /// coordinates, non-decimal digits, value at or above the modulus).
    #[error("malformed proof document: {0}")]
    Document(String),

    /// The circuit tag is 3 bits on the wire; nothing past 7 fits.
    #[error("circuit type {0} out of range (expected 0-7)")]
    CircuitTypeRange(u8),

    #[error("domain name must be non-empty")]
    EmptyDomain,

    /// y matched neither root of x^3 + 3: the point is not on G1.
    #[error("error compressing G1 point")]
    InvalidG1Point,

    /// y0 matched none of the four candidate roots: the point is not on G2.
    #[error("error compressing G2 point")]
    InvalidG2Point,

    /// The extension-field square root hit r0 = 0, leaving r1 = c1 / (2 r0)
    /// undefined.
    #[error("degenerate square root in Fq2 (r0 = 0)")]
    DegenerateSqrt,
}

pub type Result<T> = std::result::Result<T, Error>;
