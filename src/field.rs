// src/field.rs

//! Base-field arithmetic for BN254.
//!
//! Everything works over Fq, the 254-bit prime field with modulus
//! p = 21888242871839275222246405745257275088696311157297823662689037894645226208583.
//! Compressed coordinates travel as 256-bit integers, so this module also
//! owns the Fq <-> U256 conversions and the complement map that embeds a
//! sign bit into a lane.

use ark_bn254::Fq;
use ark_ff::{BigInt, Field, MontFp, PrimeField};
use ruint::aliases::U256;

/// 2^-1 mod p, i.e. (p + 1) / 2.
pub const FRAC_1_2: Fq =
    MontFp!("10944121435919637611123202872628637544348155578648911831344518947322613104292");

/// 27/82 mod p: real part of the twist constant b' = 27/82 - (3/82) u.
pub const FRAC_27_82: Fq =
    MontFp!("19485874751759354771024239261021720505790618469301721065564631296452457478373");

/// 3/82 mod p: the twist constant's imaginary part, negated in use.
pub const FRAC_3_82: Fq =
    MontFp!("21621313080719284060999498358119991246151234191964923374119659383734918571893");

/// (p + 1) / 4 as little-endian 64-bit limbs. p = 3 mod 4, so a^((p+1)/4)
/// is a square root of a whenever a is a quadratic residue.
const SQRT_EXP: [u64; 4] = [
    0x4f082305b61f3f52,
    0x65e05aa45a1c72a3,
    0x6e14116da0605617,
    0x0c19139cb84c680a,
];

/// Square-root candidate a^((p+1)/4).
///
/// When a is a non-residue the result is a well-defined field element that
/// is not a root of a. Callers must validate the candidate themselves; the
/// point compressor does so by matching y against it.
pub fn sqrt_candidate(a: Fq) -> Fq {
    a.pow(SQRT_EXP)
}

/// The field modulus as a 256-bit integer.
pub fn modulus_u256() -> U256 {
    U256::from_limbs(Fq::MODULUS.0)
}

/// Sign-embedding complement (2^256 - 1) - v, i.e. bitwise NOT.
///
/// For v < p the complement is always at or above p (2^256 > 2p), so a lane
/// decodes unambiguously: below p it is x itself, otherwise it is comp(x)
/// and the verifier takes the other root.
pub fn complement(v: U256) -> U256 {
    !v
}

/// Canonical little-endian limbs of a field element.
pub fn fq_to_u256(v: Fq) -> U256 {
    U256::from_limbs(v.into_bigint().0)
}

/// Interpret a 256-bit integer as a field element. None at or above p.
pub fn u256_to_fq(v: U256) -> Option<Fq> {
    Fq::from_bigint(BigInt::new(v.into_limbs()))
}
