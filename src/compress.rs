// src/compress.rs

//! Point compression for BN254 Groth16 proofs.
//!
//! A proof carries two G1 points (A, C) and one G2 point (B). Dropping the
//! y-coordinates halves the proof, as long as the verifier can pick the
//! right square root when it rebuilds them. The choice is folded into the
//! retained x: x travels as-is when y is the "positive" root and
//! complemented otherwise. Complemented lanes are at or above p, plain
//! lanes below it, so the two never collide.

use ark_bn254::{Bn254, Fq, Fq2, G1Affine, G2Affine};
use ark_ff::Field;
use ark_groth16::Proof;
use ruint::aliases::{U1024, U256};

use crate::error::{Error, Result};
use crate::field::{FRAC_1_2, FRAC_27_82, FRAC_3_82, complement, fq_to_u256, sqrt_candidate};

/// b' = 27/82 - (3/82) u, the constant of the sextic twist y^2 = x^3 + b'.
fn twist_b() -> Fq2 {
    Fq2::new(FRAC_27_82, -FRAC_3_82)
}

/// Compress a G1 point to its x-coordinate with the root choice embedded.
///
/// y is matched against ty = sqrt_candidate(x^3 + 3): equal keeps x,
/// negated complements it, anything else means (x, y) was never on the
/// curve. The match doubles as the candidate validation [`sqrt_candidate`]
/// leaves to its callers.
pub fn compress_g1(pt: &G1Affine) -> Result<U256> {
    let ty = sqrt_candidate(pt.x * pt.x * pt.x + Fq::from(3u64));
    if pt.y == ty {
        Ok(fq_to_u256(pt.x))
    } else if pt.y == -ty {
        Ok(complement(fq_to_u256(pt.x)))
    } else {
        Err(Error::InvalidG1Point)
    }
}

/// Square-root candidate in Fq2 = Fq[u]/(u^2 + 1), via the norm.
///
/// d = sqrt_candidate(c0^2 + c1^2) is a root of the norm, (c0 + d)/2 the
/// square of the result's real part r0, and r1 = c1 / (2 r0). With `negate`
/// the other norm root -d is used, which produces the second candidate pair
/// the G2 sign matching needs. As with [`sqrt_candidate`], the result is
/// only meaningful once the caller validates it.
pub fn fq2_sqrt_candidate(a: Fq2, negate: bool) -> Result<Fq2> {
    let mut d = sqrt_candidate(a.c0.square() + a.c1.square());
    if negate {
        d = -d;
    }
    let r0 = sqrt_candidate((a.c0 + d) * FRAC_1_2);
    let inv = r0.double().inverse().ok_or(Error::DegenerateSqrt)?;
    Ok(Fq2::new(r0, a.c1 * inv))
}

/// Which of the four candidate roots matched B's y0.
///
/// First position: y0 equal to the candidate (Pos) or its negation (Neg),
/// recorded by complementing x0. Second position: the +d norm root (Pos)
/// or the -d one (Neg), recorded by complementing x1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SignMatch {
    PosPos,
    NegPos,
    PosNeg,
    NegNeg,
    NoMatch,
}

fn classify(y0: Fq, t0: Fq, n0: Fq) -> SignMatch {
    if y0 == t0 {
        SignMatch::PosPos
    } else if y0 == -t0 {
        SignMatch::NegPos
    } else if y0 == n0 {
        SignMatch::PosNeg
    } else if y0 == -n0 {
        SignMatch::NegNeg
    } else {
        SignMatch::NoMatch
    }
}

/// Compress a G2 point to its two x-components with the root choice
/// embedded.
///
/// Both candidate roots of x^3 + b' are computed (the verifier does the
/// same), then y0 is matched against t0, -t0, n0, -n0 in that order. A
/// degenerate root in either candidate aborts the whole compression.
pub fn compress_g2(pt: &G2Affine) -> Result<(U256, U256)> {
    let rhs = pt.x * pt.x * pt.x + twist_b();
    let t = fq2_sqrt_candidate(rhs, false)?;
    let n = fq2_sqrt_candidate(rhs, true)?;

    let x0 = fq_to_u256(pt.x.c0);
    let x1 = fq_to_u256(pt.x.c1);
    match classify(pt.y.c0, t.c0, n.c0) {
        SignMatch::PosPos => Ok((x0, x1)),
        SignMatch::NegPos => Ok((complement(x0), x1)),
        SignMatch::PosNeg => Ok((x0, complement(x1))),
        SignMatch::NegNeg => Ok((complement(x0), complement(x1))),
        SignMatch::NoMatch => Err(Error::InvalidG2Point),
    }
}

/// Compress a whole proof into one 1024-bit value.
///
/// Lane k occupies bits [256k, 256k + 256): A, then B.x0, B.x1, C.
pub fn compress_proof(proof: &Proof<Bn254>) -> Result<U1024> {
    let a = compress_g1(&proof.a)?;
    let (b0, b1) = compress_g2(&proof.b)?;
    let c = compress_g1(&proof.c)?;
    Ok(pack_lanes(a, b0, b1, c))
}

fn pack_lanes(a: U256, b0: U256, b1: U256, c: U256) -> U1024 {
    let mut limbs = [0u64; U1024::LIMBS];
    for (k, lane) in [a, b0, b1, c].into_iter().enumerate() {
        limbs[4 * k..4 * k + 4].copy_from_slice(lane.as_limbs());
    }
    U1024::from_limbs(limbs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{G1Projective, G2Projective};
    use ark_ec::CurveGroup;
    use ark_ff::{MontFp, UniformRand, Zero};
    use ark_std::test_rng;

    fn g1(x: Fq, y: Fq) -> G1Affine {
        G1Affine::new_unchecked(x, y)
    }

    fn g2(x0: Fq, x1: Fq, y0: Fq, y1: Fq) -> G2Affine {
        G2Affine::new_unchecked(Fq2::new(x0, x1), Fq2::new(y0, y1))
    }

    // y-coordinates of the reference points, picked so that x stays small.
    const B1_Y0: Fq =
        MontFp!("2318417032921752773706234968143028537016473046724237753379416958334661833740");
    const B1_Y1: Fq =
        MontFp!("12286822439340662745461952989251194370289180628671678316022104244014550321766");
    const B2_Y0: Fq =
        MontFp!("8047157643940833978618641997300175756215753575045391058991297954029482922641");
    const B2_Y1: Fq =
        MontFp!("3148814681860593884816911186544731079592880761661328354965470387655325813620");
    const C_Y: Fq =
        MontFp!("16059845205665218889595687631975406613746683471807856151558479858750240882195");

    #[test]
    fn g1_generator_compresses_to_plain_x() {
        let pt = g1(Fq::from(1u64), Fq::from(2u64));
        assert_eq!(compress_g1(&pt).unwrap(), U256::from(1u64));
    }

    #[test]
    fn g1_negated_point_compresses_to_complement() {
        let pt = g1(Fq::from(1u64), -Fq::from(2u64));
        assert_eq!(
            compress_g1(&pt).unwrap(),
            U256::MAX - U256::from(1u64)
        );
    }

    #[test]
    fn g1_point_and_its_negation_complement_each_other() {
        let mut rng = test_rng();
        for _ in 0..16 {
            let pt = G1Projective::rand(&mut rng).into_affine();
            let neg = g1(pt.x, -pt.y);
            let lane = compress_g1(&pt).unwrap();
            let lane_neg = compress_g1(&neg).unwrap();
            assert_eq!(complement(lane), lane_neg);
        }
    }

    #[test]
    fn g1_off_curve_point_is_rejected() {
        let pt = g1(Fq::from(5u64), Fq::from(7u64));
        assert!(matches!(compress_g1(&pt), Err(Error::InvalidG1Point)));
    }

    #[test]
    fn g2_plain_root_keeps_both_components() {
        let pt = g2(Fq::from(1u64), Fq::from(2u64), B1_Y0, B1_Y1);
        let (b0, b1) = compress_g2(&pt).unwrap();
        assert_eq!(b0, U256::from(1u64));
        assert_eq!(b1, U256::from(2u64));
    }

    #[test]
    fn g2_negated_y_complements_the_first_component() {
        let pt = g2(Fq::from(1u64), Fq::from(2u64), -B1_Y0, -B1_Y1);
        let (b0, b1) = compress_g2(&pt).unwrap();
        assert_eq!(b0, U256::MAX - U256::from(1u64));
        assert_eq!(b1, U256::from(2u64));
    }

    #[test]
    fn g2_negated_norm_root_complements_the_second_component() {
        let pt = g2(Fq::from(1u64), Fq::from(12u64), B2_Y0, B2_Y1);
        let (b0, b1) = compress_g2(&pt).unwrap();
        assert_eq!(b0, U256::from(1u64));
        assert_eq!(b1, U256::MAX - U256::from(12u64));
    }

    #[test]
    fn g2_both_flips_complement_both_components() {
        let pt = g2(Fq::from(1u64), Fq::from(12u64), -B2_Y0, -B2_Y1);
        let (b0, b1) = compress_g2(&pt).unwrap();
        assert_eq!(b0, U256::MAX - U256::from(1u64));
        assert_eq!(b1, U256::MAX - U256::from(12u64));
    }

    #[test]
    fn g2_off_curve_point_is_rejected() {
        let pt = g2(
            Fq::from(1u64),
            Fq::from(2u64),
            Fq::from(3u64),
            Fq::from(4u64),
        );
        assert!(matches!(compress_g2(&pt), Err(Error::InvalidG2Point)));
    }

    #[test]
    fn g2_random_points_always_classify() {
        let mut rng = test_rng();
        for _ in 0..16 {
            let pt = G2Projective::rand(&mut rng).into_affine();
            compress_g2(&pt).expect("every curve point matches one root");
        }
    }

    #[test]
    fn fq2_sqrt_candidate_squares_back_on_residues() {
        let mut rng = test_rng();
        for _ in 0..16 {
            let y = Fq2::rand(&mut rng);
            let sq = y.square();
            let t = fq2_sqrt_candidate(sq, false);
            let n = fq2_sqrt_candidate(sq, true);
            let hit = [t, n]
                .into_iter()
                .flatten()
                .any(|r| r.square() == sq);
            assert!(hit, "neither branch yields a root of a known square");
        }
    }

    #[test]
    fn fq2_sqrt_candidate_degenerates_on_zero_real_part() {
        // 3 is a non-residue mod p, so d = -c0 and r0 = sqrt(0) = 0.
        let a = Fq2::new(Fq::from(3u64), Fq::zero());
        assert!(matches!(
            fq2_sqrt_candidate(a, false),
            Err(Error::DegenerateSqrt)
        ));
    }

    #[test]
    fn reference_proof_packs_into_expected_lanes() {
        let proof = Proof::<Bn254> {
            a: g1(Fq::from(1u64), Fq::from(2u64)),
            b: g2(Fq::from(1u64), Fq::from(2u64), B1_Y0, B1_Y1),
            c: g1(Fq::from(2u64), C_Y),
        };
        let packed = compress_proof(&proof).unwrap();
        let expected = U1024::from(1u64)
            | (U1024::from(1u64) << 256)
            | (U1024::from(2u64) << 512)
            | (U1024::from(2u64) << 768);
        assert_eq!(packed, expected);
    }

    #[test]
    fn flipped_reference_proof_packs_complemented_lanes() {
        let proof = Proof::<Bn254> {
            a: g1(Fq::from(1u64), -Fq::from(2u64)),
            b: g2(Fq::from(1u64), Fq::from(12u64), B2_Y0, B2_Y1),
            c: g1(Fq::from(2u64), -C_Y),
        };
        let packed = compress_proof(&proof).unwrap();
        let limbs = packed.into_limbs();
        let lane = |k: usize| {
            U256::from_limbs([limbs[4 * k], limbs[4 * k + 1], limbs[4 * k + 2], limbs[4 * k + 3]])
        };
        assert_eq!(lane(0), U256::MAX - U256::from(1u64));
        assert_eq!(lane(1), U256::from(1u64));
        assert_eq!(lane(2), U256::MAX - U256::from(12u64));
        assert_eq!(lane(3), U256::MAX - U256::from(2u64));
    }

    #[test]
    fn compression_is_deterministic() {
        let mut rng = test_rng();
        let proof = Proof::<Bn254> {
            a: G1Projective::rand(&mut rng).into_affine(),
            b: G2Projective::rand(&mut rng).into_affine(),
            c: G1Projective::rand(&mut rng).into_affine(),
        };
        assert_eq!(
            compress_proof(&proof).unwrap(),
            compress_proof(&proof).unwrap()
        );
    }
}
