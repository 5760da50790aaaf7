//! Arkworks pairing backend
//!
//! Any `ark_ec::pairing::Pairing` engine yields a [`BilinearGroup`]. The crate
//! default is BLS12-381.

use super::field_from_i64;
use crate::traits::BilinearGroup;
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::PrimeGroup;
use ark_ff::UniformRand;
use ark_std::marker::PhantomData;
use ark_std::rand::RngCore;
use ark_std::Zero;

/// Bilinear group backed by an arkworks pairing engine `E`
///
/// G₁ and G₂ are the projective curve groups of `E`, G_T is `PairingOutput<E>`.
#[derive(Clone, Copy, Debug)]
pub struct ArkPairingGroup<E: Pairing>(PhantomData<E>);

/// BLS12-381 (Type-3 pairing, 255-bit scalar field)
pub type Bls12381 = ArkPairingGroup<ark_bls12_381::Bls12_381>;

impl<E: Pairing> BilinearGroup for ArkPairingGroup<E> {
    type Scalar = E::ScalarField;
    type G1 = E::G1;
    type G2 = E::G2;
    type GT = PairingOutput<E>;

    fn g1_generator() -> Self::G1 {
        E::G1::generator()
    }

    fn g2_generator() -> Self::G2 {
        E::G2::generator()
    }

    fn random_scalar<R: RngCore>(rng: &mut R) -> Self::Scalar {
        E::ScalarField::rand(rng)
    }

    fn scalar_from_i64(v: i64) -> Self::Scalar {
        field_from_i64(v)
    }

    fn mul_scalars(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        *a * b
    }

    fn identity_g1() -> Self::G1 {
        E::G1::zero()
    }

    fn pow_g1(base: &Self::G1, exp: &Self::Scalar) -> Self::G1 {
        *base * exp
    }

    fn pow_g2(base: &Self::G2, exp: &Self::Scalar) -> Self::G2 {
        *base * exp
    }

    // G₁ is written additively in arkworks
    fn mul_g1(a: &Self::G1, b: &Self::G1) -> Self::G1 {
        *a + b
    }

    fn inverse_g1(a: &Self::G1) -> Self::G1 {
        -*a
    }

    fn pairing(p: &Self::G1, q: &Self::G2) -> Self::GT {
        E::pairing(*p, *q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Fr, G1Projective, G2Projective};
    use ark_std::{test_rng, One};

    type G = Bls12381;

    #[test]
    fn test_generators_match_curve() {
        assert_eq!(G::g1_generator(), G1Projective::generator());
        assert_eq!(G::g2_generator(), G2Projective::generator());
    }

    #[test]
    fn test_scalar_from_i64() {
        assert_eq!(G::scalar_from_i64(0), Fr::zero());
        assert_eq!(G::scalar_from_i64(1), Fr::one());
        assert_eq!(G::scalar_from_i64(-1), -Fr::one());
        assert_eq!(G::scalar_from_i64(42) + G::scalar_from_i64(-42), Fr::zero());
        assert_eq!(G::scalar_from_i64(i64::MIN), -Fr::from(1u64 << 63));
        assert_ne!(G::scalar_from_i64(i64::MAX), G::scalar_from_i64(i64::MIN));
    }

    #[test]
    fn test_inverse_cancels() {
        let mut rng = test_rng();
        for _ in 0..20 {
            let s = G::random_scalar(&mut rng);
            let p = G::pow_g1(&G::g1_generator(), &s);
            assert_eq!(G::mul_g1(&p, &G::inverse_g1(&p)), G::identity_g1());
        }
    }

    #[test]
    fn test_pow_is_multiplicative_in_exponent() {
        let mut rng = test_rng();
        let a = G::random_scalar(&mut rng);
        let b = G::random_scalar(&mut rng);
        let g = G::g1_generator();

        let left = G::pow_g1(&G::pow_g1(&g, &a), &b);
        let right = G::pow_g1(&g, &G::mul_scalars(&a, &b));
        assert_eq!(left, right);

        // g^a · g^b = g^(a+b)
        let sum = G::mul_g1(&G::pow_g1(&g, &a), &G::pow_g1(&g, &b));
        assert_eq!(sum, G::pow_g1(&g, &(a + b)));
    }

    #[test]
    fn test_pairing_bilinearity() {
        let mut rng = test_rng();
        let a = G::random_scalar(&mut rng);
        let b = G::random_scalar(&mut rng);
        let g1 = G::g1_generator();
        let g2 = G::g2_generator();

        // e(g1^a, g2^b) = e(g1^(ab), g2)
        let left = G::pairing(&G::pow_g1(&g1, &a), &G::pow_g2(&g2, &b));
        let right = G::pairing(&G::pow_g1(&g1, &G::mul_scalars(&a, &b)), &g2);
        assert_eq!(left, right);

        let other = G::pairing(&G::pow_g1(&g1, &a), &g2);
        assert_ne!(left, other);
    }
}
