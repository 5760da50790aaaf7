//! Discrete-log mock backend for tests
//!
//! Every group element is represented by its own discrete log in Fr, so
//! `pow` is field multiplication, `mul` is field addition and the pairing is
//! the product of the two logs. The map is bilinear, which is all the scheme
//! relies on, but it is trivially breakable (NOT secure!). It exists to make
//! large test sweeps cheap.

use super::field_from_i64;
use crate::traits::BilinearGroup;
use ark_bls12_381::Fr;
use ark_ff::UniformRand;
use ark_std::rand::RngCore;
use ark_std::{One, Zero};

#[derive(Clone, Copy, Debug)]
pub struct DlogGroup;

impl BilinearGroup for DlogGroup {
    type Scalar = Fr;
    type G1 = Fr;
    type G2 = Fr;
    type GT = Fr;

    fn g1_generator() -> Fr {
        Fr::one()
    }

    fn g2_generator() -> Fr {
        Fr::one()
    }

    fn random_scalar<R: RngCore>(rng: &mut R) -> Fr {
        Fr::rand(rng)
    }

    fn scalar_from_i64(v: i64) -> Fr {
        field_from_i64(v)
    }

    fn mul_scalars(a: &Fr, b: &Fr) -> Fr {
        *a * b
    }

    fn identity_g1() -> Fr {
        Fr::zero()
    }

    fn pow_g1(base: &Fr, exp: &Fr) -> Fr {
        *base * exp
    }

    fn pow_g2(base: &Fr, exp: &Fr) -> Fr {
        *base * exp
    }

    fn mul_g1(a: &Fr, b: &Fr) -> Fr {
        *a + b
    }

    fn inverse_g1(a: &Fr) -> Fr {
        -*a
    }

    fn pairing(p: &Fr, q: &Fr) -> Fr {
        *p * q
    }
}
