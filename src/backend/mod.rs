//! Bilinear group backends
//!
//! - `ark`: generic arkworks pairing engine, with BLS12-381 as the default
//! - `mock`: discrete-log stand-in used by the unit tests

pub mod ark;

#[cfg(test)]
pub(crate) mod mock;

pub use ark::{ArkPairingGroup, Bls12381};

use ark_ff::PrimeField;

/// Injective map from `i64` into a prime field; negatives land at `p - |v|`
pub(crate) fn field_from_i64<F: PrimeField>(v: i64) -> F {
    if v >= 0 {
        F::from(v as u64)
    } else {
        -F::from(v.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;
    use ark_std::{One, Zero};

    #[test]
    fn test_field_from_i64() {
        assert_eq!(field_from_i64::<Fr>(0), Fr::zero());
        assert_eq!(field_from_i64::<Fr>(-1), -Fr::one());
        assert_eq!(field_from_i64::<Fr>(i64::MIN), -Fr::from(1u64 << 63));
        assert_eq!(field_from_i64::<Fr>(i64::MAX), Fr::from(i64::MAX as u64));
        assert_eq!(field_from_i64::<Fr>(7) + field_from_i64::<Fr>(-7), Fr::zero());
    }

    #[test]
    fn test_backends_encode_alike() {
        use crate::traits::BilinearGroup;
        for v in [i64::MIN, -3, 0, 5, i64::MAX] {
            assert_eq!(mock::DlogGroup::scalar_from_i64(v), Bls12381::scalar_from_i64(v));
        }
    }
}
