//! Bilinear group abstraction
//!
//! The commitment scheme never touches curve arithmetic directly. Everything
//! it needs from the underlying group goes through [`BilinearGroup`]:
//!
//! - generators of both source groups
//! - scalar sampling and scalar multiplication
//! - exponentiation, multiplication and inversion in G₁
//! - exponentiation in G₂
//! - the pairing e: G₁ × G₂ → G_T
//!
//! Group operations are written multiplicatively, matching the usual
//! presentation of the scheme. Backends over additive curve groups map
//! `mul` to point addition and `pow` to scalar multiplication.
//!
//! Type-3 pairings have G₁ ≠ G₂, so public key elements that appear on the
//! right of a pairing exist in both source groups. A symmetric backend can
//! simply set `G2 = G1`.

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::RngCore;
use core::fmt::Debug;
use zeroize::Zeroize;

pub trait BilinearGroup: Clone + Send + Sync + Debug + 'static {
    /// Exponent field (integers modulo the group order)
    type Scalar: Copy + Debug + PartialEq + Eq + Send + Sync + Zeroize;

    /// Source group holding commitments, proofs and the cross-term table
    type G1: Copy
        + Debug
        + PartialEq
        + Eq
        + Send
        + Sync
        + CanonicalSerialize
        + CanonicalDeserialize;

    /// Source group for the right-hand pairing argument
    type G2: Copy
        + Debug
        + PartialEq
        + Eq
        + Send
        + Sync
        + CanonicalSerialize
        + CanonicalDeserialize;

    /// Target group of the pairing
    type GT: Copy + Debug + PartialEq + Eq + Send + Sync;

    fn g1_generator() -> Self::G1;

    fn g2_generator() -> Self::G2;

    /// Uniform sample from the exponent field
    fn random_scalar<R: RngCore>(rng: &mut R) -> Self::Scalar;

    /// Injective embedding of machine integers; negatives map to `-|v|`
    fn scalar_from_i64(v: i64) -> Self::Scalar;

    fn mul_scalars(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    fn identity_g1() -> Self::G1;

    fn pow_g1(base: &Self::G1, exp: &Self::Scalar) -> Self::G1;

    fn pow_g2(base: &Self::G2, exp: &Self::Scalar) -> Self::G2;

    fn mul_g1(a: &Self::G1, b: &Self::G1) -> Self::G1;

    fn inverse_g1(a: &Self::G1) -> Self::G1;

    fn pairing(p: &Self::G1, q: &Self::G2) -> Self::GT;
}
