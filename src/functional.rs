//! Free-function API over a process-wide default scheme
//!
//! The default instance runs on BLS12-381 with generators sampled once, on
//! first use, and shared for the lifetime of the process. Everything produced
//! here is only meaningful to the other functions of this module.
//!
//! Code that needs control over the group or the generators should hold its
//! own [`VectorCommitmentCdh`] instead.

use crate::backend::Bls12381;
use crate::commitments::{
    Commitment, CrossTermTable, Generators, KeyElement, Proof, SecretKey, VectorCommitmentCdh,
};
use crate::errors::Result;
use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_SCHEME: VectorCommitmentCdh<Bls12381> =
        VectorCommitmentCdh::new(Generators::random(&mut rand::thread_rng()));
}

/// The shared instance backing this module
pub fn default_scheme() -> &'static VectorCommitmentCdh<Bls12381> {
    &DEFAULT_SCHEME
}

/// `(z, h_vec, h_mat)` for vectors of length `q`
pub fn key_gen(
    q: usize,
) -> Result<(
    SecretKey<Bls12381>,
    Vec<KeyElement<Bls12381>>,
    CrossTermTable<Bls12381>,
)> {
    let (sk, pk) = DEFAULT_SCHEME.key_gen(q, &mut rand::thread_rng())?;
    Ok((sk, pk.h_vec, pk.h_mat))
}

pub fn commit(m: &[i64], h_vec: &[KeyElement<Bls12381>]) -> Result<Commitment<Bls12381>> {
    DEFAULT_SCHEME.commit(m, h_vec)
}

pub fn open(i: usize, m: &[i64], h_mat: &CrossTermTable<Bls12381>) -> Result<Proof<Bls12381>> {
    DEFAULT_SCHEME.open(i, m, h_mat)
}

pub fn verify(
    c: &Commitment<Bls12381>,
    m_i: i64,
    i: usize,
    proof: &Proof<Bls12381>,
    h_vec: &[KeyElement<Bls12381>],
) -> Result<bool> {
    DEFAULT_SCHEME.verify(c, m_i, i, proof, h_vec)
}
