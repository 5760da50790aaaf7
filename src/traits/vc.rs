//! Vector Commitment Scheme trait abstraction
//!
//! A vector commitment lets a committer bind to an ordered vector with a
//! single short value and later open any one position with a proof that
//! does not reveal the other entries.
//!
//! # Usage
//!
//! ```ignore
//! use cdh_vc::traits::VectorCommitmentScheme;
//!
//! let (sk, pk) = scheme.key_gen(4, &mut rng)?;
//! let c = scheme.commit(&pk, &[1, 2, 3, 4])?;
//! let proof = scheme.open(&pk, 2, &[1, 2, 3, 4])?;
//! assert!(scheme.verify(&pk, &c, &3, 2, &proof)?);
//! ```

use crate::errors::Result;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::RngCore;
use core::fmt::Debug;

/// Core trait for position-binding vector commitments
///
/// Implementors must provide:
/// - KeyGen: sample secret material and derive the public key for a fixed length
/// - Commit: bind to a whole vector
/// - Open: prove the value at one position
/// - Verify: check a position proof against public material only
pub trait VectorCommitmentScheme: Clone + Send + Sync + Debug {
    /// One entry of the committed vector
    type Message: Clone + Send + Sync + Debug;

    /// Committer-only key material
    type SecretKey: Send + Sync;

    /// Key material that is safe to publish
    type PublicKey: Clone + Send + Sync + Debug;

    type Commitment: Clone
        + Send
        + Sync
        + Debug
        + PartialEq
        + Eq
        + CanonicalSerialize
        + CanonicalDeserialize;

    type Proof: Clone
        + Send
        + Sync
        + Debug
        + PartialEq
        + Eq
        + CanonicalSerialize
        + CanonicalDeserialize;

    /// Generate keys for vectors of exactly `len` entries
    fn key_gen<R: RngCore>(
        &self,
        len: usize,
        rng: &mut R,
    ) -> Result<(Self::SecretKey, Self::PublicKey)>;

    fn commit(&self, pk: &Self::PublicKey, messages: &[Self::Message]) -> Result<Self::Commitment>;

    fn open(
        &self,
        pk: &Self::PublicKey,
        index: usize,
        messages: &[Self::Message],
    ) -> Result<Self::Proof>;

    /// `Ok(false)` for a well-formed but invalid opening
    fn verify(
        &self,
        pk: &Self::PublicKey,
        commitment: &Self::Commitment,
        value: &Self::Message,
        index: usize,
        proof: &Self::Proof,
    ) -> Result<bool>;

    /// Size of a commitment in bytes (compressed)
    fn commitment_size(commitment: &Self::Commitment) -> usize {
        commitment.compressed_size()
    }

    /// Size of a proof in bytes (compressed)
    fn proof_size(proof: &Self::Proof) -> usize {
        proof.compressed_size()
    }
}
