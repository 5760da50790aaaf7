//! # CDH vector commitments
//!
//! A committer publishes one group element binding an ordered vector of
//! integers, then opens any single position with a one-element proof. A
//! verifier checks the opening with a pairing equation using public key
//! material only. Position binding reduces to the Computational
//! Diffie-Hellman assumption (Catalano & Fiore, PKC 2013).
//!
//! ## Structure
//!
//! - `traits`: the bilinear group collaborator and the scheme-level trait
//! - `backend`: arkworks pairing backends (BLS12-381 by default)
//! - `commitments`: key generation, commit, open and verify
//! - `functional`: free functions over a process-wide default instance
//! - `errors`: error type shared by all operations
//!
//! ## Usage
//!
//! ```ignore
//! let scheme = VectorCommitmentCdh::<Bls12381>::default();
//! let (_sk, pk) = scheme.key_gen(3, &mut rng)?;
//! let c = scheme.commit(&[1, 2, 3], &pk.h_vec)?;
//! let p0 = scheme.open(0, &[1, 2, 3], &pk.h_mat)?;
//! assert!(scheme.verify(&c, 1, 0, &p0, &pk.h_vec)?);
//! ```

pub mod backend;
pub mod commitments;
pub mod functional;
pub mod traits;

pub mod errors;

// Re-exports
pub use errors::{Result, VcError};
pub use traits::{BilinearGroup, VectorCommitmentScheme};

pub use backend::{ArkPairingGroup, Bls12381};
pub use commitments::{
    Commitment, CrossTermTable, Generators, KeyElement, Proof, PublicKey, SecretKey,
    VectorCommitmentCdh,
};
