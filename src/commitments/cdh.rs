//! Vector commitments from CDH (Catalano–Fiore style)
//!
//! For secret exponents z and generator g:
//!
//! - Commit:  c = ∏ₖ h_vec[k]^(m[k])
//! - Open:    πᵢ = ∏_{j≠i} h_mat[i][j]^(m[j])
//! - Verify:  e(c / h_vec[i]^(mᵢ), h_vec[i]) == e(πᵢ, g)
//!
//! Both sides equal e(g, g)^(zᵢ · Σ_{j≠i} zⱼ·mⱼ) for an honest opening.
//! Producing two valid openings of one position to different values yields
//! g^(zᵢ²), which breaks CDH.
//!
//! Properties:
//! - **Binding**: position binding under CDH
//! - **Deterministic**: commit and open are pure functions of their inputs
//! - **Not hiding**: there is no blinding factor
//!
//! On a Type-3 pairing the pairing partner h_vec[i] and the generator g are
//! taken from G₂; everything else lives in G₁.

use crate::commitments::keys::{CrossTermTable, Generators, KeyElement, PublicKey, SecretKey};
use crate::errors::{Result, VcError};
use crate::traits::{BilinearGroup, VectorCommitmentScheme};
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, Read, SerializationError, Valid, Validate,
    Write,
};
use ark_std::fmt;
use ark_std::rand::RngCore;
use rayon::prelude::*;

macro_rules! g1_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<G: BilinearGroup>(pub G::G1);

        impl<G: BilinearGroup> $name<G> {
            pub fn element(&self) -> &G::G1 {
                &self.0
            }
        }

        impl<G: BilinearGroup> Clone for $name<G> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<G: BilinearGroup> Copy for $name<G> {}

        impl<G: BilinearGroup> PartialEq for $name<G> {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl<G: BilinearGroup> Eq for $name<G> {}

        impl<G: BilinearGroup> fmt::Debug for $name<G> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        impl<G: BilinearGroup> Valid for $name<G> {
            fn check(&self) -> core::result::Result<(), SerializationError> {
                self.0.check()
            }
        }

        impl<G: BilinearGroup> CanonicalSerialize for $name<G> {
            fn serialize_with_mode<W: Write>(
                &self,
                writer: W,
                compress: Compress,
            ) -> core::result::Result<(), SerializationError> {
                self.0.serialize_with_mode(writer, compress)
            }

            fn serialized_size(&self, compress: Compress) -> usize {
                self.0.serialized_size(compress)
            }
        }

        impl<G: BilinearGroup> CanonicalDeserialize for $name<G> {
            fn deserialize_with_mode<R: Read>(
                reader: R,
                compress: Compress,
                validate: Validate,
            ) -> core::result::Result<Self, SerializationError> {
                G::G1::deserialize_with_mode(reader, compress, validate).map($name)
            }
        }
    };
}

g1_wrapper!(
    /// Commitment to a whole vector: one G₁ element
    Commitment
);

g1_wrapper!(
    /// Opening proof for a single position: one G₁ element
    Proof
);

/// CDH vector commitment over a bilinear group `G`
pub struct VectorCommitmentCdh<G: BilinearGroup> {
    generators: Generators<G>,
}

impl<G: BilinearGroup> VectorCommitmentCdh<G> {
    pub fn new(generators: Generators<G>) -> Self {
        Self { generators }
    }

    pub fn generators(&self) -> &Generators<G> {
        &self.generators
    }

    /// Sample z and derive `(h_vec, h_mat)` for vectors of length `q`.
    ///
    /// Costs q G₂ and q(q+1)/2 G₁ exponentiations; the table rows are built
    /// in parallel.
    #[tracing::instrument(skip_all, name = "CdhVC::key_gen", fields(q = q))]
    pub fn key_gen<R: RngCore>(
        &self,
        q: usize,
        rng: &mut R,
    ) -> Result<(SecretKey<G>, PublicKey<G>)> {
        if q < 1 {
            return Err(VcError::InvalidParameter(
                "vector length must be at least 1".to_string(),
            ));
        }

        let z: Vec<G::Scalar> = (0..q).map(|_| G::random_scalar(rng)).collect();
        let Generators { g1, g2 } = self.generators;

        let h_vec: Vec<KeyElement<G>> = z
            .par_iter()
            .map(|z_i| KeyElement {
                g1: G::pow_g1(&g1, z_i),
                g2: G::pow_g2(&g2, z_i),
            })
            .collect();

        let rows: Vec<Vec<G::G1>> = (0..q)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..q)
                    .map(|j| G::pow_g1(&g1, &G::mul_scalars(&z[i], &z[j])))
                    .collect()
            })
            .collect();
        let upper: Vec<G::G1> = rows.into_iter().flatten().collect();

        let h_mat = CrossTermTable::from_upper_triangle(q, upper).ok_or_else(|| {
            VcError::InvalidParameter("cross-term table has the wrong size".to_string())
        })?;

        tracing::debug!(q, stored = CrossTermTable::<G>::packed_len(q), "generated key material");

        Ok((SecretKey::new(z), PublicKey { h_vec, h_mat }))
    }

    /// Commit to integer entries
    pub fn commit(&self, m: &[i64], h_vec: &[KeyElement<G>]) -> Result<Commitment<G>> {
        self.commit_scalars(&encode::<G>(m), h_vec)
    }

    /// c = ∏ₖ h_vec[k]^(m[k])
    #[tracing::instrument(skip_all, name = "CdhVC::commit", fields(q = h_vec.len()))]
    pub fn commit_scalars(
        &self,
        m: &[G::Scalar],
        h_vec: &[KeyElement<G>],
    ) -> Result<Commitment<G>> {
        check_len(h_vec.len(), m.len())?;

        let c = m
            .iter()
            .zip(h_vec)
            .fold(G::identity_g1(), |acc, (m_k, h_k)| {
                G::mul_g1(&acc, &G::pow_g1(&h_k.g1, m_k))
            });

        Ok(Commitment(c))
    }

    /// Open integer entries at position `i`
    pub fn open(&self, i: usize, m: &[i64], h_mat: &CrossTermTable<G>) -> Result<Proof<G>> {
        self.open_scalars(i, &encode::<G>(m), h_mat)
    }

    /// πᵢ = ∏_{j≠i} h_mat[i][j]^(m[j])
    #[tracing::instrument(skip_all, name = "CdhVC::open", fields(i = i, q = h_mat.dimension()))]
    pub fn open_scalars(
        &self,
        i: usize,
        m: &[G::Scalar],
        h_mat: &CrossTermTable<G>,
    ) -> Result<Proof<G>> {
        check_index(i, h_mat.dimension())?;
        check_len(h_mat.dimension(), m.len())?;

        Ok(open_unchecked::<G>(i, m, h_mat))
    }

    /// Proofs for every position of `m`, computed in parallel.
    ///
    /// Element `i` equals `open(i, m, h_mat)`.
    pub fn open_all(&self, m: &[i64], h_mat: &CrossTermTable<G>) -> Result<Vec<Proof<G>>> {
        self.open_all_scalars(&encode::<G>(m), h_mat)
    }

    #[tracing::instrument(skip_all, name = "CdhVC::open_all", fields(q = h_mat.dimension()))]
    pub fn open_all_scalars(
        &self,
        m: &[G::Scalar],
        h_mat: &CrossTermTable<G>,
    ) -> Result<Vec<Proof<G>>> {
        check_len(h_mat.dimension(), m.len())?;

        Ok((0..h_mat.dimension())
            .into_par_iter()
            .map(|i| open_unchecked::<G>(i, m, h_mat))
            .collect())
    }

    /// Check that `proof` opens `c` to `m_i` at position `i`
    pub fn verify(
        &self,
        c: &Commitment<G>,
        m_i: i64,
        i: usize,
        proof: &Proof<G>,
        h_vec: &[KeyElement<G>],
    ) -> Result<bool> {
        self.verify_scalar(c, &G::scalar_from_i64(m_i), i, proof, h_vec)
    }

    /// e(c · (h_vec[i]^(mᵢ))⁻¹, h_vec[i]) == e(πᵢ, g)
    ///
    /// A proof that fails the check gives `Ok(false)`; only a bad index is an
    /// error.
    #[tracing::instrument(skip_all, name = "CdhVC::verify", fields(i = i, q = h_vec.len()))]
    pub fn verify_scalar(
        &self,
        c: &Commitment<G>,
        m_i: &G::Scalar,
        i: usize,
        proof: &Proof<G>,
        h_vec: &[KeyElement<G>],
    ) -> Result<bool> {
        check_index(i, h_vec.len())?;
        let h_i = &h_vec[i];

        let shifted = G::mul_g1(&c.0, &G::inverse_g1(&G::pow_g1(&h_i.g1, m_i)));
        let left = G::pairing(&shifted, &h_i.g2);
        let right = G::pairing(&proof.0, &self.generators.g2);

        let valid = left == right;
        if !valid {
            tracing::debug!(i, "pairing check failed");
        }
        Ok(valid)
    }
}

impl<G: BilinearGroup> Default for VectorCommitmentCdh<G> {
    fn default() -> Self {
        Self::new(Generators::standard())
    }
}

impl<G: BilinearGroup> Clone for VectorCommitmentCdh<G> {
    fn clone(&self) -> Self {
        Self {
            generators: self.generators,
        }
    }
}

impl<G: BilinearGroup> fmt::Debug for VectorCommitmentCdh<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorCommitmentCdh")
            .field("generators", &self.generators)
            .finish()
    }
}

impl<G: BilinearGroup> VectorCommitmentScheme for VectorCommitmentCdh<G> {
    type Message = i64;
    type SecretKey = SecretKey<G>;
    type PublicKey = PublicKey<G>;
    type Commitment = Commitment<G>;
    type Proof = Proof<G>;

    fn key_gen<R: RngCore>(
        &self,
        len: usize,
        rng: &mut R,
    ) -> Result<(Self::SecretKey, Self::PublicKey)> {
        VectorCommitmentCdh::key_gen(self, len, rng)
    }

    fn commit(&self, pk: &Self::PublicKey, messages: &[i64]) -> Result<Self::Commitment> {
        VectorCommitmentCdh::commit(self, messages, &pk.h_vec)
    }

    fn open(&self, pk: &Self::PublicKey, index: usize, messages: &[i64]) -> Result<Self::Proof> {
        VectorCommitmentCdh::open(self, index, messages, &pk.h_mat)
    }

    fn verify(
        &self,
        pk: &Self::PublicKey,
        commitment: &Self::Commitment,
        value: &i64,
        index: usize,
        proof: &Self::Proof,
    ) -> Result<bool> {
        VectorCommitmentCdh::verify(self, commitment, *value, index, proof, &pk.h_vec)
    }
}

fn encode<G: BilinearGroup>(m: &[i64]) -> Vec<G::Scalar> {
    m.iter().map(|&v| G::scalar_from_i64(v)).collect()
}

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(VcError::LengthMismatch { expected, actual });
    }
    Ok(())
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(VcError::IndexOutOfRange { index, len });
    }
    Ok(())
}

// Caller has checked `i < dim` and `m.len() == dim`. The diagonal is never
// visited: `row` skips it.
fn open_unchecked<G: BilinearGroup>(
    i: usize,
    m: &[G::Scalar],
    h_mat: &CrossTermTable<G>,
) -> Proof<G> {
    let p = h_mat.row(i).fold(G::identity_g1(), |acc, (j, h_ij)| {
        G::mul_g1(&acc, &G::pow_g1(h_ij, &m[j]))
    });
    Proof(p)
}
