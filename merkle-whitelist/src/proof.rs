//! Positionless inclusion proofs.
//!
//! A [`WhitelistProof`] is the ordered list of sibling digests on the path
//! from one leaf to the root, leaf-adjacent sibling first. It carries no
//! left/right flags: every step hashes the sorted pair, so the verifier folds
//! the siblings in order and compares the result with the stored root.

use std::ops::Deref;

use bincode::{Decode, Encode};

use crate::{Digest, Identifier, NULL_WHITELIST, Result, WhitelistError, hash::parent_hash};

/// Upper bound for a decoded proof, in bytes.
const MAX_PROOF_BYTES: usize = 64 * 1024;

/// An inclusion proof for one whitelist member.
///
/// Dereferences to `[Digest]` so the sibling list can be passed verbatim to
/// anything expecting an ordered slice of 32-byte hashes. The order is
/// significant and is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhitelistProof {
    siblings: Vec<Digest>,
}

impl WhitelistProof {
    /// Wrap an ordered sibling list.
    pub fn new(siblings: Vec<Digest>) -> Self {
        WhitelistProof { siblings }
    }

    /// The sibling digests, leaf-adjacent first.
    pub fn siblings(&self) -> &[Digest] {
        &self.siblings
    }

    /// Consume the proof and return the sibling list.
    pub fn into_inner(self) -> Vec<Digest> {
        self.siblings
    }

    /// Root reached by folding this proof over `identifier`'s leaf.
    pub fn compute_root(&self, identifier: &Identifier) -> Digest {
        compute_root(identifier.leaf(), &self.siblings)
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| WhitelistError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// Trailing bytes after the proof are rejected.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<MAX_PROOF_BYTES>();
        let (proof, read): (Self, usize) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| WhitelistError::InvalidProof(format!("decode error: {}", e)))?;
        if read != bytes.len() {
            return Err(WhitelistError::InvalidProof(format!(
                "{} trailing bytes after proof",
                bytes.len() - read
            )));
        }
        Ok(proof)
    }
}

impl Deref for WhitelistProof {
    type Target = [Digest];

    fn deref(&self) -> &[Digest] {
        &self.siblings
    }
}

impl From<Vec<Digest>> for WhitelistProof {
    fn from(siblings: Vec<Digest>) -> Self {
        WhitelistProof { siblings }
    }
}

impl From<WhitelistProof> for Vec<Digest> {
    fn from(proof: WhitelistProof) -> Self {
        proof.siblings
    }
}

/// Fold `siblings` over `leaf`, hashing each sorted pair, and return the root
/// that results.
pub fn compute_root(leaf: Digest, siblings: &[Digest]) -> Digest {
    siblings
        .iter()
        .fold(leaf, |current, sibling| parent_hash(&current, sibling))
}

/// Take-side membership check against a stored root.
///
/// A root equal to [`NULL_WHITELIST`] disables the check and admits anyone.
/// Otherwise the proof must fold `identifier`'s leaf up to exactly `root`.
pub fn is_whitelisted(root: &Digest, siblings: &[Digest], identifier: &Identifier) -> bool {
    if *root == NULL_WHITELIST {
        return true;
    }
    compute_root(identifier.leaf(), siblings) == *root
}
