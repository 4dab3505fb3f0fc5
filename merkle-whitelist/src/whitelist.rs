use tracing::debug;

use crate::{
    Digest, IDENTIFIER_LEN, Identifier, NULL_WHITELIST, Result, WhitelistError, WhitelistProof,
    hash::parent_hash,
    layer::{collapse_to_root, next_layer},
    proof::compute_root,
};

/// A whitelist of identifiers committed to by a single Merkle root.
///
/// Holds the identifiers in the order they were supplied (used for
/// serialization) and their leaf digests in ascending byte order (used for
/// every tree computation). Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Identifier>", into = "Vec<Identifier>")
)]
pub struct MerkleWhitelist {
    identifiers: Vec<Identifier>,
    leaves: Vec<Digest>,
}

impl MerkleWhitelist {
    /// Build a whitelist from identifiers.
    ///
    /// An empty set is accepted here; deriving a root or proof from it fails
    /// with [`WhitelistError::EmptyTree`]. Fails with
    /// [`WhitelistError::DuplicateLeaf`] if two identifiers hash to the same
    /// leaf.
    pub fn new<I>(identifiers: I) -> Result<Self>
    where
        I: IntoIterator<Item = Identifier>,
    {
        let identifiers: Vec<Identifier> = identifiers.into_iter().collect();
        let mut leaves: Vec<Digest> = identifiers.iter().map(Identifier::leaf).collect();
        leaves.sort_unstable();

        if let Some(pair) = leaves.windows(2).find(|pair| pair[0] == pair[1]) {
            debug!(leaf = %hex::encode(pair[0]), "duplicate whitelist leaf");
            return Err(WhitelistError::DuplicateLeaf(pair[0]));
        }

        debug!(leaves = leaves.len(), "built merkle whitelist");
        Ok(MerkleWhitelist {
            identifiers,
            leaves,
        })
    }

    /// Identifiers in their original order.
    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    /// Leaf digests in ascending byte order.
    pub fn leaves(&self) -> &[Digest] {
        &self.leaves
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// True if the whitelist has no members.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// True if `identifier` is a member.
    pub fn contains(&self, identifier: &Identifier) -> bool {
        self.leaves.binary_search(&identifier.leaf()).is_ok()
    }

    /// Concatenate the raw identifiers in their original order.
    ///
    /// Output length is `32 * len()`.
    pub fn to_buffer(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.identifiers.len() * IDENTIFIER_LEN);
        for identifier in &self.identifiers {
            buf.extend_from_slice(identifier.as_bytes());
        }
        buf
    }

    /// Rebuild a whitelist from the output of [`to_buffer`](Self::to_buffer).
    ///
    /// Fails with [`WhitelistError::InvalidBuffer`] if the length is not a
    /// multiple of 32, and with [`WhitelistError::DuplicateLeaf`] as
    /// [`new`](Self::new) does.
    pub fn from_buffer(buf: &[u8]) -> Result<Self> {
        if buf.len() % IDENTIFIER_LEN != 0 {
            return Err(WhitelistError::InvalidBuffer { len: buf.len() });
        }
        let identifiers = buf
            .chunks_exact(IDENTIFIER_LEN)
            .map(Identifier::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::new(identifiers)
    }

    /// The Merkle root committing to the whole identifier set.
    ///
    /// Independent of the order identifiers were supplied in. A single
    /// member's root is its own leaf.
    pub fn derive_merkle_root(&self) -> Result<Digest> {
        collapse_to_root(self.leaves.clone())
    }

    /// The value to store on-chain as the whitelist commitment.
    ///
    /// Same as [`derive_merkle_root`](Self::derive_merkle_root), except that an
    /// empty whitelist yields [`NULL_WHITELIST`] (no restriction) instead of
    /// an error.
    pub fn derive_commitment(&self) -> Digest {
        self.derive_merkle_root().unwrap_or(NULL_WHITELIST)
    }

    /// Sibling digests proving `identifier` is a member, leaf-adjacent first.
    ///
    /// A level where the current digest is the carried last element of an odd
    /// layer contributes no sibling, so proofs can be shorter than the tree
    /// depth.
    pub fn derive_proof(&self, identifier: &Identifier) -> Result<WhitelistProof> {
        if self.leaves.is_empty() {
            return Err(WhitelistError::EmptyTree);
        }

        let mut current = identifier.leaf();
        let mut index = self.leaves.binary_search(&current).map_err(|_| {
            debug!(identifier = %identifier, "identifier is not a whitelist member");
            WhitelistError::MembershipNotFound {
                digest: current,
                layer: 0,
            }
        })?;

        let mut siblings = Vec::new();
        let mut layer = self.leaves.clone();
        let mut depth = 0usize;
        while layer.len() > 1 {
            if layer.get(index) != Some(&current) {
                return Err(WhitelistError::MembershipNotFound {
                    digest: current,
                    layer: depth,
                });
            }

            let sibling_index = if index % 2 == 1 { index - 1 } else { index + 1 };
            // None only for the carried last element of an odd layer
            if let Some(sibling) = layer.get(sibling_index) {
                siblings.push(*sibling);
                current = parent_hash(&current, sibling);
            }

            layer = next_layer(&layer);
            index /= 2;
            depth += 1;
        }

        debug!(
            identifier = %identifier,
            siblings = siblings.len(),
            "derived whitelist proof"
        );
        Ok(WhitelistProof::new(siblings))
    }

    /// Check that `proof` folds `identifier`'s leaf up to this whitelist's
    /// root.
    ///
    /// A wrong or malformed proof returns `Ok(false)`. The only error is
    /// [`WhitelistError::EmptyTree`] from deriving the root.
    pub fn verify_proof(&self, proof: &[Digest], identifier: &Identifier) -> Result<bool> {
        let root = self.derive_merkle_root()?;
        Ok(compute_root(identifier.leaf(), proof) == root)
    }
}

impl TryFrom<Vec<Identifier>> for MerkleWhitelist {
    type Error = WhitelistError;

    fn try_from(identifiers: Vec<Identifier>) -> Result<Self> {
        Self::new(identifiers)
    }
}

impl From<MerkleWhitelist> for Vec<Identifier> {
    fn from(whitelist: MerkleWhitelist) -> Self {
        whitelist.identifiers
    }
}
