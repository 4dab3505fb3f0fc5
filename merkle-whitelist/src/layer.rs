//! Layer collapse: one level of the tree into the next.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use crate::{Digest, Result, WhitelistError, hash::parent_hash};

/// Collapse a layer into its parent layer.
///
/// Adjacent pairs `(layer[2k], layer[2k + 1])` become `parent_hash` at index
/// `k`. If the layer has odd length, its last digest is appended unchanged
/// after the parents. A layer of length 0 or 1 is returned as is.
pub fn next_layer(layer: &[Digest]) -> Vec<Digest> {
    if layer.len() <= 1 {
        return layer.to_vec();
    }

    #[cfg(feature = "parallel")]
    let mut parents: Vec<Digest> = layer
        .par_chunks_exact(2)
        .map(|pair| parent_hash(&pair[0], &pair[1]))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let mut parents: Vec<Digest> = layer
        .chunks_exact(2)
        .map(|pair| parent_hash(&pair[0], &pair[1]))
        .collect();

    if let [carry] = layer.chunks_exact(2).remainder() {
        parents.push(*carry);
    }
    parents
}

/// Collapse a sorted leaf layer all the way up and return the root.
///
/// A single leaf is its own root.
pub fn collapse_to_root(mut layer: Vec<Digest>) -> Result<Digest> {
    if layer.is_empty() {
        return Err(WhitelistError::EmptyTree);
    }
    let mut depth = 0usize;
    while layer.len() > 1 {
        layer = next_layer(&layer);
        depth += 1;
        trace!(depth, width = layer.len(), "collapsed layer");
    }
    Ok(layer[0])
}
