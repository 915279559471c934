//! Verification functions for the [Equihash] proof-of-work algorithm.
//!
//! [Equihash]: https://zips.z.cash/protocol/protocol.pdf#equihash

use alloc::vec::Vec;
use core::fmt;

use crate::{hasher::EquihashHasher, minimal::indices_from_minimal, params::Params};

/// A vertex of the collision tree: an expanded hash and the solution indices under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    hash: Vec<u8>,
    indices: Vec<u32>,
}

impl Node {
    /// A leaf holding the expanded hash for solution index `index`.
    pub fn leaf(hash: Vec<u8>, index: u32) -> Self {
        Node {
            hash,
            indices: vec![index],
        }
    }

    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<u32> {
        self.indices
    }

    /// XORs the children's hashes, dropping the first `trim` bytes, and concatenates
    /// their indices with the child holding the smaller first index on the left.
    pub(crate) fn from_children(a: Node, b: Node, trim: usize) -> Self {
        let hash: Vec<_> = a
            .hash
            .iter()
            .zip(b.hash.iter())
            .skip(trim)
            .map(|(a, b)| a ^ b)
            .collect();
        let indices = if a.indices_before(&b) {
            let mut indices = a.indices;
            indices.extend(b.indices.iter());
            indices
        } else {
            let mut indices = b.indices;
            indices.extend(a.indices.iter());
            indices
        };
        Node { hash, indices }
    }

    pub(crate) fn from_children_ref(a: &Node, b: &Node, trim: usize) -> Self {
        let hash: Vec<_> = a
            .hash
            .iter()
            .zip(b.hash.iter())
            .skip(trim)
            .map(|(a, b)| a ^ b)
            .collect();
        let mut indices = Vec::with_capacity(a.indices.len() + b.indices.len());
        if a.indices_before(b) {
            indices.extend(a.indices.iter());
            indices.extend(b.indices.iter());
        } else {
            indices.extend(b.indices.iter());
            indices.extend(a.indices.iter());
        }
        Node { hash, indices }
    }

    pub fn indices_before(&self, other: &Node) -> bool {
        // Indices are serialized in big-endian so that integer
        // comparison is equivalent to array comparison
        self.indices[0] < other.indices[0]
    }

    /// Whether the first `len` bytes of the hash are zero.
    pub fn is_zero(&self, len: usize) -> bool {
        self.hash.iter().take(len).all(|v| *v == 0)
    }
}

/// An Equihash solution failed to verify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error(pub(crate) Kind);

impl Error {
    pub fn kind(&self) -> &Kind {
        &self.0
    }
}

impl From<Kind> for Error {
    fn from(kind: Kind) -> Self {
        Error(kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid solution: {}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    InvalidParams,
    /// The packed solution did not survive a decode and re-encode.
    InvalidSolutionEncoding,
    Collision,
    OutOfOrder,
    DuplicateIdxs,
    NonZeroRootHash,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::InvalidParams => f.write_str("invalid parameters"),
            Kind::InvalidSolutionEncoding => f.write_str("solution encoding is not minimal"),
            Kind::Collision => f.write_str("invalid collision length between StepRows"),
            Kind::OutOfOrder => f.write_str("Index tree incorrectly ordered"),
            Kind::DuplicateIdxs => f.write_str("duplicate indices"),
            Kind::NonZeroRootHash => f.write_str("root hash of tree is non-zero"),
        }
    }
}

/// Whether the first `len` bytes of the two hashes are equal, that is, whether their
/// XOR has `len` leading zero bytes.
pub fn has_collision(a: &Node, b: &Node, len: usize) -> bool {
    a.hash
        .iter()
        .zip(b.hash.iter())
        .take(len)
        .all(|(a, b)| a == b)
}

/// Whether the two index sets are disjoint. Each side is assumed to be internally
/// distinct already.
pub fn distinct_indices(a: &Node, b: &Node) -> bool {
    let mut seen = a.indices.clone();
    seen.sort_unstable();
    b.indices.iter().all(|i| seen.binary_search(i).is_err())
}

fn validate_subtrees(p: &Params, a: &Node, b: &Node) -> Result<(), Kind> {
    if !has_collision(a, b, p.collision_byte_length()) {
        Err(Kind::Collision)
    } else if b.indices_before(a) {
        Err(Kind::OutOfOrder)
    } else if !distinct_indices(a, b) {
        Err(Kind::DuplicateIdxs)
    } else {
        Ok(())
    }
}

/// Merges a left and a right sibling, checking collision, ordering and distinctness in
/// that order.
pub fn merge(p: &Params, a: Node, b: Node) -> Result<Node, Kind> {
    validate_subtrees(p, &a, &b)?;
    Ok(Node::from_children(a, b, p.collision_byte_length()))
}

fn tree_validator(p: &Params, leaves: &[Node]) -> Result<Node, Kind> {
    if leaves.len() > 1 {
        let mid = leaves.len() / 2;
        let a = tree_validator(p, &leaves[..mid])?;
        let b = tree_validator(p, &leaves[mid..])?;
        merge(p, a, b)
    } else {
        Ok(leaves[0].clone())
    }
}

/// Folds `2^k` leaves into the root of the collision tree.
///
/// The tree only exists as the recursion over halves of `leaves`; at most one node per
/// level is alive at any time. The returned root still has to be checked with
/// [`Node::is_zero`].
pub fn build_tree(p: &Params, leaves: &[Node]) -> Result<Node, Error> {
    if leaves.len() != p.solution_indices() {
        return Err(Error(Kind::InvalidParams));
    }
    tree_validator(p, leaves).map_err(Error)
}

fn leaves(hasher: &EquihashHasher, indices: &[u32]) -> Vec<Node> {
    hasher
        .leaf_hashes(indices)
        .into_iter()
        .zip(indices.iter())
        .map(|(hash, &i)| Node::leaf(hash, i))
        .collect()
}

fn is_valid_solution_recursive(
    p: Params,
    input: &[u8],
    nonce: &[u8],
    indices: &[u32],
) -> Result<(), Error> {
    let hasher = EquihashHasher::new(p, input, nonce);
    let root = build_tree(&p, &leaves(&hasher, indices))?;

    // Hashes were trimmed, so only need to check remaining length
    if root.is_zero(p.collision_byte_length()) {
        Ok(())
    } else {
        Err(Error(Kind::NonZeroRootHash))
    }
}

#[cfg(test)]
fn is_valid_solution_iterative(
    p: Params,
    input: &[u8],
    nonce: &[u8],
    indices: &[u32],
) -> Result<(), Error> {
    let hasher = EquihashHasher::new(p, input, nonce);
    let mut rows = leaves(&hasher, indices);

    let mut hash_len = p.hash_length();
    while rows.len() > 1 {
        let mut cur_rows = Vec::new();
        for pair in rows.chunks(2) {
            let a = &pair[0];
            let b = &pair[1];
            validate_subtrees(&p, a, b).map_err(Error)?;
            cur_rows.push(Node::from_children_ref(a, b, p.collision_byte_length()));
        }
        rows = cur_rows;
        hash_len -= p.collision_byte_length();
    }

    assert!(rows.len() == 1);

    if rows[0].is_zero(hash_len) {
        Ok(())
    } else {
        Err(Error(Kind::NonZeroRootHash))
    }
}

/// Checks whether `soln` is a valid solution for `(input, nonce)` with the
/// parameters `(n, k)`.
pub fn is_valid_solution(
    n: u32,
    k: u32,
    input: &[u8],
    nonce: &[u8],
    soln: &[u8],
) -> Result<(), Error> {
    let p = Params::new(n, k).ok_or(Error(Kind::InvalidParams))?;
    let indices = indices_from_minimal(p, soln)?;

    // Recursive validation is faster
    is_valid_solution_recursive(p, input, nonce, &indices)
}
