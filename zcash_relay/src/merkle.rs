//! Transaction inclusion proofs against relayed block headers.
//!
//! Zcash blocks commit to their transactions with Bitcoin's Merkle tree: nodes are the
//! double SHA-256 of their two children, and a level with an odd number of nodes pairs
//! its last node with itself.

use crate::{block::BlockHash, error::Error, store::ChainStore};

fn parent(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut preimage = [0; 64];
    preimage[..32].copy_from_slice(left);
    preimage[32..].copy_from_slice(right);
    BlockHash::sha256d(&preimage).0
}

fn next_level(level: &[[u8; 32]]) -> Vec<[u8; 32]> {
    level
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => parent(left, right),
            [last] => parent(last, last),
            _ => unreachable!("chunks(2) yields one or two nodes"),
        })
        .collect()
}

/// Computes the Merkle root of a block's transaction ids, or `None` for an empty block.
pub fn merkle_root(txids: &[[u8; 32]]) -> Option<[u8; 32]> {
    let mut level = txids.to_vec();
    while level.len() > 1 {
        level = next_level(&level);
    }
    level.first().copied()
}

/// Returns the sibling hashes on the path from `txids[index]` to the root, leaf side
/// first.
pub fn merkle_branch(txids: &[[u8; 32]], mut index: usize) -> Option<Vec<[u8; 32]>> {
    if index >= txids.len() {
        return None;
    }

    let mut branch = vec![];
    let mut level = txids.to_vec();
    while level.len() > 1 {
        let sibling = index ^ 1;
        branch.push(*level.get(sibling).unwrap_or(&level[index]));
        level = next_level(&level);
        index >>= 1;
    }
    Some(branch)
}

/// Folds a Merkle branch into the root it commits to.
///
/// The low bit of `index` at each level says whether the running hash is a right child.
pub fn root_from_branch(txid: &[u8; 32], branch: &[[u8; 32]], index: u32) -> [u8; 32] {
    branch
        .iter()
        .enumerate()
        .fold(*txid, |node, (level, sibling)| {
            if (index >> level) & 1 == 0 {
                parent(&node, sibling)
            } else {
                parent(sibling, &node)
            }
        })
}

/// Checks that `txid` is included in a registered block.
pub fn verify_transaction_in_block<S: ChainStore>(
    store: &S,
    block_hash: &BlockHash,
    txid: &[u8; 32],
    branch: &[[u8; 32]],
    index: u32,
) -> Result<(), Error<S::Error>> {
    let status = store
        .block_status(block_hash)
        .map_err(Error::Storage)?
        .ok_or(Error::BlockNotFound(*block_hash))?;

    if branch.len() >= 32 || index >> branch.len() != 0 {
        return Err(Error::InvalidMerkleProof);
    }
    if root_from_branch(txid, branch, index) == status.merkle_root {
        Ok(())
    } else {
        Err(Error::InvalidMerkleProof)
    }
}
