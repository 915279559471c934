//! The relayed block registry and its canonical chain.
//!
//! Every verified header is registered with its individual and cumulative work. The
//! canonical chain follows the registered block with the most cumulative work, except
//! that a reorganization may never replace a block at or below the finalized height.

use primitive_types::U256;
use tracing::{debug, info, warn};

use crate::{
    block::BlockHash,
    consensus::{BlockHeight, Parameters, H0},
    error::Error,
    store::ChainStore,
};

/// The number of blocks, ending at the block itself, whose times make up its median
/// time past.
const MEDIAN_TIME_SPAN: usize = 11;

/// What the relay records for every verified block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockStatus {
    /// Unix time at which the block was finalized by the relay.
    pub registration_time: u64,
    pub parent: BlockHash,
    pub work: U256,
    pub cumulative_work: U256,
    /// The header's own timestamp.
    pub time: u32,
    pub merkle_root: [u8; 32],
    pub height: BlockHeight,
}

/// A block whose header has passed verification, about to be registered.
#[derive(Clone, Debug)]
pub struct VerifiedBlock {
    pub hash: BlockHash,
    pub parent: BlockHash,
    pub work: U256,
    pub time: u32,
    pub merkle_root: [u8; 32],
    pub registration_time: u64,
}

/// How registering a block changed the canonical chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChainUpdate {
    /// The block is the first one registered, at height 0.
    Genesis,
    /// The block extends the canonical tip.
    Extended { height: BlockHeight },
    /// The block is kept on a side chain with no more work than the canonical chain.
    SideChain { height: BlockHeight },
    /// The block has more work than the canonical tip, but switching to it would undo
    /// finalized blocks. It is kept on a side chain.
    ReorgRejected {
        height: BlockHeight,
        fork_height: BlockHeight,
    },
    /// The canonical chain now ends at the block, having abandoned the blocks above
    /// `fork_height`.
    Reorganized {
        height: BlockHeight,
        fork_height: BlockHeight,
        old_tip: BlockHash,
    },
}

impl ChainUpdate {
    pub fn height(&self) -> BlockHeight {
        match self {
            ChainUpdate::Genesis => H0,
            ChainUpdate::Extended { height }
            | ChainUpdate::SideChain { height }
            | ChainUpdate::ReorgRejected { height, .. }
            | ChainUpdate::Reorganized { height, .. } => *height,
        }
    }

    /// Whether the block is now the canonical tip.
    pub fn is_canonical(&self) -> bool {
        matches!(
            self,
            ChainUpdate::Genesis | ChainUpdate::Extended { .. } | ChainUpdate::Reorganized { .. }
        )
    }
}

/// Registers a verified block and applies fork choice.
///
/// The block's parent must already be registered unless the registry is empty, in which
/// case the block becomes the genesis block.
pub fn on_block_finalized<P: Parameters, S: ChainStore>(
    params: &P,
    store: &mut S,
    block: VerifiedBlock,
) -> Result<ChainUpdate, Error<S::Error>> {
    let tip = store.tip().map_err(Error::Storage)?;

    let (height, cumulative_work) = match tip {
        None => (H0, block.work),
        Some(_) => {
            let parent = store
                .block_status(&block.parent)
                .map_err(Error::Storage)?
                .ok_or(Error::BlockNotFound(block.parent))?;
            (
                parent.height + 1,
                parent.cumulative_work.saturating_add(block.work),
            )
        }
    };

    store
        .put_block_status(
            block.hash,
            BlockStatus {
                registration_time: block.registration_time,
                parent: block.parent,
                work: block.work,
                cumulative_work,
                time: block.time,
                merkle_root: block.merkle_root,
                height,
            },
        )
        .map_err(Error::Storage)?;

    let update = match tip {
        None => {
            store.set_canonical_hash(H0, block.hash).map_err(Error::Storage)?;
            store.set_tip(H0, block.hash).map_err(Error::Storage)?;
            ChainUpdate::Genesis
        }
        Some((_, tip_hash)) if tip_hash == block.parent => {
            store
                .set_canonical_hash(height, block.hash)
                .map_err(Error::Storage)?;
            store.set_tip(height, block.hash).map_err(Error::Storage)?;
            ChainUpdate::Extended { height }
        }
        Some((tip_height, tip_hash)) => {
            let tip_work = store
                .block_status(&tip_hash)
                .map_err(Error::Storage)?
                .ok_or(Error::BlockNotFound(tip_hash))?
                .cumulative_work;

            if cumulative_work <= tip_work {
                debug!(hash = %block.hash, %height, "Block registered on a side chain");
                ChainUpdate::SideChain { height }
            } else {
                match reorganize(store, block.hash, height, tip_height) {
                    Ok(fork_height) => {
                        info!(
                            %fork_height,
                            old_tip = %tip_hash,
                            new_tip = %block.hash,
                            "Reorganized the canonical chain"
                        );
                        ChainUpdate::Reorganized {
                            height,
                            fork_height,
                            old_tip: tip_hash,
                        }
                    }
                    Err(Error::FinalityViolation { fork_height, finalized }) => {
                        warn!(
                            hash = %block.hash,
                            %fork_height,
                            %finalized,
                            "Not reorganizing below the finalized height"
                        );
                        ChainUpdate::ReorgRejected {
                            height,
                            fork_height,
                        }
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    };

    if update.is_canonical() {
        advance_finality(params, store, height)?;
    }

    Ok(update)
}

/// Makes `hash` at `height` the canonical tip, returning the height of the last block
/// the old and new chains share. Nothing is written if the fork point is below the
/// finalized height.
fn reorganize<S: ChainStore>(
    store: &mut S,
    hash: BlockHash,
    height: BlockHeight,
    tip_height: BlockHeight,
) -> Result<BlockHeight, Error<S::Error>> {
    let mut branch = vec![(height, hash)];
    let (mut cursor_height, mut cursor) = (height, hash);
    let fork_height = loop {
        let parent = store
            .block_status(&cursor)
            .map_err(Error::Storage)?
            .ok_or(Error::BlockNotFound(cursor))?
            .parent;
        cursor_height = cursor_height.prev().ok_or(Error::BlockNotFound(parent))?;
        cursor = parent;

        if store
            .canonical_hash(cursor_height)
            .map_err(Error::Storage)?
            .as_ref()
            == Some(&cursor)
        {
            break cursor_height;
        }
        branch.push((cursor_height, cursor));
    };

    if let Some(finalized) = store.finalized_height().map_err(Error::Storage)? {
        if fork_height < finalized {
            return Err(Error::FinalityViolation {
                fork_height,
                finalized,
            });
        }
    }

    let mut stale = fork_height + 1;
    while stale <= tip_height {
        store.clear_canonical_hash(stale).map_err(Error::Storage)?;
        stale = stale + 1;
    }
    for (h, block) in branch.into_iter().rev() {
        store.set_canonical_hash(h, block).map_err(Error::Storage)?;
    }
    store.set_tip(height, hash).map_err(Error::Storage)?;

    Ok(fork_height)
}

fn advance_finality<P: Parameters, S: ChainStore>(
    params: &P,
    store: &mut S,
    tip_height: BlockHeight,
) -> Result<(), Error<S::Error>> {
    let depth = params.finality_depth();
    if u32::from(tip_height) < depth {
        return Ok(());
    }
    let horizon = tip_height.saturating_sub(depth);
    let current = store.finalized_height().map_err(Error::Storage)?;
    if current.map_or(true, |finalized| horizon > finalized) {
        debug!(height = %horizon, "Advancing the finalized height");
        store.set_finalized_height(horizon).map_err(Error::Storage)?;
    }
    Ok(())
}

/// Returns the total work of the chain ending at `hash`, if the block is registered.
pub fn cumulative_work<S: ChainStore>(
    store: &S,
    hash: &BlockHash,
) -> Result<Option<U256>, Error<S::Error>> {
    Ok(store
        .block_status(hash)
        .map_err(Error::Storage)?
        .map(|status| status.cumulative_work))
}

/// Returns the median header time of the block and up to ten of its ancestors.
pub fn median_time_past<S: ChainStore>(
    store: &S,
    hash: &BlockHash,
) -> Result<Option<u32>, Error<S::Error>> {
    let mut times = Vec::with_capacity(MEDIAN_TIME_SPAN);
    let mut cursor = store.block_status(hash).map_err(Error::Storage)?;
    while let Some(status) = cursor {
        times.push(status.time);
        if times.len() == MEDIAN_TIME_SPAN || status.height == H0 {
            break;
        }
        cursor = store.block_status(&status.parent).map_err(Error::Storage)?;
    }

    if times.is_empty() {
        return Ok(None);
    }
    times.sort_unstable();
    Ok(Some(times[times.len() / 2]))
}

/// Whether the block is on the canonical chain at or below the finalized height.
pub fn is_finalized<S: ChainStore>(store: &S, hash: &BlockHash) -> Result<bool, Error<S::Error>> {
    let status = match store.block_status(hash).map_err(Error::Storage)? {
        Some(status) => status,
        None => return Ok(false),
    };
    let finalized = match store.finalized_height().map_err(Error::Storage)? {
        Some(finalized) => finalized,
        None => return Ok(false),
    };
    Ok(status.height <= finalized
        && store
            .canonical_hash(status.height)
            .map_err(Error::Storage)?
            .as_ref()
            == Some(hash))
}
