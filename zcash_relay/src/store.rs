//! Interfaces to the persisted relay state.
//!
//! The relay never keeps chain or session state in memory between calls. Everything that
//! has to survive from one step to the next goes through these traits, so a backend can
//! be anything from the in-memory [`MemoryStore`] to a ledger's key-value storage.
//!
//! [`MemoryStore`]: crate::memory::MemoryStore

use crate::{
    block::BlockHash,
    chain::BlockStatus,
    consensus::BlockHeight,
    session::{SessionId, VerificationSession},
};

/// Read and write access to the block registry and the canonical chain.
pub trait ChainStore {
    /// The type of errors that may be generated when accessing the store.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Returns the status record of a registered block, or `Ok(None)` if the block has
    /// never been finalized.
    fn block_status(&self, hash: &BlockHash) -> Result<Option<BlockStatus>, Self::Error>;

    fn put_block_status(&mut self, hash: BlockHash, status: BlockStatus)
        -> Result<(), Self::Error>;

    /// Returns the hash of the canonical block at the given height, if any.
    fn canonical_hash(&self, height: BlockHeight) -> Result<Option<BlockHash>, Self::Error>;

    fn set_canonical_hash(&mut self, height: BlockHeight, hash: BlockHash)
        -> Result<(), Self::Error>;

    fn clear_canonical_hash(&mut self, height: BlockHeight) -> Result<(), Self::Error>;

    /// Returns the height and hash of the canonical chain tip.
    ///
    /// This will return `Ok(None)` until the first block has been finalized.
    fn tip(&self) -> Result<Option<(BlockHeight, BlockHash)>, Self::Error>;

    fn set_tip(&mut self, height: BlockHeight, hash: BlockHash) -> Result<(), Self::Error>;

    /// Returns the height at and below which the canonical chain can no longer change.
    fn finalized_height(&self) -> Result<Option<BlockHeight>, Self::Error>;

    fn set_finalized_height(&mut self, height: BlockHeight) -> Result<(), Self::Error>;
}

/// Storage for in-flight verification sessions and their leaf hashes.
pub trait SessionStore: ChainStore {
    fn session(&self, id: &SessionId) -> Result<Option<VerificationSession>, Self::Error>;

    fn put_session(&mut self, session: VerificationSession) -> Result<(), Self::Error>;

    /// Removes a session together with any leaf hashes stored for it.
    fn remove_session(&mut self, id: &SessionId) -> Result<(), Self::Error>;

    /// Drops every leaf hash stored for the session, keeping the session record.
    fn remove_leaves(&mut self, id: &SessionId) -> Result<(), Self::Error>;

    /// Returns the leaf hash stored at `position` of the session's solution.
    fn leaf(&self, id: &SessionId, position: u32) -> Result<Option<Vec<u8>>, Self::Error>;

    fn put_leaf(&mut self, id: SessionId, position: u32, hash: Vec<u8>)
        -> Result<(), Self::Error>;
}
