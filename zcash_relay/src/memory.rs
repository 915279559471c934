//! An in-memory store, used by tests and by relays that rebuild their state on startup.

use std::collections::BTreeMap;
use std::convert::Infallible;

use crate::{
    block::BlockHash,
    chain::BlockStatus,
    consensus::BlockHeight,
    session::{SessionId, VerificationSession},
    store::{ChainStore, SessionStore},
};

/// The main in-memory relay database. Implements all the traits needed to be used as a
/// backend.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    blocks: BTreeMap<BlockHash, BlockStatus>,
    canonical: BTreeMap<BlockHeight, BlockHash>,
    tip: Option<(BlockHeight, BlockHash)>,
    finalized_height: Option<BlockHeight>,
    sessions: BTreeMap<SessionId, VerificationSession>,
    leaves: BTreeMap<(SessionId, u32), Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of leaf hashes held across every session.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

impl ChainStore for MemoryStore {
    type Error = Infallible;

    fn block_status(&self, hash: &BlockHash) -> Result<Option<BlockStatus>, Self::Error> {
        Ok(self.blocks.get(hash).cloned())
    }

    fn put_block_status(
        &mut self,
        hash: BlockHash,
        status: BlockStatus,
    ) -> Result<(), Self::Error> {
        self.blocks.insert(hash, status);
        Ok(())
    }

    fn canonical_hash(&self, height: BlockHeight) -> Result<Option<BlockHash>, Self::Error> {
        Ok(self.canonical.get(&height).copied())
    }

    fn set_canonical_hash(
        &mut self,
        height: BlockHeight,
        hash: BlockHash,
    ) -> Result<(), Self::Error> {
        self.canonical.insert(height, hash);
        Ok(())
    }

    fn clear_canonical_hash(&mut self, height: BlockHeight) -> Result<(), Self::Error> {
        self.canonical.remove(&height);
        Ok(())
    }

    fn tip(&self) -> Result<Option<(BlockHeight, BlockHash)>, Self::Error> {
        Ok(self.tip)
    }

    fn set_tip(&mut self, height: BlockHeight, hash: BlockHash) -> Result<(), Self::Error> {
        self.tip = Some((height, hash));
        Ok(())
    }

    fn finalized_height(&self) -> Result<Option<BlockHeight>, Self::Error> {
        Ok(self.finalized_height)
    }

    fn set_finalized_height(&mut self, height: BlockHeight) -> Result<(), Self::Error> {
        self.finalized_height = Some(height);
        Ok(())
    }
}

impl SessionStore for MemoryStore {
    fn session(&self, id: &SessionId) -> Result<Option<VerificationSession>, Self::Error> {
        Ok(self.sessions.get(id).cloned())
    }

    fn put_session(&mut self, session: VerificationSession) -> Result<(), Self::Error> {
        self.sessions.insert(session.id(), session);
        Ok(())
    }

    fn remove_session(&mut self, id: &SessionId) -> Result<(), Self::Error> {
        self.sessions.remove(id);
        self.remove_leaves(id)
    }

    fn remove_leaves(&mut self, id: &SessionId) -> Result<(), Self::Error> {
        self.leaves.retain(|(session, _), _| session != id);
        Ok(())
    }

    fn leaf(&self, id: &SessionId, position: u32) -> Result<Option<Vec<u8>>, Self::Error> {
        Ok(self.leaves.get(&(*id, position)).cloned())
    }

    fn put_leaf(
        &mut self,
        id: SessionId,
        position: u32,
        hash: Vec<u8>,
    ) -> Result<(), Self::Error> {
        self.leaves.insert((id, position), hash);
        Ok(())
    }
}
