//! Verification sessions.

use std::fmt;

use equihash::EquihashHasher;
use primitive_types::U256;

use crate::block::{BlockHash, BlockHeaderData};

/// A session handle, derived from the block hash so that resubmitting a header reaches
/// the same session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub [u8; 28]);

impl SessionId {
    /// The first 28 bytes of the block hash, in internal byte order.
    pub fn from_block_hash(hash: &BlockHash) -> Self {
        let mut id = [0; 28];
        id.copy_from_slice(&hash.0[..28]);
        SessionId(id)
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionId").field(&hex::encode(self.0)).finish()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// The caller that drives a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Identity(pub [u8; 32]);

/// A BLAKE2b-256 commitment to a header's 140-byte Equihash input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderCommitment(pub [u8; 32]);

impl HeaderCommitment {
    const PERSONALIZATION: &'static [u8; 16] = b"ZcashRelay_HdCmt";

    pub fn of(header: &BlockHeaderData) -> Self {
        let hash = blake2b_simd::Params::new()
            .hash_length(32)
            .personal(Self::PERSONALIZATION)
            .hash(&header.equihash_input());
        let mut commitment = [0; 32];
        commitment.copy_from_slice(hash.as_bytes());
        HeaderCommitment(commitment)
    }
}

/// One bit per leaf batch, set once the batch's leaves are stored.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchBitmap(u64);

impl BatchBitmap {
    pub fn is_set(&self, batch: u32) -> bool {
        batch < 64 && self.0 & (1 << batch) != 0
    }

    pub(crate) fn set(&mut self, batch: u32) {
        self.0 |= 1 << batch;
    }

    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_complete(&self, batch_count: u32) -> bool {
        self.count() == batch_count
    }
}

impl fmt::Debug for BatchBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BatchBitmap({:#b})", self.0)
    }
}

/// Why a session was abandoned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    NoCollision,
    BadOrdering,
    DuplicateIndices,
    InvalidRootPrefix,
    InvalidProofOfWork,
}

impl Failure {
    pub(crate) fn from_tree_error(kind: &equihash::Kind) -> Option<Self> {
        match kind {
            equihash::Kind::Collision => Some(Failure::NoCollision),
            equihash::Kind::OutOfOrder => Some(Failure::BadOrdering),
            equihash::Kind::DuplicateIdxs => Some(Failure::DuplicateIndices),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Started,
    LeavesInProgress(BatchBitmap),
    LeavesComplete,
    /// Holds the root hash, which still has to be checked for its zero prefix.
    TreeBuilt {
        root: Vec<u8>,
    },
    Failed(Failure),
}

impl SessionState {
    /// The batches already verified, with every batch counted once the leaves are done.
    pub fn completed_batches(&self, batch_count: u32) -> BatchBitmap {
        match self {
            SessionState::Started | SessionState::Failed(_) => BatchBitmap::default(),
            SessionState::LeavesInProgress(bitmap) => *bitmap,
            SessionState::LeavesComplete | SessionState::TreeBuilt { .. } => {
                let mut bitmap = BatchBitmap::default();
                (0..batch_count).for_each(|batch| bitmap.set(batch));
                bitmap
            }
        }
    }
}

/// The persisted state of one attempt to verify a block header.
#[derive(Clone, Debug)]
pub struct VerificationSession {
    pub(crate) id: SessionId,
    pub(crate) block_hash: BlockHash,
    pub(crate) parent: BlockHash,
    pub(crate) header_commitment: HeaderCommitment,
    pub(crate) indices: Vec<u32>,
    pub(crate) initiator: Identity,
    pub(crate) deadline: u64,
    pub(crate) target: U256,
    pub(crate) time: u32,
    pub(crate) merkle_root: [u8; 32],
    /// The BLAKE2b state primed with the header prefix, shared by every leaf batch.
    pub(crate) hasher: EquihashHasher,
    pub(crate) state: SessionState,
}

impl VerificationSession {
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn block_hash(&self) -> BlockHash {
        self.block_hash
    }

    pub fn parent(&self) -> BlockHash {
        self.parent
    }

    pub fn header_commitment(&self) -> HeaderCommitment {
        self.header_commitment
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn initiator(&self) -> Identity {
        self.initiator
    }

    /// Unix time from which the session is expired.
    pub fn deadline(&self) -> u64 {
        self.deadline
    }

    pub fn target(&self) -> U256 {
        self.target
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.deadline
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, SessionState::Failed(_))
    }
}
