//! Types for relay error handling.

use thiserror::Error;

use crate::{
    block::BlockHash,
    consensus::BlockHeight,
    difficulty::DifficultyError,
    session::{Failure, SessionId},
};

/// Errors that can occur while verifying a header or querying the relayed chain.
///
/// `E` is the error type of the storage backend.
#[derive(Error, Debug)]
pub enum Error<E> {
    #[error("block version {0} is below the minimum")]
    InvalidVersion(i32),
    #[error("block time {time} is too far ahead of {now}")]
    InvalidTimestamp { time: u32, now: u64 },
    #[error("solution is {actual} bytes, expected {expected}")]
    InvalidSolutionSize { expected: usize, actual: usize },
    #[error("invalid difficulty target: {0}")]
    InvalidDifficultyTarget(DifficultyError),
    #[error("block {0} is already registered")]
    BlockAlreadyRegistered(BlockHash),
    #[error("block hash does not meet its difficulty target")]
    InvalidProofOfWork,
    #[error("solution could not be decoded: {0}")]
    SolutionDecodeFailure(equihash::Error),
    #[error("caller is not the initiator of session {0}")]
    Unauthorized(SessionId),
    #[error("session {0} has expired")]
    SessionExpired(SessionId),
    #[error("batch {batch} is out of range; the session has {batch_count} batches")]
    InvalidBatchId { batch: u32, batch_count: u32 },
    #[error("batch {0} was already verified")]
    BatchAlreadyVerified(u32),
    #[error("{remaining} leaf batches have not been verified")]
    BatchesIncomplete { remaining: u32 },
    #[error("solution tree has a pair of rows that do not collide")]
    NoCollision,
    #[error("solution tree has a pair of subtrees out of order")]
    BadOrdering,
    #[error("solution tree has duplicate indices")]
    DuplicateIndices,
    #[error("solution tree root does not have a zero prefix")]
    InvalidRootPrefix,
    #[error("transaction is not included in the block's Merkle tree")]
    InvalidMerkleProof,
    #[error("block {0} is not registered")]
    BlockNotFound(BlockHash),
    #[error("no session {0}")]
    SessionNotFound(SessionId),
    #[error("session {0} is being driven by another caller")]
    SessionActive(SessionId),
    #[error("session {0} failed: {1:?}")]
    SessionFailed(SessionId, Failure),
    #[error("leaf {1} of session {0} is missing from storage")]
    MissingLeaf(SessionId, u32),
    #[error("the solution tree has not been built")]
    TreeNotBuilt,
    #[error("the solution tree was already built")]
    TreeAlreadyBuilt,
    #[error("header does not match the one session {0} was started with")]
    HeaderMismatch(SessionId),
    #[error("reorganizing from height {fork_height} would undo finalized height {finalized}")]
    FinalityViolation {
        fork_height: BlockHeight,
        finalized: BlockHeight,
    },
    #[error("storage error: {0}")]
    Storage(E),
}

impl<E> Error<E> {
    /// The error a terminally-failed session reports for its failure.
    pub(crate) fn from_failure(failure: Failure) -> Self {
        match failure {
            Failure::NoCollision => Error::NoCollision,
            Failure::BadOrdering => Error::BadOrdering,
            Failure::DuplicateIndices => Error::DuplicateIndices,
            Failure::InvalidRootPrefix => Error::InvalidRootPrefix,
            Failure::InvalidProofOfWork => Error::InvalidProofOfWork,
        }
    }
}

impl<E> From<DifficultyError> for Error<E> {
    fn from(e: DifficultyError) -> Self {
        Error::InvalidDifficultyTarget(e)
    }
}
