//! Incremental verification of block headers.
//!
//! Checking an Equihash `(200, 9)` solution in one go means hashing 512 leaves and
//! merging them through a nine-level tree, which does not fit in the per-call budget of
//! the environments a relay runs in. A [`Relay`] splits that work into steps that each
//! do a bounded amount of hashing:
//!
//! 1. [`Relay::start`] checks the header's shape and its proof-of-work target, decodes
//!    the solution indices and opens a [`VerificationSession`].
//! 2. [`Relay::verify_leaves_batch`] computes and stores the leaf hashes of one batch of
//!    indices. Batches may arrive in any order, but each only once.
//! 3. [`Relay::verify_tree`] folds the stored leaves into the root of the solution tree,
//!    checking every collision, ordering and distinctness constraint along the way.
//! 4. [`Relay::finalize`] checks the root and the target once more and registers the
//!    block with the chain.
//!
//! Every step is gated on the caller that started the session and on the session's
//! deadline. Session state lives in the [`SessionStore`] between steps.

use std::cmp;

use equihash::{EquihashHasher, Node};
use tracing::{debug, info, warn};

use crate::{
    block::{BlockHash, BlockHeader, NONCE_OFFSET},
    chain::{self, ChainUpdate, VerifiedBlock},
    consensus::{BlockHeight, Parameters, ParametersError, MAX_BATCHES},
    difficulty::{meets_target, work_from_target, CompactDifficulty, DifficultyError},
    error::Error,
    session::{
        BatchBitmap, Failure, HeaderCommitment, Identity, SessionId, SessionState,
        VerificationSession,
    },
    store::SessionStore,
};

/// Notifications of changes to the relayed chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    BlockRegistered {
        hash: BlockHash,
        parent: BlockHash,
        work: primitive_types::U256,
        time: u32,
    },
    CanonicalTipAdvanced {
        hash: BlockHash,
        height: BlockHeight,
    },
    Reorganized {
        fork_height: BlockHeight,
        old_tip: BlockHash,
        new_tip: BlockHash,
    },
}

/// The outcome of a leaf batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchProgress {
    pub batch: u32,
    /// Batches verified so far, including this one.
    pub completed: u32,
    pub batch_count: u32,
}

impl BatchProgress {
    pub fn is_complete(&self) -> bool {
        self.completed == self.batch_count
    }
}

/// A block that passed verification and was registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Finalized {
    pub hash: BlockHash,
    pub height: BlockHeight,
    /// Whether the block is the canonical tip after registration.
    pub canonical: bool,
}

/// A header relay over a storage backend.
#[derive(Debug)]
pub struct Relay<P, S> {
    params: P,
    store: S,
    events: Vec<Event>,
}

impl<P: Parameters, S: SessionStore> Relay<P, S> {
    /// Constructs a relay, checking that a session can track every leaf batch.
    pub fn new(params: P, store: S) -> Result<Self, ParametersError> {
        let batch_size = params.leaf_batch_size();
        if batch_size == 0 {
            return Err(ParametersError::ZeroBatchSize);
        }
        let batches = params.batch_count();
        if batches > MAX_BATCHES {
            return Err(ParametersError::TooManyBatches {
                batch_size,
                batches,
            });
        }

        Ok(Relay {
            params,
            store,
            events: vec![],
        })
    }

    pub fn params(&self) -> &P {
        &self.params
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Returns the events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn session(
        &self,
        id: &SessionId,
    ) -> Result<Option<VerificationSession>, Error<S::Error>> {
        self.store.session(id).map_err(Error::Storage)
    }

    /// Opens a verification session for `header`, returning its id.
    ///
    /// Starting a header that already has a session restarts it from scratch if `caller`
    /// started it, or if it has expired or failed. A live session belonging to another
    /// caller is left alone.
    #[tracing::instrument(skip(self, header), fields(hash = %header.hash()))]
    pub fn start(
        &mut self,
        header: &BlockHeader,
        caller: Identity,
        now: u64,
    ) -> Result<SessionId, Error<S::Error>> {
        let equihash = self.params.equihash_params();

        if header.version < self.params.min_block_version() {
            return Err(Error::InvalidVersion(header.version));
        }
        if header.solution.len() != equihash.solution_size() {
            return Err(Error::InvalidSolutionSize {
                expected: equihash.solution_size(),
                actual: header.solution.len(),
            });
        }
        if header.bits == 0 {
            return Err(Error::InvalidDifficultyTarget(DifficultyError::Zero));
        }
        if u64::from(header.time) > now.saturating_add(self.params.max_future_block_time()) {
            return Err(Error::InvalidTimestamp {
                time: header.time,
                now,
            });
        }

        let hash = header.hash();
        if self
            .store
            .block_status(&hash)
            .map_err(Error::Storage)?
            .is_some()
        {
            return Err(Error::BlockAlreadyRegistered(hash));
        }
        if self.store.tip().map_err(Error::Storage)?.is_some()
            && self
                .store
                .block_status(&header.prev_block)
                .map_err(Error::Storage)?
                .is_none()
        {
            return Err(Error::BlockNotFound(header.prev_block));
        }

        let target = CompactDifficulty(header.bits).to_target()?;
        if !meets_target(&hash, &target) {
            return Err(Error::InvalidProofOfWork);
        }

        let indices = equihash::indices_from_minimal(equihash, &header.solution)
            .map_err(Error::SolutionDecodeFailure)?;

        let id = SessionId::from_block_hash(&hash);
        if let Some(existing) = self.store.session(&id).map_err(Error::Storage)? {
            if existing.initiator != caller && !existing.is_expired(now) && !existing.is_failed()
            {
                return Err(Error::SessionActive(id));
            }
            debug!(%id, "Replacing existing session");
            self.store.remove_session(&id).map_err(Error::Storage)?;
        }

        let input = header.equihash_input();
        self.store
            .put_session(VerificationSession {
                id,
                block_hash: hash,
                parent: header.prev_block,
                header_commitment: HeaderCommitment::of(header),
                indices,
                initiator: caller,
                deadline: now.saturating_add(self.params.session_ttl()),
                target,
                time: header.time,
                merkle_root: header.merkle_root,
                hasher: EquihashHasher::new(
                    equihash,
                    &input[..NONCE_OFFSET],
                    &input[NONCE_OFFSET..],
                ),
                state: SessionState::Started,
            })
            .map_err(Error::Storage)?;

        debug!(%id, "Started verification session");
        Ok(id)
    }

    /// Loads a session that `caller` may advance at time `now`.
    fn active_session(
        &self,
        id: &SessionId,
        caller: Identity,
        now: u64,
    ) -> Result<VerificationSession, Error<S::Error>> {
        let session = self
            .store
            .session(id)
            .map_err(Error::Storage)?
            .ok_or(Error::SessionNotFound(*id))?;

        if session.initiator != caller {
            return Err(Error::Unauthorized(*id));
        }
        if session.is_expired(now) {
            return Err(Error::SessionExpired(*id));
        }
        if let SessionState::Failed(failure) = session.state {
            return Err(Error::SessionFailed(*id, failure));
        }
        Ok(session)
    }

    fn fail(
        &mut self,
        mut session: VerificationSession,
        failure: Failure,
    ) -> Result<(), Error<S::Error>> {
        warn!(id = %session.id, ?failure, "Verification failed");
        self.store.remove_leaves(&session.id).map_err(Error::Storage)?;
        session.state = SessionState::Failed(failure);
        self.store.put_session(session).map_err(Error::Storage)
    }

    /// Hashes and stores the leaves of one batch of solution indices.
    #[tracing::instrument(skip(self))]
    pub fn verify_leaves_batch(
        &mut self,
        id: SessionId,
        batch: u32,
        caller: Identity,
        now: u64,
    ) -> Result<BatchProgress, Error<S::Error>> {
        let mut session = self.active_session(&id, caller, now)?;

        let batch_count = self.params.batch_count();
        if batch >= batch_count {
            return Err(Error::InvalidBatchId { batch, batch_count });
        }
        let mut bitmap = match session.state {
            SessionState::Started => BatchBitmap::default(),
            SessionState::LeavesInProgress(bitmap) if !bitmap.is_set(batch) => bitmap,
            _ => return Err(Error::BatchAlreadyVerified(batch)),
        };

        let batch_size = self.params.leaf_batch_size() as usize;
        let start = batch as usize * batch_size;
        let end = cmp::min(start + batch_size, session.indices.len());
        let hashes = session.hasher.leaf_hashes(&session.indices[start..end]);
        for (position, hash) in (start as u32..).zip(hashes) {
            self.store
                .put_leaf(id, position, hash)
                .map_err(Error::Storage)?;
        }

        bitmap.set(batch);
        session.state = if bitmap.is_complete(batch_count) {
            SessionState::LeavesComplete
        } else {
            SessionState::LeavesInProgress(bitmap)
        };
        self.store.put_session(session).map_err(Error::Storage)?;

        let progress = BatchProgress {
            batch,
            completed: bitmap.count(),
            batch_count,
        };
        debug!(
            completed = progress.completed,
            batch_count, "Verified leaf batch"
        );
        Ok(progress)
    }

    /// Builds the solution tree from the stored leaves, keeping only its root.
    #[tracing::instrument(skip(self))]
    pub fn verify_tree(
        &mut self,
        id: SessionId,
        caller: Identity,
        now: u64,
    ) -> Result<(), Error<S::Error>> {
        let mut session = self.active_session(&id, caller, now)?;

        match session.state {
            SessionState::LeavesComplete => (),
            SessionState::TreeBuilt { .. } => return Err(Error::TreeAlreadyBuilt),
            ref state => {
                let done = state.completed_batches(self.params.batch_count()).count();
                return Err(Error::BatchesIncomplete {
                    remaining: self.params.batch_count() - done,
                });
            }
        }

        let leaves = session
            .indices
            .iter()
            .zip(0u32..)
            .map(|(&index, position)| {
                self.store
                    .leaf(&id, position)
                    .map_err(Error::Storage)?
                    .map(|hash| Node::leaf(hash, index))
                    .ok_or(Error::MissingLeaf(id, position))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match equihash::build_tree(&self.params.equihash_params(), &leaves) {
            Ok(root) => {
                session.state = SessionState::TreeBuilt {
                    root: root.hash().to_vec(),
                };
                self.store.put_session(session).map_err(Error::Storage)?;
                debug!("Built solution tree");
                Ok(())
            }
            Err(e) => match Failure::from_tree_error(e.kind()) {
                Some(failure) => {
                    self.fail(session, failure)?;
                    Err(Error::from_failure(failure))
                }
                // The leaf count always matches the parameters.
                None => Err(Error::SolutionDecodeFailure(e)),
            },
        }
    }

    /// Checks the solution tree's root and registers the block.
    ///
    /// `header` must be the header the session was started with.
    #[tracing::instrument(skip(self, header), fields(hash = %header.hash()))]
    pub fn finalize(
        &mut self,
        id: SessionId,
        header: &BlockHeader,
        caller: Identity,
        now: u64,
    ) -> Result<Finalized, Error<S::Error>> {
        let session = self.active_session(&id, caller, now)?;

        let root_is_zero = match &session.state {
            SessionState::TreeBuilt { root } => {
                let trim = self.params.equihash_params().collision_byte_length();
                root.get(..trim)
                    .is_some_and(|prefix| prefix.iter().all(|b| *b == 0))
            }
            _ => return Err(Error::TreeNotBuilt),
        };

        let hash = header.hash();
        if hash != session.block_hash
            || SessionId::from_block_hash(&hash) != id
            || HeaderCommitment::of(header) != session.header_commitment
        {
            return Err(Error::HeaderMismatch(id));
        }

        if !root_is_zero {
            self.fail(session, Failure::InvalidRootPrefix)?;
            return Err(Error::InvalidRootPrefix);
        }
        if !meets_target(&hash, &session.target) {
            self.fail(session, Failure::InvalidProofOfWork)?;
            return Err(Error::InvalidProofOfWork);
        }

        let work = work_from_target(&session.target);
        let update = chain::on_block_finalized(
            &self.params,
            &mut self.store,
            VerifiedBlock {
                hash,
                parent: session.parent,
                work,
                time: session.time,
                merkle_root: session.merkle_root,
                registration_time: now,
            },
        )?;
        self.store.remove_session(&id).map_err(Error::Storage)?;

        let height = update.height();
        info!(%height, canonical = update.is_canonical(), "Registered block");
        self.events.push(Event::BlockRegistered {
            hash,
            parent: session.parent,
            work,
            time: session.time,
        });
        if let ChainUpdate::Reorganized {
            fork_height,
            old_tip,
            ..
        } = update
        {
            self.events.push(Event::Reorganized {
                fork_height,
                old_tip,
                new_tip: hash,
            });
        }
        if update.is_canonical() {
            self.events
                .push(Event::CanonicalTipAdvanced { hash, height });
        }

        Ok(Finalized {
            hash,
            height,
            canonical: update.is_canonical(),
        })
    }
}
