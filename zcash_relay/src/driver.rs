//! Runs every verification step for a header in order.

use crate::{
    block::BlockHeader,
    consensus::Parameters,
    error::Error,
    relay::{Finalized, Relay},
    session::Identity,
    store::SessionStore,
};

/// A completed verification step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Start,
    Batch(u32),
    Tree,
    Finalize,
}

/// Verifies `header` from start to finish, calling `progress` after each step.
///
/// The first failing step ends the run, leaving its session in place; retrying is up
/// to the caller.
#[tracing::instrument(skip(relay, header, progress), fields(hash = %header.hash()))]
pub fn drive<P, S>(
    relay: &mut Relay<P, S>,
    header: &BlockHeader,
    caller: Identity,
    now: u64,
    mut progress: impl FnMut(Step),
) -> Result<Finalized, Error<S::Error>>
where
    P: Parameters,
    S: SessionStore,
{
    let id = relay.start(header, caller, now)?;
    progress(Step::Start);

    for batch in 0..relay.params().batch_count() {
        relay.verify_leaves_batch(id, batch, caller, now)?;
        progress(Step::Batch(batch));
    }

    relay.verify_tree(id, caller, now)?;
    progress(Step::Tree);

    let finalized = relay.finalize(id, header, caller, now)?;
    progress(Step::Finalize);
    Ok(finalized)
}
