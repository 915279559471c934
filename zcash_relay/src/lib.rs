//! *A relay for Zcash block headers.*
//!
//! `zcash_relay` verifies Zcash block headers in bounded steps, for environments that
//! cannot afford a full Equihash check in a single call, and tracks the chain the
//! verified headers form: cumulative work, fork choice, finality, and transaction
//! inclusion against registered blocks.
//!
//! The verification steps are driven through a [`relay::Relay`]; [`driver::drive`] runs
//! all of them for one header. State is persisted through the traits in [`store`], with
//! an in-memory implementation in [`memory`].
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
//!

#![cfg_attr(docsrs, feature(doc_cfg))]
// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]

pub mod block;
pub mod chain;
pub mod consensus;
pub mod difficulty;
pub mod driver;
pub mod error;
pub mod memory;
pub mod merkle;
pub mod relay;
pub mod session;
pub mod store;

#[cfg(any(test, feature = "test-dependencies"))]
pub mod testing;

pub use error::Error;
pub use relay::{Event, Finalized, Relay};
