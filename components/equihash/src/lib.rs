//! Equihash is a Proof-of-Work algorithm, based on a generalization of the Birthday
//! problem which finds colliding hash values. It was designed to be memory-hard; more
//! specifically, the bottle-neck for parallel implementations of Equihash solvers would
//! be memory bandwidth.
//!
//! This crate implements Equihash as specified for the Zcash consensus rules. It can
//! verify solutions for any valid `(n, k)` parameters, as long as the row indices are no
//! larger than 32 bits (that is, `ceiling(((n / (k + 1)) + 1) / 8) <= 4`).
//!
//! Besides the one-shot [`is_valid_solution`], the pieces of verification are exposed so
//! that it can be split into steps: [`EquihashHasher`] computes leaf hashes from a
//! BLAKE2b state primed once per header, and [`build_tree`] folds leaves into the root
//! of the collision tree.
//!
#![cfg_attr(feature = "std", doc = "## Feature flags")]
#![cfg_attr(feature = "std", doc = document_features::document_features!())]
//!
//! References
//! ==========
//! - [Section 7.6.1: Equihash.] Zcash Protocol Specification, version 2020.1.10 or later.
//! - Alex Biryukov and Dmitry Khovratovich.
//!   [*Equihash: Asymmetric Proof-of-Work Based on the Generalized Birthday Problem.*][BK16]
//!   NDSS ’16.
//!
//! [Section 7.6.1: Equihash.]: https://zips.z.cash/protocol/protocol.pdf#equihash
//! [BK16]: https://www.internetsociety.org/sites/default/files/blogs-media/equihash-asymmetric-proof-of-work-based-generalized-birthday-problem.pdf

// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, doc(auto_cfg))]

#[cfg(any(feature = "std", test))]
extern crate std;

#[macro_use]
extern crate alloc;

pub mod blake2b;
mod hasher;
mod minimal;
mod params;
mod verify;

#[cfg(feature = "solver")]
pub mod solver;


pub use hasher::EquihashHasher;
pub use minimal::minimal_from_indices;
pub use params::Params;
pub use verify::{
    build_tree, distinct_indices, has_collision, is_valid_solution, merge, Error, Kind, Node,
};

/// Decodes the indices of a minimally-encoded solution for the parameters `p`.
pub fn indices_from_minimal(p: Params, minimal: &[u8]) -> Result<alloc::vec::Vec<u32>, Error> {
    minimal::indices_from_minimal(p, minimal).map_err(Error::from)
}
