use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::{
    blake2b::{Digest, State, ZCASH_POW_IV},
    minimal::expand_array,
    params::Params,
    verify::Node,
};

/// The Equihash leaf hash function for one `(input, nonce)` pair.
///
/// The personalized BLAKE2b state is primed with `input || nonce` once; each digest then
/// clones it and absorbs only `LE32(i / indices_per_hash_output)`. For a 140-byte Zcash
/// header input the first 128 bytes are compressed once here and never again.
#[derive(Clone, Debug)]
pub struct EquihashHasher {
    params: Params,
    state: State,
}

impl EquihashHasher {
    pub fn new(params: Params, input: &[u8], nonce: &[u8]) -> Self {
        let mut state = if params == Params::ZCASH {
            State::with_chain_value(ZCASH_POW_IV, params.hash_output())
        } else {
            State::new(params.hash_output(), &params.personalization())
        };
        state.update(input).update(nonce);
        EquihashHasher { params, state }
    }

    pub fn params(&self) -> Params {
        self.params
    }

    /// The primed state shared by every leaf digest.
    pub fn midstate(&self) -> &State {
        &self.state
    }

    /// The BLAKE2b output for the given counter; it covers `512 / n` consecutive leaves.
    pub fn digest(&self, counter: u32) -> Digest {
        let mut state = self.state.clone();
        state.update(&counter.to_le_bytes());
        state.finalize()
    }

    fn expand(&self, digest: &Digest, i: u32) -> Vec<u8> {
        let p = self.params;
        let start = ((i % p.indices_per_hash_output()) * p.n / 8) as usize;
        let end = start + (p.n as usize) / 8;
        expand_array(&digest.as_bytes()[start..end], p.collision_bit_length(), 0)
    }

    /// The expanded `hash_length`-byte hash of leaf `i`.
    pub fn leaf_hash(&self, i: u32) -> Vec<u8> {
        let digest = self.digest(i / self.params.indices_per_hash_output());
        self.expand(&digest, i)
    }

    pub fn leaf(&self, i: u32) -> Node {
        Node::leaf(self.leaf_hash(i), i)
    }

    /// Computes the expanded hashes for a batch of indices, evaluating BLAKE2b once per
    /// distinct counter.
    pub fn leaf_hashes(&self, indices: &[u32]) -> Vec<Vec<u8>> {
        let ipho = self.params.indices_per_hash_output();
        let mut digests = BTreeMap::new();
        indices
            .iter()
            .map(|&i| {
                let digest = digests
                    .entry(i / ipho)
                    .or_insert_with(|| self.digest(i / ipho));
                self.expand(digest, i)
            })
            .collect()
    }
}
