//! A straightforward Wagner solver.
//!
//! Every round sorts the rows by their leading collision bytes and merges each pair
//! within a bucket. Memory grows with `2^(collision_bit_length + 1)` rows, so this is
//! only usable for small parameters such as [`Params::REGTEST`].

use alloc::vec::Vec;

use crate::{
    hasher::EquihashHasher,
    minimal::minimal_from_indices,
    params::Params,
    verify::{distinct_indices, Node},
};

/// Returns every solution for `(input, nonce)`, as indices in verification order.
pub fn solve(p: Params, input: &[u8], nonce: &[u8]) -> Vec<Vec<u32>> {
    let hasher = EquihashHasher::new(p, input, nonce);
    let trim = p.collision_byte_length();

    let mut rows: Vec<Node> = (0..1u32 << (p.collision_bit_length() + 1))
        .map(|i| hasher.leaf(i))
        .collect();

    for round in 0..p.k {
        // The last round has to collide on everything that is left.
        let key_len = if round + 1 == p.k { 2 * trim } else { trim };
        rows.sort_unstable_by(|a, b| a.hash()[..key_len].cmp(&b.hash()[..key_len]));

        let mut next = Vec::new();
        for bucket in rows.chunk_by(|a, b| a.hash()[..key_len] == b.hash()[..key_len]) {
            for (i, a) in bucket.iter().enumerate() {
                for b in &bucket[i + 1..] {
                    if distinct_indices(a, b) {
                        next.push(Node::from_children_ref(a, b, trim));
                    }
                }
            }
        }
        rows = next;
    }

    let mut solutions: Vec<Vec<u32>> = rows
        .into_iter()
        .filter(|row| row.is_zero(trim))
        .map(Node::into_indices)
        .collect();
    solutions.sort_unstable();
    solutions.dedup();
    solutions
}

/// Like [`solve`], returning minimally-encoded solutions.
pub fn solve_minimal(p: Params, input: &[u8], nonce: &[u8]) -> Vec<Vec<u8>> {
    solve(p, input, nonce)
        .iter()
        .map(|indices| minimal_from_indices(p, indices))
        .collect()
}
