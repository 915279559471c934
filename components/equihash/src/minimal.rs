use alloc::vec::Vec;
use core::mem::size_of;

use byteorder::{BigEndian, ByteOrder};

use crate::{params::Params, verify::Kind};

/// Splits `vin` into `bit_len`-bit big-endian chunks, writing each one right-aligned
/// into `(bit_len + 7) / 8 + byte_pad` output bytes.
pub(crate) fn expand_array(vin: &[u8], bit_len: usize, byte_pad: usize) -> Vec<u8> {
    assert!(bit_len >= 8);
    assert!(u32::BITS as usize >= 7 + bit_len);

    let out_width = (bit_len + 7) / 8 + byte_pad;
    let out_len = 8 * out_width * vin.len() / bit_len;

    // Shortcut for parameters where expansion is a no-op
    if out_len == vin.len() {
        return vin.to_vec();
    }

    let mut vout: Vec<u8> = vec![0; out_len];
    let bit_len_mask: u32 = (1 << bit_len) - 1;

    // The acc_bits least-significant bits of acc_value represent a bit sequence
    // in big-endian order.
    let mut acc_bits = 0;
    let mut acc_value: u32 = 0;

    let mut j = 0;
    for b in vin {
        acc_value = (acc_value << 8) | u32::from(*b);
        acc_bits += 8;

        // When we have bit_len or more bits in the accumulator, write the next
        // output element.
        if acc_bits >= bit_len {
            acc_bits -= bit_len;
            for x in byte_pad..out_width {
                vout[j + x] = ((
                    // Big-endian
                    acc_value >> (acc_bits + (8 * (out_width - x - 1)))
                ) & (
                    // Apply bit_len_mask across byte boundaries
                    (bit_len_mask >> (8 * (out_width - x - 1))) & 0xFF
                )) as u8;
            }
            j += out_width;
        }
    }

    vout
}

/// The inverse of [`expand_array`]: packs the low `bit_len` bits of each
/// `(bit_len + 7) / 8 + byte_pad`-byte element of `vin` into a contiguous bit stream.
pub(crate) fn compress_array(vin: &[u8], bit_len: usize, byte_pad: usize) -> Vec<u8> {
    assert!(bit_len >= 8);
    assert!(u32::BITS as usize >= 7 + bit_len);

    let in_width = (bit_len + 7) / 8 + byte_pad;
    let out_len = bit_len * vin.len() / (8 * in_width);

    if out_len == vin.len() {
        return vin.to_vec();
    }

    let mut vout: Vec<u8> = vec![0; out_len];
    let bit_len_mask: u32 = (1 << bit_len) - 1;

    let mut acc_bits = 0;
    let mut acc_value: u32 = 0;

    let mut j = 0;
    for out in vout.iter_mut() {
        // Refill the accumulator with the next element whenever fewer than 8 bits
        // remain in it.
        if acc_bits < 8 {
            acc_value <<= bit_len;
            for x in byte_pad..in_width {
                acc_value |= (u32::from(vin[j + x])
                    & ((bit_len_mask >> (8 * (in_width - x - 1))) & 0xFF))
                    << (8 * (in_width - x - 1));
            }
            j += in_width;
            acc_bits += bit_len;
        }

        acc_bits -= 8;
        *out = (acc_value >> acc_bits) as u8;
    }

    vout
}

fn index_byte_pad(p: Params) -> usize {
    let index_bytes = (p.collision_bit_length() + 1 + 7) / 8;
    assert!(index_bytes <= size_of::<u32>());
    size_of::<u32>() - index_bytes
}

/// Decodes the `2^k` packed `(collision_bit_length + 1)`-bit indices of a solution.
///
/// The decoded indices are re-packed and compared against `minimal`. For every valid
/// `(n, k)` the `2^k` chunks fill whole bytes with no spare bits, so any slice of the
/// right length survives the round trip and a wrong length is the only rejection.
pub(crate) fn indices_from_minimal(p: Params, minimal: &[u8]) -> Result<Vec<u32>, Kind> {
    if minimal.len() != p.solution_size() {
        return Err(Kind::InvalidParams);
    }

    let expanded = expand_array(minimal, p.collision_bit_length() + 1, index_byte_pad(p));

    // Big-endian so that lexicographic array comparison is equivalent to integer
    // comparison
    let mut ret = vec![0; expanded.len() / size_of::<u32>()];
    BigEndian::read_u32_into(&expanded, &mut ret);

    if minimal_from_indices(p, &ret) != minimal {
        return Err(Kind::InvalidSolutionEncoding);
    }

    Ok(ret)
}

/// Packs solution indices into the minimal encoding carried in block headers.
pub fn minimal_from_indices(p: Params, indices: &[u32]) -> Vec<u8> {
    let mut expanded = vec![0; indices.len() * size_of::<u32>()];
    BigEndian::write_u32_into(indices, &mut expanded);
    compress_array(&expanded, p.collision_bit_length() + 1, index_byte_pad(p))
}
