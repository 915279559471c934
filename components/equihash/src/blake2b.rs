//! A keyless, salt-less BLAKE2b with the block-caching behaviour Equihash leaf hashing
//! relies on.
//!
//! Compression of a buffered block is deferred until more input arrives, so a [`State`]
//! that has absorbed a constant prefix holds the chain value for every whole block of
//! that prefix that can never be the final block. Cloning such a state and absorbing a
//! short tail costs exactly one compression. For the 140-byte Equihash input of a Zcash
//! header followed by a 4-byte counter, that is one cached block plus one compression per
//! leaf digest.

use byteorder::{ByteOrder, LittleEndian};
use core::cmp;

pub const BLOCKBYTES: usize = 128;
pub const OUTBYTES: usize = 64;
pub const PERSONALBYTES: usize = 16;

const IV: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

const SIGMA: [[usize; 16]; 12] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
];

/// The initial chain value for a 50-byte output personalized with
/// `"ZcashPoW" || LE32(200) || LE32(9)`.
///
/// This is what [`initial_state`] derives for [`Params::ZCASH`], written out so that
/// mainnet verification never builds a parameter block.
///
/// [`Params::ZCASH`]: crate::Params::ZCASH
pub const ZCASH_POW_IV: [u64; 8] = [
    0x6a09e667f2bdc93a,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x48ec89c38820de31,
    0x5be0cd10137e21b1,
];

#[inline(always)]
fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

/// The BLAKE2b compression function `F`. `t` is the number of input bytes consumed up
/// to and including this block.
fn compress(h: &mut [u64; 8], block: &[u8; BLOCKBYTES], t: u128, last: bool) {
    let mut m = [0u64; 16];
    LittleEndian::read_u64_into(block, &mut m);

    let mut v = [0u64; 16];
    v[..8].copy_from_slice(h);
    v[8..].copy_from_slice(&IV);
    v[12] ^= t as u64;
    v[13] ^= (t >> 64) as u64;
    if last {
        v[14] = !v[14];
    }

    for s in SIGMA.iter() {
        g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
        g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
        g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
        g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);
        g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
        g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
        g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
        g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
    }

    for (i, hi) in h.iter_mut().enumerate() {
        *hi ^= v[i] ^ v[i + 8];
    }
}

/// Derives the initial chain value from a parameter block with the given digest length
/// and personalization, no key, no salt, and sequential mode.
pub fn initial_state(outlen: u8, personal: &[u8; PERSONALBYTES]) -> [u64; 8] {
    let mut h = IV;
    h[0] ^= 0x0101_0000 ^ u64::from(outlen);
    h[6] ^= LittleEndian::read_u64(&personal[..8]);
    h[7] ^= LittleEndian::read_u64(&personal[8..]);
    h
}

/// A BLAKE2b output of between 1 and 64 bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Digest {
    bytes: [u8; OUTBYTES],
    len: u8,
}

impl Digest {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }
}

impl core::fmt::Debug for Digest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Digest(")?;
        for b in self.as_bytes() {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

/// An incremental BLAKE2b hash state.
#[derive(Clone, Debug)]
pub struct State {
    h: [u64; 8],
    /// Bytes fed through the compression function so far.
    compressed: u128,
    buf: [u8; BLOCKBYTES],
    buflen: usize,
    outlen: u8,
}

impl State {
    /// Panics if `outlen` is not in `1..=64`.
    pub fn new(outlen: u8, personal: &[u8; PERSONALBYTES]) -> Self {
        Self::with_chain_value(initial_state(outlen, personal), outlen)
    }

    /// Starts from a precomputed initial chain value, such as [`ZCASH_POW_IV`].
    ///
    /// Panics if `outlen` is not in `1..=64`.
    pub fn with_chain_value(h: [u64; 8], outlen: u8) -> Self {
        assert!(
            (1..=OUTBYTES as u8).contains(&outlen),
            "BLAKE2b output length must be between 1 and 64 bytes"
        );
        State {
            h,
            compressed: 0,
            buf: [0; BLOCKBYTES],
            buflen: 0,
            outlen,
        }
    }

    pub fn update(&mut self, mut input: &[u8]) -> &mut Self {
        while !input.is_empty() {
            // A full buffer is only compressed once we know it is not the last block.
            if self.buflen == BLOCKBYTES {
                self.compressed += BLOCKBYTES as u128;
                compress(&mut self.h, &self.buf, self.compressed, false);
                self.buflen = 0;
            }
            let take = cmp::min(BLOCKBYTES - self.buflen, input.len());
            self.buf[self.buflen..self.buflen + take].copy_from_slice(&input[..take]);
            self.buflen += take;
            input = &input[take..];
        }
        self
    }

    pub fn finalize(&self) -> Digest {
        let mut h = self.h;
        let mut block = [0; BLOCKBYTES];
        block[..self.buflen].copy_from_slice(&self.buf[..self.buflen]);
        compress(&mut h, &block, self.compressed + self.buflen as u128, true);

        let mut bytes = [0; OUTBYTES];
        LittleEndian::write_u64_into(&h, &mut bytes);
        bytes[usize::from(self.outlen)..].fill(0);
        Digest {
            bytes,
            len: self.outlen,
        }
    }

    /// The number of input bytes already folded into the chain value.
    pub fn compressed_bytes(&self) -> u128 {
        self.compressed
    }

    pub fn outlen(&self) -> u8 {
        self.outlen
    }
}

/// One-shot BLAKE2b.
///
/// Panics if `outlen` is not in `1..=64`.
pub fn blake2b(input: &[u8], outlen: u8, personal: &[u8; PERSONALBYTES]) -> Digest {
    State::new(outlen, personal).update(input).finalize()
}
