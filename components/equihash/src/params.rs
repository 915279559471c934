/// Equihash parameters `(n, k)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Params {
    pub(crate) n: u32,
    pub(crate) k: u32,
}

impl Params {
    /// The parameters used by the Zcash main and test networks.
    pub const ZCASH: Params = Params { n: 200, k: 9 };

    /// The parameters used by Zcash regtest nodes.
    pub const REGTEST: Params = Params { n: 48, k: 5 };

    /// Returns `None` if the parameters are invalid.
    pub fn new(n: u32, k: u32) -> Option<Self> {
        // We place the following requirements on the parameters:
        // - n is a multiple of 8, so the hash output has an exact byte length.
        // - k >= 3 so the encoded solutions have an exact byte length.
        // - k < n, so the collision bit length is at least 1.
        // - n is a multiple of k + 1, so we have an integer collision bit length.
        // - n <= 512, so at least one leaf fits in a single BLAKE2b output.
        // - 8 <= n / (k + 1) <= 24, so leaf hashes and solution indices can both be
        //   expanded through a 32-bit accumulator.
        if (n % 8 == 0) && (k >= 3) && (k < n) && (n % (k + 1) == 0) && n <= 512 {
            let p = Params { n, k };
            if (8..=24).contains(&p.collision_bit_length()) {
                return Some(p);
            }
        }
        None
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn k(&self) -> u32 {
        self.k
    }

    pub(crate) fn indices_per_hash_output(&self) -> u32 {
        512 / self.n
    }

    /// Length in bytes of each BLAKE2b output (50 for `(200, 9)`).
    pub fn hash_output(&self) -> u8 {
        (self.indices_per_hash_output() * self.n / 8) as u8
    }

    pub fn collision_bit_length(&self) -> usize {
        (self.n / (self.k + 1)) as usize
    }

    /// Number of leading bytes two siblings must share, and that each merge strips.
    pub fn collision_byte_length(&self) -> usize {
        (self.collision_bit_length() + 7) / 8
    }

    /// Length in bytes of an expanded leaf hash.
    pub fn hash_length(&self) -> usize {
        ((self.k as usize) + 1) * self.collision_byte_length()
    }

    /// Number of indices in a solution, `2^k`.
    pub fn solution_indices(&self) -> usize {
        1 << self.k
    }

    /// Length in bytes of a minimally-encoded solution (1344 for `(200, 9)`).
    pub fn solution_size(&self) -> usize {
        // Division is exact because k >= 3.
        (self.solution_indices() * (self.collision_bit_length() + 1)) / 8
    }

    /// The BLAKE2b personalization, `"ZcashPoW" || LE32(n) || LE32(k)`.
    pub(crate) fn personalization(&self) -> [u8; 16] {
        let mut personal = *b"ZcashPoW\0\0\0\0\0\0\0\0";
        personal[8..12].copy_from_slice(&self.n.to_le_bytes());
        personal[12..].copy_from_slice(&self.k.to_le_bytes());
        personal
    }
}
