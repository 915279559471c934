//! Compact difficulty targets and block work.

use primitive_types::U256;
use thiserror::Error;

use crate::block::BlockHash;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyError {
    #[error("compact difficulty is zero")]
    Zero,
    #[error("compact difficulty {0:#010x} has a negative mantissa")]
    Negative(u32),
    #[error("compact difficulty {0:#010x} overflows 256 bits")]
    Overflow(u32),
}

/// The `nBits` header field: a 256-bit target packed as a base-256 float with an 8-bit
/// exponent and a signed 24-bit mantissa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CompactDifficulty(pub u32);

impl CompactDifficulty {
    const SIGN_BIT: u32 = 0x0080_0000;
    const MANTISSA_MASK: u32 = 0x007f_ffff;

    /// Decodes the target, rejecting a zero field, a negative mantissa and targets that
    /// overflow 256 bits. Exponents below 3 shift the mantissa right and may leave a zero
    /// target, which no block hash other than zero meets.
    pub fn to_target(self) -> Result<U256, DifficultyError> {
        let bits = self.0;
        if bits == 0 {
            return Err(DifficultyError::Zero);
        }

        let exponent = bits >> 24;
        let mantissa = bits & Self::MANTISSA_MASK;

        if mantissa != 0 && bits & Self::SIGN_BIT != 0 {
            return Err(DifficultyError::Negative(bits));
        }
        if mantissa != 0
            && (exponent > 34
                || (mantissa > 0xff && exponent > 33)
                || (mantissa > 0xffff && exponent > 32))
        {
            return Err(DifficultyError::Overflow(bits));
        }

        let target = if exponent <= 3 {
            U256::from(mantissa >> (8 * (3 - exponent)))
        } else {
            U256::from(mantissa) << (8 * (exponent - 3)) as usize
        };

        Ok(target)
    }
}

pub fn bits_to_target(bits: u32) -> Result<U256, DifficultyError> {
    CompactDifficulty(bits).to_target()
}

/// The expected number of hashes needed to find a block hash at or below `target`,
/// `2^256 / (target + 1)`, computed without leaving 256 bits. A zero target saturates.
pub fn work_from_target(target: &U256) -> U256 {
    match target.checked_add(U256::one()) {
        Some(divisor) => (!*target / divisor).saturating_add(U256::one()),
        None => U256::one(),
    }
}

/// Whether the block hash, read as a little-endian integer, is at most `target`.
pub fn meets_target(hash: &BlockHash, target: &U256) -> bool {
    U256::from_little_endian(&hash.0) <= *target
}
