//! Structs and methods for handling Zcash block headers.

use byteorder::{LittleEndian, ReadBytesExt};
use sha2::{Digest, Sha256};
use std::fmt;
use std::io::{self, Read, Write};
use std::ops::Deref;
use std::str::FromStr;

use zcash_encoding::CompactSize;

/// The length of the header prefix that Equihash solutions commit to: every field up to
/// and including the nonce.
pub const EQUIHASH_INPUT_SIZE: usize = 140;

/// The length of the header prefix before the nonce.
pub(crate) const NONCE_OFFSET: usize = 108;

/// No supported Equihash parameters have a solution anywhere near this long.
const MAX_SOLUTION_SIZE: u64 = 1 << 16;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockHash(pub [u8; 32]);

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The (byte-flipped) hex string is more useful than the raw bytes, because we can
        // look that up in RPC methods and block explorers.
        let block_hash_str = self.to_string();
        f.debug_tuple("BlockHash").field(&block_hash_str).finish()
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut data = self.0;
        data.reverse();
        formatter.write_str(&hex::encode(data))
    }
}

impl FromStr for BlockHash {
    type Err = hex::FromHexError;

    /// Parses the byte-reversed hex form used by RPC methods and block explorers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut hash = [0; 32];
        hex::decode_to_slice(s, &mut hash)?;
        hash.reverse();
        Ok(BlockHash(hash))
    }
}

impl BlockHash {
    /// Constructs a [`BlockHash`] from the given slice.
    ///
    /// # Panics
    ///
    /// This function will panic if the slice is not exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), 32);
        let mut hash = [0; 32];
        hash.copy_from_slice(bytes);
        BlockHash(hash)
    }

    /// Double SHA-256, the hash used for block and transaction identifiers.
    pub fn sha256d(data: &[u8]) -> Self {
        BlockHash::from_slice(&Sha256::digest(Sha256::digest(data)))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// A Zcash block header.
#[derive(Clone, Debug)]
pub struct BlockHeader {
    hash: BlockHash,
    data: BlockHeaderData,
}

impl Deref for BlockHeader {
    type Target = BlockHeaderData;

    fn deref(&self) -> &BlockHeaderData {
        &self.data
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockHeaderData {
    pub version: i32,
    pub prev_block: BlockHash,
    pub merkle_root: [u8; 32],
    pub block_commitments: [u8; 32],
    pub time: u32,
    pub bits: u32,
    pub nonce: [u8; 32],
    pub solution: Vec<u8>,
}

impl BlockHeaderData {
    pub fn freeze(self) -> io::Result<BlockHeader> {
        BlockHeader::from_data(self)
    }

    /// The 140-byte header prefix that the Equihash solution commits to.
    pub fn equihash_input(&self) -> [u8; EQUIHASH_INPUT_SIZE] {
        let mut input = [0; EQUIHASH_INPUT_SIZE];
        input[..4].copy_from_slice(&self.version.to_le_bytes());
        input[4..36].copy_from_slice(&self.prev_block.0);
        input[36..68].copy_from_slice(&self.merkle_root);
        input[68..100].copy_from_slice(&self.block_commitments);
        input[100..104].copy_from_slice(&self.time.to_le_bytes());
        input[104..NONCE_OFFSET].copy_from_slice(&self.bits.to_le_bytes());
        input[NONCE_OFFSET..].copy_from_slice(&self.nonce);
        input
    }
}

impl BlockHeader {
    fn from_data(data: BlockHeaderData) -> io::Result<Self> {
        let mut header = BlockHeader {
            hash: BlockHash([0; 32]),
            data,
        };
        let mut raw = vec![];
        header.write(&mut raw)?;
        header.hash = BlockHash::sha256d(&raw);
        Ok(header)
    }

    /// Returns the hash of this header.
    pub fn hash(&self) -> BlockHash {
        self.hash
    }

    pub fn into_data(self) -> BlockHeaderData {
        self.data
    }

    pub fn read<R: Read>(mut reader: R) -> io::Result<Self> {
        let version = reader.read_i32::<LittleEndian>()?;

        let mut prev_block = BlockHash([0; 32]);
        reader.read_exact(&mut prev_block.0)?;

        let mut merkle_root = [0; 32];
        reader.read_exact(&mut merkle_root)?;

        let mut block_commitments = [0; 32];
        reader.read_exact(&mut block_commitments)?;

        let time = reader.read_u32::<LittleEndian>()?;
        let bits = reader.read_u32::<LittleEndian>()?;

        let mut nonce = [0; 32];
        reader.read_exact(&mut nonce)?;

        let solution_len = match CompactSize::read(&mut reader)? {
            n if n <= MAX_SOLUTION_SIZE => n as usize,
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "solution too long",
                ))
            }
        };
        let mut solution = vec![0; solution_len];
        reader.read_exact(&mut solution)?;

        BlockHeaderData {
            version,
            prev_block,
            merkle_root,
            block_commitments,
            time,
            bits,
            nonce,
            solution,
        }
        .freeze()
    }

    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(&self.equihash_input())?;
        CompactSize::write(&mut writer, self.solution.len())?;
        writer.write_all(&self.solution)
    }

    /// Verifies the Equihash solution in one pass.
    pub fn is_valid_equihash(&self, params: equihash::Params) -> Result<(), equihash::Error> {
        let input = self.equihash_input();
        equihash::is_valid_solution(
            params.n(),
            params.k(),
            &input[..NONCE_OFFSET],
            &input[NONCE_OFFSET..],
            &self.solution,
        )
    }
}
