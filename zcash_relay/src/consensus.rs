//! Consensus and relay parameters.

use serde::Deserialize;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Add;

#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockHeight(u32);

pub const H0: BlockHeight = BlockHeight(0);

impl BlockHeight {
    pub const fn from_u32(v: u32) -> BlockHeight {
        BlockHeight(v)
    }

    /// Returns `None` for the genesis height.
    pub fn prev(self) -> Option<BlockHeight> {
        self.0.checked_sub(1).map(BlockHeight)
    }

    pub fn saturating_sub(self, v: u32) -> BlockHeight {
        BlockHeight(self.0.saturating_sub(v))
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

impl From<u32> for BlockHeight {
    fn from(value: u32) -> Self {
        BlockHeight(value)
    }
}

impl From<BlockHeight> for u32 {
    fn from(value: BlockHeight) -> u32 {
        value.0
    }
}

impl From<BlockHeight> for u64 {
    fn from(value: BlockHeight) -> u64 {
        value.0 as u64
    }
}

impl Add<u32> for BlockHeight {
    type Output = Self;

    fn add(self, other: u32) -> Self {
        BlockHeight(self.0 + other)
    }
}

/// Parameters governing header verification and the relayed chain.
pub trait Parameters {
    /// The Equihash `(n, k)` that block solutions are checked against.
    fn equihash_params(&self) -> equihash::Params;

    /// Confirmations after which a block can no longer be reorganized away.
    fn finality_depth(&self) -> u32;

    fn min_block_version(&self) -> i32 {
        4
    }

    /// How far, in seconds, a header's time may be ahead of the verifier's clock.
    fn max_future_block_time(&self) -> u64 {
        2 * 60 * 60
    }

    /// Seconds a verification session stays usable after `start`.
    fn session_ttl(&self) -> u64 {
        60 * 60
    }

    /// Leaves hashed per batch step.
    fn leaf_batch_size(&self) -> u32 {
        64
    }

    fn batch_count(&self) -> u32 {
        let leaves = self.equihash_params().solution_indices() as u32;
        leaves.div_ceil(self.leaf_batch_size())
    }
}

/// Marker enum for the production networks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    MainNetwork,
    TestNetwork,
}

impl Parameters for Network {
    fn equihash_params(&self) -> equihash::Params {
        equihash::Params::ZCASH
    }

    fn finality_depth(&self) -> u32 {
        match self {
            Network::MainNetwork => 100,
            Network::TestNetwork => 100,
        }
    }
}

/// The largest number of batches a session can track.
pub const MAX_BATCHES: u32 = 64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParametersError {
    #[error("invalid Equihash parameters ({n}, {k})")]
    InvalidEquihash { n: u32, k: u32 },
    #[error("a leaf batch size of {batch_size} needs {batches} batches, more than the 64 a session tracks")]
    TooManyBatches { batch_size: u32, batches: u32 },
    #[error("the leaf batch size must be non-zero")]
    ZeroBatchSize,
}

/// Relay parameters for a regtest-style local network, typically read from a
/// configuration file.
///
/// ```
/// use zcash_relay::consensus::{LocalNetwork, Parameters};
///
/// let local: LocalNetwork = serde_json::from_str(
///     r#"{ "equihash_n": 48, "equihash_k": 5, "finality_depth": 10 }"#,
/// ).unwrap();
/// assert_eq!(local.batch_count(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "LocalNetworkConfig")]
pub struct LocalNetwork {
    equihash: equihash::Params,
    finality_depth: u32,
    leaf_batch_size: u32,
    session_ttl: u64,
    max_future_block_time: u64,
    min_block_version: i32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LocalNetworkConfig {
    equihash_n: u32,
    equihash_k: u32,
    finality_depth: u32,
    #[serde(default = "default_leaf_batch_size")]
    leaf_batch_size: u32,
    #[serde(default = "default_session_ttl")]
    session_ttl: u64,
    #[serde(default = "default_max_future_block_time")]
    max_future_block_time: u64,
    #[serde(default = "default_min_block_version")]
    min_block_version: i32,
}

fn default_leaf_batch_size() -> u32 {
    8
}

fn default_session_ttl() -> u64 {
    60 * 60
}

fn default_max_future_block_time() -> u64 {
    2 * 60 * 60
}

fn default_min_block_version() -> i32 {
    4
}

impl TryFrom<LocalNetworkConfig> for LocalNetwork {
    type Error = ParametersError;

    fn try_from(config: LocalNetworkConfig) -> Result<Self, Self::Error> {
        let (n, k) = (config.equihash_n, config.equihash_k);
        let equihash =
            equihash::Params::new(n, k).ok_or(ParametersError::InvalidEquihash { n, k })?;
        let local = LocalNetwork {
            equihash,
            finality_depth: config.finality_depth,
            leaf_batch_size: config.leaf_batch_size,
            session_ttl: config.session_ttl,
            max_future_block_time: config.max_future_block_time,
            min_block_version: config.min_block_version,
        };
        local.validate()
    }
}

impl LocalNetwork {
    /// Parameters matching a Zcash regtest node: `(48, 5)` Equihash, batches of 8 leaves.
    pub fn regtest(finality_depth: u32) -> Self {
        LocalNetwork {
            equihash: equihash::Params::REGTEST,
            finality_depth,
            leaf_batch_size: default_leaf_batch_size(),
            session_ttl: default_session_ttl(),
            max_future_block_time: default_max_future_block_time(),
            min_block_version: default_min_block_version(),
        }
    }

    pub fn with_leaf_batch_size(self, leaf_batch_size: u32) -> Result<Self, ParametersError> {
        LocalNetwork {
            leaf_batch_size,
            ..self
        }
        .validate()
    }

    fn validate(self) -> Result<Self, ParametersError> {
        if self.leaf_batch_size == 0 {
            return Err(ParametersError::ZeroBatchSize);
        }
        let batches = self.batch_count();
        if batches > MAX_BATCHES {
            return Err(ParametersError::TooManyBatches {
                batch_size: self.leaf_batch_size,
                batches,
            });
        }
        Ok(self)
    }
}

impl Parameters for LocalNetwork {
    fn equihash_params(&self) -> equihash::Params {
        self.equihash
    }

    fn finality_depth(&self) -> u32 {
        self.finality_depth
    }

    fn min_block_version(&self) -> i32 {
        self.min_block_version
    }

    fn max_future_block_time(&self) -> u64 {
        self.max_future_block_time
    }

    fn session_ttl(&self) -> u64 {
        self.session_ttl
    }

    fn leaf_batch_size(&self) -> u32 {
        self.leaf_batch_size
    }
}
