//! Consensus parameters (spec §3 "Consensus parameters") and the three
//! network presets the ancestor's `chainparams.cpp` hard-codes (spec §6,
//! "Chain parameters ... are consumed as an opaque configuration struct").

use primitive_types::U256;

/// Options recognized by the difficulty engine. Constructed directly for a
/// custom network, or via [`ConsensusParams::mainnet`],
/// [`ConsensusParams::testnet`], [`ConsensusParams::regtest`] for the three
/// presets this chain ships.
#[derive(Clone, Debug)]
pub struct ConsensusParams {
    /// 256-bit maximum allowed target; any higher value is clamped down.
    pub pow_limit: U256,
    /// Desired seconds between blocks.
    pub target_spacing: i64,
    /// Desired seconds per retargeting window.
    pub target_timespan: i64,
    /// If true, a stalled testnet permits `pow_limit` as a one-off target.
    pub allow_min_difficulty: bool,
    /// If true, difficulty never changes (regtest).
    pub no_retargeting: bool,
    /// The retargeting window, in blocks. Usually `target_timespan /
    /// target_spacing`, but the ancestor's regtest preset overrides it
    /// (144, not 180) — it is a parameter in its own right, not a derived
    /// constant.
    pub window: u32,
}

impl ConsensusParams {
    /// Mainnet: a 6-hour retargeting window spaced at 2 minutes per block,
    /// strict difficulty (no min-difficulty relaxation, always retargets).
    pub fn mainnet() -> Self {
        ConsensusParams {
            pow_limit: U256::from_big_endian(&MAINNET_POW_LIMIT),
            target_spacing: 120,
            target_timespan: 21600,
            allow_min_difficulty: false,
            no_retargeting: false,
            window: 180,
        }
    }

    /// Testnet: same timing as mainnet, but a stalled chain may mine at
    /// `pow_limit`.
    pub fn testnet() -> Self {
        ConsensusParams {
            pow_limit: U256::from_big_endian(&TESTNET_POW_LIMIT),
            target_spacing: 120,
            target_timespan: 21600,
            allow_min_difficulty: true,
            no_retargeting: false,
            window: 180,
        }
    }

    /// Regtest: difficulty never changes, and the retargeting window is
    /// shortened to 144 blocks (the ancestor's literal override).
    pub fn regtest() -> Self {
        ConsensusParams {
            pow_limit: U256::from_big_endian(&REGTEST_POW_LIMIT),
            target_spacing: 120,
            target_timespan: 21600,
            allow_min_difficulty: true,
            no_retargeting: true,
            window: 144,
        }
    }
}

const MAINNET_POW_LIMIT: [u8; 32] = [
    0x00, 0x0f, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const TESTNET_POW_LIMIT: [u8; 32] = [
    0x00, 0x0f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

const REGTEST_POW_LIMIT: [u8; 32] = [
    0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

/// Published genesis block metadata for each network, reproduced from the
/// ancestor for documentation and external cross-checking. The core does
/// not derive `hash` from `time`/`nonce`/`bits` itself — that requires the
/// block serialization and Merkle-root construction §1 places out of scope
/// — it only publishes the numbers the ancestor asserts.
pub mod genesis {
    /// A single network's genesis block metadata.
    pub struct Genesis {
        pub time: u32,
        pub nonce: u32,
        pub bits: u32,
        pub hash: &'static str,
    }

    pub const MAINNET: Genesis = Genesis {
        time: 1557171322,
        nonce: 618,
        bits: 0x1f0fffff,
        hash: "0000b277bd61e047d5f32fbb93839be8ef2b5927443665cfa32ba5033e431c67",
    };

    pub const TESTNET: Genesis = Genesis {
        time: 1557171323,
        nonce: 13672,
        bits: 0x1f0fffff,
        hash: "000d2b44ed3d75acbe0d5676d6653794bc0890f733657ad185e2ba34ddc0ecad",
    };

    pub const REGTEST: Genesis = Genesis {
        time: 1557171326,
        nonce: 1053,
        bits: 0x2000ffff,
        hash: "00cdd47e31f84f0c162fce696d892ac8656fd46fbd1810ba488d003586ad9dfd",
    };
}
