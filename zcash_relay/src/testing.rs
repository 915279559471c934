//! Header fixtures and a small miner for exercising the relay.

use crate::{
    block::{BlockHash, BlockHeader, BlockHeaderData, NONCE_OFFSET},
    consensus::{LocalNetwork, Network},
    difficulty::{bits_to_target, meets_target},
    memory::MemoryStore,
    relay::Relay,
};

/// The compact target of a Zcash regtest node; 17 hashes' worth of work per block.
pub const REGTEST_BITS: u32 = 0x200f0f0f;

pub const REGTEST_GENESIS_HASH: &str =
    "0c3b6818b84dc30bda79f920eaec66a26198a86c153a7700fbc70b1052da6c8b";

pub const REGTEST_BLOCK_1_HASH: &str =
    "00cb290f45a959697bd11da3cb23baafad17197f19c2e7181eca1fbc19b0f94c";

const GENESIS_TIME: u32 = 1296688602;

/// Bitcoin's regtest proof-of-work limit; about half of all block hashes meet it.
pub const EASY_BITS: u32 = 0x207fffff;

pub const EQUIHASH_200_9_GENESIS_HASH: &str =
    "57999c4c0cd04443232a9e52c5ff31e794bb7107546cf658e766972d5238d526";

pub const EQUIHASH_200_9_BLOCK_1_HASH: &str =
    "12e0eb1ed04ab42efbba49cf5c3f52ed19813ad846c96507e662e4da6ae8d81e";

const EQUIHASH_200_9_GENESIS_SOLUTION: &str = "\
    004eec22ec285517bd4194da21ad92656927afb4d00145b8181e4f0218b480643ca5ee125595b071071e0fea\
    1f323ee11a5f24f341d04ba7360c8fbc160bcf814c3efdc8b7ef11c3e229cb4560a5db74f93c48ab0fb9666c\
    edd5aaf8d68935ce9eca4b4d7f363b6c2510d310cfd192b7c502102451222595e9f6adbdbf8d2b86dc02589f\
    39a16a77f2bf4369283276be756b9d4c66ef2276eaa1939b35d69cf1666cfa5369d7956400533819d8c15513\
    239394feb0c8b775d6541e893f0e29d48d218666932ecc921a357dc31c88ecd2123205a686639a0ac6730ee8\
    d1ae47eb2bd992328f04022b702b5c91edc8117e58a3a5f431baabac971dadd913f2d2c3de925fe6f9cc2216\
    212054e2c8ad1f7078265ebe7adf4cf67db617641198e00b6516146f485217672c7d17a41111f30d128c7298\
    8f9994f1cfd7ff39cbfc8f9a288dedea0f348473455a724e32f87d7400f89b55732be5557835329d01303482\
    6e35f43b382e26dc490523bccda2c96324ba7f3211e79f95185602990b2883aa1c69553b31b1c53dd93d188e\
    3f02900920bd7b540658837f69509d85950434d1730d24af0e6579f18a57accbdaed50e6c52134f69d3894ee\
    2c0fd8f89c4b99f9dfa847f5de657f59ca76d65ed6d521083dc41fda67fb526fa4b46a6db24f3bb85e45a521\
    aa33b5ef22bc834d56f44046c872da385a34cb0b06a72c08ff527b83210a03ad87dba8e589f95d9e5331b58b\
    b2d35ebc638e85c63d44eeb315fb70d3cfe033759f3e3b63bbb942bb436dc0da336ad8cb1e63af40111faf85\
    583bb2c2e265f803f0e2ce0b187de62f0f4bafde5d90d524b2ddc71917b913d3342a1bb8901f4516a436af93\
    13bed3b491dc3dd0f1363ebea1a91601ec7db0467920ebe4c3d5b0bb29261d4adfd2e428b5be2356aeeab1f6\
    74f6c77972182738bfde9e26008c0fb974228e4763a6210f249a9cc84c5eaf87fa15999e42e206bf9b407cd3\
    24f636bad0d421511ca703dda3f2e4181473740954363bed9f52f2a61bff6714a6c7057c0a07d32909e315f7\
    30e248f027d9319803686beec045b7fec5f436e5d7480c5292471bc05e0bae1c5d7b03feed8d12b1e24edd56\
    74d7eb3c7fb2163214055c9288d8bc3a541c73440c5345853fa468216c2622292f6d238d28a29099dae738f9\
    9d136bed02db2a53aee28cef2d47e3852aa1dc1d033889ee741973948dbd1bd7295dfb92ed59dbd2b15db11a\
    95d9130ffacdab27e8db5e9781df4f9457a2bfb09f72281ccc16b1ab167856be986603cae5216645b2d711a2\
    235445c3c522bb851cc413349e79c5a2150253e970346e02916b4d5810b56c27a8acf2a60e6e65b909743f7e\
    b6b54f6429b724cd2998344fe12673a7b5007245861fa6dd2458c3c9c1547f65c4800f7d53bf90900282f3ed\
    9104445c54c256e0e13b526dfd2c135b5316f0c48d039d28ad592051af43970962de2cdae1361d1c374e361c\
    598ff72e22d73eaefc0154f1f05416238cd360c755d58f5c8c26be4950ee2e296b7b70b11705beb626ec46c5\
    7a43c54924515cb9cdcb5e764a23115a0e4fe28ecbcff2b6b8a67d1ba2c4a47ad4d22f7912d575d81ad76942\
    64d7c24d8bded52d97de92709024726d2c0c4fcfda8b3b6565cd631ef01b997206ce22b88545098ece1084d5\
    7b598d6a3f905b109524a83f1780deb455c77f58d5f44bcdde84941f835d15e97792bb65634b631ba4c8eda7\
    24c2c5b2388e2768228e01cde3c75793d54748f57168f6e2a15a6e6106d37d1d031705d5582af4dfd7602cf9\
    c2c8f0a3062f52b42115528aa3557e45526258fc456ba8bce349146d89886bac3c657d17f1ffbcde288f89ff\
    fcb3a02e70ec28696d5e27710ae31ff13a8be2f2d85d9166";

const EQUIHASH_200_9_BLOCK_1_SOLUTION: &str = "\
    002ce1776304cee744970696b9f928ce22cb968b09317c83c3364fabe6c5be7c128be7925f1dc53cd3aa3a03\
    62ca1664766fffe7454001fe2a9e8f1ed69dde3c4426986e17428cf8edb4e583e320c1e3e8b4fa1b1eb5ad1e\
    b5a77693637893784ce43a2f0b45fb029d324aa6f5b526acb9f595538876b789129da079da3d2121d6540b99\
    c6451c2294324e38d8663edb98843c29df6c323619f571055e22c4bd243731f1b2b8f530009d2f435e094aaf\
    a99c60dc776e6e15498ff8568d05750e26ba1d8f97a2b82164082dc18073e75de28e27445fb46fd0a62ed7b2\
    c714947403ab28e29ae0df31340a19d9e128e7595cf32aa72b2cb97655da21eb0219afd2fac0eb20a99c109d\
    688d08004b828962ad132d3d6f6f1c70632d094155e71c5e16d846f6f4a70d2e7d559fc456de7fb264471ac4\
    bcd1ae8c1f0b111e926a5b813025f1a4a7a79e155e13df371f1ebe8e00477e35541db490f1adb07eb886e3f4\
    dcb27818b540befe9043fbc54be9a84d1978697a8f79823da7430b19e710c30c8e3ac05df6ec9f508085d6ff\
    923a18153d57b85090b8ff5fcd03715ca3c4456d893d36bf063997ce0d50348fe901f5262deda0b3269ff935\
    6b105c51a047049b59ccbea4a7bed1dde25d5e7b60c31f0e12d8f5a1ab557afbb945dd6370fa60f399597c30\
    d435c3facd0d51d4b6ed01ac74e0434bd4daee9a0846f9d3a3aa16057b6a278ddb40a75658fab93bc5353a53\
    98f368f66574cdf744c03a888b34d13f880d1d2c7dc322cf3d8f999ad472b7da1a4b1a83def00032d4bdaebd\
    288133b9529687185fe85e5a6a5a33300b5d0b55818405d6a617723f00a47df2afb33dbbfa0e6134919f5815\
    e6dbec076fcd4ca482fb757e1e5c232bd4d0e3d6ff8f3a4bc6e480c1207a3aa53d31d0332f1b04fa5d5f66ff\
    26e477e1d02225f8939ee5790132ff0d55cfdbfcc049878dab6122b9f4685893bd30c4e9ee15e62da1805795\
    5436be93697dbe9f8a9b0ee530db8ac54a5f8367f3f7bff0919d0bd81a55651969cdb5f39b68f70cb086fba8\
    73098e75c3daaa28032b51c1c0a712a75688a468526d80cd49e8fdf430316fb2e53a0ea2812327f34f4de2b5\
    5f9d9d1d74b20df42b9719e85409d07233152426a72d0c3f31ff66100b22a6fdd72257359b425031a0c009c9\
    1974237901a3c879a60c3479a52ed35ea1c156df8776fd50ce465aae38f75a1c17395c5472e9dedc0d7661da\
    c09c26979b443939f7abef8e35c2fef66b9e53d09c7c644e64a4722295009fbbf9d608cd7178d72289ff5f59\
    0768d463fd8d430da49a5115846e405e88bcdf90661b0a35720acb485260e411dd76b6c9387c82f4a36b07be\
    418c05c977ef2212c2ad5277d238f5463db1e30842c0de78b0a923cd7b83509130c04591151dc16002fbdc74\
    c6242287e20310e85d5b6bd0825ca7bb7f09d94a76a10621ad1fa3b25e5e5138ff176efd1ad714c1f6191890\
    522cecd01208fb4d814de95650595c37ea5b918361f16515cb83ecbffe2a328a47d6de3c10cfec47a84711e9\
    5e57546f8f7b7865f1825f1b4b193955c8924b6c28af38d38e1f7dab310f50f5726d19bede9cfd114c5566ba\
    c58a8444f5ea5da3dfdeb128a994d4ea53d61ad8f5a3c3dd442b5d3ebf1362700ae335528b4b1941f7b031ce\
    6f7944af23d55dbb46363d7af5e1919573ee5bebf16b710ad35ab6dbce001ebf343f8058d47958185640e26d\
    a079bfccb21f055345c3cf1f96659ded5a261717c6bdfac94f1e3f0a13b232b8ab1078bb7656c60fbe3c86fd\
    eb4bd1d8f151a6e6b042209f99085edb0b67f9ca77d59f3f742818da7104d795e1915a1d91fdd62ec53536e3\
    38000326865c4a404ca26fd9ead3d4195acf297787f4a400";

fn nonce(n: u64) -> [u8; 32] {
    let mut nonce = [0; 32];
    nonce[..8].copy_from_slice(&n.to_le_bytes());
    nonce
}

fn header(
    prev_block: BlockHash,
    merkle_root: [u8; 32],
    time: u32,
    bits: u32,
    n: u64,
    solution: &str,
) -> BlockHeader {
    BlockHeaderData {
        version: 4,
        prev_block,
        merkle_root,
        block_commitments: [0; 32],
        time,
        bits,
        nonce: nonce(n),
        solution: hex::decode(solution).unwrap(),
    }
    .freeze()
    .unwrap()
}

fn regtest_header(
    prev_block: BlockHash,
    merkle_root: [u8; 32],
    time: u32,
    n: u64,
    solution: &str,
) -> BlockHeader {
    header(prev_block, merkle_root, time, REGTEST_BITS, n, solution)
}

/// The first block of a `(48, 5)` regtest chain.
pub fn regtest_genesis() -> BlockHeader {
    regtest_header(
        BlockHash([0; 32]),
        [0x11; 32],
        GENESIS_TIME,
        116,
        "029a430cc035cfc1e709a254f7b86c92677821a00e4ee233ccdc8c247456715705ca1f16",
    )
}

/// The child of [`regtest_genesis`].
pub fn regtest_block_1() -> BlockHeader {
    regtest_header(
        regtest_genesis().hash(),
        [0x22; 32],
        GENESIS_TIME + 150,
        27,
        "0898353b621c26e9872d328e7b074d62fdf319361b94d634f5d8fe20cf1d57546b79775e",
    )
}

/// A child of [`regtest_genesis`] that meets its target and whose solution passes every
/// merge, but whose root hash is not zero.
pub fn regtest_block_with_nonzero_root() -> BlockHeader {
    regtest_header(
        regtest_genesis().hash(),
        [0x33; 32],
        GENESIS_TIME + 300,
        0,
        "0006f97d34857a6364214a1651975ff2cf9b156728b6c46e7f2fd92660229332f4d8f886",
    )
}

/// A root block with a `(200, 9)` solution, carrying the mainnet genesis merkle root and
/// timestamp at [`EASY_BITS`].
pub fn equihash_200_9_genesis() -> BlockHeader {
    let merkle_root: BlockHash = "c4eaa58879081de3c24a7b117ed2b28300e7ec4c4c1dff1d3f1268b7857a4cf8"
        .parse()
        .unwrap();
    header(
        BlockHash([0; 32]),
        merkle_root.0,
        1477641360,
        EASY_BITS,
        0,
        EQUIHASH_200_9_GENESIS_SOLUTION,
    )
}

/// The child of [`equihash_200_9_genesis`].
pub fn equihash_200_9_block_1() -> BlockHeader {
    header(
        equihash_200_9_genesis().hash(),
        [0x51; 32],
        1477671596,
        EASY_BITS,
        0,
        EQUIHASH_200_9_BLOCK_1_SOLUTION,
    )
}

/// A relay for a fresh chain under mainnet parameters.
pub fn mainnet_relay() -> Relay<Network, MemoryStore> {
    Relay::new(Network::MainNetwork, MemoryStore::new()).unwrap()
}

/// A relay for a fresh regtest chain.
pub fn regtest_relay(finality_depth: u32) -> Relay<LocalNetwork, MemoryStore> {
    Relay::new(LocalNetwork::regtest(finality_depth), MemoryStore::new()).unwrap()
}

/// Mines a regtest block on top of `parent`.
pub fn mine(parent: BlockHash, merkle_root: [u8; 32], time: u32) -> BlockHeader {
    mine_with(parent, merkle_root, time, |_| ())
}

/// Mines a regtest block whose solution indices are passed through `tamper` before they
/// are encoded. Only the block hash is checked against the target, so the result can
/// carry an invalid solution.
pub fn mine_with(
    parent: BlockHash,
    merkle_root: [u8; 32],
    time: u32,
    tamper: impl Fn(&mut Vec<u32>),
) -> BlockHeader {
    let params = equihash::Params::REGTEST;
    let target = bits_to_target(REGTEST_BITS).unwrap();

    (0u64..)
        .find_map(|n| {
            let mut data = BlockHeaderData {
                version: 4,
                prev_block: parent,
                merkle_root,
                block_commitments: [0; 32],
                time,
                bits: REGTEST_BITS,
                nonce: nonce(n),
                solution: vec![],
            };
            let input = data.equihash_input();
            equihash::solver::solve(params, &input[..NONCE_OFFSET], &input[NONCE_OFFSET..])
                .into_iter()
                .find_map(|mut indices| {
                    tamper(&mut indices);
                    data.solution = equihash::minimal_from_indices(params, &indices);
                    let header = data.clone().freeze().unwrap();
                    meets_target(&header.hash(), &target).then_some(header)
                })
        })
        .expect("some nonce yields a block")
}
