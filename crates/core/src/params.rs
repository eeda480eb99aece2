//! PoxHash Algorithm Parameters
//!
//! Every table here is immutable. Mutable state (factors and the per-round
//! working copy) lives on the stack of a single hashing call.

/// Padded messages are processed in blocks of this many bytes
pub const BLOCK_SIZE: usize = 64;

/// Each block is split into chunks of this many bytes
pub const CHUNK_SIZE: usize = 16;

/// Each chunk is split into portions of this many bytes
pub const PORTION_SIZE: usize = 4;

/// Number of 16-bit words in the factor state
pub const FACTOR_COUNT: usize = 4;

/// The four-word factor state, and the per-round working copy of it
pub type Factors = [u16; FACTOR_COUNT];

/// Rounds run per portion
pub const ROUNDS: usize = 8;

/// Round-engine invocations per block (4 chunks x 4 portions x 8 rounds)
pub const ROUNDS_PER_BLOCK: usize =
    (BLOCK_SIZE / CHUNK_SIZE) * (CHUNK_SIZE / PORTION_SIZE) * ROUNDS;

/// Size of the final digest in bytes
pub const DIGEST_SIZE: usize = FACTOR_COUNT * 2;

/// Starting value of the factor state
pub const INITIAL_FACTORS: [u16; FACTOR_COUNT] = [0x9f91, 0xdb3b, 0xc091, 0xac8b];

/// All 54 primes below 256
pub const PRIMES_8BIT: [u16; 54] = [
    0x02, 0x03, 0x05, 0x07, 0x0b, 0x0d, 0x11, 0x13, 0x17, 0x1d, 0x1f, 0x25, 0x29, 0x2b, 0x2f, 0x35,
    0x3b, 0x3d, 0x43, 0x47, 0x49, 0x4f, 0x53, 0x59, 0x61, 0x65, 0x67, 0x6b, 0x6d, 0x71, 0x7f, 0x83,
    0x89, 0x8b, 0x95, 0x97, 0x9d, 0xa3, 0xa7, 0xad, 0xb3, 0xb5, 0xbf, 0xc1, 0xc5, 0xc7, 0xd3, 0xdf,
    0xe3, 0xe5, 0xe9, 0xef, 0xf1, 0xfb,
];

/// Odd single-digit primes, used as shift amounts
pub const SINGLE_DIGIT_PRIMES: [u16; 3] = [3, 5, 7];

pub const MAGIC_PRIMES: [u16; 2] = [0x33, 0x65];

/// Round primes of the first algorithm version
pub const ROUND_PRIMES_V1: [u16; 32] = [
    0xe537, 0xbd71, 0x9ef9, 0xbbcf, 0xf8dd, 0xceb7, 0xbaa1, 0x8f9f, 0xb0ed, 0xfc4f, 0x9787, 0xf01f,
    0xe1d1, 0xbcb9, 0xd565, 0xc011, 0xc1e1, 0xb58d, 0xd4e1, 0x9ea1, 0xee49, 0x97cd, 0xdac9, 0xe257,
    0xa32b, 0xafbb, 0xa5e3, 0xfc43, 0xbf71, 0xe401, 0x8ebd, 0xd549,
];

/// Round primes of the current algorithm version
///
/// The first 32 entries are [`ROUND_PRIMES_V1`]. The remaining 58 are the
/// first primes at or above `0x8003 + i * 0x233`.
pub const ROUND_PRIMES: [u16; 90] = [
    0xe537, 0xbd71, 0x9ef9, 0xbbcf, 0xf8dd, 0xceb7, 0xbaa1, 0x8f9f, 0xb0ed, 0xfc4f, 0x9787, 0xf01f,
    0xe1d1, 0xbcb9, 0xd565, 0xc011, 0xc1e1, 0xb58d, 0xd4e1, 0x9ea1, 0xee49, 0x97cd, 0xdac9, 0xe257,
    0xa32b, 0xafbb, 0xa5e3, 0xfc43, 0xbf71, 0xe401, 0x8ebd, 0xd549, 0x8003, 0x823f, 0x8477, 0x86a5,
    0x88cf, 0x8b07, 0x8d37, 0x8f69, 0x919d, 0x93d7, 0x961f, 0x983b, 0x9a75, 0x9c9d, 0x9ef5, 0xa105,
    0xa349, 0xa56d, 0xa7ab, 0xa9d9, 0xac09, 0xae49, 0xb069, 0xb2a9, 0xb4dd, 0xb705, 0xb939, 0xbb69,
    0xbd9b, 0xbfcf, 0xc1ff, 0xc433, 0xc665, 0xc8a1, 0xcac9, 0xcd09, 0xcf37, 0xd169, 0xd397, 0xd5df,
    0xd7fb, 0xda3f, 0xdc61, 0xde97, 0xe0d5, 0xe2fd, 0xe53f, 0xe761, 0xe995, 0xebd5, 0xedfb, 0xf02f,
    0xf25f, 0xf499, 0xf6cb, 0xf8f9, 0xfb2d, 0xfd67,
];

/// Swap order of the end-of-round permutation: every 2-combination of 0..4
pub const SWAP_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Word range mask
pub const WORD_MASK: u32 = 0x0000_ffff;

/// Mask selecting the upper half of an overflowed 32-bit accumulator
pub const HIGH_HALF_MASK: u32 = 0xffff_0000;

/// Single-byte mask
pub const BYTE_MASK: u16 = 0x00ff;

/// Word value with every bit set
pub const WORD_ONES: u16 = 0xffff;
