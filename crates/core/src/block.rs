//! Block processing
//!
//! A 64-byte block is split into four 16-byte chunks and every chunk into
//! four 4-byte portions. Each portion drives [`ROUNDS`] rounds, each preceded
//! by byte mixing keyed on the round index.

use crate::params::{
    BLOCK_SIZE, CHUNK_SIZE, FACTOR_COUNT, Factors, PORTION_SIZE, ROUNDS, WORD_ONES,
};
use crate::primitives::{portion_average, portion_median, prime_8bit};
use crate::round::round;
use crate::version::Version;

/// XOR the portion bytes into the factors ahead of round `index`
#[inline(always)]
pub fn apply_bytes(factors: &mut Factors, portion: &Factors, index: u16, version: Version) {
    let avg = portion_average(portion);
    let med = portion_median(portion);
    let avg_odd = WORD_ONES * (avg % 2);
    let med_odd = WORD_ONES * (med % 2);

    let ng = ((portion[0] + index) % 4) as usize;
    let chu = ((portion[1] + index) % 4) as usize;
    let yo = ((portion[2] + index) % 4) as usize;
    let eo = ((portion[3] + index) % 4) as usize;

    factors[ng] ^= (portion[eo] | avg) ^ med_odd;
    factors[chu] ^= (portion[yo] & med) ^ avg_odd;
    factors[yo] ^= (portion[chu] ^ avg) ^ med_odd;
    factors[eo] ^= (portion[ng] | med) ^ avg_odd;

    if version.scrambles_bytes() {
        for (factor, &byte) in factors.iter_mut().zip(portion.iter()) {
            let prime = prime_8bit((byte + index) as u32);
            *factor ^= (*factor % prime) << index;
        }
    }
}

/// Feed one padded block into the factor state
///
/// `block` must be exactly [`BLOCK_SIZE`] bytes long.
pub fn process_block(factors: &mut Factors, block: &[u8], version: Version) {
    debug_assert_eq!(block.len(), BLOCK_SIZE);

    for chunk in block.chunks_exact(CHUNK_SIZE) {
        for bytes in chunk.chunks_exact(PORTION_SIZE) {
            let mut portion: Factors = [0; FACTOR_COUNT];
            for (word, &byte) in portion.iter_mut().zip(bytes.iter()) {
                *word = byte as u16;
            }

            for index in 0..ROUNDS as u16 {
                apply_bytes(factors, &portion, index, version);
                round(factors, version);
            }
        }
    }
}
