//! Fixed-width arithmetic helpers for PoxHash
//!
//! Intermediate sums are computed in a 32-bit register and folded back into
//! 16 bits with the overflow rules the digest depends on.

use crate::params::{FACTOR_COUNT, HIGH_HALF_MASK, PRIMES_8BIT, WORD_MASK};

/// Rotate `value` left by `by` bits inside a 16-bit register
///
/// `by` must be at most 16. When the widened result spills past 16 bits the
/// upper half is kept, not the lower one.
#[inline(always)]
pub fn rotate_left16(value: u16, by: u32) -> u16 {
    let wide = value as u32;
    let mut rotated = (wide << by) | (wide >> (16 - by));
    if rotated > WORD_MASK {
        rotated = (rotated & HIGH_HALF_MASK) >> 16;
    }
    rotated as u16
}

/// Add two words modulo 2^16
#[inline(always)]
pub fn add_overflow16(a: u16, b: u16) -> u16 {
    a.wrapping_add(b)
}

#[inline(always)]
fn weighted_sum(words: &[u16; FACTOR_COUNT], weights: &[u16; FACTOR_COUNT]) -> u32 {
    words
        .iter()
        .zip(weights.iter())
        .map(|(&w, &k)| w as u32 * k as u32)
        .sum()
}

/// Weighted sum divided by 4, keeping the upper half on overflow
#[inline(always)]
pub fn weighted_average(words: &[u16; FACTOR_COUNT], weights: &[u16; FACTOR_COUNT]) -> u16 {
    let mut avg = weighted_sum(words, weights) / 4;
    if avg > WORD_MASK {
        avg = (avg & HIGH_HALF_MASK) >> 16;
    }
    avg as u16
}

/// Weighted sum plus one, halved, keeping the lower half on overflow
#[inline(always)]
pub fn weighted_median(words: &[u16; FACTOR_COUNT], weights: &[u16; FACTOR_COUNT]) -> u16 {
    let mut med = weighted_sum(words, weights).div_ceil(2);
    if med > WORD_MASK {
        med &= WORD_MASK;
    }
    med as u16
}

/// Unweighted average of a widened portion
#[inline(always)]
pub fn portion_average(portion: &[u16; FACTOR_COUNT]) -> u16 {
    weighted_average(portion, &[1; FACTOR_COUNT])
}

/// Unweighted median of a widened portion
#[inline(always)]
pub fn portion_median(portion: &[u16; FACTOR_COUNT]) -> u16 {
    weighted_median(portion, &[1; FACTOR_COUNT])
}

/// 8-bit prime selected by `n % 54`
#[inline(always)]
pub fn prime_8bit(n: u32) -> u16 {
    PRIMES_8BIT[n as usize % PRIMES_8BIT.len()]
}

/// Number of times `n` can be halved before reaching 1
#[inline(always)]
pub fn log2n(mut n: u16) -> u16 {
    let mut count = 0;
    while n > 1 {
        n /= 2;
        count += 1;
    }
    count
}

/// Smallest word and its index. The first occurrence wins ties.
#[inline(always)]
pub fn min_argmin(words: &[u16; FACTOR_COUNT]) -> (u16, usize) {
    let mut min = words[0];
    let mut argmin = 0;
    for (i, &w) in words.iter().enumerate().skip(1) {
        if w < min {
            min = w;
            argmin = i;
        }
    }
    (min, argmin)
}

/// Largest word and its index. The first occurrence wins ties.
#[inline(always)]
pub fn max_argmax(words: &[u16; FACTOR_COUNT]) -> (u16, usize) {
    let mut max = words[0];
    let mut argmax = 0;
    for (i, &w) in words.iter().enumerate().skip(1) {
        if w > max {
            max = w;
            argmax = i;
        }
    }
    (max, argmax)
}
