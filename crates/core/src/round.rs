//! Round engine
//!
//! A round copies the factors into a working state, mixes it, perturbs it
//! with the round primes, permutes it and adds it back into the factors.
//! The order of these steps is part of the digest.

use crate::alphabet::mix;
use crate::params::{Factors, SINGLE_DIGIT_PRIMES, SWAP_PAIRS};
use crate::primitives::{add_overflow16, prime_8bit};
use crate::version::Version;

/// Cross-mix two slots chosen by the current round prime
///
/// The index chain can repeat a slot for some primes. It is applied as is.
#[inline(always)]
fn bahman(temp: &mut Factors, pnum: u16) {
    let cica = (pnum % 4) as usize;
    let mica = (cica + 1) % 4;
    let nica = (mica + cica) % 4;
    let wica = (nica + mica) % 4;

    let mianju = prime_8bit(temp[nica] as u32);
    let shift = SINGLE_DIGIT_PRIMES[temp[wica] as usize % SINGLE_DIGIT_PRIMES.len()];

    temp[cica] ^= (temp[mica] >> shift) & pnum;
    temp[mica] ^= (temp[cica] << shift) ^ mianju;
}

/// Walk the version's round primes over the working state
#[inline(always)]
pub fn perturb(temp: &mut Factors, version: Version) {
    match version {
        Version::V1 => {
            for &pnum in version.round_primes() {
                temp[0] ^= pnum;
                temp[1] &= pnum;
                temp[2] ^= pnum;
                temp[3] &= pnum;
            }
        }
        Version::V2 => {
            for &pnum in version.round_primes() {
                for word in temp.iter_mut() {
                    *word %= pnum;
                }
                bahman(temp, pnum);
            }
        }
    }
}

/// Swap every pair of slots once, in [`SWAP_PAIRS`] order
#[inline(always)]
pub fn permute(temp: &mut Factors) {
    for &(i, j) in SWAP_PAIRS.iter() {
        temp.swap(i, j);
    }
}

/// Run one full round and fold the result into `factors`
#[inline(always)]
pub fn round(factors: &mut Factors, version: Version) {
    let mut temp = *factors;

    mix(&mut temp, version);
    perturb(&mut temp, version);
    permute(&mut temp);

    for (factor, &t) in factors.iter_mut().zip(temp.iter()) {
        *factor = add_overflow16(*factor, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::INITIAL_FACTORS;

    const SAMPLE: Factors = [0x1234, 0x00ff, 0xabcd, 0x0001];

    #[test]
    fn test_perturb_v1() {
        let mut temp = INITIAL_FACTORS;
        perturb(&mut temp, Version::V1);
        assert_eq!(temp, [0xa811, 0x8001, 0xf711, 0x8001]);

        let mut temp = SAMPLE;
        perturb(&mut temp, Version::V1);
        assert_eq!(temp, [0x25b4, 0x0001, 0x9c4d, 0x0001]);
    }

    #[test]
    fn test_perturb_v2() {
        let mut temp = INITIAL_FACTORS;
        perturb(&mut temp, Version::V2);
        assert_eq!(temp, [0xdfe1, 0x0a2f, 0xc8f9, 0x10d5]);

        let mut temp = SAMPLE;
        perturb(&mut temp, Version::V2);
        assert_eq!(temp, [0x3cdb, 0x1c5b, 0x6f2a, 0x043b]);
    }

    #[test]
    fn test_permute_reverses_state() {
        // The six swaps in order amount to reversing the state
        let mut temp = [0, 1, 2, 3];
        permute(&mut temp);
        assert_eq!(temp, [3, 2, 1, 0]);
    }

    #[test]
    fn test_round() {
        let mut factors = INITIAL_FACTORS;
        round(&mut factors, Version::V1);
        assert_eq!(factors, [0x1f91, 0xe2db, 0xc091, 0xe289]);

        let mut factors = INITIAL_FACTORS;
        round(&mut factors, Version::V2);
        assert_eq!(factors, [0xafe5, 0x46d2, 0x2164, 0xe864]);

        let mut factors = [7, 7, 7, 7];
        round(&mut factors, Version::V2);
        assert_eq!(factors, [0x0137, 0x527f, 0x0abd, 0x34cf]);
    }

    #[test]
    fn test_bahman_aliases_for_some_primes() {
        // pnum % 4 == 0 gives cica = 0, mica = 1, nica = 1, wica = 2
        let mut temp = [0x0010, 0x0020, 0x0030, 0x0040];
        bahman(&mut temp, 0x8004);
        assert_eq!(temp, [0x0014, 0x0009, 0x0030, 0x0040]);
    }
}
