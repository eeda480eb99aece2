//! The four non-linear mixing operations
//!
//! Each operation rewrites the working state in place. A round always applies
//! them in the order alpha, delta, theta, gamma.

use crate::params::{
    BYTE_MASK, FACTOR_COUNT, Factors, MAGIC_PRIMES, PRIMES_8BIT, SINGLE_DIGIT_PRIMES,
};
use crate::primitives::{
    log2n, max_argmax, min_argmin, prime_8bit, rotate_left16, weighted_average, weighted_median,
};
use crate::version::Version;

const DELTA_ITERATIONS: usize = 4;

#[inline(always)]
fn single_digit_prime(n: u16) -> u32 {
    SINGLE_DIGIT_PRIMES[n as usize % SINGLE_DIGIT_PRIMES.len()] as u32
}

/// Shift words 0..3 right by amounts drawn from the XOR of the two word pairs
#[inline(always)]
pub fn alpha(temp: &mut Factors) {
    let lo = (temp[0] ^ temp[1]) & 0x00ff;
    let hi = (temp[2] ^ temp[3]) & 0xff00;
    let a = (lo | hi) % PRIMES_8BIT[0];
    let b = (lo ^ hi) % PRIMES_8BIT[1];

    temp[0] >>= a;
    temp[1] >>= ((a + b) % 2) + 1;
    temp[2] >>= b;
}

/// Run four byte-range accumulators against each other, then fold them into words 1..4
#[inline(always)]
pub fn delta(temp: &mut Factors) {
    let mut alaf = (temp[0] ^ 0xfff0) % prime_8bit(temp[0] as u32);
    let mut dalat = (temp[1] ^ 0xf00f) % prime_8bit(temp[1] as u32);
    let mut tit = (temp[2] & 0x0fff) % prime_8bit(temp[2] as u32);
    let mut gaman = (temp[3] & 0xff00) % prime_8bit(temp[3] as u32);

    for _ in 0..DELTA_ITERATIONS {
        alaf >>= single_digit_prime(dalat);
        dalat = rotate_left16(dalat, 2);
        tit >>= single_digit_prime(gaman);
        gaman ^= (alaf ^ BYTE_MASK) >> single_digit_prime(tit);
    }

    temp[1] ^= temp[2] % MAGIC_PRIMES[alaf as usize % MAGIC_PRIMES.len()];
    temp[2] ^= alaf.wrapping_add(tit);
    temp[3] ^= tit.wrapping_add(gaman);
}

/// Perturb words 0 and 3 with the parity-weighted average and median
#[inline(always)]
pub fn theta(temp: &mut Factors) {
    let parities: Factors = [temp[0] % 2, temp[1] % 2, temp[2] % 2, temp[3] % 2];
    let avg = weighted_average(temp, &parities);
    let med = weighted_median(temp, &parities);

    temp[0] ^= ((avg >> parities[3]) ^ BYTE_MASK) & 0x000f;
    temp[3] ^= ((med << parities[0]) ^ 0xf0f0) & 0xf000;
}

/// The two indices that are neither `argmin` nor `argmax`, in index order
#[inline(always)]
fn complement_pair(argmin: usize, argmax: usize) -> (usize, usize) {
    let mut rest = [0usize; 2];
    let mut found = 0;
    for i in 0..FACTOR_COUNT {
        if i != argmin && i != argmax && found < rest.len() {
            rest[found] = i;
            found += 1;
        }
    }
    (rest[0], rest[1])
}

/// Rewrite all four slots using scalars keyed on the extremal words
///
/// V2 addresses the two non-extremal slots through the complement of
/// `{argmin, argmax}`. V1 derives its indices by masking the extremal
/// indices, so some slots can be hit twice and others skipped.
#[inline(always)]
pub fn gamma(temp: &mut Factors, version: Version) {
    let (min, argmin) = min_argmin(temp);
    let (max, argmax) = max_argmax(temp);

    let (ay, dee, thorn, ee) = match version {
        Version::V1 => (argmin & 1, argmax ^ 2, argmin & 3, argmax),
        Version::V2 => {
            let (aside, beside) = complement_pair(argmin, argmax);
            (aside, argmin, beside, argmax)
        }
    };

    let sos = match version {
        Version::V1 => temp[ay] % prime_8bit(temp[thorn] as u32),
        Version::V2 => temp[ay] % prime_8bit(temp[ay] as u32),
    };
    let sosa = (prime_8bit(max as u32) ^ 0x0f0f) % prime_8bit(min as u32);
    let sosb = max % prime_8bit(max as u32);
    let mid = (min as u32 + max as u32) / 2;
    let sosc = match version {
        Version::V1 => temp[dee] % prime_8bit(mid),
        Version::V2 => temp[thorn] % prime_8bit(mid),
    };

    temp[ay] >>= (sos ^ 0x00f0) % 16;
    temp[dee] >>= (sosc ^ 0xf000) % ((max % 2) + 1);
    // V2 swaps which slots receive the two log2 terms
    let (log_a, log_b) = match version {
        Version::V1 => (thorn, ee),
        Version::V2 => (ee, thorn),
    };
    temp[log_a] ^= log2n(sosa) & 0x0fff;
    temp[log_b] ^= log2n(sosb) >> ((sosc % 2) + 1);
}

/// Apply alpha, delta, theta and gamma in order
#[inline(always)]
pub fn mix(temp: &mut Factors, version: Version) {
    alpha(temp);
    delta(temp);
    theta(temp);
    gamma(temp, version);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::INITIAL_FACTORS;

    const SAMPLE: Factors = [0x1234, 0x00ff, 0xabcd, 0x0001];
    const FLAT: Factors = [7, 7, 7, 7];

    fn applied(state: Factors, op: impl Fn(&mut Factors)) -> Factors {
        let mut temp = state;
        op(&mut temp);
        temp
    }

    #[test]
    fn test_alpha() {
        assert_eq!(
            applied(INITIAL_FACTORS, alpha),
            [0x9f91, 0x6d9d, 0x3024, 0xac8b]
        );
        assert_eq!(applied(SAMPLE, alpha), [0x091a, 0x003f, 0x2af3, 0x0001]);
        assert_eq!(applied(FLAT, alpha), [7, 3, 7, 7]);
    }

    #[test]
    fn test_delta() {
        assert_eq!(
            applied(INITIAL_FACTORS, delta),
            [0x9f91, 0xdb24, 0xc091, 0xacf8]
        );
        assert_eq!(applied(SAMPLE, delta), [0x1234, 0x00ec, 0xabcd, 0x001f]);
        assert_eq!(applied(FLAT, delta), [7, 0, 7, 7]);
    }

    #[test]
    fn test_theta() {
        assert_eq!(
            applied(INITIAL_FACTORS, theta),
            [0x9f93, 0xdb3b, 0xc091, 0xbc8b]
        );
        assert_eq!(applied(SAMPLE, theta), [0x1232, 0x00ff, 0xabcd, 0xa001]);
        assert_eq!(applied(FLAT, theta), [0x000b, 7, 7, 0xf007]);
    }

    #[test]
    fn test_gamma_v1() {
        let v1 = |t: &mut Factors| gamma(t, Version::V1);
        assert_eq!(
            applied(INITIAL_FACTORS, v1),
            [0x0001, 0xdb3b, 0xc091, 0x5645]
        );
        assert_eq!(applied(SAMPLE, v1), [0x1234, 0x00ff, 0xabcf, 0x0001]);
        assert_eq!(applied(FLAT, v1), [3, 7, 3, 7]);
    }

    #[test]
    fn test_gamma_v2() {
        let v2 = |t: &mut Factors| gamma(t, Version::V2);
        assert_eq!(
            applied(INITIAL_FACTORS, v2),
            [0x4fc8, 0xdb3e, 0x0003, 0xac8b]
        );
        assert_eq!(applied(SAMPLE, v2), [0x0004, 0x00fd, 0xabcd, 0x0001]);
        assert_eq!(applied(FLAT, v2), [0, 0, 7, 7]);
    }

    #[test]
    fn test_complement_pair() {
        assert_eq!(complement_pair(0, 3), (1, 2));
        assert_eq!(complement_pair(2, 1), (0, 3));
        assert_eq!(complement_pair(3, 0), (1, 2));
        // All words equal: argmin and argmax coincide
        assert_eq!(complement_pair(0, 0), (1, 2));
    }
}
