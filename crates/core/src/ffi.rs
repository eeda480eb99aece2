//! C FFI bindings

use crate::digest::NumeralBase;
use crate::params::FACTOR_COUNT;
use crate::poxhash::PoxHash;
use crate::version::Version;
use core::slice;

/// Opaque hasher handle for FFI
pub struct PoxHasher {
    inner: PoxHash,
}

/// Create a new hasher instance
///
/// `version` is 1 or 2; anything else selects the latest version.
/// Returns a pointer the caller must release with `poxhash_free`.
#[unsafe(no_mangle)]
pub extern "C" fn poxhash_new(version: u8) -> *mut PoxHasher {
    let version = match version {
        1 => Version::V1,
        _ => Version::LATEST,
    };
    let hasher = Box::new(PoxHasher {
        inner: PoxHash::with_version(version),
    });
    Box::into_raw(hasher)
}

/// Free a hasher instance
#[unsafe(no_mangle)]
pub extern "C" fn poxhash_free(hasher: *mut PoxHasher) {
    if !hasher.is_null() {
        unsafe {
            let _ = Box::from_raw(hasher);
        }
    }
}

/// Compute the final four words of `input`
/// - hasher: pointer from poxhash_new()
/// - input: pointer to input bytes (may be null when input_len is 0)
/// - output: pointer to a buffer of 4 u16 values
#[unsafe(no_mangle)]
pub extern "C" fn poxhash_hash(
    hasher: *const PoxHasher,
    input: *const u8,
    input_len: usize,
    output: *mut u16,
) {
    if hasher.is_null() || output.is_null() || (input.is_null() && input_len != 0) {
        return;
    }

    unsafe {
        let hasher = &*hasher;
        let input_slice: &[u8] = if input_len == 0 {
            &[]
        } else {
            slice::from_raw_parts(input, input_len)
        };
        let words = hasher.inner.hash_words(input_slice);

        let output_slice = slice::from_raw_parts_mut(output, FACTOR_COUNT);
        output_slice.copy_from_slice(&words);
    }
}

/// Write the 16-character hexadecimal digest of `input` (no NUL terminator)
#[unsafe(no_mangle)]
pub extern "C" fn poxhash_hexdigest(
    hasher: *const PoxHasher,
    input: *const u8,
    input_len: usize,
    output: *mut u8,
) {
    if hasher.is_null() || output.is_null() || (input.is_null() && input_len != 0) {
        return;
    }

    let mut words = [0u16; FACTOR_COUNT];
    poxhash_hash(hasher, input, input_len, words.as_mut_ptr());
    let hex = NumeralBase::Hexadecimal.encode(&words);
    unsafe {
        let output_slice = slice::from_raw_parts_mut(output, hex.len());
        output_slice.copy_from_slice(hex.as_bytes());
    }
}

/// Benchmark: compute N hashes and return total microseconds
#[unsafe(no_mangle)]
pub extern "C" fn poxhash_benchmark(iterations: u32) -> u64 {
    use std::time::Instant;

    let hasher = PoxHash::new();
    let input = b"PoxHash benchmark input";

    let start = Instant::now();
    for i in 0..iterations {
        let mut data = input.to_vec();
        data.extend_from_slice(&i.to_le_bytes());
        let _ = hasher.hash_words(&data);
    }
    start.elapsed().as_micros() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::INITIAL_FACTORS;

    #[test]
    fn test_ffi_hash_matches_library() {
        let hasher = poxhash_new(2);
        let input = b"abcdefghijk";

        let mut words = [0u16; FACTOR_COUNT];
        poxhash_hash(hasher, input.as_ptr(), input.len(), words.as_mut_ptr());
        assert_eq!(words, [14796, 57286, 17636, 14836]);

        let mut hex = [0u8; 16];
        poxhash_hexdigest(hasher, input.as_ptr(), input.len(), hex.as_mut_ptr());
        assert_eq!(&hex, b"39CCDFC644E439F4");

        poxhash_free(hasher);
    }

    #[test]
    fn test_ffi_empty_input_v1() {
        let hasher = poxhash_new(1);
        let mut words = [0u16; FACTOR_COUNT];
        poxhash_hash(hasher, core::ptr::null(), 0, words.as_mut_ptr());
        assert_eq!(words, INITIAL_FACTORS);
        poxhash_free(hasher);
    }

    #[test]
    fn test_ffi_null_hasher_is_ignored() {
        let mut words = [0xaaaa_u16; FACTOR_COUNT];
        poxhash_hash(core::ptr::null(), b"x".as_ptr(), 1, words.as_mut_ptr());
        assert_eq!(words, [0xaaaa; FACTOR_COUNT]);
        poxhash_free(core::ptr::null_mut());
    }
}
