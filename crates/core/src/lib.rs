//! # PoxHash Core Algorithm
//!
//! A small, fast, non-cryptographic hash over arbitrary bytes. The result is
//! four 16-bit words, rendered as bytes, words, doubles, a quad and eight
//! fixed-width numeral strings.
//!
//! PoxHash is **not** collision or preimage resistant. Use it for
//! fingerprints and checksums, never for security.
//!
//! ## Algorithm
//!
//! - The message is padded to a multiple of 64 bytes
//! - Each block is split into 16-byte chunks and 4-byte portions
//! - Each portion runs 8 rounds of byte mixing followed by the round engine
//! - A round mixes a working copy of the factors with alpha, delta, theta and
//!   gamma, perturbs it with the round primes, swaps every pair of slots and
//!   adds it back into the factors
//!
//! ## Versions
//!
//! - **v1**: zero padding, 32 round primes, XOR/AND perturbation
//! - **v2** (default): octopad, 90 round primes, modulo and bahman
//!   perturbation, prime-scrambled byte mixing
//!
//! ## Example
//!
//! ```rust
//! use poxhash_core::{NumeralBase, PoxHash, Version, hash};
//!
//! // Single-shot hashing
//! let digest = hash(b"abcdefghijk");
//! assert_eq!(digest.hexdigest, "39CCDFC644E439F4");
//! assert_eq!(digest.digest(NumeralBase::Sexagesimal), "46aFsk4ru47G");
//!
//! // Reusable hasher pinned to a version
//! let hasher = PoxHash::with_version(Version::V1);
//! let words = hasher.hash_words(b"abcdefghijk");
//! assert_eq!(words, [40923, 10698, 49341, 50780]);
//! ```
//!
//! ## no_std Support
//!
//! This crate supports `no_std` environments with the `alloc` crate:
//!
//! ```toml
//! [dependencies]
//! poxhash-core = { version = "0.2", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod alphabet;
mod block;
mod digest;
mod pad;
mod params;
mod poxhash;
mod primitives;
mod round;
mod version;

#[cfg(feature = "std")]
mod ffi;

pub use digest::{NumeralBase, PoxDigest, UnknownBase};
pub use pad::{pad, padded_len};
pub use params::*;
pub use poxhash::{PoxHash, hash, hash_batch, hash_with_version};
pub use version::{Padding, UnknownVersion, Version};
