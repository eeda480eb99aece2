//! PoxHash runner library
//!
//! Command-line front end for the PoxHash 64-bit hash. The algorithm lives
//! in `poxhash-core` and is re-exported here as [`algorithm`].
//!
//! - [`input`] turns arguments into messages (`file=` and `int=` prefixes)
//! - [`report`] selects and formats digest forms and benchmark timings
//!
//! # Example
//!
//! ```rust
//! use poxhash::algorithm::{hash, NumeralBase};
//! use poxhash::input::message_bytes;
//!
//! let message = message_bytes("int=97,98,99").unwrap();
//! let digest = hash(&message);
//! assert_eq!(digest, hash(b"abc"));
//! assert_eq!(digest.digest(NumeralBase::Hexadecimal).len(), 16);
//! ```

// Re-export the core algorithm
pub use poxhash_core as algorithm;

pub mod input;
pub mod report;

// Convenience re-exports
pub use algorithm::{hash, hash_with_version, NumeralBase, PoxDigest, PoxHash, Version};
