//! PoxHash entry points
//!
//! The message is padded, split into 64-byte blocks and each block is fed
//! into a four-word factor state that starts at [`INITIAL_FACTORS`]. The
//! final state is rendered into a [`PoxDigest`].
//!
//! Hashing never fails. Every call owns its factor state, so independent
//! calls can run concurrently.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use log::{debug, trace};

use crate::block::process_block;
use crate::digest::PoxDigest;
use crate::pad::pad;
use crate::params::{BLOCK_SIZE, Factors, INITIAL_FACTORS};
use crate::version::Version;

/// PoxHash hasher
///
/// Holds nothing but the algorithm version, so it is `Copy` and can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoxHash {
    version: Version,
}

impl PoxHash {
    /// Create a hasher for the latest algorithm version
    pub fn new() -> Self {
        Self::with_version(Version::LATEST)
    }

    pub fn with_version(version: Version) -> Self {
        Self { version }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Compute the PoxHash of `input` and render every digest form
    pub fn hash(&self, input: &[u8]) -> PoxDigest {
        PoxDigest::from_words(self.hash_words(input))
    }

    /// Compute only the final factor state
    pub fn hash_words(&self, input: &[u8]) -> Factors {
        let padded = pad(input, self.version.padding());
        debug!(
            "poxhash {}: {} input bytes, {} padded bytes, {} blocks",
            self.version,
            input.len(),
            padded.len(),
            padded.len() / BLOCK_SIZE
        );

        let mut factors = INITIAL_FACTORS;
        for (i, block) in padded.chunks_exact(BLOCK_SIZE).enumerate() {
            process_block(&mut factors, block, self.version);
            trace!("block {}: factors {:04x?}", i, factors);
        }
        factors
    }

    /// Hash many independent messages
    ///
    /// Digests come back in input order.
    #[cfg(feature = "parallel")]
    pub fn hash_batch<T>(&self, inputs: &[T]) -> Vec<PoxDigest>
    where
        T: AsRef<[u8]> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.hash(input.as_ref()))
            .collect()
    }

    /// Hash many independent messages (sequential fallback)
    ///
    /// Digests come back in input order.
    #[cfg(not(feature = "parallel"))]
    pub fn hash_batch<T>(&self, inputs: &[T]) -> Vec<PoxDigest>
    where
        T: AsRef<[u8]>,
    {
        inputs
            .iter()
            .map(|input| self.hash(input.as_ref()))
            .collect()
    }
}

/// Hash `input` with the latest algorithm version
pub fn hash(input: &[u8]) -> PoxDigest {
    PoxHash::new().hash(input)
}

/// Hash `input` with a specific algorithm version
pub fn hash_with_version(input: &[u8], version: Version) -> PoxDigest {
    PoxHash::with_version(version).hash(input)
}

/// Hash every input with `version`, in parallel when the `parallel` feature is on
#[cfg(feature = "parallel")]
pub fn hash_batch<T>(inputs: &[T], version: Version) -> Vec<PoxDigest>
where
    T: AsRef<[u8]> + Sync,
{
    PoxHash::with_version(version).hash_batch(inputs)
}

/// Hash every input with `version`
#[cfg(not(feature = "parallel"))]
pub fn hash_batch<T>(inputs: &[T], version: Version) -> Vec<PoxDigest>
where
    T: AsRef<[u8]>,
{
    PoxHash::with_version(version).hash_batch(inputs)
}
