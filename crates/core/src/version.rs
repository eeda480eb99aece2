//! Algorithm versions
//!
//! Both versions share one pipeline. The version tag picks the round-prime
//! table, the padding scheme, the perturbation pass, the gamma index scheme
//! and whether byte mixing scrambles the factors with 8-bit primes.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::params::{ROUND_PRIMES, ROUND_PRIMES_V1};

/// PoxHash algorithm version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Version {
    /// Zero padding, 32 round primes, XOR/AND perturbation
    V1,
    /// Octopad, 90 round primes, modulo + bahman perturbation
    #[default]
    V2,
}

/// How a message is extended to a whole number of blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Append zero bytes. Empty messages stay empty.
    Zero,
    /// Append bytes derived from the message itself. Always yields at least one block.
    Octopad,
}

impl Version {
    pub const ALL: [Version; 2] = [Version::V1, Version::V2];

    pub const LATEST: Version = Version::V2;

    /// Round primes walked by the perturbation pass
    pub fn round_primes(self) -> &'static [u16] {
        match self {
            Version::V1 => &ROUND_PRIMES_V1,
            Version::V2 => &ROUND_PRIMES,
        }
    }

    pub fn padding(self) -> Padding {
        match self {
            Version::V1 => Padding::Zero,
            Version::V2 => Padding::Octopad,
        }
    }

    /// Whether byte mixing folds each factor modulo an 8-bit prime
    pub fn scrambles_bytes(self) -> bool {
        matches!(self, Version::V2)
    }

    pub fn number(self) -> u8 {
        match self {
            Version::V1 => 1,
            Version::V2 => 2,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.number())
    }
}

/// Error returned when parsing an unknown version name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVersion;

impl fmt::Display for UnknownVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown PoxHash version (expected v1 or v2)")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownVersion {}

impl FromStr for Version {
    type Err = UnknownVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "v1" | "V1" => Ok(Version::V1),
            "2" | "v2" | "V2" | "latest" => Ok(Version::V2),
            _ => Err(UnknownVersion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::string::ToString;

    #[test]
    fn test_default_is_latest() {
        assert_eq!(Version::default(), Version::LATEST);
        assert_eq!(Version::LATEST, Version::V2);
    }

    #[test]
    fn test_v1_primes_are_prefix_of_latest() {
        let v1 = Version::V1.round_primes();
        let v2 = Version::V2.round_primes();
        assert_eq!(v1.len(), 32);
        assert_eq!(v2.len(), 90);
        assert_eq!(&v2[..32], v1);
    }

    #[test]
    fn test_parse_and_display() {
        for version in Version::ALL {
            let shown = version.to_string();
            assert_eq!(shown.parse::<Version>(), Ok(version));
        }
        assert_eq!("latest".parse::<Version>(), Ok(Version::V2));
        assert_eq!("v3".parse::<Version>(), Err(UnknownVersion));
    }
}
