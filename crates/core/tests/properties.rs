//! PoxHash property tests: digest invariants over arbitrary messages.

use poxhash_core::{
    BLOCK_SIZE, NumeralBase, PoxHash, Version, hash, hash_with_version, pad, padded_len,
};
use proptest::prelude::*;

fn any_version() -> impl Strategy<Value = Version> {
    prop_oneof![Just(Version::V1), Just(Version::V2)]
}

proptest! {
    #[test]
    fn every_base_decodes_to_words(data in proptest::collection::vec(any::<u8>(), 0..=256)) {
        let digest = hash(&data);
        for base in NumeralBase::ALL {
            let rendered = digest.digest(base);
            prop_assert_eq!(rendered.len(), base.digest_len());
            prop_assert_eq!(base.decode(rendered), Some(digest.words));
        }
    }

    #[test]
    fn wide_forms_pack_the_words(
        data in proptest::collection::vec(any::<u8>(), 0..=256),
        version in any_version(),
    ) {
        let digest = hash_with_version(&data, version);
        let w = digest.words.map(u32::from);
        prop_assert_eq!(digest.doubles, [w[0] | w[1] << 16, w[2] | w[3] << 16]);
        prop_assert_eq!(
            digest.quad,
            u64::from(digest.doubles[0]) | u64::from(digest.doubles[1]) << 32
        );
        for (i, word) in digest.words.iter().enumerate() {
            prop_assert_eq!(&digest.bytes[2 * i..2 * i + 2], &word.to_le_bytes()[..]);
        }
    }

    #[test]
    fn hashing_is_deterministic(
        data in proptest::collection::vec(any::<u8>(), 0..=300),
        version in any_version(),
    ) {
        let hasher = PoxHash::with_version(version);
        prop_assert_eq!(hasher.hash(&data), hasher.hash(&data));
        prop_assert_eq!(hasher.hash_words(&data), hash_with_version(&data, version).words);
    }

    #[test]
    fn padding_keeps_prefix_and_aligns(
        data in proptest::collection::vec(any::<u8>(), 0..=300),
        version in any_version(),
    ) {
        let padding = version.padding();
        let padded = pad(&data, padding);
        prop_assert_eq!(padded.len(), padded_len(data.len(), padding));
        prop_assert_eq!(padded.len() % BLOCK_SIZE, 0);
        prop_assert_eq!(&padded[..data.len()], &data[..]);
    }

    #[test]
    fn v1_trailing_zeros_inside_block_do_not_matter(
        data in proptest::collection::vec(any::<u8>(), 1..=63),
    ) {
        // Zero padding cannot tell explicit zeros from padding
        let mut extended = data.clone();
        extended.resize(BLOCK_SIZE, 0);
        prop_assert_eq!(
            hash_with_version(&data, Version::V1),
            hash_with_version(&extended, Version::V1)
        );
    }
}
