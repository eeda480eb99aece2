//! Message padding

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::params::BLOCK_SIZE;
use crate::version::Padding;

/// Extend `input` to a whole number of blocks
pub fn pad(input: &[u8], padding: Padding) -> Vec<u8> {
    match padding {
        Padding::Zero => zero_pad(input),
        Padding::Octopad => octopad(input),
    }
}

/// Length after padding to the next multiple of [`BLOCK_SIZE`]
///
/// Octopad turns an empty message into one block; zero padding leaves it empty.
pub fn padded_len(input_len: usize, padding: Padding) -> usize {
    let blocks = input_len.div_ceil(BLOCK_SIZE);
    match padding {
        Padding::Octopad if blocks == 0 => BLOCK_SIZE,
        _ => blocks * BLOCK_SIZE,
    }
}

fn zero_pad(input: &[u8]) -> Vec<u8> {
    let mut padded = input.to_vec();
    padded.resize(padded_len(input.len(), Padding::Zero), 0);
    padded
}

/// Fill the tail with bytes read back from the message itself
///
/// A cursor starts at the message length. Each step reads the message byte
/// at `cursor % len`, appends it XORed with the low byte of the cursor, and
/// only then advances the cursor by the byte it read.
fn octopad(input: &[u8]) -> Vec<u8> {
    let target = padded_len(input.len(), Padding::Octopad);
    let mut padded = Vec::with_capacity(target);
    padded.extend_from_slice(input);

    let original_len = input.len();
    let mut cursor = original_len;
    while padded.len() < target {
        let source = if original_len == 0 {
            0
        } else {
            input[cursor % original_len]
        };
        padded.push(source ^ (cursor & 0xff) as u8);
        cursor += source as usize;
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_len() {
        assert_eq!(padded_len(0, Padding::Zero), 0);
        assert_eq!(padded_len(0, Padding::Octopad), 64);
        assert_eq!(padded_len(1, Padding::Octopad), 64);
        assert_eq!(padded_len(64, Padding::Zero), 64);
        assert_eq!(padded_len(65, Padding::Zero), 128);
        assert_eq!(padded_len(65, Padding::Octopad), 128);
    }

    #[test]
    fn test_zero_pad() {
        assert!(pad(b"", Padding::Zero).is_empty());

        let padded = pad(b"abc", Padding::Zero);
        assert_eq!(padded.len(), 64);
        assert_eq!(&padded[..3], b"abc");
        assert!(padded[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_octopad_reads_before_advancing() {
        let padded = pad(b"abc", Padding::Octopad);
        assert_eq!(padded.len(), 64);
        assert_eq!(&padded[..3], b"abc");
        // cursor 3 reads 'a' (97): 97 ^ 3 = 98, cursor -> 100
        // cursor 100 reads 'b' (98): 98 ^ 100 = 6, cursor -> 198
        // cursor 198 reads 'a' (97): 97 ^ 198 = 167
        assert_eq!(&padded[3..9], &[98, 6, 167, 69, 232, 136]);
    }

    #[test]
    fn test_octopad_empty_is_one_zero_block() {
        let padded = pad(b"", Padding::Octopad);
        assert_eq!(padded, [0u8; 64]);
    }

    #[test]
    fn test_octopad_leaves_full_blocks_alone() {
        let input = [b'x'; 64];
        assert_eq!(pad(&input, Padding::Octopad), input);
    }

    #[test]
    fn test_octopad_short_tail() {
        let input: Vec<u8> = (0..60).collect();
        let padded = pad(&input, Padding::Octopad);
        assert_eq!(&padded[60..], &[60, 60, 60, 60]);
    }
}
