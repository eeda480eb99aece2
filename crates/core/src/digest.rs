//! Digest rendering
//!
//! The final factor state is rendered as bytes, words, doubles, a quad and
//! eight fixed-width numeral strings. Each string renders every word on its
//! own, most significant digit first, and concatenates the four fields.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::params::{DIGEST_SIZE, FACTOR_COUNT, Factors};

const SEX_CHARS: &[u8; 60] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwx";
const VIG_CHARS: &[u8; 20] = b"ABCDEFGHIJ@^&*$+!;:~";
const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";
const TET_CHARS: &[u8; 14] = b"0123456789TEWR";
const DUO_CHARS: &[u8; 12] = b"0123456789*#";
const OCT_CHARS: &[u8; 8] = b"01234567";
const SEN_CHARS: &[u8; 6] = b"012345";
const BIN_CHARS: &[u8; 2] = b"01";

/// Widest per-word field of any base (binary)
const MAX_WIDTH: usize = 16;

/// Positional numeral systems a digest is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumeralBase {
    Sexagesimal,
    Vigesimal,
    Hexadecimal,
    Tetradecimal,
    Duodecimal,
    Octal,
    Senary,
    Binary,
}

impl NumeralBase {
    /// Every base, in display order
    pub const ALL: [NumeralBase; 8] = [
        NumeralBase::Sexagesimal,
        NumeralBase::Vigesimal,
        NumeralBase::Hexadecimal,
        NumeralBase::Tetradecimal,
        NumeralBase::Duodecimal,
        NumeralBase::Octal,
        NumeralBase::Senary,
        NumeralBase::Binary,
    ];

    /// Digit characters, indexed by digit value
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            NumeralBase::Sexagesimal => SEX_CHARS,
            NumeralBase::Vigesimal => VIG_CHARS,
            NumeralBase::Hexadecimal => HEX_CHARS,
            NumeralBase::Tetradecimal => TET_CHARS,
            NumeralBase::Duodecimal => DUO_CHARS,
            NumeralBase::Octal => OCT_CHARS,
            NumeralBase::Senary => SEN_CHARS,
            NumeralBase::Binary => BIN_CHARS,
        }
    }

    pub fn radix(self) -> u16 {
        self.alphabet().len() as u16
    }

    /// Digits needed to hold any 16-bit word
    pub fn width(self) -> usize {
        match self {
            NumeralBase::Sexagesimal => 3,
            NumeralBase::Vigesimal => 4,
            NumeralBase::Hexadecimal => 4,
            NumeralBase::Tetradecimal => 5,
            NumeralBase::Duodecimal => 5,
            NumeralBase::Octal => 6,
            NumeralBase::Senary => 7,
            NumeralBase::Binary => 16,
        }
    }

    /// Length of a full digest string
    pub fn digest_len(self) -> usize {
        self.width() * FACTOR_COUNT
    }

    /// Short name, also accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            NumeralBase::Sexagesimal => "sex",
            NumeralBase::Vigesimal => "vig",
            NumeralBase::Hexadecimal => "hex",
            NumeralBase::Tetradecimal => "tet",
            NumeralBase::Duodecimal => "duo",
            NumeralBase::Octal => "oct",
            NumeralBase::Senary => "sen",
            NumeralBase::Binary => "bin",
        }
    }

    /// Render the four words as one fixed-width string
    pub fn encode(self, words: &Factors) -> String {
        let alphabet = self.alphabet();
        let radix = self.radix();
        let width = self.width();

        let mut out = String::with_capacity(self.digest_len());
        for &word in words {
            let mut field = [0u8; MAX_WIDTH];
            let mut rest = word;
            for slot in field[..width].iter_mut().rev() {
                *slot = alphabet[(rest % radix) as usize];
                rest /= radix;
            }
            for &digit in &field[..width] {
                out.push(digit as char);
            }
        }
        out
    }

    /// Parse a digest string back into words
    ///
    /// Returns `None` for a wrong length, a character outside the alphabet,
    /// or a field whose value does not fit in 16 bits.
    pub fn decode(self, digest: &str) -> Option<Factors> {
        let bytes = digest.as_bytes();
        if bytes.len() != self.digest_len() {
            return None;
        }

        let alphabet = self.alphabet();
        let radix = self.radix() as u32;
        let mut words: Factors = [0; FACTOR_COUNT];
        for (word, field) in words.iter_mut().zip(bytes.chunks_exact(self.width())) {
            let mut value: u32 = 0;
            for &ch in field {
                let digit = alphabet.iter().position(|&a| a == ch)? as u32;
                value = value * radix + digit;
            }
            *word = u16::try_from(value).ok()?;
        }
        Some(words)
    }
}

impl fmt::Display for NumeralBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBase;

impl fmt::Display for UnknownBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown numeral base")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownBase {}

impl FromStr for NumeralBase {
    type Err = UnknownBase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumeralBase::ALL
            .into_iter()
            .find(|base| base.name() == s)
            .ok_or(UnknownBase)
    }
}

/// A finished PoxHash digest
///
/// Every field is derived from `words`, the final factor state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoxDigest {
    pub sexdigest: String,
    pub vigdigest: String,
    pub hexdigest: String,
    pub tetdigest: String,
    pub duodigest: String,
    pub octdigest: String,
    pub sendigest: String,
    pub bindigest: String,
    /// Each word as its low byte then its high byte
    pub bytes: [u8; DIGEST_SIZE],
    pub words: Factors,
    /// `words[0] | words[1] << 16` and `words[2] | words[3] << 16`
    pub doubles: [u32; 2],
    /// `doubles[0] | doubles[1] << 32`
    pub quad: u64,
}

impl PoxDigest {
    /// Render every form of a final factor state
    pub fn from_words(words: Factors) -> Self {
        let mut bytes = [0u8; DIGEST_SIZE];
        for (pair, word) in bytes.chunks_exact_mut(2).zip(words.iter()) {
            pair.copy_from_slice(&word.to_le_bytes());
        }

        let doubles = [
            words[0] as u32 | (words[1] as u32) << 16,
            words[2] as u32 | (words[3] as u32) << 16,
        ];
        let quad = doubles[0] as u64 | (doubles[1] as u64) << 32;

        Self {
            sexdigest: NumeralBase::Sexagesimal.encode(&words),
            vigdigest: NumeralBase::Vigesimal.encode(&words),
            hexdigest: NumeralBase::Hexadecimal.encode(&words),
            tetdigest: NumeralBase::Tetradecimal.encode(&words),
            duodigest: NumeralBase::Duodecimal.encode(&words),
            octdigest: NumeralBase::Octal.encode(&words),
            sendigest: NumeralBase::Senary.encode(&words),
            bindigest: NumeralBase::Binary.encode(&words),
            bytes,
            words,
            doubles,
            quad,
        }
    }

    /// The string digest for `base`
    pub fn digest(&self, base: NumeralBase) -> &str {
        match base {
            NumeralBase::Sexagesimal => &self.sexdigest,
            NumeralBase::Vigesimal => &self.vigdigest,
            NumeralBase::Hexadecimal => &self.hexdigest,
            NumeralBase::Tetradecimal => &self.tetdigest,
            NumeralBase::Duodecimal => &self.duodigest,
            NumeralBase::Octal => &self.octdigest,
            NumeralBase::Senary => &self.sendigest,
            NumeralBase::Binary => &self.bindigest,
        }
    }
}

impl fmt::Display for PoxDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hexdigest)
    }
}
