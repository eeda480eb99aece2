//! Turning command-line arguments into messages
//!
//! A plain argument is hashed as its UTF-8 bytes. Two prefixes change that:
//!
//! - `file=<path>` hashes the contents of a file
//! - `int=<list>` hashes a comma-separated list of byte literals, each
//!   written in decimal or with a `0x`, `0o` or `0b` prefix

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

pub const FILE_PREFIX: &str = "file=";
pub const INT_PREFIX: &str = "int=";

/// Most digits allowed after `0x`
const MAX_HEX_DIGITS: usize = 2;
/// Most digits allowed after `0o`
const MAX_OCT_DIGITS: usize = 5;
/// Most digits allowed after `0b`
const MAX_BIN_DIGITS: usize = 8;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("File does not exist or is a directory: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Empty entry in byte list `{0}`")]
    EmptyInt(String),

    #[error("`{literal}` is not a valid base-{radix} number")]
    IntLiteral { literal: String, radix: u32 },

    #[error("`{literal}` has more than {max} digits")]
    IntTooLong { literal: String, max: usize },

    #[error("`{0}` is not a byte-sized integer (0-255)")]
    IntOutOfRange(String),
}

/// What kind of message an argument names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind<'a> {
    Text(&'a str),
    File(&'a str),
    Ints(&'a str),
}

impl<'a> ArgKind<'a> {
    /// Classify an argument. A bare prefix with nothing after it is plain text.
    pub fn classify(arg: &'a str) -> Self {
        match (arg.strip_prefix(FILE_PREFIX), arg.strip_prefix(INT_PREFIX)) {
            (Some(path), _) if !path.is_empty() => ArgKind::File(path),
            (_, Some(list)) if !list.is_empty() => ArgKind::Ints(list),
            _ => ArgKind::Text(arg),
        }
    }
}

/// Resolve one argument into the bytes to hash
pub fn message_bytes(arg: &str) -> Result<Vec<u8>, InputError> {
    match ArgKind::classify(arg) {
        ArgKind::Text(text) => Ok(text.as_bytes().to_vec()),
        ArgKind::File(path) => read_file(Path::new(path)),
        ArgKind::Ints(list) => parse_int_list(list),
    }
}

/// Read a regular file in full
pub fn read_file(path: &Path) -> Result<Vec<u8>, InputError> {
    if !path.is_file() {
        return Err(InputError::FileNotFound(path.to_path_buf()));
    }
    fs::read(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a comma-separated list of byte literals
pub fn parse_int_list(list: &str) -> Result<Vec<u8>, InputError> {
    list.split(',')
        .map(|item| parse_byte(item.trim(), list))
        .collect()
}

fn parse_byte(literal: &str, list: &str) -> Result<u8, InputError> {
    if literal.is_empty() {
        return Err(InputError::EmptyInt(list.to_string()));
    }

    let (digits, radix, max_digits) = if let Some(rest) = literal.strip_prefix("0x") {
        (rest, 16, Some(MAX_HEX_DIGITS))
    } else if let Some(rest) = literal.strip_prefix("0o") {
        (rest, 8, Some(MAX_OCT_DIGITS))
    } else if let Some(rest) = literal.strip_prefix("0b") {
        (rest, 2, Some(MAX_BIN_DIGITS))
    } else {
        (literal, 10, None)
    };

    if let Some(max) = max_digits {
        if digits.len() > max {
            return Err(InputError::IntTooLong {
                literal: literal.to_string(),
                max,
            });
        }
    }

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(InputError::IntLiteral {
            literal: literal.to_string(),
            radix,
        });
    }

    u8::from_str_radix(digits, radix).map_err(|_| InputError::IntOutOfRange(literal.to_string()))
}

/// Join arguments with single spaces into one message
///
/// Prefixes are not interpreted in join mode.
pub fn join_args<S: AsRef<str>>(args: &[S]) -> String {
    let mut warned = false;
    let mut parts = Vec::with_capacity(args.len());
    for arg in args {
        let arg = arg.as_ref();
        if !warned && !matches!(ArgKind::classify(arg), ArgKind::Text(_)) {
            warn!(
                "`{}` and `{}` prefixes are ignored when joining arguments",
                FILE_PREFIX, INT_PREFIX
            );
            warned = true;
        }
        parts.push(arg);
    }
    parts.join(" ")
}
