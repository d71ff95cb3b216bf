use alloc::string::String;
use core::str::FromStr;

use zerocopy::byteorder::{LE, U16};

use crate::CursorError;

/// Text encodings supported by `get_string` and `write_string`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum Encoding {
    /// UTF-8. This is the default.
    #[default]
    Utf8,
    /// UTF-16, little-endian code units.
    Utf16Le,
    /// ISO-8859-1: one byte per character, U+0000 through U+00FF.
    Latin1,
    /// 7-bit ASCII. Decoding clears the high bit of each byte.
    Ascii,
    /// Each byte as two hexadecimal digits.
    Hex,
}

impl Encoding {
    /// Decodes `bytes` into text.
    ///
    /// Decoding never fails. Invalid UTF-8 and UTF-16 sequences are replaced with U+FFFD, and a
    /// trailing odd byte in UTF-16 input is ignored.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Utf16Le => {
                // chunks_exact drops the trailing odd byte.
                let wchars = bytes
                    .chunks_exact(2)
                    .map(|pair| U16::<LE>::from_bytes([pair[0], pair[1]]).get());
                char::decode_utf16(wchars)
                    .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
                    .collect()
            }
            Self::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            Self::Ascii => bytes.iter().map(|&b| char::from(b & 0x7f)).collect(),
            Self::Hex => hex::encode(bytes),
        }
    }

    /// Encodes as much of `text` as fits into `out` and returns the number of bytes written.
    ///
    /// Only whole characters are written: if the next character's encoding does not fit in the
    /// space left, encoding stops there. For `Latin1` and `Ascii`, each character contributes the
    /// low byte of its code point. For `Hex`, digits are consumed in pairs and encoding stops at
    /// the first pair that is not valid hex.
    pub fn encode_into(self, text: &str, out: &mut [u8]) -> usize {
        match self {
            Self::Utf8 => encode_chars(text, out, |c, units| c.encode_utf8(units).len()),
            Self::Utf16Le => encode_chars(text, out, |c, units| {
                let mut wchars = [0u16; 2];
                let wchars = c.encode_utf16(&mut wchars);
                for (dst, w) in units.chunks_exact_mut(2).zip(wchars.iter()) {
                    dst.copy_from_slice(&w.to_le_bytes());
                }
                wchars.len() * 2
            }),
            Self::Latin1 | Self::Ascii => encode_chars(text, out, |c, units| {
                units[0] = c as u32 as u8;
                1
            }),
            Self::Hex => encode_hex(text, out),
        }
    }

    /// Number of bytes `text` occupies in this encoding, with no length limit.
    pub fn encoded_len(self, text: &str) -> usize {
        match self {
            Self::Utf8 => text.len(),
            Self::Utf16Le => text.encode_utf16().count() * 2,
            Self::Latin1 | Self::Ascii => text.chars().count(),
            Self::Hex => text
                .as_bytes()
                .chunks_exact(2)
                .take_while(|pair| pair.iter().all(u8::is_ascii_hexdigit))
                .count(),
        }
    }
}

/// Writes whole characters while they fit. `encode` fills the scratch buffer and returns the number
/// of bytes it used.
fn encode_chars(text: &str, out: &mut [u8], encode: impl Fn(char, &mut [u8; 4]) -> usize) -> usize {
    let mut pos = 0;
    let mut units = [0u8; 4];
    for c in text.chars() {
        let n = encode(c, &mut units);
        let Some(dst) = out.get_mut(pos..pos + n) else {
            break;
        };
        dst.copy_from_slice(&units[..n]);
        pos += n;
    }
    pos
}

fn encode_hex(text: &str, out: &mut [u8]) -> usize {
    let mut pos = 0;
    for (pair, dst) in text.as_bytes().chunks_exact(2).zip(out.iter_mut()) {
        let mut byte = [0u8; 1];
        if hex::decode_to_slice(pair, &mut byte).is_err() {
            break;
        }
        *dst = byte[0];
        pos += 1;
    }
    pos
}

impl FromStr for Encoding {
    type Err = CursorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let known: &[(&str, Encoding)] = &[
            ("utf8", Self::Utf8),
            ("utf-8", Self::Utf8),
            ("utf16le", Self::Utf16Le),
            ("utf-16le", Self::Utf16Le),
            ("ucs2", Self::Utf16Le),
            ("ucs-2", Self::Utf16Le),
            ("latin1", Self::Latin1),
            ("binary", Self::Latin1),
            ("ascii", Self::Ascii),
            ("hex", Self::Hex),
        ];
        known
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, encoding)| encoding)
            .ok_or(CursorError::UnknownEncoding)
    }
}
