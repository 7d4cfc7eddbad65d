use crate::codepoint_ty::Codepoint;
use crate::error::Error;
use crate::utf_dfa::{self, ACCEPT, REJECT};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An encoding form the decoders understand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// UTF-8.
    Utf8,
    /// UTF-16, big endian.
    Utf16Be,
    /// UTF-16, little endian.
    Utf16Le,
    /// UTF-32, big endian.
    Utf32Be,
    /// UTF-32, little endian.
    Utf32Le,
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const UTF16_BE_BOM: &[u8] = b"\xFE\xFF";
const UTF16_LE_BOM: &[u8] = b"\xFF\xFE";
const UTF32_BE_BOM: &[u8] = b"\x00\x00\xFE\xFF";
const UTF32_LE_BOM: &[u8] = b"\xFF\xFE\x00\x00";

impl Encoding {
    /// Bytes per code unit.
    pub fn unit_size(self) -> usize {
        match self {
            Encoding::Utf8 => 1,
            Encoding::Utf16Be | Encoding::Utf16Le => 2,
            Encoding::Utf32Be | Encoding::Utf32Le => 4,
        }
    }

    /// The byte order mark of this encoding.
    pub fn bom(self) -> &'static [u8] {
        match self {
            Encoding::Utf8 => UTF8_BOM,
            Encoding::Utf16Be => UTF16_BE_BOM,
            Encoding::Utf16Le => UTF16_LE_BOM,
            Encoding::Utf32Be => UTF32_BE_BOM,
            Encoding::Utf32Le => UTF32_LE_BOM,
        }
    }

    /// Assembles one code unit from exactly [`unit_size`](Self::unit_size)
    /// bytes.
    pub(crate) fn read_unit(self, bytes: &[u8]) -> u32 {
        match (self, bytes) {
            (Encoding::Utf8, [a, ..]) => *a as u32,
            (Encoding::Utf16Be, [a, b, ..]) => u16::from_be_bytes([*a, *b]) as u32,
            (Encoding::Utf16Le, [a, b, ..]) => u16::from_le_bytes([*a, *b]) as u32,
            (Encoding::Utf32Be, [a, b, c, d, ..]) => u32::from_be_bytes([*a, *b, *c, *d]),
            (Encoding::Utf32Le, [a, b, c, d, ..]) => u32::from_le_bytes([*a, *b, *c, *d]),
            _ => 0,
        }
    }
}

/// What [`detect_encoding`] learned about a buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EncodingInfo {
    /// The most probable encoding, if any.
    pub encoding: Option<Encoding>,
    /// Length of the byte order mark found at the start, 0 if none.
    pub bom_len: usize,
    /// The whole buffer is well-formed UTF-8. Only computed without a BOM.
    pub is_utf8: bool,
    /// Every byte is below 0x80. Only computed without a BOM.
    pub is_ascii: bool,
}

fn encoding_from_bom(bytes: &[u8]) -> Option<Encoding> {
    // UTF-8 first, then UTF-32 so that FF FE 00 00 isn't taken for UTF-16LE.
    [
        Encoding::Utf8,
        Encoding::Utf32Be,
        Encoding::Utf32Le,
        Encoding::Utf16Be,
        Encoding::Utf16Le,
    ]
    .iter()
    .copied()
    .find(|encoding| bytes.starts_with(encoding.bom()))
}

/// Guesses the encoding of `bytes`.
///
/// A byte order mark wins, with precedence UTF-8 over UTF-32 over UTF-16.
/// Otherwise the buffer is tested for strict UTF-8 and for the ASCII subset.
pub fn detect_encoding(bytes: &[u8]) -> EncodingInfo {
    if let Some(encoding) = encoding_from_bom(bytes) {
        tracing::debug!(?encoding, "encoding detected from byte order mark");
        return EncodingInfo {
            encoding: Some(encoding),
            bom_len: encoding.bom().len(),
            is_utf8: false,
            is_ascii: false,
        };
    }
    let is_utf8 = is_utf8(bytes);
    let is_ascii = is_ascii(bytes);
    tracing::debug!(is_utf8, is_ascii, len = bytes.len(), "no byte order mark");
    EncodingInfo {
        encoding: if is_utf8 { Some(Encoding::Utf8) } else { None },
        bom_len: 0,
        is_utf8,
        is_ascii,
    }
}

/// Strict UTF-8 test: no overlongs, surrogates, out of range values or
/// truncated sequences. The empty buffer isn't UTF-8.
pub fn is_utf8(bytes: &[u8]) -> bool {
    if bytes.is_empty() {
        return false;
    }
    let mut state = ACCEPT;
    let mut cp = 0;
    for &byte in bytes {
        state = utf_dfa::utf8_step(state, byte, &mut cp);
        if state == REJECT {
            return false;
        }
    }
    state == ACCEPT
}

/// Whether every byte is ASCII. The empty buffer isn't ASCII.
pub fn is_ascii(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.is_ascii()
}

/// Bytes of one encoded codepoint.
pub type EncodedUnits = SmallVec<[u8; 4]>;

/// Encodes a single codepoint.
pub fn encode(cp: Codepoint, encoding: Encoding) -> EncodedUnits {
    let ch = cp.as_char();
    let mut out = EncodedUnits::new();
    push_encoded(&mut out, ch, encoding);
    out
}

fn push_encoded<E: Extend<u8>>(out: &mut E, ch: char, encoding: Encoding) {
    match encoding {
        Encoding::Utf8 => {
            let mut buf = [0u8; 4];
            out.extend(ch.encode_utf8(&mut buf).bytes());
        }
        Encoding::Utf16Be | Encoding::Utf16Le => {
            let mut buf = [0u16; 2];
            for unit in ch.encode_utf16(&mut buf).iter() {
                if encoding == Encoding::Utf16Be {
                    out.extend(unit.to_be_bytes());
                } else {
                    out.extend(unit.to_le_bytes());
                }
            }
        }
        Encoding::Utf32Be => out.extend((ch as u32).to_be_bytes()),
        Encoding::Utf32Le => out.extend((ch as u32).to_le_bytes()),
    }
}

/// Encodes a whole string, optionally led by a byte order mark.
pub fn encode_str(text: &str, encoding: Encoding, with_bom: bool) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    let estimate = text.chars().count() * encoding.unit_size() + encoding.bom().len();
    out.try_reserve(estimate)?;
    if with_bom {
        out.extend_from_slice(encoding.bom());
    }
    for ch in text.chars() {
        push_encoded(&mut out, ch, encoding);
    }
    Ok(out)
}
