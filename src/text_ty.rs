use crate::decoder::{DecodeState, Decoder};
use crate::encoding::{detect_encoding, Encoding};

/// Encoded input: a byte buffer together with its encoding.
///
/// `&str`, `&String` and `&[u8]` convert into UTF-8 text. Byte offsets
/// reported for a text count from the start of [`bytes`](Self::bytes).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Text<'a> {
    bytes: &'a [u8],
    encoding: Encoding,
}

impl<'a> Text<'a> {
    /// Text in a known encoding. A byte order mark is kept and decodes as
    /// U+FEFF.
    pub fn new(bytes: &'a [u8], encoding: Encoding) -> Self {
        Text { bytes, encoding }
    }

    /// Sniffs the encoding and strips a byte order mark if present. Without
    /// one, UTF-8 is assumed.
    pub fn detect(bytes: &'a [u8]) -> Self {
        let info = detect_encoding(bytes);
        Text {
            bytes: &bytes[info.bom_len.min(bytes.len())..],
            encoding: info.encoding.unwrap_or(Encoding::Utf8),
        }
    }

    /// The encoded bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Their encoding.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub(crate) fn decoder(self, allow_embedded_nulls: bool) -> Decoder<'a> {
        let state = DecodeState::new(self.encoding).allow_embedded_nulls(allow_embedded_nulls);
        Decoder::with_state(self.bytes, state)
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(text: &'a str) -> Self {
        Text::new(text.as_bytes(), Encoding::Utf8)
    }
}

impl<'a> From<&'a String> for Text<'a> {
    fn from(text: &'a String) -> Self {
        Text::new(text.as_bytes(), Encoding::Utf8)
    }
}

impl<'a> From<&'a [u8]> for Text<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Text::new(bytes, Encoding::Utf8)
    }
}
