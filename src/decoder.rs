use crate::codepoint_ty::REPLACEMENT_CHARACTER;
use crate::encoding::Encoding;
use crate::utf_dfa::{self, ACCEPT, REJECT};
use std::fmt;

/// Result of feeding one code unit to a [`DecodeState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecodeStep {
    /// A codepoint was completed.
    Codepoint(char),
    /// The unit was absorbed; nothing to emit yet.
    Incomplete,
    /// A NUL unit ended the text.
    End,
    /// An ill-formed subsequence ended; emit the replacement character.
    Error(char),
}

/// Whether the unit given to [`DecodeState::step`] must be fed again.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Feed {
    /// The unit was used up.
    Consumed,
    /// The unit ended a broken sequence but starts a new one by itself.
    Repeat,
}

/// The accumulator of an incremental decoder.
///
/// One ill-formed subsequence yields exactly one replacement character: the
/// first rejected unit reports [`DecodeStep::Error`], the following ones are
/// swallowed until a codepoint completes. A rejected unit that could begin
/// a sequence of its own is handed back with [`Feed::Repeat`] so that it
/// isn't lost.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodeState {
    encoding: Encoding,
    state: u8,
    codepoint: u32,
    consumed: u8,
    in_error: bool,
    allow_embedded_nulls: bool,
}

impl DecodeState {
    /// A fresh state for `encoding`.
    pub fn new(encoding: Encoding) -> Self {
        DecodeState {
            encoding,
            state: ACCEPT,
            codepoint: 0,
            consumed: 0,
            in_error: false,
            allow_embedded_nulls: false,
        }
    }

    /// Treat U+0000 as an ordinary codepoint instead of end of text.
    pub fn allow_embedded_nulls(mut self, allow: bool) -> Self {
        self.allow_embedded_nulls = allow;
        self
    }

    /// The encoding being decoded.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// A multi-unit sequence is in progress.
    pub fn is_pending(&self) -> bool {
        self.state != ACCEPT && self.state != REJECT
    }

    /// Units consumed by the sequence in progress.
    pub fn consumed(&self) -> usize {
        self.consumed as usize
    }

    /// Feeds one code unit: a byte for UTF-8, a 16-bit unit for UTF-16 and a
    /// 32-bit unit for UTF-32.
    pub fn step(&mut self, unit: u32) -> (DecodeStep, Feed) {
        let prev_state = self.state;
        if unit == 0 && !self.allow_embedded_nulls {
            if self.is_pending() {
                // Report the broken sequence first, then meet the NUL again.
                self.reset();
                return (DecodeStep::Error(REPLACEMENT_CHARACTER), Feed::Repeat);
            }
            return (DecodeStep::End, Feed::Consumed);
        }

        let (next, starter) = match self.encoding {
            Encoding::Utf8 => {
                let byte = unit as u8;
                (
                    utf_dfa::utf8_step(self.state, byte, &mut self.codepoint),
                    utf_dfa::utf8_is_starter(byte),
                )
            }
            Encoding::Utf16Be | Encoding::Utf16Le => {
                let unit = unit as u16;
                (
                    utf_dfa::utf16_step(self.state, unit, &mut self.codepoint),
                    utf_dfa::utf16_is_starter(unit),
                )
            }
            Encoding::Utf32Be | Encoding::Utf32Le => {
                (utf_dfa::utf32_step(unit, &mut self.codepoint), false)
            }
        };
        self.state = next;

        match next {
            ACCEPT => {
                self.in_error = false;
                self.consumed = 0;
                match char::from_u32(self.codepoint) {
                    Some(ch) => (DecodeStep::Codepoint(ch), Feed::Consumed),
                    None => (DecodeStep::Error(REPLACEMENT_CHARACTER), Feed::Consumed),
                }
            }
            REJECT => {
                let reprocess = prev_state != ACCEPT && starter;
                self.reset();
                tracing::trace!(unit, reprocess, in_error = self.in_error, "ill-formed unit");
                let feed = if reprocess { Feed::Repeat } else { Feed::Consumed };
                if self.in_error {
                    if reprocess {
                        self.in_error = false;
                    }
                    return (DecodeStep::Incomplete, feed);
                }
                self.in_error = !reprocess;
                (DecodeStep::Error(REPLACEMENT_CHARACTER), feed)
            }
            _ => {
                self.consumed = self.consumed.saturating_add(1);
                (DecodeStep::Incomplete, Feed::Consumed)
            }
        }
    }

    /// Ends the input. A sequence still pending yields one replacement.
    pub fn finish(&mut self) -> Option<char> {
        let pending = self.is_pending();
        self.reset();
        self.in_error = false;
        if pending {
            Some(REPLACEMENT_CHARACTER)
        } else {
            None
        }
    }

    /// A code unit was cut short by the end of input.
    pub(crate) fn truncated_unit(&mut self) -> Option<char> {
        let pending = self.is_pending();
        let in_error = self.in_error;
        self.reset();
        self.in_error = false;
        if pending || !in_error {
            Some(REPLACEMENT_CHARACTER)
        } else {
            None
        }
    }

    fn reset(&mut self) {
        self.state = ACCEPT;
        self.codepoint = 0;
        self.consumed = 0;
    }
}

impl fmt::Debug for DecodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeState")
            .field("encoding", &self.encoding)
            .field("pending", &self.is_pending())
            .field("consumed", &self.consumed)
            .field("in_error", &self.in_error)
            .finish()
    }
}

/// Iterator over the codepoints of an encoded buffer, with the byte offset
/// at which each one starts.
///
/// Ill-formed input comes out as U+FFFD; the iterator never fails.
#[derive(Clone)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
    start: usize,
    state: DecodeState,
    done: bool,
}

impl<'a> Decoder<'a> {
    /// Decodes `bytes` from the start. A byte order mark is not skipped.
    pub fn new(bytes: &'a [u8], encoding: Encoding) -> Self {
        Decoder::with_state(bytes, DecodeState::new(encoding))
    }

    /// Decodes `bytes` with a preconfigured state.
    pub fn with_state(bytes: &'a [u8], state: DecodeState) -> Self {
        Decoder {
            bytes,
            pos: 0,
            start: 0,
            state,
            done: false,
        }
    }

    /// Byte offset of the next unit to be read.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The undecoded remainder of the input.
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos.min(self.bytes.len())..]
    }

    fn finish(&mut self) -> Option<(usize, char)> {
        self.done = true;
        self.state.finish().map(|ch| (self.start, ch))
    }
}

impl<'a> Iterator for Decoder<'a> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<(usize, char)> {
        if self.done {
            return None;
        }
        let unit_size = self.state.encoding().unit_size();
        loop {
            if self.pos >= self.bytes.len() {
                return self.finish();
            }
            if self.bytes.len() - self.pos < unit_size {
                let start = if self.state.is_pending() {
                    self.start
                } else {
                    self.pos
                };
                self.pos = self.bytes.len();
                self.done = true;
                return self.state.truncated_unit().map(|ch| (start, ch));
            }
            if !self.state.is_pending() {
                self.start = self.pos;
            }
            let unit = self
                .state
                .encoding()
                .read_unit(&self.bytes[self.pos..self.pos + unit_size]);
            let (step, feed) = self.state.step(unit);
            if feed == Feed::Consumed {
                self.pos += unit_size;
            }
            match step {
                DecodeStep::Codepoint(ch) => return Some((self.start, ch)),
                DecodeStep::Error(ch) => return Some((self.start, ch)),
                DecodeStep::Incomplete => continue,
                DecodeStep::End => {
                    self.done = true;
                    return None;
                }
            }
        }
    }
}

impl fmt::Debug for Decoder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decoder(")?;
        f.debug_list().entries(self.clone().map(|(_, ch)| ch)).finish()?;
        write!(f, ")")
    }
}

/// Number of codepoints `bytes` decodes to, counting each replacement once.
pub fn codepoint_count(bytes: &[u8], encoding: Encoding) -> usize {
    Decoder::new(bytes, encoding).count()
}
