use crate::decoder::Decoder;
use crate::property_vector::PropertyVector;
use crate::provider::PropertyProvider;
use std::fmt;
use std::ops::Range;

/// What the rules decided between two codepoints.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BreakKind {
    /// The codepoints stay together.
    NoBreak,
    /// A break is possible here.
    Allowed,
    /// A break is required here. Only line breaking produces this.
    Mandatory,
}

impl BreakKind {
    /// Allowed or mandatory.
    pub fn is_break(self) -> bool {
        self != BreakKind::NoBreak
    }
}

/// The position after a codepoint and the decision taken there.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Boundary {
    /// Number of codepoints before the boundary.
    pub index: usize,
    /// Byte offset of the boundary in the input.
    pub offset: usize,
    /// The decision.
    pub kind: BreakKind,
}

/// A run of codepoints between two breaks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Codepoint indices covered.
    pub codepoints: Range<usize>,
    /// Byte offsets covered.
    pub bytes: Range<usize>,
}

/// A codepoint read ahead by a segmenter.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Scanned {
    pub(crate) ch: char,
    pub(crate) offset: usize,
    pub(crate) end: usize,
    pub(crate) props: PropertyVector,
}

pub(crate) fn scan<P: PropertyProvider>(provider: &P, decoder: &mut Decoder<'_>) -> Option<Scanned> {
    let (offset, ch) = decoder.next()?;
    Some(Scanned {
        ch,
        offset,
        end: decoder.offset(),
        props: provider.properties(ch),
    })
}

/// Boundaries where a break is allowed or mandatory.
#[derive(Clone)]
pub struct Opportunities<I> {
    inner: I,
}

impl<I> Opportunities<I> {
    pub(crate) fn new(inner: I) -> Self {
        Opportunities { inner }
    }
}

impl<I: Iterator<Item = Boundary>> Iterator for Opportunities<I> {
    type Item = Boundary;

    fn next(&mut self) -> Option<Boundary> {
        self.inner.by_ref().find(|boundary| boundary.kind.is_break())
    }
}

impl<I: Iterator<Item = Boundary> + Clone> fmt::Debug for Opportunities<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opportunities(")?;
        f.debug_list()
            .entries(self.clone().map(|boundary| boundary.index))
            .finish()?;
        write!(f, ")")
    }
}

/// Spans between consecutive breaks.
#[derive(Clone)]
pub struct Clusters<I> {
    inner: I,
    index: usize,
    offset: usize,
}

impl<I> Clusters<I> {
    pub(crate) fn new(inner: I) -> Self {
        Clusters {
            inner,
            index: 0,
            offset: 0,
        }
    }
}

impl<I: Iterator<Item = Boundary>> Iterator for Clusters<I> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let boundary = self.inner.by_ref().find(|boundary| boundary.kind.is_break())?;
        let span = Span {
            codepoints: self.index..boundary.index,
            bytes: self.offset..boundary.offset,
        };
        self.index = boundary.index;
        self.offset = boundary.offset;
        Some(span)
    }
}

impl<I: Iterator<Item = Boundary> + Clone> fmt::Debug for Clusters<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clusters(")?;
        f.debug_list().entries(self.clone().map(|span| span.bytes)).finish()?;
        write!(f, ")")
    }
}
