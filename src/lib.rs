#![deny(unsafe_code)]
#![deny(missing_docs, missing_debug_implementations)]
//! Streaming Unicode text processing.
//!
//! Input is a byte buffer in UTF-8, UTF-16 or UTF-32 (either byte order),
//! wrapped in a [`Text`]. It is decoded incrementally, one code unit at a
//! time, and never rejected: every ill-formed subsequence becomes a single
//! U+FFFD. On top of the decoded codepoints the crate offers
//!
//! * normalization to NFD, NFKD, NFC and NFKC, and quick-check scanning,
//! * extended grapheme cluster boundaries (UAX #29),
//! * line break opportunities (UAX #14),
//! * case conversion with special casing, title-casing and folding,
//! * terminal display width with a policy for ambiguous-width characters,
//! * single codepoint lookups: character records, binary and enumerated
//!   properties, emoji properties, Hangul syllable names, blocks,
//! * text filtering: NFC, space clean-up, control stripping, ASCII digits.
//!
//! Everything goes through an [`Engine`], which owns a
//! [`PropertyProvider`] and a [`Config`]. The default provider,
//! [`UcdProvider`], serves the Unicode data compiled into `icu_properties`
//! and `unicode-normalization`, so constructing an engine costs nothing.
//!
//! # Segmentation
//!
//! [`Graphemes`] and [`LineBreaks`] are iterators yielding one [`Boundary`]
//! after every codepoint. The last boundary is the end of text, after which
//! the iterator is exhausted. `opportunities()` keeps the breaks only, and
//! [`Graphemes::clusters`] turns them into spans.
//!
//! # Codepoints
//!
//! Operations taking a single codepoint take a [`Codepoint`], which can't
//! hold a surrogate, a noncharacter or a value above U+10FFFF.

#[macro_use]
mod macros;

pub(crate) mod tables;

pub(crate) mod error;

pub(crate) mod codepoint_ty;

pub(crate) mod utf_dfa;

pub(crate) mod encoding;

pub(crate) mod decoder;

pub(crate) mod text_ty;

pub(crate) mod character_ty;

pub(crate) mod properties_ty;

pub(crate) mod property_vector;

pub(crate) mod provider;

pub(crate) mod hangul;

pub(crate) mod normalization;

pub(crate) mod quick_check;

pub(crate) mod boundary_ty;

pub(crate) mod sequence_tracker;

pub(crate) mod grapheme_break;

pub(crate) mod line_break;

pub(crate) mod case;

pub(crate) mod display_width;

pub(crate) mod filter;

pub(crate) mod config;

pub(crate) mod engine;

pub use error::{Error, Result};

pub use codepoint_ty::{
    is_valid, Block, Codepoint, Plane, CODEPOINT_MAX, REPLACEMENT_CHARACTER, UNICODE_VERSION,
};

pub use encoding::{
    detect_encoding, encode, encode_str, is_ascii, is_utf8, EncodedUnits, Encoding, EncodingInfo,
};

pub use decoder::{codepoint_count, DecodeState, DecodeStep, Decoder, Feed};

pub use text_ty::Text;

pub use character_ty::{
    BidiClass, CaseExpansion, CaseMapping, CharacterRecord, Decomposition, DecompositionMapping,
    DecompositionType, GeneralCategory,
};

pub use properties_ty::{EastAsianWidth, GraphemeBreak, IndicConjunctBreak, LineBreakClass, QuickCheck};

pub use property_vector::{EmojiProperties, PropertyId, PropertyRecord, PropertyVector, PROPERTY_COUNT};

pub use provider::{PropertyProvider, UcdProvider};

pub use normalization::NormalizationForm;

pub use boundary_ty::{Boundary, BreakKind, Clusters, Opportunities, Span};

pub use grapheme_break::Graphemes;

pub use line_break::LineBreaks;

pub use case::CaseMode;

pub use display_width::AmbiguousWidth;

pub use filter::Filter;

pub use config::Config;

pub use engine::Engine;
