use crate::case::{convert_case, CaseMode};
use crate::character_ty::{CaseMapping, CharacterRecord};
use crate::codepoint_ty::Codepoint;
use crate::config::Config;
use crate::decoder::Decoder;
use crate::display_width::display_width;
use crate::error::Error;
use crate::filter::{filter_text, Filter};
use crate::grapheme_break::Graphemes;
use crate::line_break::LineBreaks;
use crate::normalization::{normalize, NormalizationForm};
use crate::properties_ty::QuickCheck;
use crate::property_vector::{EmojiProperties, PropertyId, PropertyVector};
use crate::provider::{PropertyProvider, UcdProvider};
use crate::quick_check;
use crate::text_ty::Text;

/// A text processing context: a property provider and a [`Config`].
///
/// Every operation takes its input as anything convertible into a
/// [`Text`], so `&str` works directly and other encodings go through
/// [`Text::new`] or [`Text::detect`]. Ill-formed input is decoded with
/// U+FFFD substitutions; the only errors are failed allocations.
#[derive(Clone, Debug)]
pub struct Engine<P = UcdProvider> {
    provider: P,
    config: Config,
}

impl Engine<UcdProvider> {
    /// An engine over the compiled-in Unicode data with default settings.
    pub fn new() -> Result<Self, Error> {
        Ok(Engine::with_provider(UcdProvider::new(), Config::default()))
    }

    /// Like [`new`](Self::new), configured from the environment.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Engine::with_provider(UcdProvider::new(), Config::from_env()))
    }
}

impl<P: PropertyProvider> Engine<P> {
    /// An engine over a custom data store.
    pub fn with_provider(provider: P, config: Config) -> Self {
        tracing::debug!(?config, "text engine ready");
        Engine { provider, config }
    }

    /// The data store.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The settings.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the settings.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Codepoints of `text` with their byte offsets.
    pub fn decode<'a>(&self, text: impl Into<Text<'a>>) -> Decoder<'a> {
        text.into().decoder(self.config.allow_embedded_nulls)
    }

    /// Normalizes `text` to `form`.
    pub fn normalize<'a>(&self, text: impl Into<Text<'a>>, form: NormalizationForm) -> Result<String, Error> {
        normalize(&self.provider, self.decode(text), form)
    }

    /// One pass over the quick-check flags. `Maybe` needs a full pass to
    /// settle, see [`is_normalized`](Self::is_normalized).
    pub fn quick_check<'a>(&self, text: impl Into<Text<'a>>, form: NormalizationForm) -> QuickCheck {
        quick_check::quick_check(&self.provider, self.decode(text), form)
    }

    /// Whether normalizing `text` to `form` would leave it unchanged.
    pub fn is_normalized<'a>(&self, text: impl Into<Text<'a>>, form: NormalizationForm) -> Result<bool, Error> {
        quick_check::is_normalized(&self.provider, self.decode(text), form)
    }

    /// Grapheme cluster boundaries of `text`.
    pub fn graphemes<'a>(&'a self, text: impl Into<Text<'a>>) -> Graphemes<'a, P> {
        Graphemes::new(&self.provider, self.decode(text))
    }

    /// Line break opportunities of `text`.
    pub fn line_breaks<'a>(&'a self, text: impl Into<Text<'a>>) -> LineBreaks<'a, P> {
        LineBreaks::new(&self.provider, self.decode(text))
    }

    /// Converts the case of `text`.
    pub fn convert_case<'a>(&self, text: impl Into<Text<'a>>, mode: CaseMode) -> Result<String, Error> {
        convert_case(&self.provider, self.decode(text), mode)
    }

    fn simple_case(&self, cp: Codepoint, mapping: CaseMapping) -> Codepoint {
        self.provider
            .case_mapping(cp.as_char(), mapping)
            .and_then(|ch| Codepoint::try_from(ch).ok())
            .unwrap_or(cp)
    }

    /// Simple uppercase mapping.
    pub fn to_upper(&self, cp: Codepoint) -> Codepoint {
        self.simple_case(cp, CaseMapping::Upper)
    }

    /// Simple lowercase mapping.
    pub fn to_lower(&self, cp: Codepoint) -> Codepoint {
        self.simple_case(cp, CaseMapping::Lower)
    }

    /// Simple titlecase mapping.
    pub fn to_title(&self, cp: Codepoint) -> Codepoint {
        self.simple_case(cp, CaseMapping::Title)
    }

    /// Terminal columns `text` occupies under the configured ambiguous-width
    /// policy.
    pub fn display_width<'a>(&self, text: impl Into<Text<'a>>) -> usize {
        display_width(&self.provider, self.decode(text), self.config.ambiguous_width)
    }

    /// Applies the clean-up steps in `filter`.
    pub fn filter<'a>(&self, text: impl Into<Text<'a>>, filter: Filter) -> Result<String, Error> {
        filter_text(&self.provider, self.decode(text), filter)
    }

    /// The character record of `cp`, `None` if it's unassigned.
    pub fn character(&self, cp: Codepoint) -> Option<CharacterRecord> {
        self.provider.character(cp.as_char())
    }

    /// All properties of `cp`.
    pub fn properties(&self, cp: Codepoint) -> PropertyVector {
        self.provider.properties(cp.as_char())
    }

    /// Whether `cp` is a nonspacing or spacing combining mark.
    pub fn is_combining(&self, cp: Codepoint) -> bool {
        self.properties(cp).general_category().is_combining()
    }

    /// The value of a property, `None` when false or at its default.
    pub fn has_property(&self, cp: Codepoint, id: PropertyId) -> Option<u8> {
        let props = self.properties(cp);
        if props.has(id) {
            Some(props.get(id))
        } else {
            None
        }
    }

    /// The emoji properties of `cp`.
    pub fn emoji_properties(&self, cp: Codepoint) -> EmojiProperties {
        self.properties(cp).emoji_properties()
    }
}
