use crate::character_ty::{
    BidiClass, CaseExpansion, CaseMapping, CharacterRecord, Decomposition, DecompositionMapping,
    DecompositionType, GeneralCategory,
};
use crate::codepoint_ty::is_cjk_ideograph;
use crate::hangul;
use crate::properties_ty::{EastAsianWidth, GraphemeBreak, IndicConjunctBreak, LineBreakClass};
use crate::property_vector::{PropertyId, PropertyRecord, PropertyVector};
use icu_casemap::CaseMapper;
use icu_properties::props as icu;
use icu_properties::{CodePointMapData, CodePointSetData};
use unicode_normalization::IsNormalized;

/// Source of per-codepoint Unicode data.
///
/// This is the seam to the property data store. Every lookup may miss;
/// callers treat a miss as the neutral value of whatever they were looking
/// for (no decomposition, Neutral width, default properties).
pub trait PropertyProvider {
    /// The full record of a codepoint, `None` if it isn't assigned.
    fn character(&self, ch: char) -> Option<CharacterRecord>;

    /// The compact property record, see
    /// [`PropertyVector`](crate::PropertyVector) for its layout.
    fn property_record(&self, ch: char) -> Option<PropertyRecord>;

    /// East_Asian_Width, `None` if the codepoint isn't listed.
    fn east_asian_width(&self, ch: char) -> Option<EastAsianWidth>;

    /// The decomposition mapping, `None` if the codepoint doesn't decompose.
    ///
    /// The mapping may itself contain decomposable codepoints.
    fn decomposition(&self, ch: char) -> Option<Decomposition>;

    /// The primary composite of a pair, excluding composition exclusions.
    fn primary_composite(&self, first: char, second: char) -> Option<char>;

    /// Decoded properties; a missing record decodes to defaults.
    fn properties(&self, ch: char) -> PropertyVector {
        self.property_record(ch)
            .map(|record| PropertyVector::decode(&record))
            .unwrap_or_default()
    }

    /// Canonical_Combining_Class, 0 on a miss.
    fn combining_class(&self, ch: char) -> u8 {
        self.properties(ch).combining_class()
    }

    /// A simple case mapping, `None` when the codepoint maps to itself.
    fn case_mapping(&self, ch: char, mapping: CaseMapping) -> Option<char> {
        self.character(ch)?.case_mapping(mapping)
    }

    /// The full case folding, `None` when the codepoint folds to itself or
    /// the store has no folding data.
    fn case_fold(&self, _ch: char) -> Option<CaseExpansion> {
        None
    }
}

impl<P: PropertyProvider + ?Sized> PropertyProvider for &P {
    fn character(&self, ch: char) -> Option<CharacterRecord> {
        (**self).character(ch)
    }

    fn property_record(&self, ch: char) -> Option<PropertyRecord> {
        (**self).property_record(ch)
    }

    fn east_asian_width(&self, ch: char) -> Option<EastAsianWidth> {
        (**self).east_asian_width(ch)
    }

    fn decomposition(&self, ch: char) -> Option<Decomposition> {
        (**self).decomposition(ch)
    }

    fn primary_composite(&self, first: char, second: char) -> Option<char> {
        (**self).primary_composite(first, second)
    }

    fn properties(&self, ch: char) -> PropertyVector {
        (**self).properties(ch)
    }

    fn combining_class(&self, ch: char) -> u8 {
        (**self).combining_class(ch)
    }

    fn case_mapping(&self, ch: char, mapping: CaseMapping) -> Option<char> {
        (**self).case_mapping(ch, mapping)
    }

    fn case_fold(&self, ch: char) -> Option<CaseExpansion> {
        (**self).case_fold(ch)
    }
}

/// The built-in provider, backed by the Unicode data compiled into
/// `icu_properties` and `unicode-normalization`.
///
/// It carries no state, so constructing one is free.
#[derive(Copy, Clone, Debug, Default)]
pub struct UcdProvider;

impl UcdProvider {
    /// Creates the provider.
    pub const fn new() -> Self {
        UcdProvider
    }
}

fn general_category(ch: char) -> GeneralCategory {
    use icu::GeneralCategory as Gc;
    match CodePointMapData::<Gc>::new().get(ch) {
        Gc::Unassigned => GeneralCategory::Unassigned,
        Gc::UppercaseLetter => GeneralCategory::UppercaseLetter,
        Gc::LowercaseLetter => GeneralCategory::LowercaseLetter,
        Gc::TitlecaseLetter => GeneralCategory::TitlecaseLetter,
        Gc::ModifierLetter => GeneralCategory::ModifierLetter,
        Gc::OtherLetter => GeneralCategory::OtherLetter,
        Gc::NonspacingMark => GeneralCategory::NonspacingMark,
        Gc::SpacingMark => GeneralCategory::SpacingMark,
        Gc::EnclosingMark => GeneralCategory::EnclosingMark,
        Gc::DecimalNumber => GeneralCategory::DecimalNumber,
        Gc::LetterNumber => GeneralCategory::LetterNumber,
        Gc::OtherNumber => GeneralCategory::OtherNumber,
        Gc::SpaceSeparator => GeneralCategory::SpaceSeparator,
        Gc::LineSeparator => GeneralCategory::LineSeparator,
        Gc::ParagraphSeparator => GeneralCategory::ParagraphSeparator,
        Gc::Control => GeneralCategory::Control,
        Gc::Format => GeneralCategory::Format,
        Gc::PrivateUse => GeneralCategory::PrivateUse,
        Gc::Surrogate => GeneralCategory::Surrogate,
        Gc::DashPunctuation => GeneralCategory::DashPunctuation,
        Gc::OpenPunctuation => GeneralCategory::OpenPunctuation,
        Gc::ClosePunctuation => GeneralCategory::ClosePunctuation,
        Gc::ConnectorPunctuation => GeneralCategory::ConnectorPunctuation,
        Gc::InitialPunctuation => GeneralCategory::InitialPunctuation,
        Gc::FinalPunctuation => GeneralCategory::FinalPunctuation,
        Gc::OtherPunctuation => GeneralCategory::OtherPunctuation,
        Gc::MathSymbol => GeneralCategory::MathSymbol,
        Gc::CurrencySymbol => GeneralCategory::CurrencySymbol,
        Gc::ModifierSymbol => GeneralCategory::ModifierSymbol,
        Gc::OtherSymbol => GeneralCategory::OtherSymbol,
    }
}

fn grapheme_break(ch: char) -> GraphemeBreak {
    use icu::GraphemeClusterBreak as Gcb;
    match CodePointMapData::<Gcb>::new().get(ch) {
        Gcb::Control => GraphemeBreak::Control,
        Gcb::CR => GraphemeBreak::Cr,
        Gcb::LF => GraphemeBreak::Lf,
        Gcb::Extend => GraphemeBreak::Extend,
        Gcb::ZWJ => GraphemeBreak::Zwj,
        Gcb::RegionalIndicator => GraphemeBreak::RegionalIndicator,
        Gcb::Prepend => GraphemeBreak::Prepend,
        Gcb::SpacingMark => GraphemeBreak::SpacingMark,
        Gcb::L => GraphemeBreak::L,
        Gcb::V => GraphemeBreak::V,
        Gcb::T => GraphemeBreak::T,
        Gcb::LV => GraphemeBreak::Lv,
        Gcb::LVT => GraphemeBreak::Lvt,
        // E_Base, E_Modifier and Glue_After_Zwj are no longer assigned.
        _ => GraphemeBreak::Other,
    }
}

/// Maps an ICU enumerated property value onto ours, variant by variant.
macro_rules! icu_value {
    ($value:expr, $icu:ty => $ours:ident, { $($from:ident => $to:ident,)+ }, $default:ident) => {
        match $value {
            $(<$icu>::$from => $ours::$to,)+
            _ => $ours::$default,
        }
    };
}

fn line_break(ch: char) -> LineBreakClass {
    let value = CodePointMapData::<icu::LineBreak>::new().get(ch);
    icu_value!(value, icu::LineBreak => LineBreakClass, {
        Ambiguous => Ambiguous,
        Alphabetic => Alphabetic,
        BreakBoth => BreakBoth,
        BreakAfter => BreakAfter,
        BreakBefore => BreakBefore,
        MandatoryBreak => MandatoryBreak,
        ContingentBreak => ContingentBreak,
        ClosePunctuation => ClosePunctuation,
        CombiningMark => CombiningMark,
        CarriageReturn => CarriageReturn,
        Exclamation => Exclamation,
        Glue => Glue,
        Hyphen => Hyphen,
        Ideographic => Ideographic,
        Inseparable => Inseparable,
        InfixNumeric => InfixNumeric,
        LineFeed => LineFeed,
        Nonstarter => Nonstarter,
        Numeric => Numeric,
        OpenPunctuation => OpenPunctuation,
        PostfixNumeric => PostfixNumeric,
        PrefixNumeric => PrefixNumeric,
        Quotation => Quotation,
        ComplexContext => ComplexContext,
        Surrogate => Surrogate,
        Space => Space,
        BreakSymbols => BreakSymbols,
        ZWSpace => ZwSpace,
        NextLine => NextLine,
        WordJoiner => WordJoiner,
        H2 => H2,
        H3 => H3,
        JL => Jl,
        JT => Jt,
        JV => Jv,
        CloseParenthesis => CloseParenthesis,
        ConditionalJapaneseStarter => ConditionalJapaneseStarter,
        HebrewLetter => HebrewLetter,
        RegionalIndicator => RegionalIndicator,
        EBase => EBase,
        EModifier => EModifier,
        ZWJ => Zwj,
        Aksara => Aksara,
        AksaraPrebase => AksaraPrebase,
        AksaraStart => AksaraStart,
        ViramaFinal => ViramaFinal,
        Virama => Virama,
        UnambiguousHyphen => UnambiguousHyphen,
    }, Unknown)
}

fn indic_conjunct_break(ch: char) -> IndicConjunctBreak {
    let value = CodePointMapData::<icu::IndicConjunctBreak>::new().get(ch);
    icu_value!(value, icu::IndicConjunctBreak => IndicConjunctBreak, {
        Consonant => Consonant,
        Extend => Extend,
        Linker => Linker,
    }, None)
}

fn east_asian_width(ch: char) -> EastAsianWidth {
    let value = CodePointMapData::<icu::EastAsianWidth>::new().get(ch);
    icu_value!(value, icu::EastAsianWidth => EastAsianWidth, {
        Ambiguous => Ambiguous,
        Halfwidth => Halfwidth,
        Fullwidth => Fullwidth,
        Narrow => Narrow,
        Wide => Wide,
    }, Neutral)
}

fn bidi_class(ch: char) -> BidiClass {
    let value = CodePointMapData::<icu::BidiClass>::new().get(ch);
    icu_value!(value, icu::BidiClass => BidiClass, {
        RightToLeft => RightToLeft,
        EuropeanNumber => EuropeanNumber,
        EuropeanSeparator => EuropeanSeparator,
        EuropeanTerminator => EuropeanTerminator,
        ArabicNumber => ArabicNumber,
        CommonSeparator => CommonSeparator,
        ParagraphSeparator => ParagraphSeparator,
        SegmentSeparator => SegmentSeparator,
        WhiteSpace => WhiteSpace,
        OtherNeutral => OtherNeutral,
        LeftToRightEmbedding => LeftToRightEmbedding,
        LeftToRightOverride => LeftToRightOverride,
        ArabicLetter => ArabicLetter,
        RightToLeftEmbedding => RightToLeftEmbedding,
        RightToLeftOverride => RightToLeftOverride,
        PopDirectionalFormat => PopDirectionalFormat,
        NonspacingMark => NonspacingMark,
        BoundaryNeutral => BoundaryNeutral,
        FirstStrongIsolate => FirstStrongIsolate,
        LeftToRightIsolate => LeftToRightIsolate,
        RightToLeftIsolate => RightToLeftIsolate,
        PopDirectionalIsolate => PopDirectionalIsolate,
    }, LeftToRight)
}

fn quick_check_flag(result: IsNormalized) -> u8 {
    match result {
        IsNormalized::Yes => 0,
        IsNormalized::No => 1,
        IsNormalized::Maybe => 2,
    }
}

macro_rules! binary_properties {
    ($vector:expr, $ch:expr, { $($id:ident => $prop:ident,)+ }) => {
        $(
            if CodePointSetData::new::<icu::$prop>().contains($ch) {
                $vector.set(PropertyId::$id, 1);
            }
        )+
    };
}

fn decimal_value(ch: char, category: GeneralCategory) -> Option<u8> {
    if category != GeneralCategory::DecimalNumber {
        return None;
    }
    // Decimal digits come in contiguous runs of ten starting at zero.
    let mut start = ch as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if general_category(prev) != GeneralCategory::DecimalNumber {
            break;
        }
        start -= 1;
    }
    Some(((ch as u32 - start) % 10) as u8)
}

fn simple_case(ch: char, mapping: CaseMapping) -> Option<char> {
    let mapper = CaseMapper::new();
    let mapped = match mapping {
        CaseMapping::Upper => mapper.simple_uppercase(ch),
        CaseMapping::Lower => mapper.simple_lowercase(ch),
        CaseMapping::Title => mapper.simple_titlecase(ch),
    };
    if mapped == ch {
        None
    } else {
        Some(mapped)
    }
}

fn ideograph_name(ch: char) -> Option<String> {
    if !is_cjk_ideograph(ch) {
        return None;
    }
    let prefix = match ch as u32 {
        0xF900..=0xFAFF => "CJK COMPATIBILITY IDEOGRAPH",
        0x17000..=0x187FF => "TANGUT IDEOGRAPH",
        _ => "CJK UNIFIED IDEOGRAPH",
    };
    Some(format!("{}-{:04X}", prefix, ch as u32))
}

fn compatibility_kind(ch: char, mapping: &[char]) -> DecompositionType {
    match ch {
        '\u{00A0}' | '\u{0F0C}' | '\u{2007}' | '\u{2011}' | '\u{202F}' => {
            return DecompositionType::NoBreak
        }
        _ => {}
    }
    if mapping.contains(&'\u{2044}') {
        return DecompositionType::Fraction;
    }
    match east_asian_width(ch) {
        EastAsianWidth::Fullwidth => DecompositionType::Wide,
        EastAsianWidth::Halfwidth => DecompositionType::Narrow,
        _ => DecompositionType::Compat,
    }
}

impl PropertyProvider for UcdProvider {
    fn character(&self, ch: char) -> Option<CharacterRecord> {
        let category = general_category(ch);
        if category == GeneralCategory::Unassigned {
            return None;
        }
        let decimal = decimal_value(ch, category);
        Some(CharacterRecord {
            codepoint: ch,
            name: hangul::syllable_name(ch).or_else(|| ideograph_name(ch)),
            category,
            combining_class: unicode_normalization::char::canonical_combining_class(ch),
            bidi_class: bidi_class(ch),
            decomposition_type: self
                .decomposition(ch)
                .map_or(DecompositionType::None, |d| d.kind),
            decimal,
            digit: decimal,
            numeric: decimal.map(|d| d.to_string()),
            mirrored: CodePointSetData::new::<icu::BidiMirrored>().contains(ch),
            uppercase: simple_case(ch, CaseMapping::Upper),
            lowercase: simple_case(ch, CaseMapping::Lower),
            titlecase: simple_case(ch, CaseMapping::Title),
        })
    }

    fn property_record(&self, ch: char) -> Option<PropertyRecord> {
        let mut vector = PropertyVector::default();
        binary_properties!(vector, ch, {
            Alphabetic => Alphabetic,
            Cased => Cased,
            Uppercase => Uppercase,
            Lowercase => Lowercase,
            WhiteSpace => WhiteSpace,
            Dash => Dash,
            Hyphen => Hyphen,
            Math => Math,
            Ideographic => Ideographic,
            Diacritic => Diacritic,
            BidiMirrored => BidiMirrored,
            FullCompositionExclusion => FullCompositionExclusion,
            Emoji => Emoji,
            EmojiPresentation => EmojiPresentation,
            EmojiModifier => EmojiModifier,
            EmojiModifierBase => EmojiModifierBase,
            EmojiComponent => EmojiComponent,
            ExtendedPictographic => ExtendedPictographic,
        });

        let incb = indic_conjunct_break(ch);
        let one = std::iter::once(ch);
        vector
            .set(PropertyId::GeneralCategory, general_category(ch).to_u8())
            .set(
                PropertyId::CombiningClass,
                unicode_normalization::char::canonical_combining_class(ch),
            )
            .set(PropertyId::LineBreak, line_break(ch).to_u8())
            .set(PropertyId::GraphemeClusterBreak, grapheme_break(ch).to_u8())
            .set(PropertyId::IndicConjunctBreak, incb.to_u8())
            .set(PropertyId::EastAsianWidth, east_asian_width(ch).to_u8())
            .set(
                PropertyId::NfdQuickCheck,
                quick_check_flag(unicode_normalization::is_nfd_quick(one.clone())),
            )
            .set(
                PropertyId::NfkdQuickCheck,
                quick_check_flag(unicode_normalization::is_nfkd_quick(one.clone())),
            )
            .set(
                PropertyId::NfcQuickCheck,
                quick_check_flag(unicode_normalization::is_nfc_quick(one.clone())),
            )
            .set(
                PropertyId::NfkcQuickCheck,
                quick_check_flag(unicode_normalization::is_nfkc_quick(one)),
            );
        Some(vector.encode())
    }

    fn east_asian_width(&self, ch: char) -> Option<EastAsianWidth> {
        Some(east_asian_width(ch))
    }

    fn decomposition(&self, ch: char) -> Option<Decomposition> {
        let mut canonical = DecompositionMapping::new();
        unicode_normalization::char::decompose_canonical(ch, |c| canonical.push(c));
        if canonical.as_slice() != [ch] {
            return Some(Decomposition {
                kind: DecompositionType::Canonical,
                mapping: canonical,
            });
        }
        let mut compatible = DecompositionMapping::new();
        unicode_normalization::char::decompose_compatible(ch, |c| compatible.push(c));
        if compatible.as_slice() != [ch] {
            return Some(Decomposition {
                kind: compatibility_kind(ch, &compatible),
                mapping: compatible,
            });
        }
        None
    }

    fn primary_composite(&self, first: char, second: char) -> Option<char> {
        unicode_normalization::char::compose(first, second)
            .filter(|&c| !CodePointSetData::new::<icu::FullCompositionExclusion>().contains(c))
    }

    fn combining_class(&self, ch: char) -> u8 {
        unicode_normalization::char::canonical_combining_class(ch)
    }

    fn case_mapping(&self, ch: char, mapping: CaseMapping) -> Option<char> {
        simple_case(ch, mapping)
    }

    fn case_fold(&self, ch: char) -> Option<CaseExpansion> {
        let mut buf = [0; 4];
        let source = ch.encode_utf8(&mut buf);
        let folded = CaseMapper::new().fold_string(source);
        if *folded == *source {
            None
        } else {
            Some(folded.chars().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PropertyProvider, UcdProvider};
    use crate::character_ty::{BidiClass, CaseMapping, DecompositionType, GeneralCategory};
    use crate::normalization::NormalizationForm;
    use crate::properties_ty::{
        EastAsianWidth, GraphemeBreak, IndicConjunctBreak, LineBreakClass, QuickCheck,
    };
    use crate::property_vector::PropertyId;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_character_record() {
        let record = UcdProvider.character('A').unwrap();
        assert_eq!(record.category, GeneralCategory::UppercaseLetter);
        assert_eq!(record.combining_class, 0);
        assert_eq!(record.bidi_class, BidiClass::LeftToRight);
        assert_eq!(record.lowercase, Some('a'));
        assert_eq!(record.uppercase, None);
        assert_eq!(record.titlecase, None);
        assert!(!record.mirrored);

        let record = UcdProvider.character('\u{0301}').unwrap();
        assert_eq!(record.category, GeneralCategory::NonspacingMark);
        assert_eq!(record.combining_class, 230);

        assert_eq!(UcdProvider.character('\u{0627}').unwrap().bidi_class, BidiClass::ArabicLetter);
        assert_eq!(UcdProvider.character('1').unwrap().bidi_class, BidiClass::EuropeanNumber);
        assert_eq!(
            UcdProvider.character('\u{2067}').unwrap().bidi_class,
            BidiClass::RightToLeftIsolate
        );
        assert!(UcdProvider.character('(').unwrap().mirrored);
        assert_eq!(UcdProvider.character('\u{0378}'), None);
    }

    #[test]
    fn test_numeric_fields() {
        assert_eq!(UcdProvider.character('7').unwrap().decimal, Some(7));
        assert_eq!(UcdProvider.character('\u{0669}').unwrap().decimal, Some(9));
        // MATHEMATICAL BOLD DIGIT ZERO..NINE are followed by more digit runs.
        assert_eq!(UcdProvider.character('\u{1D7D9}').unwrap().decimal, Some(1));
        assert_eq!(UcdProvider.character('x').unwrap().numeric, None);
    }

    #[test]
    fn test_titlecase_digraphs() {
        assert_eq!(UcdProvider.character('\u{01C6}').unwrap().titlecase, Some('\u{01C5}'));
        assert_eq!(UcdProvider.character('\u{01C4}').unwrap().titlecase, Some('\u{01C5}'));
        assert_eq!(UcdProvider.character('\u{01C5}').unwrap().titlecase, None);
        assert_eq!(UcdProvider.character('a').unwrap().titlecase, Some('A'));
        assert_eq!(UcdProvider.character('\u{1F80}').unwrap().titlecase, Some('\u{1F88}'));
        assert_eq!(UcdProvider.character('\u{10D0}').unwrap().titlecase, None);
    }

    #[test]
    fn test_simple_mappings_of_expanding_characters() {
        let record = UcdProvider.character('\u{1F80}').unwrap();
        assert_eq!(record.uppercase, Some('\u{1F88}'));
        assert_eq!(UcdProvider.character('\u{1FB3}').unwrap().uppercase, Some('\u{1FBC}'));
        assert_eq!(UcdProvider.character('\u{0130}').unwrap().lowercase, Some('i'));
        assert_eq!(UcdProvider.character('\u{00DF}').unwrap().uppercase, None);
    }

    #[test]
    fn test_case_fold() {
        assert_eq!(UcdProvider.case_fold('a'), None);
        assert_eq!(UcdProvider.case_fold('A').as_deref(), Some(&['a'][..]));
        assert_eq!(UcdProvider.case_fold('\u{13F8}').as_deref(), Some(&['\u{13F0}'][..]));
        assert_eq!(UcdProvider.case_fold('\u{1E9E}').as_deref(), Some(&['s', 's'][..]));
    }

    #[test]
    fn test_names() {
        assert_eq!(
            UcdProvider.character('\u{AC01}').unwrap().name.as_deref(),
            Some("HANGUL SYLLABLE GAG")
        );
        assert_eq!(
            UcdProvider.character('中').unwrap().name.as_deref(),
            Some("CJK UNIFIED IDEOGRAPH-4E2D")
        );
        assert_eq!(UcdProvider.character('A').unwrap().name, None);
    }

    #[test]
    fn test_properties() {
        let props = UcdProvider.properties('A');
        assert!(props.has(PropertyId::Cased));
        assert!(props.has(PropertyId::Uppercase));
        assert!(props.has(PropertyId::Alphabetic));
        assert_eq!(props.line_break(), LineBreakClass::Alphabetic);
        assert_eq!(props.grapheme_break(), GraphemeBreak::Other);
        assert_eq!(UcdProvider.properties('-').line_break(), LineBreakClass::Hyphen);
        assert_eq!(
            UcdProvider.properties('\u{2010}').line_break(),
            LineBreakClass::UnambiguousHyphen
        );

        let props = UcdProvider.properties('\u{1F600}');
        assert!(props.has(PropertyId::ExtendedPictographic));
        assert!(props.has(PropertyId::EmojiPresentation));
        assert_eq!(props.east_asian_width(), EastAsianWidth::Wide);

        assert_eq!(UcdProvider.east_asian_width('A'), Some(EastAsianWidth::Narrow));
        assert_eq!(UcdProvider.east_asian_width('\u{00A1}'), Some(EastAsianWidth::Ambiguous));
        assert_eq!(UcdProvider.east_asian_width('\u{FF21}'), Some(EastAsianWidth::Fullwidth));
        assert_eq!(UcdProvider.east_asian_width('\u{FF61}'), Some(EastAsianWidth::Halfwidth));
        assert_eq!(UcdProvider.east_asian_width('\u{05D0}'), Some(EastAsianWidth::Neutral));
        assert_eq!(UcdProvider.properties('\u{4E00}').line_break(), LineBreakClass::Ideographic);
        assert_eq!(UcdProvider.properties('\u{200B}').line_break(), LineBreakClass::ZwSpace);
        assert_eq!(UcdProvider.properties('\u{1100}').line_break(), LineBreakClass::Jl);

        assert_eq!(UcdProvider.properties('\r').grapheme_break(), GraphemeBreak::Cr);
        assert_eq!(UcdProvider.properties('\u{200D}').grapheme_break(), GraphemeBreak::Zwj);
        assert_eq!(
            UcdProvider.properties('\u{0915}').indic_conjunct_break(),
            IndicConjunctBreak::Consonant
        );
        assert_eq!(
            UcdProvider.properties('\u{094D}').indic_conjunct_break(),
            IndicConjunctBreak::Linker
        );
        assert_eq!(
            UcdProvider.properties('\u{0301}').indic_conjunct_break(),
            IndicConjunctBreak::Extend
        );
        assert_eq!(UcdProvider.properties('a').indic_conjunct_break(), IndicConjunctBreak::None);
    }

    #[test]
    fn test_quick_check_flags() {
        let props = UcdProvider.properties('\u{00C5}');
        assert_eq!(props.quick_check(NormalizationForm::Nfd), QuickCheck::No);
        assert_eq!(props.quick_check(NormalizationForm::Nfc), QuickCheck::Yes);
        let props = UcdProvider.properties('\u{0301}');
        assert_eq!(props.quick_check(NormalizationForm::Nfc), QuickCheck::Maybe);
        let props = UcdProvider.properties('\u{FB01}');
        assert_eq!(props.quick_check(NormalizationForm::Nfkc), QuickCheck::No);
        assert_eq!(props.quick_check(NormalizationForm::Nfc), QuickCheck::Yes);
    }

    #[test]
    fn test_decomposition() {
        let d = UcdProvider.decomposition('\u{00C5}').unwrap();
        assert_eq!(d.kind, DecompositionType::Canonical);
        assert_eq!(d.mapping.as_slice(), &['A', '\u{030A}']);
        let d = UcdProvider.decomposition('\u{FF21}').unwrap();
        assert_eq!(d.kind, DecompositionType::Wide);
        assert_eq!(d.mapping.as_slice(), &['A']);
        let d = UcdProvider.decomposition('\u{00BD}').unwrap();
        assert_eq!(d.kind, DecompositionType::Fraction);
        assert_eq!(UcdProvider.decomposition('\u{00A0}').unwrap().kind, DecompositionType::NoBreak);
        assert_eq!(UcdProvider.decomposition('a'), None);
    }

    #[test]
    fn test_case_mapping_matches_record() {
        for ch in ['a', 'Z', '\u{01C6}', '\u{03C3}', '1', '\u{00DF}', '\u{1F80}', '\u{0130}'] {
            let record = UcdProvider.character(ch).unwrap();
            for mapping in [CaseMapping::Upper, CaseMapping::Lower, CaseMapping::Title] {
                assert_eq!(
                    UcdProvider.case_mapping(ch, mapping),
                    record.case_mapping(mapping),
                    "{:?} {:?}",
                    ch,
                    mapping
                );
            }
        }
    }

    #[test]
    fn test_primary_composite() {
        assert_eq!(UcdProvider.primary_composite('A', '\u{030A}'), Some('\u{00C5}'));
        assert_eq!(UcdProvider.primary_composite('a', 'b'), None);
        // U+0958 DEVANAGARI LETTER QA is excluded from composition.
        assert_eq!(UcdProvider.primary_composite('\u{0915}', '\u{093C}'), None);
    }
}
