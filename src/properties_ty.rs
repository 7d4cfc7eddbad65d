u8_enum! {
    /// The Line_Break property (UAX #14 classes).
    pub enum LineBreakClass {
        /// XX: unknown
        Unknown = 0 => "XX",
        /// AI: ambiguous (alphabetic or ideographic)
        Ambiguous = 1 => "AI",
        /// AL: alphabetic
        Alphabetic = 2 => "AL",
        /// B2: break opportunity before and after
        BreakBoth = 3 => "B2",
        /// BA: break after
        BreakAfter = 4 => "BA",
        /// BB: break before
        BreakBefore = 5 => "BB",
        /// BK: mandatory break
        MandatoryBreak = 6 => "BK",
        /// CB: contingent break opportunity
        ContingentBreak = 7 => "CB",
        /// CL: close punctuation
        ClosePunctuation = 8 => "CL",
        /// CM: combining mark
        CombiningMark = 9 => "CM",
        /// CR: carriage return
        CarriageReturn = 10 => "CR",
        /// EX: exclamation or interrogation
        Exclamation = 11 => "EX",
        /// GL: non-breaking glue
        Glue = 12 => "GL",
        /// HY: hyphen
        Hyphen = 13 => "HY",
        /// ID: ideographic
        Ideographic = 14 => "ID",
        /// IN: inseparable
        Inseparable = 15 => "IN",
        /// IS: infix numeric separator
        InfixNumeric = 16 => "IS",
        /// LF: line feed
        LineFeed = 17 => "LF",
        /// NS: nonstarter
        Nonstarter = 18 => "NS",
        /// NU: numeric
        Numeric = 19 => "NU",
        /// OP: open punctuation
        OpenPunctuation = 20 => "OP",
        /// PO: postfix numeric
        PostfixNumeric = 21 => "PO",
        /// PR: prefix numeric
        PrefixNumeric = 22 => "PR",
        /// QU: quotation
        Quotation = 23 => "QU",
        /// SA: complex context dependent (South East Asian)
        ComplexContext = 24 => "SA",
        /// SG: surrogate
        Surrogate = 25 => "SG",
        /// SP: space
        Space = 26 => "SP",
        /// SY: symbols allowing break after
        BreakSymbols = 27 => "SY",
        /// ZW: zero width space
        ZwSpace = 28 => "ZW",
        /// NL: next line
        NextLine = 29 => "NL",
        /// WJ: word joiner
        WordJoiner = 30 => "WJ",
        /// H2: Hangul LV syllable
        H2 = 31 => "H2",
        /// H3: Hangul LVT syllable
        H3 = 32 => "H3",
        /// JL: Hangul leading jamo
        Jl = 33 => "JL",
        /// JT: Hangul trailing jamo
        Jt = 34 => "JT",
        /// JV: Hangul vowel jamo
        Jv = 35 => "JV",
        /// CP: close parenthesis
        CloseParenthesis = 36 => "CP",
        /// CJ: conditional Japanese starter
        ConditionalJapaneseStarter = 37 => "CJ",
        /// HL: Hebrew letter
        HebrewLetter = 38 => "HL",
        /// RI: regional indicator
        RegionalIndicator = 39 => "RI",
        /// EB: emoji base
        EBase = 40 => "EB",
        /// EM: emoji modifier
        EModifier = 41 => "EM",
        /// ZWJ: zero width joiner
        Zwj = 42 => "ZWJ",
        /// AK: aksara
        Aksara = 43 => "AK",
        /// AP: aksara pre-base
        AksaraPrebase = 44 => "AP",
        /// AS: aksara start
        AksaraStart = 45 => "AS",
        /// VF: virama final
        ViramaFinal = 46 => "VF",
        /// VI: virama
        Virama = 47 => "VI",
        /// HH: unambiguous hyphen
        UnambiguousHyphen = 48 => "HH",
    }
}

u8_enum! {
    /// The Grapheme_Cluster_Break property (UAX #29).
    pub enum GraphemeBreak {
        /// Any
        Other = 0 => "XX",
        /// CN
        Control = 1 => "CN",
        /// CR
        Cr = 2 => "CR",
        /// LF
        Lf = 3 => "LF",
        /// EX
        Extend = 4 => "EX",
        /// ZWJ
        Zwj = 5 => "ZWJ",
        /// RI
        RegionalIndicator = 6 => "RI",
        /// PP
        Prepend = 7 => "PP",
        /// SM
        SpacingMark = 8 => "SM",
        /// L
        L = 9 => "L",
        /// V
        V = 10 => "V",
        /// T
        T = 11 => "T",
        /// LV
        Lv = 12 => "LV",
        /// LVT
        Lvt = 13 => "LVT",
    }
}

u8_enum! {
    /// The Indic_Conjunct_Break property.
    pub enum IndicConjunctBreak {
        /// Not part of a conjunct.
        None = 0 => "None",
        /// A consonant that can be linked.
        Consonant = 1 => "Consonant",
        /// Extends a conjunct without linking.
        Extend = 2 => "Extend",
        /// A virama that links two consonants.
        Linker = 3 => "Linker",
    }
}

u8_enum! {
    /// The East_Asian_Width property (UAX #11).
    pub enum EastAsianWidth {
        /// N
        Neutral = 0 => "N",
        /// A
        Ambiguous = 1 => "A",
        /// H
        Halfwidth = 2 => "H",
        /// F
        Fullwidth = 3 => "F",
        /// Na
        Narrow = 4 => "Na",
        /// W
        Wide = 5 => "W",
    }
}

impl EastAsianWidth {
    /// F, W and H: the `$EastAsian` set of the line breaking rules.
    pub fn is_east_asian(self) -> bool {
        matches!(
            self,
            EastAsianWidth::Fullwidth | EastAsianWidth::Wide | EastAsianWidth::Halfwidth
        )
    }
}

u8_enum! {
    /// A quick-check answer.
    pub enum QuickCheck {
        /// The text is normalized.
        Yes = 0 => "Y",
        /// The text is not normalized.
        No = 1 => "N",
        /// The answer needs a full normalization pass.
        Maybe = 2 => "M",
    }
}

#[cfg(test)]
mod tests {
    use super::{EastAsianWidth, GraphemeBreak, IndicConjunctBreak, LineBreakClass, QuickCheck};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_break_discriminants_are_dense() {
        for (i, &class) in LineBreakClass::ALL.iter().enumerate() {
            assert_eq!(class.to_u8() as usize, i);
            assert_eq!(LineBreakClass::from_u8(i as u8), Some(class));
        }
        assert_eq!(LineBreakClass::from_u8(49), None);
    }

    #[test]
    fn test_short_names() {
        assert_eq!(LineBreakClass::Zwj.short_name(), "ZWJ");
        assert_eq!(LineBreakClass::UnambiguousHyphen.short_name(), "HH");
        assert_eq!(GraphemeBreak::Lvt.short_name(), "LVT");
        assert_eq!(IndicConjunctBreak::Linker.short_name(), "Linker");
        assert_eq!(EastAsianWidth::Narrow.short_name(), "Na");
        assert_eq!(QuickCheck::Maybe.short_name(), "M");
    }

    #[test]
    fn test_east_asian_set() {
        assert!(EastAsianWidth::Halfwidth.is_east_asian());
        assert!(!EastAsianWidth::Ambiguous.is_east_asian());
        assert!(!EastAsianWidth::Narrow.is_east_asian());
    }
}
