use smallvec::SmallVec;

u8_enum! {
    /// The General_Category property.
    pub enum GeneralCategory {
        /// Cn
        Unassigned = 0 => "Cn",
        /// Lu
        UppercaseLetter = 1 => "Lu",
        /// Ll
        LowercaseLetter = 2 => "Ll",
        /// Lt
        TitlecaseLetter = 3 => "Lt",
        /// Lm
        ModifierLetter = 4 => "Lm",
        /// Lo
        OtherLetter = 5 => "Lo",
        /// Mn
        NonspacingMark = 6 => "Mn",
        /// Mc
        SpacingMark = 7 => "Mc",
        /// Me
        EnclosingMark = 8 => "Me",
        /// Nd
        DecimalNumber = 9 => "Nd",
        /// Nl
        LetterNumber = 10 => "Nl",
        /// No
        OtherNumber = 11 => "No",
        /// Pc
        ConnectorPunctuation = 12 => "Pc",
        /// Pd
        DashPunctuation = 13 => "Pd",
        /// Ps
        OpenPunctuation = 14 => "Ps",
        /// Pe
        ClosePunctuation = 15 => "Pe",
        /// Pi
        InitialPunctuation = 16 => "Pi",
        /// Pf
        FinalPunctuation = 17 => "Pf",
        /// Po
        OtherPunctuation = 18 => "Po",
        /// Sm
        MathSymbol = 19 => "Sm",
        /// Sc
        CurrencySymbol = 20 => "Sc",
        /// Sk
        ModifierSymbol = 21 => "Sk",
        /// So
        OtherSymbol = 22 => "So",
        /// Zs
        SpaceSeparator = 23 => "Zs",
        /// Zl
        LineSeparator = 24 => "Zl",
        /// Zp
        ParagraphSeparator = 25 => "Zp",
        /// Cc
        Control = 26 => "Cc",
        /// Cf
        Format = 27 => "Cf",
        /// Cs
        Surrogate = 28 => "Cs",
        /// Co
        PrivateUse = 29 => "Co",
    }
}

impl GeneralCategory {
    /// L*
    pub fn is_letter(self) -> bool {
        matches!(
            self,
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
    }

    /// M*
    pub fn is_mark(self) -> bool {
        matches!(
            self,
            GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
                | GeneralCategory::EnclosingMark
        )
    }

    /// Mn and Mc, the marks that attach to a base. Enclosing marks (Me)
    /// are left out.
    pub fn is_combining(self) -> bool {
        matches!(
            self,
            GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark
        )
    }

    /// Control, format, surrogate, private use and unassigned codepoints
    /// have no glyph of their own.
    pub fn is_graphic(self) -> bool {
        !matches!(
            self,
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
        )
    }
}

u8_enum! {
    /// The Bidi_Class property.
    pub enum BidiClass {
        /// Left-to-right
        LeftToRight = 0 => "L",
        /// Right-to-left
        RightToLeft = 1 => "R",
        /// European number
        EuropeanNumber = 2 => "EN",
        /// European separator
        EuropeanSeparator = 3 => "ES",
        /// European terminator
        EuropeanTerminator = 4 => "ET",
        /// Arabic number
        ArabicNumber = 5 => "AN",
        /// Common separator
        CommonSeparator = 6 => "CS",
        /// Paragraph separator
        ParagraphSeparator = 7 => "B",
        /// Segment separator
        SegmentSeparator = 8 => "S",
        /// Whitespace
        WhiteSpace = 9 => "WS",
        /// Other neutral
        OtherNeutral = 10 => "ON",
        /// Left-to-right embedding
        LeftToRightEmbedding = 11 => "LRE",
        /// Left-to-right override
        LeftToRightOverride = 12 => "LRO",
        /// Arabic letter
        ArabicLetter = 13 => "AL",
        /// Right-to-left embedding
        RightToLeftEmbedding = 14 => "RLE",
        /// Right-to-left override
        RightToLeftOverride = 15 => "RLO",
        /// Pop directional format
        PopDirectionalFormat = 16 => "PDF",
        /// Nonspacing mark
        NonspacingMark = 17 => "NSM",
        /// Boundary neutral
        BoundaryNeutral = 18 => "BN",
        /// First strong isolate
        FirstStrongIsolate = 19 => "FSI",
        /// Left-to-right isolate
        LeftToRightIsolate = 20 => "LRI",
        /// Right-to-left isolate
        RightToLeftIsolate = 21 => "RLI",
        /// Pop directional isolate
        PopDirectionalIsolate = 22 => "PDI",
    }
}

u8_enum! {
    /// The Decomposition_Type property.
    pub enum DecompositionType {
        /// No decomposition.
        None = 0 => "none",
        /// Canonical equivalence.
        Canonical = 1 => "can",
        /// Otherwise unspecified compatibility.
        Compat = 2 => "com",
        /// Font variant.
        Font = 3 => "font",
        /// No-break version of a space or hyphen.
        NoBreak = 4 => "nb",
        /// Initial presentation form (Arabic).
        Initial = 5 => "init",
        /// Medial presentation form (Arabic).
        Medial = 6 => "med",
        /// Final presentation form (Arabic).
        Final = 7 => "fin",
        /// Isolated presentation form (Arabic).
        Isolated = 8 => "iso",
        /// Encircled form.
        Circle = 9 => "enc",
        /// Superscript form.
        Super = 10 => "sup",
        /// Subscript form.
        Sub = 11 => "sub",
        /// Vertical layout presentation form.
        Vertical = 12 => "vert",
        /// Wide (or zenkaku) compatibility character.
        Wide = 13 => "wide",
        /// Narrow (or hankaku) compatibility character.
        Narrow = 14 => "nar",
        /// Small variant form (CNS compatibility).
        Small = 15 => "sml",
        /// CJK squared font variant.
        Square = 16 => "sqr",
        /// Vulgar fraction form.
        Fraction = 17 => "fra",
    }
}

impl DecompositionType {
    /// Anything but `None` and `Canonical`.
    pub fn is_compatibility(self) -> bool {
        !matches!(self, DecompositionType::None | DecompositionType::Canonical)
    }
}

/// One of the simple (single codepoint) case mappings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CaseMapping {
    /// Simple_Uppercase_Mapping
    Upper,
    /// Simple_Lowercase_Mapping
    Lower,
    /// Simple_Titlecase_Mapping
    Title,
}

/// The result of a full case mapping or folding, at most three codepoints.
pub type CaseExpansion = SmallVec<[char; 3]>;

/// Codepoints a character decomposes into.
pub type DecompositionMapping = SmallVec<[char; 4]>;

/// One level of decomposition, as listed in the data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decomposition {
    /// Canonical or one of the compatibility tags.
    pub kind: DecompositionType,
    /// The replacement sequence.
    pub mapping: DecompositionMapping,
}

/// Everything the data store knows about one codepoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterRecord {
    /// The codepoint itself.
    pub codepoint: char,
    /// Display name, when the data store carries one.
    pub name: Option<String>,
    /// General_Category.
    pub category: GeneralCategory,
    /// Canonical_Combining_Class.
    pub combining_class: u8,
    /// Bidi_Class.
    pub bidi_class: BidiClass,
    /// Decomposition_Type.
    pub decomposition_type: DecompositionType,
    /// Numeric value for decimal digits (Nd).
    pub decimal: Option<u8>,
    /// Numeric value for digits, including decimal ones.
    pub digit: Option<u8>,
    /// Numeric value as text, e.g. "1/2".
    pub numeric: Option<String>,
    /// Bidi_Mirrored.
    pub mirrored: bool,
    /// Simple_Uppercase_Mapping, when different from the codepoint.
    pub uppercase: Option<char>,
    /// Simple_Lowercase_Mapping, when different from the codepoint.
    pub lowercase: Option<char>,
    /// Simple_Titlecase_Mapping, when different from the codepoint.
    pub titlecase: Option<char>,
}

impl CharacterRecord {
    /// The simple mapping of the given kind, when it differs from the
    /// codepoint.
    pub fn case_mapping(&self, mapping: CaseMapping) -> Option<char> {
        match mapping {
            CaseMapping::Upper => self.uppercase,
            CaseMapping::Lower => self.lowercase,
            CaseMapping::Title => self.titlecase,
        }
    }

    /// A record with default values, as used when a lookup misses.
    pub fn unassigned(codepoint: char) -> Self {
        CharacterRecord {
            codepoint,
            name: None,
            category: GeneralCategory::Unassigned,
            combining_class: 0,
            bidi_class: BidiClass::LeftToRight,
            decomposition_type: DecompositionType::None,
            decimal: None,
            digit: None,
            numeric: None,
            mirrored: false,
            uppercase: None,
            lowercase: None,
            titlecase: None,
        }
    }
}
