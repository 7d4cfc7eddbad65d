//! The compact per-codepoint property record and its decoded form.
//!
//! A record is laid out as
//!
//! ```text
//! [bool_count] [bool_id]*  [enum_count] ([enum_id] [value])*
//! ```
//!
//! A boolean property is true when its identifier is listed. An enumerated
//! property that isn't listed has value 0, which is the default of every
//! enumeration used here. Decoding never fails: a missing record decodes to
//! all defaults, a truncated one keeps what was complete and unknown
//! identifiers are skipped.

use crate::character_ty::GeneralCategory;
use crate::normalization::NormalizationForm;
use crate::properties_ty::{
    EastAsianWidth, GraphemeBreak, IndicConjunctBreak, LineBreakClass, QuickCheck,
};
use smallvec::SmallVec;
use std::fmt;

u8_enum! {
    /// Identifies one slot of a [`PropertyVector`].
    pub enum PropertyId {
        /// Alphabetic (boolean)
        Alphabetic = 0 => "Alpha",
        /// Cased (boolean)
        Cased = 1 => "Cased",
        /// Uppercase (boolean)
        Uppercase = 2 => "Upper",
        /// Lowercase (boolean)
        Lowercase = 3 => "Lower",
        /// White_Space (boolean)
        WhiteSpace = 4 => "WSpace",
        /// Dash (boolean)
        Dash = 5 => "Dash",
        /// Hyphen (boolean)
        Hyphen = 6 => "Hyphen",
        /// Math (boolean)
        Math = 7 => "Math",
        /// Ideographic (boolean)
        Ideographic = 8 => "Ideo",
        /// Diacritic (boolean)
        Diacritic = 9 => "Dia",
        /// Bidi_Mirrored (boolean)
        BidiMirrored = 10 => "Bidi_M",
        /// Full_Composition_Exclusion (boolean)
        FullCompositionExclusion = 11 => "Comp_Ex",
        /// Emoji (boolean)
        Emoji = 12 => "Emoji",
        /// Emoji_Presentation (boolean)
        EmojiPresentation = 13 => "EPres",
        /// Emoji_Modifier (boolean)
        EmojiModifier = 14 => "EMod",
        /// Emoji_Modifier_Base (boolean)
        EmojiModifierBase = 15 => "EBase",
        /// Emoji_Component (boolean)
        EmojiComponent = 16 => "EComp",
        /// Extended_Pictographic (boolean)
        ExtendedPictographic = 17 => "ExtPict",
        /// General_Category (enumerated)
        GeneralCategory = 32 => "gc",
        /// Canonical_Combining_Class (enumerated)
        CombiningClass = 33 => "ccc",
        /// Line_Break (enumerated)
        LineBreak = 34 => "lb",
        /// Grapheme_Cluster_Break (enumerated)
        GraphemeClusterBreak = 35 => "GCB",
        /// Indic_Conjunct_Break (enumerated)
        IndicConjunctBreak = 36 => "InCB",
        /// East_Asian_Width (enumerated)
        EastAsianWidth = 37 => "ea",
        /// NFD_Quick_Check (enumerated)
        NfdQuickCheck = 38 => "NFD_QC",
        /// NFKD_Quick_Check (enumerated)
        NfkdQuickCheck = 39 => "NFKD_QC",
        /// NFC_Quick_Check (enumerated)
        NfcQuickCheck = 40 => "NFC_QC",
        /// NFKC_Quick_Check (enumerated)
        NfkcQuickCheck = 41 => "NFKC_QC",
    }
}

/// Slots in a [`PropertyVector`]; every identifier is below this.
pub const PROPERTY_COUNT: usize = 42;

const FIRST_ENUMERATED: u8 = 32;

impl PropertyId {
    /// Boolean properties are listed by identifier only.
    pub fn is_boolean(self) -> bool {
        self.to_u8() < FIRST_ENUMERATED
    }
}

/// A compact record, as handed out by a
/// [`PropertyProvider`](crate::PropertyProvider).
pub type PropertyRecord = SmallVec<[u8; 40]>;

/// The emoji properties of one codepoint (UTS #51).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EmojiProperties {
    /// Emoji
    pub emoji: bool,
    /// Emoji_Presentation: displayed as emoji by default.
    pub presentation: bool,
    /// Emoji_Modifier: a skin tone modifier.
    pub modifier: bool,
    /// Emoji_Modifier_Base: takes a skin tone modifier.
    pub modifier_base: bool,
    /// Emoji_Component: appears in emoji sequences.
    pub component: bool,
    /// Extended_Pictographic
    pub extended_pictographic: bool,
}

/// Decoded property values of one codepoint.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct PropertyVector([u8; PROPERTY_COUNT]);

impl Default for PropertyVector {
    fn default() -> Self {
        PropertyVector([0; PROPERTY_COUNT])
    }
}

impl PropertyVector {
    /// Decodes a compact record. See the module documentation for the layout.
    pub fn decode(record: &[u8]) -> Self {
        let mut vector = PropertyVector::default();
        let mut bytes = record.iter().copied();

        let bool_count = bytes.next().unwrap_or(0);
        for _ in 0..bool_count {
            match bytes.next() {
                Some(id) => vector.store(id, 1),
                None => return vector,
            }
        }

        let enum_count = bytes.next().unwrap_or(0);
        for _ in 0..enum_count {
            match (bytes.next(), bytes.next()) {
                (Some(id), Some(value)) => vector.store(id, value),
                _ => return vector,
            }
        }
        vector
    }

    fn store(&mut self, id: u8, value: u8) {
        if PropertyId::from_u8(id).is_some() {
            self.0[id as usize] = value;
        }
    }

    /// Encodes the non-default slots as a compact record.
    pub fn encode(&self) -> PropertyRecord {
        let mut bools = PropertyRecord::new();
        let mut enums = PropertyRecord::new();
        for &id in PropertyId::ALL {
            let value = self.get(id);
            if value == 0 {
                continue;
            }
            if id.is_boolean() {
                bools.push(id.to_u8());
            } else {
                enums.push(id.to_u8());
                enums.push(value);
            }
        }
        let mut record = PropertyRecord::new();
        record.push(bools.len() as u8);
        record.extend_from_slice(&bools);
        record.push((enums.len() / 2) as u8);
        record.extend_from_slice(&enums);
        record
    }

    /// The raw slot value.
    #[inline]
    pub fn get(&self, id: PropertyId) -> u8 {
        self.0[id.to_u8() as usize]
    }

    /// Sets a slot. Booleans are normalized to 0 or 1.
    pub fn set(&mut self, id: PropertyId, value: u8) -> &mut Self {
        self.0[id.to_u8() as usize] = if id.is_boolean() {
            (value != 0) as u8
        } else {
            value
        };
        self
    }

    /// A boolean slot, or whether an enumerated slot is non-default.
    #[inline]
    pub fn has(&self, id: PropertyId) -> bool {
        self.get(id) != 0
    }

    /// General_Category; unknown values read as unassigned.
    pub fn general_category(&self) -> GeneralCategory {
        GeneralCategory::from_u8(self.get(PropertyId::GeneralCategory))
            .unwrap_or(GeneralCategory::Unassigned)
    }

    /// Canonical_Combining_Class.
    pub fn combining_class(&self) -> u8 {
        self.get(PropertyId::CombiningClass)
    }

    /// Line_Break; unknown values read as XX.
    pub fn line_break(&self) -> LineBreakClass {
        LineBreakClass::from_u8(self.get(PropertyId::LineBreak)).unwrap_or(LineBreakClass::Unknown)
    }

    /// Grapheme_Cluster_Break; unknown values read as Other.
    pub fn grapheme_break(&self) -> GraphemeBreak {
        GraphemeBreak::from_u8(self.get(PropertyId::GraphemeClusterBreak))
            .unwrap_or(GraphemeBreak::Other)
    }

    /// Indic_Conjunct_Break; unknown values read as None.
    pub fn indic_conjunct_break(&self) -> IndicConjunctBreak {
        IndicConjunctBreak::from_u8(self.get(PropertyId::IndicConjunctBreak))
            .unwrap_or(IndicConjunctBreak::None)
    }

    /// East_Asian_Width; unknown values read as Neutral.
    pub fn east_asian_width(&self) -> EastAsianWidth {
        EastAsianWidth::from_u8(self.get(PropertyId::EastAsianWidth))
            .unwrap_or(EastAsianWidth::Neutral)
    }

    /// The emoji slots.
    pub fn emoji_properties(&self) -> EmojiProperties {
        EmojiProperties {
            emoji: self.has(PropertyId::Emoji),
            presentation: self.has(PropertyId::EmojiPresentation),
            modifier: self.has(PropertyId::EmojiModifier),
            modifier_base: self.has(PropertyId::EmojiModifierBase),
            component: self.has(PropertyId::EmojiComponent),
            extended_pictographic: self.has(PropertyId::ExtendedPictographic),
        }
    }

    /// The quick-check flag for `form`; unknown values read as Yes.
    pub fn quick_check(&self, form: NormalizationForm) -> QuickCheck {
        let id = match form {
            NormalizationForm::Nfd => PropertyId::NfdQuickCheck,
            NormalizationForm::Nfkd => PropertyId::NfkdQuickCheck,
            NormalizationForm::Nfc => PropertyId::NfcQuickCheck,
            NormalizationForm::Nfkc => PropertyId::NfkcQuickCheck,
        };
        QuickCheck::from_u8(self.get(id)).unwrap_or(QuickCheck::Yes)
    }
}

impl fmt::Debug for PropertyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyVector(")?;
        f.debug_map()
            .entries(
                PropertyId::ALL
                    .iter()
                    .filter(|&&id| self.has(id))
                    .map(|&id| (id.short_name(), self.get(id))),
            )
            .finish()?;
        write!(f, ")")
    }
}
