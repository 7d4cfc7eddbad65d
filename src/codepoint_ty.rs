use crate::error::Error;
use std::{convert::TryFrom, fmt};

/// Largest scalar value.
pub const CODEPOINT_MAX: u32 = 0x10FFFF;

/// Version of the Unicode Character Database behind the built-in data,
/// as (major, minor, update).
pub const UNICODE_VERSION: (u8, u8, u8) = unicode_normalization::UNICODE_VERSION;

/// Emitted in place of every ill-formed input sequence.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// A validated Unicode codepoint.
///
/// Surrogates, values above U+10FFFF and the 66 noncharacters
/// (U+FDD0..=U+FDEF and every U+xxFFFE / U+xxFFFF) are rejected at
/// construction, so every API that takes a `Codepoint` can rely on it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codepoint(char);

impl Codepoint {
    /// Validates `value`.
    pub fn new(value: u32) -> Result<Self, Error> {
        if !is_valid(value) {
            return Err(Error::InvalidCodepoint(value));
        }
        char::from_u32(value)
            .map(Codepoint)
            .ok_or(Error::InvalidCodepoint(value))
    }

    /// The numeric value.
    #[inline]
    pub fn value(self) -> u32 {
        self.0 as u32
    }

    /// The codepoint as a `char`.
    #[inline]
    pub fn as_char(self) -> char {
        self.0
    }

    /// The plane this codepoint belongs to.
    pub fn plane(self) -> Plane {
        Plane::from_index(self.value() >> 16)
    }

    /// The block this codepoint is allocated in, `None` outside every block.
    pub fn block(self) -> Option<Block> {
        Block::of(self.value())
    }

    /// Whether this is a precomposed Hangul syllable (U+AC00..=U+D7A3).
    pub fn is_hangul_syllable(self) -> bool {
        crate::hangul::is_syllable(self.0)
    }

    /// Whether this is a conjoining jamo usable by Hangul composition.
    pub fn is_hangul_jamo(self) -> bool {
        crate::hangul::is_jamo(self.0)
    }

    /// Whether this falls in one of the CJK (or Tangut) ideograph blocks.
    pub fn is_cjk_ideograph(self) -> bool {
        is_cjk_ideograph(self.0)
    }
}

/// Whether `value` is a scalar value that isn't a noncharacter.
pub fn is_valid(value: u32) -> bool {
    if value > CODEPOINT_MAX {
        return false;
    }
    if (0xD800..=0xDFFF).contains(&value) {
        return false;
    }
    if (0xFDD0..=0xFDEF).contains(&value) {
        return false;
    }
    (value & 0xFFFE) != 0xFFFE
}

const CJK_IDEOGRAPH_RANGES: [(u32, u32); 12] = [
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0xF900, 0xFAFF),
    (0x17000, 0x187F7),
    (0x20000, 0x2A6DF),
    (0x2A700, 0x2B739),
    (0x2B740, 0x2B81D),
    (0x2B820, 0x2CEA1),
    (0x2CEB0, 0x2EBE0),
    (0x2EBF0, 0x2EE5D),
    (0x30000, 0x3134A),
    (0x31350, 0x323AF),
];

pub(crate) fn is_cjk_ideograph(ch: char) -> bool {
    let v = ch as u32;
    CJK_IDEOGRAPH_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&v))
}

impl TryFrom<u32> for Codepoint {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Error> {
        Codepoint::new(value)
    }
}

impl TryFrom<char> for Codepoint {
    type Error = Error;

    fn try_from(ch: char) -> Result<Self, Error> {
        Codepoint::new(ch as u32)
    }
}

impl From<Codepoint> for char {
    fn from(cp: Codepoint) -> char {
        cp.0
    }
}

impl From<Codepoint> for u32 {
    fn from(cp: Codepoint) -> u32 {
        cp.value()
    }
}

impl fmt::Debug for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codepoint(U+{:04X})", self.value())
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.value())
    }
}

/// One of the seventeen 64K planes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Plane {
    /// Plane 0.
    BasicMultilingual,
    /// Plane 1.
    SupplementaryMultilingual,
    /// Plane 2.
    SupplementaryIdeographic,
    /// Plane 3.
    TertiaryIdeographic,
    /// Planes 4 to 13, currently unassigned.
    Unassigned(u8),
    /// Plane 14.
    SupplementarySpecialPurpose,
    /// Plane 15.
    PrivateUseA,
    /// Plane 16.
    PrivateUseB,
}

impl Plane {
    fn from_index(index: u32) -> Plane {
        match index {
            0 => Plane::BasicMultilingual,
            1 => Plane::SupplementaryMultilingual,
            2 => Plane::SupplementaryIdeographic,
            3 => Plane::TertiaryIdeographic,
            14 => Plane::SupplementarySpecialPurpose,
            15 => Plane::PrivateUseA,
            16 => Plane::PrivateUseB,
            other => Plane::Unassigned(other as u8),
        }
    }

    /// Numeric index, 0 to 16.
    pub fn index(self) -> u8 {
        match self {
            Plane::BasicMultilingual => 0,
            Plane::SupplementaryMultilingual => 1,
            Plane::SupplementaryIdeographic => 2,
            Plane::TertiaryIdeographic => 3,
            Plane::Unassigned(n) => n,
            Plane::SupplementarySpecialPurpose => 14,
            Plane::PrivateUseA => 15,
            Plane::PrivateUseB => 16,
        }
    }

    /// Full name, e.g. "Basic Multilingual Plane".
    pub fn name(self) -> &'static str {
        match self {
            Plane::BasicMultilingual => "Basic Multilingual Plane",
            Plane::SupplementaryMultilingual => "Supplementary Multilingual Plane",
            Plane::SupplementaryIdeographic => "Supplementary Ideographic Plane",
            Plane::TertiaryIdeographic => "Tertiary Ideographic Plane",
            Plane::Unassigned(_) => "Unassigned",
            Plane::SupplementarySpecialPurpose => "Supplementary Special-purpose Plane",
            Plane::PrivateUseA => "Supplementary Private Use Area-A",
            Plane::PrivateUseB => "Supplementary Private Use Area-B",
        }
    }

    /// Short name, e.g. "BMP".
    pub fn abbreviation(self) -> &'static str {
        match self {
            Plane::BasicMultilingual => "BMP",
            Plane::SupplementaryMultilingual => "SMP",
            Plane::SupplementaryIdeographic => "SIP",
            Plane::TertiaryIdeographic => "TIP",
            Plane::Unassigned(_) => "Unassigned",
            Plane::SupplementarySpecialPurpose => "SSP",
            Plane::PrivateUseA => "PUA-A",
            Plane::PrivateUseB => "PUA-B",
        }
    }
}

/// A named range of codepoints from Blocks.txt.
///
/// The table is the one of Unicode 16.0; blocks allocated later are not
/// known.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    /// The name, e.g. "Latin-1 Supplement".
    pub name: &'static str,
    /// First codepoint.
    pub start: u32,
    /// Last codepoint, inclusive.
    pub end: u32,
}

impl Block {
    /// The block holding `value`, which needn't be a valid [`Codepoint`]:
    /// surrogates and noncharacters have blocks too.
    pub fn of(value: u32) -> Option<Block> {
        crate::tables::blocks::lookup(value).map(|&(start, end, name)| Block { name, start, end })
    }

    /// Whether `value` lies in this block.
    pub fn contains(&self, value: u32) -> bool {
        (self.start..=self.end).contains(&value)
    }

    /// Number of codepoints in the block.
    pub fn size(&self) -> u32 {
        self.end - self.start + 1
    }
}
