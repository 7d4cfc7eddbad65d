use crate::character_ty::GeneralCategory;
use crate::codepoint_ty::is_cjk_ideograph;
use crate::decoder::Decoder;
use crate::error::Error;
use crate::properties_ty::EastAsianWidth;
use crate::provider::PropertyProvider;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How East_Asian_Width=Ambiguous codepoints are measured.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AmbiguousWidth {
    /// Wide when at least half of the visible codepoints of the text are.
    #[default]
    Auto,
    /// Always one column.
    Western,
    /// Always two columns.
    EastAsian,
}

impl FromStr for AmbiguousWidth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(AmbiguousWidth::Auto),
            "western" | "narrow" => Ok(AmbiguousWidth::Western),
            "east-asian" | "east_asian" | "eastasian" | "wide" => Ok(AmbiguousWidth::EastAsian),
            _ => Err(Error::InvalidConfig {
                key: "ambiguous_width",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for AmbiguousWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AmbiguousWidth::Auto => "auto",
            AmbiguousWidth::Western => "western",
            AmbiguousWidth::EastAsian => "east-asian",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Columns {
    Zero,
    One,
    Two,
    Ambiguous,
}

/// East_Asian_Width for codepoints the provider doesn't list.
fn unlisted_width(ch: char) -> EastAsianWidth {
    match ch as u32 {
        _ if is_cjk_ideograph(ch) => EastAsianWidth::Wide,
        0x20000..=0x3FFFD => EastAsianWidth::Wide,
        0xF0000..=0x10FFFD => EastAsianWidth::Ambiguous,
        _ => EastAsianWidth::Neutral,
    }
}

fn columns<P: PropertyProvider>(provider: &P, ch: char) -> Columns {
    match provider.properties(ch).general_category() {
        GeneralCategory::NonspacingMark
        | GeneralCategory::EnclosingMark
        | GeneralCategory::Format
        | GeneralCategory::Control => return Columns::Zero,
        _ => {}
    }
    match provider
        .east_asian_width(ch)
        .unwrap_or_else(|| unlisted_width(ch))
    {
        EastAsianWidth::Fullwidth | EastAsianWidth::Wide => Columns::Two,
        EastAsianWidth::Ambiguous => Columns::Ambiguous,
        EastAsianWidth::Neutral | EastAsianWidth::Narrow | EastAsianWidth::Halfwidth => Columns::One,
    }
}

/// Columns taken by everything `decoder` yields.
pub(crate) fn display_width<P: PropertyProvider>(
    provider: &P,
    decoder: Decoder<'_>,
    policy: AmbiguousWidth,
) -> usize {
    let (mut narrow, mut wide, mut ambiguous) = (0usize, 0usize, 0usize);
    for (_, ch) in decoder {
        match columns(provider, ch) {
            Columns::Zero => {}
            Columns::One => narrow += 1,
            Columns::Two => wide += 1,
            Columns::Ambiguous => ambiguous += 1,
        }
    }
    let ambiguous_wide = match policy {
        AmbiguousWidth::Western => false,
        AmbiguousWidth::EastAsian => true,
        AmbiguousWidth::Auto => wide * 2 >= narrow + wide + ambiguous,
    };
    let ambiguous_columns = if ambiguous_wide { 2 } else { 1 };
    narrow + wide * 2 + ambiguous * ambiguous_columns
}

#[cfg(test)]
mod tests {
    use super::{display_width, unlisted_width, AmbiguousWidth};
    use crate::decoder::Decoder;
    use crate::encoding::Encoding;
    use crate::properties_ty::EastAsianWidth;
    use crate::provider::UcdProvider;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn width(text: &str, policy: AmbiguousWidth) -> usize {
        display_width(&UcdProvider, Decoder::new(text.as_bytes(), Encoding::Utf8), policy)
    }

    #[test_case("", 0; "empty")]
    #[test_case("hello", 5; "ascii")]
    #[test_case("e\u{0301}", 1; "combining mark")]
    #[test_case("\u{4E2D}\u{6587}", 4; "ideographs")]
    #[test_case("\u{FF21}", 2; "fullwidth")]
    #[test_case("\u{FF71}", 1; "halfwidth")]
    #[test_case("Hello\u{4E2D}", 7; "mixed")]
    #[test_case("\u{00A1}", 1; "lone ambiguous")]
    #[test_case("\u{1F44D}", 2; "emoji")]
    #[test_case("\u{2764}\u{FE0F}", 1; "variation selector")]
    #[test_case("\u{1F44B}\u{1F3FD}", 4; "skin tone")]
    #[test_case("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}", 6; "zwj family")]
    #[test_case("\t\n", 0; "controls")]
    #[test_case("\u{200B}\u{200C}\u{200D}", 0; "zero width format")]
    #[test_case("a\u{0000}bc", 1; "nul ends text")]
    fn test_auto_width(text: &str, expected: usize) {
        assert_eq!(width(text, AmbiguousWidth::Auto), expected);
    }

    #[test]
    fn test_ambiguous_policies() {
        assert_eq!(width("\u{00A1}", AmbiguousWidth::Western), 1);
        assert_eq!(width("\u{00A1}", AmbiguousWidth::EastAsian), 2);
        // One wide out of two visible tips the balance.
        assert_eq!(width("\u{4E2D}\u{00A1}", AmbiguousWidth::Auto), 4);
        assert_eq!(width("ab\u{4E2D}\u{00A1}", AmbiguousWidth::Auto), 5);
        assert_eq!(width("ab\u{4E2D}\u{00A1}", AmbiguousWidth::EastAsian), 6);
    }

    #[test]
    fn test_unlisted_defaults() {
        assert_eq!(unlisted_width('\u{4E00}'), EastAsianWidth::Wide);
        assert_eq!(unlisted_width('\u{2A700}'), EastAsianWidth::Wide);
        assert_eq!(unlisted_width('\u{3FFFD}'), EastAsianWidth::Wide);
        assert_eq!(unlisted_width('\u{F0000}'), EastAsianWidth::Ambiguous);
        assert_eq!(unlisted_width('\u{0378}'), EastAsianWidth::Neutral);
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("auto".parse::<AmbiguousWidth>().unwrap(), AmbiguousWidth::Auto);
        assert_eq!("East-Asian".parse::<AmbiguousWidth>().unwrap(), AmbiguousWidth::EastAsian);
        assert_eq!("western".parse::<AmbiguousWidth>().unwrap(), AmbiguousWidth::Western);
        assert!("huge".parse::<AmbiguousWidth>().is_err());
        assert_eq!(AmbiguousWidth::EastAsian.to_string(), "east-asian");
    }
}
