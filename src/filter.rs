use crate::character_ty::GeneralCategory;
use crate::decoder::Decoder;
use crate::error::Error;
use crate::normalization::{normalize, NormalizationForm};
use crate::property_vector::PropertyId;
use crate::provider::PropertyProvider;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Clean-up steps applied by [`Engine::filter`](crate::Engine::filter).
    ///
    /// Normalization runs first, over the whole text. The other steps see
    /// one codepoint at a time: stripped controls are dropped before
    /// anything else, so they never split a run of whitespace.
    #[derive(Serialize, Deserialize)]
    pub struct Filter: u8 {
        /// Normalize to NFC first.
        const NORMALIZE       = 0b0000_0001;
        /// Replace every space separator (Zs) with U+0020.
        const SPACES          = 0b0000_0010;
        /// Replace every run of whitespace (White_Space) with one U+0020.
        const COLLAPSE_SPACES = 0b0000_0100;
        /// Drop control characters other than TAB, LF, VT, FF and CR.
        const STRIP_CONTROLS  = 0b0000_1000;
        /// Replace decimal digits (Nd) of any script with ASCII digits.
        const NUMERIC         = 0b0001_0000;
    }
}

impl Default for Filter {
    fn default() -> Self {
        Filter::all()
    }
}

fn keeps_control(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r')
}

fn ascii_digit<P: PropertyProvider>(provider: &P, ch: char) -> Option<char> {
    let value = provider.character(ch)?.decimal?;
    char::from_digit(u32::from(value), 10)
}

fn apply<P, I>(provider: &P, chars: I, len_hint: usize, filter: Filter) -> Result<String, Error>
where
    P: PropertyProvider,
    I: Iterator<Item = char>,
{
    let mut out = String::new();
    out.try_reserve(len_hint)?;
    let mut in_spaces = false;
    for ch in chars {
        let props = provider.properties(ch);
        let category = props.general_category();
        if filter.contains(Filter::STRIP_CONTROLS)
            && category == GeneralCategory::Control
            && !keeps_control(ch)
        {
            continue;
        }
        if filter.contains(Filter::COLLAPSE_SPACES) && props.has(PropertyId::WhiteSpace) {
            if !in_spaces {
                out.try_reserve(1)?;
                out.push(' ');
            }
            in_spaces = true;
            continue;
        }
        in_spaces = false;
        let ch = match category {
            GeneralCategory::SpaceSeparator if filter.contains(Filter::SPACES) => ' ',
            GeneralCategory::DecimalNumber if filter.contains(Filter::NUMERIC) => {
                ascii_digit(provider, ch).unwrap_or(ch)
            }
            _ => ch,
        };
        out.try_reserve(ch.len_utf8())?;
        out.push(ch);
    }
    Ok(out)
}

pub(crate) fn filter_text<P: PropertyProvider>(
    provider: &P,
    decoder: Decoder<'_>,
    filter: Filter,
) -> Result<String, Error> {
    let len_hint = decoder.remaining().len();
    if filter.contains(Filter::NORMALIZE) {
        let normalized = normalize(provider, decoder, NormalizationForm::Nfc)?;
        if filter == Filter::NORMALIZE {
            return Ok(normalized);
        }
        apply(provider, normalized.chars(), normalized.len(), filter)
    } else {
        apply(provider, decoder.map(|(_, ch)| ch), len_hint, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_text, Filter};
    use crate::decoder::Decoder;
    use crate::encoding::Encoding;
    use crate::provider::UcdProvider;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const ALL_SPACE_SEPARATORS: &str = "\u{0020}\u{00A0}\u{1680}\u{2000}\u{2001}\u{2002}\u{2003}\u{2004}\u{2005}\u{2006}\u{2007}\u{2008}\u{2009}\u{200A}\u{202F}\u{205F}\u{3000}";

    fn run(text: &str, filter: Filter) -> String {
        run_bytes(text.as_bytes(), filter)
    }

    fn run_bytes(bytes: &[u8], filter: Filter) -> String {
        filter_text(&UcdProvider, Decoder::new(bytes, Encoding::Utf8), filter).unwrap()
    }

    #[test_case("e\u{0301}", Filter::NORMALIZE, "\u{00E9}"; "normalize")]
    #[test_case("   ", Filter::SPACES, "   "; "ascii spaces")]
    #[test_case("a\u{00A0}\u{3000}b", Filter::SPACES, "a  b"; "space separators to ascii")]
    #[test_case("a\tb", Filter::SPACES, "a\tb"; "tab is not a space separator")]
    #[test_case("hello    world", Filter::COLLAPSE_SPACES, "hello world"; "collapse run")]
    #[test_case("hello\t\t\n\nworld", Filter::COLLAPSE_SPACES, "hello world"; "collapse tabs and newlines")]
    #[test_case("   hello world", Filter::COLLAPSE_SPACES, " hello world"; "collapse leading")]
    #[test_case("hello world   ", Filter::COLLAPSE_SPACES, "hello world "; "collapse trailing")]
    #[test_case("  \t\n  ", Filter::COLLAPSE_SPACES, " "; "collapse only whitespace")]
    #[test_case("hello world test", Filter::COLLAPSE_SPACES, "hello world test"; "collapse nothing")]
    #[test_case(
        "one  \t\n  two\r\n\r\nthree    four",
        Filter::COLLAPSE_SPACES,
        "one two three four";
        "collapse mixed"
    )]
    #[test_case(
        "hello\u{2000}\u{2001}world",
        Filter::SPACES | Filter::COLLAPSE_SPACES,
        "hello world";
        "spaces and collapse"
    )]
    #[test_case("a\u{2028}\u{0085}b", Filter::COLLAPSE_SPACES, "a b"; "collapse separators")]
    #[test_case(
        "\u{0001}\u{0002}\t\n\u{000B}\u{000C}\r\u{001F}",
        Filter::STRIP_CONTROLS,
        "\t\n\u{000B}\u{000C}\r";
        "strip controls"
    )]
    #[test_case("a\u{007F}\u{0080}b", Filter::STRIP_CONTROLS, "ab"; "strip delete and c1")]
    #[test_case("a \u{0007} b", Filter::all(), "a b"; "stripped control inside whitespace run")]
    #[test_case("1234567890", Filter::NUMERIC, "1234567890"; "ascii digits")]
    #[test_case("\u{0661}\u{0662}", Filter::NUMERIC, "12"; "arabic-indic digits")]
    #[test_case("\u{FF13}\u{0967}", Filter::NUMERIC, "31"; "fullwidth and devanagari digits")]
    #[test_case("\u{00BD}\u{2460}", Filter::NUMERIC, "\u{00BD}\u{2460}"; "other numbers stay")]
    #[test_case("a  b", Filter::empty(), "a  b"; "nothing")]
    fn test_filter(text: &str, filter: Filter, expected: &str) {
        assert_eq!(run(text, filter), expected);
    }

    #[test]
    fn test_every_space_separator() {
        let expected = " ".repeat(17);
        assert_eq!(run(ALL_SPACE_SEPARATORS, Filter::SPACES), expected);
        assert_eq!(run(ALL_SPACE_SEPARATORS, Filter::NORMALIZE | Filter::SPACES), expected);
        assert_eq!(run(ALL_SPACE_SEPARATORS, Filter::COLLAPSE_SPACES), " ");
    }

    #[test_case(b"A\xC0B", "A\u{FFFD}B"; "invalid byte")]
    #[test_case(b"A\xC0\xC1\xC2B", "A\u{FFFD}B"; "invalid run")]
    fn test_malformed_input(bytes: &[u8], expected: &str) {
        assert_eq!(run_bytes(bytes, Filter::empty()), expected);
        assert_eq!(run_bytes(bytes, Filter::all()), expected);
    }

    #[test]
    fn test_default_applies_everything() {
        assert_eq!(Filter::default(), Filter::all());
        assert_eq!(
            run("cafe\u{0301}\u{2003}\u{2003}ok\u{0008} \u{0662}", Filter::default()),
            "caf\u{00E9} ok 2"
        );
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Filter::COLLAPSE_SPACES).unwrap();
        assert_eq!(serde_json::from_str::<Filter>(&json).unwrap(), Filter::COLLAPSE_SPACES);
    }
}
