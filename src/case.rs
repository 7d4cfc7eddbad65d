use crate::character_ty::{CaseExpansion, CaseMapping, GeneralCategory};
use crate::decoder::Decoder;
use crate::error::Error;
use crate::provider::PropertyProvider;
use crate::tables::special_casing;
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Target of a case conversion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseMode {
    /// Full uppercase.
    Upper,
    /// Full lowercase.
    Lower,
    /// Titlecase the first letter of every word and lowercase the rest.
    Title,
    /// Case folding, for caseless comparison.
    Fold,
}

/// Letters and letter numbers make up words for title-casing.
fn is_word_category(category: GeneralCategory) -> bool {
    category.is_letter() || category == GeneralCategory::LetterNumber
}

/// The full mapping of `ch`; special casing wins over the simple mapping.
pub(crate) fn full_mapping<P: PropertyProvider>(
    provider: &P,
    ch: char,
    mapping: CaseMapping,
) -> CaseExpansion {
    if let Some(special) = special_casing::lookup(ch) {
        return match mapping {
            CaseMapping::Upper => special.upper,
            CaseMapping::Lower => special.lower,
            CaseMapping::Title => special.title,
        };
    }
    smallvec![provider.case_mapping(ch, mapping).unwrap_or(ch)]
}

/// The full case folding of `ch`. Without folding data from the provider
/// it is the lowercase of the uppercase.
pub(crate) fn full_fold<P: PropertyProvider>(provider: &P, ch: char) -> CaseExpansion {
    if let Some(folded) = provider.case_fold(ch) {
        return folded;
    }
    full_mapping(provider, ch, CaseMapping::Upper)
        .into_iter()
        .flat_map(|upper| full_mapping(provider, upper, CaseMapping::Lower))
        .collect()
}

fn push_all(out: &mut String, chars: &[char]) -> Result<(), Error> {
    out.try_reserve(chars.iter().map(|ch| ch.len_utf8()).sum())?;
    out.extend(chars);
    Ok(())
}

/// Converts everything `decoder` yields.
pub(crate) fn convert_case<P: PropertyProvider>(
    provider: &P,
    decoder: Decoder<'_>,
    mode: CaseMode,
) -> Result<String, Error> {
    let mut out = String::new();
    out.try_reserve(decoder.remaining().len())?;
    let mut in_word = false;
    for (_, ch) in decoder {
        match mode {
            CaseMode::Upper => push_all(&mut out, &full_mapping(provider, ch, CaseMapping::Upper))?,
            CaseMode::Lower => push_all(&mut out, &full_mapping(provider, ch, CaseMapping::Lower))?,
            CaseMode::Title => {
                if is_word_category(provider.properties(ch).general_category()) {
                    let mapping = if in_word {
                        CaseMapping::Lower
                    } else {
                        CaseMapping::Title
                    };
                    push_all(&mut out, &full_mapping(provider, ch, mapping))?;
                    in_word = true;
                } else {
                    push_all(&mut out, &[ch])?;
                    in_word = false;
                }
            }
            CaseMode::Fold => push_all(&mut out, &full_fold(provider, ch))?,
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{convert_case, CaseMode};
    use crate::decoder::Decoder;
    use crate::encoding::Encoding;
    use crate::provider::UcdProvider;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn convert(text: &str, mode: CaseMode) -> String {
        convert_case(&UcdProvider, Decoder::new(text.as_bytes(), Encoding::Utf8), mode).unwrap()
    }

    #[test_case("hello world", "Hello World")]
    #[test_case("HELLO wORLD", "Hello World")]
    #[test_case("stra\u{00DF}e", "Stra\u{00DF}e")]
    #[test_case("\u{00DF}eta", "Sseta")]
    #[test_case("\u{2172} times", "\u{2162} Times")]
    #[test_case("\u{0130}stanbul", "\u{0130}stanbul")]
    #[test_case("123abc", "123Abc")]
    #[test_case("\u{1F600}grinning", "\u{1F600}Grinning")]
    #[test_case("\u{01C6}ungla", "\u{01C5}ungla")]
    #[test_case("\u{10D0}\u{10D1}", "\u{10D0}\u{10D1}"; "georgian is its own titlecase")]
    #[test_case("\u{1F80}\u{03B1}", "\u{1F88}\u{03B1}"; "greek with ypogegrammeni")]
    #[test_case("\u{FB01}sh", "Fish")]
    #[test_case("o'neil", "O'Neil")]
    #[test_case("", "")]
    fn test_title(input: &str, expected: &str) {
        assert_eq!(convert(input, CaseMode::Title), expected);
    }

    #[test_case("stra\u{00DF}e", "STRASSE")]
    #[test_case("\u{00DF}eta", "SSETA")]
    #[test_case("\u{FB03}", "FFI")]
    #[test_case("\u{0149}", "\u{02BC}N")]
    #[test_case("\u{1F80}", "\u{1F08}\u{0399}")]
    #[test_case("\u{03C3}\u{03C2}", "\u{03A3}\u{03A3}")]
    #[test_case("caf\u{00E9}", "CAF\u{00C9}")]
    fn test_upper(input: &str, expected: &str) {
        assert_eq!(convert(input, CaseMode::Upper), expected);
    }

    #[test_case("\u{0130}", "i\u{0307}")]
    #[test_case("HELLO", "hello")]
    #[test_case("\u{1F88}", "\u{1F80}")]
    #[test_case("\u{2162}", "\u{2172}")]
    fn test_lower(input: &str, expected: &str) {
        assert_eq!(convert(input, CaseMode::Lower), expected);
    }

    #[test_case("Stra\u{00DF}e", "strasse")]
    #[test_case("\u{FB01}", "fi")]
    #[test_case("\u{03A3}\u{03C2}", "\u{03C3}\u{03C3}")]
    #[test_case("\u{0130}", "i\u{0307}")]
    #[test_case("\u{1F80}", "\u{1F00}\u{03B9}")]
    #[test_case("\u{13F8}", "\u{13F0}"; "cherokee small letter folds to capital")]
    #[test_case("\u{1E9E}", "ss"; "capital sharp s")]
    #[test_case("\u{AB70}", "\u{13A0}"; "cherokee small a")]
    #[test_case("\u{1FB3}", "\u{03B1}\u{03B9}"; "alpha with ypogegrammeni")]
    fn test_fold(input: &str, expected: &str) {
        assert_eq!(convert(input, CaseMode::Fold), expected);
    }

    #[test]
    fn test_ascii_round_trip() {
        let ascii: String = (0x20u8..0x7F).map(char::from).collect();
        let upper = convert(&ascii, CaseMode::Upper);
        assert_eq!(upper, ascii.to_ascii_uppercase());
        assert_eq!(convert(&upper, CaseMode::Lower), ascii.to_ascii_lowercase());
    }

    #[test]
    fn test_fold_without_provider_data() {
        use crate::character_ty::{CaseExpansion, CharacterRecord, Decomposition};
        use crate::properties_ty::EastAsianWidth;
        use crate::property_vector::PropertyRecord;
        use crate::provider::PropertyProvider;

        struct NoFolding;

        impl PropertyProvider for NoFolding {
            fn character(&self, ch: char) -> Option<CharacterRecord> {
                UcdProvider.character(ch)
            }
            fn property_record(&self, ch: char) -> Option<PropertyRecord> {
                UcdProvider.property_record(ch)
            }
            fn east_asian_width(&self, ch: char) -> Option<EastAsianWidth> {
                UcdProvider.east_asian_width(ch)
            }
            fn decomposition(&self, ch: char) -> Option<Decomposition> {
                UcdProvider.decomposition(ch)
            }
            fn primary_composite(&self, first: char, second: char) -> Option<char> {
                UcdProvider.primary_composite(first, second)
            }
        }

        assert_eq!(NoFolding.case_fold('A'), None::<CaseExpansion>);
        let decoder = Decoder::new("Stra\u{00DF}e".as_bytes(), Encoding::Utf8);
        let out = convert_case(&NoFolding, decoder, CaseMode::Fold).unwrap();
        assert_eq!(out, "strasse");
    }

    #[test]
    fn test_malformed_input() {
        let out = convert_case(&UcdProvider, Decoder::new(b"ab\xFFc", Encoding::Utf8), CaseMode::Upper)
            .unwrap();
        assert_eq!(out, "AB\u{FFFD}C");
    }
}
