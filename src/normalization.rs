use crate::decoder::Decoder;
use crate::character_ty::DecompositionType;
use crate::error::Error;
use crate::hangul;
use crate::provider::PropertyProvider;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// A Unicode normalization form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NormalizationForm {
    /// Canonical decomposition.
    Nfd,
    /// Compatibility decomposition.
    Nfkd,
    /// Canonical decomposition followed by canonical composition.
    Nfc,
    /// Compatibility decomposition followed by canonical composition.
    Nfkc,
}

impl NormalizationForm {
    /// Whether compatibility decompositions are applied.
    pub fn is_compatibility(self) -> bool {
        matches!(self, NormalizationForm::Nfkd | NormalizationForm::Nfkc)
    }

    /// Whether the form recomposes after decomposing.
    pub fn is_composed(self) -> bool {
        matches!(self, NormalizationForm::Nfc | NormalizationForm::Nfkc)
    }

    fn applies_to(self, kind: DecompositionType) -> bool {
        match kind {
            DecompositionType::None => false,
            DecompositionType::Canonical => true,
            _ => self.is_compatibility(),
        }
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NormalizationForm::Nfd => "NFD",
            NormalizationForm::Nfkd => "NFKD",
            NormalizationForm::Nfc => "NFC",
            NormalizationForm::Nfkc => "NFKC",
        })
    }
}

impl FromStr for NormalizationForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "nfd" => Ok(NormalizationForm::Nfd),
            "nfkd" => Ok(NormalizationForm::Nfkd),
            "nfc" => Ok(NormalizationForm::Nfc),
            "nfkc" => Ok(NormalizationForm::Nfkc),
            _ => Err(Error::InvalidConfig {
                key: "normalization_form",
                value: s.to_owned(),
            }),
        }
    }
}

/// Inline capacity of the pending mark buffer. Longer runs spill to the heap.
const PENDING_CAPACITY: usize = 32;

type PendingMarks = SmallVec<[(char, u8); PENDING_CAPACITY]>;

/// Stable insertion sort by combining class. Equal classes keep their input
/// order, as the canonical ordering algorithm demands.
fn sort_by_combining_class(marks: &mut [(char, u8)]) {
    for i in 1..marks.len() {
        let mut j = i;
        while j > 0 && marks[j - 1].1 > marks[j].1 {
            marks.swap(j - 1, j);
            j -= 1;
        }
    }
}

struct Normalizer<'p, P> {
    provider: &'p P,
    form: NormalizationForm,
    pending: PendingMarks,
    out: Vec<char>,
}

impl<'p, P: PropertyProvider> Normalizer<'p, P> {
    fn new(provider: &'p P, form: NormalizationForm) -> Self {
        Normalizer {
            provider,
            form,
            pending: PendingMarks::new(),
            out: Vec::new(),
        }
    }

    fn push_decomposed(&mut self, ch: char) -> Result<(), Error> {
        if let Some(jamos) = hangul::decompose(ch) {
            for jamo in jamos {
                self.push_atom(jamo, 0)?;
            }
            return Ok(());
        }
        match self.provider.decomposition(ch) {
            Some(decomposition)
                if self.form.applies_to(decomposition.kind)
                    && decomposition.mapping.as_slice() != [ch] =>
            {
                for part in decomposition.mapping {
                    self.push_decomposed(part)?;
                }
                Ok(())
            }
            _ => {
                let class = self.provider.combining_class(ch);
                self.push_atom(ch, class)
            }
        }
    }

    fn push_atom(&mut self, ch: char, class: u8) -> Result<(), Error> {
        if class == 0 {
            self.flush()?;
            self.out.try_reserve(1)?;
            self.out.push(ch);
        } else {
            if self.pending.len() == PENDING_CAPACITY {
                tracing::trace!(len = self.pending.len(), "pending marks spill to the heap");
            }
            self.pending.push((ch, class));
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        if self.pending.is_empty() {
            return Ok(());
        }
        sort_by_combining_class(&mut self.pending);
        self.out.try_reserve(self.pending.len())?;
        self.out.extend(self.pending.drain(..).map(|(ch, _)| ch));
        Ok(())
    }

    fn compose_pair(&self, first: char, second: char) -> Option<char> {
        hangul::compose(first, second).or_else(|| self.provider.primary_composite(first, second))
    }

    /// Canonical composition over the decomposed, reordered output.
    fn compose(&mut self) {
        let mut starter: Option<usize> = None;
        // Class of the last character kept since the starter; `None` while
        // the starter is the previous character.
        let mut last_class: Option<u8> = None;
        let mut write = 0;
        for read in 0..self.out.len() {
            let ch = self.out[read];
            let class = self.provider.combining_class(ch);
            if let Some(s) = starter {
                let blocked = last_class.map_or(false, |prev| prev == 0 || prev >= class);
                if !blocked {
                    if let Some(composite) = self.compose_pair(self.out[s], ch) {
                        self.out[s] = composite;
                        continue;
                    }
                }
            }
            if class == 0 {
                starter = Some(write);
                last_class = None;
            } else {
                last_class = Some(class);
            }
            self.out[write] = ch;
            write += 1;
        }
        self.out.truncate(write);
    }

    fn finish(mut self) -> Result<String, Error> {
        self.flush()?;
        if self.form.is_composed() {
            self.compose();
        }
        let mut text = String::new();
        text.try_reserve(self.out.iter().map(|ch| ch.len_utf8()).sum())?;
        text.extend(self.out.iter());
        Ok(text)
    }
}

/// Normalizes everything `decoder` yields.
pub(crate) fn normalize<P: PropertyProvider>(
    provider: &P,
    decoder: Decoder<'_>,
    form: NormalizationForm,
) -> Result<String, Error> {
    let mut normalizer = Normalizer::new(provider, form);
    for (_, ch) in decoder {
        normalizer.push_decomposed(ch)?;
    }
    normalizer.finish()
}

#[cfg(test)]
mod tests {
    use super::{normalize, sort_by_combining_class, NormalizationForm};
    use crate::decoder::Decoder;
    use crate::encoding::Encoding;
    use crate::provider::UcdProvider;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn run(text: &str, form: NormalizationForm) -> String {
        normalize(&UcdProvider, Decoder::new(text.as_bytes(), Encoding::Utf8), form).unwrap()
    }

    fn codepoints(text: &str) -> Vec<u32> {
        text.chars().map(|c| c as u32).collect()
    }

    #[test]
    fn test_canonical_reordering() {
        let nfd = run("D\u{0307}\u{0323}", NormalizationForm::Nfd);
        assert_eq!(codepoints(&nfd), vec![0x44, 0x0323, 0x0307]);
        let nfc = run("D\u{0307}\u{0323}", NormalizationForm::Nfc);
        assert_eq!(codepoints(&nfc), vec![0x1E0C, 0x0307]);
    }

    #[test]
    fn test_hangul() {
        assert_eq!(
            codepoints(&run("\u{AC00}", NormalizationForm::Nfd)),
            vec![0x1100, 0x1161]
        );
        assert_eq!(
            codepoints(&run("\u{AC01}", NormalizationForm::Nfkd)),
            vec![0x1100, 0x1161, 0x11A8]
        );
        assert_eq!(run("\u{1100}\u{1161}", NormalizationForm::Nfc), "\u{AC00}");
        assert_eq!(run("\u{1100}\u{1161}\u{11A8}", NormalizationForm::Nfc), "\u{AC01}");
        assert_eq!(run("\u{AC00}\u{11A8}", NormalizationForm::Nfc), "\u{AC01}");
    }

    #[test_case("é", NormalizationForm::Nfd, "e\u{0301}")]
    #[test_case("e\u{0301}", NormalizationForm::Nfc, "é")]
    #[test_case("ﬁ", NormalizationForm::Nfd, "ﬁ")]
    #[test_case("ﬁ", NormalizationForm::Nfkd, "fi")]
    #[test_case("①", NormalizationForm::Nfkc, "1" ; "circled_one_nfkc")]
    #[test_case("ẛ\u{0323}", NormalizationForm::Nfc, "ẛ\u{0323}")]
    #[test_case("ẛ\u{0323}", NormalizationForm::Nfkc, "ṩ")]
    #[test_case("ẛ\u{0323}", NormalizationForm::Nfkd, "s\u{0323}\u{0307}")]
    #[test_case("\u{212B}", NormalizationForm::Nfc, "\u{00C5}")]
    #[test_case("\u{0958}", NormalizationForm::Nfc, "\u{0915}\u{093C}")]
    #[test_case("\u{0301}a", NormalizationForm::Nfc, "\u{0301}a")]
    #[test_case("A\u{0300}\u{0301}", NormalizationForm::Nfc, "\u{00C0}\u{0301}")]
    #[test_case("a\u{0328}\u{0301}", NormalizationForm::Nfc, "\u{0105}\u{0301}")]
    #[test_case("", NormalizationForm::Nfc, "")]
    fn test_forms(input: &str, form: NormalizationForm, expected: &str) {
        assert_eq!(codepoints(&run(input, form)), codepoints(expected));
    }

    #[test]
    fn test_long_mark_runs_stay_ordered() {
        let mut input = String::from("a");
        for _ in 0..40 {
            input.push('\u{0301}');
            input.push('\u{0323}');
        }
        let nfd = run(&input, NormalizationForm::Nfd);
        let marks: Vec<char> = nfd.chars().skip(1).collect();
        assert_eq!(marks.len(), 80);
        assert!(marks[..40].iter().all(|&c| c == '\u{0323}'));
        assert!(marks[40..].iter().all(|&c| c == '\u{0301}'));
    }

    #[test]
    fn test_malformed_input_is_replaced() {
        let out = normalize(
            &UcdProvider,
            Decoder::new(b"e\xCC\xFFx", Encoding::Utf8),
            NormalizationForm::Nfc,
        )
        .unwrap();
        assert_eq!(out, "e\u{FFFD}x");
    }

    #[test]
    fn test_stable_insertion_sort() {
        let mut marks = [('a', 230), ('b', 220), ('c', 230), ('d', 1), ('e', 220)];
        sort_by_combining_class(&mut marks);
        let order: String = marks.iter().map(|&(c, _)| c).collect();
        assert_eq!(order, "dbeac");
    }

    #[test]
    fn test_form_parsing_and_display() {
        assert_eq!("NFKC".parse::<NormalizationForm>().unwrap(), NormalizationForm::Nfkc);
        assert_eq!("nfd".parse::<NormalizationForm>().unwrap(), NormalizationForm::Nfd);
        assert!("nfx".parse::<NormalizationForm>().is_err());
        assert_eq!(NormalizationForm::Nfkd.to_string(), "NFKD");
    }
}
