use crate::decoder::Decoder;
use crate::error::Error;
use crate::hangul;
use crate::normalization::{normalize, NormalizationForm};
use crate::properties_ty::QuickCheck;
use crate::provider::PropertyProvider;

/// Below this, every codepoint is Yes for `form` and a starter.
fn trivially_normalized(ch: char, form: NormalizationForm) -> bool {
    let cp = ch as u32;
    cp < 0x80 || (form == NormalizationForm::Nfc && cp < 0x100)
}

/// One forward pass over the quick-check flags.
pub(crate) fn quick_check<P: PropertyProvider>(
    provider: &P,
    decoder: Decoder<'_>,
    form: NormalizationForm,
) -> QuickCheck {
    let mut result = QuickCheck::Yes;
    let mut last_class = 0;
    for (_, ch) in decoder {
        if trivially_normalized(ch, form) {
            last_class = 0;
            continue;
        }
        if hangul::is_syllable(ch) {
            if !form.is_composed() {
                return QuickCheck::No;
            }
            last_class = 0;
            continue;
        }
        let props = provider.properties(ch);
        let class = props.combining_class();
        if class != 0 && class < last_class {
            return QuickCheck::No;
        }
        match props.quick_check(form) {
            QuickCheck::No => return QuickCheck::No,
            QuickCheck::Maybe => result = QuickCheck::Maybe,
            QuickCheck::Yes => {}
        }
        last_class = class;
    }
    result
}

/// Exact answer: a Maybe from the scan is settled by normalizing.
pub(crate) fn is_normalized<P: PropertyProvider>(
    provider: &P,
    decoder: Decoder<'_>,
    form: NormalizationForm,
) -> Result<bool, Error> {
    match quick_check(provider, decoder.clone(), form) {
        QuickCheck::Yes => Ok(true),
        QuickCheck::No => Ok(false),
        QuickCheck::Maybe => {
            let normalized = normalize(provider, decoder.clone(), form)?;
            Ok(normalized.chars().eq(decoder.map(|(_, ch)| ch)))
        }
    }
}
