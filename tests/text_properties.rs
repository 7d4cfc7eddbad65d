use pretty_assertions::assert_eq;
use runetext::{
    detect_encoding, encode_str, BreakKind, CaseMode, Codepoint, Decoder, Encoding, Engine,
    Error, NormalizationForm, QuickCheck, Text,
};
use test_case::test_case;

const FORMS: [NormalizationForm; 4] = [
    NormalizationForm::Nfd,
    NormalizationForm::Nfkd,
    NormalizationForm::Nfc,
    NormalizationForm::Nfkc,
];

const SAMPLES: &[&str] = &[
    "",
    "plain ascii text",
    "D\u{0307}\u{0323} \u{1E0A}\u{0323}",
    "caf\u{00E9} cafe\u{0301} \u{212B}ngstr\u{00F6}m",
    "\u{D55C}\u{AD6D}\u{C5B4} \u{1100}\u{1161}\u{11A8}",
    "\u{FB01}\u{2460}\u{00BD}\u{FF21}\u{3300}",
    "\u{0958}\u{0915}\u{093C}\u{0344}",
    "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} \u{1F1FA}\u{1F1F8}",
    "a\u{0301}\u{0323}\u{0302}\u{031B}\u{0328}",
    "\u{1F80}\u{1FB3}\u{03B0}",
];

fn engine() -> Engine {
    Engine::new().unwrap()
}

#[test]
fn test_normalization_is_idempotent() {
    let engine = engine();
    for text in SAMPLES {
        for form in FORMS {
            let once = engine.normalize(*text, form).unwrap();
            let twice = engine.normalize(once.as_str(), form).unwrap();
            assert_eq!(once, twice, "{:?} {}", text, form);
        }
    }
}

#[test]
fn test_quick_check_is_sound() {
    let engine = engine();
    for text in SAMPLES {
        for form in FORMS {
            let normalized = engine.normalize(*text, form).unwrap();
            match engine.quick_check(*text, form) {
                QuickCheck::Yes => assert_eq!(&normalized, text, "{:?} {}", text, form),
                QuickCheck::No => assert_ne!(&normalized, text, "{:?} {}", text, form),
                QuickCheck::Maybe => {}
            }
            // Normalized text never answers No.
            assert_ne!(engine.quick_check(normalized.as_str(), form), QuickCheck::No);
            assert!(engine.is_normalized(normalized.as_str(), form).unwrap());
        }
    }
}

#[test]
fn test_decoding_is_deterministic() {
    let mut seed = 0x2545_F491_u32;
    let mut bytes = Vec::new();
    for _ in 0..4096 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        bytes.push(seed as u8);
    }
    for encoding in [
        Encoding::Utf8,
        Encoding::Utf16Be,
        Encoding::Utf16Le,
        Encoding::Utf32Be,
        Encoding::Utf32Le,
    ] {
        let first: Vec<(usize, char)> = Decoder::new(&bytes, encoding).collect();
        let second: Vec<(usize, char)> = Decoder::new(&bytes, encoding).collect();
        assert_eq!(first, second);
        for pair in first.windows(2) {
            assert!(pair[0].0 < pair[1].0, "offsets must increase: {:?}", pair);
        }
    }
}

#[test]
fn test_grapheme_boundaries_cover_input() {
    let engine = engine();
    for text in SAMPLES {
        let boundaries: Vec<_> = engine.graphemes(*text).collect();
        assert_eq!(boundaries.len(), text.chars().count());
        if let Some(last) = boundaries.last() {
            assert_eq!(last.offset, text.len());
            assert_eq!(last.kind, BreakKind::Allowed);
        }
        let covered: usize = engine.graphemes(*text).clusters().map(|span| span.bytes.len()).sum();
        assert_eq!(covered, text.len());
    }
}

#[test]
fn test_regional_indicator_pairing() {
    let engine = engine();
    let flags = "\u{1F1E9}\u{1F1EA}\u{1F1EF}\u{1F1F5}";
    let graphemes: Vec<BreakKind> = engine.graphemes(flags).map(|b| b.kind).collect();
    assert_eq!(&graphemes[..3], &[BreakKind::NoBreak, BreakKind::Allowed, BreakKind::NoBreak]);
    let lines: Vec<BreakKind> = engine.line_breaks(flags).map(|b| b.kind).collect();
    assert_eq!(&lines[..3], &[BreakKind::NoBreak, BreakKind::Allowed, BreakKind::NoBreak]);
}

#[test]
fn test_ascii_case_round_trip() {
    let engine = engine();
    let ascii: String = (0x01u8..0x80).map(char::from).collect();
    let lower = engine.convert_case(ascii.as_str(), CaseMode::Lower).unwrap();
    let upper = engine.convert_case(lower.as_str(), CaseMode::Upper).unwrap();
    assert_eq!(upper, ascii.to_ascii_uppercase());
    assert_eq!(engine.convert_case(upper.as_str(), CaseMode::Lower).unwrap(), lower);
}

#[test_case(b"\xE1\xB8\x8A", &[0x1E0A]; "three byte sequence")]
#[test_case(b"\xFF\x41", &[0xFFFD, 0x41]; "invalid lead")]
fn test_decode_scenarios(bytes: &[u8], expected: &[u32]) {
    let decoded: Vec<u32> = engine().decode(bytes).map(|(_, ch)| ch as u32).collect();
    assert_eq!(decoded, expected.to_vec());
}

#[test]
fn test_normalization_scenarios() {
    let engine = engine();
    let nfd = engine.normalize("D\u{0307}\u{0323}", NormalizationForm::Nfd).unwrap();
    assert_eq!(nfd, "D\u{0323}\u{0307}");
    let nfd = engine.normalize("\u{AC00}", NormalizationForm::Nfd).unwrap();
    assert_eq!(nfd, "\u{1100}\u{1161}");
}

#[test]
fn test_line_scenario() {
    let opportunities: Vec<_> = engine().line_breaks("AB").opportunities().collect();
    assert_eq!(opportunities.len(), 1);
    assert_eq!(opportunities[0].index, 2);
    assert_eq!(opportunities[0].kind, BreakKind::Mandatory);
}

#[test]
fn test_case_scenarios() {
    let engine = engine();
    assert_eq!(engine.convert_case("stra\u{00DF}e", CaseMode::Title).unwrap(), "Stra\u{00DF}e");
    assert_eq!(engine.convert_case("stra\u{00DF}e", CaseMode::Upper).unwrap(), "STRASSE");
}

#[test]
fn test_invalid_codepoints_are_rejected() {
    assert_eq!(Codepoint::new(0xD800), Err(Error::InvalidCodepoint(0xD800)));
    assert_eq!(Codepoint::new(0x110000), Err(Error::InvalidCodepoint(0x110000)));
    assert_eq!(Codepoint::new(0xFFFE), Err(Error::InvalidCodepoint(0xFFFE)));
    assert!(Codepoint::new(0x1F600).is_ok());
}

#[test]
fn test_detected_encodings_round_trip() {
    let engine = engine();
    let text = "h\u{00E9}llo \u{1F600}";
    for encoding in [Encoding::Utf16Be, Encoding::Utf16Le, Encoding::Utf32Be, Encoding::Utf32Le] {
        let bytes = encode_str(text, encoding, true).unwrap();
        assert_eq!(detect_encoding(&bytes).encoding, Some(encoding));
        let decoded: String = engine.decode(Text::detect(&bytes)).map(|(_, ch)| ch).collect();
        assert_eq!(decoded, text);
    }
}
