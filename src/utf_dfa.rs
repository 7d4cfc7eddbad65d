//! Per-unit automata for the three Unicode encoding forms.
//!
//! Every automaton shares the same state encoding: [`ACCEPT`] after a
//! complete codepoint, [`REJECT`] after an ill-formed unit and anything else
//! while a sequence is pending. The partial codepoint lives with the caller.

pub(crate) const ACCEPT: u8 = 0;
pub(crate) const REJECT: u8 = 1;

const CONT1: u8 = 2;
const CONT2: u8 = 3;
const E0_LEAD: u8 = 4;
const ED_LEAD: u8 = 5;
const CONT3: u8 = 6;
const F0_LEAD: u8 = 7;
const F4_LEAD: u8 = 8;

const UTF8_STATE_COUNT: usize = 9;
const UTF8_CLASS_COUNT: usize = 12;

// 0: ASCII, 1: 80..8F, 2: 90..9F, 3: A0..BF, 4: never valid, 5: C2..DF,
// 6: E0, 7: E1..EC EE..EF, 8: ED, 9: F0, 10: F1..F3, 11: F4.
const fn utf8_class(byte: u8) -> u8 {
    match byte {
        0x00..=0x7F => 0,
        0x80..=0x8F => 1,
        0x90..=0x9F => 2,
        0xA0..=0xBF => 3,
        0xC0..=0xC1 | 0xF5..=0xFF => 4,
        0xC2..=0xDF => 5,
        0xE0 => 6,
        0xE1..=0xEC | 0xEE..=0xEF => 7,
        0xED => 8,
        0xF0 => 9,
        0xF1..=0xF3 => 10,
        0xF4 => 11,
    }
}

static UTF8_CLASSES: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = utf8_class(i as u8);
        i += 1;
    }
    table
};

const R: u8 = REJECT;

static UTF8_TRANSITIONS: [[u8; UTF8_CLASS_COUNT]; UTF8_STATE_COUNT] = [
    // ACCEPT
    [ACCEPT, R, R, R, R, CONT1, E0_LEAD, CONT2, ED_LEAD, F0_LEAD, CONT3, F4_LEAD],
    // REJECT
    [R; UTF8_CLASS_COUNT],
    // CONT1
    [R, ACCEPT, ACCEPT, ACCEPT, R, R, R, R, R, R, R, R],
    // CONT2
    [R, CONT1, CONT1, CONT1, R, R, R, R, R, R, R, R],
    // E0_LEAD: A0..BF only, no overlongs
    [R, R, R, CONT1, R, R, R, R, R, R, R, R],
    // ED_LEAD: 80..9F only, no surrogates
    [R, CONT1, CONT1, R, R, R, R, R, R, R, R, R],
    // CONT3
    [R, CONT2, CONT2, CONT2, R, R, R, R, R, R, R, R],
    // F0_LEAD: 90..BF only, no overlongs
    [R, R, CONT2, CONT2, R, R, R, R, R, R, R, R],
    // F4_LEAD: 80..8F only, nothing above U+10FFFF
    [R, CONT2, R, R, R, R, R, R, R, R, R, R],
];

/// Advances the UTF-8 automaton by one byte, accumulating into `cp`.
#[inline]
pub(crate) fn utf8_step(state: u8, byte: u8, cp: &mut u32) -> u8 {
    if state == ACCEPT && byte < 0x80 {
        *cp = byte as u32;
        return ACCEPT;
    }
    let class = UTF8_CLASSES[byte as usize];
    *cp = if state == ACCEPT {
        let mask = match class {
            5 => 0x1F,
            6..=8 => 0x0F,
            _ => 0x07,
        };
        (byte & mask) as u32
    } else {
        (*cp << 6) | (byte & 0x3F) as u32
    };
    match UTF8_TRANSITIONS.get(state as usize) {
        Some(row) => row[class as usize],
        None => REJECT,
    }
}

/// Whether `byte` can begin a well-formed UTF-8 sequence.
#[inline]
pub(crate) fn utf8_is_starter(byte: u8) -> bool {
    !matches!(UTF8_CLASSES[byte as usize], 1..=4)
}

const HIGH_SURROGATE: u8 = 2;

/// Advances the UTF-16 automaton by one 16-bit unit.
#[inline]
pub(crate) fn utf16_step(state: u8, unit: u16, cp: &mut u32) -> u8 {
    let unit = unit as u32;
    match (state, unit) {
        (ACCEPT, 0xD800..=0xDBFF) => {
            *cp = (unit & 0x3FF) << 10;
            HIGH_SURROGATE
        }
        (ACCEPT, 0xDC00..=0xDFFF) => REJECT,
        (ACCEPT, _) => {
            *cp = unit;
            ACCEPT
        }
        (HIGH_SURROGATE, 0xDC00..=0xDFFF) => {
            *cp = 0x10000 + (*cp | (unit & 0x3FF));
            ACCEPT
        }
        _ => REJECT,
    }
}

/// Whether `unit` can begin a well-formed UTF-16 sequence.
#[inline]
pub(crate) fn utf16_is_starter(unit: u16) -> bool {
    !(0xDC00..=0xDFFF).contains(&unit)
}

/// Validates one UTF-32 unit.
#[inline]
pub(crate) fn utf32_step(unit: u32, cp: &mut u32) -> u8 {
    if unit > 0x10FFFF || (0xD800..=0xDFFF).contains(&unit) {
        return REJECT;
    }
    *cp = unit;
    ACCEPT
}

#[cfg(test)]
mod tests {
    use super::{utf16_step, utf32_step, utf8_is_starter, utf8_step, ACCEPT, REJECT};
    use pretty_assertions::assert_eq;

    fn run_utf8(bytes: &[u8]) -> (u8, u32) {
        let mut state = ACCEPT;
        let mut cp = 0;
        for &b in bytes {
            state = utf8_step(state, b, &mut cp);
            if state == REJECT {
                break;
            }
        }
        (state, cp)
    }

    #[test]
    fn test_utf8_accepts_every_scalar_value() {
        let mut buf = [0u8; 4];
        for v in (0..=0x10FFFFu32).step_by(7) {
            if let Some(ch) = char::from_u32(v) {
                let encoded = ch.encode_utf8(&mut buf);
                assert_eq!(run_utf8(encoded.as_bytes()), (ACCEPT, v));
            }
        }
    }

    #[test]
    fn test_utf8_rejects_ill_formed() {
        // overlong
        assert_eq!(run_utf8(&[0xC0, 0x80]).0, REJECT);
        assert_eq!(run_utf8(&[0xE0, 0x80, 0x80]).0, REJECT);
        assert_eq!(run_utf8(&[0xF0, 0x80, 0x80, 0x80]).0, REJECT);
        // surrogate
        assert_eq!(run_utf8(&[0xED, 0xA0, 0x80]).0, REJECT);
        // out of range
        assert_eq!(run_utf8(&[0xF4, 0x90, 0x80, 0x80]).0, REJECT);
        assert_eq!(run_utf8(&[0xF5]).0, REJECT);
        // stray continuation
        assert_eq!(run_utf8(&[0x80]).0, REJECT);
        // lead followed by a non-continuation
        assert_eq!(run_utf8(&[0xE1, 0x41]).0, REJECT);
    }

    #[test]
    fn test_utf8_pending() {
        let (state, _) = run_utf8(&[0xE1, 0xB8]);
        assert!(state != ACCEPT && state != REJECT);
        assert_eq!(run_utf8(&[0xE1, 0xB8, 0x8A]), (ACCEPT, 0x1E0A));
    }

    #[test]
    fn test_utf8_starter() {
        assert!(utf8_is_starter(b'A'));
        assert!(utf8_is_starter(0xC2));
        assert!(utf8_is_starter(0xF4));
        assert!(!utf8_is_starter(0x80));
        assert!(!utf8_is_starter(0xC0));
        assert!(!utf8_is_starter(0xFF));
    }

    #[test]
    fn test_utf16() {
        let mut cp = 0;
        assert_eq!(utf16_step(ACCEPT, 0x0041, &mut cp), ACCEPT);
        assert_eq!(cp, 0x41);
        let state = utf16_step(ACCEPT, 0xD83D, &mut cp);
        assert!(state != ACCEPT && state != REJECT);
        assert_eq!(utf16_step(state, 0xDE00, &mut cp), ACCEPT);
        assert_eq!(cp, 0x1F600);
        assert_eq!(utf16_step(ACCEPT, 0xDE00, &mut cp), REJECT);
        assert_eq!(utf16_step(state, 0x0041, &mut cp), REJECT);
        assert_eq!(utf16_step(state, 0xD83D, &mut cp), REJECT);
    }

    #[test]
    fn test_utf32() {
        let mut cp = 0;
        assert_eq!(utf32_step(0x1F600, &mut cp), ACCEPT);
        assert_eq!(cp, 0x1F600);
        assert_eq!(utf32_step(0xD800, &mut cp), REJECT);
        assert_eq!(utf32_step(0x110000, &mut cp), REJECT);
        assert_eq!(utf32_step(0x10FFFF, &mut cp), ACCEPT);
    }
}
