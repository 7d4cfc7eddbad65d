//! Unconditional entries of SpecialCasing.txt: mappings that expand to more
//! than one codepoint or that differ from the simple ones.
//!
//! The language and context dependent entries (final sigma, Lithuanian,
//! Turkish and Azeri) are not included.

use crate::character_ty::CaseExpansion as Expansion;
use smallvec::smallvec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SpecialCase {
    pub(crate) lower: Expansion,
    pub(crate) title: Expansion,
    pub(crate) upper: Expansion,
}

type Row = (char, &'static [char], &'static [char], &'static [char]);

/// (codepoint, lower, title, upper), sorted by codepoint.
static SPECIAL_CASING: &[Row] = &[
    ('\u{00DF}', &['\u{00DF}'], &['S', 's'], &['S', 'S']),
    ('\u{0130}', &['i', '\u{0307}'], &['\u{0130}'], &['\u{0130}']),
    ('\u{0149}', &['\u{0149}'], &['\u{02BC}', 'N'], &['\u{02BC}', 'N']),
    ('\u{01F0}', &['\u{01F0}'], &['J', '\u{030C}'], &['J', '\u{030C}']),
    (
        '\u{0390}',
        &['\u{0390}'],
        &['\u{0399}', '\u{0308}', '\u{0301}'],
        &['\u{0399}', '\u{0308}', '\u{0301}'],
    ),
    (
        '\u{03B0}',
        &['\u{03B0}'],
        &['\u{03A5}', '\u{0308}', '\u{0301}'],
        &['\u{03A5}', '\u{0308}', '\u{0301}'],
    ),
    ('\u{0587}', &['\u{0587}'], &['\u{0535}', '\u{0582}'], &['\u{0535}', '\u{0552}']),
    ('\u{1E96}', &['\u{1E96}'], &['H', '\u{0331}'], &['H', '\u{0331}']),
    ('\u{1E97}', &['\u{1E97}'], &['T', '\u{0308}'], &['T', '\u{0308}']),
    ('\u{1E98}', &['\u{1E98}'], &['W', '\u{030A}'], &['W', '\u{030A}']),
    ('\u{1E99}', &['\u{1E99}'], &['Y', '\u{030A}'], &['Y', '\u{030A}']),
    ('\u{1E9A}', &['\u{1E9A}'], &['A', '\u{02BE}'], &['A', '\u{02BE}']),
    ('\u{1F50}', &['\u{1F50}'], &['\u{03A5}', '\u{0313}'], &['\u{03A5}', '\u{0313}']),
    (
        '\u{1F52}',
        &['\u{1F52}'],
        &['\u{03A5}', '\u{0313}', '\u{0300}'],
        &['\u{03A5}', '\u{0313}', '\u{0300}'],
    ),
    (
        '\u{1F54}',
        &['\u{1F54}'],
        &['\u{03A5}', '\u{0313}', '\u{0301}'],
        &['\u{03A5}', '\u{0313}', '\u{0301}'],
    ),
    (
        '\u{1F56}',
        &['\u{1F56}'],
        &['\u{03A5}', '\u{0313}', '\u{0342}'],
        &['\u{03A5}', '\u{0313}', '\u{0342}'],
    ),
    ('\u{1FB2}', &['\u{1FB2}'], &['\u{1FBA}', '\u{0345}'], &['\u{1FBA}', '\u{0399}']),
    ('\u{1FB4}', &['\u{1FB4}'], &['\u{0386}', '\u{0345}'], &['\u{0386}', '\u{0399}']),
    ('\u{1FB6}', &['\u{1FB6}'], &['\u{0391}', '\u{0342}'], &['\u{0391}', '\u{0342}']),
    (
        '\u{1FB7}',
        &['\u{1FB7}'],
        &['\u{0391}', '\u{0342}', '\u{0345}'],
        &['\u{0391}', '\u{0342}', '\u{0399}'],
    ),
    ('\u{1FC2}', &['\u{1FC2}'], &['\u{1FCA}', '\u{0345}'], &['\u{1FCA}', '\u{0399}']),
    ('\u{1FC4}', &['\u{1FC4}'], &['\u{0389}', '\u{0345}'], &['\u{0389}', '\u{0399}']),
    ('\u{1FC6}', &['\u{1FC6}'], &['\u{0397}', '\u{0342}'], &['\u{0397}', '\u{0342}']),
    (
        '\u{1FC7}',
        &['\u{1FC7}'],
        &['\u{0397}', '\u{0342}', '\u{0345}'],
        &['\u{0397}', '\u{0342}', '\u{0399}'],
    ),
    (
        '\u{1FD2}',
        &['\u{1FD2}'],
        &['\u{0399}', '\u{0308}', '\u{0300}'],
        &['\u{0399}', '\u{0308}', '\u{0300}'],
    ),
    (
        '\u{1FD3}',
        &['\u{1FD3}'],
        &['\u{0399}', '\u{0308}', '\u{0301}'],
        &['\u{0399}', '\u{0308}', '\u{0301}'],
    ),
    ('\u{1FD6}', &['\u{1FD6}'], &['\u{0399}', '\u{0342}'], &['\u{0399}', '\u{0342}']),
    (
        '\u{1FD7}',
        &['\u{1FD7}'],
        &['\u{0399}', '\u{0308}', '\u{0342}'],
        &['\u{0399}', '\u{0308}', '\u{0342}'],
    ),
    (
        '\u{1FE2}',
        &['\u{1FE2}'],
        &['\u{03A5}', '\u{0308}', '\u{0300}'],
        &['\u{03A5}', '\u{0308}', '\u{0300}'],
    ),
    (
        '\u{1FE3}',
        &['\u{1FE3}'],
        &['\u{03A5}', '\u{0308}', '\u{0301}'],
        &['\u{03A5}', '\u{0308}', '\u{0301}'],
    ),
    ('\u{1FE4}', &['\u{1FE4}'], &['\u{03A1}', '\u{0313}'], &['\u{03A1}', '\u{0313}']),
    ('\u{1FE6}', &['\u{1FE6}'], &['\u{03A5}', '\u{0342}'], &['\u{03A5}', '\u{0342}']),
    (
        '\u{1FE7}',
        &['\u{1FE7}'],
        &['\u{03A5}', '\u{0308}', '\u{0342}'],
        &['\u{03A5}', '\u{0308}', '\u{0342}'],
    ),
    ('\u{1FF2}', &['\u{1FF2}'], &['\u{1FFA}', '\u{0345}'], &['\u{1FFA}', '\u{0399}']),
    ('\u{1FF4}', &['\u{1FF4}'], &['\u{038F}', '\u{0345}'], &['\u{038F}', '\u{0399}']),
    ('\u{1FF6}', &['\u{1FF6}'], &['\u{03A9}', '\u{0342}'], &['\u{03A9}', '\u{0342}']),
    (
        '\u{1FF7}',
        &['\u{1FF7}'],
        &['\u{03A9}', '\u{0342}', '\u{0345}'],
        &['\u{03A9}', '\u{0342}', '\u{0399}'],
    ),
    ('\u{FB00}', &['\u{FB00}'], &['F', 'f'], &['F', 'F']),
    ('\u{FB01}', &['\u{FB01}'], &['F', 'i'], &['F', 'I']),
    ('\u{FB02}', &['\u{FB02}'], &['F', 'l'], &['F', 'L']),
    ('\u{FB03}', &['\u{FB03}'], &['F', 'f', 'i'], &['F', 'F', 'I']),
    ('\u{FB04}', &['\u{FB04}'], &['F', 'f', 'l'], &['F', 'F', 'L']),
    ('\u{FB05}', &['\u{FB05}'], &['S', 't'], &['S', 'T']),
    ('\u{FB06}', &['\u{FB06}'], &['S', 't'], &['S', 'T']),
    ('\u{FB13}', &['\u{FB13}'], &['\u{0544}', '\u{0576}'], &['\u{0544}', '\u{0546}']),
    ('\u{FB14}', &['\u{FB14}'], &['\u{0544}', '\u{0565}'], &['\u{0544}', '\u{0535}']),
    ('\u{FB15}', &['\u{FB15}'], &['\u{0544}', '\u{056B}'], &['\u{0544}', '\u{053B}']),
    ('\u{FB16}', &['\u{FB16}'], &['\u{054E}', '\u{0576}'], &['\u{054E}', '\u{0546}']),
    ('\u{FB17}', &['\u{FB17}'], &['\u{0544}', '\u{056D}'], &['\u{0544}', '\u{053D}']),
];

/// Cheap guard in front of the table. It also admits a few codepoints whose
/// only entries are conditional, so a hit isn't a guarantee.
pub(crate) fn is_candidate(ch: char) -> bool {
    match ch as u32 {
        0x0049 | 0x004A | 0x0069 | 0x00CC | 0x00CD | 0x00DF | 0x0128 | 0x012E | 0x0130
        | 0x0149 | 0x01F0 | 0x0307 | 0x0390 | 0x03A3 | 0x03B0 | 0x0587 => true,
        0x1E96..=0x1E9A | 0x1F50..=0x1FFC | 0xFB00..=0xFB17 => true,
        _ => false,
    }
}

/// Greek letters with ypogegrammeni or prosgegrammeni: the uppercase form
/// spells the iota out as a capital letter.
fn iota_subscript(ch: char) -> Option<SpecialCase> {
    let cp = ch as u32;
    let (lower, title, upper) = match cp {
        0x1F80..=0x1FAF => {
            let group = cp & !0xF;
            let offset = cp & 0x7;
            let capital = match group {
                0x1F80 => 0x1F08,
                0x1F90 => 0x1F28,
                _ => 0x1F68,
            };
            (group + offset, group + 8 + offset, capital + offset)
        }
        0x1FB3 | 0x1FBC => (0x1FB3, 0x1FBC, 0x0391),
        0x1FC3 | 0x1FCC => (0x1FC3, 0x1FCC, 0x0397),
        0x1FF3 | 0x1FFC => (0x1FF3, 0x1FFC, 0x03A9),
        _ => return None,
    };
    Some(SpecialCase {
        lower: smallvec![char::from_u32(lower)?],
        title: smallvec![char::from_u32(title)?],
        upper: smallvec![char::from_u32(upper)?, '\u{0399}'],
    })
}

/// The special casing of `ch`, if it has one.
pub(crate) fn lookup(ch: char) -> Option<SpecialCase> {
    if !is_candidate(ch) {
        return None;
    }
    if let Some(case) = iota_subscript(ch) {
        return Some(case);
    }
    let index = SPECIAL_CASING.binary_search_by_key(&ch, |row| row.0).ok()?;
    let (_, lower, title, upper) = SPECIAL_CASING[index];
    Some(SpecialCase {
        lower: Expansion::from_slice(lower),
        title: Expansion::from_slice(title),
        upper: Expansion::from_slice(upper),
    })
}

#[cfg(test)]
mod tests {
    use super::{is_candidate, lookup, SPECIAL_CASING};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_is_sorted_and_guarded() {
        for pair in SPECIAL_CASING.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{:?}", pair[0].0);
        }
        for row in SPECIAL_CASING {
            assert!(is_candidate(row.0), "{:?}", row.0);
        }
    }

    #[test]
    fn test_sharp_s() {
        let case = lookup('ß').unwrap();
        assert_eq!(case.upper.as_slice(), &['S', 'S']);
        assert_eq!(case.title.as_slice(), &['S', 's']);
        assert_eq!(case.lower.as_slice(), &['ß']);
    }

    #[test]
    fn test_iota_subscript() {
        let case = lookup('\u{1F8A}').unwrap();
        assert_eq!(case.lower.as_slice(), &['\u{1F82}']);
        assert_eq!(case.title.as_slice(), &['\u{1F8A}']);
        assert_eq!(case.upper.as_slice(), &['\u{1F0A}', '\u{0399}']);
        let case = lookup('\u{1FF3}').unwrap();
        assert_eq!(case.title.as_slice(), &['\u{1FFC}']);
        assert_eq!(case.upper.as_slice(), &['\u{03A9}', '\u{0399}']);
    }

    #[test]
    fn test_matches_std_uppercase() {
        for &(ch, _, _, upper) in SPECIAL_CASING {
            let expected: Vec<char> = ch.to_uppercase().collect();
            assert_eq!(upper, expected.as_slice(), "{:?}", ch);
        }
        for cp in 0x1F80..=0x1FAF {
            let ch = char::from_u32(cp).unwrap();
            let expected: Vec<char> = ch.to_uppercase().collect();
            assert_eq!(lookup(ch).unwrap().upper.as_slice(), expected.as_slice());
        }
    }

    #[test]
    fn test_conditional_only_candidates_miss() {
        assert!(is_candidate('I'));
        assert_eq!(lookup('I'), None);
        assert_eq!(lookup('\u{03A3}'), None);
        assert_eq!(lookup('a'), None);
        // In range but not listed.
        assert_eq!(lookup('\u{1F51}'), None);
    }
}
