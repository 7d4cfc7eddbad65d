//! Algorithmic Hangul syllable handling (Unicode chapter 3.12).

use smallvec::SmallVec;

pub(crate) const S_BASE: u32 = 0xAC00;
pub(crate) const L_BASE: u32 = 0x1100;
pub(crate) const V_BASE: u32 = 0x1161;
pub(crate) const T_BASE: u32 = 0x11A7;
pub(crate) const L_COUNT: u32 = 19;
pub(crate) const V_COUNT: u32 = 21;
pub(crate) const T_COUNT: u32 = 28;
pub(crate) const N_COUNT: u32 = V_COUNT * T_COUNT;
pub(crate) const S_COUNT: u32 = L_COUNT * N_COUNT;

const CHOSEONG_NAMES: [&str; L_COUNT as usize] = [
    "G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S", "SS", "", "J", "JJ", "C", "K", "T", "P",
    "H",
];

const JUNGSEONG_NAMES: [&str; V_COUNT as usize] = [
    "A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA", "WAE", "OE", "YO", "U", "WEO", "WE",
    "WI", "YU", "EU", "YI", "I",
];

const JONGSEONG_NAMES: [&str; T_COUNT as usize] = [
    "", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG", "LM", "LB", "LS", "LT", "LP", "LH", "M",
    "B", "BS", "S", "SS", "NG", "J", "C", "K", "T", "P", "H",
];

pub(crate) type Jamos = SmallVec<[char; 3]>;

#[inline]
pub(crate) fn is_syllable(ch: char) -> bool {
    (ch as u32).wrapping_sub(S_BASE) < S_COUNT
}

#[inline]
fn is_l(v: u32) -> bool {
    v.wrapping_sub(L_BASE) < L_COUNT
}

#[inline]
fn is_v(v: u32) -> bool {
    v.wrapping_sub(V_BASE) < V_COUNT
}

// T_BASE itself is not a trailing consonant.
#[inline]
fn is_t(v: u32) -> bool {
    let t = v.wrapping_sub(T_BASE);
    t > 0 && t < T_COUNT
}

pub(crate) fn is_jamo(ch: char) -> bool {
    let v = ch as u32;
    is_l(v) || is_v(v) || is_t(v)
}

/// Splits a precomposed syllable into two or three conjoining jamo.
pub(crate) fn decompose(ch: char) -> Option<Jamos> {
    if !is_syllable(ch) {
        return None;
    }
    let s_index = ch as u32 - S_BASE;
    let l = L_BASE + s_index / N_COUNT;
    let v = V_BASE + (s_index % N_COUNT) / T_COUNT;
    let t = T_BASE + s_index % T_COUNT;

    let mut jamos = Jamos::new();
    jamos.extend([l, v].iter().copied().filter_map(char::from_u32));
    if t != T_BASE {
        jamos.extend(char::from_u32(t));
    }
    Some(jamos)
}

/// Composes an L+V pair into an LV syllable, or an LV syllable and a T into
/// an LVT syllable.
pub(crate) fn compose(first: char, second: char) -> Option<char> {
    let (a, b) = (first as u32, second as u32);
    if is_l(a) && is_v(b) {
        let l_index = a - L_BASE;
        let v_index = b - V_BASE;
        return char::from_u32(S_BASE + (l_index * V_COUNT + v_index) * T_COUNT);
    }
    if is_syllable(first) && (a - S_BASE) % T_COUNT == 0 && is_t(b) {
        return char::from_u32(a + (b - T_BASE));
    }
    None
}

/// The algorithmic character name, e.g. "HANGUL SYLLABLE GAG".
pub(crate) fn syllable_name(ch: char) -> Option<String> {
    if !is_syllable(ch) {
        return None;
    }
    let s_index = ch as u32 - S_BASE;
    let l_index = (s_index / N_COUNT) as usize;
    let v_index = ((s_index % N_COUNT) / T_COUNT) as usize;
    let t_index = (s_index % T_COUNT) as usize;
    Some(format!(
        "HANGUL SYLLABLE {}{}{}",
        CHOSEONG_NAMES[l_index], JUNGSEONG_NAMES[v_index], JONGSEONG_NAMES[t_index]
    ))
}
