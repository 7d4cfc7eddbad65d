use crate::properties_ty::{GraphemeBreak, IndicConjunctBreak};
use crate::property_vector::{PropertyId, PropertyVector};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PictographicRun {
    None,
    /// `ExtPict Extend*`
    Open,
    /// `ExtPict Extend* ZWJ`
    Bridging,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ConjunctRun {
    None,
    /// `Consonant [Extend Linker]*` without a linker yet.
    Consonant,
    /// A linker has followed the consonant.
    Linked,
}

/// Multi-codepoint context that the pairwise break rules can't see.
///
/// Both segmenters feed it every codepoint they treat as a unit of their
/// own, after the pair ending at that codepoint has been decided.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SequenceTracker {
    pictographic: PictographicRun,
    conjunct: ConjunctRun,
    regional_indicators: usize,
}

impl Default for SequenceTracker {
    fn default() -> Self {
        SequenceTracker {
            pictographic: PictographicRun::None,
            conjunct: ConjunctRun::None,
            regional_indicators: 0,
        }
    }
}

impl SequenceTracker {
    pub(crate) fn update(&mut self, props: &PropertyVector) {
        let gcb = props.grapheme_break();

        self.pictographic = if props.has(PropertyId::ExtendedPictographic) {
            PictographicRun::Open
        } else {
            match (self.pictographic, gcb) {
                (PictographicRun::Open, GraphemeBreak::Extend) => PictographicRun::Open,
                (PictographicRun::Open, GraphemeBreak::Zwj) => PictographicRun::Bridging,
                _ => PictographicRun::None,
            }
        };

        self.conjunct = match (self.conjunct, props.indic_conjunct_break()) {
            (_, IndicConjunctBreak::Consonant) => ConjunctRun::Consonant,
            (ConjunctRun::None, _) => ConjunctRun::None,
            (_, IndicConjunctBreak::Linker) => ConjunctRun::Linked,
            (run, IndicConjunctBreak::Extend) => run,
            (_, IndicConjunctBreak::None) => ConjunctRun::None,
        };

        if gcb == GraphemeBreak::RegionalIndicator {
            self.regional_indicators += 1;
        } else {
            self.regional_indicators = 0;
        }
    }

    /// The last codepoint is a ZWJ ending `ExtPict Extend*`.
    pub(crate) fn bridges_pictographic(&self) -> bool {
        self.pictographic == PictographicRun::Bridging
    }

    /// A consonant followed by at least one linker, possibly with extenders.
    pub(crate) fn conjunct_linked(&self) -> bool {
        self.conjunct == ConjunctRun::Linked
    }

    /// An odd number of regional indicators ends here, so the last one
    /// still waits for its partner.
    pub(crate) fn regional_indicator_open(&self) -> bool {
        self.regional_indicators % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::SequenceTracker;
    use crate::provider::{PropertyProvider, UcdProvider};

    fn feed(text: &str) -> SequenceTracker {
        let mut tracker = SequenceTracker::default();
        for ch in text.chars() {
            tracker.update(&UcdProvider.properties(ch));
        }
        tracker
    }

    #[test]
    fn test_pictographic_run() {
        assert!(feed("\u{1F468}\u{200D}").bridges_pictographic());
        assert!(feed("\u{1F468}\u{1F3FD}\u{200D}").bridges_pictographic());
        assert!(feed("\u{2764}\u{FE0F}\u{200D}").bridges_pictographic());
        assert!(!feed("a\u{200D}").bridges_pictographic());
        assert!(!feed("\u{1F468}x\u{200D}").bridges_pictographic());
        assert!(!feed("\u{1F468}").bridges_pictographic());
    }

    #[test]
    fn test_conjunct_run() {
        // KA VIRAMA
        assert!(feed("\u{0915}\u{094D}").conjunct_linked());
        // KA NUKTA VIRAMA
        assert!(feed("\u{0915}\u{093C}\u{094D}").conjunct_linked());
        // KA VIRAMA ZWJ
        assert!(feed("\u{0915}\u{094D}\u{200D}").conjunct_linked());
        assert!(!feed("\u{0915}").conjunct_linked());
        assert!(!feed("\u{094D}").conjunct_linked());
        assert!(!feed("\u{0915}\u{094D}a").conjunct_linked());
    }

    #[test]
    fn test_regional_indicator_parity() {
        let ri = '\u{1F1E6}';
        let mut tracker = SequenceTracker::default();
        let mut open = Vec::new();
        for _ in 0..4 {
            tracker.update(&UcdProvider.properties(ri));
            open.push(tracker.regional_indicator_open());
        }
        assert_eq!(open, vec![true, false, true, false]);
        tracker.update(&UcdProvider.properties('a'));
        assert!(!tracker.regional_indicator_open());
    }
}
