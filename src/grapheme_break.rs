use crate::boundary_ty::{scan, Boundary, BreakKind, Clusters, Opportunities, Scanned};
use crate::decoder::Decoder;
use crate::properties_ty::{GraphemeBreak, IndicConjunctBreak};
use crate::property_vector::PropertyId;
use crate::provider::PropertyProvider;
use crate::sequence_tracker::SequenceTracker;
use std::fmt;

/// Extended grapheme cluster boundaries (UAX #29).
///
/// Yields one [`Boundary`] after every codepoint; the last one is the end
/// of text and always a break. The kinds are [`BreakKind::NoBreak`] and
/// [`BreakKind::Allowed`].
pub struct Graphemes<'a, P> {
    provider: &'a P,
    decoder: Decoder<'a>,
    upcoming: Option<Scanned>,
    started: bool,
    index: usize,
    tracker: SequenceTracker,
}

impl<'a, P: PropertyProvider> Graphemes<'a, P> {
    pub(crate) fn new(provider: &'a P, decoder: Decoder<'a>) -> Self {
        Graphemes {
            provider,
            decoder,
            upcoming: None,
            started: false,
            index: 0,
            tracker: SequenceTracker::default(),
        }
    }

    /// Only the boundaries of clusters.
    pub fn opportunities(self) -> Opportunities<Self> {
        Opportunities::new(self)
    }

    /// The clusters themselves.
    pub fn clusters(self) -> Clusters<Self> {
        Clusters::new(self)
    }

    fn decide(&self, prev: &Scanned, next: &Scanned) -> BreakKind {
        use GraphemeBreak::*;

        let (before, after) = (prev.props.grapheme_break(), next.props.grapheme_break());
        match (before, after) {
            // GB3
            (Cr, Lf) => return BreakKind::NoBreak,
            // GB4, GB5
            (Control | Cr | Lf, _) | (_, Control | Cr | Lf) => return BreakKind::Allowed,
            // GB6
            (L, L | V | Lv | Lvt) => return BreakKind::NoBreak,
            // GB7
            (Lv | V, V | T) => return BreakKind::NoBreak,
            // GB8
            (Lvt | T, T) => return BreakKind::NoBreak,
            // GB9, GB9a, GB9b
            (_, Extend | Zwj | SpacingMark) | (Prepend, _) => return BreakKind::NoBreak,
            _ => {}
        }
        // GB9c
        if next.props.indic_conjunct_break() == IndicConjunctBreak::Consonant
            && self.tracker.conjunct_linked()
        {
            return BreakKind::NoBreak;
        }
        // GB11
        if before == Zwj
            && next.props.has(PropertyId::ExtendedPictographic)
            && self.tracker.bridges_pictographic()
        {
            return BreakKind::NoBreak;
        }
        // GB12, GB13
        if before == RegionalIndicator
            && after == RegionalIndicator
            && self.tracker.regional_indicator_open()
        {
            return BreakKind::NoBreak;
        }
        // GB999
        BreakKind::Allowed
    }
}

impl<P: PropertyProvider> Iterator for Graphemes<'_, P> {
    type Item = Boundary;

    fn next(&mut self) -> Option<Boundary> {
        let current = match self.upcoming.take() {
            Some(scanned) => scanned,
            None if !self.started => {
                self.started = true;
                scan(self.provider, &mut self.decoder)?
            }
            None => return None,
        };
        self.tracker.update(&current.props);
        let next = scan(self.provider, &mut self.decoder);
        self.index += 1;
        let (offset, kind) = match &next {
            Some(next) => (next.offset, self.decide(&current, next)),
            // GB2
            None => (current.end, BreakKind::Allowed),
        };
        self.upcoming = next;
        Some(Boundary {
            index: self.index,
            offset,
            kind,
        })
    }
}

impl<P> Clone for Graphemes<'_, P> {
    fn clone(&self) -> Self {
        Graphemes {
            provider: self.provider,
            decoder: self.decoder.clone(),
            upcoming: self.upcoming,
            started: self.started,
            index: self.index,
            tracker: self.tracker,
        }
    }
}

impl<P: PropertyProvider> fmt::Debug for Graphemes<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graphemes(")?;
        f.debug_list()
            .entries(self.clone().map(|boundary| boundary.kind))
            .finish()?;
        write!(f, ")")
    }
}
