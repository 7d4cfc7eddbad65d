use crate::boundary_ty::{scan, Boundary, BreakKind, Opportunities, Scanned};
use crate::character_ty::GeneralCategory;
use crate::decoder::Decoder;
use crate::properties_ty::LineBreakClass;
use crate::property_vector::{PropertyId, PropertyVector};
use crate::provider::PropertyProvider;
use crate::sequence_tracker::SequenceTracker;
use std::fmt;

const DOTTED_CIRCLE: char = '\u{25CC}';

/// LB1: resolve the classes that have no rules of their own.
fn resolve_class(props: &PropertyVector) -> LineBreakClass {
    use LineBreakClass::*;
    match props.line_break() {
        Ambiguous | Surrogate | Unknown => Alphabetic,
        ComplexContext => match props.general_category() {
            GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark => CombiningMark,
            _ => Alphabetic,
        },
        ConditionalJapaneseStarter => Nonstarter,
        class => class,
    }
}

/// A codepoint as the pair rules see it, after combining marks have been
/// folded into their base.
#[derive(Copy, Clone, Debug)]
struct LineUnit {
    class: LineBreakClass,
    ch: char,
    east_asian: bool,
    category: GeneralCategory,
    pictographic: bool,
}

impl LineUnit {
    fn new(ch: char, class: LineBreakClass, props: &PropertyVector) -> Self {
        LineUnit {
            class,
            ch,
            east_asian: props.east_asian_width().is_east_asian(),
            category: props.general_category(),
            pictographic: props.has(PropertyId::ExtendedPictographic),
        }
    }

    fn from_scanned(scanned: &Scanned) -> Self {
        let class = match resolve_class(&scanned.props) {
            // LB10
            LineBreakClass::CombiningMark | LineBreakClass::Zwj => LineBreakClass::Alphabetic,
            class => class,
        };
        LineUnit::new(scanned.ch, class, &scanned.props)
    }

    fn is(&self, class: LineBreakClass) -> bool {
        self.class == class
    }

    fn is_initial_quote(&self) -> bool {
        self.class == LineBreakClass::Quotation
            && self.category == GeneralCategory::InitialPunctuation
    }

    fn is_final_quote(&self) -> bool {
        self.class == LineBreakClass::Quotation
            && self.category == GeneralCategory::FinalPunctuation
    }

    fn is_hyphen_like(&self) -> bool {
        matches!(self.class, LineBreakClass::Hyphen | LineBreakClass::UnambiguousHyphen)
    }

    fn is_aksara_base(&self) -> bool {
        matches!(self.class, LineBreakClass::Aksara | LineBreakClass::AksaraStart)
            || self.ch == DOTTED_CIRCLE
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum NumericRun {
    None,
    /// `NU (SY | IS)*`
    Digits,
    /// `NU (SY | IS)* (CL | CP)`
    Closed,
}

/// Everything the rules need to know about the text read so far.
#[derive(Copy, Clone, Debug)]
struct LineContext {
    /// Resolved class of the last codepoint itself, for LB4 to LB8a.
    raw: LineBreakClass,
    /// The last unit, with combining marks folded in.
    last: LineUnit,
    /// The unit before `last`, `None` at start of text.
    before_last: Option<LineUnit>,
    /// The last unit that isn't a space.
    last_non_space: LineUnit,
    /// The initial quote in `last_non_space` follows a break context (LB15a).
    quote_opens: bool,
    numeric: NumericRun,
}

impl LineContext {
    fn start(unit: LineUnit, raw: LineBreakClass) -> Self {
        let mut context = LineContext {
            raw,
            last: unit,
            before_last: None,
            last_non_space: unit,
            quote_opens: false,
            numeric: NumericRun::None,
        };
        context.note(unit);
        context
    }

    fn push(&mut self, unit: LineUnit, raw: LineBreakClass) {
        self.raw = raw;
        self.before_last = Some(self.last);
        self.last = unit;
        self.note(unit);
    }

    fn note(&mut self, unit: LineUnit) {
        use LineBreakClass::*;
        if !unit.is(Space) {
            self.last_non_space = unit;
            self.quote_opens = unit.is_initial_quote()
                && self.before_last.map_or(true, |before| {
                    matches!(
                        before.class,
                        MandatoryBreak
                            | CarriageReturn
                            | LineFeed
                            | NextLine
                            | OpenPunctuation
                            | Quotation
                            | Glue
                            | Space
                            | ZwSpace
                    )
                });
        }
        self.numeric = match (self.numeric, unit.class) {
            (_, Numeric) => NumericRun::Digits,
            (NumericRun::Digits, BreakSymbols | InfixNumeric) => NumericRun::Digits,
            (NumericRun::Digits, ClosePunctuation | CloseParenthesis) => NumericRun::Closed,
            _ => NumericRun::None,
        };
    }
}

/// Line break opportunities (UAX #14).
///
/// Yields one [`Boundary`] after every codepoint; the last one is the end
/// of text and always [`BreakKind::Mandatory`].
pub struct LineBreaks<'a, P> {
    provider: &'a P,
    decoder: Decoder<'a>,
    upcoming: Option<Scanned>,
    started: bool,
    index: usize,
    context: Option<LineContext>,
    tracker: SequenceTracker,
}

impl<'a, P: PropertyProvider> LineBreaks<'a, P> {
    pub(crate) fn new(provider: &'a P, decoder: Decoder<'a>) -> Self {
        LineBreaks {
            provider,
            decoder,
            upcoming: None,
            started: false,
            index: 0,
            context: None,
            tracker: SequenceTracker::default(),
        }
    }

    /// Only the positions where a line may or must end.
    pub fn opportunities(self) -> Opportunities<Self> {
        Opportunities::new(self)
    }

    /// The unit `skip` units after `next`. Marks following a unit belong to
    /// it, as in LB9.
    fn lookahead(&self, next: &Scanned, skip: usize) -> Option<LineUnit> {
        let mut decoder = self.decoder.clone();
        let mut owner = LineUnit::from_scanned(next).class;
        let mut remaining = skip;
        loop {
            let scanned = scan(self.provider, &mut decoder)?;
            let raw = resolve_class(&scanned.props);
            if matches!(raw, LineBreakClass::CombiningMark | LineBreakClass::Zwj)
                && !absorbs_nothing(owner)
            {
                continue;
            }
            let unit = LineUnit::from_scanned(&scanned);
            if remaining == 0 {
                return Some(unit);
            }
            remaining -= 1;
            owner = unit.class;
        }
    }

    fn advance(&mut self, scanned: &Scanned) {
        let raw = resolve_class(&scanned.props);
        match self.context.as_mut() {
            None => {
                let unit = LineUnit::from_scanned(scanned);
                self.tracker.update(&scanned.props);
                self.context = Some(LineContext::start(unit, raw));
            }
            Some(context) => {
                let absorbs = matches!(raw, LineBreakClass::CombiningMark | LineBreakClass::Zwj)
                    && !absorbs_nothing(context.last.class);
                if absorbs {
                    // LB9: X (CM | ZWJ)* stays X.
                    context.raw = raw;
                } else {
                    let unit = LineUnit::from_scanned(scanned);
                    self.tracker.update(&scanned.props);
                    context.push(unit, raw);
                }
            }
        }
    }

    fn decide(&self, context: &LineContext, next: &Scanned) -> BreakKind {
        use BreakKind::{Allowed, Mandatory, NoBreak};
        use LineBreakClass::*;

        let raw_next = resolve_class(&next.props);
        let x = context.last;
        let base = context.last_non_space;

        // LB4, LB5
        match (context.raw, raw_next) {
            (MandatoryBreak, _) => return Mandatory,
            (CarriageReturn, LineFeed) => return NoBreak,
            (CarriageReturn | LineFeed | NextLine, _) => return Mandatory,
            _ => {}
        }
        // LB6, LB7
        if matches!(
            raw_next,
            MandatoryBreak | CarriageReturn | LineFeed | NextLine | Space | ZwSpace
        ) {
            return NoBreak;
        }
        // LB8
        if base.is(ZwSpace) {
            return Allowed;
        }
        // LB8a
        if context.raw == Zwj {
            return NoBreak;
        }
        // LB9
        if matches!(raw_next, CombiningMark | Zwj) && !absorbs_nothing(x.class) {
            return NoBreak;
        }
        let n = LineUnit::from_scanned(next);

        // LB11
        if n.is(WordJoiner) || x.is(WordJoiner) {
            return NoBreak;
        }
        // LB12, LB12a
        if x.is(Glue)
            || (n.is(Glue) && !matches!(x.class, Space | BreakAfter | Hyphen | UnambiguousHyphen))
        {
            return NoBreak;
        }
        // LB13
        if matches!(n.class, ClosePunctuation | CloseParenthesis | Exclamation | BreakSymbols) {
            return NoBreak;
        }
        // LB14
        if base.is(OpenPunctuation) {
            return NoBreak;
        }
        // LB15a
        if context.quote_opens {
            return NoBreak;
        }
        // LB15b
        if n.is_final_quote() {
            let closes = self.lookahead(next, 0).map_or(true, |after| {
                matches!(
                    after.class,
                    Space
                        | Glue
                        | WordJoiner
                        | ClosePunctuation
                        | Quotation
                        | CloseParenthesis
                        | Exclamation
                        | InfixNumeric
                        | BreakSymbols
                        | MandatoryBreak
                        | CarriageReturn
                        | LineFeed
                        | NextLine
                        | ZwSpace
                )
            });
            if closes {
                return NoBreak;
            }
        }
        if n.is(InfixNumeric) {
            // LB15c
            if x.is(Space) && self.lookahead(next, 0).map_or(false, |after| after.is(Numeric)) {
                return Allowed;
            }
            // LB15d
            return NoBreak;
        }
        // LB16
        if matches!(base.class, ClosePunctuation | CloseParenthesis) && n.is(Nonstarter) {
            return NoBreak;
        }
        // LB17
        if base.is(BreakBoth) && n.is(BreakBoth) {
            return NoBreak;
        }
        // LB18
        if x.is(Space) {
            return Allowed;
        }
        // LB19
        if (n.is(Quotation) && !n.is_initial_quote()) || (x.is(Quotation) && !x.is_final_quote()) {
            return NoBreak;
        }
        // LB19a
        if n.is(Quotation) {
            if !x.east_asian || self.lookahead(next, 0).map_or(true, |after| !after.east_asian) {
                return NoBreak;
            }
        }
        if x.is(Quotation) {
            if !n.east_asian || context.before_last.map_or(true, |before| !before.east_asian) {
                return NoBreak;
            }
        }
        // LB20
        if n.is(ContingentBreak) || x.is(ContingentBreak) {
            return Allowed;
        }
        // LB20a
        if x.is_hyphen_like()
            && matches!(n.class, Alphabetic | HebrewLetter)
            && context.before_last.map_or(true, |before| {
                matches!(
                    before.class,
                    MandatoryBreak
                        | CarriageReturn
                        | LineFeed
                        | NextLine
                        | Space
                        | ZwSpace
                        | ContingentBreak
                        | Glue
                )
            })
        {
            return NoBreak;
        }
        // LB21
        if matches!(n.class, BreakAfter | Hyphen | UnambiguousHyphen | Nonstarter)
            || x.is(BreakBefore)
        {
            return NoBreak;
        }
        // LB21a
        if x.is_hyphen_like()
            && !n.is(HebrewLetter)
            && context.before_last.map_or(false, |before| before.is(HebrewLetter))
        {
            return NoBreak;
        }
        // LB21b
        if x.is(BreakSymbols) && n.is(HebrewLetter) {
            return NoBreak;
        }
        // LB22
        if n.is(Inseparable) {
            return NoBreak;
        }
        match (x.class, n.class) {
            // LB23
            (Alphabetic | HebrewLetter, Numeric) | (Numeric, Alphabetic | HebrewLetter) => {
                return NoBreak
            }
            // LB23a
            (PrefixNumeric, Ideographic | EBase | EModifier)
            | (Ideographic | EBase | EModifier, PostfixNumeric) => return NoBreak,
            // LB24
            (PrefixNumeric | PostfixNumeric, Alphabetic | HebrewLetter)
            | (Alphabetic | HebrewLetter, PrefixNumeric | PostfixNumeric) => return NoBreak,
            _ => {}
        }
        // LB25
        match (context.numeric, n.class) {
            (NumericRun::Closed, PostfixNumeric | PrefixNumeric)
            | (NumericRun::Digits, PostfixNumeric | PrefixNumeric | Numeric) => return NoBreak,
            _ => {}
        }
        match (x.class, n.class) {
            (PostfixNumeric | PrefixNumeric, OpenPunctuation) => {
                let numeric_follows = match self.lookahead(next, 0) {
                    Some(after) if after.is(Numeric) => true,
                    Some(after) if after.is(InfixNumeric) => {
                        self.lookahead(next, 1).map_or(false, |after| after.is(Numeric))
                    }
                    _ => false,
                };
                if numeric_follows {
                    return NoBreak;
                }
            }
            (PostfixNumeric | PrefixNumeric | Hyphen | InfixNumeric, Numeric) => return NoBreak,
            // LB26
            (Jl, Jl | Jv | H2 | H3) | (Jv | H2, Jv | Jt) | (Jt | H3, Jt) => return NoBreak,
            // LB27
            (Jl | Jv | Jt | H2 | H3, PostfixNumeric) | (PrefixNumeric, Jl | Jv | Jt | H2 | H3) => {
                return NoBreak
            }
            // LB28
            (Alphabetic | HebrewLetter, Alphabetic | HebrewLetter) => return NoBreak,
            _ => {}
        }
        // LB28a
        if x.is(AksaraPrebase) && n.is_aksara_base() {
            return NoBreak;
        }
        if x.is_aksara_base() && matches!(n.class, ViramaFinal | Virama) {
            return NoBreak;
        }
        if x.is(Virama)
            && (n.is(Aksara) || n.ch == DOTTED_CIRCLE)
            && context.before_last.map_or(false, |before| before.is_aksara_base())
        {
            return NoBreak;
        }
        if x.is_aksara_base()
            && n.is_aksara_base()
            && self.lookahead(next, 0).map_or(false, |after| after.is(ViramaFinal))
        {
            return NoBreak;
        }
        // LB29
        if x.is(InfixNumeric) && matches!(n.class, Alphabetic | HebrewLetter) {
            return NoBreak;
        }
        // LB30
        if matches!(x.class, Alphabetic | HebrewLetter | Numeric)
            && n.is(OpenPunctuation)
            && !n.east_asian
        {
            return NoBreak;
        }
        if x.is(CloseParenthesis)
            && !x.east_asian
            && matches!(n.class, Alphabetic | HebrewLetter | Numeric)
        {
            return NoBreak;
        }
        // LB30a
        if x.is(RegionalIndicator) && n.is(RegionalIndicator) && self.tracker.regional_indicator_open()
        {
            return NoBreak;
        }
        // LB30b
        if n.is(EModifier)
            && (x.is(EBase) || (x.pictographic && x.category == GeneralCategory::Unassigned))
        {
            return NoBreak;
        }
        // LB31
        Allowed
    }
}

/// LB9 doesn't fold marks into these.
fn absorbs_nothing(class: LineBreakClass) -> bool {
    use LineBreakClass::*;
    matches!(
        class,
        MandatoryBreak | CarriageReturn | LineFeed | NextLine | Space | ZwSpace
    )
}

impl<P: PropertyProvider> Iterator for LineBreaks<'_, P> {
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
        self.advance(&current);
        let next = scan(self.provider, &mut self.decoder);
        self.index += 1;
        let (offset, kind) = match (&next, &self.context) {
            (Some(next), Some(context)) => (next.offset, self.decide(context, next)),
            (Some(next), None) => (next.offset, BreakKind::Allowed),
            // LB3
            (None, _) => (current.end, BreakKind::Mandatory),
        };
        self.upcoming = next;
        Some(Boundary {
            index: self.index,
            offset,
            kind,
        })
    }
}

impl<P> Clone for LineBreaks<'_, P> {
    fn clone(&self) -> Self {
        LineBreaks {
            provider: self.provider,
            decoder: self.decoder.clone(),
            upcoming: self.upcoming,
            started: self.started,
            index: self.index,
            context: self.context,
            tracker: self.tracker,
        }
    }
}

impl<P: PropertyProvider> fmt::Debug for LineBreaks<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineBreaks(")?;
        f.debug_list()
            .entries(self.clone().map(|boundary| boundary.kind))
            .finish()?;
        write!(f, ")")
    }
}
