// Magnitude composer: the recursive place-value grammar.
//
// Each band covers one decimal width and is built from the next-lower
// band, so place-value arithmetic is encoded in the transducer topology
// rather than computed at match time. Bands keep a fixed output width
// (the hundreds band always emits 3 digits); the normalization filter
// trims the padding afterwards.
//
// Within a band, the candidate productions are tried in a fixed order:
//
//   1. scale-word-present: prefix · delete(scale) · lower band
//   2. zero-marked: delete(零) · zero padding · lower band
//   3. scale-word-absent: zero padding · lower band, carrying ABSENT_BIAS
//
// The absent arm carries a strictly positive bias: when real digits are
// present in the input, the path that consumes them always outweighs
// zero-filling.

use itn_fst::fst::Fst;

use crate::filter;
use crate::lexicon::Lexicon;
use crate::primitives;

/// Weight bias carried by every scale-word-absent production. Strictly
/// positive so the digit-present arm always wins on genuinely present
/// digits.
pub const ABSENT_BIAS: u32 = 1;

/// One magnitude band of the place-value ladder.
///
/// The three simple bands take a single digit before their scale word
/// (三百); the myriad bands take a full non-zero thousands group
/// (四千三百万). The ladder is capped at 兆; the traditional scales above
/// it (京, 垓, …) see too little consistent usage to carry reliable rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Units,
    Tens,
    Hundreds,
    Thousands,
    Myriads,
    HundredMillions,
    Trillions,
}

impl Band {
    /// The full ladder, smallest band first.
    pub const LADDER: [Band; 7] = [
        Band::Units,
        Band::Tens,
        Band::Hundreds,
        Band::Thousands,
        Band::Myriads,
        Band::HundredMillions,
        Band::Trillions,
    ];

    /// The fixed decimal width of this band's output.
    pub fn width(self) -> usize {
        match self {
            Band::Units => 1,
            Band::Tens => 2,
            Band::Hundreds => 3,
            Band::Thousands => 4,
            Band::Myriads => 8,
            Band::HundredMillions => 12,
            Band::Trillions => 16,
        }
    }

    /// The scale word deleted by this band's digit-present arm.
    pub fn scale_symbol(self) -> Option<char> {
        match self {
            Band::Units => None,
            Band::Tens => Some('十'),
            Band::Hundreds => Some('百'),
            Band::Thousands => Some('千'),
            Band::Myriads => Some('万'),
            Band::HundredMillions => Some('亿'),
            Band::Trillions => Some('兆'),
        }
    }

    /// The band one step down the ladder.
    pub fn next_lower(self) -> Option<Band> {
        match self {
            Band::Units => None,
            Band::Tens => Some(Band::Units),
            Band::Hundreds => Some(Band::Tens),
            Band::Thousands => Some(Band::Hundreds),
            Band::Myriads => Some(Band::Thousands),
            Band::HundredMillions => Some(Band::Myriads),
            Band::Trillions => Some(Band::HundredMillions),
        }
    }

    /// Whether this band's prefix is a 4-digit thousands group rather than
    /// a single digit.
    pub fn uses_group_prefix(self) -> bool {
        matches!(
            self,
            Band::Myriads | Band::HundredMillions | Band::Trillions
        )
    }
}

/// The units band: a bare digit, or an inserted zero placeholder.
pub fn units_band(lexicon: &Lexicon) -> Fst {
    primitives::digit(lexicon).union(&primitives::zero_fill(1).with_weight(ABSENT_BIAS))
}

/// Build one band from the next-lower band's transducer.
///
/// `present_head` is the digit-present builder for this band: everything
/// up to and including the deleted scale word (三百 → 3 for the simple
/// bands, 四千三百万 → 4300 for the myriad bands). Called with
/// [`Band::Units`] this ignores both transducer arguments and returns the
/// units band.
pub fn compose_band(lexicon: &Lexicon, band: Band, present_head: &Fst, next_lower: &Fst) -> Fst {
    if band.scale_symbol().is_none() {
        return units_band(lexicon);
    }
    let pad = band.width() - band.next_lower().map_or(0, Band::width);

    let present = present_head.concat(next_lower);
    let zero_marked = primitives::zero_marker_deletion()
        .concat(&primitives::zero_fill(pad))
        .concat(next_lower);
    let absent = primitives::zero_fill(pad)
        .concat(next_lower)
        .with_weight(ABSENT_BIAS);

    if band == Band::Tens {
        // The teen table is closed and sits beside the compositional arms.
        Fst::union_all([&primitives::teen(lexicon), &present, &zero_marked, &absent])
    } else {
        Fst::union_all([&present, &zero_marked, &absent])
    }
}

/// Build the full ladder bottom-up and return the top band's transducer.
///
/// Output strings are always exactly 16 digits; values are zero-padded on
/// the left and the caller composes in the leading-zero filter.
pub fn build_ladder(lexicon: &Lexicon) -> Fst {
    let mut current = units_band(lexicon);
    let mut group_prefix: Option<Fst> = None;

    for &band in Band::LADDER.iter().skip(1) {
        let Some(scale) = band.scale_symbol() else {
            continue;
        };
        if band.uses_group_prefix() && group_prefix.is_none() {
            // `current` is the thousands band at this point; restricted to
            // its non-empty values it becomes the group prefix for every
            // myriad band.
            group_prefix = Some(current.compose(&filter::at_least_one_nonzero()));
        }
        let present_head = match (band.uses_group_prefix(), group_prefix.as_ref()) {
            (true, Some(group)) => group.concat(&primitives::scale_deletion(scale)),
            _ => primitives::digit_with_scale(lexicon, scale),
        };
        current = compose_band(lexicon, band, &present_head, &current);
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use itn_fst::search::shortest_match;

    use std::sync::OnceLock;

    /// The ladder is expensive to compose, so the whole module shares one
    /// copy of it (raw and trimmed).
    fn raw_ladder() -> &'static Fst {
        static LADDER: OnceLock<Fst> = OnceLock::new();
        LADDER.get_or_init(|| build_ladder(&Lexicon::new()))
    }

    fn trimmed_ladder() -> &'static Fst {
        static LADDER: OnceLock<Fst> = OnceLock::new();
        LADDER.get_or_init(|| crate::filter::strip_leading_zeros(raw_ladder()))
    }

    fn tagged(input: &str) -> Option<String> {
        shortest_match(trimmed_ladder(), input).map(|m| m.output)
    }

    #[test]
    fn ladder_is_ordered() {
        for window in Band::LADDER.windows(2) {
            assert_eq!(window[1].next_lower(), Some(window[0]));
            assert!(window[0].width() < window[1].width());
        }
    }

    #[test]
    fn band_widths_are_fixed() {
        for input in ["三", "十五", "三百", "一万"] {
            let m = shortest_match(raw_ladder(), input).unwrap();
            assert_eq!(m.output.len(), 16, "raw band output for {input}");
        }
    }

    #[test]
    fn tens_band() {
        assert_eq!(tagged("二十"), Some("20".to_string()));
        assert_eq!(tagged("二十三"), Some("23".to_string()));
        assert_eq!(tagged("十五"), Some("15".to_string()));
    }

    #[test]
    fn hundreds_band() {
        assert_eq!(tagged("一百"), Some("100".to_string()));
        assert_eq!(tagged("一百二十三"), Some("123".to_string()));
        assert_eq!(tagged("一百零三"), Some("103".to_string()));
    }

    #[test]
    fn thousands_band() {
        assert_eq!(tagged("一千二百三十四"), Some("1234".to_string()));
        assert_eq!(tagged("二千零六"), Some("2006".to_string()));
        assert_eq!(tagged("三千零四十五"), Some("3045".to_string()));
        assert_eq!(tagged("九千九百九十九"), Some("9999".to_string()));
    }

    #[test]
    fn myriads_band() {
        assert_eq!(tagged("一万"), Some("10000".to_string()));
        assert_eq!(tagged("十二万"), Some("120000".to_string()));
        assert_eq!(tagged("十二万三千四百五十六"), Some("123456".to_string()));
        assert_eq!(tagged("一万零五百"), Some("10500".to_string()));
        assert_eq!(tagged("二十万零三百"), Some("200300".to_string()));
        assert_eq!(tagged("三百万"), Some("3000000".to_string()));
        assert_eq!(tagged("九千九百万"), Some("99000000".to_string()));
    }

    #[test]
    fn hundred_millions_band() {
        assert_eq!(tagged("一亿"), Some("100000000".to_string()));
        assert_eq!(tagged("二亿零三万"), Some("200030000".to_string()));
        assert_eq!(tagged("十二亿三千万"), Some("1230000000".to_string()));
        assert_eq!(tagged("三千亿"), Some("300000000000".to_string()));
    }

    #[test]
    fn trillions_band() {
        assert_eq!(tagged("一兆"), Some("1000000000000".to_string()));
        assert_eq!(tagged("三兆零五"), Some("3000000000005".to_string()));
        assert_eq!(
            tagged("九千九百九十九兆"),
            Some("9999000000000000".to_string())
        );
    }

    #[test]
    fn scale_word_without_digit_fails() {
        assert_eq!(tagged("百"), None);
        assert_eq!(tagged("百五"), None);
        assert_eq!(tagged("万"), None);
    }

    #[test]
    fn zero_run_covered_by_single_marker() {
        assert_eq!(tagged("一千零五"), Some("1005".to_string()));
        // A doubled marker still normalizes to the same value.
        assert_eq!(tagged("一千零零五"), Some("1005".to_string()));
    }

    #[test]
    fn absent_bias_prefers_real_digits() {
        let with_digits = shortest_match(raw_ladder(), "三十五").unwrap();
        let elided = shortest_match(raw_ladder(), "三十").unwrap();
        assert!(with_digits.weight < elided.weight);
    }
}
