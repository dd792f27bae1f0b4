// Decimal verbalizer: `decimal { ... }` records to grouped written form.

use itn_fst::fst::Fst;

use super::{digits, optional_sign};
use crate::lexicon::QUANTITY_SUFFIXES;

/// The digit-group separator: a non-breaking space, so renderers never
/// wrap a number across lines.
pub const GROUP_SEPARATOR: char = '\u{00A0}';

/// Verbalize-stage transducer for decimal records.
///
/// Long digit runs are regrouped in threes: right-to-left for the integer
/// part, left-to-right for the fractional part. The quantity suffix, when
/// present, follows after an ordinary space.
pub struct DecimalVerbalizer {
    fst: Fst,
}

impl DecimalVerbalizer {
    pub fn new() -> Self {
        let separator = Fst::insert(&GROUP_SEPARATOR.to_string());
        let exactly_three = digits().repeat(3, 3);
        let at_most_three = digits().repeat(1, 3);

        // 1234567 -> 1 234 567: the first group absorbs the remainder.
        let group_integer =
            at_most_three.concat(&separator.concat(&exactly_three).star());
        // .1234 -> .123 4: full groups first, remainder last.
        let group_fractional = Fst::accep(".")
            .concat(&exactly_three.concat(&separator).star())
            .concat(&at_most_three);

        let integer = Fst::delete("integer_part: \"")
            .concat(&digits().plus())
            .concat(&Fst::delete("\" "))
            .compose(&group_integer)
            .optional();
        let fractional = Fst::insert(".")
            .concat(&Fst::delete("fractional_part: \""))
            .concat(&digits().plus())
            .concat(&Fst::delete("\""))
            .compose(&group_fractional);

        let suffix = Fst::string_map(QUANTITY_SUFFIXES.iter().map(|s| (*s, *s)));
        let quantity = Fst::delete(" quantity: \"")
            .concat(&Fst::insert(" "))
            .concat(&suffix)
            .concat(&Fst::delete("\""))
            .optional();

        let fst = Fst::delete("decimal { ")
            .concat(&optional_sign())
            .concat(&integer)
            .concat(&fractional)
            .concat(&quantity)
            .concat(&Fst::delete(" }"));

        Self { fst }
    }

    pub fn fst(&self) -> &Fst {
        &self.fst
    }
}

impl Default for DecimalVerbalizer {
    fn default() -> Self {
        Self::new()
    }
}
