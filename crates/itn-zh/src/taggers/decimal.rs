// Decimal tagger: spoken decimals to `decimal { ... }` records.

use itn_fst::fst::Fst;

use super::cardinal::CardinalTagger;
use super::optional_negative_field;
use crate::lexicon::{Lexicon, QUANTITY_SUFFIXES};
use crate::primitives;

/// Bias carried by the inserted default integer part, so an explicit
/// integer always wins when one is spoken.
pub const DEFAULT_INTEGER_BIAS: u32 = 1;

/// Classify-stage transducer for decimal numbers.
///
/// The integer part goes through the full cardinal grammar; the fractional
/// part is read digit by digit (fractional digits carry no place-value
/// scale words, and leading zeros are meaningful there). A trailing scale
/// word from the quantity table is captured as its own field: 五点二万
/// keeps 万 as a quantity rather than multiplying it out.
pub struct DecimalTagger {
    fst: Fst,
}

impl DecimalTagger {
    pub fn new(lexicon: &Lexicon, cardinal: &CardinalTagger) -> Self {
        let integer = Fst::insert("integer_part: \"")
            .concat(cardinal.graph())
            .concat(&Fst::insert("\" "));
        // 点五 reads as 0.5: a missing integer part defaults to zero.
        let integer_or_default = integer.union(
            &Fst::insert("integer_part: \"0\" ").with_weight(DEFAULT_INTEGER_BIAS),
        );

        let fractional = Fst::insert("fractional_part: \"")
            .concat(&primitives::spoken_digit(lexicon).plus())
            .concat(&Fst::insert("\""));

        let suffix = Fst::string_map(QUANTITY_SUFFIXES.iter().map(|s| (*s, *s)));
        let quantity = Fst::insert(" quantity: \"")
            .concat(&suffix)
            .concat(&Fst::insert("\""))
            .optional();

        let body = optional_negative_field()
            .concat(&integer_or_default)
            .concat(&primitives::decimal_point_deletion())
            .concat(&fractional)
            .concat(&quantity);
        let fst = Fst::insert("decimal { ")
            .concat(&body)
            .concat(&Fst::insert(" }"));

        Self { fst }
    }

    /// The assembled tagger transducer.
    pub fn fst(&self) -> &Fst {
        &self.fst
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itn_fst::search::shortest_match;

    use std::sync::OnceLock;

    fn tagger() -> &'static DecimalTagger {
        static TAGGER: OnceLock<DecimalTagger> = OnceLock::new();
        TAGGER.get_or_init(|| {
            let lexicon = Lexicon::new();
            let cardinal = CardinalTagger::new(&lexicon);
            DecimalTagger::new(&lexicon, &cardinal)
        })
    }

    fn tag(input: &str) -> Option<String> {
        shortest_match(tagger().fst(), input).map(|m| m.output)
    }

    #[test]
    fn tags_simple_decimal() {
        assert_eq!(
            tag("三点一四"),
            Some("decimal { integer_part: \"3\" fractional_part: \"14\" }".to_string())
        );
    }

    #[test]
    fn tags_missing_integer_part_as_zero() {
        assert_eq!(
            tag("点五"),
            Some("decimal { integer_part: \"0\" fractional_part: \"5\" }".to_string())
        );
    }

    #[test]
    fn keeps_fractional_leading_zeros() {
        assert_eq!(
            tag("三点零五"),
            Some("decimal { integer_part: \"3\" fractional_part: \"05\" }".to_string())
        );
    }

    #[test]
    fn tags_quantity_suffix() {
        assert_eq!(
            tag("五点二万"),
            Some(
                "decimal { integer_part: \"5\" fractional_part: \"2\" quantity: \"万\" }"
                    .to_string()
            )
        );
    }

    #[test]
    fn tags_compound_quantity_suffix() {
        assert_eq!(
            tag("一点五千亿"),
            Some(
                "decimal { integer_part: \"1\" fractional_part: \"5\" quantity: \"千亿\" }"
                    .to_string()
            )
        );
    }

    #[test]
    fn tags_negative_decimal() {
        assert_eq!(
            tag("负三点一四"),
            Some(
                "decimal { negative: \"-\" integer_part: \"3\" fractional_part: \"14\" }"
                    .to_string()
            )
        );
    }

    #[test]
    fn rejects_plain_cardinal() {
        assert_eq!(tag("三十五"), None);
    }

    #[test]
    fn rejects_trailing_point() {
        assert_eq!(tag("三点"), None);
    }
}
