// Primitive transducer builders: atomic pieces assembled by the magnitude
// composer and the tagger assemblies. Each builder consumes exactly the
// symbols it is responsible for; anything larger is composition's job.

use itn_fst::fst::Fst;

use crate::lexicon::{DECIMAL_POINT, Lexicon, NEGATIVE, ORDINAL_PREFIX, ZERO};

/// Digit symbol to written digit: 一→1 … 九→9.
pub fn digit(lexicon: &Lexicon) -> Fst {
    let pairs: Vec<(String, String)> = lexicon
        .digit_pairs()
        .map(|(spoken, written)| (spoken.to_string(), written.to_string()))
        .collect();
    string_map_owned(&pairs)
}

/// The standalone zero symbol: 零→0.
pub fn zero() -> Fst {
    Fst::cross(&ZERO.to_string(), "0")
}

/// The closed teen table: 十→10, 十一→11 … 十九→19.
pub fn teen(lexicon: &Lexicon) -> Fst {
    string_map_owned(&lexicon.teen_pairs())
}

/// Digit-present case for one scale: a digit followed by the scale word,
/// with the scale word deleted (一百 → 1, the positional tail is filled by
/// the next-lower band).
pub fn digit_with_scale(lexicon: &Lexicon, scale: char) -> Fst {
    digit(lexicon).concat(&scale_deletion(scale))
}

/// Deletion of one scale word.
pub fn scale_deletion(scale: char) -> Fst {
    Fst::delete(&scale.to_string())
}

/// Optional-deletion arc for the zero marker inside larger numbers
/// (一千零五: the 零 marks the skipped positions and emits nothing itself).
pub fn zero_marker_deletion() -> Fst {
    Fst::delete(&ZERO.to_string())
}

/// Digit-absent case: consume nothing, emit an explicit zero placeholder of
/// the band's width.
pub fn zero_fill(width: usize) -> Fst {
    Fst::insert(&"0".repeat(width))
}

/// The negative marker rewritten to a written sign: 负→-.
pub fn negative_sign() -> Fst {
    Fst::cross(&NEGATIVE.to_string(), "-")
}

/// Deletion of the spoken decimal point.
pub fn decimal_point_deletion() -> Fst {
    Fst::delete(&DECIMAL_POINT.to_string())
}

/// Deletion of the ordinal prefix morpheme.
pub fn ordinal_prefix_deletion() -> Fst {
    Fst::delete(&ORDINAL_PREFIX.to_string())
}

/// One spoken digit or zero, rewritten to its written digit. Used wherever
/// digits are read out positionally rather than through the place-value
/// grammar (digit runs, fractional parts).
pub fn spoken_digit(lexicon: &Lexicon) -> Fst {
    digit(lexicon).union(&zero())
}

/// A positional digit run of at least `min` symbols (一二三 → 123).
pub fn digit_sequence(lexicon: &Lexicon, min: usize) -> Fst {
    let one = spoken_digit(lexicon);
    let mut run = one.clone();
    for _ in 1..min {
        run = run.concat(&one);
    }
    run.concat(&one.star())
}

fn string_map_owned(pairs: &[(String, String)]) -> Fst {
    Fst::string_map(pairs.iter().map(|(i, o)| (i.as_str(), o.as_str())))
}
