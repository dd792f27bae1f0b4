// Normalization filters: post-composition invariant enforcement.
//
// The magnitude composer keeps every band at a fixed decimal width, so its
// raw output is zero-padded (一万 → 0000000000010000). These filters trim
// that padding down to the written convention and carve the small-number
// exception forms out of the general grammar's input language.

use itn_fst::fst::Fst;

use crate::lexicon::Lexicon;

/// Restrict a grammar's output language to `{"0"}` plus digit strings with
/// no leading zero, deleting the padding zeros in the process.
pub fn strip_leading_zeros(graph: &Fst) -> Fst {
    graph.compose(&leading_zero_filter())
}

/// The trimming transducer itself: delete any run of leading zeros before a
/// non-zero digit, or collapse an all-zero string to the literal `0`.
fn leading_zero_filter() -> Fst {
    let nonzero = Fst::char_class('1'..='9');
    let any_digit = Fst::char_class('0'..='9');
    let strip = Fst::delete("0")
        .star()
        .concat(&nonzero)
        .concat(&any_digit.star());
    let all_zeros = Fst::delete("0").star().concat(&Fst::accep("0"));
    strip.union(&all_zeros)
}

/// Acceptor for digit strings containing at least one non-zero digit. Used
/// to restrict a fixed-width band to its non-empty values before it becomes
/// a group prefix.
pub fn at_least_one_nonzero() -> Fst {
    let any_digit = Fst::char_class('0'..='9');
    let nonzero = Fst::char_class('1'..='9');
    any_digit.star().concat(&nonzero).concat(&any_digit.star())
}

/// Route the small numbers with a dedicated lexical form (0..=12) through a
/// literal lookup table, and subtract exactly those spoken forms (plus the
/// empty string) from the general grammar's input side, so the two paths
/// never compete for the same input.
pub fn with_small_number_exceptions(general: &Fst, lexicon: &Lexicon) -> Fst {
    let pairs = lexicon.small_number_pairs();
    let literal = Fst::string_map(pairs.iter().map(|(i, o)| (i.as_str(), o.as_str())));

    let mut excluded: Vec<&str> = pairs.iter().map(|(i, _)| i.as_str()).collect();
    excluded.push("");
    let carved = general.reject_inputs(&excluded);

    literal.union(&carved)
}
