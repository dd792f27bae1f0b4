// Classify-stage assemblies: raw spoken text to bracketed field records.

pub mod cardinal;
pub mod decimal;
pub mod ordinal;

use itn_fst::fst::Fst;

use crate::primitives;

/// The optional negative field shared by the cardinal and decimal taggers:
/// 负 becomes `negative: "-" ` when present, nothing otherwise.
pub(crate) fn optional_negative_field() -> Fst {
    Fst::insert("negative: \"")
        .concat(&primitives::negative_sign())
        .concat(&Fst::insert("\" "))
        .optional()
}
