// Verbalize-stage assemblies: bracketed field records to written surface
// text. Each verbalizer is the inverse direction of its tagger: it deletes
// the record structure and keeps (or regroups) the field values.

pub mod cardinal;
pub mod decimal;
pub mod ordinal;

use itn_fst::fst::Fst;

/// Written digit acceptor.
pub(crate) fn digits() -> Fst {
    Fst::char_class('0'..='9')
}

/// The optional sign field: `negative: "-" ` collapses to the bare sign.
pub(crate) fn optional_sign() -> Fst {
    Fst::delete("negative: \"")
        .concat(&Fst::accep("-"))
        .concat(&Fst::delete("\" "))
        .optional()
}
