// Ordinal verbalizer: `ordinal { ... }` records to 第 plus digits.

use itn_fst::fst::Fst;

use super::digits;

/// Verbalize-stage transducer for ordinal records: reinstates the 第
/// morpheme the tagger deleted.
pub struct OrdinalVerbalizer {
    fst: Fst,
}

impl OrdinalVerbalizer {
    pub fn new() -> Self {
        let integer = Fst::delete("integer: \"")
            .concat(&Fst::insert("第"))
            .concat(&digits().plus())
            .concat(&Fst::delete("\""));
        let fst = Fst::delete("ordinal { ")
            .concat(&integer)
            .concat(&Fst::delete(" }"));

        Self { fst }
    }

    pub fn fst(&self) -> &Fst {
        &self.fst
    }
}

impl Default for OrdinalVerbalizer {
    fn default() -> Self {
        Self::new()
    }
}
