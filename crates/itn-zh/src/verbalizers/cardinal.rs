// Cardinal verbalizer: `cardinal { ... }` records to plain digits.

use itn_fst::fst::Fst;

use super::{digits, optional_sign};

/// Verbalize-stage transducer for cardinal records: strips the record
/// structure and reinstates the sign in front of the digits.
pub struct CardinalVerbalizer {
    fst: Fst,
}

impl CardinalVerbalizer {
    pub fn new() -> Self {
        let integer = Fst::delete("integer: \"")
            .concat(&digits().plus())
            .concat(&Fst::delete("\""));
        let fst = Fst::delete("cardinal { ")
            .concat(&optional_sign())
            .concat(&integer)
            .concat(&Fst::delete(" }"));

        Self { fst }
    }

    pub fn fst(&self) -> &Fst {
        &self.fst
    }
}

impl Default for CardinalVerbalizer {
    fn default() -> Self {
        Self::new()
    }
}
