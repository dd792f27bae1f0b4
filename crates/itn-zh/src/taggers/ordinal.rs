// Ordinal tagger: 第 plus a cardinal to `ordinal { ... }` records.

use itn_fst::fst::Fst;

use super::cardinal::CardinalTagger;
use crate::primitives;

/// Classify-stage transducer for ordinals. The 第 morpheme is deleted here
/// and reinstated by the verbalizer, so the record holds digits only.
pub struct OrdinalTagger {
    fst: Fst,
}

impl OrdinalTagger {
    pub fn new(cardinal: &CardinalTagger) -> Self {
        let integer = Fst::insert("integer: \"")
            .concat(cardinal.graph())
            .concat(&Fst::insert("\""));
        let fst = Fst::insert("ordinal { ")
            .concat(&primitives::ordinal_prefix_deletion())
            .concat(&integer)
            .concat(&Fst::insert(" }"));

        Self { fst }
    }

    /// The assembled tagger transducer.
    pub fn fst(&self) -> &Fst {
        &self.fst
    }
}
