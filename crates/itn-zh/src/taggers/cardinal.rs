// Cardinal tagger: spoken cardinals to `cardinal { ... }` records.

use itn_fst::fst::Fst;

use super::optional_negative_field;
use crate::lexicon::Lexicon;
use crate::{filter, magnitude, primitives};

/// Classify-stage transducer for cardinal numbers.
///
/// The numeral grammar is the magnitude ladder plus the positional
/// digit-run reading, trimmed by the leading-zero filter, with the
/// small-number forms routed through their literal table. The bare grammar
/// (no field brackets) is kept alongside the assembled tagger because the
/// decimal and ordinal taggers reuse it.
pub struct CardinalTagger {
    fst: Fst,
    graph: Fst,
}

impl CardinalTagger {
    pub fn new(lexicon: &Lexicon) -> Self {
        let ladder = magnitude::build_ladder(lexicon);
        let digit_run = primitives::digit_sequence(lexicon, 2);
        let general = filter::strip_leading_zeros(&ladder.union(&digit_run));
        let graph = filter::with_small_number_exceptions(&general, lexicon);

        let integer = Fst::insert("integer: \"")
            .concat(&graph)
            .concat(&Fst::insert("\""));
        let fst = Fst::insert("cardinal { ")
            .concat(&optional_negative_field())
            .concat(&integer)
            .concat(&Fst::insert(" }"));

        Self { fst, graph }
    }

    /// The assembled tagger transducer.
    pub fn fst(&self) -> &Fst {
        &self.fst
    }

    /// The bare cardinal grammar without field brackets.
    pub fn graph(&self) -> &Fst {
        &self.graph
    }
}
