// The init-once handle owning the built cascade.
//
// Construction composes every grammar eagerly; matching afterwards only
// reads the built transducers and allocates per-call search state, so one
// handle serves any number of threads without locking.

use itn_core::ItnError;
use itn_core::fields::{FieldRecord, RecordKind};
use itn_fst::fst::Fst;
use itn_fst::search::shortest_match;

use crate::lexicon::Lexicon;
use crate::taggers::cardinal::CardinalTagger;
use crate::taggers::decimal::DecimalTagger;
use crate::taggers::ordinal::OrdinalTagger;
use crate::verbalizers::cardinal::CardinalVerbalizer;
use crate::verbalizers::decimal::DecimalVerbalizer;
use crate::verbalizers::ordinal::OrdinalVerbalizer;

/// The assembled inverse-normalization cascade.
///
/// Build once with [`InverseNormalizer::new`], then share freely: every
/// method takes `&self` and touches no interior mutability.
pub struct InverseNormalizer {
    lexicon: Lexicon,
    cardinal_tagger: CardinalTagger,
    decimal_tagger: DecimalTagger,
    ordinal_tagger: OrdinalTagger,
    cardinal_verbalizer: CardinalVerbalizer,
    decimal_verbalizer: DecimalVerbalizer,
    ordinal_verbalizer: OrdinalVerbalizer,
}

impl InverseNormalizer {
    /// Build the full cascade. Construction is infallible and amortized:
    /// it happens once, off the per-input path.
    pub fn new() -> Self {
        let lexicon = Lexicon::new();
        let cardinal_tagger = CardinalTagger::new(&lexicon);
        let decimal_tagger = DecimalTagger::new(&lexicon, &cardinal_tagger);
        let ordinal_tagger = OrdinalTagger::new(&cardinal_tagger);

        Self {
            lexicon,
            cardinal_tagger,
            decimal_tagger,
            ordinal_tagger,
            cardinal_verbalizer: CardinalVerbalizer::new(),
            decimal_verbalizer: DecimalVerbalizer::new(),
            ordinal_verbalizer: OrdinalVerbalizer::new(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn cardinal_tagger(&self) -> &CardinalTagger {
        &self.cardinal_tagger
    }

    /// Tag a spoken cardinal (一百二十三, 负五十).
    pub fn tag_cardinal(&self, text: &str) -> Result<FieldRecord, ItnError> {
        self.tag_with(self.cardinal_tagger.fst(), text)
    }

    /// Tag a spoken decimal (三点一四, 五点二万).
    pub fn tag_decimal(&self, text: &str) -> Result<FieldRecord, ItnError> {
        self.tag_with(self.decimal_tagger.fst(), text)
    }

    /// Tag a spoken ordinal (第十三).
    pub fn tag_ordinal(&self, text: &str) -> Result<FieldRecord, ItnError> {
        self.tag_with(self.ordinal_tagger.fst(), text)
    }

    /// Tag with whichever grammar accepts the input, trying decimal, then
    /// ordinal, then cardinal. The three input languages are disjoint (点
    /// only in decimals, 第 only in ordinals), so the order only settles
    /// which error is reported.
    pub fn tag(&self, text: &str) -> Result<FieldRecord, ItnError> {
        self.check_alphabet(text)?;
        for fst in [
            self.decimal_tagger.fst(),
            self.ordinal_tagger.fst(),
            self.cardinal_tagger.fst(),
        ] {
            if let Some(found) = shortest_match(fst, text) {
                return FieldRecord::parse(&found.output);
            }
        }
        Err(ItnError::no_match(text))
    }

    /// Render a field record back to written surface text.
    pub fn verbalize(&self, record: &FieldRecord) -> Result<String, ItnError> {
        let fst = match record.kind() {
            RecordKind::Cardinal => self.cardinal_verbalizer.fst(),
            RecordKind::Decimal => self.decimal_verbalizer.fst(),
            RecordKind::Ordinal => self.ordinal_verbalizer.fst(),
        };
        let rendered = record.render();
        shortest_match(fst, &rendered)
            .map(|found| found.output)
            .ok_or_else(|| {
                ItnError::malformed(format!(
                    "record rejected by the {} verbalizer",
                    record.kind().as_str()
                ))
            })
    }

    /// Tag and verbalize in one step.
    pub fn normalize(&self, text: &str) -> Result<String, ItnError> {
        let record = self.tag(text)?;
        self.verbalize(&record)
    }

    /// Reject symbols outside the declared alphabet up front, so callers
    /// see [`ItnError::UnknownSymbol`] instead of a bare no-match.
    fn check_alphabet(&self, text: &str) -> Result<(), ItnError> {
        for symbol in text.chars() {
            self.lexicon.classify(symbol)?;
        }
        Ok(())
    }

    fn tag_with(&self, fst: &Fst, text: &str) -> Result<FieldRecord, ItnError> {
        self.check_alphabet(text)?;
        let found = shortest_match(fst, text).ok_or_else(|| ItnError::no_match(text))?;
        FieldRecord::parse(&found.output)
    }
}

impl Default for InverseNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
