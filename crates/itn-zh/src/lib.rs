//! Mandarin numeral grammar for inverse text normalization.
//!
//! Spoken-form numeral strings (一千二百三十四, 负五点二万, 第十三) are
//! parsed by tagger transducers into a bracketed field record, then rendered
//! by verbalizer transducers into written form (1234, -5.2 万, 第13). The
//! grammars are built once, eagerly, behind [`normalizer::InverseNormalizer`]
//! and are immutable afterwards.
//!
//! # Architecture
//!
//! - [`lexicon`] -- digit, teen, scale, zero and marker symbol tables
//! - [`primitives`] -- atomic transducers built from the lexicon
//! - [`magnitude`] -- the per-band place-value composer
//! - [`filter`] -- leading-zero and exception-list invariant enforcement
//! - [`taggers`] -- cardinal / decimal / ordinal classify-stage assemblies
//! - [`verbalizers`] -- the inverse, record-to-surface assemblies
//! - [`normalizer`] -- the init-once handle owning the built cascade

pub mod filter;
pub mod lexicon;
pub mod magnitude;
pub mod normalizer;
pub mod primitives;
pub mod taggers;
pub mod verbalizers;
