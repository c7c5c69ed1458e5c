//! Schema vocabularies, one module per schema generation.

pub mod core;
pub mod draft;

use crate::registry::Vocabulary;

/// Every vocabulary of both generations, 200908 first.
pub(crate) fn all() -> Vec<Vocabulary> {
    let mut vocabularies = core::vocabularies();
    vocabularies.extend(draft::vocabularies());
    vocabularies
}
