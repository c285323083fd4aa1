//! Keyword-ratio classification of ABAP source content.
//!
//! Classification is deliberately naive: each type in the taxonomy is scored
//! by the fraction of its keywords that occur as case-insensitive substrings
//! of the document, and the highest-scoring type wins. No tokenization, no
//! word boundaries. False positives from substrings embedded in identifiers
//! are an accepted trade-off.

#[cfg(test)]
mod tests;

use crate::language::{
    DOCUMENT_CATEGORIES, DOCUMENT_KEYWORDS, FALLBACK_CATEGORY, FALLBACK_TYPE,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TaxonomyError {
    #[error("category {category:?} references unknown type {type_label:?}")]
    UnknownTypeInCategory {
        category: String,
        type_label: String,
    },
    #[error("type {type_label:?} has an empty keyword set")]
    EmptyKeywordSet { type_label: String },
}

/// Caller-owned classifier over the static language tables.
///
/// Construction validates the taxonomy invariants once; afterwards both
/// entry points are pure functions of their input.
pub struct Classifier {
    types: &'static [(&'static str, &'static [&'static str])],
    categories: &'static [(&'static str, &'static [&'static str])],
}

impl Classifier {
    /// Build a classifier over the compiled-in ABAP tables.
    ///
    /// Fails if a category references a type label that does not exist in
    /// the taxonomy, or if a type has no keywords.
    pub fn new() -> Result<Self, TaxonomyError> {
        Self::with_tables(DOCUMENT_KEYWORDS, DOCUMENT_CATEGORIES)
    }

    fn with_tables(
        types: &'static [(&'static str, &'static [&'static str])],
        categories: &'static [(&'static str, &'static [&'static str])],
    ) -> Result<Self, TaxonomyError> {
        for &(type_label, keywords) in types {
            if keywords.is_empty() {
                return Err(TaxonomyError::EmptyKeywordSet {
                    type_label: type_label.to_string(),
                });
            }
        }
        for &(category, members) in categories {
            for &member in members {
                if !types.iter().any(|&(label, _)| label == member) {
                    return Err(TaxonomyError::UnknownTypeInCategory {
                        category: category.to_string(),
                        type_label: member.to_string(),
                    });
                }
            }
        }
        Ok(Self { types, categories })
    }

    /// Determine the ABAP object type of a piece of source content.
    ///
    /// Returns the type with the strictly greatest keyword match ratio.
    /// Ties keep the type declared first in the taxonomy; zero matches
    /// resolve to [`FALLBACK_TYPE`].
    pub fn classify(&self, content: &str) -> &'static str {
        let content_lower = content.to_lowercase();
        let mut best_label = FALLBACK_TYPE;
        let mut best_ratio = 0.0_f64;

        for &(type_label, keywords) in self.types {
            let ratio = keyword_ratio(keywords, &content_lower);
            if ratio > best_ratio {
                best_label = type_label;
                best_ratio = ratio;
            }
        }

        best_label
    }

    /// Resolve a type label to its high-level category.
    ///
    /// Scans the category table in declaration order and returns the first
    /// category naming the label; unknown labels (including the fallback
    /// type) resolve to [`FALLBACK_CATEGORY`]. Total for every input.
    pub fn category_for(&self, type_label: &str) -> &'static str {
        self.categories
            .iter()
            .find(|&&(_, members)| members.contains(&type_label))
            .map(|&(category, _)| category)
            .unwrap_or(FALLBACK_CATEGORY)
    }
}

/// Fraction of `keywords` occurring as substrings of the lowercased content.
pub(crate) fn keyword_ratio(keywords: &[&str], content_lower: &str) -> f64 {
    let matched = keywords
        .iter()
        .filter(|kw| content_lower.contains(*kw))
        .count();
    matched as f64 / keywords.len() as f64
}
