//! Generic keyword scoring.
//!
//! One routine consumes any keyword table, so the classifiers carry no
//! hidden string-literal branching of their own and can be tested against
//! synthetic tables.

use buildscope_data::KeywordTable;
use std::collections::HashMap;

/// Score weighted texts against a table.
///
/// Every entry whose keyword occurs in a text contributes
/// `entry.weight * text_multiplier` to its category's total.
pub fn score_weighted<'a, I>(table: &KeywordTable, texts: I) -> HashMap<String, f64>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut scores: HashMap<String, f64> = HashMap::new();
    for (text, multiplier) in texts {
        for entry in table.matches(text) {
            *scores.entry(entry.category.clone()).or_default() += entry.weight * multiplier;
        }
    }
    scores
}
