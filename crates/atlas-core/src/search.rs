use crate::constants::{SUBSEQUENCE_SCORE, SUBSTRING_SCORE};
use crate::dataset::Dataset;
use crate::filter::{FilterState, TimeRange};
use crate::philosopher::Philosopher;

/// Score a query against one candidate text.
///
/// 1.0 when the lowercase query is a literal substring, 0.5 when every
/// query character appears in order under a forward-only scan, 0.0 otherwise.
/// The subsequence fallback is coarse (not edit distance): consumers
/// only distinguish zero from nonzero.
pub fn fuzzy_score(text: &str, query: &str) -> f64 {
    let text = text.to_lowercase();
    let query = query.to_lowercase();

    if text.contains(&query) {
        return SUBSTRING_SCORE;
    }

    let mut from = 0;
    for ch in query.chars() {
        match text[from..].find(ch) {
            Some(i) => from += i + ch.len_utf8(),
            None => return 0.0,
        }
    }
    SUBSEQUENCE_SCORE
}

fn contains(haystack: &str, query_lower: &str) -> bool {
    haystack.to_lowercase().contains(query_lower)
}

/// Text predicate over one record. `query_lower` must be trimmed,
/// lowercased, and non-empty. Literal substring across every searchable
/// field first; the fuzzy fallback applies to the two name fields only.
fn matches_text(p: &Philosopher, query_lower: &str) -> bool {
    if contains(&p.name, query_lower)
        || contains(&p.name_en, query_lower)
        || contains(&p.birth_city, query_lower)
        || contains(&p.school, query_lower)
        || p.biography.as_deref().is_some_and(|b| contains(b, query_lower))
        || p.works.iter().any(|w| {
            contains(&w.title, query_lower)
                || w.description.as_deref().is_some_and(|d| contains(d, query_lower))
        })
        || p.key_ideas.iter().any(|idea| contains(idea, query_lower))
    {
        return true;
    }

    fuzzy_score(&p.name, query_lower) > 0.0 || fuzzy_score(&p.name_en, query_lower) > 0.0
}

/// Evaluate the combined search/filter predicate over the whole dataset.
///
/// Returns dataset indices in original order, no duplicates. A record is
/// admitted by the AND of the text predicate (vacuous for blank queries),
/// the three categorical predicates, and the lifespan overlap test.
/// `range` is assumed normalized (`start <= end`).
pub fn filter_indices(
    dataset: &Dataset,
    query: &str,
    filters: &FilterState,
    range: TimeRange,
) -> Vec<usize> {
    let query_lower = query.trim().to_lowercase();

    dataset
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            (query_lower.is_empty() || matches_text(p, &query_lower))
                && filters.period.admits(&p.period)
                && filters.school.admits(&p.school)
                && filters.city.admits(&p.birth_city)
                && range.overlaps(p.birth_year, p.death_year)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Same as [`filter_indices`], resolved to record references.
pub fn filter_dataset<'a>(
    dataset: &'a Dataset,
    query: &str,
    filters: &FilterState,
    range: TimeRange,
) -> Vec<&'a Philosopher> {
    filter_indices(dataset, query, filters, range)
        .into_iter()
        .filter_map(|i| dataset.get(i))
        .collect()
}
