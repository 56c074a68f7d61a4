use crate::models::IconRecord;

mod text_assembly;

#[cfg(test)]
mod tests;

use self::text_assembly::build_searchable_text;

/// Lowercased, whitespace-split query terms; empty when the query is blank.
#[must_use]
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn matches_all_terms(searchable: &str, terms: &[String]) -> bool {
    terms.iter().all(|term| searchable.contains(term.as_str()))
}

/// Keeps the icons whose searchable text contains every query term as a
/// substring, in their original order. A blank query keeps everything.
#[must_use]
pub fn search<'a>(icons: &'a [IconRecord], query: &str) -> Vec<&'a IconRecord> {
    let terms = query_terms(query);
    if terms.is_empty() {
        return icons.iter().collect();
    }
    icons
        .iter()
        .filter(|icon| matches_all_terms(&build_searchable_text(icon), &terms))
        .collect()
}

/// Catalog view with the per-icon searchable text built once up front.
///
/// The text depends only on icon data, so it is reused across every query
/// issued against the same catalog.
#[derive(Debug, Clone)]
pub struct SearchIndex<'a> {
    icons: &'a [IconRecord],
    texts: Vec<String>,
}

impl<'a> SearchIndex<'a> {
    #[must_use]
    pub fn new(icons: &'a [IconRecord]) -> Self {
        Self {
            icons,
            texts: icons.iter().map(build_searchable_text).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Positions of matching icons, ascending.
    #[must_use]
    pub fn matching_positions(&self, query: &str) -> Vec<usize> {
        let terms = query_terms(query);
        if terms.is_empty() {
            return (0..self.icons.len()).collect();
        }
        self.texts
            .iter()
            .enumerate()
            .filter(|(_, text)| matches_all_terms(text, &terms))
            .map(|(position, _)| position)
            .collect()
    }

    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&'a IconRecord> {
        self.matching_positions(query)
            .into_iter()
            .map(|position| &self.icons[position])
            .collect()
    }
}
