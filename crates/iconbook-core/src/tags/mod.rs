use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use crate::naming::clean_name;

mod tables;

#[cfg(test)]
mod tests;

use self::tables::{CATEGORY_TAGS, COMPOUND_EXPANSIONS, TableRows, WORD_EXPANSIONS};

pub const MIN_TAG_COUNT: usize = 10;

/// Padding used when organic expansion yields fewer than [`MIN_TAG_COUNT`] tags.
pub const FALLBACK_TAGS: [&str; 10] = [
    "icon",
    "ui",
    "interface",
    "design",
    "graphic",
    "symbol",
    "visual",
    "element",
    "component",
    "asset",
];

const UI_PREFIXES: [&str; 4] = ["arrow", "chevron", "caret", "corner"];
const UI_TAGS: [&str; 2] = ["ui", "interface"];

type Lookup = HashMap<&'static str, &'static [&'static str]>;

static WORD_LOOKUP: LazyLock<Lookup> = LazyLock::new(|| index_rows(WORD_EXPANSIONS));
static COMPOUND_LOOKUP: LazyLock<Lookup> = LazyLock::new(|| index_rows(COMPOUND_EXPANSIONS));
static CATEGORY_LOOKUP: LazyLock<Lookup> = LazyLock::new(|| index_rows(CATEGORY_TAGS));

fn index_rows(rows: TableRows) -> Lookup {
    rows.iter().copied().collect()
}

/// Derives the sorted, deduplicated search tags for an icon name.
///
/// The result always holds at least [`MIN_TAG_COUNT`] entries unless the
/// fallback pool itself is exhausted, and every entry is lowercase.
#[must_use]
pub fn generate_tags(name: &str) -> Vec<String> {
    let normalized = name.to_lowercase();
    let clean = clean_name(&normalized);
    let words = clean
        .split('-')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>();

    let mut tags = TagSet::default();
    for word in &words {
        tags.insert(word);
    }
    tags.insert(clean);
    if words.len() > 1 {
        tags.insert(&words.concat());
    }

    for word in &words {
        tags.extend(WORD_LOOKUP.get(*word).copied());
    }
    tags.extend(COMPOUND_LOOKUP.get(clean).copied());
    for word in &words {
        tags.extend(CATEGORY_LOOKUP.get(*word).copied());
    }
    // Whole-name category probe; duplicates the per-token probe for one-word names.
    tags.extend(CATEGORY_LOOKUP.get(clean).copied());

    if UI_PREFIXES.iter().any(|prefix| clean.starts_with(prefix)) {
        tags.extend(Some(&UI_TAGS[..]));
    }

    for fallback in FALLBACK_TAGS {
        if tags.len() >= MIN_TAG_COUNT {
            break;
        }
        tags.insert(fallback);
    }

    tags.into_sorted()
}

#[derive(Debug, Default)]
struct TagSet {
    inner: BTreeSet<String>,
}

impl TagSet {
    fn insert(&mut self, tag: &str) {
        if tag.is_empty() || self.inner.contains(tag) {
            return;
        }
        self.inner.insert(tag.to_string());
    }

    fn extend(&mut self, tags: Option<&[&str]>) {
        let Some(tags) = tags else {
            return;
        };
        for tag in tags {
            self.insert(tag);
        }
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn into_sorted(self) -> Vec<String> {
        self.inner.into_iter().collect()
    }
}

#[cfg(test)]
pub(crate) fn table_keys() -> [(&'static str, Vec<&'static str>); 3] {
    let keys = |rows: TableRows| rows.iter().map(|(key, _)| *key).collect::<Vec<_>>();
    [
        ("word", keys(WORD_EXPANSIONS)),
        ("compound", keys(COMPOUND_EXPANSIONS)),
        ("category", keys(CATEGORY_TAGS)),
    ]
}

#[cfg(test)]
pub(crate) fn table_values() -> impl Iterator<Item = &'static str> {
    [WORD_EXPANSIONS, COMPOUND_EXPANSIONS, CATEGORY_TAGS]
        .into_iter()
        .flat_map(|rows| rows.iter())
        .flat_map(|(_, values)| values.iter().copied())
}
