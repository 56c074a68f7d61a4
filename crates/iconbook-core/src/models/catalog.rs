use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::IconRecord;

/// Icon name to tag list; `BTreeMap` keeps keys sorted on disk.
pub type TagMap = BTreeMap<String, Vec<String>>;

/// Icon name to uppercase hex codepoint (`E001`).
pub type CodepointMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconCatalog {
    pub icons: Vec<IconRecord>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareReport {
    pub icons: usize,
    pub tags_total: usize,
    pub tags_new: usize,
    pub unicode_mappings: usize,
    pub skipped_variants: usize,
    pub output: String,
}
