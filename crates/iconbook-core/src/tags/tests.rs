use std::collections::HashSet;

use super::{FALLBACK_TAGS, MIN_TAG_COUNT, generate_tags, table_keys, table_values};

const SAMPLE_NAMES: [&str; 12] = [
    "arrow-left",
    "_arrow-left",
    "lightbulb",
    "lock",
    "home",
    "circle-slash",
    "chevron-down",
    "x",
    "",
    "-",
    "Settings-Gear",
    "totally-unknown-glyph",
];

fn assert_contains_all(tags: &[String], expected: &[&str]) {
    for wanted in expected {
        assert!(
            tags.iter().any(|tag| tag == wanted),
            "expected `{wanted}` in {tags:?}"
        );
    }
}

#[test]
fn arrow_left_combines_literal_joined_expansion_and_ui_tags() {
    let tags = generate_tags("arrow-left");
    assert_contains_all(
        &tags,
        &[
            "arrow",
            "left",
            "arrow-left",
            "arrowleft",
            "navigate",
            "direction",
            "ui",
            "interface",
        ],
    );
}

#[test]
fn lightbulb_uses_whole_name_compound_expansion() {
    let tags = generate_tags("lightbulb");
    assert_contains_all(&tags, &["lightbulb", "idea", "lamp", "innovation"]);
    assert!(!tags.iter().any(|tag| tag.contains('-')));
}

#[test]
fn leading_underscore_is_not_part_of_the_name() {
    assert_eq!(generate_tags("_arrow-left"), generate_tags("arrow-left"));
    assert!(!generate_tags("_home").iter().any(|tag| tag.starts_with('_')));
}

#[test]
fn only_one_leading_underscore_is_stripped() {
    let tags = generate_tags("__home");
    assert!(tags.iter().any(|tag| tag == "_home"));
}

#[test]
fn every_sample_reaches_the_minimum_and_is_lowercase() {
    for name in SAMPLE_NAMES {
        let tags = generate_tags(name);
        assert!(tags.len() >= MIN_TAG_COUNT, "{name}: {tags:?}");
        for tag in &tags {
            assert!(!tag.is_empty(), "{name}: empty tag");
            assert_eq!(tag, &tag.to_lowercase(), "{name}: {tag}");
        }
    }
}

#[test]
fn generation_is_idempotent_and_sorted() {
    for name in SAMPLE_NAMES {
        let first = generate_tags(name);
        let second = generate_tags(name);
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(first, sorted);
    }
}

#[test]
fn empty_name_degrades_to_fallback_pool() {
    let mut expected = FALLBACK_TAGS.map(str::to_string).to_vec();
    expected.sort();
    assert_eq!(generate_tags(""), expected);
}

#[test]
fn unknown_name_is_padded_in_fallback_order() {
    // seeds: 3 words + full name + joined = 5, then first five of the pool
    let tags = generate_tags("qux-zed-wob");
    assert_eq!(tags.len(), MIN_TAG_COUNT);
    assert_contains_all(&tags, &["icon", "ui", "interface", "design", "graphic"]);
    assert!(!tags.iter().any(|tag| tag == "symbol"));
}

#[test]
fn padding_stops_once_the_floor_is_reached() {
    let tags = generate_tags("settings");
    assert!(tags.len() >= MIN_TAG_COUNT);
    assert!(!tags.iter().any(|tag| tag == "asset"));
}

#[test]
fn category_table_applies_per_token() {
    let tags = generate_tags("user-lock");
    assert_contains_all(&tags, &["security", "protect", "auth"]);
}

#[test]
fn corner_prefix_adds_ui_tags_without_table_entries() {
    let tags = generate_tags("cornerstone");
    assert_contains_all(&tags, &["ui", "interface"]);
}

#[test]
fn mixed_case_input_is_normalized() {
    assert_eq!(generate_tags("Arrow-Left"), generate_tags("arrow-left"));
}

#[test]
fn table_keys_are_unique_and_lowercase() {
    for (table, keys) in table_keys() {
        let mut seen = HashSet::new();
        for key in keys {
            assert!(seen.insert(key), "duplicate key `{key}` in {table} table");
            assert_eq!(key, key.to_lowercase(), "{table} table key `{key}`");
        }
    }
}

#[test]
fn table_values_are_lowercase() {
    for value in table_values() {
        assert!(!value.is_empty());
        assert_eq!(value, value.to_lowercase());
    }
}
