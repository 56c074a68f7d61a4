use crate::models::IconRecord;
use crate::search::{SearchIndex, query_terms, search};
use crate::tags::generate_tags;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn home_and_close() -> Vec<IconRecord> {
    vec![
        IconRecord::new("home", tags(&["house", "main"])),
        IconRecord::new("close", tags(&["x", "dismiss"])),
    ]
}

fn names(hits: &[&IconRecord]) -> Vec<String> {
    hits.iter().map(|icon| icon.name.clone()).collect()
}

#[test]
fn empty_query_is_identity() {
    let icons = home_and_close();
    assert_eq!(names(&search(&icons, "")), vec!["home", "close"]);
}

#[test]
fn whitespace_query_matches_empty_query() {
    let icons = home_and_close();
    assert_eq!(search(&icons, "   \t\n"), search(&icons, ""));
}

#[test]
fn term_matches_inside_a_tag() {
    let icons = home_and_close();
    assert_eq!(names(&search(&icons, "hou")), vec!["home"]);
}

#[test]
fn all_terms_must_match_one_icon() {
    let icons = home_and_close();
    assert!(search(&icons, "home close").is_empty());
    assert_eq!(names(&search(&icons, "home main")), vec!["home"]);
}

#[test]
fn unmatched_term_empties_the_result() {
    let icons = home_and_close();
    assert!(search(&icons, "zzz").is_empty());
}

#[test]
fn query_case_and_padding_are_ignored() {
    let icons = home_and_close();
    assert_eq!(names(&search(&icons, "  DisMiss  ")), vec!["close"]);
}

#[test]
fn display_name_and_unicode_are_searchable() {
    let icons = vec![
        IconRecord::new("arrow-left", tags(&["navigate"])).with_unicode("E0A1"),
        IconRecord::new("arrow-right", tags(&["navigate"])),
    ];
    assert_eq!(names(&search(&icons, "e0a1")), vec!["arrow-left"]);
    assert_eq!(names(&search(&icons, "arrow right")), vec!["arrow-right"]);
    assert_eq!(names(&search(&icons, "arrow left")), vec!["arrow-left"]);
}

#[test]
fn order_is_preserved_among_hits() {
    let icons = vec![
        IconRecord::new("zoom-in", tags(&["magnify"])),
        IconRecord::new("alarm", tags(&["bell"])),
        IconRecord::new("search", tags(&["magnify", "find"])),
        IconRecord::new("bell", tags(&["notification"])),
    ];
    assert_eq!(names(&search(&icons, "magn")), vec!["zoom-in", "search"]);
    assert_eq!(names(&search(&icons, "bell")), vec!["alarm", "bell"]);
}

#[test]
fn hits_borrow_the_input_records() {
    let icons = home_and_close();
    let hits = search(&icons, "close");
    assert!(std::ptr::eq(hits[0], &icons[1]));
}

#[test]
fn generated_tags_make_synonyms_discoverable() {
    let icons = ["arrow-left", "lightbulb", "trash"]
        .into_iter()
        .map(|name| IconRecord::new(name, generate_tags(name)))
        .collect::<Vec<_>>();
    assert_eq!(names(&search(&icons, "idea")), vec!["lightbulb"]);
    assert_eq!(names(&search(&icons, "arrowleft")), vec!["arrow-left"]);
    assert_eq!(names(&search(&icons, "garbage")), vec!["trash"]);
}

#[test]
fn index_agrees_with_direct_search() {
    let icons = ["arrow-left", "arrow-right", "lightbulb", "home", "close"]
        .into_iter()
        .map(|name| IconRecord::new(name, generate_tags(name)))
        .collect::<Vec<_>>();
    let index = SearchIndex::new(&icons);
    assert_eq!(index.len(), icons.len());

    for query in ["", "  ", "arrow", "nav dir", "hou", "idea lamp", "nothing-here"] {
        assert_eq!(index.search(query), search(&icons, query), "query `{query}`");
    }
}

#[test]
fn index_positions_are_ascending() {
    let icons = home_and_close();
    let index = SearchIndex::new(&icons);
    assert_eq!(index.matching_positions(""), vec![0, 1]);
    assert_eq!(index.matching_positions("dismiss"), vec![1]);
}

#[test]
fn query_terms_split_on_whitespace_runs() {
    assert_eq!(query_terms("  Arrow \t LEFT\n"), vec!["arrow", "left"]);
    assert!(query_terms(" \t ").is_empty());
}
