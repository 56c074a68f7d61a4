use crate::models::IconRecord;

/// Joins name, display name, codepoint, and tags into the text a query term
/// is matched against. An absent codepoint still contributes its separator.
pub(super) fn build_searchable_text(icon: &IconRecord) -> String {
    let unicode = icon.unicode.as_deref().unwrap_or_default();
    let tags_len = icon.tags.iter().map(String::len).sum::<usize>();
    let mut text = String::with_capacity(
        icon.name.len()
            + icon.display_name.len()
            + unicode.len()
            + tags_len
            + icon.tags.len()
            + 2,
    );
    text.push_str(&icon.name);
    text.push(' ');
    text.push_str(&icon.display_name.to_lowercase());
    text.push(' ');
    text.push_str(&unicode.to_lowercase());
    for tag in &icon.tags {
        text.push(' ');
        text.push_str(tag);
    }
    text
}
