/// Drops the single leading underscore the source set uses as a sort prefix.
#[must_use]
pub fn clean_name(name: &str) -> &str {
    name.strip_prefix('_').unwrap_or(name)
}

/// Title-cases each hyphen-separated word: `_arrow-left` becomes `Arrow Left`.
#[must_use]
pub fn display_name(name: &str) -> String {
    let stem = name.strip_suffix(".svg").unwrap_or(name);
    clean_name(stem)
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(word.len());
    out.extend(first.to_uppercase());
    out.push_str(chars.as_str());
    out
}

/// Icon name for an SVG file name, or `None` for hidden and non-SVG files.
#[must_use]
pub fn icon_name_from_file(file_name: &str) -> Option<&str> {
    if file_name.starts_with('.') {
        return None;
    }
    file_name.strip_suffix(".svg").filter(|stem| !stem.is_empty())
}
