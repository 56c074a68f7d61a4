//! Icon-name to codepoint resolution.
//!
//! A curated mapping file, when present, is authoritative. Otherwise glyph
//! names are read from the embedded fonts: the outline font first, then the
//! filled font for names the outline font did not cover.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{CodepointMap, IconSize, IconStyle};
use crate::store::read_raw_codepoint_map;

mod font;

pub use font::{extract_glyph_codepoints, normalize_glyph_name};

/// Space and control characters never map to an icon.
#[cfg(feature = "font-fallback")]
pub(crate) const PRINTABLE_FLOOR: u32 = 0x20;

const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

#[must_use]
pub fn format_codepoint(codepoint: u32) -> String {
    format!("{codepoint:04X}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnicodeSource {
    Curated,
    Fonts,
    Unavailable,
}

impl UnicodeSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Curated => "curated",
            Self::Fonts => "fonts",
            Self::Unavailable => "unavailable",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedCodepoints {
    pub source: UnicodeSource,
    pub mapping: CodepointMap,
}

pub fn resolve_codepoints(mapping_file: &Path, fonts_dir: &Path) -> Result<ResolvedCodepoints> {
    if let Some(raw) = read_raw_codepoint_map(mapping_file)? {
        let mapping = raw
            .into_iter()
            .map(|(name, codepoint)| (name, format_codepoint(codepoint)))
            .collect::<CodepointMap>();
        tracing::info!(
            mappings = mapping.len(),
            file = %mapping_file.display(),
            "loaded curated unicode mapping"
        );
        return Ok(ResolvedCodepoints {
            source: UnicodeSource::Curated,
            mapping,
        });
    }

    let outline = font_mapping(fonts_dir, IconStyle::Outline)?;
    let filled = font_mapping(fonts_dir, IconStyle::Filled)?;
    let source = if outline.is_none() && filled.is_none() {
        UnicodeSource::Unavailable
    } else {
        UnicodeSource::Fonts
    };
    let mapping = merge_font_mappings(outline.unwrap_or_default(), filled.unwrap_or_default());
    tracing::info!(
        mappings = mapping.len(),
        source = source.as_str(),
        "resolved unicode mapping"
    );
    Ok(ResolvedCodepoints { source, mapping })
}

/// Outline entries win; filled entries only fill names outline lacks.
#[must_use]
pub fn merge_font_mappings(outline: CodepointMap, filled: CodepointMap) -> CodepointMap {
    let mut merged = outline;
    for (name, codepoint) in filled {
        merged.entry(name).or_insert(codepoint);
    }
    merged
}

/// `None` when the style has no font file or the font cannot be parsed.
fn font_mapping(fonts_dir: &Path, style: IconStyle) -> Result<Option<CodepointMap>> {
    let dir = fonts_dir.join(IconSize::Small.as_str()).join(style.as_str());
    let Some(path) = find_font_file(&dir)? else {
        return Ok(None);
    };
    match extract_glyph_codepoints(&path) {
        Ok(mapping) => {
            tracing::info!(
                font = %path.display(),
                mappings = mapping.len(),
                style = style.as_str(),
                "extracted glyph codepoints"
            );
            Ok(Some(mapping))
        }
        Err(err) => {
            tracing::warn!(font = %path.display(), error = %err, "could not parse font");
            Ok(None)
        }
    }
}

fn find_font_file(dir: &Path) -> Result<Option<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let mut fonts = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_font = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                FONT_EXTENSIONS
                    .iter()
                    .any(|wanted| ext.eq_ignore_ascii_case(wanted))
            });
        if is_font && path.is_file() {
            fonts.push(path);
        }
    }
    fonts.sort();
    Ok(fonts.into_iter().next())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn map(entries: &[(&str, &str)]) -> CodepointMap {
        entries
            .iter()
            .map(|(name, codepoint)| ((*name).to_string(), (*codepoint).to_string()))
            .collect()
    }

    #[test]
    fn codepoints_are_uppercase_and_padded() {
        assert_eq!(format_codepoint(0x41), "0041");
        assert_eq!(format_codepoint(0xe0a1), "E0A1");
        assert_eq!(format_codepoint(0x1f600), "1F600");
    }

    #[test]
    fn outline_wins_on_name_collision() {
        let merged = merge_font_mappings(
            map(&[("home", "E001"), ("lock", "E002")]),
            map(&[("home", "F001"), ("bell", "F002")]),
        );
        assert_eq!(merged, map(&[("bell", "F002"), ("home", "E001"), ("lock", "E002")]));
    }

    #[test]
    fn curated_mapping_takes_precedence_over_fonts() {
        let temp = tempdir().expect("tempdir");
        let mapping_file = temp.path().join("mapping.json");
        fs::write(&mapping_file, r#"{"home": 57345, "lock": 65}"#).expect("write mapping");

        // an unparsable font must not be consulted at all
        let font_dir = temp.path().join("fonts/16/outline");
        fs::create_dir_all(&font_dir).expect("font dir");
        fs::write(font_dir.join("broken.ttf"), b"nope").expect("write font");

        let resolved =
            resolve_codepoints(&mapping_file, &temp.path().join("fonts")).expect("resolve");
        assert_eq!(resolved.source, UnicodeSource::Curated);
        assert_eq!(resolved.mapping, map(&[("home", "E001"), ("lock", "0041")]));
    }

    #[test]
    fn missing_sources_degrade_to_empty_mapping() {
        let temp = tempdir().expect("tempdir");
        let resolved = resolve_codepoints(
            &temp.path().join("mapping.json"),
            &temp.path().join("fonts"),
        )
        .expect("resolve");
        assert_eq!(resolved.source, UnicodeSource::Unavailable);
        assert!(resolved.mapping.is_empty());
    }

    #[cfg(feature = "font-fallback")]
    #[test]
    fn unparsable_font_is_skipped_not_fatal() {
        let temp = tempdir().expect("tempdir");
        let font_dir = temp.path().join("fonts/16/filled");
        fs::create_dir_all(&font_dir).expect("font dir");
        fs::write(font_dir.join("Icons Filled.ttf"), b"nope").expect("write font");

        let resolved = resolve_codepoints(
            &temp.path().join("mapping.json"),
            &temp.path().join("fonts"),
        )
        .expect("resolve");
        assert_eq!(resolved.source, UnicodeSource::Unavailable);
        assert!(resolved.mapping.is_empty());
    }

    #[cfg(feature = "font-fallback")]
    #[test]
    fn outline_font_wins_over_filled_font() {
        let temp = tempdir().expect("tempdir");
        let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
        for style in IconStyle::ALL {
            let dir = temp.path().join("fonts/16").join(style.as_str());
            fs::create_dir_all(&dir).expect("font dir");
            let font = format!("icons-{}.ttf", style.as_str());
            fs::copy(fixtures.join(&font), dir.join(&font)).expect("copy font");
        }

        let resolved = resolve_codepoints(
            &temp.path().join("mapping.json"),
            &temp.path().join("fonts"),
        )
        .expect("resolve");
        assert_eq!(resolved.source, UnicodeSource::Fonts);
        assert_eq!(
            resolved.mapping,
            map(&[
                ("arrow-left", "E002"),
                ("bell", "F002"),
                ("chat-bubble", "E003"),
                ("home", "E001"),
            ])
        );
    }

    #[test]
    fn font_lookup_ignores_other_files() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("README.md"), "fonts").expect("write readme");
        assert_eq!(find_font_file(temp.path()).expect("find"), None);

        fs::write(temp.path().join("b.TTF"), b"").expect("write b");
        fs::write(temp.path().join("a.otf"), b"").expect("write a");
        assert_eq!(
            find_font_file(temp.path()).expect("find"),
            Some(temp.path().join("a.otf"))
        );
    }
}
