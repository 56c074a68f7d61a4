use std::path::Path;

use crate::error::Result;
use crate::models::CodepointMap;

/// Glyph names use `_` where icon file names use `-`.
#[must_use]
pub fn normalize_glyph_name(glyph_name: &str) -> String {
    glyph_name.replace('_', "-").to_lowercase()
}

#[cfg(feature = "font-fallback")]
pub fn extract_glyph_codepoints(path: &Path) -> Result<CodepointMap> {
    use std::collections::BTreeMap;

    use ttf_parser::{Face, GlyphId};

    use super::{PRINTABLE_FLOOR, format_codepoint};
    use crate::error::IconbookError;

    let data = std::fs::read(path)?;
    let face = Face::parse(&data, 0).map_err(|err| IconbookError::InvalidFont {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    // A glyph reachable from several codepoints is keyed by its lowest one.
    let mut first_codepoint = BTreeMap::<u16, u32>::new();
    if let Some(cmap) = face.tables().cmap {
        for subtable in cmap.subtables {
            if !subtable.is_unicode() {
                continue;
            }
            subtable.codepoints(|codepoint| {
                let Some(glyph) = subtable.glyph_index(codepoint) else {
                    return;
                };
                first_codepoint
                    .entry(glyph.0)
                    .and_modify(|current| *current = (*current).min(codepoint))
                    .or_insert(codepoint);
            });
        }
    }

    let mut mapping = CodepointMap::new();
    for (glyph, codepoint) in first_codepoint {
        if codepoint <= PRINTABLE_FLOOR {
            continue;
        }
        let Some(name) = face.glyph_name(GlyphId(glyph)) else {
            continue;
        };
        mapping.insert(normalize_glyph_name(name), format_codepoint(codepoint));
    }
    Ok(mapping)
}

#[cfg(not(feature = "font-fallback"))]
pub fn extract_glyph_codepoints(path: &Path) -> Result<CodepointMap> {
    tracing::debug!(
        font = %path.display(),
        "font-fallback feature disabled; skipping glyph extraction"
    );
    Ok(CodepointMap::new())
}
