use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

static FILL_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"(?i)fill="#1B1B1B""##).expect("static regex"));
static STROKE_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"(?i)stroke="#1B1B1B""##).expect("static regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgLoad {
    Missing,
    Loaded(String),
    Skipped(String),
}

impl SvgLoad {
    #[must_use]
    pub fn into_content(self) -> Option<String> {
        match self {
            Self::Loaded(svg) => Some(svg),
            Self::Missing | Self::Skipped(_) => None,
        }
    }
}

/// Rewrites the source set's hard-coded ink color so icons follow `currentColor`.
#[must_use]
pub fn normalize_svg(raw: &str) -> String {
    let trimmed = raw.trim();
    let filled = FILL_COLOR.replace_all(trimmed, r#"fill="currentColor""#);
    STROKE_COLOR
        .replace_all(&filled, r#"stroke="currentColor""#)
        .into_owned()
}

/// Reads one variant file. Only I/O failures other than a missing file are
/// errors; undecodable or non-SVG content is reported as [`SvgLoad::Skipped`].
pub fn load_variant(path: &Path) -> Result<SvgLoad> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(SvgLoad::Missing),
        Err(err) => return Err(err.into()),
    };
    let Ok(raw) = String::from_utf8(bytes) else {
        return Ok(SvgLoad::Skipped("not valid UTF-8".to_string()));
    };
    if !raw.contains("<svg") {
        return Ok(SvgLoad::Skipped("no <svg> element".to_string()));
    }
    Ok(SvgLoad::Loaded(normalize_svg(&raw)))
}
