use std::collections::BTreeSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use walkdir::WalkDir;

use crate::config::PrepareConfig;
use crate::error::{IconbookError, Result};
use crate::models::{
    IconCatalog, IconRecord, IconSize, IconStyle, PrepareReport, SvgVariants, TagMap,
};
use crate::naming::{display_name, icon_name_from_file};
use crate::store::{read_tag_map, write_catalog, write_tag_map};
use crate::svg::{SvgLoad, load_variant};
use crate::tags::generate_tags;
use crate::unicode::resolve_codepoints;

/// Size whose directories define which icons exist.
const DEFINING_SIZE: IconSize = IconSize::Small;

#[derive(Debug, Clone)]
pub struct PreparedCatalog {
    pub catalog: IconCatalog,
    /// Curated entries plus generated entries for newly seen icons.
    pub tags: TagMap,
    pub new_tag_entries: usize,
    pub skipped_variants: usize,
}

/// Runs the full pass and writes the tag file and the catalog file.
pub fn prepare_catalog(config: &PrepareConfig) -> Result<PrepareReport> {
    let prepared = build_catalog(config, Utc::now())?;
    write_tag_map(&config.tags_file, &prepared.tags)?;
    write_catalog(&config.output_file, &prepared.catalog)?;

    let report = PrepareReport {
        icons: prepared.catalog.icons.len(),
        tags_total: prepared.tags.len(),
        tags_new: prepared.new_tag_entries,
        unicode_mappings: prepared
            .catalog
            .icons
            .iter()
            .filter(|icon| icon.unicode.is_some())
            .count(),
        skipped_variants: prepared.skipped_variants,
        output: config.output_file.display().to_string(),
    };
    tracing::info!(
        icons = report.icons,
        tags_total = report.tags_total,
        tags_new = report.tags_new,
        output = %report.output,
        "wrote icon catalog"
    );
    Ok(report)
}

/// Builds the catalog in memory without touching output files.
pub fn build_catalog(config: &PrepareConfig, generated_at: DateTime<Utc>) -> Result<PreparedCatalog> {
    let existing = match read_tag_map(&config.tags_file)? {
        Some(existing) => {
            tracing::info!(entries = existing.len(), "loaded curated tag entries");
            existing
        }
        None => TagMap::new(),
    };
    let codepoints = resolve_codepoints(&config.mapping_file, &config.fonts_dir)?.mapping;
    let names = discover_icon_names(&config.icons_dir)?;
    tracing::info!(icons = names.len(), "discovered icons");

    let mut icons = Vec::with_capacity(names.len());
    let mut skipped_variants = 0;
    for name in &names {
        let (svg, skipped) = load_variants(&config.icons_dir, name)?;
        skipped_variants += skipped;
        icons.push(IconRecord {
            name: name.clone(),
            display_name: display_name(name),
            tags: resolve_tags(&existing, name),
            unicode: codepoints.get(name).cloned(),
            svg,
        });
    }

    let (tags, new_tag_entries) = merge_tag_entries(existing, &icons);
    Ok(PreparedCatalog {
        catalog: IconCatalog {
            icons,
            generated_at,
        },
        tags,
        new_tag_entries,
        skipped_variants,
    })
}

/// Curated tags verbatim when present, generated tags otherwise.
#[must_use]
pub fn resolve_tags(existing: &TagMap, name: &str) -> Vec<String> {
    existing
        .get(name)
        .cloned()
        .unwrap_or_else(|| generate_tags(name))
}

/// Adds entries for icons the tag map does not know yet. Existing entries are
/// never rewritten. Returns the merged map and the number of added entries.
#[must_use]
pub fn merge_tag_entries(existing: TagMap, icons: &[IconRecord]) -> (TagMap, usize) {
    let mut merged = existing;
    let mut added = 0;
    for icon in icons {
        if merged.contains_key(&icon.name) {
            continue;
        }
        merged.insert(icon.name.clone(), icon.tags.clone());
        added += 1;
    }
    (merged, added)
}

/// Unique icon names across every style at the defining size, sorted.
pub fn discover_icon_names(icons_dir: &Path) -> Result<BTreeSet<String>> {
    if !icons_dir.is_dir() {
        return Err(IconbookError::NotFound(icons_dir.to_path_buf()));
    }

    let mut names = BTreeSet::new();
    for style in IconStyle::ALL {
        let dir = icons_dir.join(DEFINING_SIZE.as_str()).join(style.as_str());
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "style directory missing");
            continue;
        }
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.path().is_file() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            if let Some(name) = icon_name_from_file(file_name) {
                names.insert(name.to_string());
            }
        }
    }
    Ok(names)
}

fn load_variants(icons_dir: &Path, name: &str) -> Result<(SvgVariants, usize)> {
    let mut svg = SvgVariants::default();
    let mut skipped = 0;
    for size in IconSize::ALL {
        for style in IconStyle::ALL {
            let path = icons_dir
                .join(size.as_str())
                .join(style.as_str())
                .join(format!("{name}.svg"));
            let loaded = load_variant(&path)?;
            if let SvgLoad::Skipped(reason) = &loaded {
                tracing::warn!(file = %path.display(), %reason, "skipping malformed svg");
                skipped += 1;
            }
            svg.set(size, style, loaded.into_content());
        }
    }
    Ok((svg, skipped))
}
