use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use iconbook_core::models::PrepareReport;
use iconbook_core::store::read_catalog;
use iconbook_core::{PathOverrides, PrepareConfig, SearchIndex, generate_tags, prepare_catalog};

use crate::cli::{Commands, GenerateArgs, SearchArgs};

mod support;

#[cfg(test)]
mod tests;

use self::support::print_json;

pub(crate) fn run_from_root(root: &Path, command: Commands) -> Result<()> {
    match command {
        Commands::Generate(args) => {
            let report = run_generate(root, args)?;
            print_json(&report)?;
        }
        Commands::Tags(args) => {
            print_json(&collect_tags(&args.names))?;
        }
        Commands::Search(args) => {
            let names = run_search(root, &args)?;
            print_json(&names)?;
        }
    }
    Ok(())
}

fn resolve_config(root: &Path, args: GenerateArgs) -> PrepareConfig {
    let mut config = PrepareConfig::from_env(root);
    config.apply_overrides(PathOverrides {
        icons_dir: args.icons_dir,
        fonts_dir: args.fonts_dir,
        tags_file: args.tags_file,
        mapping_file: args.mapping_file,
        output_file: args.output,
    });
    config
}

fn run_generate(root: &Path, args: GenerateArgs) -> Result<PrepareReport> {
    let config = resolve_config(root, args);
    prepare_catalog(&config).with_context(|| {
        format!(
            "failed to prepare icon catalog from {}",
            config.icons_dir.display()
        )
    })
}

fn collect_tags(names: &[String]) -> BTreeMap<&str, Vec<String>> {
    names
        .iter()
        .map(|name| (name.as_str(), generate_tags(name)))
        .collect()
}

fn run_search(root: &Path, args: &SearchArgs) -> Result<Vec<String>> {
    let catalog_path = match &args.catalog {
        Some(path) => path.clone(),
        None => PrepareConfig::from_env(root).output_file,
    };
    let catalog = read_catalog(&catalog_path)
        .with_context(|| format!("failed to load catalog {}", catalog_path.display()))?;

    let index = SearchIndex::new(&catalog.icons);
    let hits = index.search(&args.query);
    tracing::debug!(query = %args.query, hits = hits.len(), "searched catalog");

    let limit = args.limit.unwrap_or(usize::MAX);
    Ok(hits
        .into_iter()
        .take(limit)
        .map(|icon| icon.name.clone())
        .collect())
}
