use std::path::PathBuf;

use clap::Args;

use super::parsers::parse_min_one_usize;

#[derive(Debug, Args, Default)]
pub struct GenerateArgs {
    /// Directory laid out as `<size>/<style>/<name>.svg`.
    #[arg(long)]
    pub icons_dir: Option<PathBuf>,
    /// Directory holding `16/outline` and `16/filled` font files.
    #[arg(long)]
    pub fonts_dir: Option<PathBuf>,
    /// Curated tag file; updated with entries for new icons.
    #[arg(long)]
    pub tags_file: Option<PathBuf>,
    /// Curated name to codepoint mapping; disables font extraction when present.
    #[arg(long)]
    pub mapping_file: Option<PathBuf>,
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct TagsArgs {
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Whitespace-separated terms; every term must match.
    #[arg(allow_hyphen_values = true)]
    pub query: String,
    /// Catalog file (defaults to the configured output file).
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[arg(long, value_parser = parse_min_one_usize)]
    pub limit: Option<usize>,
}
