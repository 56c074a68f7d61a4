use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;
mod parsers;

#[cfg(test)]
mod tests;

pub use args::{GenerateArgs, SearchArgs, TagsArgs};

#[derive(Debug, Parser)]
#[command(name = "iconbook")]
#[command(about = "Prepare and search a tagged SVG icon catalog", version)]
pub struct Cli {
    /// Project root that default source and output paths resolve against.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan icons, merge curated tags, and write the tag file and catalog.
    Generate(GenerateArgs),
    /// Print the generated tags for one or more icon names.
    Tags(TagsArgs),
    /// Filter a generated catalog by a search query.
    Search(SearchArgs),
}
