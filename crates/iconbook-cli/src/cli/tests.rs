use std::path::PathBuf;

use super::*;
use clap::Parser;

#[test]
fn generate_parses_path_overrides() {
    let cli = Cli::try_parse_from([
        "iconbook",
        "--root",
        "/work",
        "generate",
        "--tags-file",
        "curated/tags.json",
        "--output",
        "dist/icons.json",
    ])
    .expect("parse");
    assert_eq!(cli.root, PathBuf::from("/work"));
    match cli.command {
        Commands::Generate(args) => {
            assert_eq!(args.tags_file, Some(PathBuf::from("curated/tags.json")));
            assert_eq!(args.output, Some(PathBuf::from("dist/icons.json")));
            assert_eq!(args.icons_dir, None);
        }
        _ => panic!("expected generate command"),
    }
}

#[test]
fn root_defaults_to_current_directory() {
    let cli = Cli::try_parse_from(["iconbook", "generate"]).expect("parse");
    assert_eq!(cli.root, PathBuf::from("."));
}

#[test]
fn tags_requires_at_least_one_name() {
    assert!(Cli::try_parse_from(["iconbook", "tags"]).is_err());
    let cli = Cli::try_parse_from(["iconbook", "tags", "arrow-left", "lightbulb"]).expect("parse");
    match cli.command {
        Commands::Tags(TagsArgs { names }) => assert_eq!(names, vec!["arrow-left", "lightbulb"]),
        _ => panic!("expected tags command"),
    }
}

#[test]
fn search_parses_query_and_limit() {
    let cli = Cli::try_parse_from(["iconbook", "search", "arrow-left nav", "--limit", "3"])
        .expect("parse");
    match cli.command {
        Commands::Search(SearchArgs {
            query,
            catalog,
            limit,
        }) => {
            assert_eq!(query, "arrow-left nav");
            assert_eq!(catalog, None);
            assert_eq!(limit, Some(3));
        }
        _ => panic!("expected search command"),
    }
}

#[test]
fn search_rejects_zero_limit() {
    let parsed = Cli::try_parse_from(["iconbook", "search", "home", "--limit", "0"]);
    assert!(parsed.is_err(), "zero limit must be rejected");
}
