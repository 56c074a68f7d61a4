use std::fs;
use std::path::Path;

use tempfile::tempdir;

use super::{collect_tags, run_from_root, run_generate, run_search};
use crate::cli::{Commands, GenerateArgs, SearchArgs};

const SVG: &str = "<svg viewBox=\"0 0 16 16\"><path d=\"M0 0h16v16z\"/></svg>";

fn seed_icons(root: &Path, names: &[&str]) {
    let dir = root.join("source/icons/16/outline");
    fs::create_dir_all(&dir).expect("icon dir");
    for name in names {
        fs::write(dir.join(format!("{name}.svg")), SVG).expect("write icon");
    }
}

fn search_args(query: &str, limit: Option<usize>) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        catalog: None,
        limit,
    }
}

#[test]
fn generate_writes_catalog_and_tag_file_under_root() {
    let temp = tempdir().expect("tempdir");
    seed_icons(temp.path(), &["arrow-left", "lightbulb"]);

    let report = run_generate(temp.path(), GenerateArgs::default()).expect("generate");
    assert_eq!(report.icons, 2);
    assert_eq!(report.tags_new, 2);
    assert!(temp.path().join("source/tags.json").is_file());
    assert!(temp.path().join("src/generated/icons.json").is_file());
}

#[test]
fn generate_honors_explicit_output_path() {
    let temp = tempdir().expect("tempdir");
    seed_icons(temp.path(), &["home"]);
    let output = temp.path().join("dist").join("catalog.json");

    let report = run_generate(
        temp.path(),
        GenerateArgs {
            output: Some(output.clone()),
            ..GenerateArgs::default()
        },
    )
    .expect("generate");
    assert_eq!(report.output, output.display().to_string());
    assert!(output.is_file());
}

#[test]
fn generate_fails_with_context_when_icons_are_missing() {
    let temp = tempdir().expect("tempdir");
    let err = run_generate(temp.path(), GenerateArgs::default()).expect_err("must fail");
    assert!(err.to_string().contains("failed to prepare icon catalog"));
}

#[test]
fn search_reads_generated_catalog() {
    let temp = tempdir().expect("tempdir");
    seed_icons(temp.path(), &["arrow-left", "arrow-right", "lightbulb", "trash"]);
    run_generate(temp.path(), GenerateArgs::default()).expect("generate");

    assert_eq!(
        run_search(temp.path(), &search_args("idea", None)).expect("search"),
        vec!["lightbulb"]
    );
    assert_eq!(
        run_search(temp.path(), &search_args("arrow", None)).expect("search"),
        vec!["arrow-left", "arrow-right"]
    );
    assert_eq!(
        run_search(temp.path(), &search_args("", Some(2))).expect("search"),
        vec!["arrow-left", "arrow-right"]
    );
    assert!(
        run_search(temp.path(), &search_args("idea garbage", None))
            .expect("search")
            .is_empty()
    );
}

#[test]
fn search_without_catalog_reports_the_path() {
    let temp = tempdir().expect("tempdir");
    let err = run_search(temp.path(), &search_args("home", None)).expect_err("must fail");
    assert!(err.to_string().contains("failed to load catalog"));
}

#[test]
fn tags_command_maps_each_name() {
    let names = vec!["lightbulb".to_string(), "arrow-left".to_string()];
    let tags = collect_tags(&names);
    assert_eq!(tags.keys().copied().collect::<Vec<_>>(), vec!["arrow-left", "lightbulb"]);
    assert!(tags["lightbulb"].iter().any(|tag| tag == "idea"));

    run_from_root(Path::new("."), Commands::Tags(crate::cli::TagsArgs { names }))
        .expect("tags command");
}
