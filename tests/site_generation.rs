//! Building a site from a directory of documents

use quire::quire::config::{Loader, SiteConfig};
use quire::quire::site::{build_from_config, collect_sources, SiteError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, text: &str) {
    fs::write(dir.join(name), text).expect("write source");
}

fn site_config(root: &TempDir) -> SiteConfig {
    let source = root.path().join("content");
    let output = root.path().join("public");
    Loader::new()
        .set_override("site.source_dir", source.to_str().expect("utf-8 path"))
        .expect("override to apply")
        .set_override("site.output_dir", output.to_str().expect("utf-8 path"))
        .expect("override to apply")
        .build()
        .expect("config to build")
        .site
}

#[test]
fn test_collect_sources_filters_and_sorts() {
    let root = TempDir::new().expect("temp dir");
    write(root.path(), "zeta.md", "z\n");
    write(root.path(), "alpha.md", "a\n");
    write(root.path(), "notes.txt", "not a document\n");
    fs::create_dir(root.path().join("nested.md")).expect("create dir");

    let sources = collect_sources(root.path(), "md").expect("collect");
    let names: Vec<&str> = sources.iter().map(|s| s.name.as_str()).collect();

    assert_eq!(names, vec!["alpha", "zeta"]);
    assert_eq!(sources[0].text, "a\n");
}

#[test]
fn test_missing_source_dir_is_an_error() {
    let root = TempDir::new().expect("temp dir");
    let error = collect_sources(&root.path().join("missing"), "md").unwrap_err();
    assert!(matches!(error, SiteError::Io { .. }));
}

#[test]
fn test_build_writes_one_page_per_document() {
    let root = TempDir::new().expect("temp dir");
    let config = site_config(&root);
    fs::create_dir(&config.source_dir).expect("create source dir");
    write(&config.source_dir, "index.md", "# Home\n- [Guide](./guide.html)\n");
    write(&config.source_dir, "guide.md", "{\nA *short* guide.\n}\n");

    let report = build_from_config(&config).expect("build");

    assert!(report.is_clean());
    assert_eq!(report.rendered, vec!["guide", "index"]);

    let index = fs::read_to_string(config.output_dir.join("index.html")).expect("index page");
    assert!(index.starts_with("<!DOCTYPE html>"));
    assert!(index.contains("<title>index</title>"));
    assert!(index.contains(
        "<div id=\"content\"><h1 class=\"text\">Home</h1>\
         <ul class=\"list\"><li><a href=\"./guide.html\">Guide</a></li></ul></div>"
    ));

    let guide = fs::read_to_string(config.output_dir.join("guide.html")).expect("guide page");
    assert!(guide.contains(
        "<div class=\"segment\"><div class=\"text\">A <em>short</em> guide.</div></div>"
    ));
}

#[test]
fn test_malformed_document_is_skipped() {
    let root = TempDir::new().expect("temp dir");
    let config = site_config(&root);
    fs::create_dir(&config.source_dir).expect("create source dir");
    write(&config.source_dir, "good.md", "fine\n");
    write(&config.source_dir, "broken.md", "{\nnever closed\n");

    let report = build_from_config(&config).expect("build");

    assert_eq!(report.rendered, vec!["good"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].name, "broken");
    assert!(matches!(report.skipped[0].error, SiteError::Parse { .. }));

    assert!(config.output_dir.join("good.html").exists());
    assert!(!config.output_dir.join("broken.html").exists());
}

#[test]
fn test_stylesheet_comes_from_config() {
    let root = TempDir::new().expect("temp dir");
    let mut config = site_config(&root);
    config.stylesheet = "/assets/site.css".to_string();
    fs::create_dir(&config.source_dir).expect("create source dir");
    write(&config.source_dir, "page.md", "text\n");

    build_from_config(&config).expect("build");

    let page = fs::read_to_string(config.output_dir.join("page.html")).expect("page");
    assert!(page.contains("<link rel=\"stylesheet\" href=\"/assets/site.css\">"));
}
