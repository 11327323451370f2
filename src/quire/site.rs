//! Site building: the page assembler and the per-document error boundary
//!
//! The compilers work on in-memory text only. This module is the thin layer around them that
//! reads documents from a directory, renders each one, and hands the fragment to a
//! [PageAssembler] which owns all templating and storage.
//!
//! A document that fails to parse is logged and skipped. Nothing is written for it, and the
//! remaining documents are still built.

use crate::quire::config::SiteConfig;
use crate::quire::formats::html::HtmlRenderer;
use crate::quire::highlight::render::escape_html;
use crate::quire::parser::{parse_document, ParseError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info, warn};

pub const DEFAULT_STYLESHEET: &str = "source/style/utilities.css";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: ParseError,
    },
}

impl SiteError {
    fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}

/// One markup document: its name (the file stem) and its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub name: String,
    pub text: String,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Receives each successfully rendered document
pub trait PageAssembler {
    fn assemble(&mut self, name: &str, fragment: &str) -> Result<(), SiteError>;
}

/// The HTML page around a rendered fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageShell {
    pub stylesheet: String,
}

impl Default for PageShell {
    fn default() -> Self {
        Self::new(DEFAULT_STYLESHEET)
    }
}

impl PageShell {
    pub fn new(stylesheet: impl Into<String>) -> Self {
        Self {
            stylesheet: stylesheet.into(),
        }
    }

    pub fn wrap(&self, name: &str, fragment: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="stylesheet" href="{stylesheet}">
    <title>{title}</title>
</head>
<body>
    <div id="main">
        <div id="header"></div>
        <div id="content">{fragment}</div>
        <div id="footer"></div>
    </div>
</body>
</html>
"#,
            stylesheet = escape_html(&self.stylesheet),
            title = escape_html(name),
            fragment = fragment,
        )
    }
}

/// Writes `<output>/<name>.html` for every document
#[derive(Debug, Clone)]
pub struct HtmlPageAssembler {
    output_dir: PathBuf,
    shell: PageShell,
}

impl HtmlPageAssembler {
    pub fn new(output_dir: impl Into<PathBuf>, shell: PageShell) -> Self {
        Self {
            output_dir: output_dir.into(),
            shell,
        }
    }

    pub fn page_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.html", name))
    }
}

impl PageAssembler for HtmlPageAssembler {
    fn assemble(&mut self, name: &str, fragment: &str) -> Result<(), SiteError> {
        let path = self.page_path(name);
        info!(path = %path.display(), "writing page");
        fs::write(&path, self.shell.wrap(name, fragment)).map_err(|e| SiteError::io(path, e))
    }
}

/// Documents with the given extension in `dir`, sorted by name
pub fn collect_sources(dir: &Path, extension: &str) -> Result<Vec<SourceDocument>, SiteError> {
    let entries = fs::read_dir(dir).map_err(|e| SiteError::io(dir, e))?;

    let mut sources = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| SiteError::io(dir, e))?.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            warn!(path = %path.display(), "skipping file with a non UTF-8 name");
            continue;
        };
        let text = fs::read_to_string(&path).map_err(|e| SiteError::io(&path, e))?;
        sources.push(SourceDocument::new(name, text));
    }

    sources.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(sources)
}

/// A document that produced no page
#[derive(Debug)]
pub struct SkippedDocument {
    pub name: String,
    pub error: SiteError,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    /// Names of the documents handed to the assembler, in build order
    pub rendered: Vec<String>,
    pub skipped: Vec<SkippedDocument>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Render every document and hand it to `assembler`.
///
/// Failures are per document: they land in [BuildReport::skipped] and never stop the build.
pub fn build_site<A: PageAssembler>(sources: &[SourceDocument], assembler: &mut A) -> BuildReport {
    let renderer = HtmlRenderer::default();
    let mut report = BuildReport::default();

    for source in sources {
        info!(document = %source.name, "parsing");
        let fragment = match parse_document(&source.text) {
            Ok(doc) => renderer.render_document(&doc),
            Err(parse_error) => {
                warn!(document = %source.name, error = %parse_error, "skipping document");
                report.skipped.push(SkippedDocument {
                    name: source.name.clone(),
                    error: SiteError::Parse {
                        name: source.name.clone(),
                        source: parse_error,
                    },
                });
                continue;
            }
        };

        match assembler.assemble(&source.name, &fragment) {
            Ok(()) => report.rendered.push(source.name.clone()),
            Err(site_error) => {
                error!(document = %source.name, error = %site_error, "failed to assemble page");
                report.skipped.push(SkippedDocument {
                    name: source.name.clone(),
                    error: site_error,
                });
            }
        }
    }

    info!(
        rendered = report.rendered.len(),
        skipped = report.skipped.len(),
        "site built"
    );
    report
}

/// Build the site a configuration describes: collect, render and write every page
pub fn build_from_config(site: &SiteConfig) -> Result<BuildReport, SiteError> {
    let sources = collect_sources(&site.source_dir, &site.extension)?;
    fs::create_dir_all(&site.output_dir).map_err(|e| SiteError::io(&site.output_dir, e))?;

    let mut assembler =
        HtmlPageAssembler::new(&site.output_dir, PageShell::new(site.stylesheet.clone()));
    Ok(build_site(&sources, &mut assembler))
}
