//! Report rendering for scan results.
//!
//! Three formats share one writer trait: tab-delimited rows (default), a
//! Markdown table whose package cells link into the repository browser, and
//! a spreadsheet table whose package and doc cells are wrapped in
//! `=HYPERLINK(...)` formulas pointing at the same browser.
//! Rows are sorted by package directory so output is stable even though the
//! underlying package map is not.

use crate::core::{Package, ScanResults};
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Tsv,
    Markdown,
    Spreadsheet,
}

pub trait PackageWriter {
    fn write_results(&mut self, results: &ScanResults) -> anyhow::Result<()>;
}

/// Documentation-presence marker, derived from the doc path's extension:
/// a package.html is a stub worth revisiting, a package-info.java counts
/// as real documentation.
pub fn doc_marker(package: &Package) -> &'static str {
    let doc = package.doc.to_string_lossy();
    if doc.ends_with(".html") {
        "🚧"
    } else if doc.ends_with(".java") {
        "✅"
    } else {
        ""
    }
}

fn sorted_packages(results: &ScanResults) -> Vec<&Package> {
    let mut packages: Vec<&Package> = results.packages.values().collect();
    packages.sort_by(|a, b| a.pkg_dir.cmp(&b.pkg_dir));
    packages
}

pub struct TsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> PackageWriter for TsvWriter<W> {
    fn write_results(&mut self, results: &ScanResults) -> anyhow::Result<()> {
        for package in sorted_packages(results) {
            writeln!(
                self.writer,
                "{}\t{}\t{}\t{}\t{} {}",
                package.files.len(),
                package.count("java"),
                package.count("kt"),
                package.pkg_dir.display(),
                doc_marker(package),
                package.doc.display(),
            )?;
        }
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    repo_url: String,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, repo_url: String) -> Self {
        Self { writer, repo_url }
    }
}

impl<W: Write> PackageWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &ScanResults) -> anyhow::Result<()> {
        writeln!(self.writer, "files | .java | .kt | module | package")?;
        writeln!(self.writer, "--|--|--|--|--")?;
        for package in sorted_packages(results) {
            // Path's Display ignores width flags, so pad a materialized string.
            let module = package.module.display().to_string();
            writeln!(
                self.writer,
                "{:<3} | {:<3} | {:<3} | {:<50} | [{}]({}{})",
                package.files.len(),
                package.count("java"),
                package.count("kt"),
                module,
                package.name,
                self.repo_url,
                package.pkg_dir.display(),
            )?;
        }
        Ok(())
    }
}

pub struct SpreadsheetWriter<W: Write> {
    writer: W,
    repo_url: String,
}

impl<W: Write> SpreadsheetWriter<W> {
    pub fn new(writer: W, repo_url: String) -> Self {
        Self { writer, repo_url }
    }

    fn hyperlink(&self, relative: &str, label: &str) -> String {
        format!(r#"=HYPERLINK("{}{}","{}")"#, self.repo_url, relative, label)
    }
}

impl<W: Write> PackageWriter for SpreadsheetWriter<W> {
    fn write_results(&mut self, results: &ScanResults) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "files\t.java\t.kt\tmodule\tpackage\tdocumentation"
        )?;
        for package in sorted_packages(results) {
            let pkg_cell = self.hyperlink(&package.pkg_dir.to_string_lossy(), &package.name);
            let marker = doc_marker(package);
            let doc_cell = if marker.is_empty() {
                String::new()
            } else {
                self.hyperlink(&package.doc.to_string_lossy(), marker)
            };
            writeln!(
                self.writer,
                "{}\t{}\t{}\t{}\t{}\t{}",
                package.files.len(),
                package.count("java"),
                package.count("kt"),
                package.module.display(),
                pkg_cell,
                doc_cell,
            )?;
        }
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    out: Box<dyn Write>,
    repo_url: &str,
) -> Box<dyn PackageWriter> {
    match format {
        OutputFormat::Tsv => Box::new(TsvWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out, repo_url.to_string())),
        OutputFormat::Spreadsheet => Box::new(SpreadsheetWriter::new(out, repo_url.to_string())),
    }
}
