use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MODULE_IML: &str = indoc! {r#"
    <module type="JAVA_MODULE" version="4">
      <component name="NewModuleRootManager">
        <content url="file://$MODULE_DIR$">
          <sourceFolder url="file://$MODULE_DIR$/src" />
        </content>
      </component>
    </module>
"#};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
}

fn fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "util/module.iml", MODULE_IML);
    write(
        tmp.path(),
        "util/src/com/foo/Bar.java",
        "package com.foo;\npublic class Bar {}\n",
    );
    tmp
}

fn pkgmap() -> Command {
    Command::cargo_bin("pkgmap").unwrap()
}

#[test]
fn scan_writes_tsv_rows_by_default() {
    let tmp = fixture();
    let assert = pkgmap().arg("scan").arg(tmp.path()).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let row = stdout.lines().next().expect("one package row");
    assert!(row.starts_with("1\t1\t0\t"), "unexpected row: {row}");
    assert!(row.contains("com/foo"));
}

#[test]
fn scan_renders_markdown_tables() {
    let tmp = fixture();
    let assert = pkgmap()
        .arg("scan")
        .arg(tmp.path())
        .args(["--format", "markdown"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.starts_with("files | .java | .kt | module | package\n"));
    // Package links point at the repository browser, not the local path.
    assert!(stdout.contains("[com.foo](https://"));
}

#[test]
fn scan_renders_spreadsheet_hyperlinks_with_repo_url() {
    let tmp = fixture();
    let assert = pkgmap()
        .arg("scan")
        .arg(tmp.path())
        .args(["--format", "spreadsheet"])
        .args(["--repo-url", "https://example.com/files/"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains(r#"=HYPERLINK("https://example.com/files/"#));
}

#[test]
fn modules_lists_descriptors_with_resolved_roots() {
    let tmp = fixture();
    let assert = pkgmap().arg("modules").arg(tmp.path()).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("module.iml"));
    assert!(stdout.contains("source dirs:1"));
}

#[test]
fn missing_root_exits_with_error() {
    pkgmap()
        .arg("scan")
        .arg("/no/such/pkgmap/root")
        .assert()
        .failure();
}

#[test]
fn scan_writes_report_to_output_file() {
    let tmp = fixture();
    let out = tmp.path().join("report.tsv");
    pkgmap()
        .arg("scan")
        .arg(tmp.path())
        .args(["--output", out.to_str().unwrap()])
        .assert()
        .success();
    let report = fs::read_to_string(out).unwrap();
    assert!(report.contains("com/foo"));
}
