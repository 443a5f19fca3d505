// tests/format_override.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, docpage_cmd};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_unregistered_extension_treated_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "pipeline.slp", r#"{"pipeline": "test"}"#)?;

    docpage_cmd()
        .args(["pipeline.slp", "--format", "json", "--no-line-numbers"])
        .current_dir(temp.path())
        .assert()
        .success();

    let page = fs::read_to_string(temp.path().join("pipeline.slp.md"))?;
    assert!(page.starts_with("---\ntitle: Pipeline (JSON (.slp))\n"));
    assert!(page.contains("```json\n{\n  \"pipeline\": \"test\"\n}\n```"));
    assert!(page.contains("- **Type**: object\n"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_override_with_leading_dot() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "layout.view", "<view><item/></view>")?;

    docpage_cmd()
        .args(["layout.view", "--format", ".xml"])
        .current_dir(temp.path())
        .assert()
        .success();

    let page = fs::read_to_string(temp.path().join("layout.view.md"))?;
    assert!(page.contains("- **Root tag**: view\n"));
    assert!(page.contains("<view>\n  <item />\n</view>"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_unknown_extension_is_plain_code() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "notes.zzz", "# just text\n")?;

    docpage_cmd()
        .arg("notes.zzz")
        .current_dir(temp.path())
        .assert()
        .success();

    let page = fs::read_to_string(temp.path().join("notes.zzz.md"))?;
    assert!(page.contains("```text linenums=\"1\"\n# just text\n```"));

    temp.close()?;
    Ok(())
}
