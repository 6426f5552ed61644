use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn command_taxa_complex() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("cplx")?;
    let output = cmd
        .arg("taxa")
        .arg("tests/cplx/exp.tsv")
        .arg("--name")
        .arg("hu")
        .arg("--og")
        .arg("tests/cplx/og.tsv")
        .arg("--og-taxa")
        .arg("tests/cplx/og_taxa.tsv")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(
        stdout,
        "hu_Complex\t4932\t562\t9606\nhu_A\t0\t1\t1\nhu_B\t1\t1\t0\n"
    );

    Ok(())
}

#[test]
fn command_taxa_component() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let unmapped = temp.path().join("unmapped.txt");

    let mut cmd = Command::cargo_bin("cplx")?;
    let output = cmd
        .arg("taxa")
        .arg("tests/cplx/exp.tsv")
        .arg("--og")
        .arg("tests/cplx/og.tsv")
        .arg("--og-taxa")
        .arg("tests/cplx/og_taxa.tsv")
        .arg("--level")
        .arg("component")
        .arg("--unmapped")
        .arg(&unmapped)
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.starts_with("OG\t4932\t562\t9606\n"));
    assert!(stdout.contains("OG2\t1\t0\t0\n"));
    // members without a group keep a row of their own
    assert!(stdout.contains("P8\t0\t0\t0\n"));
    assert!(stdout.contains("P9\t0\t0\t0\n"));

    assert_eq!(fs::read_to_string(&unmapped)?, "P8\nP9\n");

    Ok(())
}

#[test]
fn command_taxa_columns() -> anyhow::Result<()> {
    // protein lists instead of species lists
    let mut cmd = Command::cargo_bin("cplx")?;
    let output = cmd
        .arg("taxa")
        .arg("tests/cplx/exp.tsv")
        .arg("--og")
        .arg("tests/cplx/og.tsv")
        .arg("--og-taxa")
        .arg("tests/cplx/og_taxa.tsv")
        .arg("--taxa-value")
        .arg("4")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.starts_with("exp_Complex\t4932.Y1\t562.P1\t562.P2\t562.P3\t9606.Q1\n"));

    Ok(())
}
