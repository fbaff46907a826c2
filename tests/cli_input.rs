//! Integration tests for the command line front end.

use std::{fs, io, path::Path};

use clap::Parser;
use tempfile::tempdir;
use testresult::TestResult;

use saga_pricing::cli::{Cli, CliError};

fn run(args: &[&str], stdin: &str) -> Result<String, CliError> {
    let cli = Cli::parse_from(std::iter::once("saga-pricing").chain(args.iter().copied()));
    let mut out = Vec::new();

    cli.run(stdin.as_bytes(), &mut out, io::sink())?;

    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap_or_default()
}

#[test]
fn reads_basket_from_file() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("basket.txt");

    fs::write(
        &path,
        "Back to the Future 1\nBack to the Future 2\nBack to the Future 3\nLa chèvre\n",
    )?;

    let output = run(&["-f", "plain", "--input", path_arg(&path)], "")?;

    assert_eq!(output, "56\n");

    Ok(())
}

#[test]
fn file_input_ignores_stdin() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("basket.txt");

    fs::write(&path, "Back to the Future 1\n")?;

    let output = run(
        &["-f", "plain", "-i", path_arg(&path)],
        "La chèvre\nLa chèvre\n",
    )?;

    assert_eq!(output, "15\n");

    Ok(())
}

#[test]
fn empty_file_prints_zero() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("empty.txt");

    fs::write(&path, "\n\n")?;

    let output = run(&["-f", "receipt", "-i", path_arg(&path)], "")?;

    assert_eq!(output, "0\n");

    Ok(())
}

#[test]
fn missing_file_reports_path() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("missing.txt");

    let result = run(&["-i", path_arg(&path)], "");

    assert!(matches!(result, Err(CliError::ReadInput { .. })));
    assert!(result.is_err_and(|err| err.to_string().contains("missing.txt")));

    Ok(())
}

#[test]
fn yaml_output_from_stdin() -> TestResult {
    let output = run(
        &["--format", "yaml"],
        "Back to the Future 1\nBack to the Future 2\nBack to the Future 3\nBack to the Future 2\n",
    )?;

    assert!(output.contains("saga_units: 4"));
    assert!(output.contains("saga_distinct: 3"));
    assert!(output.contains("total: 48"));

    Ok(())
}
