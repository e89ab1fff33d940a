use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_scan_two_files() -> Result<()> {
    let test = CliTest::with_file(
        "src/address.ts",
        "export interface Address { city: string }",
    )?;
    test.write_file(
        "src/person.ts",
        "export interface Person { name: string; home: Address }",
    )?;

    let (stdout, _, code) = run(&mut test.scan_command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Address (1 field)"));
    assert!(stdout.contains("Person (2 fields)"));
    assert!(stdout.contains("contains: Address"));
    assert!(stdout.contains("Extracted 2 types from 2 source files"));
    Ok(())
}

#[test]
fn test_scan_embedded_base() -> Result<()> {
    let test = CliTest::with_file(
        "models.ts",
        "export interface Base { id: number }
         export interface Derived extends Base { extra: string }",
    )?;

    let (stdout, _, code) = run(&mut test.scan_command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("contains: Base"));
    Ok(())
}

#[test]
fn test_scan_json_output() -> Result<()> {
    let test = CliTest::with_file(
        "models.ts",
        "export interface Address { city: string }
         export interface Person { home: Address }",
    )?;

    let (stdout, _, code) = run(test.scan_command().arg("--json"))?;

    assert_eq!(code, Some(0));
    let value: Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["Person"]["fields"]["home"], "Address");
    assert_eq!(value["Person"]["contains"][0], "Address");
    assert_eq!(value["Address"]["contains"], Value::Array(vec![]));
    Ok(())
}

#[test]
fn test_scan_skips_test_files() -> Result<()> {
    let test = CliTest::with_file("models.ts", "export interface Person { name: string }")?;
    test.write_file(
        "models.test.ts",
        "export interface Fixture { name: string }",
    )?;

    let (stdout, _, code) = run(&mut test.scan_command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Person"));
    assert!(!stdout.contains("Fixture"));
    Ok(())
}

#[test]
fn test_scan_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tymaprc.json", r#"{ "ignores": ["**/generated/**"] }"#)?;
    test.write_file("models.ts", "export interface Person { name: string }")?;
    test.write_file(
        "generated/schema.ts",
        "export interface Generated { id: string }",
    )?;

    let (stdout, _, code) = run(&mut test.scan_command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Person"));
    assert!(!stdout.contains("Generated"));
    Ok(())
}

#[test]
fn test_scan_parse_error_is_fatal() -> Result<()> {
    let test = CliTest::with_file("good.ts", "export interface Person { name: string }")?;
    test.write_file("broken.ts", "interface { nope")?;

    let (stdout, stderr, code) = run(&mut test.scan_command())?;

    assert_eq!(code, Some(2));
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("broken.ts"));
    // No partial registry output
    assert!(!stdout.contains("Person"));
    Ok(())
}

#[test]
fn test_scan_missing_directory() -> Result<()> {
    let test = CliTest::new()?;

    let (_, stderr, code) = run(test.command().arg("scan").arg("nope"))?;

    assert_eq!(code, Some(2));
    assert!(stderr.contains("Project directory not found"));
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let (stdout, _, code) = run(&mut test.command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("scan"));
    assert!(stdout.contains("ast"));
    assert!(stdout.contains("init"));
    Ok(())
}
