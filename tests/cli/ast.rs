use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_ast_dumps_module_structure() -> Result<()> {
    let test = CliTest::with_file("models.ts", "export interface Person { name: string }")?;

    let (stdout, _, code) = run(&mut test.ast_command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("models.ts"));
    assert!(stdout.contains("TsInterfaceDecl"));
    // Diagnostic mode never runs extraction
    assert!(!stdout.contains("Extracted"));
    Ok(())
}

#[test]
fn test_ast_parse_error_is_fatal() -> Result<()> {
    let test = CliTest::with_file("broken.ts", "interface { nope")?;

    let (_, stderr, code) = run(&mut test.ast_command())?;

    assert_eq!(code, Some(2));
    assert!(stderr.contains("Error:"));
    Ok(())
}

#[test]
fn test_ast_respects_file_filter() -> Result<()> {
    let test = CliTest::with_file("models.ts", "export interface Person { name: string }")?;
    test.write_file("notes.md", "# not source")?;
    test.write_file("models.test.ts", "export interface Fixture { id: string }")?;

    let (stdout, _, code) = run(&mut test.ast_command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("models.ts"));
    assert!(!stdout.contains("Fixture"));
    Ok(())
}
