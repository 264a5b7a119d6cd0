//! Integration tests for the jcompiler frontend

use std::fs;
use std::path::{Path, PathBuf};

use jcompiler::run_source;

/// Helper to run the full pipeline on a source file
fn check_file(path: &Path) -> Result<(), Vec<String>> {
    let source = fs::read_to_string(path).map_err(|e| vec![e.to_string()])?;
    let report = run_source(&source);
    if report.had_error() {
        Err(report.report_lines().collect())
    } else {
        Ok(())
    }
}

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut paths: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "java"))
        .collect();
    paths.sort();
    paths
}

/// Test that all valid fixtures parse without diagnostics
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("valid");
    assert!(!paths.is_empty());
    for path in paths {
        let result = check_file(&path);
        assert!(
            result.is_ok(),
            "Expected {} to parse cleanly, got errors: {:?}",
            path.display(),
            result.unwrap_err()
        );
    }
}

/// Test that invalid fixtures produce diagnostics
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("invalid");
    assert!(!paths.is_empty());
    for path in paths {
        assert!(check_file(&path).is_err(), "Expected {} to produce diagnostics", path.display());
    }
}

/// Snapshot the exact diagnostic lines for the invalid fixtures
#[test]
fn test_invalid_fixture_reports() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/invalid");

    let lines = check_file(&dir.join("missing_semicolons.java")).unwrap_err();
    insta::assert_snapshot!(lines.join("\n"), @r"
    [line 3] Error at 'void': Expect ';' after field declaration.
    [line 5] Error at 'z': Expect ';' after expression.
    ");

    let lines = check_file(&dir.join("unterminated.java")).unwrap_err();
    insta::assert_snapshot!(lines.join("\n"), @r"
    [line 3] Error : Unterminated string.
    [line 4] Error : Unexpected character '#'.
    [line 7] Error : Unterminated block comment.
    [line 4] Error at '2': Expect ';' after expression.
    ");

    let lines = check_file(&dir.join("no_class.java")).unwrap_err();
    insta::assert_snapshot!(lines.join("\n"), @"[line 3] Error at end: Expect class declaration.");
}

/// Test specific parser behavior through the public pipeline
mod parser_tests {
    use jcompiler::ast::*;
    use jcompiler::run_source;

    fn parse_clean(source: &str) -> Program {
        let report = run_source(source);
        assert!(!report.had_error(), "unexpected diagnostics: {:?}", report.report_lines().collect::<Vec<_>>());
        report.program
    }

    #[test]
    fn test_empty_class() {
        let program = parse_clean("class A {}");
        let class = program.class_decl.unwrap().node;
        assert_eq!(class.name, "A");
        assert!(class.members.is_empty());
    }

    #[test]
    fn test_single_field() {
        let program = parse_clean("class A { int x; }");
        let class = program.class_decl.unwrap().node;
        let fields: Vec<_> = class.fields().collect();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "x");
        assert_eq!(fields[0].ty, PrimitiveType::Int);
    }

    #[test]
    fn test_dangling_else_binds_inner_if() {
        let program = parse_clean("class A{ void m(){ if(a) if(b) s1(); else s2(); } }");
        let class = program.class_decl.unwrap().node;
        let method = class.methods().next().unwrap();
        let Statement::If(outer) = &method.body.statements[0].node else {
            panic!("expected if statement");
        };
        assert!(outer.else_branch.is_none());
        let Statement::If(inner) = &outer.then_branch.node else {
            panic!("expected nested if statement");
        };
        assert!(inner.else_branch.is_some());
    }

    #[test]
    fn test_missing_semicolon_and_brace_terminates() {
        let report = run_source("class A { int x");
        assert!(report.had_error());
        assert!(report.report_lines().any(|line| line.starts_with("[line 1] Error at end:")));
    }

    #[test]
    fn test_report_format_for_lexical_error() {
        let report = run_source("class A {\n int s = \"open\n}");
        let lines: Vec<_> = report.report_lines().collect();
        assert_eq!(lines[0], "[line 2] Error : Unterminated string.");
    }

    #[test]
    fn test_missing_class_declaration() {
        let report = run_source("package a.b;");
        let lines: Vec<_> = report.report_lines().collect();
        assert_eq!(lines, vec!["[line 1] Error at end: Expect class declaration.".to_string()]);
    }
}

/// CLI behavior through the library entry point
mod cli_tests {
    use std::fs;
    use std::path::PathBuf;

    use jcompiler::cli::{Cli, ExitCode, execute};

    /// Write `source` to a fresh file under the system temp dir.
    fn temp_source(name: &str, source: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("jcompiler-cli-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, source).unwrap();
        path
    }

    fn cli_for(paths: Vec<PathBuf>) -> Cli {
        Cli {
            paths,
            ..Cli::default()
        }
    }

    #[test]
    fn test_clean_file_exits_zero() {
        let path = temp_source("Clean.java", "class Clean { int x; }");
        assert_eq!(execute(&cli_for(vec![path])).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_file_with_diagnostics_exits_65() {
        let path = temp_source("Dirty.java", "class Dirty { int x }");
        assert_eq!(execute(&cli_for(vec![path])).unwrap(), ExitCode(65));
    }

    #[test]
    fn test_two_paths_exit_64() {
        let a = temp_source("A.java", "class A {}");
        let b = temp_source("B.java", "class B {}");
        let err = execute(&cli_for(vec![a, b])).unwrap_err();
        assert_eq!(err.exit_code, ExitCode(64));
    }

    #[test]
    fn test_missing_file_exits_66() {
        let err = execute(&cli_for(vec![PathBuf::from("no/such/File.java")])).unwrap_err();
        assert_eq!(err.exit_code, ExitCode(66));
    }
}
