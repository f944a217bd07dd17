use clap::{CommandFactory, Parser};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn args() {
    Args::command().debug_assert();

    let args = Args::try_parse_from(["vbscan", "--path", "Module1.bas", "-l"]).unwrap();
    assert_eq!(args.path, PathBuf::from("Module1.bas"));
    assert!(args.logical);
    assert!(!args.quiet);

    assert!(Args::try_parse_from(["vbscan", "--quiet"]).is_err());
}

#[test]
fn locations() {
    let source = "a = _\n  b\r\nc\rd _";
    assert_eq!(location(source, 0), (1, 1));
    assert_eq!(location(source, 4), (1, 5));
    assert_eq!(location(source, 8), (2, 3));
    assert_eq!(location(source, 11), (3, 1));
    assert_eq!(location(source, 13), (4, 1));
    assert_eq!(location(source, 15), (4, 3));
}

#[test]
fn character_columns() {
    // `é` is two bytes but one column.
    assert_eq!(location("café _", 6), (1, 6));
}

fn output(source: &str, logical: bool, quiet: bool) -> String {
    let args = Args {
        path: PathBuf::from("Module1.bas"),
        logical,
        quiet,
    };
    let mut out = vec![];
    run(&args, "Module1.bas", source.into(), &mut out).unwrap();

    String::from_utf8(out).unwrap()
}

#[test]
fn lists_continuations() {
    assert_eq!(
        output("a = 1 + _\n    2\nCall f(x, _\n  y)", false, false),
        "1:9 line continuation\n3:11 line continuation\n"
    );
    assert_eq!(output("a = 1\nb = 2", false, false), "");
}

#[test]
fn quiet_hides_continuations() {
    assert_eq!(output("a = 1 + _\n    2\nb", false, true), "");
}

#[test]
fn prints_logical_lines() {
    assert_eq!(
        output("a = 1 + _\n    2\nb", true, false),
        "1:9 line continuation\n   1 | a = 1 +     2\n   3 | b\n"
    );
    assert_eq!(
        output("a = 1 + _\n    2\nb", true, true),
        "   1 | a = 1 +     2\n   3 | b\n"
    );
}

#[test]
fn reports_diagnostics() {
    let output = output("x =\n  _\n  1", false, false);
    assert!(output.starts_with("2:3 line continuation\n"));
    assert!(output.contains("Detached line continuation!"));
}
