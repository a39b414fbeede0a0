use super::{edit, parse_select, Args};
use crate::{
    commands::{initialize, ExtensionContext, TOGGLE_CASE},
    cursor::CursorPosition,
    error::ShiftError,
    workspace::Document,
};
use clap::Parser;

fn context() -> ExtensionContext {
    let mut context = ExtensionContext::default();
    let _handle = initialize(&mut context).unwrap();
    context
}

#[test]
fn select_parsing() {
    assert_eq!(parse_select("3:5").unwrap(), CursorPosition::new(2, 4).caret());
    assert_eq!(parse_select("1:1-2:4").unwrap(), (CursorPosition::new(0, 0), CursorPosition::new(1, 3)));
    assert_eq!(parse_select(" 2:4 - 1:1 ").unwrap(), (CursorPosition::new(0, 0), CursorPosition::new(1, 3)));
    assert!(matches!(parse_select("0:1"), Err(ShiftError::InvalidSelect(..))));
    assert!(matches!(parse_select("1:0"), Err(ShiftError::InvalidSelect(..))));
    assert!(matches!(parse_select("a:b"), Err(ShiftError::InvalidSelect(..))));
    assert!(matches!(parse_select("12"), Err(ShiftError::InvalidSelect(..))));
    assert!(matches!(parse_select("1:1-"), Err(ShiftError::InvalidSelect(..))));
}

#[test]
fn args() {
    let args = Args::try_parse_from(["shift-case", "notes.txt", "-s", "1:1-1:4", "--select", "2:1-2:3", "-i"]).unwrap();
    assert_eq!(args.selects.len(), 2);
    assert_eq!(args.command, TOGGLE_CASE);
    assert!(args.in_place);
    assert!(!args.verbose);
    assert!(Args::try_parse_from(["shift-case", "-s", "zero"]).is_err());
}

#[test]
fn edit_whole_document() {
    let ctx = context();
    let out = edit(&ctx, Document::new("test", "café résumé\n"), vec![], TOGGLE_CASE).unwrap();
    assert_eq!(out, "CAFÉ RÉSUMÉ\n");
    let out = edit(&ctx, Document::new("test", &out), vec![], TOGGLE_CASE).unwrap();
    assert_eq!(out, "café résumé\n");
}

#[test]
fn edit_selected() {
    let ctx = context();
    let selects = vec![parse_select("1:1-1:6").unwrap(), parse_select("2:9-2:12").unwrap()];
    let out = edit(&ctx, Document::new("test", "hello world\nKEEP IT sit"), selects, TOGGLE_CASE).unwrap();
    assert_eq!(out, "HELLO world\nKEEP IT SIT");
}

#[test]
fn edit_errors() {
    let ctx = context();
    let out_of_bounds = vec![parse_select("3:1").unwrap()];
    assert!(matches!(
        edit(&ctx, Document::new("test", "short"), out_of_bounds, TOGGLE_CASE),
        Err(ShiftError::OutOfBounds(..))
    ));
    assert!(matches!(
        edit(&ctx, Document::new("test", "text"), vec![], "shift-case.rotate"),
        Err(ShiftError::UnknownCommand(..))
    ));
}

#[test]
fn in_place_needs_path() {
    let args = Args::try_parse_from(["shift-case", "-i"]).unwrap();
    assert!(matches!(args.run(), Err(ShiftError::GeneralError(..))));
}
