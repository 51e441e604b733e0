use fold_core::{
    CommandExecutor, EditSession, EditorConfig, FoldOutcome, ModeSpec, Position, Range, Sender,
};
use fold_core_highlight_simple::{default_registry, registry_from_config};
use pretty_assertions::assert_eq;

const SOURCE: &str = "\
function setup() {
    // Build the widget
    // and attach it.
    /* wide
       block */
    return build();
}";

fn js_session() -> EditSession {
    let modes = default_registry().unwrap();
    let mut session = EditSession::new("scratch", "", modes.get("text").unwrap());
    let mode = session.load_file("setup.js", SOURCE, &modes);
    assert_eq!(mode.name(), "javascript");
    session
}

#[test]
fn test_line_and_block_comments_fold_together() {
    let mut session = js_session();
    session.set_cursor(Position::new(2, 0));

    let outcome = CommandExecutor::default()
        .execute("fold", Sender::Editor, &mut session)
        .unwrap();

    let FoldOutcome::Created(fold) = outcome else {
        panic!("expected a fold, got {outcome:?}");
    };
    // Rows 1..=4 are comment rows; the block starts after `// ` on row 1.
    assert_eq!(
        fold.range,
        Range::from_coords(1, 6, 4, "       block */".len() - 1)
    );
    assert_eq!(fold.placeholder, "Bui...");
}

#[test]
fn test_code_row_between_does_not_fold() {
    let mut session = js_session();
    session.set_cursor(Position::new(5, 4));

    let outcome = CommandExecutor::default()
        .execute("fold", Sender::Editor, &mut session)
        .unwrap();

    assert!(!outcome.is_change());
}

#[test]
fn test_brace_fold_in_tokenized_session() {
    let mut session = js_session();
    session.set_cursor(Position::new(0, 18));

    let outcome = CommandExecutor::default()
        .execute("fold", Sender::Editor, &mut session)
        .unwrap();

    assert_eq!(
        outcome.fold().map(|f| f.range),
        Some(Range::from_coords(0, 18, 6, 0))
    );
}

#[test]
fn test_text_mode_never_folds_comments() {
    let modes = default_registry().unwrap();
    let mut session = EditSession::new("notes", "// a\n// b\n// c", modes.get("text").unwrap());
    session.set_cursor(Position::new(1, 0));

    assert!(!session.resolve_fold(false).is_change());
}

#[test]
fn test_registry_from_custom_config() {
    let config = EditorConfig {
        modes: vec![
            ModeSpec::new("python", "Python", &["py", "pyw"]),
            ModeSpec::new("text", "Text", &["txt"]),
        ],
        ..EditorConfig::default()
    };
    let modes = registry_from_config(&config).unwrap();
    assert_eq!(modes.names().collect::<Vec<_>>(), vec!["python", "text"]);

    let mut session = EditSession::new("script", "", modes.get("text").unwrap());
    session.load_file("tool.pyw", "# usage:\n#   tool run\nmain()", &modes);
    session.set_cursor(Position::new(0, 0));

    let fold = session.resolve_fold(false).fold().cloned().unwrap();
    assert_eq!(fold.range, Range::from_coords(0, 2, 1, 11));
}
