use fold_core::{
    Document, DocumentModel, FoldOutcome, LineState, LineTokens, NoOpReason, Position,
    Range, Selection, Token, Tokenizer, resolve,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

/// `//` rows are comments (after optional indent), everything else is one code token.
struct SlashCommentTokenizer;

impl Tokenizer for SlashCommentTokenizer {
    fn tokenize_line(&self, line: &str, state: LineState) -> LineTokens {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];
        let mut tokens = Vec::new();
        if !indent.is_empty() {
            tokens.push(Token::text(indent));
        }
        if let Some(pos) = trimmed.find("//") {
            if pos > 0 {
                tokens.push(Token::new("identifier", &trimmed[..pos]));
            }
            tokens.push(Token::comment(&trimmed[pos..]));
        } else if !trimmed.is_empty() {
            tokens.push(Token::new("identifier", trimmed));
        }
        LineTokens {
            tokens,
            end_state: state,
        }
    }
}

fn doc(text: &str) -> Document {
    Document::new(text, Arc::new(SlashCommentTokenizer))
}

#[test]
fn test_comment_block_scenario() {
    let mut doc = doc("let a = 1;\nlet b = 2;\n// a\n// b\n// c\nlet c = 3;");
    let mut selection = Selection::cursor(Position::new(3, 0));

    let outcome = resolve(&mut selection, &mut doc, false);

    let FoldOutcome::Created(fold) = outcome else {
        panic!("expected a fold, got {outcome:?}");
    };
    assert_eq!(fold.range, Range::from_coords(2, 2, 4, "// c".len() - 1));
    assert_eq!(doc.folds().folds(), &[fold]);
}

#[test]
fn test_selection_fold_scenario() {
    let mut doc = doc("const p = { x: 1 };");
    let mut selection = Selection::from_anchor_head(Position::new(0, 10), Position::new(0, 18));
    assert_eq!(doc.text_range(selection.range()), "{ x: 1 }");

    let outcome = resolve(&mut selection, &mut doc, false);

    let fold = outcome.fold().expect("fold created");
    assert_eq!(fold.range, Range::from_coords(0, 10, 0, 18));
    assert_eq!(fold.placeholder, "{x...");
}

#[test]
fn test_short_selection_is_noop() {
    let mut doc = doc("ab cd");
    let mut selection = Selection::from_anchor_head(Position::new(0, 0), Position::new(0, 2));

    let outcome = resolve(&mut selection, &mut doc, false);

    assert_eq!(outcome, FoldOutcome::NoOp(NoOpReason::TextTooShort));
    assert!(doc.folds().is_empty());
}

#[test]
fn test_whitespace_padded_selection_is_noop() {
    let mut doc = doc("   ab   ");
    let mut selection = Selection::from_anchor_head(Position::new(0, 0), Position::new(0, 8));

    assert!(!resolve(&mut selection, &mut doc, false).is_change());
    assert!(doc.folds().is_empty());
}

#[test]
fn test_code_row_is_noop() {
    let mut doc = doc("// header\nlet x = compute;\n// footer");
    let mut selection = Selection::cursor(Position::new(1, 4));

    let outcome = resolve(&mut selection, &mut doc, false);

    assert_eq!(outcome, FoldOutcome::NoOp(NoOpReason::NothingToFold));
    assert!(doc.folds().is_empty());
}

#[test]
fn test_code_before_comment_blocks_row() {
    let mut doc = doc("// a\nx = 1 // trailing\n// note");
    let mut selection = Selection::cursor(Position::new(1, 0));
    assert!(!resolve(&mut selection, &mut doc, false).is_change());

    // Row 1 also stops the upward scan from row 2.
    let mut selection = Selection::cursor(Position::new(2, 0));
    let fold = resolve(&mut selection, &mut doc, false)
        .fold()
        .cloned()
        .expect("fold created");
    assert_eq!(fold.range, Range::from_coords(2, 2, 2, 6));
}

#[test]
fn test_existing_fold_is_expanded_before_comment_block() {
    let mut doc = doc("// a\n// b\n// c");
    let first = resolve(&mut Selection::cursor(Position::new(1, 0)), &mut doc, false);
    let created = first.fold().cloned().expect("fold created");

    let mut selection = Selection::cursor(Position::new(1, 1));
    let outcome = resolve(&mut selection, &mut doc, false);

    assert_eq!(outcome, FoldOutcome::Expanded(created.clone()));
    assert_eq!(selection.range(), created.range);
    assert!(doc.folds().is_empty());
}

#[test]
fn test_existing_fold_is_expanded_before_bracket() {
    let mut doc = doc("f(alpha)");
    let mut selection = Selection::cursor(Position::new(0, 8));
    let created = resolve(&mut selection, &mut doc, false);
    assert!(matches!(created, FoldOutcome::Created(_)));

    // The caret still sits after `)`, but it is now inside the fold.
    let outcome = resolve(&mut selection, &mut doc, false);
    assert!(matches!(outcome, FoldOutcome::Expanded(_)));
    assert_eq!(selection.range(), Range::from_coords(0, 1, 0, 8));
    assert!(doc.folds().is_empty());
}

#[test]
fn test_bracket_fold_orders_range() {
    let mut doc = doc("run(function () { go(); })");

    // Caret after the closing brace: the fold starts at the matching opening brace.
    let mut selection = Selection::cursor(Position::new(0, 25));
    let fold = resolve(&mut selection, &mut doc, false)
        .fold()
        .cloned()
        .expect("fold created");
    assert_eq!(fold.range, Range::from_coords(0, 16, 0, 25));
    assert_eq!(fold.placeholder, "{g...");

    // Caret after an opening paren: the fold ends at the closing paren.
    doc.expand_all_folds();
    let mut selection = Selection::cursor(Position::new(0, 4));
    let fold = resolve(&mut selection, &mut doc, false)
        .fold()
        .cloned()
        .expect("fold created");
    assert_eq!(fold.range, Range::from_coords(0, 4, 0, 25));
}

#[test]
fn test_bracket_fold_across_rows() {
    let text = "fn main() {\n    work();\n}";
    let mut doc = doc(text);
    let mut selection = Selection::cursor(Position::new(0, 11));

    let fold = resolve(&mut selection, &mut doc, false)
        .fold()
        .cloned()
        .expect("fold created");

    assert_eq!(fold.range, Range::from_coords(0, 11, 2, 0));
    assert_eq!(fold.placeholder, "wor...");
    assert_eq!(fold.hidden_rows(), 2);
}

#[test]
fn test_comment_block_at_first_row() {
    let mut doc = doc("// one\n// two\ncode");
    let mut selection = Selection::cursor(Position::new(0, 3));

    let fold = resolve(&mut selection, &mut doc, false)
        .fold()
        .cloned()
        .expect("fold created");

    assert_eq!(fold.range, Range::from_coords(0, 2, 1, 5));
}

#[test]
fn test_indented_comment_block_uses_top_row_column() {
    let mut doc = doc("    // top\n// below\n  // last line");
    let mut selection = Selection::cursor(Position::new(2, 0));

    let fold = resolve(&mut selection, &mut doc, false)
        .fold()
        .cloned()
        .expect("fold created");

    assert_eq!(
        fold.range,
        Range::from_coords(0, 6, 2, "  // last line".len() - 1)
    );
}

#[test]
fn test_fold_and_unfold_commands_share_logic() {
    let text = "// a\n// b\nx";
    let mut fold_doc = doc(text);
    let mut unfold_doc = doc(text);

    let a = resolve(&mut Selection::cursor(Position::new(0, 0)), &mut fold_doc, false);
    let b = resolve(&mut Selection::cursor(Position::new(0, 0)), &mut unfold_doc, true);

    assert_eq!(a, b);
    assert_eq!(fold_doc.folds().folds(), unfold_doc.folds().folds());
}

#[test]
fn test_fold_over_existing_folds_nests_them() {
    let mut doc = doc("call(inner(alpha), rest)");
    let inner = resolve(&mut Selection::cursor(Position::new(0, 11)), &mut doc, false)
        .fold()
        .cloned()
        .expect("fold created");
    assert_eq!(inner.range, Range::from_coords(0, 11, 0, 16));

    let mut selection = Selection::from_anchor_head(Position::new(0, 0), Position::new(0, 24));
    let outer = resolve(&mut selection, &mut doc, false)
        .fold()
        .cloned()
        .expect("fold created");

    assert_eq!(doc.folds().len(), 1);
    assert_eq!(outer.sub_folds, vec![inner.clone()]);

    doc.expand_fold(&outer);
    assert_eq!(doc.folds().folds(), &[inner]);
}
