use crate::parser::lexer::{lex, token_text};

/// Format tokens without trivia (default for most tests)
fn snapshot(input: &str) -> String {
    format_tokens(input, false)
}

/// Format tokens with trivia included
fn snapshot_raw(input: &str) -> String {
    format_tokens(input, true)
}

fn format_tokens(input: &str, include_trivia: bool) -> String {
    let tokens = lex(input);
    let mut out = String::new();
    for token in tokens {
        if include_trivia || !token.kind.is_trivia() {
            out.push_str(&format!(
                "{:?} {:?}\n",
                token.kind,
                token_text(input, &token)
            ));
        }
    }
    out
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(snapshot(r#"( ) " ' : -"#), @r#"
    ParenOpen "("
    ParenClose ")"
    DoubleQuote "\""
    SingleQuote "'"
    Colon ":"
    Minus "-"
    "#);
}

#[test]
fn words_and_keyword() {
    insta::assert_snapshot!(snapshot("video or pictures"), @r#"
    Word "video"
    KwOr "or"
    Word "pictures"
    "#);
}

#[test]
fn keyword_prefix_is_a_word() {
    insta::assert_snapshot!(snapshot("order ore OR"), @r#"
    Word "order"
    Word "ore"
    Word "OR"
    "#);
}

#[test]
fn punctuation_inside_words() {
    insta::assert_snapshot!(snapshot("e-mail c.d. what?! 50% a/b"), @r#"
    Word "e-mail"
    Word "c.d."
    Word "what?!"
    Word "50%"
    Word "a/b"
    "#);
}

#[test]
fn leading_minus_splits_off() {
    insta::assert_snapshot!(snapshot("-boring -(x)"), @r#"
    Minus "-"
    Word "boring"
    Minus "-"
    ParenOpen "("
    Word "x"
    ParenClose ")"
    "#);
}

#[test]
fn field_clause() {
    insta::assert_snapshot!(snapshot("author_name:John"), @r#"
    Word "author_name"
    Colon ":"
    Word "John"
    "#);
}

#[test]
fn unicode_words() {
    insta::assert_snapshot!(snapshot("café Zürich 東京"), @r#"
    Word "café"
    Word "Zürich"
    Word "東京"
    "#);
}

#[test]
fn whitespace_is_trivia() {
    insta::assert_snapshot!(snapshot_raw("a \t\nb"), @r#"
    Word "a"
    Whitespace " \t\n"
    Word "b"
    "#);
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(snapshot("c++ a @@ b"), @r#"
    Word "c"
    Garbage "++"
    Word "a"
    Garbage "@@"
    Word "b"
    "#);
}

#[test]
fn trailing_garbage() {
    insta::assert_snapshot!(snapshot("term #"), @r##"
    Word "term"
    Garbage "#"
    "##);
}

#[test]
fn empty_input() {
    assert!(lex("").is_empty());
}
