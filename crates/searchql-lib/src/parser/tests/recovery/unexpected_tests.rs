use crate::Query;

#[test]
fn unmatched_paren() {
    let query = Query::expect(")");

    insta::assert_snapshot!(query.snapshot_cst(), @r#"
    Root
      Error
        ParenClose ")"
    ---
    error at 0..1: unmatched `)`
    "#);
}

#[test]
fn unmatched_paren_after_group() {
    let res = Query::expect_invalid("(a) b)");

    insta::assert_snapshot!(res, @"error at 5..6: unmatched `)`");
}

#[test]
fn dangling_or_at_start() {
    let res = Query::expect_invalid("or video");

    insta::assert_snapshot!(res, @"error at 0..2: `or` is missing an operand (hint: `or` joins two clauses: `video or pictures`)");
}

#[test]
fn dangling_or_at_end() {
    let query = Query::expect("video or");

    insta::assert_snapshot!(query.snapshot_cst(), @r#"
    Root
      Or
        Term
          Word "video"
        KwOr "or"
    ---
    error at 8..8: expected a search term: after `or`
    "#);
}

#[test]
fn or_before_closing_paren() {
    let res = Query::expect_invalid("(video or)");

    insta::assert_snapshot!(res, @"error at 9..10: expected a search term: after `or`");
}

#[test]
fn empty_group() {
    let res = Query::expect_invalid("()");

    insta::assert_snapshot!(res, @"error at 0..2: empty `()` is not allowed (hint: put search terms inside the parentheses)");
}

#[test]
fn empty_phrase() {
    let res = Query::expect_invalid(r#"a """#);

    insta::assert_snapshot!(res, @r#"error at 2..4: empty phrase is not allowed (hint: put search terms inside the quotes)"#);
}

#[test]
fn lone_minus() {
    let res = Query::expect_invalid("-");

    insta::assert_snapshot!(res, @"error at 1..1: expected a search term: after `-`");
}

#[test]
fn minus_before_closing_paren() {
    let res = Query::expect_invalid("(-)");

    insta::assert_snapshot!(res, @"error at 2..3: expected a search term: after `-`");
}

#[test]
fn double_negation() {
    let query = Query::expect("--x");

    insta::assert_snapshot!(query.snapshot_cst(), @r#"
    Root
      Not
        Minus "-"
        Error
          Minus "-"
        Term
          Word "x"
    ---
    error at 1..2: double negation is not allowed (hint: a clause can only be negated once)
    "#);
}

#[test]
fn missing_field_name() {
    let res = Query::expect_invalid(":foo");

    insta::assert_snapshot!(res, @"error at 0..1: expected a field name before `:` (hint: e.g., `author:jacob`)");
}

#[test]
fn negation_does_not_reach_field() {
    let res = Query::expect_invalid("-title:foo");

    insta::assert_snapshot!(res, @"error at 6..7: expected a field name before `:` (hint: e.g., `author:jacob`)");
}

#[test]
fn missing_field_value() {
    let res = Query::expect_invalid("title:");

    insta::assert_snapshot!(res, @"error at 6..6: expected a field value: after `title:` (hint: e.g., `title:django`)");
}

#[test]
fn garbage_between_terms() {
    let query = Query::expect("a @@ b");

    insta::assert_snapshot!(query.snapshot_cst(), @r#"
    Root
      Term
        Word "a"
      Error
        Garbage "@@"
      Term
        Word "b"
    ---
    error at 2..4: unexpected token: `@@`
    "#);
}

#[test]
fn invalid_phrase_content() {
    let res = Query::expect_invalid(r#""a (b""#);

    insta::assert_snapshot!(res, @"error at 3..4: `(` is not allowed inside a phrase");
}

#[test]
fn multiple_errors_are_reported() {
    let res = Query::expect_invalid("or a ) b");

    insta::assert_snapshot!(res, @r"
    error at 0..2: `or` is missing an operand (hint: `or` joins two clauses: `video or pictures`)
    error at 5..6: unmatched `)`
    ");
}

#[test]
fn empty_query() {
    let res = Query::expect_invalid("");

    insta::assert_snapshot!(res, @"error at 0..0: expected a search term");
}
