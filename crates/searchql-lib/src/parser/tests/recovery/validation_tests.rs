use crate::Query;

#[test]
fn underscore_in_term() {
    let res = Query::expect_invalid("foo_bar");

    insta::assert_snapshot!(res, @"error at 0..7: `foo_bar` contains `_` (hint: `_` is only allowed in field names)");
}

#[test]
fn underscore_in_phrase_term() {
    let res = Query::expect_invalid(r#""snake_case name""#);

    insta::assert_snapshot!(res, @"error at 1..11: `snake_case` contains `_` (hint: `_` is only allowed in field names)");
}

#[test]
fn invalid_field_name() {
    let res = Query::expect_invalid("e-mail:jacob");

    insta::assert_snapshot!(res, @"error at 0..6: `e-mail` is not a valid field name (hint: field names use letters, digits and `_`)");
}

#[test]
fn uppercase_operators_warn() {
    let query = Query::expect_valid("video OR pictures AND sports NOT news");

    insta::assert_snapshot!(query.dump_diagnostics(), @r"
    warning at 6..8: `OR` is searched as a plain term (fix: use the lowercase `or` keyword)
    warning at 18..21: `AND` is searched as a plain term (fix: clauses are joined by AND already; remove it)
    warning at 29..32: `NOT` is searched as a plain term (fix: negate with `-`)
    ");
}

#[test]
fn mixed_case_operator_is_silent() {
    let query = Query::expect_valid("Or And Not");

    assert!(query.diagnostics().is_empty());
}
