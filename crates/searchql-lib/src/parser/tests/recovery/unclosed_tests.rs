use crate::Query;

#[test]
fn missing_paren() {
    let res = Query::expect_invalid("(video pictures");

    insta::assert_snapshot!(res, @"error at 0..15: missing closing `)` (related: group opened here at 0..1) (hint: add a closing `)`)");
}

#[test]
fn missing_double_quote() {
    let res = Query::expect_invalid(r#""train times"#);

    insta::assert_snapshot!(res, @r#"error at 0..12: missing closing quote (related: phrase opened here at 0..1) (hint: add a closing `"`)"#);
}

#[test]
fn missing_single_quote() {
    let res = Query::expect_invalid("don't stop");

    insta::assert_snapshot!(res, @"error at 3..10: missing closing quote (related: phrase opened here at 3..4) (hint: add a closing `'`)");
}

#[test]
fn nested_unclosed() {
    let res = Query::expect_invalid("(a (b");

    insta::assert_snapshot!(res, @"error at 3..5: missing closing `)` (related: group opened here at 3..4) (hint: add a closing `)`)");
}

#[test]
fn unclosed_group_hides_errors_inside() {
    let res = Query::expect_invalid("(a @@");

    insta::assert_snapshot!(res, @"error at 0..5: missing closing `)` (related: group opened here at 0..1) (hint: add a closing `)`)");
}

#[test]
fn unclosed_group_keeps_partial_tree() {
    let query = Query::expect("(video pictures");

    insta::assert_snapshot!(query.dump_cst(), @r#"
    Root
      Group
        ParenOpen "("
        Term
          Word "video"
        Term
          Word "pictures"
    "#);
}
