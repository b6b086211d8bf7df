use crate::Query;

#[test]
fn field_expression() {
    let res = Query::expect_valid_cst("title:foo");

    insta::assert_snapshot!(res, @r#"
    Root
      Field
        FieldName
          Word "title"
        Colon ":"
        Term
          Word "foo"
    "#);
}

#[test]
fn field_name_with_underscore() {
    let res = Query::expect_valid_ast("pub_date:2008");

    insta::assert_snapshot!(res, @r"
    Root
      Field pub_date:
        Term 2008
    ");
}

#[test]
fn field_with_phrase_value() {
    let res = Query::expect_valid_ast(r#"title:"train times""#);

    insta::assert_snapshot!(res, @r"
    Root
      Field title:
        Phrase
          Term train
          Term times
    ");
}

#[test]
fn field_with_group_value() {
    let res = Query::expect_valid_ast("title:(foo bar)");

    insta::assert_snapshot!(res, @r"
    Root
      Field title:
        Group
          Term foo
          Term bar
    ");
}

#[test]
fn field_with_negated_value() {
    let res = Query::expect_valid_ast("title:-foo");

    insta::assert_snapshot!(res, @r"
    Root
      Field title:
        Not
          Term foo
    ");
}

#[test]
fn field_value_is_one_unit() {
    let res = Query::expect_valid_ast("author:jacob django");

    insta::assert_snapshot!(res, @r"
    Root
      Field author:
        Term jacob
      Term django
    ");
}

#[test]
fn field_as_or_operand() {
    let res = Query::expect_valid_ast("author:jacob or author:adrian");

    insta::assert_snapshot!(res, @r"
    Root
      Or
        Field author:
          Term jacob
        Field author:
          Term adrian
    ");
}
