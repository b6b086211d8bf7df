use crate::Query;

#[test]
fn single_term() {
    let res = Query::expect_valid_cst("kansas");

    insta::assert_snapshot!(res, @r#"
    Root
      Term
        Word "kansas"
    "#);
}

#[test]
fn implicit_and() {
    let res = Query::expect_valid_cst("kansas sports");

    insta::assert_snapshot!(res, @r#"
    Root
      Term
        Word "kansas"
      Term
        Word "sports"
    "#);
}

#[test]
fn word_punctuation() {
    let res = Query::expect_valid_ast("e-mail e.g. 50% ok?");

    insta::assert_snapshot!(res, @r"
    Root
      Term e-mail
      Term e.g.
      Term 50%
      Term ok?
    ");
}

#[test]
fn or_expression() {
    let res = Query::expect_valid_cst("video or pictures");

    insta::assert_snapshot!(res, @r#"
    Root
      Or
        Term
          Word "video"
        KwOr "or"
        Term
          Word "pictures"
    "#);
}

#[test]
fn or_takes_remaining_clauses() {
    let res = Query::expect_valid_ast("a or b c");

    insta::assert_snapshot!(res, @r"
    Root
      Or
        Term a
        Term b
        Term c
    ");
}

#[test]
fn or_chain_nests_right() {
    let res = Query::expect_valid_ast("a or b or c");

    insta::assert_snapshot!(res, @r"
    Root
      Or
        Term a
        Or
          Term b
          Term c
    ");
}

#[test]
fn or_inside_group_stops_at_paren() {
    let res = Query::expect_valid_ast("(a or b) c");

    insta::assert_snapshot!(res, @r"
    Root
      Group
        Or
          Term a
          Term b
      Term c
    ");
}

#[test]
fn uppercase_or_is_a_term() {
    let res = Query::expect_valid_ast("video OR pictures");

    insta::assert_snapshot!(res, @r"
    Root
      Term video
      Term OR
      Term pictures
    ");
}

#[test]
fn words_starting_with_or() {
    let res = Query::expect_valid_ast("order oregon");

    insta::assert_snapshot!(res, @r"
    Root
      Term order
      Term oregon
    ");
}

#[test]
fn negation() {
    let res = Query::expect_valid_cst("-boring");

    insta::assert_snapshot!(res, @r#"
    Root
      Not
        Minus "-"
        Term
          Word "boring"
    "#);
}

#[test]
fn negated_group() {
    let res = Query::expect_valid_ast("-(sports news)");

    insta::assert_snapshot!(res, @r"
    Root
      Not
        Group
          Term sports
          Term news
    ");
}

#[test]
fn group() {
    let res = Query::expect_valid_cst("(video pictures)");

    insta::assert_snapshot!(res, @r#"
    Root
      Group
        ParenOpen "("
        Term
          Word "video"
        Term
          Word "pictures"
        ParenClose ")"
    "#);
}

#[test]
fn nested_groups() {
    let res = Query::expect_valid_ast("(a (b -c))");

    insta::assert_snapshot!(res, @r"
    Root
      Group
        Term a
        Group
          Term b
          Not
            Term c
    ");
}

#[test]
fn mixed_query() {
    let res =
        Query::expect_valid_ast(r#"(video or pictures) -(sports news) "train times" foo -boring"#);

    insta::assert_snapshot!(res, @r"
    Root
      Group
        Or
          Term video
          Term pictures
      Not
        Group
          Term sports
          Term news
      Phrase
        Term train
        Term times
      Term foo
      Not
        Term boring
    ");
}
