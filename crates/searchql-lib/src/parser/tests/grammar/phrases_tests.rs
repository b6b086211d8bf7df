use crate::Query;

#[test]
fn double_quoted_phrase() {
    let res = Query::expect_valid_cst(r#""train times""#);

    insta::assert_snapshot!(res, @r#"
    Root
      Phrase
        DoubleQuote "\""
        Term
          Word "train"
        Term
          Word "times"
        DoubleQuote "\""
    "#);
}

#[test]
fn single_quoted_phrase() {
    let res = Query::expect_valid_ast("'train times'");

    insta::assert_snapshot!(res, @r"
    Root
      Phrase
        Term train
        Term times
    ");
}

#[test]
fn or_is_a_plain_word_in_phrase() {
    let res = Query::expect_valid_ast(r#""this or that""#);

    insta::assert_snapshot!(res, @r"
    Root
      Phrase
        Term this
        Term or
        Term that
    ");
}

#[test]
fn minus_glues_to_adjacent_word_in_phrase() {
    let res = Query::expect_valid_cst(r#""-x y""#);

    insta::assert_snapshot!(res, @r#"
    Root
      Phrase
        DoubleQuote "\""
        Term
          Minus "-"
          Word "x"
        Term
          Word "y"
        DoubleQuote "\""
    "#);
}

#[test]
fn phrase_between_terms() {
    let res = Query::expect_valid_ast(r#"a "b c" d"#);

    insta::assert_snapshot!(res, @r"
    Root
      Term a
      Phrase
        Term b
        Term c
      Term d
    ");
}
