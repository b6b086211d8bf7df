use crate::Query;
use indoc::indoc;

#[test]
fn whitespace_preserved() {
    let res = Query::expect_valid_cst_full("a  b ");

    insta::assert_snapshot!(res, @r#"
    Root
      Term
        Word "a"
      Whitespace "  "
      Term
        Word "b"
      Whitespace " "
    "#);
}

#[test]
fn whitespace_inside_or() {
    let res = Query::expect_valid_cst_full("a or b");

    insta::assert_snapshot!(res, @r#"
    Root
      Or
        Term
          Word "a"
        Whitespace " "
        KwOr "or"
        Whitespace " "
        Term
          Word "b"
    "#);
}

#[test]
fn whitespace_inside_group() {
    let res = Query::expect_valid_cst_full("(a b)");

    insta::assert_snapshot!(res, @r#"
    Root
      Group
        ParenOpen "("
        Term
          Word "a"
        Whitespace " "
        Term
          Word "b"
        ParenClose ")"
    "#);
}

#[test]
fn newlines_are_whitespace() {
    let input = indoc! {r#"
    video
    pictures
    "#};

    let res = Query::expect_valid_cst_full(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Term
        Word "video"
      Whitespace "\n"
      Term
        Word "pictures"
      Whitespace "\n"
    "#);
}

#[test]
fn lossless_round_trip() {
    let input = "  (video  or pictures)\t-boring  ";

    let query = Query::expect_valid(input);

    assert_eq!(query.as_cst().text().to_string(), input);
}
