use indoc::indoc;

use crate::query::{CompiledQuery, Query, QueryBuilder};
use crate::{Backend, Error, compile, compile_for, compile_split};

impl<'q> Query<'q> {
    #[track_caller]
    pub fn expect(src: &'q str) -> Self {
        QueryBuilder::new(src).parse().unwrap()
    }

    #[track_caller]
    pub fn expect_valid(src: &'q str) -> Self {
        let query = QueryBuilder::new(src).parse().unwrap();
        if !query.is_valid() {
            panic!(
                "Expected valid query, got error:\n{}",
                query.dump_diagnostics()
            );
        }

        query
    }

    #[track_caller]
    pub fn expect_valid_cst(src: &'q str) -> String {
        Self::expect_valid(src).dump_cst()
    }

    #[track_caller]
    pub fn expect_valid_cst_full(src: &'q str) -> String {
        Self::expect_valid(src).dump_cst_full()
    }

    #[track_caller]
    pub fn expect_valid_ast(src: &'q str) -> String {
        Self::expect_valid(src).dump_ast()
    }

    #[track_caller]
    pub fn expect_valid_events(src: &'q str) -> String {
        Self::expect_valid(src).dump_events()
    }

    #[track_caller]
    pub fn expect_invalid(src: &'q str) -> String {
        let query = QueryBuilder::new(src).parse().unwrap();
        if query.is_valid() {
            panic!("Expected invalid query, got valid:\n{}", query.dump_cst());
        }

        query.dump_diagnostics()
    }
}

const MIXED: &str = r#"(video or pictures) -(sports news) "train times" foo -boring"#;

#[test]
fn empty_string_compiles_to_empty() {
    assert_eq!(compile("", Backend::Mysql).unwrap(), "");

    let (text, fields) = compile_split("", Backend::Postgres).unwrap();
    assert_eq!(text, "");
    assert!(fields.is_empty());

    assert_eq!(compile_for("", Backend::Solr).unwrap(), CompiledQuery::default());
}

#[test]
fn whitespace_only_is_an_error() {
    let err = compile("   ", Backend::Common).unwrap_err();
    let Error::QueryParseError(diagnostics) = err else {
        panic!("expected a parse error, got {err:?}");
    };

    insta::assert_snapshot!(diagnostics.render_plain(), @"error at 3..3: expected a search term");
}

#[test]
fn invalid_query_is_rejected() {
    let err = compile("(video", Backend::Solr).unwrap_err();

    assert!(matches!(err, Error::QueryParseError(_)));
    assert_eq!(err.to_string(), "query parsing failed with 1 errors");
}

#[test]
fn warnings_do_not_block_compilation() {
    let query = Query::expect("video OR pictures");

    assert!(query.is_valid());
    assert!(query.diagnostics().has_warnings());
    assert_eq!(query.compile(Backend::Common).unwrap(), "video OR pictures");
}

#[test]
fn common_backend_normalizes() {
    let text = compile(
        indoc! {r#"
        video   or
          pictures
        "#},
        Backend::Common,
    )
    .unwrap();

    assert_eq!(text, "video or pictures");
}

#[test]
fn mixed_query_per_backend() {
    let outputs: Vec<String> = Backend::ALL
        .iter()
        .map(|b| format!("{}: {}", b, compile(MIXED, *b).unwrap()))
        .collect();

    insta::assert_snapshot!(outputs.join("\n"), @r#"
    common: (video or pictures) -(sports news) "train times" foo -boring
    mysql: +(video pictures) -(sports news) +"train times" +foo -boring
    postgresql: (video | pictures) & !(sports & news) & 'train times' & foo & !boring
    lucene: (video pictures) AND NOT (sports AND news) AND "train times" AND foo AND NOT boring
    solr: (video pictures) AND NOT (sports AND news) AND "train times" AND foo AND NOT boring
    xapian: (video OR pictures) AND NOT (sports AND news) AND "train times" AND foo AND NOT boring
    hyperestraier: (video pictures) AND NOT (sports AND news) AND "train times" AND foo AND NOT boring
    sphinx: (video | pictures) -(sports news) "train times" foo -boring
    "#);
}

#[test]
fn compile_for_follows_field_mode() {
    let src = "django title:tutorial";

    let mysql = compile_for(src, Backend::Mysql).unwrap();
    assert_eq!(mysql.query, "+django");
    assert_eq!(mysql.fields["title"], "tutorial");

    let solr = compile_for(src, Backend::Solr).unwrap();
    assert_eq!(solr.query, "django AND title:tutorial");
    assert!(solr.fields.is_empty());
}

#[test]
fn negated_field_value_cannot_be_split() {
    let err = compile_split("title:-foo bar", Backend::Mysql).unwrap_err();
    assert!(matches!(err, Error::UnsplittableField { ref name } if name == "title"));

    let err = compile_for("title:(a or b)", Backend::Postgres).unwrap_err();
    assert!(matches!(err, Error::UnsplittableField { .. }));

    assert_eq!(
        compile_for("title:-foo bar", Backend::Solr).unwrap().query,
        "title:NOT foo AND bar"
    );
}

#[test]
fn compiled_query_serializes() {
    let compiled = compile_for("django title:tutorial author:jacob", Backend::Mysql).unwrap();

    insta::assert_snapshot!(
        serde_json::to_string(&compiled).unwrap(),
        @r#"{"query":"+django","fields":{"title":"tutorial","author":"jacob"}}"#
    );
}

#[test]
fn compilation_is_repeatable() {
    let query = Query::expect_valid(MIXED);

    let first = query.compile(Backend::Xapian).unwrap();
    let second = query.compile(Backend::Xapian).unwrap();
    assert_eq!(first, second);
    assert_eq!(query.events().count(), query.events().count());
}

#[test]
fn exec_fuel_is_reported() {
    let query = Query::expect_valid("a b c");
    assert_eq!(query.exec_fuel_consumed(), 3);

    let query = QueryBuilder::new("a b c")
        .with_exec_fuel(None)
        .parse()
        .unwrap();
    assert_eq!(query.exec_fuel_consumed(), 0);
}

#[test]
fn exec_fuel_exhaustion() {
    let result = QueryBuilder::new("a b c d")
        .with_exec_fuel(Some(2))
        .parse();

    assert!(matches!(result, Err(Error::ExecFuelExhausted)));
}

#[test]
fn recursion_limit() {
    let result = QueryBuilder::new("((((a))))")
        .with_recursion_fuel(Some(4))
        .parse();

    assert!(matches!(result, Err(Error::RecursionLimitExceeded)));
}

#[test]
fn default_recursion_limit_stops_deep_nesting() {
    let src = format!("{}a{}", "(".repeat(300), ")".repeat(300));

    let result = Query::try_from(src.as_str());

    assert!(matches!(result, Err(Error::RecursionLimitExceeded)));
}

#[test]
fn moderate_nesting_is_fine() {
    let src = format!("{}a{}", "(".repeat(100), ")".repeat(100));

    let query = Query::expect_valid(&src);

    assert_eq!(query.compile(Backend::Common).unwrap(), src);
}
