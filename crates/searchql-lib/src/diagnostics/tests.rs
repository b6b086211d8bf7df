use rowan::TextRange;

use super::*;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnmatchedParen, range(0, 1))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    insta::assert_snapshot!(diagnostics.render_plain(), @"error at 0..1: unmatched `)`");
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(2, 3))
        .message("after `-`")
        .emit();

    insta::assert_snapshot!(diagnostics.render_plain(), @"error at 2..3: expected a search term: after `-`");
}

#[test]
fn default_hint_is_attached() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::EmptyGroup, range(0, 2))
        .emit();

    insta::assert_snapshot!(
        diagnostics.render_plain(),
        @"error at 0..2: empty `()` is not allowed (hint: put search terms inside the parentheses)"
    );
}

#[test]
fn builder_with_related_and_fix() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedGroup, range(4, 4))
        .message("group started here")
        .related_to("opened here", range(0, 1))
        .fix("close the group", ")")
        .emit();

    insta::assert_snapshot!(
        diagnostics.render_plain(),
        @"error at 4..4: missing closing `)`; group started here (fix: close the group) (related: opened here at 0..1)"
    );
}

#[test]
fn warnings_do_not_count_as_errors() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UppercaseOperator, range(2, 4))
        .message("OR")
        .emit();

    assert!(!diagnostics.has_errors());
    assert!(diagnostics.has_warnings());
    assert_eq!(diagnostics.error_count(), 0);
    assert_eq!(diagnostics.warning_count(), 1);
    insta::assert_snapshot!(diagnostics.render_plain(), @"warning at 2..4: `OR` is searched as a plain term");
}

#[test]
fn annotated_render_shows_source_and_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnmatchedParen, range(6, 7))
        .emit();

    let result = diagnostics.render("kansas) sports");
    assert!(result.contains("error: unmatched `)`"));
    assert!(result.contains("kansas) sports"));
    assert!(result.contains('^'));
}

#[test]
fn annotated_render_includes_fix() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UppercaseOperator, range(6, 8))
        .message("OR")
        .fix("use the lowercase `or` keyword", "or")
        .emit();

    let result = diagnostics.printer("video OR pictures").path("query").render();
    assert!(result.contains("warning: `OR` is searched as a plain term"));
    assert!(result.contains("help: use the lowercase `or` keyword"));
    assert!(result.contains("query"));
}

#[test]
fn empty_diagnostics_render_nothing() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());
    assert_eq!(diagnostics.render("anything"), "");
    assert_eq!(diagnostics.render_plain(), "");
}

#[test]
fn containing_span_suppresses_lower_priority() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedPhrase, range(0, 10))
        .emit();
    diagnostics
        .report(DiagnosticKind::InvalidPhraseContent, range(3, 4))
        .emit();

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::UnclosedPhrase]);
}

#[test]
fn suppression_range_widens_containment() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedGroup, range(0, 1))
        .suppression_range(range(0, 8))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnderscoreInTerm, range(2, 5))
        .emit();

    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::UnclosedGroup]);
}

#[test]
fn root_cause_suppresses_structural_at_same_start() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedGroup, range(5, 5))
        .emit();
    diagnostics
        .report(DiagnosticKind::ExpectedFieldValue, range(5, 5))
        .emit();

    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::ExpectedFieldValue]);
}

#[test]
fn disjoint_spans_are_kept() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnmatchedParen, range(0, 1))
        .emit();
    diagnostics
        .report(DiagnosticKind::DanglingOr, range(4, 6))
        .emit();

    assert_eq!(
        diagnostics.kinds(),
        vec![DiagnosticKind::UnmatchedParen, DiagnosticKind::DanglingOr]
    );
}

#[test]
fn extend_merges_messages() {
    let mut a = Diagnostics::new();
    a.report(DiagnosticKind::EmptyGroup, range(0, 2)).emit();
    let mut b = Diagnostics::new();
    b.report(DiagnosticKind::EmptyPhrase, range(3, 5)).emit();

    a.extend(b);
    assert_eq!(a.len(), 2);
    assert_eq!(a.error_count(), 2);
}

#[test]
fn kinds_priority_order() {
    assert!(DiagnosticKind::UnclosedGroup.suppresses(&DiagnosticKind::ExpectedExpression));
    assert!(DiagnosticKind::ExpectedExpression.suppresses(&DiagnosticKind::UnexpectedToken));
    assert!(!DiagnosticKind::UppercaseOperator.suppresses(&DiagnosticKind::UnderscoreInTerm));
}
