use super::*;

#[test]
fn test_report_contains_code_and_message() {
    let report = SourceReport::new(ErrorCode::E1001, "unexpected token '+' (Plus)", 2..3)
        .with_label("expecting one of Num");
    let text = report.render("1 + + 2");
    assert!(text.contains("E1001"), "{text}");
    assert!(text.contains("unexpected token '+' (Plus)"), "{text}");
    assert!(text.contains("expecting one of Num"), "{text}");
    assert!(text.contains("1 + + 2"), "{text}");
}

#[test]
fn test_span_past_end_is_clamped() {
    let report = SourceReport::new(ErrorCode::E1002, "unexpected end of input", 10..12);
    let text = report.render("1 +");
    assert!(text.contains("unexpected end of input"), "{text}");
}

#[test]
fn test_report_has_no_color_codes() {
    let text = SourceReport::new(ErrorCode::E1001, "boom", 0..1).render("x");
    assert!(!text.contains('\u{1b}'), "{text:?}");
}
