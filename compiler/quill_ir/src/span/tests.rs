use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn test_span_merge() {
    let a = Span::new(10, 20);
    let b = Span::new(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged.start, 10);
    assert_eq!(merged.end, 30);
}

#[test]
fn test_span_from_range_saturates() {
    let span = Span::from_range(3..usize::MAX);
    assert_eq!(span.start, 3);
    assert_eq!(span.end, u32::MAX);
}

#[test]
fn test_position_ordering_is_line_then_column() {
    let early = Position::new(1, 40, 39);
    let later_line = Position::new(2, 1, 41);
    let later_column = Position::new(1, 41, 40);

    assert!(early < later_line);
    assert!(early < later_column);
    assert!(later_column < later_line);
}

#[test]
fn test_position_advance_over() {
    let start = Position::START;
    assert_eq!(start.advance_over("abc"), Position::new(1, 4, 3));
    assert_eq!(start.advance_over("ab\ncd"), Position::new(2, 3, 5));
    // Columns count characters, offsets count bytes.
    assert_eq!(start.advance_over("é"), Position::new(1, 2, 2));
}

#[test]
fn test_position_display() {
    assert_eq!(Position::new(3, 7, 20).to_string(), "line 3, column 7");
}
