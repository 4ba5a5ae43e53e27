use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2002.as_str(), "E2002");
}

#[test]
fn test_error_code_ranges() {
    for code in ErrorCode::ALL {
        assert_ne!(code.is_parse_error(), code.is_grammar_error(), "{code}");
    }
    assert!(ErrorCode::E1003.is_parse_error());
    assert!(ErrorCode::E2007.is_grammar_error());
}

#[test]
fn test_error_code_round_trips_through_str() {
    for code in ErrorCode::ALL {
        assert_eq!(ErrorCode::from_str_code(code.as_str()), Some(code));
    }
    assert_eq!(ErrorCode::from_str_code("E9999"), None);
}

#[test]
fn test_descriptions() {
    assert_eq!(ErrorCode::E2002.description(), "left-recursive grammar");
    assert_eq!(ErrorCode::E2001.description(), "malformed rule string");
    assert_eq!(ErrorCode::E2007.description(), "lexer construction failed");
}

#[test]
fn test_error_level_order() {
    assert!(ErrorLevel::Fatal > ErrorLevel::Error);
    assert_eq!(ErrorLevel::Fatal.to_string(), "fatal");
}
