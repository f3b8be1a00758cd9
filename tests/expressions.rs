use numeval::{
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::{lexer::tokenize, printer::postfix},
    parse_source,
};

fn assert_evaluates(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => {
            assert_eq!(value, expected,
                       "'{src}' evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_fails(src: &str) {
    if evaluate(src).is_ok() {
        panic!("'{src}' succeeded but was expected to fail")
    }
}

#[test]
fn single_numbers_and_whitespace() {
    assert_evaluates("42", 42.0);
    assert_evaluates("  7  ", 7.0);
    assert_evaluates("0", 0.0);
    assert_evaluates("2 +\t3", 5.0);
    assert_evaluates("2+3", 5.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_evaluates("2+3*4", 14.0);
    assert_evaluates("2*3+4", 10.0);
    assert_evaluates("10-2*3", 4.0);
}

#[test]
fn equal_precedence_applies_left_to_right() {
    assert_evaluates("10-3-2", 5.0);
    assert_evaluates("24/4/2", 3.0);
    assert_evaluates("1-2+3", 2.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_evaluates("(2+3)*4", 20.0);
    assert_evaluates("2*(2+3)", 10.0);
    assert_evaluates("((2))", 2.0);
    assert_evaluates("((2+3)*(4+1))", 25.0);
}

#[test]
fn worked_example() {
    assert_evaluates("2*(2+3)*(2-3)/5", -2.0);
}

#[test]
fn division_results_are_floating_point() {
    assert_evaluates("7/2", 3.5);
    assert_evaluates("10/4", 2.5);
    assert_evaluates("0/5", 0.0);
}

#[test]
fn division_by_zero_is_error() {
    assert_fails("1/0");
    assert_fails("2/(3-3)");

    assert!(matches!(evaluate("1/0"),
                     Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
}

#[test]
fn malformed_expressions_are_errors() {
    assert_fails("");
    assert_fails("+3");
    assert_fails("2+");
    assert_fails("2++3");
    assert_fails(")");
    assert_fails("2 3");
    assert_fails("1.5");
    assert_fails("2a");
}

#[test]
fn unbalanced_parentheses_are_reported() {
    match evaluate("2+(3") {
        Err(Error::Parse(ParseError::UnbalancedParentheses { position: 2 })) => {},
        other => panic!("expected UnbalancedParentheses at 2, got {other:?}"),
    }
}

#[test]
fn invalid_character_reports_position() {
    match evaluate("2 + $3") {
        Err(Error::Parse(ParseError::InvalidCharacter { found: '$',
                                                        position: 4, })) => {},
        other => panic!("expected InvalidCharacter at 4, got {other:?}"),
    }
}

#[test]
fn trailing_tokens_are_reported() {
    assert!(matches!(evaluate("2+3)"),
                     Err(Error::Parse(ParseError::UnexpectedTrailingTokens { .. }))));
}

#[test]
fn literals_beyond_exact_f64_range_are_errors() {
    // Fits in i64 but not exactly in f64.
    assert_fails("9007199254740993");
    // Does not even fit in i64.
    assert_fails("99999999999999999999");

    assert_evaluates("9007199254740991", 9_007_199_254_740_991.0);
}

#[test]
fn evaluation_is_idempotent() {
    let src = "2*(2+3)*(2-3)/5";
    let first = evaluate(src).unwrap();
    let second = evaluate(src).unwrap();
    assert_eq!(first, second);
}

#[test]
fn tokens_round_trip_to_source() {
    let source = "2*(2+3)*(2-3)/5";
    let rendered: String = tokenize(source).unwrap()
                                           .map(|(token, _)| token.to_string())
                                           .collect();
    assert_eq!(rendered, source);

    let spaced = "10 - 3 - 2";
    let rendered: String = tokenize(spaced).unwrap()
                                           .map(|(token, _)| token.to_string())
                                           .collect();
    let stripped: String = spaced.split_whitespace().collect();
    assert_eq!(rendered, stripped);
}

#[test]
fn postfix_rendering_matches_evaluation_order() {
    let expr = parse_source("2*(2+3)*(2-3)/5").unwrap();
    assert_eq!(postfix(&expr), "2 2 3 + * 2 3 - * 5 /");

    let expr = parse_source("5").unwrap();
    assert_eq!(postfix(&expr), "5");
}
