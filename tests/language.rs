use std::fs;

use reckon::{
    error::{Error, LexError, ParseError, RuntimeError},
    evaluate,
    interpreter::value::Number,
    parse,
};
use rstest::rstest;
use walkdir::WalkDir;

enum Expectation {
    Value(String),
    Fails(String),
}

fn parse_case(line: &str) -> Option<(&str, Expectation)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    if let Some((input, value)) = line.rsplit_once("=>") {
        return Some((input.trim(), Expectation::Value(value.trim().to_string())));
    }
    let (input, phase) = line.rsplit_once("!!")
                             .unwrap_or_else(|| panic!("Malformed case line: {line}"));
    Some((input.trim(), Expectation::Fails(phase.trim().to_string())))
}

fn phase(error: &Error) -> &'static str {
    match error {
        Error::Lex(_) => "lex",
        Error::Parse(_) => "parse",
        Error::Runtime(_) => "runtime",
    }
}

#[test]
fn case_files_hold() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (input, expectation) in content.lines().filter_map(parse_case) {
            count += 1;
            match (evaluate(input), expectation) {
                (Ok(value), Expectation::Value(expected)) => {
                    assert_eq!(value.to_string(), expected, "{input} in {path:?}");
                },
                (Err(failure), Expectation::Fails(expected)) => {
                    assert_eq!(phase(&failure.error), expected, "{input} in {path:?}:\n{failure}");
                },
                (Ok(value), Expectation::Fails(expected)) => {
                    panic!("{input} in {path:?} evaluated to {value}, expected a {expected} error");
                },
                (Err(failure), Expectation::Value(expected)) => {
                    panic!("{input} in {path:?} failed, expected {expected}:\n{failure}");
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(evaluate("1 - 2 - 3").unwrap(), Number::Integer(-4));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(evaluate("2 + 3 * 4").unwrap(), Number::Integer(14));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(evaluate("(2 + 3) * 4").unwrap(), Number::Integer(20));
}

#[test]
fn inexact_division_yields_a_real() {
    assert_eq!(evaluate("(1 + 3) / 10").unwrap(), Number::Real(0.4));
}

#[test]
fn division_by_zero_is_an_error_not_nan() {
    let failure = evaluate("1 / 0").unwrap_err();
    assert_eq!(failure.error,
               Error::Runtime(RuntimeError::DivisionByZero { span: 2..3 }));
    assert_eq!(failure.input, "1 / 0");
}

#[rstest]
#[case::unmatched_paren("(1 + 2", 6)]
#[case::missing_operand("1 + ", 4)]
#[case::trailing_input("1 2", 2)]
#[case::stray_close("1 + 2)", 5)]
#[case::leading_operator("/ 2", 0)]
fn malformed_input_points_at_the_failure(#[case] input: &str, #[case] offset: usize) {
    let failure = parse(input).unwrap_err();
    assert!(matches!(failure.error, Error::Parse(_)), "{failure}");
    assert_eq!(failure.offset(), offset);
}

#[test]
fn trailing_input_is_named_as_such() {
    let failure = evaluate("1 2").unwrap_err();
    assert!(matches!(failure.error,
                     Error::Parse(ParseError::UnexpectedTrailingInput { ref found, .. })
                     if found == "number 2"));
    assert!(failure.to_string().contains("unexpected trailing input"));
}

#[test]
fn unclosed_group_names_expected_and_found() {
    let failure = evaluate("(1 + 2").unwrap_err();
    assert_eq!(failure.error.to_string(),
               "parse error: expected ')', found end of input");
}

#[test]
fn unknown_character_is_a_lex_error() {
    let failure = evaluate("3 % 2").unwrap_err();
    assert_eq!(failure.error,
               Error::Lex(LexError::UnrecognizedCharacter { character: '%',
                                                            offset:    2, }));
}

#[rstest]
#[case("1 - 2 - 3")]
#[case("(1 + 3) / 10")]
#[case("1 / 0")]
#[case("(1 + 2")]
#[case("1 $")]
fn evaluation_is_repeatable(#[case] input: &str) {
    assert_eq!(evaluate(input), evaluate(input));
}

#[test]
fn failure_renders_a_caret_under_the_offset() {
    let failure = evaluate("1 + (2 / 0)").unwrap_err();
    let expected = "runtime error: division by zero\n --> line 1, column 8\n  |\n1 | 1 + (2 / 0)\n  |        ^";
    assert_eq!(failure.to_string(), expected);
}

#[test]
fn failure_on_a_later_line_reports_that_line() {
    let failure = evaluate("1 +\n  2 *\n  )").unwrap_err();
    let rendered = failure.to_string();
    assert!(rendered.contains("--> line 3, column 3"), "{rendered}");
    assert!(rendered.contains("3 |   )"), "{rendered}");
}

#[test]
fn trees_render_fully_parenthesized() {
    assert_eq!(parse("1 + 2 * 3 - 4").unwrap().to_string(), "((1 + (2 * 3)) - 4)");
    assert_eq!(parse("(1 + 2) * (3 - 4)").unwrap().to_string(), "((1 + 2) * (3 - 4))");
}

#[test]
fn hundred_thousand_operator_chain_evaluates() {
    let source = format!("0{}", " + 1".repeat(100_000));
    assert_eq!(evaluate(&source), Ok(Number::Integer(100_000)));
}

#[test]
fn hundred_thousand_operator_chain_parses_and_renders() {
    let source = format!("1{}", " * 2 - 1".repeat(50_000));
    let rendered = parse(&source).unwrap().to_string();
    assert_eq!(rendered.matches('(').count(), 100_000);
    assert!(rendered.ends_with(" - (1 * 2)) - 1)"), "{}", &rendered[rendered.len() - 20..]);
}

#[test]
fn failure_can_be_reported_at_a_script_line() {
    let failure = evaluate("1 / 0").unwrap_err().starting_at_line(12);
    let expected = "runtime error: division by zero\n  --> line 12, column 3\n   |\n12 | 1 / 0\n   |   ^";
    assert_eq!(failure.to_string(), expected);
}

#[test]
fn missing_operand_at_the_end_points_past_the_input() {
    let failure = evaluate("2 *").unwrap_err();
    assert_eq!(failure.offset(), 3);
    assert!(failure.to_string().ends_with("1 | 2 *\n  |    ^"), "{failure}");
}
