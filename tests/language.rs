use std::fs;

use duocalc::{
    error::{Error, ErrorKind, ParseError, RuntimeError},
    evaluate, get_result,
    interpreter::evaluator::core::{Context, Mode, OPERAND_LIMIT, TEXT_LENGTH_LIMIT},
    util::roman::RomanGrammar,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in extract_calc_lines(&content) {
            count += 1;
            let (input, expected) =
                line.rsplit_once(" => ")
                    .unwrap_or_else(|| panic!("Malformed example in {path:?}: {line}"));

            match (evaluate(input), expected.strip_prefix("error: ")) {
                (Ok(result), None) => {
                    assert_eq!(result, expected, "Example in {path:?} gave the wrong result: {line}");
                },
                (Err(e), Some(kind)) => {
                    assert_eq!(e.kind().to_string(), kind, "Example in {path:?} failed differently: {line}");
                },
                (Ok(result), Some(_)) => {
                    panic!("Example in {path:?} succeeded with {result} but should fail: {line}")
                },
                (Err(e), None) => panic!("Example in {path:?} failed: {line}\nError: {e}"),
            }
        }
    }

    assert!(count > 0, "No calculator examples found in book/src");
}

fn extract_calc_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```duocalc") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines
}

fn assert_result(src: &str, expected: &str) {
    match evaluate(src) {
        Ok(result) => assert_eq!(result, expected, "wrong result for {src}"),
        Err(e) => panic!("Expression {src} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) -> Error {
    match evaluate(src) {
        Ok(result) => panic!("Expression {src} gave {result} but was expected to fail"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "wrong error for {src}: {e}");
            e
        },
    }
}

#[test]
fn string_arithmetic() {
    assert_result("\"abc\"+\"de\"", "abcde");
    assert_result("\"abcabc\"-\"abc\"", "abc");
    assert_result("\"ab\"*3", "ababab");
    assert_result("\"abcdef\"/3", "ab");
}

#[test]
fn string_subtraction_without_match_keeps_left() {
    assert_result("\"hello\" - \"xyz\"", "hello");
    assert_result("\"a-b-a\" - \"a\"", "-b-a");
}

#[test]
fn string_division_floors() {
    assert_result("\"abcdefg\" / 2", "abc");
    assert_result("\"abc\" / 3", "a");
    assert_failure("\"abc\" / 4", ErrorKind::Range);
}

#[test]
fn string_lengths_count_characters() {
    assert_result("\"héllo\" / 2", "hé");
    assert_result("\"日本\" * 2", "日本日本");
    assert_result("\"0123456789\" + \"!\"", "0123456789!");
    assert_failure("\"0123456789a\" + \"b\"", ErrorKind::Format);
    assert_failure("\"\" + \"b\"", ErrorKind::Format);
}

#[test]
fn string_operands_must_fit_the_operator() {
    assert_failure("\"ab\" + 3", ErrorKind::Format);
    assert_failure("\"ab\" * \"c\"", ErrorKind::Format);
    assert_failure("\"ab\" * III", ErrorKind::Format);
    assert_failure("\"ab\" * 11", ErrorKind::Range);
    assert_failure("\"ab\" * 0", ErrorKind::Range);
}

#[test]
fn arabic_arithmetic() {
    assert_result("6+3", "9");
    assert_result("10 * 10", "100");
    assert_result("9 / 2", "4");
    assert_result("2 - 5", "-3");
    assert_result("4 - 4", "0");
}

#[test]
fn roman_arithmetic() {
    assert_result("VI+III", "IX");
    assert_result("X * X", "C");
    assert_result("VII / II", "III");
    assert_result("IX - IV", "V");
}

#[test]
fn roman_results_below_one_fail() {
    assert_failure("I - I", ErrorKind::NonPositiveNumeral);
    assert_failure("II - V", ErrorKind::NonPositiveNumeral);
    assert_failure("I / II", ErrorKind::NonPositiveNumeral);
}

#[test]
fn mixed_bases_fail() {
    let err = assert_failure("VI+3", ErrorKind::MixedBase);
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::MixedBase { column: 4, .. })));
    assert_failure("3+VI", ErrorKind::MixedBase);
    assert_failure("VI+0", ErrorKind::MixedBase);
}

#[test]
fn division_by_zero_is_checked_before_range() {
    assert_failure("5/0", ErrorKind::DivisionByZero);
    assert_failure("11/0", ErrorKind::DivisionByZero);
}

#[test]
fn operands_out_of_range_fail() {
    assert_failure("11+1", ErrorKind::Range);
    assert_failure("1+11", ErrorKind::Range);
    assert_failure("0+5", ErrorKind::Range);
    assert_failure("XI+I", ErrorKind::Range);
    assert_failure("99999999999999999999 + 1", ErrorKind::Range);
}

#[test]
fn malformed_roman_numerals_fail() {
    assert_failure("IIII+I", ErrorKind::InvalidNumeral);
    assert_failure("IM+I", ErrorKind::InvalidNumeral);
    assert_failure("VX+I", ErrorKind::InvalidNumeral);
}

#[test]
fn malformed_input_fails() {
    assert_failure("", ErrorKind::Format);
    assert_failure("   ", ErrorKind::Format);
    assert_failure("5", ErrorKind::Format);
    assert_failure("5+", ErrorKind::Format);
    assert_failure("+5", ErrorKind::Format);
    assert_failure("1+2+3", ErrorKind::Format);
    assert_failure("2 ^ 3", ErrorKind::Format);
    assert_failure("vi + iii", ErrorKind::Format);
    assert_failure("\"abc + \"d\"", ErrorKind::Format);
    assert_failure("3 + \"ab\"", ErrorKind::Format);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_result("  6 + 3\n", "9");
    assert_result("\t\"a\"  +  \"b\" ", "ab");
}

#[test]
fn errors_report_columns() {
    let err = assert_failure("1 + 2 3", ErrorKind::Format);
    assert!(matches!(err,
                     Error::Parse(ParseError::UnexpectedTrailingTokens { column: 7, .. })));

    let err = assert_failure("\"ü\" + IIII", ErrorKind::Format);
    assert!(matches!(err, Error::Parse(ParseError::OperandMismatch { column: 7, .. })));
}

#[test]
fn forced_modes() {
    let string_mode = Context::new().with_mode(Mode::String);
    assert!(get_result("3 * 3", &string_mode).is_err());
    assert_eq!(get_result("\"ab\" * 2", &string_mode).unwrap(), "abab");

    let numeral_mode = Context::new().with_mode(Mode::Numeral);
    let err = get_result("\"ab\" * 2", &numeral_mode).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn lookup_grammar_only_knows_one_to_ten() {
    let context = Context::new().with_roman_grammar(RomanGrammar::Lookup);
    assert_eq!(get_result("VIII + II", &context).unwrap(), "X");
    assert_eq!(get_result("X * X", &context).unwrap(), "C");

    let err = get_result("XI + I", &context).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidNumeral);
}

#[test]
fn error_messages_are_readable() {
    let err = evaluate("I - I").unwrap_err();
    assert_eq!(err.to_string(),
               "Error at column 3: Roman numerals have no representation for zero or negative values, found 0.");

    let err = evaluate("5 / 0").unwrap_err();
    assert_eq!(err.to_string(), "Error at column 3: Division by zero.");
}

#[test]
fn widened_operand_bound_is_clamped() {
    let context = Context::new().with_max_operand(i64::MAX);
    assert_eq!(context.max_operand(), OPERAND_LIMIT);

    let err = get_result("9999999999 * 9999999999", &context).unwrap_err();
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::OutOfRange { max: OPERAND_LIMIT, .. })));

    assert_eq!(get_result("3999 * 3999", &context).unwrap(), "15992001");
    assert_eq!(get_result("MMM + CMXCIX", &context).unwrap(), "MMMCMXCIX");
    assert_eq!(get_result("MMM + M", &context).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(get_result("\"ab\" * 4000", &context).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(get_result("\"ab\" * 20", &context).unwrap(), "ab".repeat(20));
}

#[test]
fn operand_bounds_can_be_narrowed_and_widened() {
    let context = Context::new().with_max_operand(5);
    assert_eq!(get_result("5 + 5", &context).unwrap(), "10");
    assert_eq!(get_result("6 + 1", &context).unwrap_err().kind(), ErrorKind::Range);

    let context = Context::new().with_max_operand(20);
    assert_eq!(get_result("XX - XII", &context).unwrap(), "VIII");

    assert_eq!(Context::new().with_max_operand(-3).max_operand(), 1);
}

#[test]
fn text_length_bound_can_be_changed() {
    let context = Context::new().with_max_text_length(12);
    assert_eq!(get_result("\"Hello, world\" / 2", &context).unwrap(), "Hello,");

    let context = Context::new().with_max_text_length(3);
    assert_eq!(get_result("\"abcd\" + \"e\"", &context).unwrap_err().kind(),
               ErrorKind::Format);

    assert_eq!(Context::new().with_max_text_length(usize::MAX).max_text_length(),
               TEXT_LENGTH_LIMIT);
    assert_eq!(Context::new().with_max_text_length(0).max_text_length(), 1);
}

#[test]
fn string_count_of_one_keeps_whole_string() {
    assert_result("\"abc\" / 1", "abc");
    assert_result("\"abc\" * 1", "abc");
}

#[test]
fn columns_count_leading_whitespace() {
    let err = assert_failure("   1 + 2 3", ErrorKind::Format);
    assert!(matches!(err,
                     Error::Parse(ParseError::UnexpectedTrailingTokens { column: 10, .. })));

    let err = assert_failure("  VI+3", ErrorKind::MixedBase);
    assert!(matches!(err, Error::Runtime(RuntimeError::MixedBase { column: 6, .. })));
}
