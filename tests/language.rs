use std::{fmt::Display, fs, path::Path};

use arithmos::{
    error::{Error, ErrorKind},
    evaluate_matrix, evaluate_rational, evaluate_str, evaluate_value, evaluate_vector,
};
use walkdir::WalkDir;

/// How the lines of a fenced block are evaluated.
#[derive(Debug, Clone, Copy)]
enum Dialect {
    Float,
    Integer,
    Rational,
}

impl Dialect {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "arithmos" => Some(Self::Float),
            "arithmos-integer" => Some(Self::Integer),
            "arithmos-rational" => Some(Self::Rational),
            _ => None,
        }
    }

    fn evaluate(self, line: &str) -> Result<String, Error> {
        match self {
            Self::Float => evaluate_value::<f64>(line).map(|v| render(&v)),
            Self::Integer => evaluate_value::<i64>(line).map(|v| render(&v)),
            Self::Rational => evaluate_rational(line).map(|v| render(&v)),
        }
    }
}

/// Renders a result on one line, with matrix rows separated by `; `.
fn render(value: &impl Display) -> String {
    value.to_string().replace('\n', "; ")
}

fn markdown_files() -> Vec<walkdir::DirEntry> {
    WalkDir::new("book/src").into_iter()
                            .filter_map(Result::ok)
                            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
                            .collect()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in markdown_files() {
        let path = entry.path();
        let content = read(path);

        for (tag, code) in extract_blocks(&content) {
            let Some(dialect) = Dialect::from_tag(&tag) else {
                continue;
            };

            for line in code.lines().map(str::trim).filter(|l| !l.is_empty()) {
                count += 1;
                let (expression, expected) = match line.split_once("=>") {
                    Some((e, r)) => (e.trim(), Some(r.trim())),
                    None => (line, None),
                };

                match dialect.evaluate(expression) {
                    Ok(result) => {
                        if let Some(expected) = expected {
                            assert_eq!(result, expected, "Example `{expression}` in {path:?}");
                        }
                    },
                    Err(e) => panic!("Example `{expression}` in {path:?} failed:\n{e}"),
                }
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

#[test]
fn book_error_examples_fail() {
    let mut count = 0;

    for entry in markdown_files() {
        let path = entry.path();
        let content = read(path);

        for (tag, code) in extract_blocks(&content) {
            if tag != "arithmos-error" {
                continue;
            }
            for line in code.lines().map(str::trim).filter(|l| !l.is_empty()) {
                count += 1;
                let float = evaluate_value::<f64>(line);
                let rational = evaluate_rational(line);
                assert!(float.is_err() && rational.is_err(),
                        "Example `{line}` in {path:?} was expected to fail");
            }
        }
    }

    assert!(count > 0, "No error examples found in book/src");
}

/// Returns the info string and body of every fenced block tagged `arithmos*`.
fn extract_blocks(content: &str) -> Vec<(String, String)> {
    let mut blocks = Vec::new();
    let mut current: Option<String> = None;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if current.is_none() {
            if let Some(tag) = trimmed.strip_prefix("```")
               && tag.starts_with("arithmos")
            {
                current = Some(tag.trim().to_string());
                buf.clear();
            }
            continue;
        }
        if trimmed.starts_with("```") {
            if let Some(tag) = current.take() {
                blocks.push((tag, buf.clone()));
            }
            continue;
        }
        buf.push_str(line);
        buf.push('\n');
    }

    blocks
}

fn assert_success(src: &str, expected: &str) {
    match evaluate_value::<f64>(src) {
        Ok(value) => assert_eq!(render(&value), expected, "Expression `{src}`"),
        Err(e) => panic!("Expression `{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate_value::<f64>(src) {
        Ok(value) => panic!("Expression `{src}` succeeded with `{value}` but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "Expression `{src}` failed with {e}"),
    }
}

#[test]
fn precedence_and_grouping() {
    assert_success("2 + 3 * 4", "14");
    assert_success("(2 + 3) * 4", "20");
    assert_success("2 * 3 + 4 * 5", "26");
    assert_success("100 / 10 / 5", "2");
    assert_success("1 - (2 - 3)", "2");
    assert_success("(((1)))", "1");
}

#[test]
fn scalar_entry_point() {
    assert_eq!(evaluate_str("1.5 + 2.25").unwrap(), 3.75);
    assert_eq!(evaluate_str("  42  ").unwrap(), 42.0);
}

#[test]
fn vector_arithmetic() {
    assert_success("[1 2 3] + [4 5 6]", "5 7 9");
    assert_success("[4 5 6] - [1 2 3]", "3 3 3");
    assert_success("[1 2 3] * [4 5 6]", "4 10 18");
    assert_success("[8 6 4] / [2 2 2]", "4 3 2");
    assert_success("[1 2 3] * 3", "3 6 9");
    assert_success("([1 2] + [3 4]) * 2", "8 12");
}

#[test]
fn matrix_arithmetic() {
    assert_success("[1 2; 3 4] * [5 6; 7 8]", "19 22; 43 50");
    assert_success("[1 2; 3 4] - [1 1; 1 1]", "0 1; 2 3");
    assert_success("[1 2; 3 4] * [1 0]", "1 3");
    assert_success("[2 4; 6 8] / [2 4]", "1 1; 3 2");
    assert_success("[1 1] + [1 2; 3 4] * [1 1] * 0", "1 1");
}

#[test]
fn typed_entry_points() {
    assert_eq!(evaluate_vector::<i64>("[1 2] + [3 4]").unwrap().to_string(), "4 6");
    assert_eq!(evaluate_matrix::<i64>("[1 0; 0 1] * [4 5; 6 7]").unwrap().to_string(),
               "4 5\n6 7");
    assert_eq!(evaluate_matrix::<i64>("[1 2] * [1 2; 3 4]").unwrap().to_string(), "7 10");
    assert_eq!(evaluate_rational("2 / 6").unwrap().to_string(), "1/3");
}

#[test]
fn typed_entry_points_reject_other_literals() {
    assert_eq!(evaluate_vector::<i64>("[1 2] * 2").unwrap_err().kind(),
               ErrorKind::InvalidNumberFormat);
    assert_eq!(evaluate_matrix::<i64>("[1 2 3] * [1 2; 3 4]").unwrap_err().kind(),
               ErrorKind::DimensionMismatch);
    assert_eq!(evaluate_rational("[1 2]").unwrap_err().kind(), ErrorKind::LexicalError);
}

#[test]
fn syntax_errors() {
    assert_failure("1 +", ErrorKind::UnexpectedEndOfInput);
    assert_failure("", ErrorKind::UnexpectedEndOfInput);
    assert_failure("(1 + 2", ErrorKind::UnmatchedParen);
    assert_failure("1 + 2)", ErrorKind::UnmatchedParen);
    assert_failure("1 2", ErrorKind::UnexpectedToken);
    assert_failure("-1", ErrorKind::UnexpectedToken);
    assert_failure("2 ^ 3", ErrorKind::LexicalError);
    assert_failure("[1 2", ErrorKind::LexicalError);
    assert_failure("1..2 + 1", ErrorKind::InvalidNumberFormat);
}

#[test]
fn literals_accept_only_decimals() {
    let err = evaluate_vector::<f64>("[inf NaN infinity] + [1 1 1]").unwrap_err();
    assert_eq!((err.kind(), err.position()), (ErrorKind::InvalidNumberFormat, 1));

    let err = evaluate_value::<f64>("1 + [1e400 2E3]").unwrap_err();
    assert_eq!((err.kind(), err.position()), (ErrorKind::InvalidNumberFormat, 5));

    assert_success("[-1.5 +2 .5]", "-1.5 2 0.5");
}

#[test]
fn runtime_errors() {
    assert_failure("1 / 0", ErrorKind::DivisionByZero);
    assert_failure("[1 2] / [1 0]", ErrorKind::DivisionByZero);
    assert_failure("[1 2] + [1 2 3]", ErrorKind::DimensionMismatch);
    assert_failure("[1 2; 3 4] + [1 2 3; 4 5 6]", ErrorKind::DimensionMismatch);
    assert_failure("[1 2; 3 4 5] + [1 2; 3 4]", ErrorKind::DimensionMismatch);
    assert_failure("3 * [1 2]", ErrorKind::UnsupportedOperand);
    assert_failure("[1 2] * [1 2; 3 4]", ErrorKind::UnsupportedOperand);
    assert_failure("[1 2; 3 4] + 1", ErrorKind::UnsupportedOperand);
}

#[test]
fn error_positions_point_at_the_cause() {
    let err = evaluate_value::<f64>("1 + 2 / (3 - 3)").unwrap_err();
    assert_eq!(err.position(), 6);
    assert_eq!(err.to_string(), "Error at column 7: Division by zero.");

    let err = evaluate_value::<f64>("[1 2] + [1 2 3]").unwrap_err();
    assert_eq!(err.position(), 6);

    let err = evaluate_value::<f64>("1 + [2 abc]").unwrap_err();
    assert_eq!(err.position(), 7);
}
