//! Readers for number text and bracketed literals.
//!
//! Every reader reports error positions as zero-based character columns
//! relative to the start of the text it was given.

use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::value::{
        core::Value, element::Arithmetic, matrix::Matrix, rational::Rational, vector::Vector,
    },
};

fn invalid(text: &str, position: usize) -> Error {
    ParseError::InvalidNumberFormat { text: text.to_string(),
                                      position }.into()
}

/// Whether `text` is a plain decimal: an optional sign, then digits with at
/// most one `.`, at least one of them a digit.
fn is_decimal(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    !(whole.is_empty() && fraction.is_empty()) && is_digits(whole) && is_digits(fraction)
}

/// Reads a decimal element into `T`, refusing forms such as `inf`, `NaN`
/// and exponents that `FromStr` would otherwise take.
fn parse_number<T: Arithmetic>(text: &str, position: usize) -> Result<T, Error> {
    if !is_decimal(text) {
        return Err(invalid(text, position));
    }
    text.parse::<T>().map_err(|_| invalid(text, position))
}

/// Trims whitespace on both ends; returns the column of the first kept
/// character together with the trimmed text.
fn trim(text: &str) -> (usize, &str) {
    let start = text.len() - text.trim_start().len();
    (text[..start].chars().count(), text.trim())
}

/// Splits `text` at every separator character, keeping empty pieces.
///
/// Each piece comes with its column, offset by `base`.
fn segments(text: &str, base: usize, is_separator: impl Fn(char) -> bool) -> Vec<(usize, &str)> {
    let mut pieces = Vec::new();
    let mut start = (0, 0);

    for (column, (byte, ch)) in text.char_indices().enumerate() {
        if is_separator(ch) {
            pieces.push((base + start.1, &text[start.0..byte]));
            start = (byte + ch.len_utf8(), column + 1);
        }
    }
    pieces.push((base + start.1, &text[start.0..]));

    pieces
}

/// Strips one pair of enclosing brackets, if present.
///
/// Returns the body and the column where it starts. Unbracketed text is
/// returned trimmed.
fn unbracket(text: &str) -> Result<(&str, usize), ParseError> {
    let (offset, trimmed) = trim(text);

    let (body, base) = match trimmed.strip_prefix('[') {
        Some(rest) => {
            let Some(body) = rest.strip_suffix(']') else {
                return Err(ParseError::UnmatchedBracket { position: offset
                                                                    + trimmed.chars().count() });
            };
            (body, offset + 1)
        },
        None => (trimmed, offset),
    };

    for (column, ch) in body.chars().enumerate() {
        match ch {
            '[' => {
                return Err(ParseError::UnexpectedToken { token:    "[".to_string(),
                                                         position: base + column, });
            },
            ']' => return Err(ParseError::UnmatchedBracket { position: base + column }),
            _ => {},
        }
    }

    Ok((body, base))
}

/// Reads the elements of one row, separated by whitespace or commas.
fn parse_elements<T: Arithmetic>(row: &str, base: usize) -> Result<Vec<T>, Error> {
    segments(row, base, |c| c.is_whitespace() || c == ',').into_iter()
                                                          .filter(|(_, field)| !field.is_empty())
                                                          .map(|(column, field)| {
                                                              parse_number(field, column)
                                                          })
                                                          .collect()
}

/// Reads a single scalar such as `42` or `-2.5`.
///
/// # Errors
/// `InvalidNumberFormat` if the text is not a decimal or not a valid `T`.
pub fn parse_scalar<T: Arithmetic>(text: &str) -> Result<T, Error> {
    let (offset, body) = trim(text);
    parse_number(body, offset)
}

/// Reads a vector literal.
///
/// Accepts `[1 2 3]`, `[1, 2, 3]` and the unbracketed rendering `1 2 3`.
///
/// # Errors
/// - `InvalidNumberFormat` for an element that is not a valid `T`.
/// - `UnmatchedBracket` for a missing or stray bracket.
/// - `UnexpectedToken` for a row separator `;` or a nested `[`.
///
/// # Example
/// ```
/// use arithmos::interpreter::{parser::literal::parse_vector, value::vector::Vector};
///
/// let v: Vector<i64> = parse_vector("[1, -2 3]").unwrap();
/// assert_eq!(v, Vector::from(vec![1, -2, 3]));
///
/// let round_trip: Vector<i64> = parse_vector(&format!("[{v}]")).unwrap();
/// assert_eq!(round_trip, v);
/// ```
pub fn parse_vector<T: Arithmetic>(text: &str) -> Result<Vector<T>, Error> {
    let (body, base) = unbracket(text)?;

    if let Some(column) = body.chars().position(|c| c == ';') {
        return Err(ParseError::UnexpectedToken { token:    ";".to_string(),
                                                 position: base + column, }.into());
    }

    parse_elements(body, base).map(Vector::from)
}

/// Reads a matrix literal.
///
/// Rows are separated by `;` or by line breaks, so both `[1 2; 3 4]` and the
/// rendered form `"1 2\n3 4"` are accepted. Blank rows are ignored.
///
/// # Errors
/// - `InvalidNumberFormat` for an element that is not a valid `T`.
/// - `UnmatchedBracket` for a missing or stray bracket.
/// - `DimensionMismatch` if the rows differ in length, pointing at the
///   offending row.
///
/// # Example
/// ```
/// use arithmos::interpreter::parser::literal::parse_matrix;
///
/// let m = parse_matrix::<f64>("[1 2; 3 4]").unwrap();
/// assert_eq!(m.to_string(), "1 2\n3 4");
/// assert_eq!(parse_matrix::<f64>(&m.to_string()).unwrap(), m);
///
/// assert!(parse_matrix::<f64>("[1 2; 3]").is_err());
/// ```
pub fn parse_matrix<T: Arithmetic>(text: &str) -> Result<Matrix<T>, Error> {
    let (body, base) = unbracket(text)?;

    let mut starts = Vec::new();
    let mut rows = Vec::new();
    for (column, row) in segments(body, base, |c| c == ';' || c == '\n') {
        if row.trim().is_empty() {
            continue;
        }
        starts.push(column);
        rows.push(parse_elements(row, column)?);
    }

    Matrix::from_rows(rows).map_err(|source| {
                               let position = match source {
                                   RuntimeError::RaggedMatrix { row, .. } => {
                                       starts.get(row).copied().unwrap_or(base)
                                   },
                                   _ => base,
                               };
                               Error::Runtime { source, position }
                           })
}

fn parse_integer(text: &str, base: usize) -> Result<i64, Error> {
    let (offset, body) = trim(text);
    body.parse::<i64>()
        .map_err(|_| invalid(body, base + offset))
}

/// Reads an exact decimal such as `-1.25` into a rational.
fn parse_decimal(text: &str, base: usize) -> Result<Rational, Error> {
    if !is_decimal(text) {
        return Err(invalid(text, base));
    }
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    let overflow = || Error::Runtime { source:   RuntimeError::Overflow,
                                       position: base, };
    let scale = u32::try_from(fraction.len()).ok()
                                             .and_then(|exp| 10_i128.checked_pow(exp))
                                             .ok_or_else(overflow)?;
    let magnitude = format!("{whole}{fraction}").parse::<i128>()
                                                .map_err(|_| overflow())?;
    let numerator = if negative { -magnitude } else { magnitude };

    Rational::reduced(numerator, scale).map_err(|source| Error::Runtime { source,
                                                                          position: base })
}

/// Reads a rational.
///
/// Accepts the rendered form `n/d`, a plain integer `n` or an exact decimal
/// such as `1.25`, which becomes `5/4`. Signs are allowed on both parts.
///
/// # Errors
/// - `InvalidNumberFormat` if either part is not an integer, or the text is
///   not a decimal.
/// - `DivisionByZero` for a zero denominator.
/// - `Overflow` if the value does not fit in `i64` parts.
///
/// # Example
/// ```
/// use arithmos::interpreter::{parser::literal::parse_rational, value::rational::Rational};
///
/// assert_eq!(parse_rational("6/-8").unwrap(), Rational::new(-3, 4).unwrap());
/// assert_eq!(parse_rational("1.25").unwrap().to_string(), "5/4");
/// assert!(parse_rational("1/0").is_err());
/// ```
pub fn parse_rational(text: &str) -> Result<Rational, Error> {
    let (offset, body) = trim(text);

    match body.split_once('/') {
        Some((numerator, denominator)) => {
            let slash = offset + numerator.chars().count();
            let n = parse_integer(numerator, offset)?;
            let d = parse_integer(denominator, slash + 1)?;
            Rational::new(n, d).map_err(|source| Error::Runtime { source,
                                                                  position: slash })
        },
        None => parse_decimal(body, offset),
    }
}

/// Reads any literal into a [`Value`].
///
/// - `[a b c]` becomes a vector;
/// - `[a b; c d]`, or a bracketed literal spanning lines, becomes a matrix;
/// - `n/d` becomes a rational;
/// - anything else is read as a scalar.
///
/// # Errors
/// Whatever the selected reader raises.
///
/// # Example
/// ```
/// use arithmos::interpreter::{parser::literal::parse_value, value::core::ValueKind};
///
/// assert_eq!(parse_value::<i64>("[1 2]").unwrap().kind(), ValueKind::Vector);
/// assert_eq!(parse_value::<i64>("[1 2; 3 4]").unwrap().kind(), ValueKind::Matrix);
/// assert_eq!(parse_value::<i64>("3/4").unwrap().kind(), ValueKind::Rational);
/// assert_eq!(parse_value::<i64>("3").unwrap().kind(), ValueKind::Scalar);
/// ```
pub fn parse_value<T: Arithmetic>(text: &str) -> Result<Value<T>, Error> {
    let (_, body) = trim(text);

    if body.starts_with('[') {
        if body.contains([';', '\n']) {
            parse_matrix(text).map(Value::Matrix)
        } else {
            parse_vector(text).map(Value::Vector)
        }
    } else if body.contains('/') {
        parse_rational(text).map(Value::Rational)
    } else {
        parse_scalar(text).map(Value::Scalar)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::error::ErrorKind;

    #[rstest]
    #[case("[1 2 3]")]
    #[case("[1,2,3]")]
    #[case("[ 1 , 2 , 3 ]")]
    #[case("1 2 3")]
    fn vector_separators(#[case] text: &str) {
        assert_eq!(parse_vector::<i32>(text).unwrap(), Vector::from(vec![1, 2, 3]));
    }

    #[test]
    fn empty_literals() {
        assert!(parse_vector::<f64>("[]").unwrap().is_empty());
        assert_eq!(parse_matrix::<f64>("[]").unwrap().row_count(), 0);
    }

    #[rstest]
    #[case("[1 2", ErrorKind::UnmatchedBracket, 4)]
    #[case("1 2]", ErrorKind::UnmatchedBracket, 3)]
    #[case("[1 [2]]", ErrorKind::UnexpectedToken, 3)]
    #[case("[1 2; 3 4]", ErrorKind::UnexpectedToken, 4)]
    #[case("[1 two]", ErrorKind::InvalidNumberFormat, 3)]
    fn vector_errors(#[case] text: &str, #[case] kind: ErrorKind, #[case] position: usize) {
        let err = parse_vector::<i64>(text).unwrap_err();
        assert_eq!((err.kind(), err.position()), (kind, position));
    }

    #[rstest]
    #[case("[inf]", 1)]
    #[case("[NaN]", 1)]
    #[case("[1 infinity]", 3)]
    #[case("[1e400]", 1)]
    #[case("[2E3]", 1)]
    #[case("[1 --2]", 3)]
    fn float_elements_must_be_decimal(#[case] text: &str, #[case] position: usize) {
        let err = parse_vector::<f64>(text).unwrap_err();
        assert_eq!((err.kind(), err.position()), (ErrorKind::InvalidNumberFormat, position));
    }

    #[rstest]
    #[case("inf")]
    #[case("-NaN")]
    #[case("1e3")]
    fn scalars_must_be_decimal(#[case] text: &str) {
        assert_eq!(parse_scalar::<f64>(text).unwrap_err().kind(), ErrorKind::InvalidNumberFormat);
    }

    #[rstest]
    #[case("+1.5", 1.5)]
    #[case("-.25", -0.25)]
    #[case("3.", 3.0)]
    fn decimal_scalars(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_scalar::<f64>(text).unwrap(), expected);
    }

    #[test]
    fn matrix_row_separators() {
        let expected = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(parse_matrix::<i64>("[1 2; 3 4]").unwrap(), expected);
        assert_eq!(parse_matrix::<i64>("[1, 2;\n 3, 4;]").unwrap(), expected);
        assert_eq!(parse_matrix::<i64>("1 2\n3 4\n").unwrap(), expected);
    }

    #[test]
    fn ragged_matrix_points_at_row() {
        let err = parse_matrix::<i64>("[1 2; 3]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
        assert_eq!(err.position(), 5);
    }

    #[rstest]
    #[case("3/4", 3, 4)]
    #[case(" -6 / 8 ", -3, 4)]
    #[case("3/-4", -3, 4)]
    #[case("0/5", 0, 1)]
    #[case("7", 7, 1)]
    #[case("1.25", 5, 4)]
    #[case("-0.5", -1, 2)]
    #[case(".5", 1, 2)]
    #[case("2.", 2, 1)]
    fn rationals(#[case] text: &str, #[case] n: i64, #[case] d: i64) {
        let r = parse_rational(text).unwrap();
        assert_eq!((r.numerator(), r.denominator()), (n, d));
    }

    #[rstest]
    #[case("1/0", ErrorKind::DivisionByZero, 1)]
    #[case("a/2", ErrorKind::InvalidNumberFormat, 0)]
    #[case("1/b", ErrorKind::InvalidNumberFormat, 2)]
    #[case("1.2.3", ErrorKind::InvalidNumberFormat, 0)]
    #[case(".", ErrorKind::InvalidNumberFormat, 0)]
    #[case("99999999999999999999", ErrorKind::Overflow, 0)]
    fn rational_errors(#[case] text: &str, #[case] kind: ErrorKind, #[case] position: usize) {
        let err = parse_rational(text).unwrap_err();
        assert_eq!((err.kind(), err.position()), (kind, position));
    }

    #[test]
    fn scalar_position_skips_leading_space() {
        let err = parse_scalar::<f64>("  x").unwrap_err();
        assert_eq!(err,
                   Error::from(ParseError::InvalidNumberFormat { text:     "x".to_string(),
                                                                 position: 2, }));
    }
}
