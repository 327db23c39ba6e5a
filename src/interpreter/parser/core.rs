use tracing::trace;

use crate::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::operand::Operand,
        lexer::{Token, TokenKind},
    },
    operator::ArithmeticOp,
};

/// The cursor of one parser invocation over a token slice.
///
/// Owned by a single evaluation; the cursor only ever moves forward.
#[derive(Debug, Clone)]
pub struct ParseState<'t> {
    tokens:   &'t [Token],
    position: usize,
}

impl<'t> ParseState<'t> {
    /// Starts a parse at the first token.
    #[must_use]
    pub const fn new(tokens: &'t [Token]) -> Self {
        Self { tokens,
               position: 0 }
    }

    /// Index of the current token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The current token, or `None` once the slice is exhausted.
    #[must_use]
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Column of the end of input.
    ///
    /// Taken from the `End` token when present, otherwise from the last
    /// token.
    fn end_column(&self) -> usize {
        self.tokens
            .last()
            .map_or(0, |t| match t.kind() {
                TokenKind::End => t.position(),
                _ => t.position() + t.text().chars().count(),
            })
    }

    /// Consumes the current token if it is an operator accepted by `accept`.
    fn next_operator(&mut self, accept: fn(ArithmeticOp) -> bool) -> Option<(ArithmeticOp, usize)> {
        let token = self.peek()?;
        if token.kind() != TokenKind::Operator {
            return None;
        }
        let op = ArithmeticOp::from_symbol(token.text()).filter(|&op| accept(op))?;
        self.advance();
        Some((op, token.position()))
    }
}

/// Applies `op` and attaches the operator's column to any runtime failure.
fn apply<O: Operand>(left: &O, op: ArithmeticOp, right: &O, position: usize) -> Result<O, Error> {
    trace!(operator = %op, position, "applying operator");
    left.apply(op, right)
        .map_err(|source| Error::Runtime { source, position })
}

/// Parses and evaluates an expression.
///
/// Grammar: `expression := term (('+' | '-') term)*`
///
/// Folds left to right, so `8 - 3 - 2` is `(8 - 3) - 2`.
///
/// # Errors
/// Any error raised by the terms or by applying `+` and `-`.
pub fn parse_expression<O: Operand>(state: &mut ParseState<'_>) -> Result<O, Error> {
    let mut value = parse_term(state)?;

    while let Some((op, position)) =
        state.next_operator(|op| matches!(op, ArithmeticOp::Add | ArithmeticOp::Sub))
    {
        let right = parse_term(state)?;
        value = apply(&value, op, &right, position)?;
    }

    Ok(value)
}

/// Parses and evaluates a term.
///
/// Grammar: `term := factor (('*' | '/') factor)*`
///
/// # Errors
/// Any error raised by the factors or by applying `*` and `/`.
pub fn parse_term<O: Operand>(state: &mut ParseState<'_>) -> Result<O, Error> {
    let mut value = parse_factor(state)?;

    while let Some((op, position)) =
        state.next_operator(|op| matches!(op, ArithmeticOp::Mul | ArithmeticOp::Div))
    {
        let right = parse_factor(state)?;
        value = apply(&value, op, &right, position)?;
    }

    Ok(value)
}

/// Parses and evaluates a factor.
///
/// Grammar: `factor := Number | '(' expression ')'`
///
/// # Errors
/// - `InvalidNumberFormat` if a Number token cannot be read as `O`.
/// - `UnmatchedParen` if a `(` is not closed.
/// - `UnexpectedEndOfInput` if the input ends where an operand is expected.
/// - `UnexpectedToken` for an operator or `)` where an operand is expected.
pub fn parse_factor<O: Operand>(state: &mut ParseState<'_>) -> Result<O, Error> {
    let Some(token) = state.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { position: state.end_column() }.into());
    };

    match token.kind() {
        TokenKind::Number => {
            state.advance();
            O::from_literal(token.text()).map_err(|e| e.shifted(token.position()))
        },
        TokenKind::LeftParen => {
            state.advance();
            let value = parse_expression(state)?;
            match state.peek() {
                Some(t) if t.kind() == TokenKind::RightParen => {
                    state.advance();
                    Ok(value)
                },
                Some(t) => Err(ParseError::UnmatchedParen { position: t.position() }.into()),
                None => Err(ParseError::UnmatchedParen { position: state.end_column() }.into()),
            }
        },
        TokenKind::End => Err(ParseError::UnexpectedEndOfInput { position: token.position() }.into()),
        TokenKind::Operator | TokenKind::RightParen => {
            Err(ParseError::UnexpectedToken { token:    token.text().to_string(),
                                              position: token.position(), }.into())
        },
    }
}

/// Evaluates a whole token sequence into an operand of type `O`.
///
/// The sequence must form exactly one expression, optionally followed by the
/// `End` token.
///
/// # Errors
/// - Everything [`parse_expression`] raises.
/// - `UnmatchedParen` if a `)` follows the complete expression.
/// - `UnexpectedToken` if any other token follows it.
///
/// # Example
/// ```
/// use arithmos::interpreter::{
///     lexer::tokenize_literals,
///     parser::core::evaluate_as,
///     value::vector::Vector,
/// };
///
/// let tokens = tokenize_literals("[1 2 3] + [4 5 6]").unwrap();
/// let v: Vector<i64> = evaluate_as(&tokens).unwrap();
/// assert_eq!(v, Vector::from(vec![5, 7, 9]));
/// ```
pub fn evaluate_as<O: Operand>(tokens: &[Token]) -> Result<O, Error> {
    let mut state = ParseState::new(tokens);
    let value = parse_expression(&mut state)?;

    match state.peek() {
        None => Ok(value),
        Some(t) => match t.kind() {
            TokenKind::End => Ok(value),
            TokenKind::RightParen => Err(ParseError::UnmatchedParen { position: t.position() }.into()),
            _ => Err(ParseError::UnexpectedToken { token:    t.text().to_string(),
                                                   position: t.position(), }.into()),
        },
    }
}

/// Evaluates a token sequence into an `f64`.
///
/// # Errors
/// See [`evaluate_as`].
///
/// # Example
/// ```
/// use arithmos::interpreter::{lexer::tokenize, parser::core::evaluate};
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// assert_eq!(evaluate(&tokens).unwrap(), 14.0);
/// ```
pub fn evaluate(tokens: &[Token]) -> Result<f64, Error> {
    evaluate_as(tokens)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{
        error::{ErrorKind, RuntimeError},
        interpreter::{
            lexer::{tokenize, tokenize_literals},
            value::{core::Value, matrix::Matrix, rational::Rational},
        },
    };

    fn eval(input: &str) -> Result<f64, Error> {
        evaluate(&tokenize(input)?)
    }

    #[rstest]
    #[case("2 + 3 * 4", 14.0)]
    #[case("(2 + 3) * 4", 20.0)]
    #[case("8 - 3 - 2", 3.0)]
    #[case("8 / 4 / 2", 1.0)]
    #[case("((7))", 7.0)]
    #[case("1.5 * 2", 3.0)]
    #[case("10 / 4", 2.5)]
    fn precedence_and_associativity(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(eval(input).unwrap(), expected);
    }

    #[rstest]
    #[case("1 +", ErrorKind::UnexpectedEndOfInput, 3)]
    #[case("", ErrorKind::UnexpectedEndOfInput, 0)]
    #[case("(1 + 2", ErrorKind::UnmatchedParen, 6)]
    #[case("1 + 2)", ErrorKind::UnmatchedParen, 5)]
    #[case("1 2", ErrorKind::UnexpectedToken, 2)]
    #[case("* 2", ErrorKind::UnexpectedToken, 0)]
    #[case("()", ErrorKind::UnexpectedToken, 1)]
    #[case("1.2.3 + 1", ErrorKind::InvalidNumberFormat, 0)]
    #[case("4 / (2 - 2)", ErrorKind::DivisionByZero, 2)]
    fn failures(#[case] input: &str, #[case] kind: ErrorKind, #[case] position: usize) {
        let err = eval(input).unwrap_err();
        assert_eq!((err.kind(), err.position()), (kind, position));
    }

    #[test]
    fn tokens_without_end_marker() {
        let tokens = tokenize("3 *").unwrap();
        let err = evaluate(&tokens[..2]).unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEndOfInput { position: 3 }.into());
    }

    #[test]
    fn rational_target_is_exact() {
        let tokens = tokenize("1 / 3 + 1 / 6").unwrap();
        let r: Rational = evaluate_as(&tokens).unwrap();
        assert_eq!(r, Rational::new(1, 2).unwrap());
    }

    #[test]
    fn rational_division_by_zero_points_at_operator() {
        let tokens = tokenize("3 / 0").unwrap();
        let err = evaluate_as::<Rational>(&tokens).unwrap_err();
        assert_eq!(err,
                   Error::Runtime { source:   RuntimeError::DivisionByZero,
                                    position: 2, });
    }

    #[test]
    fn matrix_target_multiplies() {
        let tokens = tokenize_literals("[1 2; 3 4] * [5 6; 7 8]").unwrap();
        let m: Matrix<i64> = evaluate_as(&tokens).unwrap();
        assert_eq!(m, Matrix::from_rows(vec![vec![19, 22], vec![43, 50]]).unwrap());
    }

    #[test]
    fn value_target_mixes_kinds() {
        let tokens = tokenize_literals("[1 2; 3 4] * [1 1] + 2").unwrap();
        let v: Value<i64> = evaluate_as(&tokens).unwrap();
        assert_eq!(v.to_string(), "5 9");
    }

    #[test]
    fn literal_errors_point_into_the_expression() {
        let tokens = tokenize_literals("1 + [1 x]").unwrap();
        let err = evaluate_as::<Value<i64>>(&tokens).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNumberFormat);
        assert_eq!(err.position(), 7);
    }
}
