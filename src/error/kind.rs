use std::fmt;

/// Every class of failure the interpreter can report.
///
/// The string form returned by [`ErrorKind::as_str`] is stable and is what the
/// presentation layer shows to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character that the tokenizer cannot scan.
    LexicalError,
    /// A `(` without its `)`, or the other way round.
    UnmatchedParen,
    /// A `[` without its `]`, or the other way round.
    UnmatchedBracket,
    /// The expression ended where an operand was expected.
    UnexpectedEndOfInput,
    /// A token appeared where the grammar does not allow it.
    UnexpectedToken,
    /// Division or remainder by zero.
    DivisionByZero,
    /// The operator is not defined for this pair of value kinds.
    UnsupportedOperand,
    /// Operand sizes do not fit together.
    DimensionMismatch,
    /// The result does not fit the element type.
    Overflow,
    /// Malformed literal text reached the numeric constructor.
    InvalidNumberFormat,
    /// A declaration used a type keyword outside the allow-list.
    InvalidType,
}

impl ErrorKind {
    /// Returns the stable name of the kind.
    ///
    /// # Example
    /// ```
    /// use arithmos::error::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::UnmatchedBracket.as_str(), "SyntaxError:UnmatchedBracket");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LexicalError => "LexicalError",
            Self::UnmatchedParen => "SyntaxError:UnmatchedParen",
            Self::UnmatchedBracket => "SyntaxError:UnmatchedBracket",
            Self::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            Self::UnexpectedToken => "SyntaxError:UnexpectedToken",
            Self::DivisionByZero => "DivisionByZero",
            Self::UnsupportedOperand => "UnsupportedOperandError",
            Self::DimensionMismatch => "DimensionMismatch",
            Self::Overflow => "Overflow",
            Self::InvalidNumberFormat => "InvalidNumberFormat",
            Self::InvalidType => "InvalidTypeError",
        }
    }

    /// Returns a short, user-facing suggestion for fixing this kind of error.
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::LexicalError => {
                "Remove the character. Only numbers, '+', '-', '*', '/' and parentheses are understood."
            },
            Self::UnmatchedParen => "Ensure every '(' is closed by a matching ')'.",
            Self::UnmatchedBracket => "Ensure all brackets are closed properly.",
            Self::UnexpectedEndOfInput => "The expression ends too early. Add the missing operand.",
            Self::UnexpectedToken => "Check if all brackets and operators are placed correctly.",
            Self::DivisionByZero => "Numbers cannot be divided by zero. Correct the denominator.",
            Self::UnsupportedOperand => {
                "Check if the operation is supported for the given data types."
            },
            Self::DimensionMismatch => "Check that the operand sizes are compatible.",
            Self::Overflow => "The result is too large for the element type. Use smaller values.",
            Self::InvalidNumberFormat => {
                "Check the number literal. Use digits with at most one decimal point."
            },
            Self::InvalidType => "Invalid type. Check the syntax and logic.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ErrorKind::UnmatchedBracket, "Ensure all brackets are closed properly.")]
    #[case(ErrorKind::DivisionByZero, "Numbers cannot be divided by zero. Correct the denominator.")]
    #[case(ErrorKind::InvalidType, "Invalid type. Check the syntax and logic.")]
    #[case(ErrorKind::UnsupportedOperand,
           "Check if the operation is supported for the given data types.")]
    #[case(ErrorKind::UnexpectedToken,
           "Check if all brackets and operators are placed correctly.")]
    fn recommendations(#[case] kind: ErrorKind, #[case] text: &str) {
        assert_eq!(kind.recommendation(), text);
    }
}
