use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur during tokenizing or parsing.
///
/// Positions are zero-based character columns into the source text; the
/// rendered messages use one-based columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a character the tokenizer cannot scan.
    #[error("Error at column {}: Unexpected character '{character}'.", .position + 1)]
    Lexical {
        /// The offending character.
        character: char,
        /// Where the character was found.
        position:  usize,
    },
    /// A closing parenthesis `)` was expected but not found, or a `)` has no
    /// opening partner.
    #[error("Error at column {}: Unmatched parenthesis.", .position + 1)]
    UnmatchedParen {
        /// Where the imbalance was detected.
        position: usize,
    },
    /// A literal bracket `[` was not closed, or `]` has no opening partner.
    #[error("Error at column {}: Unmatched bracket.", .position + 1)]
    UnmatchedBracket {
        /// Where the imbalance was detected.
        position: usize,
    },
    /// Reached the end of input where an operand was expected.
    #[error("Error at column {}: Unexpected end of input.", .position + 1)]
    UnexpectedEndOfInput {
        /// The end-of-input position.
        position: usize,
    },
    /// Found a token the grammar does not allow here.
    #[error("Error at column {}: Unexpected token '{token}'.", .position + 1)]
    UnexpectedToken {
        /// The text of the token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Number or literal text could not be converted to the target type.
    #[error("Error at column {}: Invalid number format '{text}'.", .position + 1)]
    InvalidNumberFormat {
        /// The malformed text.
        text:     String,
        /// Where the text starts.
        position: usize,
    },
}

impl ParseError {
    /// Returns the classified kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lexical { .. } => ErrorKind::LexicalError,
            Self::UnmatchedParen { .. } => ErrorKind::UnmatchedParen,
            Self::UnmatchedBracket { .. } => ErrorKind::UnmatchedBracket,
            Self::UnexpectedEndOfInput { .. } => ErrorKind::UnexpectedEndOfInput,
            Self::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            Self::InvalidNumberFormat { .. } => ErrorKind::InvalidNumberFormat,
        }
    }

    /// Returns the zero-based column this error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lexical { position, .. }
            | Self::UnmatchedParen { position }
            | Self::UnmatchedBracket { position }
            | Self::UnexpectedEndOfInput { position }
            | Self::UnexpectedToken { position, .. }
            | Self::InvalidNumberFormat { position, .. } => *position,
        }
    }

    /// Returns the same error moved `offset` columns to the right.
    ///
    /// Literal readers report columns relative to the literal text; the parser
    /// uses this to translate them into columns of the whole expression.
    #[must_use]
    pub fn shifted(self, offset: usize) -> Self {
        match self {
            Self::Lexical { character, position } => {
                Self::Lexical { character,
                                position: position + offset }
            },
            Self::UnmatchedParen { position } => Self::UnmatchedParen { position: position + offset },
            Self::UnmatchedBracket { position } => {
                Self::UnmatchedBracket { position: position + offset }
            },
            Self::UnexpectedEndOfInput { position } => {
                Self::UnexpectedEndOfInput { position: position + offset }
            },
            Self::UnexpectedToken { token, position } => {
                Self::UnexpectedToken { token,
                                        position: position + offset }
            },
            Self::InvalidNumberFormat { text, position } => {
                Self::InvalidNumberFormat { text,
                                            position: position + offset }
            },
        }
    }
}
