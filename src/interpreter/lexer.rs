use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::ParseError;

/// The raw scanner underneath [`Tokenizer`].
///
/// Recognizes the character classes of the language; the tokenizer turns
/// them into [`Token`]s with text and column.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    /// A digit-leading run of digits and dots, such as `3`, `2.5` or `1.2.3`.
    #[regex(r"[0-9][0-9.]*")]
    Number,
    /// A bracketed literal without nested brackets, such as `[1 2; 3 4]`.
    #[regex(r"\[[^\[\]]*\]")]
    Literal,
    /// `+`, `-`, `*` or `/`
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Operator,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// The category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A number, or a bracketed literal in literal mode.
    Number,
    /// One of `+ - * /`.
    Operator,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// The end of the input.
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Operator => "operator",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::End => "end of input",
        };
        write!(f, "{name}")
    }
}

/// A lexical token in the source input.
///
/// Tokens are immutable: the tokenizer creates them and the parser only reads
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind:     TokenKind,
    text:     String,
    position: usize,
}

impl Token {
    /// Creates a token of `kind` with `text`, starting at zero-based column
    /// `position`.
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }

    /// Creates the terminal token at `position`.
    #[must_use]
    pub fn end(position: usize) -> Self {
        Self::new(TokenKind::End, "", position)
    }

    /// The token category.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The raw source text of the token. Empty for [`TokenKind::End`].
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Zero-based character column where the token starts.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

/// Converts a byte offset into `source` to a character column.
fn column(source: &str, byte_offset: usize) -> usize {
    source.get(..byte_offset)
          .map_or(byte_offset, |prefix| prefix.chars().count())
}

/// Produces tokens from expression text one at a time.
///
/// A tokenizer is a finite sequence: once it has returned the
/// [`TokenKind::End`] token, or an error, it is exhausted. Build a new one to
/// scan again.
///
/// # Example
/// ```
/// use arithmos::interpreter::lexer::{TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("2 * (1.5)");
/// let kinds: Vec<_> = std::iter::from_fn(|| tokenizer.next_token().ok())
///     .map(|t| t.kind())
///     .take_while(|&k| k != TokenKind::End)
///     .collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Number,
///             TokenKind::Operator,
///             TokenKind::LeftParen,
///             TokenKind::Number,
///             TokenKind::RightParen]);
/// ```
pub struct Tokenizer<'source> {
    lexer:    logos::Lexer<'source, RawToken>,
    literals: bool,
    finished: bool,
}

impl<'source> Tokenizer<'source> {
    /// Creates a tokenizer for plain expressions.
    ///
    /// In plain mode `[` and `]` are unscannable characters.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { lexer:    RawToken::lexer(source),
               literals: false,
               finished: false, }
    }

    /// Creates a tokenizer that also accepts bracketed literals.
    ///
    /// Each `[ ... ]` run becomes a single [`TokenKind::Number`] token whose
    /// text is the whole literal, brackets included.
    #[must_use]
    pub fn with_literals(source: &'source str) -> Self {
        Self { literals: true,
               ..Self::new(source) }
    }

    /// Returns whether the tokenizer has produced its last token.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Scans the next token.
    ///
    /// After the end of input every further call returns the same
    /// [`TokenKind::End`] token.
    ///
    /// # Errors
    /// `LexicalError` for a character that starts no token, with its column.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        let source = self.lexer.source();

        let Some(raw) = self.lexer.next() else {
            self.finished = true;
            let token = Token::end(column(source, source.len()));
            trace!(kind = %token.kind(), position = token.position(), "token");
            return Ok(token);
        };

        let span = self.lexer.span();
        let position = column(source, span.start);
        let slice = self.lexer.slice();

        let kind = match raw {
            Ok(RawToken::Number) => TokenKind::Number,
            Ok(RawToken::Literal) if self.literals => TokenKind::Number,
            Ok(RawToken::Operator) => TokenKind::Operator,
            Ok(RawToken::LeftParen) => TokenKind::LeftParen,
            Ok(RawToken::RightParen) => TokenKind::RightParen,
            Ok(RawToken::Literal | RawToken::Ignored) | Err(()) => {
                self.finished = true;
                let character = slice.chars().next().unwrap_or('\0');
                return Err(ParseError::Lexical { character, position });
            },
        };

        trace!(kind = %kind, text = slice, position, "token");
        Ok(Token::new(kind, slice, position))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}

/// Tokenizes a plain expression.
///
/// The returned sequence always ends with a [`TokenKind::End`] token.
///
/// # Errors
/// The first `LexicalError` met while scanning.
///
/// # Example
/// ```
/// use arithmos::{error::ErrorKind, interpreter::lexer::tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[1].text(), "+");
/// assert_eq!(tokens[3].position(), 5);
///
/// let err = tokenize("1 + x").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::LexicalError);
/// assert_eq!(err.position(), 4);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    Tokenizer::new(input).collect()
}

/// Tokenizes an expression that may contain bracketed literals.
///
/// # Errors
/// The first `LexicalError` met while scanning. An unclosed `[` is reported
/// at its own column.
pub fn tokenize_literals(input: &str) -> Result<Vec<Token>, ParseError> {
    Tokenizer::with_literals(input).collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(Token::kind).collect()
    }

    #[test]
    fn numbers_keep_their_raw_text() {
        let tokens = tokenize("1.2.3 + 42").unwrap();
        assert_eq!(tokens[0].text(), "1.2.3");
        assert_eq!(tokens[2].text(), "42");
        assert_eq!(tokens[2].position(), 8);
    }

    #[test]
    fn whitespace_is_skipped() {
        let tokens = tokenize("  (\t1\n)  ").unwrap();
        assert_eq!(kinds(&tokens),
                   [TokenKind::LeftParen, TokenKind::Number, TokenKind::RightParen, TokenKind::End]);
        assert_eq!(tokens[3].position(), 9);
    }

    #[test]
    fn empty_input_is_only_end() {
        assert_eq!(tokenize("").unwrap(), vec![Token::end(0)]);
    }

    #[rstest]
    #[case("2 % 3", '%', 2)]
    #[case("a", 'a', 0)]
    #[case("1 + [2]", '[', 4)]
    #[case("3 ^ 2", '^', 2)]
    fn unscannable_characters(#[case] input: &str, #[case] character: char, #[case] position: usize) {
        assert_eq!(tokenize(input), Err(ParseError::Lexical { character, position }));
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let err = tokenize_literals("[é] $").unwrap_err();
        assert_eq!(err, ParseError::Lexical { character: '$', position: 4 });
    }

    #[test]
    fn literal_mode_reads_bracket_runs() {
        let tokens = tokenize_literals("[1 2; 3 4] * [1, 1]").unwrap();
        assert_eq!(kinds(&tokens),
                   [TokenKind::Number, TokenKind::Operator, TokenKind::Number, TokenKind::End]);
        assert_eq!(tokens[0].text(), "[1 2; 3 4]");
        assert_eq!(tokens[2].text(), "[1, 1]");
        assert_eq!(tokens[2].position(), 13);
    }

    #[test]
    fn unclosed_literal_is_lexical_error_at_bracket() {
        let err = tokenize_literals("2 + [1 2").unwrap_err();
        assert_eq!(err, ParseError::Lexical { character: '[', position: 4 });
    }

    #[test]
    fn tokenizer_is_exhausted_after_end() {
        let mut tokenizer = Tokenizer::new("7");
        assert_eq!(tokenizer.next().unwrap().unwrap().kind(), TokenKind::Number);
        assert_eq!(tokenizer.next().unwrap().unwrap().kind(), TokenKind::End);
        assert!(tokenizer.is_finished());
        assert!(tokenizer.next().is_none());
        assert_eq!(tokenizer.next_token().unwrap().kind(), TokenKind::End);
    }

    #[test]
    fn tokenizer_stops_after_error() {
        let mut tokenizer = Tokenizer::new("1 $ 2");
        assert!(tokenizer.next().unwrap().is_ok());
        assert!(tokenizer.next().unwrap().is_err());
        assert!(tokenizer.next().is_none());
    }
}
