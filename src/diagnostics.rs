use std::{fmt, sync::LazyLock};

use regex::Regex;
use tracing::debug;

use crate::error::ErrorKind;

/// Type keywords a declaration may start with.
pub const ALLOWED_TYPES: [&str; 6] = ["int", "float", "double", "char", "bool", "string"];

/// `<word> <name> =` not followed by a second `=`.
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\s+[A-Za-z_][A-Za-z0-9_]*\s*=(?:[^=]|$)")
        .unwrap_or_else(|_| unreachable!())
});

/// A structural defect found in raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The class of the defect.
    pub kind:     ErrorKind,
    /// Zero-based character column the defect points at. The end-of-string
    /// position is `input.chars().count()`.
    pub position: usize,
    /// A short description of what was found, such as `unexpected ']'`.
    pub detail:   String,
}

impl Diagnostic {
    fn new(kind: ErrorKind, position: usize, detail: impl Into<String>) -> Self {
        let diagnostic = Self { kind,
                                position,
                                detail: detail.into() };
        debug!(kind = %diagnostic.kind, position, detail = %diagnostic.detail, "classified defect");
        diagnostic
    }

    /// The recommended fix for this defect.
    #[must_use]
    pub const fn recommendation(&self) -> &'static str {
        self.kind.recommendation()
    }

    /// The caret line pointing at this defect.
    #[must_use]
    pub fn pointer(&self) -> String {
        print_error_pointer(self.position)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at column {}: {}", self.kind, self.position + 1, self.detail)
    }
}

/// Renders a caret under column `position`.
///
/// # Example
/// ```
/// use arithmos::diagnostics::print_error_pointer;
///
/// assert_eq!(print_error_pointer(0), "^");
/// assert_eq!(print_error_pointer(3), "   ^");
/// ```
#[must_use]
pub fn print_error_pointer(position: usize) -> String {
    format!("{}^", " ".repeat(position))
}

const fn closer_kind(bracket: char) -> ErrorKind {
    match bracket {
        '[' | ']' => ErrorKind::UnmatchedBracket,
        _ => ErrorKind::UnmatchedParen,
    }
}

const fn partner(open: char) -> char {
    match open {
        '[' => ']',
        _ => ')',
    }
}

/// Checks that `()` and `[]` are balanced and properly nested.
///
/// A closer without an opener, or of the wrong kind, is reported at its own
/// column. Openers that are never closed are reported at the end of the
/// string, classified by the innermost one.
///
/// # Example
/// ```
/// use arithmos::{diagnostics::check_brackets, error::ErrorKind};
///
/// let d = check_brackets("(1 + 2]").unwrap();
/// assert_eq!((d.kind, d.position), (ErrorKind::UnmatchedBracket, 6));
///
/// assert!(check_brackets("([1 2] + [3 4])").is_none());
/// ```
#[must_use]
pub fn check_brackets(input: &str) -> Option<Diagnostic> {
    let mut stack = Vec::new();

    for (column, ch) in input.chars().enumerate() {
        match ch {
            '(' | '[' => stack.push(ch),
            ')' | ']' => match stack.pop() {
                Some(open) if partner(open) == ch => {},
                Some(open) => {
                    return Some(Diagnostic::new(closer_kind(ch),
                                                column,
                                                format!("expected '{}', found '{ch}'",
                                                        partner(open))));
                },
                None => {
                    return Some(Diagnostic::new(closer_kind(ch),
                                                column,
                                                format!("unexpected '{ch}'")));
                },
            },
            _ => {},
        }
    }

    stack.last().map(|&open| {
                    Diagnostic::new(closer_kind(open),
                                    input.chars().count(),
                                    format!("missing closing '{}'", partner(open)))
                })
}

/// Checks the type word of every declaration `<type> <name> = ...`.
///
/// Each word outside [`ALLOWED_TYPES`] is reported as `InvalidTypeError` at
/// its first character. Comparisons such as `a b == c` are not declarations.
///
/// # Example
/// ```
/// use arithmos::{diagnostics::check_types, error::ErrorKind};
///
/// assert!(check_types("int a = 5;").is_empty());
///
/// let found = check_types("number a = 5; text b = 6;");
/// assert_eq!(found.len(), 2);
/// assert_eq!((found[1].kind, found[1].position), (ErrorKind::InvalidType, 14));
/// ```
#[must_use]
pub fn check_types(input: &str) -> Vec<Diagnostic> {
    DECLARATION.captures_iter(input)
               .filter_map(|captures| captures.get(1))
               .filter(|word| !ALLOWED_TYPES.contains(&word.as_str()))
               .map(|word| {
                   let column = input[..word.start()].chars().count();
                   Diagnostic::new(ErrorKind::InvalidType,
                                   column,
                                   format!("unknown type '{}'", word.as_str()))
               })
               .collect()
}

/// Returns the first structural defect in `input`, if any.
///
/// Bracket balance is checked before type words.
///
/// # Example
/// ```
/// use arithmos::{diagnostics::classify, error::ErrorKind};
///
/// let input = "int f = 5 + [3 * 2;";
/// let d = classify(input).unwrap();
/// assert_eq!(d.kind, ErrorKind::UnmatchedBracket);
/// assert_eq!(d.position, input.len());
///
/// assert_eq!(classify("int a = 5;"), None);
/// ```
#[must_use]
pub fn classify(input: &str) -> Option<Diagnostic> {
    check_brackets(input).or_else(|| check_types(input).into_iter().next())
}

/// Returns every structural defect in `input`, bracket defect first.
#[must_use]
pub fn classify_all(input: &str) -> Vec<Diagnostic> {
    check_brackets(input).into_iter()
                         .chain(check_types(input))
                         .collect()
}
