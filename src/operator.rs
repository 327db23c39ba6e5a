/// Arithmetic binary operators.
///
/// These are defined for every element type implementing
/// [`Arithmetic`](crate::interpreter::value::element::Arithmetic). The
/// expression grammar produces the first four; `Rem` is reachable through the
/// value API and the assignment forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Rem,
}

impl ArithmeticOp {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        }
    }

    /// Maps a source symbol to its operator.
    ///
    /// # Example
    /// ```
    /// use arithmos::operator::ArithmeticOp;
    ///
    /// assert_eq!(ArithmeticOp::from_symbol("*"), Some(ArithmeticOp::Mul));
    /// assert_eq!(ArithmeticOp::from_symbol("^"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "%" => Some(Self::Rem),
            _ => None,
        }
    }
}

impl std::fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Bitwise binary operators.
///
/// Only available for element types implementing
/// [`BitwiseOps`](crate::interpreter::value::element::BitwiseOps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitwiseOp {
    /// Bitwise and (`&`)
    And,
    /// Bitwise or (`|`)
    Or,
    /// Bitwise exclusive or (`^`)
    Xor,
    /// Left shift (`<<`)
    Shl,
    /// Right shift (`>>`)
    Shr,
}

impl BitwiseOp {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
        }
    }
}

impl std::fmt::Display for BitwiseOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
