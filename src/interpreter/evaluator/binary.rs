/// Arithmetic operators `+ - * / %` over all value kinds.
pub mod arithmetic;
/// Bitwise operators `& | ^ << >>` over all value kinds.
pub mod bitwise;
/// Ordering between values of the same kind.
pub mod comparison;
