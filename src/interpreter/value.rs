/// The `Value` enum and its kinds.
///
/// Defines the closed family of runtime values (scalar, rational, vector and
/// matrix) together with rendering and conversions.
pub mod core;
/// Element capabilities.
///
/// Declares the `Arithmetic`, `BitwiseOps` and `Incrementable` traits that
/// gate which operators a given element type supports, and implements them
/// for the built-in integer and floating-point types.
pub mod element;
/// Rectangular matrices of elements.
pub mod matrix;
/// Exact fractions kept in reduced form.
pub mod rational;
/// Fixed-length vectors of elements.
pub mod vector;
