/// Reduction of arithmetic trees.
pub mod core;
/// Arithmetic on concrete scalar operands.
pub mod scalar;
