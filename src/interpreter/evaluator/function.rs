/// The built-in registry and call dispatch.
pub mod core;
/// The `pow` function implementation.
///
/// Raises a number to a power, always producing a float.
pub mod pow;
/// The `print` function implementation.
///
/// Writes its arguments to the diagnostic channel.
pub mod print;
