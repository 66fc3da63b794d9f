/// Runtime value representation.
///
/// Defines the `Value` enum shared by the parser, the evaluator and the output
/// serializer, together with its textual and JSON forms.
pub mod core;
