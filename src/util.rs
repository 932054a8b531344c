/// Source position helpers.
///
/// Converts byte offsets reported by the tokenizer, parser and evaluator into
/// human-oriented line and column numbers and extracts the source line an
/// offset falls on, for error rendering.
pub mod span;
