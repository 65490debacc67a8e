/// Module for tracking locations in the original source code.
pub mod source_buffer;

/// Module for turning source code into a list of tokens for further processing.
pub mod tokenizing;

/// Module for turning that list of tokens into values.  Purely syntactic, nothing is looked up or
/// compiled here.
pub mod parsing;
