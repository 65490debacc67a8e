/// All of the core data structures used by the gloom interpreter.
pub mod data_structures;

/// The native words and the self hosted standard library.
pub mod built_ins;

/// Module for defining the error reporting of the gloom interpreter.
pub mod error;

/// Module for defining the core functionality of the gloom interpreter.  This includes tools for
/// managing and examining the interpreter's state.
pub mod interpreter;
