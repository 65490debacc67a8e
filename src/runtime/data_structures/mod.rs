/// Module contains the Value enumeration and it's implementation.  Every element of a program and
/// every item on the stacks is a value.
pub mod value;

/// The variable environment of the interpreter.
pub mod dictionary;

/// The append-only table of compiled quotations that references point into.
pub mod quotation_table;
