/// Module for managing source code and turning it into values.
#[macro_use]
pub mod lang;

/// Module for the runtime and the data structures used by the interpreter.  As well as the
/// interpreter itself.
#[macro_use]
pub mod runtime;

pub use runtime::{
    data_structures::value::{GLOOM_FALSE, GLOOM_TRUE, ToValue, Value},
    error::{self, ErrorKind, ScriptError},
    interpreter::{
        CodeManagement, Interpreter, InterpreterStack, QuotationManagement, VariableManagement,
        gloom_interpreter::GloomInterpreter,
    },
};
