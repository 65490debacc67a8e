use crate::runtime::{
    data_structures::value::{GLOOM_FALSE, GLOOM_TRUE, Value},
    interpreter::Interpreter,
};

/// Bind the truth constants.  They are plain literals so looking them up just pushes the value.
pub fn register_constant_words(interpreter: &mut dyn Interpreter) {
    interpreter.define_variable("t".to_string(), Value::literal(GLOOM_TRUE));
    interpreter.define_variable("f".to_string(), Value::literal(GLOOM_FALSE));
}
