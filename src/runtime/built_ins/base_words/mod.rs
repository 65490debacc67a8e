/// Arithmetic and the one native comparison.
mod simple_arithmetic_words;

/// Words that deal with the interpreter itself.
mod gloom_words;

/// Words that move values between the main and retain stacks.
mod stack_words;

/// The truth constants.
mod constant_words;

/// Branching, repetition and evaluation.
mod control_words;

/// Words that create new variables.
mod word_creation_words;

/// Words that inspect a value's type.
mod value_type_words;

/// Words that work with lists.
mod list_words;

use crate::runtime::{
    built_ins::base_words::{
        constant_words::register_constant_words, control_words::register_control_words,
        gloom_words::register_gloom_words, list_words::register_list_words,
        simple_arithmetic_words::register_simple_arithmetic_words,
        stack_words::register_stack_words, value_type_words::register_value_type_words,
        word_creation_words::register_word_creation_words,
    },
    interpreter::Interpreter,
};

/// Called to register all of the native words of the language.
pub fn register_base_words(interpreter: &mut dyn Interpreter) {
    register_gloom_words(interpreter);
    register_stack_words(interpreter);
    register_constant_words(interpreter);
    register_simple_arithmetic_words(interpreter);
    register_control_words(interpreter);
    register_word_creation_words(interpreter);
    register_value_type_words(interpreter);
    register_list_words(interpreter);
}
