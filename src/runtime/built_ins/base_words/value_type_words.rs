use crate::{
    add_native_word,
    runtime::{data_structures::value::ToValue, error, interpreter::Interpreter},
};

/// Get the name of a value's type, one of `int`, `list` or `string`.
///
/// Signature: `value -- type-name`
fn word_value_type(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    interpreter.push(value.type_name().to_value());

    Ok(())
}

/// Is the value an integer?
///
/// Signature: `value -- boolean`
fn word_value_is_int(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    interpreter.push(value.is_int().to_value());

    Ok(())
}

/// Is the value a list reference?
///
/// Signature: `value -- boolean`
fn word_value_is_list(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    interpreter.push(value.is_reference().to_value());

    Ok(())
}

/// Is the value one of the two truth values?
///
/// Signature: `value -- boolean`
fn word_value_is_bool(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    interpreter.push(value.is_bool().to_value());

    Ok(())
}

/// Register the value type words.
pub fn register_value_type_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "type",
        word_value_type,
        "Get the name of the value's type.",
        "value -- type-name"
    );

    add_native_word!(
        interpreter,
        "int?",
        word_value_is_int,
        "Is the value an integer?",
        "value -- bool"
    );

    add_native_word!(
        interpreter,
        "list?",
        word_value_is_list,
        "Is the value a list?",
        "value -- bool"
    );

    add_native_word!(
        interpreter,
        "bool?",
        word_value_is_bool,
        "Is the value a truth value?",
        "value -- bool"
    );
}
