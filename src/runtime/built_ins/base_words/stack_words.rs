use crate::{
    add_native_word,
    runtime::{
        data_structures::value::{ToValue, Value},
        error::{self, script_error, ErrorKind},
        interpreter::Interpreter,
    },
};

/// Move the top of the main stack onto the retain stack.
///
/// Signature: `value -- `
fn word_to_retain(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    interpreter.retain_push(value);
    Ok(())
}

/// Move the top of the retain stack back onto the main stack.
///
/// Signature: ` -- value`
fn word_from_retain(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.retain_pop()?;

    interpreter.push(value);
    Ok(())
}

/// Get the depth of either the main or the retain stack.  Any name other than `main` reads the
/// retain stack.
///
/// Signature: `stack-name -- depth`
fn word_debug_size(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let name = interpreter.pop()?;

    let depth = match name {
        Value::Literal(ref text) if text == "main" => interpreter.stack().len(),
        _ => interpreter.retain_stack().len(),
    };

    interpreter.push(depth.to_value());
    Ok(())
}

/// Remove a number of values from the top of the main stack.
///
/// Signature: `<values> count -- `
fn word_debug_remove(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let count = interpreter.pop_as_int()?;

    if count < 0 {
        script_error(
            interpreter,
            ErrorKind::IndexOutOfRange {
                index: count,
                size: interpreter.stack().len(),
            },
        )?;
    }

    interpreter.require(count as usize)?;

    for _ in 0..count {
        let _ = interpreter.pop()?;
    }

    Ok(())
}

/// Register the stack manipulation words.
pub fn register_stack_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        ">r",
        word_to_retain,
        "Move the top value to the retain stack.",
        "value -- "
    );

    add_native_word!(
        interpreter,
        "r>",
        word_from_retain,
        "Move the top of the retain stack to the main stack.",
        " -- value"
    );

    add_native_word!(
        interpreter,
        "debug.size",
        word_debug_size,
        "Push the depth of the main or retain stack.",
        "stack-name -- depth"
    );

    add_native_word!(
        interpreter,
        "debug.remove",
        word_debug_remove,
        "Remove count values from the main stack.",
        "<values> count -- "
    );
}
