use crate::{
    add_native_word,
    runtime::{error, interpreter::Interpreter},
};

/// Choose between two branches.  The test under the branches is executed first, then a true
/// result runs the first branch and a false one the second.  Any other integer runs neither.
///
/// Signature: `test if-true if-false -- <branch results>`
fn word_if(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let if_false = interpreter.pop()?;
    let if_true = interpreter.pop()?;

    interpreter.evaluate_top()?;

    match interpreter.pop_as_int()? {
        -1 => if_true.execute(interpreter),
        0 => if_false.execute(interpreter),
        _ => Ok(()),
    }
}

/// Execute a body a fixed number of times.  A count of zero or less skips the body.
///
/// Signature: `body count -- <body results>`
fn word_replicate(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let count = interpreter.pop_as_int()?;
    let body = interpreter.pop()?;

    for _ in 0..count {
        body.execute(interpreter)?;
    }

    Ok(())
}

/// Execute a body over and over.  After each pass a test is popped and the loop ends once it is
/// true.
///
/// Signature: `body -- <body results>`
fn word_loop(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let body = interpreter.pop()?;

    loop {
        body.execute(interpreter)?;

        if interpreter.pop_as_int()? == -1 {
            return Ok(());
        }
    }
}

/// Execute the top of the stack.  References run their quotation, anything else is evaluated.
///
/// Signature: `value -- <results>`
fn word_eval(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.evaluate_top()
}

/// Register the control flow words.
pub fn register_control_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "if",
        word_if,
        "Execute one of two branches based on a test.",
        "test if-true if-false -- <branch results>"
    );

    add_native_word!(
        interpreter,
        "rep",
        word_replicate,
        "Execute a body count times.",
        "body count -- <body results>"
    );

    add_native_word!(
        interpreter,
        "loop",
        word_loop,
        "Execute a body until it leaves true on the stack.",
        "body -- <body results>"
    );

    add_native_word!(
        interpreter,
        "eval",
        word_eval,
        "Execute the value on top of the stack.",
        "value -- <results>"
    );
}
