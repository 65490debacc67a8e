use crate::{
    add_native_word,
    runtime::{
        data_structures::value::ToValue,
        error::{self, script_error, ErrorKind},
        interpreter::Interpreter,
    },
};

/// Read the top two values as integers without touching the stack, then pop them.  The top of the
/// stack is the left hand side.  On failure nothing is popped.
fn pop_operands(interpreter: &mut dyn Interpreter) -> error::Result<(i64, i64)> {
    interpreter.require(2)?;

    let stack = interpreter.stack();
    let top = &stack[stack.len() - 1];
    let second = &stack[stack.len() - 2];

    let (lhs, rhs) = match (top.as_int(), second.as_int()) {
        (Some(lhs), Some(rhs)) => (lhs, rhs),
        (None, _) => return script_error(interpreter, ErrorKind::NotANumber(top.to_string())),
        (_, None) => return script_error(interpreter, ErrorKind::NotANumber(second.to_string())),
    };

    let _ = interpreter.pop()?;
    let _ = interpreter.pop()?;

    Ok((lhs, rhs))
}

/// Push the result of a checked operation, or fail with an overflow in the named word.
fn push_checked(
    interpreter: &mut dyn Interpreter,
    word: &'static str,
    result: Option<i64>,
) -> error::Result<()> {
    match result {
        Some(value) => {
            interpreter.push(value.to_value());
            Ok(())
        }

        None => script_error(interpreter, ErrorKind::ArithmeticOverflow(word)),
    }
}

/// Fail before dividing by zero.
fn check_divisor(interpreter: &mut dyn Interpreter, rhs: i64) -> error::Result<()> {
    if rhs == 0 {
        script_error(interpreter, ErrorKind::DivisionByZero)?;
    }

    Ok(())
}

/// Signature: `rhs lhs -- lhs+rhs`
fn word_add(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (lhs, rhs) = pop_operands(interpreter)?;
    push_checked(interpreter, "+", lhs.checked_add(rhs))
}

/// Signature: `rhs lhs -- lhs-rhs`
fn word_subtract(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (lhs, rhs) = pop_operands(interpreter)?;
    push_checked(interpreter, "-", lhs.checked_sub(rhs))
}

/// Signature: `rhs lhs -- lhs*rhs`
fn word_multiply(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (lhs, rhs) = pop_operands(interpreter)?;
    push_checked(interpreter, "*", lhs.checked_mul(rhs))
}

/// Truncating division.
///
/// Signature: `rhs lhs -- lhs/rhs`
fn word_divide(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (lhs, rhs) = pop_operands(interpreter)?;

    check_divisor(interpreter, rhs)?;
    push_checked(interpreter, "/", lhs.checked_div(rhs))
}

/// Modulo that takes the sign of the divisor, `((lhs % rhs) + rhs) % rhs`.
///
/// Signature: `rhs lhs -- lhs mod rhs`
fn word_modulo(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (lhs, rhs) = pop_operands(interpreter)?;

    check_divisor(interpreter, rhs)?;

    // Equal to ((lhs % rhs) + rhs) % rhs without an intermediate that can overflow.
    let remainder = lhs.wrapping_rem(rhs);
    let result = if remainder != 0 && (remainder < 0) != (rhs < 0) {
        remainder + rhs
    } else {
        remainder
    };

    interpreter.push(result.to_value());
    Ok(())
}

/// The only native comparison, every other one is built from it.
///
/// Signature: `rhs lhs -- lhs>rhs`
fn word_greater_than(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (lhs, rhs) = pop_operands(interpreter)?;

    interpreter.push((lhs > rhs).to_value());
    Ok(())
}

pub fn register_simple_arithmetic_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "+",
        word_add,
        "Add the top two values.",
        "rhs lhs -- sum"
    );

    add_native_word!(
        interpreter,
        "-",
        word_subtract,
        "Subtract the second value from the top value.",
        "rhs lhs -- difference"
    );

    add_native_word!(
        interpreter,
        "*",
        word_multiply,
        "Multiply the top two values.",
        "rhs lhs -- product"
    );

    add_native_word!(
        interpreter,
        "/",
        word_divide,
        "Divide the top value by the second value, truncating.",
        "rhs lhs -- quotient"
    );

    add_native_word!(
        interpreter,
        "math.mod",
        word_modulo,
        "The top value modulo the second value, the result takes the divisor's sign.",
        "rhs lhs -- remainder"
    );

    add_native_word!(
        interpreter,
        "%",
        word_modulo,
        "Alias of math.mod.",
        "rhs lhs -- remainder"
    );

    add_native_word!(
        interpreter,
        ">",
        word_greater_than,
        "Is the top value greater than the second value?",
        "rhs lhs -- bool"
    );
}
