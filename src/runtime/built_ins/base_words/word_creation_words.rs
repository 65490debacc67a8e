use crate::{
    add_native_word,
    runtime::{
        data_structures::value::Value,
        error::{self, script_error, ErrorKind},
        interpreter::Interpreter,
    },
};

/// Bind names to values.
///
/// The names are a single literal or a quotation of literals.  A single name is bound to the body
/// as a whole, several names are bound pairwise to the elements of the body quotation.  Bodies are
/// stored as is and only executed when the name is looked up.
///
/// Signature: `names body -- `
fn word_define(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let body = interpreter.pop()?;
    let names = interpreter.pop()?;

    let names = interpreter.elements_of(names)?;
    let bodies = if names.len() == 1 {
        vec![body]
    } else {
        interpreter.elements_of(body)?
    };

    if names.len() != bodies.len() {
        script_error(
            interpreter,
            ErrorKind::InvalidAssignmentTarget(format!(
                "{} names with {} values",
                names.len(),
                bodies.len()
            )),
        )?;
    }

    // Check every name before binding any of them.
    let mut targets = Vec::with_capacity(names.len());

    for name in names {
        match name {
            Value::Literal(text) => targets.push(text),
            other => {
                let text = interpreter.render(&other);
                script_error(interpreter, ErrorKind::InvalidAssignmentTarget(text))?;
            }
        }
    }

    for (name, value) in targets.into_iter().zip(bodies) {
        interpreter.define_variable(name, value);
    }

    Ok(())
}

/// Register the words that create new variables.
pub fn register_word_creation_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "!",
        word_define,
        "Bind one or more names to values.",
        "names body -- "
    );
}
