use crate::{
    add_native_word,
    runtime::{error, interpreter::Interpreter},
};

/// Run another gloom file.  Relative paths are searched for next to the file being run first.
///
/// Signature: `path -- `
fn word_import(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let path = interpreter.pop()?.to_string();
    interpreter.run_file(&path)
}

/// Register the words that deal with the interpreter itself.
pub fn register_gloom_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "import",
        word_import,
        "Run a gloom source file.",
        "path -- "
    );
}
