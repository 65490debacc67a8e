use crate::runtime::{error, interpreter::Interpreter};
use tracing::debug;

/// The words of the standard library that are written in gloom itself.
const BOOTSTRAP_SOURCE: &str = include_str!("bootstrap.gl");

/// Run the standard library source.  This has to happen after the native words are registered.
pub fn load_bootstrap_library(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let before = interpreter.dictionary().len();

    interpreter.run_source("<bootstrap>", BOOTSTRAP_SOURCE)?;

    debug!(
        words = interpreter.dictionary().len() - before,
        "loaded bootstrap library"
    );

    Ok(())
}
