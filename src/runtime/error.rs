
use std::{ error::Error,
           process::Termination,
           fmt::{ self, Debug, Display, Formatter }, process::ExitCode };
use crate::{ runtime::interpreter::CallStack,
             lang::source_buffer::SourceLocation };

use super::interpreter::Interpreter;



pub type Result<T> = std::result::Result<T, ScriptError>;



/// The kinds of failure a gloom script can run into.  Every error aborts the enclosing run, there
/// is no way to catch one from within the language.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind
{
    /// Popped from an empty stack, either "main" or "retain".
    #[error("Stack underflow on the {0} stack.")]
    StackUnderflow(&'static str),

    /// A `[` or `(` without its closing partner.
    #[error("Could not match {open} with a closing {close}.")]
    UnbalancedDelimiter { open: &'static str, close: &'static str },

    /// A `$` prefixed token that isn't `$` followed by digits.
    #[error("Invalid argument token {0}.")]
    InvalidArgumentToken(String),

    /// Argument placeholders that don't start at `$1` or that skip a number.
    #[error("Invalid argument numbering, {0}.")]
    InvalidArgumentNumbering(String),

    #[error("Value {0} is not a number.")]
    NotANumber(String),

    /// Something other than a literal was used as a variable name.
    #[error("Can not assign to {0}.")]
    InvalidAssignmentTarget(String),

    /// A reference that points past the end of the quotation table.
    #[error("Reference &{0} is not in the quotation table.")]
    InvalidReference(usize),

    #[error("Division by zero.")]
    DivisionByZero,

    #[error("Integer overflow in {0}.")]
    ArithmeticOverflow(&'static str),

    #[error("Index {index} out of range of list size {size}.")]
    IndexOutOfRange { index: i64, size: usize },

    #[error("Value {0} is not a list.")]
    NotAList(String),

    #[error("I/O error: {0}")]
    Io(String)
}



/// Any error that occurs during the parsing or execution of a gloom script.
#[derive(Clone)]
pub struct ScriptError
{
    /// What went wrong.
    kind: ErrorKind,

    /// The location in the source text the error occurred, if available.
    location: Option<SourceLocation>,

    /// The words being executed at the time of the error, if available.
    call_stack: Option<CallStack>
}


impl Error for ScriptError
{
}


/// When returned from main, convert the error result to an operating system exit code.
impl Termination for ScriptError
{
    /// Because this type represents an error, the exit code is always FAILURE.
    fn report(self) -> ExitCode
    {
        eprintln!("Error: {}", self);
        ExitCode::FAILURE
    }
}


impl Display for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match &self.location
        {
            Some(location) => write!(f, "{}: {}", location, self.kind)?,
            None => write!(f, "{}", self.kind)?
        }

        if let Some(call_stack) = &self.call_stack
            && !call_stack.is_empty()
        {
            write!(f, "\n\nCall stack\n")?;

            for item in call_stack.iter().rev()
            {
                writeln!(f, "  {}", item)?;
            }
        }

        Ok(())
    }
}


impl Debug for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "{}", self)
    }
}


impl ScriptError
{
    pub fn new(kind: ErrorKind,
               location: Option<SourceLocation>,
               call_stack: Option<CallStack>) -> ScriptError
    {
        ScriptError
            {
                kind,
                location,
                call_stack
            }
    }

    /// Create a new Script Error and wrap it in a Result::Err.
    pub fn new_as_result<T>(kind: ErrorKind,
                            location: Option<SourceLocation>,
                            call_stack: Option<CallStack>) -> Result<T>
    {
        Err(ScriptError::new(kind, location, call_stack))
    }

    /// Attach a call stack to an error that was raised without access to the interpreter.  An
    /// existing call stack is kept as is.
    pub fn with_call_stack(mut self, call_stack: &CallStack) -> ScriptError
    {
        if self.call_stack.is_none()
        {
            self.call_stack = Some(call_stack.clone());
        }

        self
    }

    pub fn kind(&self) -> &ErrorKind
    {
        &self.kind
    }

    /// If available, the location in the source text the error occurred.
    pub fn location(&self) -> &Option<SourceLocation>
    {
        &self.location
    }

    /// If available, the script's call stack at the time of the error.
    pub fn call_stack(&self) -> &Option<CallStack>
    {
        &self.call_stack
    }
}


impl From<std::io::Error> for ScriptError
{
    fn from(error: std::io::Error) -> ScriptError
    {
        ScriptError::new(ErrorKind::Io(error.to_string()), None, None)
    }
}



/// Create a ScriptError stamped with the interpreter's current call stack and wrap it in a
/// Result::Err.
pub fn script_error<T>(interpreter: &dyn Interpreter, kind: ErrorKind) -> Result<T>
{
    let call_stack = interpreter.call_stack().clone();

    ScriptError::new_as_result(kind, None, Some(call_stack))
}
