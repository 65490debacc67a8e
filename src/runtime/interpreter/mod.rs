use crate::{
    lang::source_buffer::SourceLocation,
    runtime::{
        data_structures::{dictionary::Dictionary, quotation_table::QuotationPtr, value::Value},
        error,
    },
};
use std::rc::Rc;

pub mod gloom_interpreter;

/// Names of the variables currently being executed, innermost last.  Used to help track errors.
pub type CallStack = Vec<String>;

/// The main and retain stacks of values managed by the interpreter.
pub type ValueStack = Vec<Value>;

/// Trait for managing the interpreter's main and retain stacks.  Intended to be called by native
/// words.
pub trait InterpreterStack {
    /// The main data stack, bottom first.
    fn stack(&self) -> &ValueStack;

    /// The retain stack, bottom first.
    fn retain_stack(&self) -> &ValueStack;

    /// Push a value onto the main stack.
    fn push(&mut self, value: Value);

    /// Pop a value from the main stack.  If the stack is empty a stack underflow error is
    /// returned.
    fn pop(&mut self) -> error::Result<Value>;

    /// Pop the top value and read it as an integer.  Fails with underflow on an empty stack or
    /// with not-a-number if the value isn't an integer literal.
    fn pop_as_int(&mut self) -> error::Result<i64>;

    /// Pop the top value as a quotation reference.  Fails if the value is anything else.
    fn pop_as_reference(&mut self) -> error::Result<usize>;

    /// Fail with a stack underflow, without touching the stack, unless at least count values are
    /// on the main stack.
    fn require(&self, count: usize) -> error::Result<()>;

    /// Move a value onto the retain stack.
    fn retain_push(&mut self, value: Value);

    /// Pop a value from the retain stack.  If the stack is empty a stack underflow error is
    /// returned.
    fn retain_pop(&mut self) -> error::Result<Value>;

    /// Clear both stacks.
    fn reset(&mut self);
}

/// Trait for managing the quotation table.
pub trait QuotationManagement {
    /// Compile a freshly parsed quotation into the table and return its reference.
    fn compile(&mut self, elements: Vec<Value>) -> error::Result<usize>;

    /// Append already compiled elements as a new table entry and return its reference.
    fn insert_quotation(&mut self, elements: Vec<Value>) -> usize;

    /// Get the elements of a compiled quotation.  Fails if the reference is out of bounds.
    fn quotation(&self, index: usize) -> error::Result<QuotationPtr>;

    /// How many quotations have been compiled so far.
    fn quotation_count(&self) -> usize;

    /// Get the elements a value stands for.  A reference is its quotation's elements, anything
    /// else is a list of one.
    fn elements_of(&self, value: Value) -> error::Result<Vec<Value>> {
        match value {
            Value::Reference(index) => Ok(self.quotation(index)?.to_vec()),
            other => Ok(vec![other]),
        }
    }

    /// Write a value out as source text with references expanded.
    fn render(&self, value: &Value) -> String;
}

/// Trait for parsing and running gloom code.
pub trait CodeManagement {
    /// Tokenize, parse and evaluate a chunk of source text as a top level program.  Results are
    /// left on the main stack.  The path is a tag for error locations, such as "\<repl\>".
    fn run_source(&mut self, path: &str, source: &str) -> error::Result<()>;

    /// Run a chunk of source text tagged as "\<string\>".
    fn run_string(&mut self, source: &str) -> error::Result<()> {
        self.run_source("<string>", source)
    }

    /// Find a file, read it and run its contents.
    fn run_file(&mut self, path: &str) -> error::Result<()>;

    /// Execute a compiled quotation.  The arguments it needs are popped, bound to its placeholders
    /// and each element is then evaluated in order.  The first failure aborts the rest.
    fn execute_quotation(&mut self, index: usize) -> error::Result<()>;

    /// Evaluate a value for its contribution to the stack.  Bound names run, quotations compile and
    /// everything else pushes itself.
    fn evaluate_value(&mut self, value: &Value) -> error::Result<()>;

    /// Run a value as a procedure.  References execute their quotation, anything else is
    /// evaluated.
    fn execute_value(&mut self, value: &Value) -> error::Result<()>;

    /// Pop the top of the stack and execute it.  This is the `eval` word and how control flow
    /// words run their bodies.
    fn evaluate_top(&mut self) -> error::Result<()>;
}

/// Definition of a native word handler.  Can be a closure or a plain Rust function.
pub type WordHandler = dyn Fn(&mut dyn Interpreter) -> error::Result<()>;

/// Information about a native word.  Once created it's fields are read-only and accessed by member
/// methods.
#[derive(Clone)]
pub struct IntrinsicInfo {
    name: String,
    location: SourceLocation,
    description: String,
    signature: String,
    handler: Rc<WordHandler>,
}

impl IntrinsicInfo {
    pub fn new(
        name: String,
        location: SourceLocation,
        description: String,
        signature: String,
        handler: Rc<WordHandler>,
    ) -> IntrinsicInfo {
        IntrinsicInfo {
            name,
            location,
            description,
            signature,
            handler,
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    /// Where in the Rust source the word was registered.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn description(&self) -> &String {
        &self.description
    }

    /// The word's stack signature, for example `a b -- c`.
    pub fn signature(&self) -> &String {
        &self.signature
    }

    pub fn handler(&self) -> Rc<WordHandler> {
        self.handler.clone()
    }
}

/// Register a native word with the interpreter.
///
/// Required parameters are, the interpreter instance to register with.  The name of the word.  The
/// handler to execute for the word.  A simple description of the word.  As well as the word's
/// stack signature.
#[macro_export]
macro_rules! add_native_word {
    (
        $interpreter:expr ,
        $name:expr ,
        $function:expr ,
        $description:expr ,
        $signature:expr
    ) => {{
        use std::rc::Rc;

        $interpreter.add_word(
            $crate::location_here!(),
            $name.to_string(),
            Rc::new($function),
            $description.to_string(),
            $signature.to_string(),
        );
    }};
}

/// Trait for managing the variable environment.
pub trait VariableManagement {
    /// Bind a name to a value, unevaluated.
    fn define_variable(&mut self, name: String, value: Value);

    /// Get a copy of the value bound to a name.
    fn find_variable(&self, name: &str) -> Option<Value>;

    /// Register a native word under a name.
    fn add_word(
        &mut self,
        location: SourceLocation,
        name: String,
        handler: Rc<WordHandler>,
        description: String,
        signature: String,
    );

    /// The variable environment.
    fn dictionary(&self) -> &Dictionary;

    /// The names of the variables being executed.
    fn call_stack(&self) -> &CallStack;

    fn call_stack_push(&mut self, name: String);

    fn call_stack_pop(&mut self);
}

/// Core interpreter trait, bringing together stack, quotation, code and variable management.
pub trait Interpreter:
    InterpreterStack + QuotationManagement + CodeManagement + VariableManagement
{
}
