use std::{ fs::canonicalize,
           path::{ Path,
                   PathBuf },
           rc::Rc,
           sync::atomic::{ AtomicUsize,
                           Ordering } };
use lazy_static::lazy_static;
use tracing::{ debug, debug_span, trace };
use crate::{ lang::{ parsing::parse,
                     source_buffer::SourceLocation,
                     tokenizing::{ tokenize_from_file,
                                   tokenize_from_source } },
             runtime::{ built_ins::{ base_words::register_base_words,
                                     bootstrap::load_bootstrap_library },
                        data_structures::{ dictionary::Dictionary,
                                           quotation_table::{ argument_count,
                                                              QuotationPtr,
                                                              QuotationTable },
                                           value::Value },
                        error::{ self,
                                 script_error,
                                 ErrorKind },
                        interpreter::{ CallStack,
                                       CodeManagement,
                                       Interpreter,
                                       InterpreterStack,
                                       IntrinsicInfo,
                                       QuotationManagement,
                                       ValueStack,
                                       VariableManagement,
                                       WordHandler } } };



lazy_static!
{
    // Gives every interpreter its own id so their log output can be told apart.
    static ref INSTANCE_COUNTER: AtomicUsize = AtomicUsize::new(0);
}



/// The search paths used to find gloom files.
pub type SearchPaths = Vec<String>;



/// The core interpreter implementation for the gloom language.  Each instance is fully independent,
/// nothing is shared between interpreters.
pub struct GloomInterpreter
{
    /// Used to tag this interpreter's log output.
    id: usize,

    /// The main data stack.
    stack: ValueStack,

    /// The secondary stack, only reachable through `>r` and `r>`.
    retain: ValueStack,


    /// The variable environment, native words and the bootstrap library included.
    dictionary: Dictionary,

    /// Every quotation compiled so far.  References index into this table.
    quotations: QuotationTable,


    /// The names of the variables currently executing.
    call_stack: CallStack,

    /// The search paths used to find gloom files.
    search_paths: SearchPaths
}


impl InterpreterStack for GloomInterpreter
{
    fn stack(&self) -> &ValueStack
    {
        &self.stack
    }

    fn retain_stack(&self) -> &ValueStack
    {
        &self.retain
    }

    fn push(&mut self, value: Value)
    {
        self.stack.push(value);
    }

    fn pop(&mut self) -> error::Result<Value>
    {
        match self.stack.pop()
        {
            Some(value) => Ok(value),
            None        => script_error(self, ErrorKind::StackUnderflow("main"))
        }
    }

    fn pop_as_int(&mut self) -> error::Result<i64>
    {
        let value = self.pop()?;

        match value.as_int()
        {
            Some(number) => Ok(number),
            None         => script_error(self, ErrorKind::NotANumber(value.to_string()))
        }
    }

    fn pop_as_reference(&mut self) -> error::Result<usize>
    {
        let value = self.pop()?;

        match value
        {
            Value::Reference(index) if index < self.quotations.len() => Ok(index),
            Value::Reference(index) => script_error(self, ErrorKind::InvalidReference(index)),
            other => script_error(self, ErrorKind::NotAList(other.to_string()))
        }
    }

    fn require(&self, count: usize) -> error::Result<()>
    {
        if self.stack.len() < count
        {
            script_error(self, ErrorKind::StackUnderflow("main"))?;
        }

        Ok(())
    }

    fn retain_push(&mut self, value: Value)
    {
        self.retain.push(value);
    }

    fn retain_pop(&mut self) -> error::Result<Value>
    {
        match self.retain.pop()
        {
            Some(value) => Ok(value),
            None        => script_error(self, ErrorKind::StackUnderflow("retain"))
        }
    }

    fn reset(&mut self)
    {
        self.stack.clear();
        self.retain.clear();
        self.call_stack.clear();
    }
}


impl QuotationManagement for GloomInterpreter
{
    fn compile(&mut self, elements: Vec<Value>) -> error::Result<usize>
    {
        self.quotations
            .compile(elements)
            .map_err(|error| error.with_call_stack(&self.call_stack))
    }

    fn insert_quotation(&mut self, elements: Vec<Value>) -> usize
    {
        self.quotations.insert(elements)
    }

    fn quotation(&self, index: usize) -> error::Result<QuotationPtr>
    {
        match self.quotations.get(index)
        {
            Some(quotation) => Ok(quotation.clone()),
            None            => script_error(self, ErrorKind::InvalidReference(index))
        }
    }

    fn quotation_count(&self) -> usize
    {
        self.quotations.len()
    }

    fn render(&self, value: &Value) -> String
    {
        self.quotations.render(value)
    }
}


impl CodeManagement for GloomInterpreter
{
    fn run_source(&mut self, path: &str, source: &str) -> error::Result<()>
    {
        let tokens = tokenize_from_source(path, source);
        self.run_tokens(path, &tokens)
    }

    fn run_file(&mut self, path: &str) -> error::Result<()>
    {
        let full_path = self.find_file(path)?;
        let tokens = tokenize_from_file(&full_path)?;

        // Files run by this one are searched for next to it first.
        self.add_search_path_for_file(&full_path);

        let result = self.run_tokens(&full_path, &tokens);

        self.drop_search_path();
        result
    }

    fn execute_quotation(&mut self, index: usize) -> error::Result<()>
    {
        let quotation = self.quotation(index)?;

        // The count is worked out fresh each time, the compiled template is never touched.
        let count = match argument_count(&quotation)
            {
                Ok(count) => count,
                Err(kind) => return script_error(self, kind)
            };

        self.require(count)?;

        // The first value popped binds to $1, the second to $2 and so on.
        let mut arguments = Vec::with_capacity(count);

        for _ in 0..count
        {
            arguments.push(self.pop()?);
        }

        trace!(reference = index, arguments = count, depth = self.stack.len(), "executing quotation");

        let body: Vec<Value> = quotation.iter()
                                        .map(|element|
                                            {
                                                match element
                                                {
                                                    Value::Argument(number) => arguments[number - 1].clone(),
                                                    other => other.clone()
                                                }
                                            })
                                        .collect();

        for element in body.iter()
        {
            element.evaluate(self)?;
        }

        Ok(())
    }

    fn evaluate_value(&mut self, value: &Value) -> error::Result<()>
    {
        value.evaluate(self)
    }

    fn execute_value(&mut self, value: &Value) -> error::Result<()>
    {
        value.execute(self)
    }

    fn evaluate_top(&mut self) -> error::Result<()>
    {
        let value = self.pop()?;
        self.execute_value(&value)
    }
}


impl VariableManagement for GloomInterpreter
{
    fn define_variable(&mut self, name: String, value: Value)
    {
        let rendered = self.render(&value);

        debug!(interpreter = self.id, name = %name, value = %rendered, "assigning variable");
        self.dictionary.insert(name, value);
    }

    fn find_variable(&self, name: &str) -> Option<Value>
    {
        self.dictionary.try_get(name).cloned()
    }

    fn add_word(&mut self,
                location: SourceLocation,
                name: String,
                handler: Rc<WordHandler>,
                description: String,
                signature: String)
    {
        let info = IntrinsicInfo::new(name.clone(), location, description, signature, handler);

        trace!(interpreter = self.id, name = %name, location = %info.location(), "registering native word");

        self.dictionary.insert(name, Value::Intrinsic(info));
    }

    fn dictionary(&self) -> &Dictionary
    {
        &self.dictionary
    }

    fn call_stack(&self) -> &CallStack
    {
        &self.call_stack
    }

    fn call_stack_push(&mut self, name: String)
    {
        self.call_stack.push(name);
    }

    fn call_stack_pop(&mut self)
    {
        let _ = self.call_stack.pop();
    }
}


impl Interpreter for GloomInterpreter
{
}


// Helper methods for running code and finding files.
impl GloomInterpreter
{
    /// Parse the tokens and evaluate the values in order as a top level program.  Argument tokens
    /// are only meaningful inside quotations so they are left as plain literals here.
    fn run_tokens(&mut self, path: &str, tokens: &[crate::lang::tokenizing::Token]) -> error::Result<()>
    {
        let _span = debug_span!("run", interpreter = self.id, path = path).entered();

        let program = parse(tokens)?;

        debug!(values = program.len(), "parsed gloom code");

        for value in program.iter()
        {
            self.evaluate_value(value)?;
        }

        Ok(())
    }

    /// Add a new path to the search path list.  The path must exist.
    pub fn add_search_path(&mut self, path: &str) -> error::Result<()>
    {
        if !Path::new(path).is_dir()
        {
            script_error(self, ErrorKind::Io(format!("Could not append search path {}.", path)))?;
        }

        self.search_paths.push(path.to_string());
        Ok(())
    }

    fn add_search_path_for_file(&mut self, file_path: &str)
    {
        let parent = Path::new(file_path).parent()
                                         .map(|parent| parent.to_string_lossy().to_string())
                                         .unwrap_or_default();

        self.search_paths.push(parent);
    }

    fn drop_search_path(&mut self)
    {
        let _ = self.search_paths.pop();
    }

    pub fn search_paths(&self) -> &SearchPaths
    {
        &self.search_paths
    }

    /// Find a file, either as given or relative to one of the search paths, newest path first.
    pub fn find_file(&self, path: &str) -> error::Result<String>
    {
        let candidates = std::iter::once(PathBuf::from(path))
            .chain(self.search_paths.iter().rev().map(|directory| PathBuf::from(directory).join(path)));

        for candidate in candidates
        {
            if candidate.is_file()
            {
                let canonical = canonicalize(candidate)?;

                return Ok(canonical.to_string_lossy().to_string());
            }
        }

        script_error(self, ErrorKind::Io(format!("File {} not found.", path)))
    }
}


impl GloomInterpreter
{
    /// Create an interpreter with the native words registered and the bootstrap library loaded.
    pub fn new() -> GloomInterpreter
    {
        let mut interpreter = GloomInterpreter::new_bare();

        register_base_words(&mut interpreter);

        if let Err(error) = load_bootstrap_library(&mut interpreter)
        {
            panic!("The bootstrap library failed to load: {}", error);
        }

        interpreter
    }

    /// Create an interpreter with nothing defined at all.
    pub fn new_bare() -> GloomInterpreter
    {
        GloomInterpreter
            {
                id: INSTANCE_COUNTER.fetch_add(1, Ordering::SeqCst),

                stack: Vec::with_capacity(20),
                retain: Vec::new(),

                dictionary: Dictionary::new(),
                quotations: QuotationTable::new(),

                call_stack: CallStack::with_capacity(40),
                search_paths: SearchPaths::new()
            }
    }
}


impl Default for GloomInterpreter
{
    fn default() -> Self
    {
        Self::new()
    }
}
