use crate::runtime::{
    data_structures::value::Value,
    error::{self, ErrorKind, ScriptError},
};
use std::rc::Rc;
use tracing::debug;

/// The elements of a compiled quotation.  Shared so that executing a quotation never has to copy
/// the template out of the table.
pub type QuotationPtr = Rc<[Value]>;

/// The append-only arena of compiled quotations.  A reference is just an index into this table and
/// stays valid for the lifetime of the interpreter, entries are never removed, reused or modified.
#[derive(Default)]
pub struct QuotationTable {
    quotations: Vec<QuotationPtr>,
}

impl QuotationTable {
    pub fn new() -> QuotationTable {
        QuotationTable {
            quotations: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.quotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuotationPtr> {
        self.quotations.get(index)
    }

    /// Append already compiled elements as a new entry and return its reference.
    pub fn insert(&mut self, elements: Vec<Value>) -> usize {
        self.quotations.push(elements.into());
        self.quotations.len() - 1
    }

    /// Compile a freshly parsed quotation into the table.
    ///
    /// Nested quotations are compiled first and replaced by their references, `$n` literals become
    /// argument placeholders.  The rewritten quotation is appended and its reference returned.
    pub fn compile(&mut self, elements: Vec<Value>) -> error::Result<usize> {
        let mut compiled = Vec::with_capacity(elements.len());

        for element in elements {
            let element = match element {
                Value::Quotation(nested) => Value::Reference(self.compile(nested)?),

                Value::Literal(text) => match argument_token(&text) {
                    Ok(Some(number)) => Value::Argument(number),
                    Ok(None) => Value::Literal(text),
                    Err(kind) => return ScriptError::new_as_result(kind, None, None),
                },

                other => other,
            };

            compiled.push(element);
        }

        let index = self.insert(compiled);

        let rendered = self.render(&Value::Reference(index));
        debug!(reference = index, quotation = %rendered, "compiled quotation");

        Ok(index)
    }

    /// Write a value out as source text, expanding references into the quotations they refer to.
    pub fn render(&self, value: &Value) -> String {
        match value {
            Value::Reference(index) => match self.get(*index) {
                Some(elements) => {
                    let mut text = String::from("[");

                    for element in elements.iter() {
                        text.push(' ');
                        text.push_str(&self.render(element));
                    }

                    text.push_str(" ]");
                    text
                }

                None => value.to_string(),
            },

            _ => value.to_string(),
        }
    }
}

/// Check a `$` prefixed literal.  Returns the argument number for `$<digits>`, None for literals
/// that aren't argument tokens at all.
fn argument_token(text: &str) -> Result<Option<usize>, ErrorKind> {
    let Some(digits) = text.strip_prefix('$') else {
        return Ok(None);
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ErrorKind::InvalidArgumentToken(text.to_string()));
    }

    digits
        .parse::<usize>()
        .map(Some)
        .map_err(|_| ErrorKind::InvalidArgumentToken(text.to_string()))
}

/// How many arguments a compiled quotation pops when executed.
///
/// The placeholders present must number contiguously from `$1`, repeats are fine.  A quotation
/// without placeholders takes no arguments.
pub fn argument_count(elements: &[Value]) -> Result<usize, ErrorKind> {
    let mut numbers: Vec<usize> = elements
        .iter()
        .filter_map(|element| match element {
            Value::Argument(number) => Some(*number),
            _ => None,
        })
        .collect();

    if numbers.is_empty() {
        return Ok(0);
    }

    numbers.sort_unstable();

    if numbers[0] != 1 {
        return Err(ErrorKind::InvalidArgumentNumbering(format!(
            "arguments start at $1 but found ${}",
            numbers[0]
        )));
    }

    let mut last = 0;

    for number in numbers {
        if number != last && number != last + 1 {
            return Err(ErrorKind::InvalidArgumentNumbering(format!(
                "missing argument ${}",
                last + 1
            )));
        }

        last = number;
    }

    Ok(last)
}
