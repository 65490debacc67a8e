use crate::{
    lang::tokenizing::Token,
    runtime::{
        data_structures::value::Value,
        error::{self, ErrorKind, ScriptError},
    },
};

/// The token that stands for no value at all, it is dropped by the parser.
const NULL_TOKEN: &str = "null";

/// Find the index of the delimiter closing the one at the start of the token range.  Nested pairs
/// of the same delimiters are skipped over by depth counting, other delimiters are ignored.
fn find_matched_subsection(
    tokens: &[Token],
    open: &'static str,
    close: &'static str,
) -> error::Result<usize> {
    let mut depth = 0usize;

    for (index, token) in tokens.iter().enumerate() {
        if token.is(open) {
            depth += 1;
        } else if token.is(close) {
            depth -= 1;

            if depth == 0 {
                return Ok(index);
            }
        }
    }

    ScriptError::new_as_result(
        ErrorKind::UnbalancedDelimiter { open, close },
        tokens.first().map(|token| token.location().clone()),
        None,
    )
}

/// Turn a list of tokens into the values of a program.
///
/// A `[ ... ]` section becomes a single nested quotation, a `( ... )` section is a comment and is
/// dropped along with everything in it.  `null` is dropped and every other token is a literal.
/// Nothing is looked up or compiled here.
pub fn parse(tokens: &[Token]) -> error::Result<Vec<Value>> {
    let mut values = Vec::new();
    let mut index = 0;

    while index < tokens.len() {
        let token = &tokens[index];

        match token.text() {
            "[" => {
                let end = index + find_matched_subsection(&tokens[index..], "[", "]")?;

                values.push(Value::Quotation(parse(&tokens[index + 1..end])?));
                index = end;
            }

            "(" => {
                index += find_matched_subsection(&tokens[index..], "(", ")")?;
            }

            NULL_TOKEN => {}

            text => values.push(Value::literal(text)),
        }

        index += 1;
    }

    Ok(values)
}
