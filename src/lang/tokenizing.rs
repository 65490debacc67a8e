use crate::{
    lang::source_buffer::{SourceBuffer, SourceLocation},
    runtime::error::{self, ErrorKind, ScriptError},
};
use std::{
    fmt::{self, Debug, Display, Formatter},
    fs::read_to_string,
};

/// A single whitespace delimited piece of gloom source text.  There is no quoting or escaping in
/// the language so every token is just the raw text between runs of whitespace.
///
/// The token also holds the location in the original source where it was found.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    location: SourceLocation,
    text: String,
}

/// A list of tokens found in the source text.
pub type TokenList = Vec<Token>;

/// Print just the token's text.
impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// For debugging we include where the token was found.
impl Debug for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.text)
    }
}

impl Token {
    pub fn new(location: SourceLocation, text: String) -> Token {
        Token { location, text }
    }

    /// Get the token's location in the original source text.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// The raw text of the token.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Does this token's text match the given delimiter or keyword exactly?
    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }
}

/// Skip over whitespace in the text.  Stopping only at either the end of the buffer or the next
/// non-whitespace character.
fn skip_whitespace(buffer: &mut SourceBuffer) {
    while let Some(next) = buffer.peek_next() {
        if !next.is_whitespace() {
            break;
        }

        let _ = buffer.next_char();
    }
}

/// Pull text out of the buffer until we hit a whitespace character.  Tokens can contain any
/// character except whitespace.
fn process_until_whitespace(buffer: &mut SourceBuffer) -> Token {
    let location = buffer.location().clone();
    let mut text = String::new();

    while let Some(next) = buffer.peek_next() {
        if next.is_whitespace() {
            break;
        }

        let _ = buffer.next_char();
        text.push(next);
    }

    Token::new(location, text)
}

/// Tokenize gloom source held in a string.  The path is only used to tag the token locations.
pub fn tokenize_from_source(path: &str, source: &str) -> TokenList {
    let mut buffer = SourceBuffer::new(path, source);
    let mut token_list = TokenList::new();

    loop {
        skip_whitespace(&mut buffer);

        if buffer.peek_next().is_none() {
            break;
        }

        token_list.push(process_until_whitespace(&mut buffer));
    }

    token_list
}

/// Load the code from a file and then tokenize it.
pub fn tokenize_from_file(path: &str) -> error::Result<TokenList> {
    match read_to_string(path) {
        Ok(source) => Ok(tokenize_from_source(path, &source)),
        Err(error) => ScriptError::new_as_result(
            ErrorKind::Io(format!("Could not read file {}: {}", path, error)),
            None,
            None,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &TokenList) -> Vec<&str> {
        tokens.iter().map(|token| token.text()).collect()
    }

    #[test]
    fn empty_source_has_no_tokens() {
        assert!(tokenize_from_source("<test>", "").is_empty());
        assert!(tokenize_from_source("<test>", " \t\n  ").is_empty());
    }

    #[test]
    fn splits_on_runs_of_whitespace() {
        let tokens = tokenize_from_source("<test>", "  dup [ $1\t$1 ]\n\n!  ");

        assert_eq!(texts(&tokens), vec!["dup", "[", "$1", "$1", "]", "!"]);
    }

    #[test]
    fn no_quoting_rules() {
        let tokens = tokenize_from_source("<test>", "\"yes\" \"two words\"");

        assert_eq!(texts(&tokens), vec!["\"yes\"", "\"two", "words\""]);
    }

    #[test]
    fn tokens_remember_where_they_started() {
        let tokens = tokenize_from_source("<test>", "1 2\n  +");

        assert_eq!(tokens[0].location().line(), 1);
        assert_eq!(tokens[0].location().column(), 1);
        assert_eq!(tokens[1].location().column(), 3);
        assert_eq!(tokens[2].location().line(), 2);
        assert_eq!(tokens[2].location().column(), 3);
        assert_eq!(tokens[2].location().path(), "<test>");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = tokenize_from_file("/definitely/not/here.gl").unwrap_err();

        assert!(matches!(error.kind(), ErrorKind::Io(_)));
    }
}
