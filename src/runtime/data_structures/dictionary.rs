use crate::runtime::data_structures::value::Value;
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
};

/// The variable environment of the gloom interpreter.  Maps names to the value they are bound to.
/// Native words and the bootstrap library live here right alongside user definitions, so a script
/// is free to rebind any of them.
///
/// Bound values are stored as given, unevaluated.  They are only executed when the name is looked
/// up.
pub struct Dictionary {
    variables: HashMap<String, Value>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Pretty print the dictionary, one binding per line sorted by name.
impl Display for Dictionary {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let max_size = self.variables.keys().map(|name| name.len()).max().unwrap_or(0);

        writeln!(formatter, "{} variables defined.\n", self.variables.len())?;

        for name in self.names() {
            match &self.variables[name] {
                Value::Intrinsic(info) => writeln!(
                    formatter,
                    "{:width$}  ( {} ) {}",
                    name,
                    info.signature(),
                    info.description(),
                    width = max_size
                )?,

                value => writeln!(formatter, "{:width$}  {}", name, value, width = max_size)?,
            }
        }

        Ok(())
    }
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary {
            variables: HashMap::new(),
        }
    }

    /// Bind a name, replacing any previous binding.
    pub fn insert(&mut self, name: String, value: Value) {
        let _ = self.variables.insert(name, value);
    }

    /// Try to get the value bound to a name.
    pub fn try_get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All bound names in sorted order.
    pub fn names(&self) -> Vec<&String> {
        let mut names: Vec<&String> = self.variables.keys().collect();

        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        lang::source_buffer::SourceLocation,
        runtime::{
            error,
            interpreter::{Interpreter, IntrinsicInfo},
        },
    };
    use std::rc::Rc;

    #[test]
    fn listing_shows_native_word_signatures() {
        let mut dictionary = Dictionary::new();
        let info = IntrinsicInfo::new(
            "+".to_string(),
            SourceLocation::new(),
            "Add the top two values.".to_string(),
            "rhs lhs -- sum".to_string(),
            Rc::new(|_: &mut dyn Interpreter| -> error::Result<()> { Ok(()) }),
        );

        dictionary.insert("+".to_string(), Value::Intrinsic(info));
        dictionary.insert("five".to_string(), Value::literal("5"));

        let listing = dictionary.to_string();

        assert!(listing.starts_with("2 variables defined."));
        assert!(listing.contains("+     ( rhs lhs -- sum ) Add the top two values."));
        assert!(listing.contains("five  5"));
    }
}
