
use std::fmt::{ self,
                Display,
                Formatter };
use crate::runtime::{ error::{ self,
                               script_error,
                               ErrorKind },
                      interpreter::{ Interpreter,
                                     IntrinsicInfo } };



/// The literal used to represent true.  All bits set.
pub const GLOOM_TRUE: &str = "-1";

/// The literal used to represent false.
pub const GLOOM_FALSE: &str = "0";



/// Core value enumeration used by the gloom interpreter.  Every element of a parsed program and
/// every item on the stacks is one of these.
#[derive(Clone)]
pub enum Value
{
    /// A raw text token.  Either the name of a variable or plain data, numbers included.
    Literal(String),

    /// A freshly parsed, not yet compiled, bracketed block of code.
    Quotation(Vec<Value>),

    /// The index of a compiled quotation in the interpreter's quotation table.
    Reference(usize),

    /// A native word.
    Intrinsic(IntrinsicInfo),

    /// A `$n` placeholder inside a compiled quotation, replaced by the n-th popped value when the
    /// quotation is executed.
    Argument(usize)
}


/// Convert an arbitrary data type to a Value.
pub trait ToValue
{
    fn to_value(&self) -> Value;
}


impl ToValue for i64
{
    fn to_value(&self) -> Value
    {
        Value::Literal(self.to_string())
    }
}


impl ToValue for usize
{
    fn to_value(&self) -> Value
    {
        Value::Literal(self.to_string())
    }
}


/// Booleans become the two reserved literals.
impl ToValue for bool
{
    fn to_value(&self) -> Value
    {
        Value::literal(if *self { GLOOM_TRUE } else { GLOOM_FALSE })
    }
}


impl ToValue for &str
{
    fn to_value(&self) -> Value
    {
        Value::literal(self)
    }
}


/// Intrinsics compare by name, everything else structurally.
impl PartialEq for Value
{
    fn eq(&self, other: &Value) -> bool
    {
        match ( self, other )
        {
            ( Value::Literal(a),   Value::Literal(b) )   => a == b,
            ( Value::Quotation(a), Value::Quotation(b) ) => a == b,
            ( Value::Reference(a), Value::Reference(b) ) => a == b,
            ( Value::Intrinsic(a), Value::Intrinsic(b) ) => a.name() == b.name(),
            ( Value::Argument(a),  Value::Argument(b) )  => a == b,
            _ => false
        }
    }
}


impl Display for Value
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match self
        {
            Value::Literal(text) => write!(f, "{}", text),

            Value::Quotation(elements) =>
                {
                    write!(f, "[")?;

                    for element in elements
                    {
                        write!(f, " {}", element)?;
                    }

                    write!(f, " ]")
                },

            Value::Reference(index) => write!(f, "&{}", index),
            Value::Intrinsic(info) => write!(f, "<{}>", info.name()),
            Value::Argument(number) => write!(f, "${}", number)
        }
    }
}


impl fmt::Debug for Value
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "{}", self)
    }
}


impl Value
{
    pub fn literal(text: &str) -> Value
    {
        Value::Literal(text.to_string())
    }

    pub fn is_reference(&self) -> bool
    {
        matches!(self, Value::Reference(_))
    }

    /// Is this a literal that reads as an integer?
    pub fn is_int(&self) -> bool
    {
        self.as_int().is_some()
    }

    /// Is this one of the two truth literals?
    pub fn is_bool(&self) -> bool
    {
        matches!(self.as_int(), Some(-1) | Some(0))
    }

    /// Read a literal as a signed integer, if it is one.
    pub fn as_int(&self) -> Option<i64>
    {
        match self
        {
            Value::Literal(text) => parse_integer(text),
            _ => None
        }
    }

    /// The name of the value's type as reported by the `type` word.
    pub fn type_name(&self) -> &'static str
    {
        match self
        {
            Value::Reference(_) | Value::Quotation(_) => "list",
            _ if self.is_int() => "int",
            _ => "string"
        }
    }

    /// Evaluate the value for its contribution to the stack.
    ///
    /// A literal bound to a variable executes the bound value, otherwise the literal pushes
    /// itself.  A parsed quotation is compiled and its reference pushed, but its body is not run.
    /// References and argument placeholders are plain data and push themselves.  Intrinsics run.
    pub fn evaluate(&self, interpreter: &mut dyn Interpreter) -> error::Result<()>
    {
        match self
        {
            Value::Literal(name) =>
                {
                    match interpreter.find_variable(name)
                    {
                        Some(bound) =>
                            {
                                interpreter.call_stack_push(name.clone());

                                let result = bound.execute(interpreter);

                                interpreter.call_stack_pop();
                                result
                            },

                        None =>
                            {
                                interpreter.push(self.clone());
                                Ok(())
                            }
                    }
                },

            Value::Quotation(elements) =>
                {
                    let index = interpreter.compile(elements.clone())?;

                    interpreter.push(Value::Reference(index));
                    Ok(())
                },

            Value::Reference(index) =>
                {
                    if *index >= interpreter.quotation_count()
                    {
                        script_error(interpreter, ErrorKind::InvalidReference(*index))?;
                    }

                    interpreter.push(self.clone());
                    Ok(())
                },

            Value::Intrinsic(info) => (info.handler())(interpreter),

            Value::Argument(_) =>
                {
                    interpreter.push(self.clone());
                    Ok(())
                }
        }
    }

    /// Run the value as a procedure.  A reference executes its compiled quotation, binding
    /// arguments from the stack.  Anything else is simply evaluated.
    pub fn execute(&self, interpreter: &mut dyn Interpreter) -> error::Result<()>
    {
        match self
        {
            Value::Reference(index) => interpreter.execute_quotation(*index),
            _ => self.evaluate(interpreter)
        }
    }
}



/// Parse a signed integer, honouring the usual radix prefixes.  `0x` for hexadecimal, `0o` or a
/// bare leading `0` for octal and `0b` for binary.  Underscores may separate digits.
pub fn parse_integer(text: &str) -> Option<i64>
{
    let ( negative, unsigned ) =
        match text.as_bytes().first()
        {
            Some(b'-') => ( true, &text[1..] ),
            Some(b'+') => ( false, &text[1..] ),
            _ => ( false, text )
        };

    let lower = unsigned.to_ascii_lowercase();

    let ( radix, digits ) =
        if let Some(rest) = lower.strip_prefix("0x")
        {
            ( 16, rest )
        }
        else if let Some(rest) = lower.strip_prefix("0b")
        {
            ( 2, rest )
        }
        else if let Some(rest) = lower.strip_prefix("0o")
        {
            ( 8, rest )
        }
        else if lower.len() > 1 && lower.starts_with('0')
        {
            ( 8, &lower[1..] )
        }
        else
        {
            ( 10, lower.as_str() )
        };

    if digits.is_empty()
        || !digits.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    let digits = digits.replace('_', "");

    // Parse with the sign attached so that i64::MIN is reachable.
    let signed = if negative { format!("-{}", digits) } else { digits };

    i64::from_str_radix(&signed, radix).ok()
}


#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn parses_decimal_integers()
    {
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("-7"), Some(-7));
        assert_eq!(parse_integer("+7"), Some(7));
        assert_eq!(parse_integer("0"), Some(0));
        assert_eq!(parse_integer("1_000"), Some(1000));
    }

    #[test]
    fn parses_radix_prefixes()
    {
        assert_eq!(parse_integer("0x1F"), Some(31));
        assert_eq!(parse_integer("-0x10"), Some(-16));
        assert_eq!(parse_integer("0b101"), Some(5));
        assert_eq!(parse_integer("0o17"), Some(15));
        assert_eq!(parse_integer("017"), Some(15));
        assert_eq!(parse_integer("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn rejects_non_numbers()
    {
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer("0x"), None);
        assert_eq!(parse_integer("09"), None);
        assert_eq!(parse_integer("1__0"), None);
        assert_eq!(parse_integer("\"yes\""), None);
        assert_eq!(parse_integer("9223372036854775808"), None);
    }

    #[test]
    fn type_names()
    {
        assert_eq!(Value::literal("12").type_name(), "int");
        assert_eq!(Value::literal("hello").type_name(), "string");
        assert_eq!(Value::Reference(0).type_name(), "list");
        assert!(Value::literal("-1").is_bool());
        assert!(!Value::literal("2").is_bool());
    }

    #[test]
    fn display_forms()
    {
        let quotation = Value::Quotation(vec![ Value::literal("a"), Value::Argument(1) ]);

        assert_eq!(quotation.to_string(), "[ a $1 ]");
        assert_eq!(Value::Reference(3).to_string(), "&3");
    }
}
