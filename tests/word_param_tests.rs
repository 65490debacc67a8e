// Parameterized word tests using test-case.
// Each case runs a fresh interpreter over a line of gloom and checks the main stack, bottom first.

use gloom::{CodeManagement, ErrorKind, GloomInterpreter, InterpreterStack, QuotationManagement};
use gloom::error::Result;
use std::mem::discriminant;
use test_case::test_case;

fn eval_and_stack(code: &str) -> Result<Vec<String>> {
    let mut interpreter = GloomInterpreter::new();

    interpreter.run_string(code)?;

    Ok(interpreter.stack().iter().map(|value| interpreter.render(value)).collect())
}

// Arithmetic, the top of the stack is the left hand side.
#[test_case("3 4 +", &["7"]; "add")]
#[test_case("10 3 -", &["-7"]; "subtract top minus second")]
#[test_case("3 10 -", &["7"]; "subtract")]
#[test_case("3 4 *", &["12"]; "multiply")]
#[test_case("3 12 /", &["4"]; "divide")]
#[test_case("2 -7 /", &["-3"]; "divide truncates")]
#[test_case("5 13 math.mod", &["3"]; "modulo")]
#[test_case("5 -7 %", &["3"]; "modulo of negative is positive")]
#[test_case("-5 7 %", &["-3"]; "modulo takes divisor sign")]
#[test_case("9223372036854775807 5 %", &["5"]; "modulo by the largest divisor")]
#[test_case("-1 -9223372036854775808 %", &["0"]; "modulo of the smallest int by minus one")]
#[test_case("0x10 1 +", &["17"]; "hex literal")]
#[test_case("0b11 0o7 +", &["10"]; "binary and octal literals")]
#[test_case("1_000 1 +", &["1001"]; "underscore separators")]
#[test_case("3 5 >", &["-1"]; "greater true")]
#[test_case("5 3 >", &["0"]; "greater false")]
#[test_case("4 4 >", &["0"]; "greater for equal")]
// Bootstrap comparisons.
#[test_case("5 3 <", &["-1"]; "less true")]
#[test_case("3 5 <", &["0"]; "less false")]
#[test_case("4 4 <", &["0"]; "less for equal")]
#[test_case("3 5 >=", &["-1"]; "greater equal true")]
#[test_case("4 4 >=", &["-1"]; "greater equal for equal")]
#[test_case("5 3 >=", &["0"]; "greater equal false")]
#[test_case("5 3 <=", &["-1"]; "less equal true")]
#[test_case("4 4 <=", &["-1"]; "less equal for equal")]
#[test_case("3 5 <=", &["0"]; "less equal false")]
#[test_case("4 4 =", &["-1"]; "equal true")]
#[test_case("4 5 =", &["0"]; "equal false")]
#[test_case("4 5 !=", &["-1"]; "not equal true")]
#[test_case("4 4 !=", &["0"]; "not equal false")]
// Bootstrap booleans.
#[test_case("t not", &["0"]; "not true")]
#[test_case("f not", &["-1"]; "not false")]
#[test_case("t t and", &["-1"]; "and true true")]
#[test_case("t f and", &["0"]; "and true false")]
#[test_case("f t and", &["0"]; "and false true")]
#[test_case("f f and", &["0"]; "and false false")]
#[test_case("t t or", &["-1"]; "or true true")]
#[test_case("t f or", &["-1"]; "or true false")]
#[test_case("f t or", &["-1"]; "or false true")]
#[test_case("f f or", &["0"]; "or false false")]
#[test_case("t t nand", &["0"]; "nand true true")]
#[test_case("t f nand", &["-1"]; "nand true false")]
#[test_case("f f nor", &["-1"]; "nor false false")]
#[test_case("t f nor", &["0"]; "nor true false")]
#[test_case("t f xor", &["-1"]; "xor true false")]
#[test_case("t t xor", &["0"]; "xor true true")]
#[test_case("f f xor", &["0"]; "xor false false")]
#[test_case("t t xnor", &["-1"]; "xnor true true")]
#[test_case("t f xnor", &["0"]; "xnor true false")]
// Bootstrap stack words.
#[test_case("5 dup +", &["10"]; "dup then add")]
#[test_case("1 2 dup", &["1", "2", "2"]; "dup")]
#[test_case("1 2 over", &["1", "2", "1"]; "over")]
#[test_case("1 2 swap", &["2", "1"]; "swap")]
#[test_case("1 2 drop", &["1"]; "drop")]
#[test_case("[ 1 ] drop", &[]; "drop a list")]
#[test_case("[ 1 2 ] dup", &["[ 1 2 ]", "[ 1 2 ]"]; "dup a list")]
#[test_case("1 2 >r 3 r>", &["1", "3", "2"]; "retain round trip")]
// Bootstrap math.
#[test_case("2 10 math.pow", &["1024"]; "power")]
#[test_case("3 3 ^", &["27"]; "power alias")]
#[test_case("5 0 ^", &["1"]; "power of zero")]
#[test_case("3 7 math.max", &["7"]; "max of deeper smaller")]
#[test_case("7 3 math.max", &["7"]; "max of top smaller")]
#[test_case("3 7 math.min", &["3"]; "min of deeper smaller")]
#[test_case("7 3 math.min", &["3"]; "min of top smaller")]
// Parsing at the top level.
#[test_case("1 ( skip [ this ) 2", &["1", "2"]; "comment dropped")]
#[test_case("null 1 null", &["1"]; "null dropped")]
#[test_case("1 ] 2", &["1", "]", "2"]; "stray closer is a literal")]
#[test_case("$1", &["$1"]; "top level argument token is a literal")]
#[test_case("[ $1 $3 ]", &["[ $1 $3 ]"]; "argument numbering is checked on invocation")]
// Control flow.
#[test_case("t [ \"yes\" ] [ \"no\" ] if", &["\"yes\""]; "if true")]
#[test_case("f [ \"yes\" ] [ \"no\" ] if", &["\"no\""]; "if false")]
#[test_case("5 [ \"yes\" ] [ \"no\" ] if", &[]; "if neither")]
#[test_case("[ 3 5 > ] [ 1 ] [ 2 ] if", &["1"]; "if runs a quoted test")]
#[test_case("t 1 2 if", &["1"]; "if with plain branches")]
#[test_case("[ 1 ] 3 rep", &["1", "1", "1"]; "rep")]
#[test_case("0 [ 1 + ] 5 rep", &["5"]; "rep accumulates")]
#[test_case("[ 1 ] 0 rep", &[]; "rep zero times")]
#[test_case("[ 1 ] -2 rep", &[]; "rep negative times")]
#[test_case("0 [ 1 + dup 3 = ] loop", &["3"]; "loop until true")]
#[test_case("[ 3 4 + ] eval", &["7"]; "eval a list")]
#[test_case("6 [ $1 $1 * ] eval", &["36"]; "eval binds arguments")]
#[test_case("3 eval", &["3"]; "eval a literal")]
// Variables.
#[test_case("x 5 ! x x +", &["10"]; "define a value")]
#[test_case("sq [ $1 $1 * ] ! 7 sq", &["49"]; "define a word")]
#[test_case("[ a b ] [ 1 2 ] ! a b", &["1", "2"]; "define pairwise")]
#[test_case("[ a ] [ 1 2 ] ! a", &["1", "2"]; "single name takes the whole body")]
#[test_case("[ + ] [ $1 $2 * ] ! 3 4 +", &["12"]; "rebind a native word")]
#[test_case(
    "fact [ $1 $1 1 swap > [ $1 -1 + fact $1 * ] [ drop 1 ] if ] ! 5 fact",
    &["120"];
    "recursive definition"
)]
// Lists.
#[test_case("[ 1 2 3 ] size", &["3"]; "size")]
#[test_case("[ ] size", &["0"]; "size of empty")]
#[test_case("1 [ a b c ] get", &["b"]; "get")]
#[test_case("0 [ [ 1 ] ] get", &["[ 1 ]"]; "get a nested list")]
#[test_case("x 1 [ a b c ] set", &["[ a x c ]"]; "set")]
#[test_case("l [ [ a b c ] ] ! x 1 l set l", &["[ a x c ]", "[ a b c ]"]; "set leaves source alone")]
#[test_case("x 0 [ a b c ] insert", &["[ x a b c ]"]; "insert at start")]
#[test_case("x 3 [ a b c ] insert", &["[ a b c x ]"]; "insert at end")]
#[test_case("1 [ a b c ] remove", &["[ a c ]", "b"]; "remove")]
#[test_case("[ 1 2 ] [ 3 ] append", &["[ 1 2 3 ]"]; "append")]
#[test_case("[ 1 2 ] copy", &["[ 1 2 ]"]; "copy")]
// Types.
#[test_case("5 type", &["int"]; "type of int")]
#[test_case("0x1f type", &["int"]; "type of hex int")]
#[test_case("abc type", &["string"]; "type of string")]
#[test_case("[ ] type", &["list"]; "type of list")]
#[test_case("5 int?", &["-1"]; "is int")]
#[test_case("abc int?", &["0"]; "string is not int")]
#[test_case("[ ] list?", &["-1"]; "is list")]
#[test_case("5 list?", &["0"]; "int is not list")]
#[test_case("t bool?", &["-1"]; "is bool")]
#[test_case("2 bool?", &["0"]; "two is not bool")]
// Debug words.
#[test_case("1 2 3 main debug.size", &["1", "2", "3", "3"]; "main stack size")]
#[test_case("1 >r retain debug.size", &["1"]; "retain stack size")]
#[test_case("1 2 3 2 debug.remove", &["1"]; "remove values")]
#[test_case("1 2 3 debug.clear", &[]; "clear")]
fn word_results(code: &str, expected: &[&str]) {
    assert_eq!(eval_and_stack(code).unwrap(), expected);
}

#[test_case("1 +", ErrorKind::StackUnderflow("main"); "add underflow")]
#[test_case("dup", ErrorKind::StackUnderflow("main"); "dup underflow")]
#[test_case("1 swap", ErrorKind::StackUnderflow("main"); "swap underflow")]
#[test_case("r>", ErrorKind::StackUnderflow("retain"); "retain underflow")]
#[test_case("[ ] loop", ErrorKind::StackUnderflow("main"); "loop test underflow")]
#[test_case("a 1 +", ErrorKind::NotANumber(String::new()); "add not a number")]
#[test_case("abc [ 1 ] [ 2 ] if", ErrorKind::NotANumber(String::new()); "if test not a number")]
#[test_case("0 5 /", ErrorKind::DivisionByZero; "divide by zero")]
#[test_case("0 5 %", ErrorKind::DivisionByZero; "modulo by zero")]
#[test_case("1 9223372036854775807 +", ErrorKind::ArithmeticOverflow("+"); "add overflow")]
#[test_case("[ 1", ErrorKind::UnbalancedDelimiter { open: "[", close: "]" }; "unbalanced bracket")]
#[test_case("( 1", ErrorKind::UnbalancedDelimiter { open: "(", close: ")" }; "unbalanced comment")]
#[test_case("[ $x ]", ErrorKind::InvalidArgumentToken(String::new()); "bad argument token")]
#[test_case("[ $1 $3 ] eval", ErrorKind::InvalidArgumentNumbering(String::new()); "argument gap")]
#[test_case("[ $0 ] eval", ErrorKind::InvalidArgumentNumbering(String::new()); "argument zero")]
#[test_case("[ a b ] [ 1 ] !", ErrorKind::InvalidAssignmentTarget(String::new()); "more names than values")]
#[test_case("[ a b ] 1 !", ErrorKind::InvalidAssignmentTarget(String::new()); "names with a scalar")]
#[test_case("[ [ a ] b ] [ 1 2 ] !", ErrorKind::InvalidAssignmentTarget(String::new()); "list as a name")]
#[test_case("3 [ a b c ] get", ErrorKind::IndexOutOfRange { index: 0, size: 0 }; "get past end")]
#[test_case("-1 [ a b c ] get", ErrorKind::IndexOutOfRange { index: 0, size: 0 }; "get negative")]
#[test_case("x 4 [ a b c ] insert", ErrorKind::IndexOutOfRange { index: 0, size: 0 }; "insert past end")]
#[test_case("0 [ ] remove", ErrorKind::IndexOutOfRange { index: 0, size: 0 }; "remove from empty")]
#[test_case("5 size", ErrorKind::NotAList(String::new()); "size of a number")]
#[test_case("1 2 -1 debug.remove", ErrorKind::IndexOutOfRange { index: 0, size: 0 }; "remove negative count")]
#[test_case("nowhere.gl import", ErrorKind::Io(String::new()); "import missing file")]
fn word_errors(code: &str, expected: ErrorKind) {
    let error = eval_and_stack(code).unwrap_err();

    assert_eq!(
        discriminant(error.kind()),
        discriminant(&expected),
        "{} gave {}",
        code,
        error
    );
}
