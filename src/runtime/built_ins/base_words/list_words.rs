use crate::{
    add_native_word,
    runtime::{
        data_structures::value::{ToValue, Value},
        error::{self, script_error, ErrorKind},
        interpreter::Interpreter,
    },
};

/// Pop a list reference and copy out its elements.
fn pop_list(interpreter: &mut dyn Interpreter) -> error::Result<Vec<Value>> {
    let index = interpreter.pop_as_reference()?;
    Ok(interpreter.quotation(index)?.to_vec())
}

/// Pop an index and check it against the list size.  Inserting may also use the index one past
/// the end.
fn pop_index(
    interpreter: &mut dyn Interpreter,
    list: &[Value],
    allow_end: bool,
) -> error::Result<usize> {
    let index = interpreter.pop_as_int()?;
    let limit = if allow_end { list.len() + 1 } else { list.len() };

    if index < 0 || index as usize >= limit {
        script_error(
            interpreter,
            ErrorKind::IndexOutOfRange {
                index,
                size: list.len(),
            },
        )?;
    }

    Ok(index as usize)
}

/// Store a new list and push its reference.  Lists are never modified in place.
fn push_list(interpreter: &mut dyn Interpreter, list: Vec<Value>) {
    let index = interpreter.insert_quotation(list);
    interpreter.push(Value::Reference(index));
}

/// Signature: `list -- size`
fn word_list_size(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let list = pop_list(interpreter)?;

    interpreter.push(list.len().to_value());
    Ok(())
}

/// Signature: `index list -- value`
fn word_list_get(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let list = pop_list(interpreter)?;
    let index = pop_index(interpreter, &list, false)?;

    interpreter.push(list[index].clone());
    Ok(())
}

/// Signature: `value index list -- new-list`
fn word_list_set(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let mut list = pop_list(interpreter)?;
    let index = pop_index(interpreter, &list, false)?;

    list[index] = interpreter.pop()?;

    push_list(interpreter, list);
    Ok(())
}

/// Signature: `value index list -- new-list`
fn word_list_insert(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let mut list = pop_list(interpreter)?;
    let index = pop_index(interpreter, &list, true)?;

    list.insert(index, interpreter.pop()?);

    push_list(interpreter, list);
    Ok(())
}

/// Signature: `index list -- new-list value`
fn word_list_remove(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let mut list = pop_list(interpreter)?;
    let index = pop_index(interpreter, &list, false)?;
    let value = list.remove(index);

    push_list(interpreter, list);
    interpreter.push(value);
    Ok(())
}

/// The elements of the deeper list followed by those of the top list.
///
/// Signature: `list-a list-b -- list-ab`
fn word_list_append(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let tail = pop_list(interpreter)?;
    let mut head = pop_list(interpreter)?;

    head.extend(tail);

    push_list(interpreter, head);
    Ok(())
}

/// Signature: `list -- new-list`
fn word_list_copy(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let list = pop_list(interpreter)?;

    push_list(interpreter, list);
    Ok(())
}

/// Register the list words.
pub fn register_list_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "size",
        word_list_size,
        "Number of elements in a list.",
        "list -- size"
    );

    add_native_word!(
        interpreter,
        "get",
        word_list_get,
        "Read the element at an index.",
        "index list -- value"
    );

    add_native_word!(
        interpreter,
        "set",
        word_list_set,
        "A new list with the element at an index replaced.",
        "value index list -- new-list"
    );

    add_native_word!(
        interpreter,
        "insert",
        word_list_insert,
        "A new list with a value inserted before an index.",
        "value index list -- new-list"
    );

    add_native_word!(
        interpreter,
        "remove",
        word_list_remove,
        "A new list without the element at an index, and that element.",
        "index list -- new-list value"
    );

    add_native_word!(
        interpreter,
        "append",
        word_list_append,
        "A new list joining two lists.",
        "list-a list-b -- list-ab"
    );

    add_native_word!(
        interpreter,
        "copy",
        word_list_copy,
        "A new list with the same elements.",
        "list -- new-list"
    );
}
