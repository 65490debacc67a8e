use gloom::{
    CodeManagement, GloomInterpreter, InterpreterStack, QuotationManagement, VariableManagement,
    error,
};
use std::{
    env::{args, var},
    io::{self, BufRead, Write},
};

/// Install the log output, only when RUST_LOG asks for it.  Logs go to stderr so they never mix
/// with the printed stack.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Write out the main stack, bottom first, with references shown as their quotation text.
fn print_stack(interpreter: &GloomInterpreter) {
    let items: Vec<String> = interpreter
        .stack()
        .iter()
        .map(|value| interpreter.render(value))
        .collect();

    println!("{}", items.join(" "));
}

/// Read lines from stdin and run each one.  Errors are reported and the REPL keeps going with the
/// stack as the failure left it.
fn repl(interpreter: &mut GloomInterpreter) -> error::Result<()> {
    let stdin = io::stdin();

    print!("> ");
    io::stdout().flush()?;

    for line in stdin.lock().lines() {
        let line = line?;

        match line.trim() {
            ".q" => break,
            ".v" => print!("{}", interpreter.dictionary()),
            ".c" => interpreter.reset(),

            source => match interpreter.run_source("<repl>", source) {
                Ok(()) => print_stack(interpreter),
                Err(error) => {
                    eprintln!("Error: {}", error);
                    print_stack(interpreter);
                }
            },
        }

        print!("> ");
        io::stdout().flush()?;
    }

    println!();
    Ok(())
}

fn main() -> error::Result<()> {
    init_tracing();

    let mut interpreter = GloomInterpreter::new();

    // Library files can be imported by name from this directory.
    if let Ok(lib_path) = var("GLOOM_LIB_PATH") {
        interpreter.add_search_path(&lib_path)?;
    }

    let args: Vec<String> = args().collect();

    if args.len() >= 2 {
        interpreter.run_file(&args[1])?;
        print_stack(&interpreter);
    } else {
        repl(&mut interpreter)?;
    }

    Ok(())
}
