use std::{
    io::{stdin, stdout, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;

use interpreter::{InterpretError, Interpreter};

// Exit codes from sysexits.h
const EX_DATAERR: u8 = 65;
const EX_SOFTWARE: u8 = 70;

/// Evaluates expressions, either from a file or line by line from an interactive prompt.
#[derive(clap::Parser)]
#[command(version)]
struct Args {
    /// File to evaluate. Starts a prompt if omitted.
    file: Option<PathBuf>,

    /// Print the parenthesized syntax tree of every expression before its value.
    #[arg(short = 'a', long)]
    print_ast: bool,
}

fn run_file(path: PathBuf, interpreter: &Interpreter) -> anyhow::Result<ExitCode> {
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match interpreter.run_source(&source, &mut stdout()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e @ InterpretError::CompileError(_)) => {
            eprintln!("{e}");
            Ok(ExitCode::from(EX_DATAERR))
        }
        Err(e @ InterpretError::RuntimeError(_)) => {
            eprintln!("{e}");
            Ok(ExitCode::from(EX_SOFTWARE))
        }
        Err(e) => Err(e.into()),
    }
}

fn run_prompt(interpreter: &Interpreter) -> anyhow::Result<ExitCode> {
    let mut line = String::new();
    loop {
        print!("> ");
        stdout().flush()?;

        line.clear();
        if stdin().read_line(&mut line)? == 0 {
            log::debug!("End of input, leaving prompt");
            return Ok(ExitCode::SUCCESS);
        }

        // Every line is independent, errors are reported and then forgotten
        match interpreter.run_source(&line, &mut stdout()) {
            Ok(()) => (),
            Err(InterpretError::Io(e)) => return Err(e.into()),
            Err(e) => eprintln!("{e}"),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let interpreter = Interpreter::new().print_ast(args.print_ast);

    match args.file {
        Some(file) => run_file(file, &interpreter),
        None => run_prompt(&interpreter),
    }
}
