use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use tinypy::{
    Error,
    interpreter::{evaluator::core::Evaluator, lexer::tokenize, parser::parse, symbols::SymbolStore},
};

/// tinypy runs programs written in a small indentation-based language with
/// integers, lists, conditionals and loops.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the token stream, one token per line, instead of running the
    /// program.
    #[arg(long)]
    tokens: bool,

    /// Print the parsed program in normalized form instead of running it.
    #[arg(long, conflicts_with = "tokens")]
    ast: bool,

    /// The source file to interpret.
    file: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Ok(source) = fs::read_to_string(&args.file) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.file);
        return ExitCode::FAILURE;
    };

    if let Err(e) = execute(&args, &source) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn execute(args: &Args, source: &str) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let tokens = tokenize(source)?;
    if args.tokens {
        for token in &tokens {
            writeln!(out, "{token}")?;
        }
        return Ok(());
    }

    let program = parse(&tokens)?;
    if args.ast {
        write!(out, "{program}")?;
        return Ok(());
    }

    let mut symbols = SymbolStore::new();
    Evaluator::new(&mut symbols, out).run(&program)?;

    Ok(())
}
