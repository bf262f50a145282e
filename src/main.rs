use std::{fs, process::ExitCode};

use clap::Parser;
use shunting::{
    interpret,
    interpreter::{lexer::tokenize, parser::core::parse, token::render},
};
use tracing::info;

use crate::logging::LogFormat;

mod logging;

/// shunting evaluates arithmetic expressions with `+ - * /` and parentheses.
/// Decimal numbers may use either `.` or `,` as the separator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shunting to read expressions from a file, one per line, instead of
    /// taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Also print the postfix (reverse Polish) form of each expression.
    #[arg(short, long)]
    postfix: bool,

    /// Also print the tokens of each expression.
    #[arg(short, long)]
    tokens: bool,

    /// Raise the log level; repeat for more detail. `RUST_LOG` overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Format of log output on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose, args.log_format);

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    let expressions: Vec<&str> = if args.file {
        script.lines().filter(|line| !line.trim().is_empty()).collect()
    } else {
        vec![script.as_str()]
    };
    info!(target: "shunting::cli", count = expressions.len(), "evaluating expressions");

    let mut failed = false;
    for expression in expressions {
        if !run(expression, &args) {
            failed = true;
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Evaluates one expression and prints what `args` asks for.
///
/// Returns `false` if the expression is invalid.
fn run(expression: &str, args: &Args) -> bool {
    let labelled = args.tokens || args.postfix;

    if args.tokens {
        println!("tokens:  {}", render(&tokenize(expression)));
    }
    if args.postfix
       && let Ok(postfix) = parse(&tokenize(expression))
    {
        println!("postfix: {}", render(&postfix));
    }

    match interpret(expression) {
        Ok(result) if labelled => println!("result:  {result}"),
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("invalid expression: {e}");
            return false;
        },
    }
    true
}
