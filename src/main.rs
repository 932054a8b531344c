use std::{
    fs,
    io::{self, BufRead},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use log::{error, info};
use reckon::{error::Failure, evaluate, parse, tokenize};

/// reckon evaluates arithmetic expressions made of integers, `+`, `-`, `*`,
/// `/` and parentheses.
///
/// With no expression and no file, lines are read from standard input and
/// each one is evaluated as it arrives.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate every non-blank line of this file.
    #[arg(short, long, conflicts_with = "expressions")]
    file: Option<PathBuf>,

    /// Print the parenthesized syntax tree instead of the value.
    #[arg(short, long, conflicts_with = "tokens")]
    ast: bool,

    /// Print the token stream instead of the value.
    #[arg(short, long)]
    tokens: bool,

    /// Expressions to evaluate.
    expressions: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    Evaluate,
    Ast,
    Tokens,
}

impl Args {
    const fn mode(&self) -> Mode {
        if self.ast {
            Mode::Ast
        } else if self.tokens {
            Mode::Tokens
        } else {
            Mode::Evaluate
        }
    }
}

/// Where a script line came from, for error reports.
struct Origin<'a> {
    path: &'a Path,
    line: usize,
}

/// Processes one input, printing `input = result` on success or the rendered
/// failure on stderr. Returns whether the input succeeded.
fn run_line(input: &str, mode: Mode, origin: Option<&Origin<'_>>) -> bool {
    let outcome = match mode {
        Mode::Evaluate => evaluate(input).map(|value| value.to_string()),
        Mode::Ast => parse(input).map(|tree| tree.to_string()),
        Mode::Tokens => tokenize(input).map(|tokens| {
                                           tokens.iter()
                                                 .map(|(token, span)| format!("{token:?}@{span:?}"))
                                                 .collect::<Vec<_>>()
                                                 .join(" ")
                                       })
                                       .map_err(|e| Failure::new(input, e)),
    };

    match outcome {
        Ok(rendered) => {
            println!("{input} = {rendered}");
            true
        },
        Err(failure) => {
            match origin {
                Some(Origin { path, line }) => {
                    eprintln!("{}: {}", path.display(), failure.starting_at_line(*line));
                },
                None => eprintln!("{failure}"),
            }
            false
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let mode = args.mode();
    let mut failures = 0usize;

    if let Some(path) = &args.file {
        let script = fs::read_to_string(path).unwrap_or_else(|e| {
                         eprintln!("Failed to read the input file '{}': {e}", path.display());
                         std::process::exit(1);
                     });
        info!("evaluating {}", path.display());
        for (index, line) in script.lines().enumerate() {
            let line = line.trim();
            if !line.is_empty() {
                let origin = Origin { path: path.as_path(),
                                     line: index + 1, };
                failures += usize::from(!run_line(line, mode, Some(&origin)));
            }
        }
    } else if !args.expressions.is_empty() {
        for expression in &args.expressions {
            failures += usize::from(!run_line(expression, mode, None));
        }
    } else {
        info!("reading expressions from standard input");
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    error!("failed to read standard input: {e}");
                    return ExitCode::FAILURE;
                },
            };
            let line = line.trim();
            if !line.is_empty() {
                failures += usize::from(!run_line(line, mode, None));
            }
        }
    }

    if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
