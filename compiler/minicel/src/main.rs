//! minicel CLI
//!
//! Evaluates a pipe-separated table and prints the result grid.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use minicel::commands::{
    dump_ast, lex_formula, parse_formula_text, parse_run_options, run_file, show_ast,
};
use minicel::{init_tracing, Error};
use minicel_diagnostic::{ColorMode, TerminalEmitter};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        eprintln!("ERROR: input file is not provided");
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "run" => run_command(&args[2..]),
        "lex" => {
            let Some(formula) = args.get(2) else {
                eprintln!("Usage: minicel lex <formula>");
                std::process::exit(1);
            };
            finish(lex_formula(formula));
        }
        "parse" => {
            let Some(formula) = args.get(2) else {
                eprintln!("Usage: minicel parse <formula>");
                std::process::exit(1);
            };
            finish(parse_formula_text(formula));
        }
        "dump-ast" => {
            if args.len() < 4 {
                eprintln!("Usage: minicel dump-ast <file> <CELL> [-o <path>]");
                std::process::exit(1);
            }

            // -o needs lookahead
            let mut output: Option<PathBuf> = None;
            let mut i = 4;
            while i < args.len() {
                if args[i] == "-o" && i + 1 < args.len() {
                    output = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    eprintln!("error: unexpected argument '{}'", args[i]);
                    std::process::exit(1);
                }
            }

            let summary = dump_ast(Path::new(&args[2]), &args[3], output.as_deref());
            finish(summary.map(|summary| {
                format!(
                    "Wrote {} nodes for {} to {}\n",
                    summary.nodes,
                    summary.cell,
                    summary.output.display()
                )
            }));
        }
        "show-ast" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: minicel show-ast <path>");
                std::process::exit(1);
            };
            finish(show_ast(Path::new(path)));
        }
        "help" | "--help" | "-h" => print_usage(),
        // `minicel table.txt` is shorthand for `minicel run table.txt`
        _ => run_command(&args[1..]),
    }
}

fn run_command(args: &[String]) {
    match parse_run_options(args) {
        Ok((path, options)) => finish(run_file(&path, &options)),
        Err(message) => {
            print_usage();
            eprintln!("ERROR: {message}");
            std::process::exit(1);
        }
    }
}

/// Print a command's output, or render its error and exit with status 1.
fn finish(result: Result<String, Error>) {
    match result {
        Ok(output) => print!("{output}"),
        Err(err) => {
            let stderr = std::io::stderr();
            let is_tty = stderr.is_terminal();
            let mut emitter = TerminalEmitter::with_color_mode(stderr.lock(), ColorMode::Auto, is_tty);
            let _ = emitter.emit(&err.to_diagnostic());
            let _ = emitter.flush();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("minicel - evaluate pipe-separated tables with formulas");
    eprintln!();
    eprintln!("Usage: minicel <file>");
    eprintln!("       minicel <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <file>                   Evaluate a table and print the result");
    eprintln!("  lex <formula>                Tokenize a formula and display tokens");
    eprintln!("  parse <formula>              Parse a formula and display its AST");
    eprintln!("  dump-ast <file> <CELL>       Write the AST of a formula cell to a file");
    eprintln!("  show-ast <path>              Display an AST written by dump-ast");
    eprintln!("  help                         Show this help message");
    eprintln!();
    eprintln!("Run options:");
    eprintln!("  --precision=<N>     Digits after the decimal point (default: 6)");
    eprintln!();
    eprintln!("Dump options:");
    eprintln!("  -o <path>           Output file (default: <CELL>.ast)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MINICEL_LOG         Log filter, e.g. minicel_eval=trace (falls back to RUST_LOG)");
    eprintln!("  MINICEL_LOG_TREE    Indented per-span log output");
}
