use std::fs;

use clap::Parser;
use numeval::{evaluate, interpreter::printer::postfix, parse_source};

/// numeval evaluates single-line arithmetic expressions over integers,
/// the four operators, and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numeval to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    /// Also prints the postfix form of the parsed expression.
    #[arg(short, long)]
    postfix: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if args.postfix {
        match parse_source(&expression) {
            Ok(expr) => println!("{}", postfix(&expr)),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }

    match evaluate(&expression) {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
