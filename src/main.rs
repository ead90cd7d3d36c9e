use std::io;
use std::io::prelude::*;
use std::process;

use argparse::{ArgumentParser, Print, Store};

use arith::{evaluate, EvalError};

fn main() {
    env_logger::init();

    let mut expression = "".to_string();
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Arithmetic expression evaluator");
        ap.add_option(
            &["--version"],
            Print(env!("CARGO_PKG_VERSION").to_string()),
            "Show version",
        );
        ap.refer(&mut expression)
            .add_argument("expression", Store,
                          "Expression to evaluate, e.g. \"2 * 3 + 1\".  Omit to run an interactive REPL.");
        ap.parse_args_or_exit();
    }
    if ! expression.is_empty() {
        match evaluate(&expression) {
            Ok(value) => println!("{}", value),
            Err(err) => {
                println!("{}", err);
                match err {
                    EvalError::Parse(_) => process::exit(65),
                    EvalError::Runtime(_) => process::exit(70),
                }
            }
        }
    }
    else {
        run_repl();
    }
}

fn run_repl() {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().expect("run_repl: unable to flush stdout");

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {
                if input.trim().is_empty() {
                    continue;
                }
                match evaluate(&input) {
                    Ok(value) => println!("{}", value),
                    Err(err) => println!("{}", err),
                }
            }
            Err(error) => {
                println!("Error reading stdin: {:?}", error);
                break;
            }
        }
    }
}
