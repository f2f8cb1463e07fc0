//! Sori CLI.
//!
//! `sori <script>` runs a file; `sori` with no arguments starts the REPL.
//! Exit codes: 64 usage error, 65 static or file error, 70 runtime error.

use std::io::{self, BufRead, Write};

use soric::Session;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => run_prompt(),
        [script] => run_file(script),
        _ => {
            eprintln!("Usage: sori [script]");
            std::process::exit(64);
        }
    }
}

fn run_file(path: &str) {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error reading {path}: {error}");
            std::process::exit(65);
        }
    };

    let mut session = Session::new();
    for diagnostic in session.execute(&source) {
        eprintln!("{diagnostic}");
    }
    if session.had_error() {
        std::process::exit(65);
    }
    if session.had_runtime_error() {
        std::process::exit(70);
    }
}

fn run_prompt() {
    let stdin = io::stdin();
    let mut session = Session::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            // EOF (ctrl-D) ends the session.
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        for diagnostic in session.execute(&line) {
            eprintln!("{diagnostic}");
        }
        // A broken line shouldn't kill the session.
        session.clear_error();
    }
}
