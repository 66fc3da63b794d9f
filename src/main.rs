use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use cfglang::{get_result, to_json};
use clap::Parser;

/// cfglang evaluates a configuration program and prints its dictionaries as a
/// JSON array.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read the program from this file instead of standard input.
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let source = match read_source(args.input.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the program: {e}");
            return ExitCode::FAILURE;
        },
    };

    let values = match get_result(&source) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("{}: {e}", e.kind());
            return ExitCode::FAILURE;
        },
    };

    match to_json(&values) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Failed to serialize the result: {e}");
            ExitCode::FAILURE
        },
    }
}

fn read_source(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) => {
            log::debug!("reading program from {}", path.display());
            fs::read_to_string(path)
        },
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        },
    }
}
