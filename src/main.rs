use std::process::ExitCode;

use clap::Parser;
use lingua_edit::cli::{Arguments, ExitStatus, run};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match run(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
