//! Quill - Local-first toolkit for a research-blog site

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    if let Err(e) = quill_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
