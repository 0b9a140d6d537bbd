//! Entry point for the `cmdshelf` binary.

use colored::Colorize;
use std::process::ExitCode;

use cmdshelf_cli::error::exit_code_from_error;

#[tokio::main]
async fn main() -> ExitCode {
    match cmdshelf_cli::run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(exit_code_from_error(&err))
        },
    }
}
