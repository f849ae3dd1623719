use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use figure_moves::cli::command::parse_command;
use figure_moves::cli::{respond, run_session, Response};

fn run_once(line: &str) -> io::Result<bool> {
    let Some(command) = parse_command(line) else {
        return Ok(true);
    };
    let response = respond(&command);
    let mut stdout = io::stdout().lock();
    response.write_to(&mut stdout)?;
    stdout.flush()?;
    Ok(!matches!(response, Response::Error(_)))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let result = if args.is_empty() {
        run_session(io::stdin().lock(), io::stdout().lock()).map(|()| true)
    } else {
        run_once(&args.join(" "))
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
