//! Binary entrypoint for the `kringle` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Pick up RESEND_API_KEY and friends from a local .env if present.
    dotenvy::dotenv().ok();

    match kringle::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
