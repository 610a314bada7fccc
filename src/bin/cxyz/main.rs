use std::process::ExitCode;

mod cli;
mod commands;
mod config;
mod display;
mod io;
mod util;

use commands::Status;

/// Exit status of a run stopped by a fatal error. Clap exits with `2` on
/// usage errors, so aborted runs use a code of their own.
const ABORTED: u8 = 3;

fn status_code(status: Status) -> u8 {
    match status {
        Status::Clean => 0,
        Status::FilesFailed => 1,
    }
}

fn main() -> ExitCode {
    let cli = cli::parse();
    let ctx = display::Context::detect().with_quiet(cli.quiet);

    if ctx.interactive {
        display::print_banner();
    }

    match commands::run_convert(cli, ctx) {
        Ok(status) => ExitCode::from(status_code(status)),
        Err(e) => {
            display::print_error(&e);
            ExitCode::from(ABORTED)
        }
    }
}
