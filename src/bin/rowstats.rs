use std::io;
use std::process::ExitCode;

use rowstats::cli;
use rowstats::utils::{Args, Parser};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    ExitCode::from(cli::run(&args, &mut out))
}
