use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use thai_chart_prepare::Cli;

fn main() -> ExitCode
{
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match thai_chart_prepare::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
