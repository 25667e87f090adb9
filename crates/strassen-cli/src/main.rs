use std::env;
use std::io;
use std::process::ExitCode;

use strassen_cli::args::seed_from_env;
use strassen_cli::{run, RunConfig, Usage};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match RunConfig::from_args(&args)
        .and_then(|config| seed_from_env().map(|seed| config.with_seed(seed)))
    {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{}", Usage);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run(&config, &mut out) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
