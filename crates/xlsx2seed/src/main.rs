use std::process::ExitCode;

use clap::Parser;
use xlsx2seed::config::load_config;
use xlsx2seed::logging::{self, LogSink};
use xlsx2seed::run::finish;
use xlsx2seed::{Cli, Orchestrator, RunOptions, SheetRules};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(LogSink::for_stdout_mode(cli.stdout));

    let cwd = std::env::current_dir().unwrap_or_default();
    let config = match load_config(&cli, &cwd) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("load config failed!");
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    let rules = match SheetRules::new(&cli.ignore, &cli.only, &cli.subdivide) {
        Ok(rules) => rules,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let options = RunOptions {
        files: cli.files,
        input_dir: cli.input,
        output_dir: cli.output,
        stdout: cli.stdout,
        require_version: cli.require_version,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = Orchestrator::new(&options, &config, &rules).run(&mut out);
    finish(&summary, &mut out)
}
