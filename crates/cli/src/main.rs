use clap::Parser;
use crossterm::tty::IsTty;
use log::debug;
use std::io::{stdin, stdout};
use std::process::ExitCode;

use bikeshare_cli::cli_args::Args;
use bikeshare_cli::console::Console;
use bikeshare_cli::session;
use bikeshare_core::config;
use bikeshare_core::error::Result;

fn execute() -> Result<()> {
    let args = Args::parse();

    let catalog = config::load_catalog(&args.config_path, &args.data_dir)?;
    debug!("Data directory: `{}`", catalog.data_directory().display());

    let styled = stdout().is_tty();
    let mut console = Console::new(stdin().lock(), stdout()).with_style(styled);

    session::run(&mut console, &catalog)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
