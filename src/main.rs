mod board;
mod clock;
mod command;
mod config;
mod consts;
mod game;
mod input;
mod options;
use crate::config::Config;
use crate::game::GameSession;
use crate::options::{Args, Options, RunArgs, HELP};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("sidewinder: {e}");
            return ExitCode::from(2);
        }
    };
    match args {
        Args::Help => {
            print!("{HELP}");
            ExitCode::SUCCESS
        }
        Args::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Args::Run(run) => match run_game(run) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("sidewinder: {e:#}");
                ExitCode::from(2)
            }
        },
    }
}

fn run_game(args: RunArgs) -> anyhow::Result<()> {
    let config = match args.config {
        Some(ref path) => Config::load(path, false)?,
        None => Config::load(&Config::default_path()?, true)?,
    };
    let options = Options::resolve(&config, args.overrides)?;
    let mut session = GameSession::new(&options)?;
    session.run()
}
