mod app;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod theme;
mod util;
mod warning;
use crate::app::App;
use crate::config::Config;
use crate::warning::Warning;
use log::{error, info};
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let (config, config_err) = match Config::load_default() {
        Ok(cfg) => (cfg, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let log_err = logging::init(&config.logging).err();
    info!("Starting themesnake {}", env!("CARGO_PKG_VERSION"));
    let mut warnings = Vec::new();
    if let Some(e) = config_err {
        error!("Failed to load configuration: {e}");
        warnings.push(Warning::from(e));
    }
    if let Some(e) = log_err {
        warnings.push(Warning::from(e));
    }
    let terminal = ratatui::init();
    let r = App::new(&config, warnings).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => {
            info!("Exiting");
            ExitCode::SUCCESS
        }
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            error!("Terminal I/O failed: {e}");
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
