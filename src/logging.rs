//! Logging to a file.  The terminal is taken over by the game, so log
//! messages can't go to stderr.
use crate::config::LogConfig;
use log::LevelFilter;
use simplelog::WriteLogger;
use std::path::PathBuf;
use thiserror::Error;

/// Install a global logger writing to the file given by `cfg`, truncating
/// it first.  Does nothing if logging is turned off.
pub(crate) fn init(cfg: &LogConfig) -> Result<(), LogError> {
    if cfg.level == LevelFilter::Off {
        return Ok(());
    }
    let path = log_file_path(cfg).ok_or(LogError::NoPath)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(LogError::Mkdir)?;
    }
    let file = fs_err::File::create(&path).map_err(LogError::Create)?;
    WriteLogger::init(cfg.level, simplelog::Config::default(), file)?;
    Ok(())
}

/// Return the path of the log file: the one given in the configuration, or
/// else `themesnake/themesnake.log` in the local state directory (or the local
/// data directory on platforms without one)
pub(crate) fn log_file_path(cfg: &LogConfig) -> Option<PathBuf> {
    cfg.file.clone().or_else(|| {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .map(|p| p.join("themesnake").join("themesnake.log"))
    })
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create log directory")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to create log file")]
    Create(#[source] std::io::Error),
    #[error("failed to install logger")]
    Install(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_path() {
        let cfg = LogConfig {
            file: Some(PathBuf::from("/var/tmp/snake.log")),
            level: LevelFilter::Info,
        };
        assert_eq!(
            log_file_path(&cfg),
            Some(PathBuf::from("/var/tmp/snake.log"))
        );
    }

    #[test]
    fn default_path() {
        if let Some(path) = log_file_path(&LogConfig::default()) {
            assert!(path.ends_with("themesnake/themesnake.log"), "{path:?}");
        }
    }

    #[test]
    fn off_touches_nothing() {
        let tmpdir = tempfile::tempdir().expect("creating a temporary directory should succeed");
        let path = tmpdir.path().join("logs").join("snake.log");
        let cfg = LogConfig {
            file: Some(path.clone()),
            level: LevelFilter::Off,
        };
        assert!(init(&cfg).is_ok());
        assert!(!path.exists());
        assert!(!tmpdir.path().join("logs").exists());
    }
}
