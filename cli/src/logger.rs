use colored::*;
use fatalbox_core::paths;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

/// Logs to stderr with colors and to the log file without. Stdout is left to the console
/// notification.
pub struct FatalboxLogger {
    max_level: Level,
    log_file: Mutex<Option<File>>,
}

impl FatalboxLogger {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        let log_file = match paths::prepare_log_file() {
            Some(path) => match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => Some(file),
                Err(e) => {
                    eprintln!("Warning: Failed to open log file at {:?}: {}", path, e);
                    None
                }
            },
            None => None,
        };

        Self {
            max_level: max_level(quiet, verbose),
            log_file: Mutex::new(log_file),
        }
    }

    fn format_log(&self, record: &Record) -> String {
        let level_str = level_tag(record.level());
        let message = format!("{} {}", level_str, record.args());

        // Color the entire message for warnings and errors
        match record.level() {
            Level::Error => message.red().bold().to_string(),
            Level::Warn => message.yellow().bold().to_string(),
            level => {
                let colored_level = match level {
                    Level::Info => level_str.green().bold(),
                    Level::Debug => level_str.blue().bold(),
                    _ => level_str.white().bold(),
                };
                message.replacen(level_str, &colored_level.to_string(), 1)
            }
        }
    }
}

fn max_level(quiet: bool, verbose: bool) -> Level {
    if quiet {
        Level::Info
    } else if verbose {
        Level::Trace
    } else {
        Level::Debug
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "[E]",
        Level::Warn => "[W]",
        Level::Info => "[I]",
        Level::Debug => "[D]",
        Level::Trace => "[T]",
    }
}

fn format_log_plain(record: &Record) -> String {
    let target = record
        .target()
        .split("::")
        .last()
        .unwrap_or(record.target());
    format!("{} [{}] {}", level_tag(record.level()), target, record.args())
}

impl Log for FatalboxLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!("{}", self.format_log(record));

        if let Ok(mut file_opt) = self.log_file.lock() {
            if let Some(file) = file_opt.as_mut() {
                let _ = writeln!(file, "{}", format_log_plain(record));
                let _ = file.flush();
            }
        }
    }

    fn flush(&self) {}
}

pub fn init_logger(quiet: bool, verbose: bool) -> Result<(), log::SetLoggerError> {
    let logger = FatalboxLogger::new(quiet, verbose);
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
