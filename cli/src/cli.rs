use clap::Parser;
use fatalbox_core::{BackendKind, Config, ErrorKind};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "fatalbox",
    version = fatalbox_core::version(),
    about = "fatalbox - Show a fatal error in a dialog, or on the console when no dialog is available",
)]
pub struct Args {
    /// The error message to show
    #[arg(value_name = "MESSAGE", required_unless_present = "list_kinds")]
    pub message: Option<String>,

    /// Subsystem the error came from, sets the title
    #[arg(short = 'k', long = "kind", value_name = "KIND", conflicts_with = "title")]
    pub kind: Option<ErrorKind>,

    /// Title for an error outside the known kinds
    #[arg(short = 't', long = "title", value_name = "TITLE")]
    pub title: Option<String>,

    /// Specify custom configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Dialog backend to use (auto, custom, console-only, toolkit, native, helper)
    #[arg(short = 'b', long = "backend", value_name = "BACKEND")]
    pub backend: Option<BackendKind>,

    /// Skip the dialog and print to the console
    #[arg(long = "console", conflicts_with = "backend")]
    pub console: bool,

    /// Never run the external helper program
    #[arg(long = "no-hacky-fallback")]
    pub no_hacky_fallback: bool,

    /// Program run by the helper backend
    #[arg(long = "helper", value_name = "PROGRAM")]
    pub helper_program: Option<String>,

    /// List the known error kinds and exit
    #[arg(long = "list-kinds")]
    pub list_kinds: bool,

    /// Only log info and above
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log everything, including trace output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    /// Command line flags win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if self.console {
            config.backend = BackendKind::ConsoleOnly;
        }
        if self.no_hacky_fallback {
            config.no_hacky_fallback = true;
        }
        if let Some(program) = &self.helper_program {
            config.helper_program = program.clone();
        }
    }
}

pub fn parse_args() -> Args {
    Args::parse()
}
