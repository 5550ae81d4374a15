use fatalbox_core::config::ConfigResult;
use fatalbox_core::{
    install_panic_hook, BackendKind, Config, Console, DisplayRequest, ErrorKind, FatalError,
    Notification, Presenter, StdioPresenter, DEFAULT_TITLE,
};
use log::{debug, error, warn};
use std::process::ExitCode;

mod cli;
mod logger;

use cli::Args;

fn main() -> ExitCode {
    let args = cli::parse_args();

    if let Err(e) = logger::init_logger(args.quiet, args.verbose) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if args.list_kinds {
        for kind in ErrorKind::ALL {
            println!("{:<12} {}", kind.name(), kind.title());
        }
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            // No usable config, so there is no dialog to pick either
            Presenter::new(None, Console::stdio()).show_untitled(&e, Some("Config"));
            return ExitCode::FAILURE;
        }
    };

    install_panic_hook(config.clone());

    if config.resolved_backend() == BackendKind::Custom {
        warn!("A custom backend cannot be loaded from the command line, using the console");
    }
    let mut presenter = StdioPresenter::from_config(&config);
    debug!(
        "Dialog backend: {}",
        presenter.backend_name().unwrap_or("none")
    );

    let message = args.message.unwrap_or_default();
    let shown = match args.kind {
        Some(kind) => presenter.show(&FatalError::new(kind, message)),
        None => {
            let title = args.title.as_deref().unwrap_or(DEFAULT_TITLE);
            presenter.show_request(&DisplayRequest::new(title, &message))
        }
    };

    match shown {
        Notification::Dialog => debug!("Error shown in a dialog"),
        Notification::Console => debug!("Error shown on the console"),
    }
    ExitCode::SUCCESS
}

fn load_config(args: &Args) -> ConfigResult<Config> {
    let mut config = Config::load(args.config_path.as_deref())?;
    args.apply(&mut config);
    Ok(config)
}
