use std::path::PathBuf;

const APP_DIR: &str = "fatalbox";
const CONFIG_FILE: &str = "config.yaml";
const LOG_FILE: &str = "fatalbox.log";

/// Where the config is looked up when no `--config` is given. The file may not exist.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// The log file under the local data directory. The directory is created here because the
/// logger opens the file straight away. `None` if there is no data directory or it can't be made.
pub fn prepare_log_file() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()?.join(APP_DIR);
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join(LOG_FILE))
}
