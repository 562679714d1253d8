use std::path::PathBuf;

/// Runtime configuration for the demo binary, read from the environment.
///
/// The bus itself takes no configuration; these settings only control
/// logging output.
#[derive(Clone, Default)]
pub struct Config {
    pub logs_path: PathBuf,
    pub file_logging: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            logs_path: std::env::var("LOGS_PATH")
                .map_or_else(|_| PathBuf::from("logs"), PathBuf::from),
            file_logging: std::env::var("FILE_LOGGING")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}
