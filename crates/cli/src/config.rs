//! CLI configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings that apply to every subcommand.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub logging: LogConfig,
    /// Plan file used when a command is not given `--plan`.
    pub default_plan_file: Option<PathBuf>,
    /// Placement catalog to use instead of the embedded one.
    pub catalog_file: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FLOORPLAN_SESSION_ID` - Session identifier for the log directory (default: timestamp)
    /// - `FLOORPLAN_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `FLOORPLAN_DISABLE_FILE_LOG` - Skip file logging entirely (default: false)
    /// - `FLOORPLAN_PLAN_FILE` - Plan file used when `--plan` is absent
    /// - `FLOORPLAN_CATALOG_FILE` - Placement catalog override
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.logging.session_id = env::var("FLOORPLAN_SESSION_ID").ok();
        config.logging.log_dir = env::var("FLOORPLAN_LOG_DIR").ok().map(PathBuf::from);

        if let Ok(value) = env::var("FLOORPLAN_DISABLE_FILE_LOG") {
            config.logging.file_enabled = !parse_flag(&value);
        }

        config.default_plan_file = env::var("FLOORPLAN_PLAN_FILE").ok().map(PathBuf::from);
        config.catalog_file = env::var("FLOORPLAN_CATALOG_FILE").ok().map(PathBuf::from);

        config
    }
}

#[derive(Clone, Debug)]
pub struct LogConfig {
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub file_enabled: bool,
    /// Mirror log events to stderr.
    pub verbose: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            session_id: None,
            log_dir: None,
            file_enabled: true,
            verbose: false,
        }
    }
}

/// Boolean environment flag. A bare (empty) variable counts as set; values
/// that are not recognised leave the flag off.
fn parse_flag(value: &str) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => true,
        _ => false,
    }
}
