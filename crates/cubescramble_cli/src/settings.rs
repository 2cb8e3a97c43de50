use std::path::Path;

use cubescramble::FilterPolicy;
use eyre::{Context, Result};
use serde::Deserialize;

const SETTINGS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_SETTINGS_STR: &str = include_str!("default.yaml");
const ENV_PREFIX: &str = "CUBESCRAMBLE";

/// Settings shared by all subcommands.
///
/// Sources are layered in this order, later ones taking precedence:
/// built-in defaults, the user's settings file, then environment variables
/// prefixed with `CUBESCRAMBLE_`. Command-line flags override all of them.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub cube_size: u16,
    pub samples: usize,
    pub count: usize,
    pub policy: FilterPolicy,
    pub log_level: String,
}

impl Settings {
    pub fn load(user_file: Option<&Path>) -> Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_SETTINGS_STR, SETTINGS_FILE_FORMAT));
        if let Some(path) = user_file {
            config = config.add_source(config::File::from(path).format(SETTINGS_FILE_FORMAT));
        }
        config = config.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        config
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .wrap_err("error loading settings")
    }

    pub fn log_level(&self) -> Result<log::LevelFilter> {
        self.log_level
            .parse()
            .wrap_err_with(|| format!("bad log level {:?}", self.log_level))
    }
}
