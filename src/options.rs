//! How runtime settings are resolved: built-in defaults, overridden by the
//! config file, overridden by command-line arguments.

pub mod args;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    constants::*,
    utils::error::{self, PipetopError},
};

use self::args::Args;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub flags: Option<ConfigFlags>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigFlags {
    pub rate: Option<u64>,

    pub pipe_path: Option<String>,

    pub capacity: Option<usize>,

    pub dot_marker: Option<bool>,
}

/// Fully resolved runtime settings.
#[derive(Clone, Debug)]
pub struct AppConfigFields {
    pub update_rate_in_milliseconds: u64,
    pub pipe_path: PathBuf,
    pub history_capacity: usize,
    pub use_dot: bool,
}

/// Resolves where the config file lives. An explicitly given location wins;
/// otherwise we look under the user config directory.
pub fn read_config(config_location: Option<&str>) -> error::Result<Option<PathBuf>> {
    let config_path = if let Some(conf_loc) = config_location {
        Some(PathBuf::from(conf_loc))
    } else if let Some(config_dir) = dirs::config_dir() {
        let mut path = config_dir;
        path.push(DEFAULT_CONFIG_FILE_PATH);
        Some(path)
    } else {
        None
    };

    Ok(config_path)
}

/// Reads the config file, creating it with a commented default if it does
/// not exist yet.
pub fn create_or_get_config(config_path: &Option<PathBuf>) -> error::Result<Config> {
    if let Some(path) = config_path {
        if let Ok(config_string) = fs::read_to_string(path) {
            Ok(toml_edit::de::from_str(config_string.as_str())?)
        } else {
            // Config file DNE...
            if let Some(parent_path) = path.parent() {
                fs::create_dir_all(parent_path)?;
            }
            fs::File::create(path)?.write_all(CONFIG_TEXT.as_bytes())?;
            Ok(Config::default())
        }
    } else {
        // Don't write, the config path was somehow None...
        Ok(Config::default())
    }
}

/// Merges arguments over the config file over defaults and validates the
/// result.
pub fn build_app_config(args: &Args, config: &Config) -> error::Result<AppConfigFields> {
    let flags = config.flags.clone().unwrap_or_default();

    Ok(AppConfigFields {
        update_rate_in_milliseconds: get_update_rate(
            args.general_args.rate.as_deref(),
            flags.rate,
        )?,
        pipe_path: get_pipe_path(args.general_args.pipe.as_deref(), flags.pipe_path.as_deref()),
        history_capacity: get_history_capacity(args.general_args.capacity, flags.capacity)?,
        use_dot: args.general_args.dot_marker || flags.dot_marker.unwrap_or(false),
    })
}

/// Parses a rate given either as plain milliseconds or as a human duration
/// string like "500ms".
pub fn parse_rate(value: &str) -> error::Result<u64> {
    if let Ok(rate) = value.parse::<u64>() {
        Ok(rate)
    } else if let Ok(duration) = humantime::parse_duration(value) {
        Ok(duration.as_millis() as u64)
    } else {
        Err(PipetopError::ConfigError(format!(
            "could not parse \"{value}\" as a rate; use milliseconds or a duration like 500ms."
        )))
    }
}

fn get_update_rate(arg: Option<&str>, config_rate: Option<u64>) -> error::Result<u64> {
    let rate = if let Some(arg) = arg {
        parse_rate(arg)?
    } else if let Some(rate) = config_rate {
        rate
    } else {
        DEFAULT_UPDATE_RATE_IN_MILLISECONDS
    };

    if rate < MINIMUM_UPDATE_RATE_IN_MILLISECONDS {
        return Err(PipetopError::ConfigError(format!(
            "Please set your update rate to be at least {MINIMUM_UPDATE_RATE_IN_MILLISECONDS} milliseconds."
        )));
    }

    Ok(rate)
}

fn get_history_capacity(
    arg: Option<usize>, config_capacity: Option<usize>,
) -> error::Result<usize> {
    let capacity = arg
        .or(config_capacity)
        .unwrap_or(DEFAULT_HISTORY_CAPACITY);

    if capacity < MINIMUM_HISTORY_CAPACITY {
        return Err(PipetopError::ConfigError(format!(
            "Please set your history capacity to be at least {MINIMUM_HISTORY_CAPACITY} samples."
        )));
    }

    Ok(capacity)
}

fn get_pipe_path(arg: Option<&str>, config_path: Option<&str>) -> PathBuf {
    Path::new(arg.or(config_path).unwrap_or(DEFAULT_PIPE_PATH)).to_path_buf()
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    fn args_from(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("ptop").chain(argv.iter().copied()))
    }

    #[test]
    fn rates_parse_as_milliseconds_or_durations() {
        assert_eq!(parse_rate("500").unwrap(), 500);
        assert_eq!(parse_rate("500ms").unwrap(), 500);
        assert_eq!(parse_rate("2s").unwrap(), 2000);
        assert!(parse_rate("fast").is_err());
    }

    #[test]
    fn default_configuration_resolves() {
        let fields = build_app_config(&args_from(&[]), &Config::default()).unwrap();

        assert_eq!(fields.update_rate_in_milliseconds, 500);
        assert_eq!(fields.pipe_path, PathBuf::from("/tmp/sysmon_pipe"));
        assert_eq!(fields.history_capacity, 50);
        assert!(!fields.use_dot);
    }

    #[test]
    fn arguments_override_the_config_file() {
        let config = Config {
            flags: Some(ConfigFlags {
                rate: Some(1000),
                pipe_path: Some("/tmp/from_config".to_owned()),
                capacity: Some(100),
                dot_marker: Some(false),
            }),
        };

        let fields =
            build_app_config(&args_from(&["-r", "250", "-p", "/tmp/from_args"]), &config).unwrap();

        assert_eq!(fields.update_rate_in_milliseconds, 250);
        assert_eq!(fields.pipe_path, PathBuf::from("/tmp/from_args"));
        // Untouched by args, so the config wins over the default.
        assert_eq!(fields.history_capacity, 100);
    }

    #[test]
    fn rates_below_the_minimum_are_rejected() {
        let result = build_app_config(&args_from(&["-r", "50"]), &Config::default());
        assert!(matches!(result, Err(PipetopError::ConfigError(_))));
    }

    #[test]
    fn tiny_capacities_are_rejected() {
        let result = build_app_config(&args_from(&["--capacity", "1"]), &Config::default());
        assert!(matches!(result, Err(PipetopError::ConfigError(_))));
    }

    #[test]
    fn config_flags_round_trip_from_toml() {
        let config: Config = toml_edit::de::from_str(
            r#"
                [flags]
                rate = 750
                pipe_path = "/run/pipetop/samples"
                capacity = 80
                dot_marker = true
            "#,
        )
        .unwrap();

        let fields = build_app_config(&args_from(&[]), &config).unwrap();
        assert_eq!(fields.update_rate_in_milliseconds, 750);
        assert_eq!(fields.pipe_path, PathBuf::from("/run/pipetop/samples"));
        assert_eq!(fields.history_capacity, 80);
        assert!(fields.use_dot);
    }
}
