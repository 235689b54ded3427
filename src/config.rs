use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::analyzer;
use crate::error::{AutodiagError, Result};
use crate::store;

/// Runtime configuration: CLI flags merged over the optional config file
/// (~/.config/autodiag/config.toml or the platform equivalent).
pub struct Config {
    pub history_path: PathBuf,
    pub analysis_delay: Duration,
    pub json_output: bool,
    pub verbose: bool,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    /// Overrides the default history location.
    history_path: Option<PathBuf>,
    /// Simulated analysis latency as a duration string ("2s", "500ms").
    analysis_delay: Option<String>,
}

impl Config {
    pub fn load(json_output: bool, verbose: bool) -> Result<Self> {
        let file = read_config_file()?;

        let history_path = match file.history_path {
            Some(path) => path,
            None => store::default_history_path()?,
        };

        let analysis_delay = match file.analysis_delay {
            Some(raw) => parse_delay(&raw)?,
            None => analyzer::DEFAULT_DELAY,
        };

        Ok(Config {
            history_path,
            analysis_delay,
            json_output,
            verbose,
        })
    }
}

fn parse_delay(raw: &str) -> Result<Duration> {
    humantime::parse_duration(raw)
        .map_err(|e| AutodiagError::Config(format!("invalid analysis_delay {raw:?}: {e}")))
}

fn read_config_file() -> Result<ConfigFile> {
    let Some(dirs) = directories::ProjectDirs::from("", "", "autodiag") else {
        return Ok(ConfigFile::default());
    };

    let path = dirs.config_dir().join("config.toml");
    match fs::read_to_string(&path) {
        Ok(raw) => parse_config(&raw, &path),
        // no config file is the normal case
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(AutodiagError::Config(format!(
            "could not read {}: {e}",
            path.display()
        ))),
    }
}

fn parse_config(raw: &str, path: &std::path::Path) -> Result<ConfigFile> {
    toml::from_str(raw)
        .map_err(|e| AutodiagError::Config(format!("could not parse {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn empty_config_uses_defaults() {
        let file = parse_config("", Path::new("config.toml")).unwrap();
        assert!(file.history_path.is_none());
        assert!(file.analysis_delay.is_none());
    }

    #[test]
    fn config_keys_parse() {
        let file = parse_config(
            "history_path = \"/tmp/scans.json\"\nanalysis_delay = \"500ms\"\n",
            Path::new("config.toml"),
        )
        .unwrap();

        assert_eq!(file.history_path, Some(PathBuf::from("/tmp/scans.json")));
        assert_eq!(
            parse_delay(file.analysis_delay.as_deref().unwrap()).unwrap(),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let result = parse_config("history_path = [broken", Path::new("config.toml"));
        assert!(matches!(result, Err(AutodiagError::Config(_))));
    }

    #[test]
    fn bad_delay_string_is_a_config_error() {
        assert!(matches!(
            parse_delay("soon"),
            Err(AutodiagError::Config(_))
        ));
    }
}
