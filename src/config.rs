//! Run configuration for the solver, read from an optional TOML file and
//! overridden field by field from the command line.
//!
//! ```toml
//! engines = ["bfs-multi-prune", "astar"]
//! heuristic = "split-distance"
//! time-limit = "1m 30s"
//! verbosity = "verbose"
//! colour = false
//! ```

use crate::{
    bloxorz::BloxorzHeuristic,
    search::{search_engines::DEFAULT_TIME_LIMIT, SearchEngineName, Verbosity},
};
use serde::Deserialize;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A per-search time limit. `none` disables the limit, anything else is a
/// human readable duration such as `20s` or `1m 30s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct TimeLimit(Option<Duration>);

impl TimeLimit {
    pub fn unbounded() -> Self {
        Self(None)
    }

    pub fn duration(&self) -> Option<Duration> {
        self.0
    }
}

impl From<Duration> for TimeLimit {
    fn from(duration: Duration) -> Self {
        Self(Some(duration))
    }
}

impl FromStr for TimeLimit {
    type Err = humantime::DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" => Ok(Self::unbounded()),
            s => humantime::parse_duration(s).map(Self::from),
        }
    }
}

impl TryFrom<String> for TimeLimit {
    type Error = humantime::DurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TimeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(duration) => write!(f, "{}", humantime::format_duration(duration)),
            None => write!(f, "none"),
        }
    }
}

/// Partial solver configuration. Every field is optional so that a file and
/// the command line can each set a subset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SolverConfig {
    pub engines: Option<Vec<SearchEngineName>>,
    pub heuristic: Option<BloxorzHeuristic>,
    pub time_limit: Option<TimeLimit>,
    pub verbosity: Option<Verbosity>,
    pub colour: Option<bool>,
}

impl SolverConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Fields set in `other` replace the ones in `self`.
    pub fn override_with(self, other: SolverConfig) -> SolverConfig {
        SolverConfig {
            engines: other.engines.or(self.engines),
            heuristic: other.heuristic.or(self.heuristic),
            time_limit: other.time_limit.or(self.time_limit),
            verbosity: other.verbosity.or(self.verbosity),
            colour: other.colour.or(self.colour),
        }
    }

    /// Fills unset fields with their defaults.
    pub fn resolve(self) -> SolverSettings {
        let defaults = SolverSettings::default();
        SolverSettings {
            engines: self
                .engines
                .filter(|engines| !engines.is_empty())
                .unwrap_or(defaults.engines),
            heuristic: self.heuristic.unwrap_or(defaults.heuristic),
            time_limit: self.time_limit.unwrap_or(defaults.time_limit),
            verbosity: self.verbosity.unwrap_or(defaults.verbosity),
            colour: self.colour.unwrap_or(defaults.colour),
        }
    }
}

/// Fully resolved solver configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverSettings {
    pub engines: Vec<SearchEngineName>,
    pub heuristic: BloxorzHeuristic,
    pub time_limit: TimeLimit,
    pub verbosity: Verbosity,
    pub colour: bool,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            engines: vec![
                SearchEngineName::BFSMultiPrune,
                SearchEngineName::AStarMultiPrune,
                SearchEngineName::AStar,
            ],
            heuristic: BloxorzHeuristic::default(),
            time_limit: TimeLimit::from(DEFAULT_TIME_LIMIT),
            verbosity: Verbosity::default(),
            colour: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_time_limits() {
        assert_eq!(
            "20s".parse::<TimeLimit>().unwrap().duration(),
            Some(Duration::from_secs(20))
        );
        assert_eq!(
            "1m 30s".parse::<TimeLimit>().unwrap().duration(),
            Some(Duration::from_secs(90))
        );
        assert_eq!("none".parse::<TimeLimit>().unwrap(), TimeLimit::unbounded());
        assert!("soon".parse::<TimeLimit>().is_err());
        assert_eq!(TimeLimit::from(Duration::from_secs(20)).to_string(), "20s");
        assert_eq!(TimeLimit::unbounded().to_string(), "none");
    }

    #[test]
    fn reads_full_config() {
        let config = SolverConfig::from_toml(
            r#"
            engines = ["dfs", "astar-multi-prune"]
            heuristic = "zero"
            time-limit = "none"
            verbosity = "debug"
            colour = false
            "#,
        )
        .unwrap();
        assert_eq!(
            config.engines,
            Some(vec![SearchEngineName::DepthFirst, SearchEngineName::AStarMultiPrune])
        );
        assert_eq!(config.heuristic, Some(BloxorzHeuristic::Zero));
        assert_eq!(config.time_limit, Some(TimeLimit::unbounded()));
        assert_eq!(config.verbosity, Some(Verbosity::Debug));
        assert_eq!(config.colour, Some(false));
    }

    #[test]
    fn empty_config_resolves_to_defaults() {
        let settings = SolverConfig::from_toml("").unwrap().resolve();
        assert_eq!(settings, SolverSettings::default());
        assert_eq!(settings.heuristic, BloxorzHeuristic::SplitDistance);
        assert_eq!(settings.time_limit.duration(), Some(Duration::from_secs(20)));
        assert_eq!(settings.engines.len(), 3);
    }

    #[test]
    fn rejects_bad_config() {
        assert!(matches!(
            SolverConfig::from_toml("engine = \"astar\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(SolverConfig::from_toml("time-limit = \"later\"").is_err());
        assert!(SolverConfig::from_toml("engines = [\"best-first\"]").is_err());
    }

    #[test]
    fn command_line_overrides_file() {
        let file = SolverConfig {
            heuristic: Some(BloxorzHeuristic::Zero),
            verbosity: Some(Verbosity::Verbose),
            ..Default::default()
        };
        let cli = SolverConfig {
            verbosity: Some(Verbosity::Silent),
            ..Default::default()
        };
        let settings = file.override_with(cli).resolve();
        assert_eq!(settings.heuristic, BloxorzHeuristic::Zero);
        assert_eq!(settings.verbosity, Verbosity::Silent);
        assert!(!settings.colour);
    }

    #[test]
    fn colour_is_off_unless_requested() {
        assert!(!SolverSettings::default().colour);
        let cli = SolverConfig {
            colour: Some(true),
            ..Default::default()
        };
        assert!(SolverConfig::default().override_with(cli).resolve().colour);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solver.toml");
        assert!(matches!(
            SolverConfig::load(&path),
            Err(ConfigError::Io { .. })
        ));
        fs::write(&path, "colour = true\n").unwrap();
        assert_eq!(SolverConfig::load(&path).unwrap().colour, Some(true));
    }
}
