use serde::Deserialize;

/// How much a searcher reports about its progress.
///
/// Searchers emit their summary at [`Verbosity::Normal`], one line per
/// expansion at [`Verbosity::Verbose`], and neighbour lists plus frontier
/// snapshots at [`Verbosity::Debug`].
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verbosity {
    Silent,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Whether messages meant for `level` should be shown.
    pub fn shows(self, level: Verbosity) -> bool {
        level != Verbosity::Silent && self >= level
    }
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
