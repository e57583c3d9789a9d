use super::trajectory_reader::TrajectoryParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("invalid normalizer configuration: {0}")]
    ConfigurationError(String),
    #[error("input directory '{0}' does not exist or is not a directory")]
    MissingInputDirectory(String),
    #[error("output path '{0}' exists and is not a directory")]
    InvalidOutputDirectory(String),
    #[error("output directory '{0}' already contains normalized trajectories, set overwrite to replace them")]
    OutputNotEmpty(String),
    #[error("failure reading {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("failure writing {path}: {source}")]
    WriteError {
        path: String,
        source: std::io::Error,
    },
    #[error("failure writing to file {path}: {source}")]
    CsvWriteError { path: String, source: csv::Error },
    #[error("failure reading trajectory {path}: {source}")]
    TrajectoryReadError {
        path: String,
        source: TrajectoryParseError,
    },
    #[error("malformed trajectory {path}: {source}")]
    MalformedTrajectory {
        path: String,
        source: TrajectoryParseError,
    },
}
