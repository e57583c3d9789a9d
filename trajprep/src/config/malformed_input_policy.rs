use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates alternative ways to handle a raw trajectory
/// file that cannot be parsed
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MalformedInputPolicy {
    /// log the file, count it as malformed and continue with the batch
    #[default]
    Skip,
    /// abort the whole run on the first malformed file
    Fail,
}
