use crate::normalize::NormalizeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrajprepCliError {
    #[error("{source}")]
    NormalizeError {
        #[from]
        source: NormalizeError,
    },
    #[error("output directory '{0}' failed verification")]
    VerificationFailed(String),
}
