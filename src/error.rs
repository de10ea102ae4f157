use thiserror::Error;

use crate::argument::ArgumentError;
use crate::collection::{CollectionError, ParseError};
use crate::config::ConfigError;
use crate::help::HelpError;

#[derive(Debug, Error)]
pub enum SnekError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Help(#[from] HelpError),

    #[error("failed to format output: {0}")]
    Format(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
