use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelpError {
    #[error("failed to write help text: {0}")]
    Write(#[from] std::io::Error),

    #[error("help output sink is poisoned")]
    SinkPoisoned,
}
