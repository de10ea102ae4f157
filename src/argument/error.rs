use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("long form must not be empty")]
    EmptyLong,

    #[error("short form {0:?} must not be whitespace")]
    WhitespaceShort(char),

    #[error("short form must not be a hyphen")]
    HyphenShort,

    #[error("long form {0:?} must not contain whitespace")]
    WhitespaceLong(String),
}
