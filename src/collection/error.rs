use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    #[error("short form -{short} is declared by both --{first} and --{second}")]
    DuplicateShort {
        short: char,
        first: String,
        second: String,
    },

    #[error("long form --{0} is declared more than once")]
    DuplicateLong(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognized argument {token:?} at position {position}")]
    Unrecognized { token: String, position: usize },
}
