//! Declare the flags a program understands, resolve user tokens against them
//! and run the matching actions.
//!
//! ```
//! use snekargs::{Argument, ArgumentCollection, Processor};
//!
//! let args = ArgumentCollection::new(vec![
//!     Argument::new('v', "verbose", "Print more", |_| "verbose").unwrap(),
//!     Argument::new('q', "quiet", "Print less", |_| "quiet").unwrap(),
//! ])
//! .unwrap();
//!
//! let ran = Processor::new(&args).process(&["--quiet", "-x", "-v"]);
//! assert_eq!(ran, vec!["quiet", "verbose"]);
//! ```

pub mod args;
pub mod argument;
pub mod collection;
pub mod config;
pub mod error;
pub mod help;
pub mod output;
pub mod processor;

pub use argument::{Argument, ArgumentError, MatchedBy};
pub use collection::{ArgumentCollection, CollectionError, ParseError, Parser, Resolution};
pub use error::SnekError;
pub use help::{HelpError, HelpFormatter};
pub use processor::Processor;
