pub mod args;
mod error;
pub mod parser;

pub use args::ParseArgs;
pub use error::{CollectionError, ParseError};
pub use parser::{Parser, Resolution};

use log::debug;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::argument::Argument;
use crate::help::{HelpError, HelpFormatter};

/// The fixed, ordered set of arguments a program recognizes.
///
/// No two arguments share a short or a long form.
pub struct ArgumentCollection<R> {
    args: Vec<Argument<R>>,
}

impl<R> ArgumentCollection<R> {
    pub fn new(args: Vec<Argument<R>>) -> Result<Self, CollectionError> {
        check_unique(&args)?;
        debug!("declared {} arguments", args.len());
        Ok(Self { args })
    }

    /// Declares `args` followed by the built-in `-?`/`--help` argument, whose
    /// usage text lists every argument including itself. `finish` turns the
    /// outcome of writing the help text into the collection's action result.
    pub fn with_help<F>(
        mut args: Vec<Argument<R>>,
        formatter: HelpFormatter,
        finish: F,
    ) -> Result<Self, CollectionError>
    where
        F: Fn(Result<(), HelpError>) -> R + Send + Sync + 'static,
    {
        let help = formatter.into_argument(&args, finish);
        args.push(help);
        Self::new(args)
    }

    pub fn args(&self) -> &[Argument<R>] {
        &self.args
    }

    pub fn parser(&self) -> Parser<'_, R> {
        Parser::new(self)
    }

    /// Resolves `tokens` with the default parser: first match per token,
    /// unrecognized tokens dropped.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<&Argument<R>> {
        self.parser().parse_args(tokens)
    }
}

fn check_unique<R>(args: &[Argument<R>]) -> Result<(), CollectionError> {
    let mut shorts: HashMap<char, &str> = HashMap::new();
    let mut longs: HashSet<&str> = HashSet::new();

    for arg in args {
        if let Some(first) = shorts.insert(arg.short(), arg.long()) {
            return Err(CollectionError::DuplicateShort {
                short: arg.short(),
                first: first.to_string(),
                second: arg.long().to_string(),
            });
        }
        if !longs.insert(arg.long()) {
            return Err(CollectionError::DuplicateLong(arg.long().to_string()));
        }
    }

    Ok(())
}

impl<R> fmt::Debug for ArgumentCollection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentCollection")
            .field("args", &self.args)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg(short: char, long: &str) -> Argument<()> {
        Argument::new(short, long, "", |_| ()).unwrap()
    }

    #[test]
    fn keeps_declaration_order() {
        let args = ArgumentCollection::new(vec![arg('b', "beta"), arg('a', "alpha")]).unwrap();
        let longs: Vec<_> = args.args().iter().map(|a| a.long()).collect();
        assert_eq!(longs, vec!["beta", "alpha"]);
    }

    #[test]
    fn rejects_duplicate_short_form() {
        let err = ArgumentCollection::new(vec![arg('v', "verbose"), arg('v', "version")])
            .unwrap_err();
        assert_eq!(
            err,
            CollectionError::DuplicateShort {
                short: 'v',
                first: "verbose".to_string(),
                second: "version".to_string(),
            }
        );
    }

    #[test]
    fn rejects_duplicate_long_form() {
        let err = ArgumentCollection::new(vec![arg('v', "verbose"), arg('V', "verbose")])
            .unwrap_err();
        assert_eq!(err, CollectionError::DuplicateLong("verbose".to_string()));
    }

    #[test]
    fn help_is_appended_last() {
        let formatter = HelpFormatter::new("tool").sink(std::io::sink());
        let args =
            ArgumentCollection::with_help(vec![arg('v', "verbose")], formatter, |_| ()).unwrap();
        let last = args.args().last().unwrap();
        assert_eq!(last.short(), '?');
        assert_eq!(last.long(), "help");
        assert_eq!(last.description(), "Display this message");
    }

    #[test]
    fn help_conflicts_with_declared_help() {
        let formatter = HelpFormatter::new("tool").sink(std::io::sink());
        let err = ArgumentCollection::with_help(vec![arg('h', "help")], formatter, |_| ())
            .unwrap_err();
        assert_eq!(err, CollectionError::DuplicateLong("help".to_string()));
    }

    #[test]
    fn parse_resolves_first_match() {
        let args = ArgumentCollection::new(vec![arg('v', "verbose"), arg('h', "help")]).unwrap();
        let parsed = args.parse(&["-vh"]);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].long(), "verbose");
    }
}
