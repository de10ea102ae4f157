use log::trace;

use super::{ArgumentCollection, ParseError};
use crate::argument::Argument;

/// How many declared arguments a single token may resolve to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Resolution {
    /// The first argument, in declaration order, that accepts the token.
    /// `-vh` therefore resolves to whichever of `v` and `h` was declared first.
    #[default]
    FirstMatch,
    /// Every argument that accepts the token, in declaration order. This is
    /// what lets `-vh` stand for `-v -h`.
    AllMatches,
}

/// Maps user tokens onto the arguments of a collection, keeping input order.
///
/// Parameters following a flag (`-o out.txt`) are not captured; `out.txt` is
/// just another token that usually matches nothing.
#[derive(Debug)]
pub struct Parser<'a, R> {
    collection: &'a ArgumentCollection<R>,
    resolution: Resolution,
}

impl<'a, R> Parser<'a, R> {
    pub fn new(collection: &'a ArgumentCollection<R>) -> Self {
        Self {
            collection,
            resolution: Resolution::default(),
        }
    }

    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Resolves every token, silently dropping the ones nothing accepts.
    pub fn parse_args<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<&'a Argument<R>> {
        let mut resolved = Vec::new();
        for token in tokens {
            let token = token.as_ref();
            if !self.resolve_into(token, &mut resolved) {
                trace!("ignoring unrecognized argument {token:?}");
            }
        }
        resolved
    }

    /// Like [`parse_args`](Self::parse_args) but fails on the first token that
    /// matches nothing.
    pub fn try_parse_args<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Result<Vec<&'a Argument<R>>, ParseError> {
        let mut resolved = Vec::new();
        for (position, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            if !self.resolve_into(token, &mut resolved) {
                return Err(ParseError::Unrecognized {
                    token: token.to_string(),
                    position,
                });
            }
        }
        Ok(resolved)
    }

    fn resolve_into(&self, token: &str, resolved: &mut Vec<&'a Argument<R>>) -> bool {
        let mut candidates = self
            .collection
            .args()
            .iter()
            .filter_map(|arg| arg.match_token(token).map(|by| (arg, by)));

        let before = resolved.len();
        match self.resolution {
            Resolution::FirstMatch => {
                if let Some((arg, by)) = candidates.next() {
                    trace!("{token:?} resolved to --{} via {by:?} form", arg.long());
                    resolved.push(arg);
                }
            }
            Resolution::AllMatches => {
                for (arg, by) in candidates {
                    trace!("{token:?} resolved to --{} via {by:?} form", arg.long());
                    resolved.push(arg);
                }
            }
        }
        resolved.len() > before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> ArgumentCollection<char> {
        ArgumentCollection::new(vec![
            Argument::new('v', "verbose", "", |_| 'v').unwrap(),
            Argument::new('h', "help", "", |_| 'h').unwrap(),
            Argument::new('q', "quiet", "", |_| 'q').unwrap(),
        ])
        .unwrap()
    }

    fn shorts(args: &[&Argument<char>]) -> Vec<char> {
        args.iter().map(|a| a.short()).collect()
    }

    #[test]
    fn preserves_input_order() {
        let args = collection();
        let parsed = Parser::new(&args).parse_args(&["-q", "--help", "-v"]);
        assert_eq!(shorts(&parsed), vec!['q', 'h', 'v']);
    }

    #[test]
    fn drops_unknown_tokens() {
        let args = collection();
        let parsed = Parser::new(&args).parse_args(&["-v", "--unknown", "file.txt", "--help"]);
        assert_eq!(shorts(&parsed), vec!['v', 'h']);
    }

    #[test]
    fn keeps_repeated_tokens() {
        let args = collection();
        let parsed = Parser::new(&args).parse_args(&["-v", "-v"]);
        assert_eq!(shorts(&parsed), vec!['v', 'v']);
    }

    #[test]
    fn first_match_takes_declaration_order() {
        let args = collection();
        let parsed = Parser::new(&args).parse_args(&["-qv"]);
        assert_eq!(shorts(&parsed), vec!['v']);
    }

    #[test]
    fn all_matches_expands_combined_flags() {
        let args = collection();
        let parsed = Parser::new(&args)
            .resolution(Resolution::AllMatches)
            .parse_args(&["-qv", "--help"]);
        assert_eq!(shorts(&parsed), vec!['v', 'q', 'h']);
    }

    #[test]
    fn whitespace_tokens_match_nothing() {
        let args = collection();
        let parsed = Parser::new(&args).parse_args(&["-v q", " -v", "--help "]);
        assert!(parsed.is_empty());
    }

    #[test]
    fn empty_input() {
        let args = collection();
        let tokens: [&str; 0] = [];
        assert!(Parser::new(&args).parse_args(&tokens).is_empty());
    }

    #[test]
    fn strict_reports_first_unknown() {
        let args = collection();
        let err = Parser::new(&args)
            .try_parse_args(&["-v", "--nope", "--other"])
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::Unrecognized {
                token: "--nope".to_string(),
                position: 1,
            }
        );
    }

    #[test]
    fn strict_accepts_known_tokens() {
        let args = collection();
        let parsed = Parser::new(&args)
            .try_parse_args(&["--verbose", "-h"])
            .unwrap();
        assert_eq!(shorts(&parsed), vec!['v', 'h']);
    }

    #[test]
    fn accepts_owned_strings() {
        let args = collection();
        let tokens = vec!["-h".to_string()];
        assert_eq!(shorts(&Parser::new(&args).parse_args(&tokens)), vec!['h']);
    }
}
