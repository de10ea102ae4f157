//! Token predicates for the two flag shapes.
//!
//! A short flag is accepted loosely: any hyphen-prefixed, whitespace-free token
//! that mentions the character, so `-abc` satisfies `a`, `b` and `c` alike. It
//! also accepts tokens like `-xyz` for `y` even when the user meant something
//! else entirely; callers that need stricter semantics must check the token
//! themselves.

pub const SHORT_PREFIX: &str = "-";
pub const LONG_PREFIX: &str = "--";

/// Which of an argument's forms accepted a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedBy {
    Long,
    Short,
}

/// `true` when `token` is exactly `--<long>`.
pub fn matches_long(token: &str, long: &str) -> bool {
    token.strip_prefix(LONG_PREFIX) == Some(long)
}

/// `true` when `token` is a single-hyphen token containing `short` after the
/// hyphen and no whitespace anywhere.
pub fn matches_short(token: &str, short: char) -> bool {
    if token.starts_with(LONG_PREFIX) {
        return false;
    }
    let Some(rest) = token.strip_prefix(SHORT_PREFIX) else {
        return false;
    };
    if token.chars().any(char::is_whitespace) {
        return false;
    }
    rest.contains(short)
}
