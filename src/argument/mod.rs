mod error;
pub mod matcher;

pub use error::ArgumentError;
pub use matcher::{LONG_PREFIX, MatchedBy, SHORT_PREFIX, matches_long, matches_short};

use std::fmt;
use std::sync::Arc;

/// Side effect bound to an argument. Receives any trailing parameters, which
/// the default processor never captures.
pub type Action<R> = Arc<dyn Fn(&[String]) -> R + Send + Sync>;

/// One recognized flag: `-<short>` / `--<long>` plus what to do when it is
/// passed.
pub struct Argument<R> {
    short: char,
    long: String,
    description: String,
    action: Action<R>,
}

impl<R> Argument<R> {
    pub fn new<F>(
        short: char,
        long: impl Into<String>,
        description: impl Into<String>,
        action: F,
    ) -> Result<Self, ArgumentError>
    where
        F: Fn(&[String]) -> R + Send + Sync + 'static,
    {
        let long = long.into();

        if short.is_whitespace() {
            return Err(ArgumentError::WhitespaceShort(short));
        }
        if short == '-' {
            return Err(ArgumentError::HyphenShort);
        }
        if long.is_empty() {
            return Err(ArgumentError::EmptyLong);
        }
        if long.chars().any(char::is_whitespace) {
            return Err(ArgumentError::WhitespaceLong(long));
        }

        Ok(Self {
            short,
            long,
            description: description.into(),
            action: Arc::new(action),
        })
    }

    /// Skips validation; only for forms known to be valid at compile time.
    pub(crate) fn builtin<F>(short: char, long: &str, description: &str, action: F) -> Self
    where
        F: Fn(&[String]) -> R + Send + Sync + 'static,
    {
        Self {
            short,
            long: long.to_string(),
            description: description.to_string(),
            action: Arc::new(action),
        }
    }

    pub fn short(&self) -> char {
        self.short
    }

    pub fn long(&self) -> &str {
        &self.long
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The literal forms a user can type, short first.
    pub fn all_argument_strings(&self) -> [String; 2] {
        [
            format!("{SHORT_PREFIX}{}", self.short),
            format!("{LONG_PREFIX}{}", self.long),
        ]
    }

    /// `[-s | --long]`, as shown in usage text.
    pub fn usage_token(&self) -> String {
        format!("[{}]", self.all_argument_strings().join(" | "))
    }

    pub fn match_token(&self, token: &str) -> Option<MatchedBy> {
        if matches_long(token, &self.long) {
            Some(MatchedBy::Long)
        } else if matches_short(token, self.short) {
            Some(MatchedBy::Short)
        } else {
            None
        }
    }

    pub fn matches(&self, token: &str) -> bool {
        self.match_token(token).is_some()
    }

    pub fn invoke(&self, parameters: &[String]) -> R {
        (self.action)(parameters)
    }
}

impl<R> Clone for Argument<R> {
    fn clone(&self) -> Self {
        Self {
            short: self.short,
            long: self.long.clone(),
            description: self.description.clone(),
            action: Arc::clone(&self.action),
        }
    }
}

impl<R> fmt::Debug for Argument<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argument")
            .field("short", &self.short)
            .field("long", &self.long)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
