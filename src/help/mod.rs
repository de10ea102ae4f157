//! Usage text for the built-in `-?`/`--help` argument.
//!
//! Output looks like this, with `\r\n` line endings and every continuation
//! line indented under the first argument:
//!
//! ```text
//! usage: tool  [-v | --verbose] [-q | --quiet]
//!             [-? | --help]
//! ```

pub mod args;
mod error;

pub use args::HelpArgs;
pub use error::HelpError;

use log::{Level, Log, Record};
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::argument::Argument;
use crate::config::HelpConfig;

pub const DEFAULT_RIGHT_MARGIN: usize = 80;

pub const HELP_SHORT: char = '?';
pub const HELP_LONG: &str = "help";
pub const HELP_DESCRIPTION: &str = "Display this message";

const LINE_END: &str = "\r\n";

pub struct HelpFormatter {
    executable_name: String,
    right_margin: usize,
    sink: Mutex<Box<dyn Write + Send>>,
    logger: Option<Arc<dyn Log>>,
}

impl HelpFormatter {
    /// Writes to stdout and logs through the global `log` facade until told
    /// otherwise.
    pub fn new(executable_name: impl Into<String>) -> Self {
        Self {
            executable_name: executable_name.into(),
            right_margin: DEFAULT_RIGHT_MARGIN,
            sink: Mutex::new(Box::new(io::stdout())),
            logger: None,
        }
    }

    pub fn from_config(executable_name: impl Into<String>, config: &HelpConfig) -> Self {
        Self::new(executable_name)
            .right_margin(config.right_margin.unwrap_or(DEFAULT_RIGHT_MARGIN))
    }

    pub fn right_margin(mut self, right_margin: usize) -> Self {
        self.right_margin = right_margin;
        self
    }

    pub fn sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Mutex::new(Box::new(sink));
        self
    }

    pub fn logger(mut self, logger: Arc<dyn Log>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn executable_name(&self) -> &str {
        &self.executable_name
    }

    /// Usage text for `declared` plus the help argument itself.
    pub fn render<R>(&self, declared: &[Argument<R>]) -> String {
        self.render_tokens(&usage_tokens(declared))
    }

    pub fn write_help<R>(&self, declared: &[Argument<R>]) -> Result<(), HelpError> {
        self.write_tokens(&usage_tokens(declared))
    }

    /// Builds the `-?`/`--help` argument. The usage tokens of `declared` are
    /// captured now, so later changes to that slice are not reflected.
    pub fn into_argument<R, F>(self, declared: &[Argument<R>], finish: F) -> Argument<R>
    where
        F: Fn(Result<(), HelpError>) -> R + Send + Sync + 'static,
    {
        let tokens = usage_tokens(declared);
        Argument::builtin(HELP_SHORT, HELP_LONG, HELP_DESCRIPTION, move |_| {
            finish(self.write_tokens(&tokens))
        })
    }

    fn prefix(&self) -> String {
        format!("usage: {} ", self.executable_name)
    }

    fn render_tokens(&self, tokens: &[String]) -> String {
        let mut output = self.prefix();
        let indent = output.chars().count();
        let width = summary_width(indent, self.right_margin);
        let padding = " ".repeat(indent);

        for line in wrap_summary(tokens, width) {
            output.push_str(&line);
            output.push_str(LINE_END);
            output.push_str(&padding);
        }
        output.push_str(LINE_END);
        output.push_str(LINE_END);
        output
    }

    fn write_tokens(&self, tokens: &[String]) -> Result<(), HelpError> {
        let text = self.render_tokens(tokens);
        self.log_debug(format_args!("no extended help for {} yet", self.executable_name));

        let mut sink = self.sink.lock().map_err(|_| HelpError::SinkPoisoned)?;
        sink.write_all(text.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    fn log_debug(&self, args: fmt::Arguments<'_>) {
        let record = Record::builder()
            .level(Level::Debug)
            .target(module_path!())
            .module_path_static(Some(module_path!()))
            .args(args)
            .build();
        match &self.logger {
            Some(logger) => logger.log(&record),
            None => log::logger().log(&record),
        }
    }
}

impl fmt::Debug for HelpFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelpFormatter")
            .field("executable_name", &self.executable_name)
            .field("right_margin", &self.right_margin)
            .finish_non_exhaustive()
    }
}

fn usage_tokens<R>(declared: &[Argument<R>]) -> Vec<String> {
    declared
        .iter()
        .map(Argument::usage_token)
        .chain(std::iter::once(help_usage_token()))
        .collect()
}

fn help_usage_token() -> String {
    format!("[-{HELP_SHORT} | --{HELP_LONG}]")
}

/// Columns available for argument tokens once the usage prefix is printed.
/// Never narrower than a third of the margin, however long the prefix.
pub fn summary_width(indent: usize, right_margin: usize) -> usize {
    right_margin.saturating_sub(indent).max(right_margin / 3)
}

/// First-fit wrap of `tokens` into lines of at most `width` chars.
///
/// The first line starts out empty, so whatever lands on it is preceded by a
/// space, and a token too wide for even that leaves it empty. Later lines
/// start with their first token. A token wider than `width` gets a line to
/// itself and is never split.
pub fn wrap_summary(tokens: &[String], width: usize) -> Vec<String> {
    let mut lines = vec![String::new()];

    for token in tokens {
        let token_len = token.chars().count();
        let Some(current) = lines.last_mut() else {
            continue;
        };

        if current.chars().count() + token_len + 1 > width {
            lines.push(token.clone());
        } else {
            current.push(' ');
            current.push_str(token);
        }
    }

    lines
}
