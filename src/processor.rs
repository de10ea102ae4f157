use log::debug;

use crate::collection::{ArgumentCollection, Parser, Resolution};

/// Parses user tokens and runs the matched actions in order.
///
/// Actions always receive an empty parameter list. Whatever an action returns
/// or panics with reaches the caller untouched.
#[derive(Debug)]
pub struct Processor<'a, R> {
    parser: Parser<'a, R>,
}

impl<'a, R> Processor<'a, R> {
    pub fn new(collection: &'a ArgumentCollection<R>) -> Self {
        Self {
            parser: collection.parser(),
        }
    }

    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.parser = self.parser.resolution(resolution);
        self
    }

    /// Runs every resolved action and returns what each produced, in order.
    /// An action reporting failure through `R` does not stop later ones; use
    /// [`try_process`](Processor::try_process) for that.
    #[must_use = "action results may carry failures"]
    pub fn process<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<R> {
        self.parser
            .parse_args(tokens)
            .into_iter()
            .map(|arg| {
                debug!("running --{}", arg.long());
                arg.invoke(&[])
            })
            .collect()
    }
}

impl<T, E> Processor<'_, Result<T, E>> {
    /// Runs actions until one fails and hands back that action's error.
    /// Actions after the failing one are not run.
    pub fn try_process<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<T>, E> {
        self.parser
            .parse_args(tokens)
            .into_iter()
            .map(|arg| {
                debug!("running --{}", arg.long());
                arg.invoke(&[])
            })
            .collect()
    }
}
