use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::argument::Argument;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Jsonl,
}

/// An argument the user's tokens resolved to, in resolution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub short: char,
    pub long: String,
    pub description: String,
}

impl<R> From<&Argument<R>> for Resolved {
    fn from(arg: &Argument<R>) -> Self {
        Self {
            short: arg.short(),
            long: arg.long().to_string(),
            description: arg.description().to_string(),
        }
    }
}

pub fn format_output(
    format: OutputFormat,
    resolved: &[Resolved],
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(format_text(resolved)),
        OutputFormat::Json => serde_json::to_string_pretty(resolved),
        OutputFormat::Jsonl => format_jsonl(resolved),
    }
}

fn format_text(resolved: &[Resolved]) -> String {
    resolved
        .iter()
        .map(|r| {
            if r.description.is_empty() {
                format!("-{}\t--{}", r.short, r.long)
            } else {
                format!("-{}\t--{}\t{}", r.short, r.long, r.description)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_jsonl(resolved: &[Resolved]) -> Result<String, serde_json::Error> {
    let lines = resolved
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}
