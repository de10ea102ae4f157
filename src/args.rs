use crate::collection::ParseArgs;
use crate::help::HelpArgs;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Resolve command-line tokens against declared flags and report the matches"
)]
pub struct Args {
    #[arg(long, value_name = "PATH", help = "Config file declaring the arguments")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        conflicts_with = "config",
        help = "Ignore snekargs.toml files and declare no arguments"
    )]
    pub no_config: bool,

    #[arg(long, value_enum, help = "Output format [default: text]")]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Write output to file (in addition to stdout)")]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Suppress output")]
    pub quiet: bool,

    #[command(flatten)]
    pub usage: HelpArgs,

    #[command(flatten)]
    pub parse: ParseArgs,

    #[arg(last = true, value_name = "TOKENS", help = "Tokens to resolve")]
    pub tokens: Vec<String>,
}
