use clap::Parser;
use env_logger::Env;
use log::debug;
use std::env;
use std::fs;
use std::process::ExitCode;

use snekargs::args::Args;
use snekargs::config::{Config, HelpConfig, find_config, load_config};
use snekargs::error::SnekError;
use snekargs::help::{HELP_DESCRIPTION, HELP_LONG, HELP_SHORT};
use snekargs::output::{Resolved, format_output};
use snekargs::{Argument, ArgumentCollection, HelpFormatter, Processor, Resolution};

type Outcome = Result<Resolved, SnekError>;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SnekError> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    let name = args
        .usage
        .name
        .clone()
        .or_else(|| config.name.clone())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    let help_config = HelpConfig {
        right_margin: args.usage.right_margin.or(config.help.right_margin),
    };
    let formatter = HelpFormatter::from_config(name, &help_config);

    let mut declared = Vec::with_capacity(config.arguments.len());
    for entry in &config.arguments {
        let resolved = Resolved {
            short: entry.short,
            long: entry.long.clone(),
            description: entry.description.clone(),
        };
        declared.push(Argument::new(
            entry.short,
            entry.long.as_str(),
            entry.description.as_str(),
            move |_| -> Outcome { Ok(resolved.clone()) },
        )?);
    }

    let help_entry = Resolved {
        short: HELP_SHORT,
        long: HELP_LONG.to_string(),
        description: HELP_DESCRIPTION.to_string(),
    };
    let collection = ArgumentCollection::with_help(declared, formatter, move |written| {
        written?;
        Ok(help_entry.clone())
    })?;

    let resolution = if args.parse.all_matches || config.parse.all_matches.unwrap_or(false) {
        Resolution::AllMatches
    } else {
        Resolution::FirstMatch
    };

    if args.parse.strict || config.parse.strict.unwrap_or(false) {
        collection
            .parser()
            .resolution(resolution)
            .try_parse_args(&args.tokens)?;
    }

    let resolved: Vec<Resolved> = Processor::new(&collection)
        .resolution(resolution)
        .try_process(&args.tokens)?;

    let format = args.format.or(config.format).unwrap_or_default();
    let output = format_output(format, &resolved)?;

    if !(args.quiet || config.quiet.unwrap_or(false)) {
        println!("{output}");
    }

    if let Some(path) = args.output.as_ref().or(config.output.as_ref()) {
        fs::write(path, &output)?;
    }

    Ok(())
}

fn resolve_config(args: &Args) -> Result<Config, SnekError> {
    if args.no_config {
        return Ok(Config::default());
    }

    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => find_config(&env::current_dir()?),
    };

    match path {
        Some(path) => {
            debug!("loading config from {}", path.display());
            Ok(load_config(&path)?)
        }
        None => Ok(Config::default()),
    }
}
