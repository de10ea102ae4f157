use clap::Args;

#[derive(Debug, Default, Args)]
pub struct HelpArgs {
    #[arg(long, help = "Executable name shown in usage text")]
    pub name: Option<String>,

    #[arg(
        long,
        value_name = "COLUMNS",
        help = "Column width usage text is wrapped to [default: 80]"
    )]
    pub right_margin: Option<usize>,
}
