use clap::Args;

#[derive(Debug, Default, Args)]
pub struct ParseArgs {
    #[arg(
        long,
        help = "Resolve a token to every argument it matches, so -vq means -v -q"
    )]
    pub all_matches: bool,

    #[arg(long, help = "Fail on tokens that match no declared argument")]
    pub strict: bool,
}
