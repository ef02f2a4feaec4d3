use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct RunArgs {
    /// Input text (reads stdin when neither INPUT nor --file is given)
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Read input from a file instead of the command line
    #[arg(long, value_name = "PATH", conflicts_with = "input")]
    pub file: Option<PathBuf>,

    /// Operation id to append to the recipe (repeatable, applied in order)
    #[arg(long = "op", value_name = "ID")]
    pub ops: Vec<String>,
}

#[derive(Args)]
pub struct OpsArgs {
    /// Case-insensitive term matched against operation names and categories
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,

    /// Restrict the listing to one category (default: all)
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct DetectArgs {
    /// Input text (reads stdin when neither INPUT nor --file is given)
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Read input from a file instead of the command line
    #[arg(long, value_name = "PATH", conflicts_with = "input")]
    pub file: Option<PathBuf>,

    /// Append the suggested operations and print the resulting output
    #[arg(long)]
    pub apply: bool,
}
