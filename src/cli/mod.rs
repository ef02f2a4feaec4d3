pub mod args;
pub mod commands;

pub use args::{DetectArgs, OpsArgs, RunArgs};
use clap::{Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
RECIPE COMMANDS:\n{subcommands}\n";

#[derive(Parser)]
#[command(name = "novachef")]
#[command(version = crate::VERSION)]
#[command(about = "Recipe-based text transformations with AI-assisted format detection")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: inspect the catalog with ops, assemble a recipe with run, or let detect suggest a starting point."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Apply a recipe to input text",
        long_about = "Run folds the given operations over the input, left to right, and prints the final output. Steps referencing unknown operation ids are skipped.",
        after_help = "Example:\n    novachef run aGVsbG8= --op base64-decode --op to-uppercase"
    )]
    Run(RunArgs),
    #[command(
        about = "List the operation catalog",
        long_about = "Ops prints the catalog in its fixed display order, optionally narrowed by a search term and a category.",
        after_help = "Example:\n    novachef ops --category Hashing"
    )]
    Ops(OpsArgs),
    #[command(
        about = "Suggest a starter recipe for the input",
        long_about = "Detect sends a capped sample of the input to the analysis collaborator and prints its best-effort format guess and suggested operations. Detection is advisory: any collaborator failure degrades to no suggestion.",
        after_help = "Example:\n    novachef detect aGVsbG8= --apply"
    )]
    Detect(DetectArgs),
}
