use clap::Parser;
use novachef::cli::{commands, Args};
use novachef::logging::{self, LoggingConfig};

#[tokio::main]
async fn main() -> novachef::Result<()> {
    let args = Args::parse();
    let config = LoggingConfig::load()?;
    let _guard = logging::init(&config)?;
    commands::execute(args.command).await
}
