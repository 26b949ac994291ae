use clap::Parser;
use imgset::cli::{Cli, Commands};
use imgset::output::Printer;
use miette::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => imgset::cli::generate::run(args, &printer).await?,
        Commands::List(args) => imgset::cli::list::run(args, &printer)?,
        Commands::Init(args) => imgset::cli::init::run(args, &printer)?,
        Commands::Completions(args) => imgset::cli::completions::run(args)?,
    }

    Ok(())
}
