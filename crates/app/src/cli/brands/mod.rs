use clap::{Args, Subcommand};

mod import;
mod list;

#[derive(Debug, Args)]
pub(crate) struct BrandsCommand {
    #[command(subcommand)]
    command: BrandsSubcommand,
}

#[derive(Debug, Subcommand)]
enum BrandsSubcommand {
    /// Insert every object of a JSON array file as a brand
    Import(import::ImportBrandsArgs),
    /// Print all brands as JSON
    List(list::ListBrandsArgs),
}

pub(crate) async fn run(command: BrandsCommand) -> Result<(), String> {
    match command.command {
        BrandsSubcommand::Import(args) => import::run(args).await,
        BrandsSubcommand::List(args) => list::run(args).await,
    }
}
