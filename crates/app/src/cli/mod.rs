use clap::{Parser, Subcommand};

mod brands;
mod db;

#[derive(Debug, Parser)]
#[command(name = "comp-harbor-app", about = "Comp Harbor CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Brands(brands::BrandsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Brands(command) => brands::run(command).await,
        }
    }
}
