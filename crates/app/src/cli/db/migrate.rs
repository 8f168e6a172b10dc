use clap::Args;
use comp_harbor_app::database;

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: MigrateArgs) -> Result<(), String> {
    let db = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    db.migrate()
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    db.close().await;

    println!("migrations applied");

    Ok(())
}
