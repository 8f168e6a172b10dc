use clap::Args;
use comp_harbor_app::{
    database,
    domain::brands::{BrandsService, PgBrandsService},
};

#[derive(Debug, Args)]
pub(crate) struct ListBrandsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListBrandsArgs) -> Result<(), String> {
    let db = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let brands = PgBrandsService::new(db.clone())
        .list_brands()
        .await
        .map_err(|error| format!("failed to list brands: {error}"))?;

    let rendered = serde_json::to_string_pretty(&brands)
        .map_err(|error| format!("failed to render brands: {error}"))?;

    println!("{rendered}");

    db.close().await;

    Ok(())
}
