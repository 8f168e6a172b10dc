use std::path::PathBuf;

use clap::Args;
use comp_harbor_app::{
    database,
    documents::Document,
    domain::brands::{BrandsService, PgBrandsService},
};

#[derive(Debug, Args)]
pub(crate) struct ImportBrandsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Path to a JSON file holding an array of brand objects
    #[arg(long)]
    file: PathBuf,
}

pub(crate) async fn run(args: ImportBrandsArgs) -> Result<(), String> {
    let contents = tokio::fs::read_to_string(&args.file)
        .await
        .map_err(|error| format!("failed to read {}: {error}", args.file.display()))?;

    // Parse everything up front so a malformed file inserts nothing.
    let brands: Vec<Document> = serde_json::from_str(&contents)
        .map_err(|error| format!("expected a JSON array of objects: {error}"))?;

    let db = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgBrandsService::new(db.clone());

    for brand in brands {
        let result = service
            .create_brand(brand)
            .await
            .map_err(|error| format!("failed to create brand: {error}"))?;

        println!("{}", result.inserted_id);
    }

    db.close().await;

    Ok(())
}
