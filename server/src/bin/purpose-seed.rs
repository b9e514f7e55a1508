//! Create the purposes table and load sample data into an empty database.

use purpose_registry::{seed_if_empty, PurposeStore, SeedOutcome, Settings};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("purpose_registry=info")),
        )
        .init();

    let store = PurposeStore::connect(&settings).await?;
    match seed_if_empty(&store).await? {
        SeedOutcome::Inserted(n) => println!("Added {} sample purposes to the database.", n),
        SeedOutcome::AlreadyPopulated => println!("Database already contains purposes. No sample data added."),
    }
    Ok(())
}
