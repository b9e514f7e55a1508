//! Sample purposes loaded into an empty database.

use crate::error::AppError;
use crate::model::NewPurpose;
use crate::store::PurposeStore;

/// (name, description, is_active)
const SAMPLE_PURPOSES: &[(&str, &str, bool)] = &[
    (
        "Marketing",
        "Storing data for marketing campaigns, analytics, and customer outreach",
        true,
    ),
    (
        "Customer Support",
        "Storing data to provide customer service and support",
        true,
    ),
    (
        "Product Improvement",
        "Storing data to analyze usage patterns and improve product features",
        true,
    ),
    (
        "Legal Compliance",
        "Storing data to comply with legal and regulatory requirements",
        true,
    ),
    (
        "Historical Research",
        "Storing data for historical research and archival purposes",
        false,
    ),
];

pub fn sample_purposes() -> Vec<NewPurpose> {
    SAMPLE_PURPOSES
        .iter()
        .map(|(name, description, active)| NewPurpose::new(*name).description(*description).active(*active))
        .collect()
}

/// Outcome of [`seed_if_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted(usize),
    AlreadyPopulated,
}

/// Ensure the schema exists and insert the sample purposes when the table is empty.
pub async fn seed_if_empty(store: &PurposeStore) -> Result<SeedOutcome, AppError> {
    store.ensure_schema().await?;
    if store.count().await? > 0 {
        tracing::info!("database already contains purposes; no sample data added");
        return Ok(SeedOutcome::AlreadyPopulated);
    }
    let samples = sample_purposes();
    for new in &samples {
        store.create(new).await?;
    }
    tracing::info!(count = samples.len(), "sample purposes added");
    Ok(SeedOutcome::Inserted(samples.len()))
}
