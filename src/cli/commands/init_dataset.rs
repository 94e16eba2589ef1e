use anyhow::Result;
use model::SalesStore;
use tracing::info;

/// Create the dataset file (headers only) if it does not exist yet, or
/// report how many records an existing one holds.
pub fn init_dataset(dataset_path: &str) -> Result<()> {
    let store = SalesStore::load_or_init(dataset_path)?;
    info!(
        records = store.len(),
        "Dataset ready at {}", dataset_path
    );
    Ok(())
}
