use crate::models::ListingRecord;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;
use tracing::warn;

pub const COMBINED_DATASET_FILE: &str = "all-results.json";

/// Write the per-listing snapshot file, a full overwrite on every run.
pub async fn write_listing(output_dir: &Path, record: &ListingRecord) -> Result<()> {
    fs::create_dir_all(output_dir).await?;
    let path = output_dir.join(format!("{}.json", record.external_id));
    let json = serde_json::to_string_pretty(record)?;
    fs::write(&path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Load the combined dataset. A missing or unparsable file degrades to an
/// empty dataset so a run can always produce output.
pub async fn load_dataset(path: &Path) -> Vec<ListingRecord> {
    match fs::read_to_string(path).await {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Combined dataset unreadable, starting fresh");
                Vec::new()
            }
        },
        Err(_) => Vec::new(),
    }
}

/// Upsert a batch into the combined dataset, keyed by external id: replace
/// in place when the key exists, append when it doesn't. Unrelated entries
/// keep their order and content. Returns the dataset size after the merge.
pub async fn upsert_records(output_dir: &Path, batch: &[ListingRecord]) -> Result<usize> {
    fs::create_dir_all(output_dir).await?;
    let path = output_dir.join(COMBINED_DATASET_FILE);
    let mut dataset = load_dataset(&path).await;

    let mut positions: HashMap<String, usize> = dataset
        .iter()
        .enumerate()
        .map(|(i, r)| (r.external_id.clone(), i))
        .collect();

    for record in batch {
        match positions.get(&record.external_id) {
            Some(&i) => dataset[i] = record.clone(),
            None => {
                positions.insert(record.external_id.clone(), dataset.len());
                dataset.push(record.clone());
            }
        }
    }

    let json = serde_json::to_string_pretty(&dataset)?;
    fs::write(&path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(dataset.len())
}
