use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::ConfigError;
use crate::domain::errors::DomainError;

/// Feeds every entry of a JSON array file through `import`, stopping at the
/// first rejected entry. Returns the number of records loaded.
pub fn load_seed<T, F>(path: &Path, mut import: F) -> Result<usize, ConfigError>
where
    F: FnMut(&Value) -> Result<T, DomainError>,
{
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::SeedIo {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<Value> =
        serde_json::from_str(&raw).map_err(|source| ConfigError::SeedFormat {
            path: path.to_path_buf(),
            source,
        })?;

    for (index, entry) in entries.iter().enumerate() {
        import(entry).map_err(|e| ConfigError::SeedEntry {
            path: path.to_path_buf(),
            index,
            message: e.to_string(),
        })?;
    }

    log::info!("Loaded {} records from {}", entries.len(), path.display());
    Ok(entries.len())
}
