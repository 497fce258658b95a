//! Moniker mappings stored as JSON objects.
//!
//! - `_moniker2nuget.json`: moniker -> package name
//! - `_moniker2Assembly.json`: moniker -> assembly names

use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

use super::InterchangeError;

pub const MONIKER_PACKAGES_FILE: &str = "_moniker2nuget.json";
pub const MONIKER_ASSEMBLIES_FILE: &str = "_moniker2Assembly.json";

pub fn read_moniker_packages(input: &[u8]) -> Result<IndexMap<String, String>, InterchangeError> {
    Ok(serde_json::from_slice(input)?)
}

pub fn read_moniker_assemblies(
    input: &[u8],
) -> Result<IndexMap<String, Vec<String>>, InterchangeError> {
    Ok(serde_json::from_slice(input)?)
}

/// Load `<root>/_moniker2nuget.json`; `None` when the file does not exist.
pub fn load_moniker_packages(root: &Path) -> Result<Option<IndexMap<String, String>>, InterchangeError> {
    let path = root.join(MONIKER_PACKAGES_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    let mapping = read_moniker_packages(&std::fs::read(&path)?)?;
    debug!(monikers = mapping.len(), "moniker package mapping loaded");
    Ok(Some(mapping))
}

/// Load `<root>/_moniker2Assembly.json`; `None` when the file does not exist.
pub fn load_moniker_assemblies(
    root: &Path,
) -> Result<Option<IndexMap<String, Vec<String>>>, InterchangeError> {
    let path = root.join(MONIKER_ASSEMBLIES_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    let mapping = read_moniker_assemblies(&std::fs::read(&path)?)?;
    debug!(monikers = mapping.len(), "moniker assembly mapping loaded");
    Ok(Some(mapping))
}
