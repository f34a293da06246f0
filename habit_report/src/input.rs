//! Loading saved API responses from disk

use anyhow::{Context, Result};
use habit_core::{ContentCatalog, Task, UserSnapshot};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;

pub fn load_user(path: &Path) -> Result<UserSnapshot> {
    load(path, "user record")
}

pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    load(path, "task list")
}

pub fn load_content(path: &Path) -> Result<ContentCatalog> {
    let catalog: ContentCatalog = load(path, "content")?;
    tracing::info!(
        "content has {} gear items and {} quests",
        catalog.gear.flat.len(),
        catalog.quests.len()
    );
    Ok(catalog)
}

fn load<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {} from {}", what, path.display()))?;
    parse(&raw).with_context(|| format!("failed to parse {} in {}", what, path.display()))
}

/// Parse a document that is either bare or wrapped as `{ "data": ... }`
pub fn parse<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let value: Value = serde_json::from_str(raw)?;
    let value = match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    Ok(serde_json::from_value(value)?)
}
