use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn set_item(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("Could not access localStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Failed to write to localStorage".to_string())
}

pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn remove_item(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("Could not access localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Failed to remove from localStorage".to_string())
}

/// Wipes everything. Session teardown clears the whole store, not just the
/// keys this app knows about.
pub fn clear() -> Result<(), String> {
    let storage = get_local_storage().ok_or("Could not access localStorage")?;
    storage
        .clear()
        .map_err(|_| "Failed to clear localStorage".to_string())
}
