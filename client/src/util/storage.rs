//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write behavior so callers never repeat
//! web-sys glue. Storage being unavailable (private mode, disabled cookies)
//! is logged and otherwise treated as an empty store.

/// Load the raw string stored under `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("localStorage read of {key:?} failed: {e:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save `value` under `key`.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("localStorage write of {key:?} failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("localStorage unavailable: {e:?}");
            None
        }
    }
}
