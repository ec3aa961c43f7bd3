//! Credential persistence in browser localStorage.
//!
//! SYSTEM CONTEXT
//! ==============
//! One key holds the bearer token as an opaque string. Absence means logged
//! out; presence is only a hint until the server accepts the token on the
//! next request. Requires a browser environment; native builds see no
//! stored credential.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "access_token";

/// Read the stored credential, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the credential, replacing any previous one.
pub fn store(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored credential. Safe to call when none is stored.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
