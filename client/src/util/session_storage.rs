//! `sessionStorage`-backed store for the splash "already shown" flag.
//!
//! The browser clears `sessionStorage` when the tab's session ends but keeps
//! it across reloads, which is exactly the lifetime the flag needs. Outside a
//! browser build every call reports the storage as unavailable, and the gate
//! treats that as a first visit.

#[cfg(all(test, not(feature = "csr")))]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use loadgate::{SessionError, SessionStore};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "csr")]
fn storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .ok_or(SessionError::Unavailable)
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        #[cfg(feature = "csr")]
        {
            storage()?
                .get_item(key)
                .map_err(|e| SessionError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(SessionError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            storage()?
                .set_item(key, value)
                .map_err(|e| SessionError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(SessionError::Unavailable)
        }
    }
}
