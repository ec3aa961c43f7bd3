//! Full-page navigation capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session teardown ends with a full navigation so every in-memory state is
//! rebuilt from storage on the next load. Callers that want an in-app
//! transition use the router's `use_navigate` instead; this helper is the
//! default navigator injected into `session::logout`.

/// Navigate the browser to `path`, replacing the current document.
/// A no-op when the document is already at `path`, so repeated redirects
/// from concurrent failures do not reload the destination.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if location.pathname().ok().as_deref() == Some(path) {
                return;
            }
            let _ = location.set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
