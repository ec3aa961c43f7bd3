//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage,
//! navigation) and the route-entry decision from page and component logic.

pub mod guard;
pub mod nav;
pub mod token;
