//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and list items while reading shared
//! state from Leptos context providers.

pub mod nav_bar;
pub mod vm_card;
