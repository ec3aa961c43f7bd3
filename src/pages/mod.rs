//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guard installation, data
//! fetching) and delegates rendering details to `components`.

pub mod clone;
pub mod dashboard;
pub mod login;
pub mod users;
