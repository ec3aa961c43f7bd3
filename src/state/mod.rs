//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! One focused model per domain; `session` is the only one the gateway
//! and guard depend on.

pub mod session;
