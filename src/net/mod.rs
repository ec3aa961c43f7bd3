//! Networking modules for the HTTP gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the single request path every outbound call funnels through,
//! `error` is its failure taxonomy, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
