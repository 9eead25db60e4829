//! Application layer for GeoShell.
//!
//! This crate provides the action-level entry points over the core session
//! state and the startup wiring that assembles the shell for the embedding
//! presentation layer.

pub mod session_service;
pub mod shell;

pub use session_service::SessionService;
pub use shell::AppShell;
