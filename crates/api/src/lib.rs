//! Spy cat agency API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes,
//! breed source) so integration tests and the binary entrypoint can both
//! access them.

pub mod app;
pub mod breeds;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;
