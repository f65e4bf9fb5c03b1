//! Spy cat agency API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, the
//! mission lifecycle engine, the breed oracle client) so integration tests
//! and the binary entrypoint can both access them.

pub mod breed_oracle;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
