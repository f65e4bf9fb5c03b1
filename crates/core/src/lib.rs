//! Domain types and business rules for the spy cat agency.
//!
//! Everything in this crate is pure: no database or network access. The
//! `db` crate persists the entities and the `api` crate applies these
//! rules inside a transaction.

pub mod breed;
pub mod error;
pub mod mission;
pub mod patch;
pub mod target;
pub mod types;
pub mod validation;
