//! Mission lifecycle engine and target lifecycle guard.
//!
//! The only place that writes missions and targets. Each public write
//! opens a transaction, locks the rows it reads, checks the rules from
//! `spycat_core`, and commits only if every check passed.

pub mod mission;
pub mod target;
