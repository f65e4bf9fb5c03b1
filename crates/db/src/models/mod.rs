//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Fields a client may not write (ids, derived flags, timestamps) are simply
//! absent from the DTOs, so serde drops them from incoming payloads.

pub mod cat;
pub mod mission;
pub mod target;
