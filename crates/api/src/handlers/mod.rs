pub mod cat;
pub mod mission;
pub mod target;
