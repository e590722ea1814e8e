//! Step definitions for project lifecycle scenarios.

pub mod world;

mod given;
mod then;
mod when;
