//! Command implementations for the regdoc CLI

pub mod inspect;
pub mod render;
pub mod schema;
