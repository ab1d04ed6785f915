//! Go source rendering of emitted schemas and model structs
//!
//! Rendering is a pure function of the typed trees built by
//! [`crate::migration`]; nothing here makes emission decisions.

pub mod model;
pub mod schema;
mod writer;

pub use model::render as render_model;
pub use schema::render as render_schema;
pub use writer::quote;
