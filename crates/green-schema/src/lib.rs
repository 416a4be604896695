//! # green-schema
//!
//! JSON Schema generation, validation, and registry for Greencheck.
//!
//! Wire and view types are defined in `green-core` with
//! `#[derive(JsonSchema)]`. This crate collects them into a
//! [`SchemaRegistry`] used by `greencheck schema` and by callers that want
//! to check a payload before decoding it.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
