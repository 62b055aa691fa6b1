//! Typed models for the market snapshot payload.
//!
//! Field names mirror the wire format the provider is instructed to
//! produce (see [`crate::schema`]), so these structs double as the
//! deserialization target for the generated JSON.

pub mod breadth;
pub mod flows;
pub mod metric;
pub mod movers;
pub mod snapshot;
