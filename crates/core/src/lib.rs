//! `viewstate-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, the value object marker and the state-capture contract.

pub mod error;
pub mod id;
pub mod state;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::SnapshotId;
pub use state::{State, StateSnapshot, View, decode_state, discard_state, encode_state};
pub use value_object::ValueObject;
