//! Parties domain module.
//!
//! Holds the `Client` record: a plain value with a fixed display rendering
//! (no IO, no storage).

pub mod client;

pub use client::Client;
