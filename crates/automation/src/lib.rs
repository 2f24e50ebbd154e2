//! `packetbase-automation` library crate.
//!
//! Exposes the ten PacketBase operations as named commands for a security
//! automation dispatcher. The operations sit behind [`ops::PacketBaseOps`];
//! [`commands`] is the dispatcher glue and can be swapped without touching
//! the HTTP client. The binary entrypoint lives in `main.rs`.

pub mod client;
pub mod commands;
pub mod config;
pub mod ops;
pub mod results;
