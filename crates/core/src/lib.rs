//! Shared types for the PacketBase gateway and automation adapter.
//!
//! Flow records are kept as untyped JSON objects because their schema is
//! owned by the flow store; this crate only knows the envelope shapes the
//! gateway has to reshape.

pub mod error;
pub mod flow;
pub mod search;
