//! HTTP clients for the PacketBase upstream services.
//!
//! [`api::UpstreamApi`] is a thin [`reqwest`] wrapper bound to one base URL
//! that returns raw response bodies. [`models::ModelServiceApi`] and
//! [`flows::FlowStoreApi`] name the endpoints of the model-serving service
//! and the flow database on top of it.

pub mod api;
pub mod flows;
pub mod models;
pub mod upload;

pub use api::{ClientError, UpstreamApi, UpstreamBody};
pub use flows::FlowStoreApi;
pub use models::ModelServiceApi;
pub use upload::UploadFile;
