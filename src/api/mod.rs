//! HTTP API for the assessment core.
//!
//! Three routes, mounted at the root:
//! - `GET /health`: liveness and version
//! - `POST /predict`: keyword estimate of a `HealthInput`
//! - `POST /analyze`: model assessment of a `UserHealthData`, with keyword
//!   fallback when the model call fails

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_api_server, ApiServer, ApiSession};
pub use types::{ApiContext, ClientFactory, ModelClient, SharedClient};
