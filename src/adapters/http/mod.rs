//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `router` assembles them under `/api`.

pub mod error;
pub mod extract;
pub mod game;
pub mod middleware;
pub mod player;
pub mod router;
pub mod session;

pub use error::ErrorResponse;
pub use extract::ApiJson;
pub use router::{api_router, ApiState};
