//! HTTP server module.
//!
//! Exposes the correction calculator and the rifle registry as a REST API.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                   │
//! │  - JSON request/response mapping              │
//! │  - CORS, tracing, error responses             │
//! └───────────────┬──────────────────┬───────────┘
//!                 │                  │
//! ┌───────────────▼──────┐  ┌────────▼───────────┐
//! │  calculator           │  │  rifles             │
//! │  drop + wind drift    │  │  RifleRepository    │
//! └──────────────────────┘  └────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
