//! API layer: axum 0.8 routes over the entity service operations.
//!
//! ```text
//! HTTP Request
//!     │
//!     ▼
//! ┌───────────────┐
//! │   Handlers    │ ── Parse path ids and bodies
//! └───────────────┘
//!     │
//!     ▼
//! ┌───────────────┐
//! │  Transformers │ ── DTO ↔ command / entity (pure functions)
//! └───────────────┘
//!     │
//!     ▼
//! ┌───────────────┐
//! │   Services    │ ── Validation, mapping, persistence
//! └───────────────┘
//!     │
//!     ▼
//! HTTP Response
//! ```

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
