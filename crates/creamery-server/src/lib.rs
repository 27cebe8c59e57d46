//! creamery server library entry.
//!
//! Wires the catalog store, config loader, HTTP API, and request metrics
//! into two axum routers. It is consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
