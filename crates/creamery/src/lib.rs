//! Top-level facade crate for creamery.
//!
//! Re-exports the catalog domain and the HTTP server so users can depend on a single crate.

pub mod core {
    pub use creamery_core::*;
}

pub mod server {
    pub use creamery_server::*;
}
