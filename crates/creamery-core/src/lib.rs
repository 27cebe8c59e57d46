//! creamery core: the flavor catalog domain, independent of any transport.
//!
//! This crate defines the record type, the filter and update shapes, the
//! in-memory `Catalog` store, and the error surface shared with the HTTP
//! server. It carries no HTTP or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible
//! path surfaces as `CatalogError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::{seed_flavors, Catalog};
pub use error::{ClientCode, CatalogError, Result};
pub use model::{FlavorQuery, FlavorRecord, FlavorUpdate};
