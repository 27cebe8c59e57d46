//! Catalog HTTP API.
//!
//! Route table:
//! - `GET    /`             : whole catalog keyed by id
//! - `POST   /`             : create a flavor
//! - `GET    /flavors/`     : filter query over any of the five fields
//! - `GET    /flavors/{id}` : one flavor
//! - `PUT    /update/{id}`  : partial update from query parameters
//! - `DELETE /delete/{id}`  : remove a flavor

pub mod extract;
pub mod handlers;
pub mod responses;

pub use handlers::{
    create_flavor, delete_flavor, get_flavor, list_flavors, method_not_allowed, not_found,
    query_flavors, update_flavor,
};
