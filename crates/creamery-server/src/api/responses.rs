//! Response bodies. Typed structs keep both the catalog's insertion order and
//! the record field order on the wire.

use creamery_core::{FlavorQuery, FlavorRecord};
use indexmap::IndexMap;
use serde::Serialize;

/// `GET /`
#[derive(Debug, Serialize)]
pub struct Listing<'a> {
    pub flavors: &'a IndexMap<i64, FlavorRecord>,
}

/// `GET /flavors/`
#[derive(Debug, Serialize)]
pub struct Selection {
    pub query: FlavorQuery,
    pub selection: Vec<FlavorRecord>,
}

#[derive(Debug, Serialize)]
pub struct Added {
    pub added: FlavorRecord,
}

#[derive(Debug, Serialize)]
pub struct Updated {
    pub updated: FlavorRecord,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: FlavorRecord,
}
