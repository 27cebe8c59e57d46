//! In-memory flavor catalog.
//!
//! `Catalog` is a plain owned value: it does no locking of its own. Callers
//! that share it across tasks wrap it (the server keeps it behind an async
//! `RwLock`).

use indexmap::IndexMap;

use crate::error::{CatalogError, Result};
use crate::model::{FlavorQuery, FlavorRecord, FlavorUpdate};

/// Records present in a freshly started catalog.
pub fn seed_flavors() -> Vec<FlavorRecord> {
    vec![
        FlavorRecord::new(0, "Chocolate", "Cocoa", 2.00, 100),
        FlavorRecord::new(1, "Lemon Sherbet", "Tangy", 2.50, 50),
        FlavorRecord::new(2, "Vanilla", "Classic", 1.00, 200),
    ]
}

/// Mapping from flavor id to record, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    flavors: IndexMap<i64, FlavorRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the three seed records (ids 0, 1, 2).
    pub fn seeded() -> Self {
        let flavors = seed_flavors().into_iter().map(|f| (f.id, f)).collect();
        Self { flavors }
    }

    pub fn len(&self) -> usize {
        self.flavors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flavors.is_empty()
    }

    /// Every stored record keyed by id.
    pub fn all(&self) -> &IndexMap<i64, FlavorRecord> {
        &self.flavors
    }

    pub fn get(&self, id: i64) -> Result<&FlavorRecord> {
        self.flavors.get(&id).ok_or(CatalogError::NotFound)
    }

    /// Records matching every supplied field of `query`.
    pub fn select(&self, query: &FlavorQuery) -> Vec<FlavorRecord> {
        self.flavors
            .values()
            .filter(|f| query.matches(f))
            .cloned()
            .collect()
    }

    /// Insert a new record under its own id.
    pub fn create(&mut self, flavor: FlavorRecord) -> Result<FlavorRecord> {
        if self.flavors.contains_key(&flavor.id) {
            return Err(CatalogError::Conflict(flavor.id));
        }
        check_price(flavor.price)?;
        self.flavors.insert(flavor.id, flavor.clone());
        tracing::debug!(id = flavor.id, total = self.flavors.len(), "flavor inserted");
        Ok(flavor)
    }

    /// Replace the supplied fields of the record stored under `id`.
    ///
    /// The existence check runs before the emptiness check, so an unknown id
    /// reports `NotFound` even for an update with no fields.
    pub fn update(&mut self, id: i64, update: FlavorUpdate) -> Result<FlavorRecord> {
        let flavor = self.flavors.get_mut(&id).ok_or(CatalogError::NotFound)?;
        if !update.is_effective() {
            return Err(CatalogError::NoUpdateFields);
        }
        if let Some(price) = update.price {
            check_price(price)?;
        }
        update.apply_to(flavor);
        Ok(flavor.clone())
    }

    /// Remove a record; the remaining records keep their relative order.
    pub fn delete(&mut self, id: i64) -> Result<FlavorRecord> {
        self.flavors.shift_remove(&id).ok_or(CatalogError::NotFound)
    }
}

// Stored prices are always finite.
fn check_price(price: f64) -> Result<()> {
    if price.is_finite() {
        Ok(())
    } else {
        Err(CatalogError::InvalidInput(format!(
            "flavorPrice must be a finite number, got {price}"
        )))
    }
}
