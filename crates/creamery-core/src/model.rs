//! Flavor record and the optional-field request shapes built around it.
//!
//! Wire names follow the public JSON contract (`flavorName`, `flavorDesc`,
//! `flavorPrice`, `flavorQuantity`, `flavorID`). Query and update types use
//! `Option` per field: `None` means "not supplied" and never "set to null".

use serde::{Deserialize, Serialize};

/// One catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorRecord {
    #[serde(rename = "flavorName")]
    pub name: String,
    #[serde(rename = "flavorDesc")]
    pub description: String,
    #[serde(rename = "flavorPrice")]
    pub price: f64,
    #[serde(rename = "flavorQuantity")]
    pub quantity: i64,
    #[serde(rename = "flavorID")]
    pub id: i64,
}

impl FlavorRecord {
    pub fn new(id: i64, name: &str, description: &str, price: f64, quantity: i64) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            price,
            quantity,
            id,
        }
    }
}

/// Filter over all five fields. Omitted fields impose no constraint.
///
/// Serializes omitted fields as `null` so a response can echo back exactly
/// which constraints were applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlavorQuery {
    #[serde(rename = "flavorName", default)]
    pub name: Option<String>,
    #[serde(rename = "flavorDesc", default)]
    pub description: Option<String>,
    #[serde(rename = "flavorPrice", default)]
    pub price: Option<f64>,
    #[serde(rename = "flavorQuantity", default)]
    pub quantity: Option<i64>,
    #[serde(rename = "flavorID", default)]
    pub id: Option<i64>,
}

impl FlavorQuery {
    /// True when every supplied field equals the record's field.
    ///
    /// Price uses exact `f64` equality; `2.5` and `2.50` parse to the same
    /// value but computed prices may not.
    pub fn matches(&self, flavor: &FlavorRecord) -> bool {
        self.name.as_ref().map_or(true, |n| *n == flavor.name)
            && self.description.as_ref().map_or(true, |d| *d == flavor.description)
            && self.price.map_or(true, |p| p == flavor.price)
            && self.quantity.map_or(true, |q| q == flavor.quantity)
            && self.id.map_or(true, |i| i == flavor.id)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.id.is_none()
    }
}

/// Partial replacement for an existing record. The id is never updatable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlavorUpdate {
    #[serde(rename = "flavorName", default)]
    pub name: Option<String>,
    #[serde(rename = "flavorDesc", default)]
    pub description: Option<String>,
    #[serde(rename = "flavorPrice", default)]
    pub price: Option<f64>,
    #[serde(rename = "flavorQuantity", default)]
    pub quantity: Option<i64>,
}

impl FlavorUpdate {
    /// An update is effective when it supplies a name, price or quantity.
    /// A description on its own does not count.
    pub fn is_effective(&self) -> bool {
        self.name.is_some() || self.price.is_some() || self.quantity.is_some()
    }

    /// Overwrite only the supplied fields.
    pub fn apply_to(self, flavor: &mut FlavorRecord) {
        if let Some(name) = self.name {
            flavor.name = name;
        }
        if let Some(description) = self.description {
            flavor.description = description;
        }
        if let Some(price) = self.price {
            flavor.price = price;
        }
        if let Some(quantity) = self.quantity {
            flavor.quantity = quantity;
        }
    }
}
