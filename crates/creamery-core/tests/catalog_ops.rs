//! Catalog store behavior: seed, lookup, filter, create, update, delete.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use creamery_core::{Catalog, CatalogError, FlavorQuery, FlavorRecord, FlavorUpdate};

fn mint() -> FlavorRecord {
    FlavorRecord::new(7, "Mint", "Fresh", 3.25, 40)
}

#[test]
fn seeded_catalog_holds_three_records() {
    let c = Catalog::seeded();
    assert_eq!(c.len(), 3);
    let ids: Vec<i64> = c.all().keys().copied().collect();
    assert_eq!(ids, vec![0, 1, 2]);

    let vanilla = c.get(2).unwrap();
    assert_eq!(vanilla.name, "Vanilla");
    assert_eq!(vanilla.description, "Classic");
    assert_eq!(vanilla.price, 1.00);
    assert_eq!(vanilla.quantity, 200);
}

#[test]
fn get_unknown_id_is_not_found() {
    let c = Catalog::seeded();
    assert_eq!(c.get(99).unwrap_err(), CatalogError::NotFound);
    assert!(Catalog::new().is_empty());
}

#[test]
fn create_then_get_returns_same_record() {
    let mut c = Catalog::seeded();
    let added = c.create(mint()).unwrap();
    assert_eq!(added, mint());
    assert_eq!(c.get(7).unwrap(), &mint());
    assert_eq!(c.len(), 4);
}

#[test]
fn create_duplicate_id_conflicts_and_keeps_existing() {
    let mut c = Catalog::seeded();
    let dup = FlavorRecord::new(0, "Imposter", "Nope", 9.99, 1);
    assert_eq!(c.create(dup).unwrap_err(), CatalogError::Conflict(0));
    assert_eq!(c.get(0).unwrap().name, "Chocolate");
    assert_eq!(c.len(), 3);
}

#[test]
fn empty_query_selects_everything() {
    let c = Catalog::seeded();
    let all = c.select(&FlavorQuery::default());
    assert_eq!(all.len(), 3);
}

#[test]
fn full_query_selects_exactly_one() {
    let c = Catalog::seeded();
    let q = FlavorQuery {
        name: Some("Lemon Sherbet".into()),
        description: Some("Tangy".into()),
        price: Some(2.5),
        quantity: Some(50),
        id: Some(1),
    };
    let sel = c.select(&q);
    assert_eq!(sel.len(), 1);
    assert_eq!(sel[0].id, 1);
}

#[test]
fn query_matching_nothing_is_empty() {
    let c = Catalog::seeded();
    let q = FlavorQuery {
        name: Some("Vanilla".into()),
        price: Some(2.0),
        ..Default::default()
    };
    assert!(c.select(&q).is_empty());
}

#[test]
fn query_on_shared_price_selects_all_matches() {
    let mut c = Catalog::seeded();
    c.create(FlavorRecord::new(3, "Coffee", "Bold", 2.0, 10)).unwrap();
    let q = FlavorQuery {
        price: Some(2.0),
        ..Default::default()
    };
    let ids: Vec<i64> = c.select(&q).iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![0, 3]);
}

#[test]
fn update_quantity_only_leaves_other_fields() {
    let mut c = Catalog::seeded();
    let up = FlavorUpdate {
        quantity: Some(150),
        ..Default::default()
    };
    let updated = c.update(2, up).unwrap();
    assert_eq!(updated.quantity, 150);
    assert_eq!(updated.name, "Vanilla");
    assert_eq!(updated.description, "Classic");
    assert_eq!(updated.price, 1.00);
    assert_eq!(c.get(2).unwrap(), &updated);
}

#[test]
fn update_without_effective_fields_is_rejected() {
    let mut c = Catalog::seeded();
    assert_eq!(
        c.update(1, FlavorUpdate::default()).unwrap_err(),
        CatalogError::NoUpdateFields
    );

    // A description on its own is still not enough.
    let desc_only = FlavorUpdate {
        description: Some("Sour".into()),
        ..Default::default()
    };
    assert_eq!(c.update(1, desc_only).unwrap_err(), CatalogError::NoUpdateFields);
    assert_eq!(c.get(1).unwrap().description, "Tangy");
}

#[test]
fn update_applies_description_alongside_effective_field() {
    let mut c = Catalog::seeded();
    let up = FlavorUpdate {
        description: Some("Dark".into()),
        price: Some(2.75),
        ..Default::default()
    };
    let updated = c.update(0, up).unwrap();
    assert_eq!(updated.description, "Dark");
    assert_eq!(updated.price, 2.75);
    assert_eq!(updated.id, 0);
}

#[test]
fn update_unknown_id_is_not_found_before_field_check() {
    let mut c = Catalog::seeded();
    assert_eq!(
        c.update(42, FlavorUpdate::default()).unwrap_err(),
        CatalogError::NotFound
    );
}

#[test]
fn delete_removes_record() {
    let mut c = Catalog::seeded();
    let removed = c.delete(1).unwrap();
    assert_eq!(removed.name, "Lemon Sherbet");
    assert_eq!(c.get(1).unwrap_err(), CatalogError::NotFound);
    assert_eq!(c.delete(1).unwrap_err(), CatalogError::NotFound);
    assert_eq!(c.len(), 2);
}

#[test]
fn error_details_and_codes_are_stable() {
    assert_eq!(CatalogError::NotFound.to_string(), "Flavor not found");
    assert_eq!(CatalogError::Conflict(3).to_string(), "Flavor ID already exists");
    assert_eq!(CatalogError::NoUpdateFields.to_string(), "No parameters provided");
    assert_eq!(CatalogError::NoUpdateFields.client_code().as_str(), "BAD_REQUEST");
    assert_eq!(CatalogError::Conflict(3).client_code().as_str(), "CONFLICT");
}

#[test]
fn non_finite_prices_are_rejected() {
    let mut c = Catalog::seeded();
    for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let up = FlavorUpdate {
            price: Some(price),
            ..Default::default()
        };
        assert!(matches!(c.update(2, up).unwrap_err(), CatalogError::InvalidInput(_)));

        let bad = FlavorRecord::new(9, "Odd", "Odd", price, 1);
        assert!(matches!(c.create(bad).unwrap_err(), CatalogError::InvalidInput(_)));
    }
    assert_eq!(c.get(2).unwrap().price, 1.00);
    assert!(c.get(9).is_err());
}

#[test]
fn records_keep_insertion_order_across_deletes() {
    let mut c = Catalog::seeded();
    c.create(FlavorRecord::new(10, "Ten", "T", 1.0, 1)).unwrap();
    c.create(FlavorRecord::new(5, "Five", "F", 1.0, 1)).unwrap();
    c.delete(1).unwrap();

    let ids: Vec<i64> = c.all().keys().copied().collect();
    assert_eq!(ids, vec![0, 2, 10, 5]);
    let selected: Vec<i64> = c.select(&FlavorQuery::default()).iter().map(|f| f.id).collect();
    assert_eq!(selected, ids);
}
