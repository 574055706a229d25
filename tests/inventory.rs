//! Integration tests for catalog operations and patches.
//!
//! A catalog starts with one laptop, `SN1`, with five units in stock.

use std::num::NonZeroU32;

use serde_json::{Value, json};
use testresult::TestResult;

use warehouse::{prelude::*, storage};

fn gb(size: u32) -> Result<NonZeroU32, &'static str> {
    NonZeroU32::new(size).ok_or("size must be positive")
}

fn laptop(serial: &str, quantity: u32) -> Result<Product, Box<dyn std::error::Error>> {
    Ok(Laptop::new(
        ProductDetails::new(serial, "ThinkPad X1", "Lenovo", 1499.99, quantity, 1)?,
        "i7-1365U",
        gb(16)?,
        gb(512)?,
    )
    .into())
}

fn object(value: Value) -> Result<Document, &'static str> {
    match value {
        Value::Object(document) => Ok(document),
        _ => Err("expected a JSON object"),
    }
}

/// The catalog as it would be written to disk.
fn snapshot(catalog: &Catalog) -> Result<Vec<u8>, StorageError> {
    let mut buffer = Vec::new();

    storage::write(catalog, &mut buffer)?;

    Ok(buffer)
}

#[test]
fn stock_and_removal_scenario() -> TestResult {
    let mut catalog = Catalog::new();

    catalog.add(laptop("SN1", 5)?)?;

    assert_eq!(catalog.stock_out("SN1", 3)?, 2);
    assert!(catalog.stock_out("SN1", 10).is_err());
    assert_eq!(catalog.find_by_serial("SN1").map(Product::quantity), Some(2));

    assert!(catalog.remove_by_serial("SN1").is_some());
    assert!(catalog.is_empty());
    assert!(catalog.remove_by_serial("SN1").is_none());

    Ok(())
}

#[test]
fn duplicate_serials_are_rejected() -> TestResult {
    let mut catalog = Catalog::new();

    catalog.add(laptop("SN1", 5)?)?;

    let result = catalog.add(laptop("SN1", 1)?);

    assert!(matches!(result, Err(CatalogError::DuplicateSerial(serial)) if serial == "SN1"));
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.find_by_serial("SN1").map(Product::quantity), Some(5));

    Ok(())
}

#[test]
fn every_variant_round_trips_through_documents() -> TestResult {
    let products = [
        laptop("SN1", 5)?,
        Phone::new(
            ProductDetails::new("SN2", "Pixel 9", "Google", 799.0, 12, 2)?,
            "Tensor G4",
            gb(256)?,
            true,
        )
        .into(),
        Desktop::new(
            ProductDetails::new("SN3", "Studio", "", 0.0, 0, 3)?,
            "Ryzen 9 7950X",
            "RTX 4090",
            gb(64)?,
        )
        .into(),
    ];

    for product in products {
        assert_eq!(from_document(&to_document(&product))?, product);
    }

    Ok(())
}

#[test]
fn patch_switches_variant() -> TestResult {
    let mut catalog = Catalog::new();

    catalog.add(laptop("SN1", 5)?)?;

    let patch = object(json!({
        "type": "Phone",
        "storageGB": 128,
        "has5G": true
    }))?;

    let phone = catalog.apply_patch_document("SN1", &patch)?;

    assert_eq!(phone.kind(), ProductKind::Phone);
    assert_eq!(phone.storage_gb(), Some(gb(128)?));
    assert_eq!(phone.has_5g(), Some(true));
    assert_eq!(phone.ram_gb(), None);

    let document = to_document(phone);

    assert_eq!(document.get("type"), Some(&json!("Phone")));
    assert!(!document.contains_key("ramGB"));
    assert_eq!(document.get("cpu"), Some(&json!("i7-1365U")));
    assert_eq!(document.get("quantity"), Some(&json!(5)));

    Ok(())
}

#[test]
fn failed_patches_leave_the_catalog_unchanged() -> TestResult {
    let mut catalog = Catalog::new();

    catalog.add(laptop("SN1", 5)?)?;
    catalog.add(laptop("SN2", 7)?)?;

    let before = snapshot(&catalog)?;

    let patches = [
        ("SN9", json!({ "name": "Ghost" })),
        ("SN1", json!({ "serialNumber": "SN2" })),
        ("SN1", json!({ "type": "Desktop Computer" })),
        ("SN1", json!({ "type": "DesktopComputer" })),
        ("SN1", json!({ "quantity": -1 })),
        ("SN1", json!({ "price": "free" })),
        ("SN1", json!({ "name": "" })),
        ("SN1", json!({ "warranty": 2 })),
    ];

    for (serial, patch) in patches {
        let result = catalog.apply_patch_document(serial, &object(patch)?);

        assert!(result.is_err());
        assert_eq!(snapshot(&catalog)?, before);
    }

    Ok(())
}

#[test]
fn renamed_product_keeps_its_position() -> TestResult {
    let mut catalog = Catalog::new();

    catalog.add(laptop("SN1", 5)?)?;
    catalog.add(laptop("SN2", 7)?)?;
    catalog.add(laptop("SN3", 9)?)?;

    catalog.apply_patch_document("SN2", &object(json!({ "serial": "SN2-B" }))?)?;

    let serials: Vec<_> = catalog
        .iter()
        .map(|product| product.serial_number().to_string())
        .collect();

    assert_eq!(serials, ["SN1", "SN2-B", "SN3"]);
    assert!(catalog.find_by_serial("SN2").is_none());
    assert_eq!(catalog.find_by_serial("SN2-B").map(Product::quantity), Some(7));

    Ok(())
}

#[test]
fn search_and_category_listings() -> TestResult {
    let mut catalog = Catalog::new();

    catalog.add(laptop("SN1", 5)?)?;
    catalog.add(
        Phone::new(
            ProductDetails::new("SN2", "Galaxy S24", "Samsung", 899.0, 3, 2)?,
            "Snapdragon 8 Gen 3",
            gb(256)?,
            true,
        )
        .into(),
    )?;

    let found = catalog.search_by_name("Galaxy");

    assert_eq!(found.len(), 1);
    assert_eq!(found.first().map(Product::serial_number), Some("SN2"));
    assert!(catalog.search_by_name("galaxy").is_empty());
    assert!(catalog.search_by_name("").is_empty());

    assert_eq!(catalog.list_by_category(1).len(), 1);
    assert_eq!(catalog.list_by_category(2).len(), 1);
    assert!(catalog.list_by_category(3).is_empty());
    assert!(catalog.list_by_category(99).is_empty());

    Ok(())
}
