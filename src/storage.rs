//! Storage
//!
//! The catalog file is a JSON object with a single `"products"` array of
//! documents. A broken file fails the whole load; a broken entry is skipped.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    catalog::{Catalog, CatalogError},
    documents::{self, Document},
};

/// Key of the product array in the catalog file.
const PRODUCTS_KEY: &str = "products";

/// Storage Errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file could not be opened, read, or written.
    #[error("failed to access catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON.
    #[error("failed to parse catalog file: {0}")]
    Json(#[from] serde_json::Error),

    /// The top level of the file is not a JSON object.
    #[error("catalog file must contain a JSON object")]
    NotAnObject,
}

/// A catalog read from disk.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Products that were loaded
    pub catalog: Catalog,

    /// Number of entries that were skipped
    pub skipped: usize,
}

#[derive(Serialize)]
struct CatalogFile {
    products: Vec<Document>,
}

/// Load a catalog file.
///
/// A file without a `"products"` array loads as an empty catalog. Entries that
/// are not objects, have no usable `"type"`, fail to deserialize, or repeat an
/// earlier serial number are skipped and counted.
///
/// # Errors
///
/// Returns a [`StorageError`] if the file cannot be read, is not valid JSON, or
/// its top level is not an object.
pub fn load(path: impl AsRef<Path>) -> Result<LoadOutcome, StorageError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let outcome = parse(&contents)?;

    info!(
        path = %path.display(),
        loaded = outcome.catalog.len(),
        skipped = outcome.skipped,
        "loaded catalog"
    );

    Ok(outcome)
}

/// Parse catalog file contents. See [`load`].
///
/// # Errors
///
/// Returns a [`StorageError`] if the contents are not valid JSON or the top
/// level is not an object.
pub fn parse(contents: &str) -> Result<LoadOutcome, StorageError> {
    let Value::Object(mut root) = serde_json::from_str::<Value>(contents)? else {
        return Err(StorageError::NotAnObject);
    };

    let mut catalog = Catalog::new();
    let mut skipped = 0;

    let Some(Value::Array(entries)) = root.remove(PRODUCTS_KEY) else {
        return Ok(LoadOutcome { catalog, skipped });
    };

    for (index, entry) in entries.into_iter().enumerate() {
        let Value::Object(document) = entry else {
            warn!(index, "skipped entry: not an object");
            skipped += 1;
            continue;
        };

        let added = documents::from_document(&document)
            .map_err(CatalogError::from)
            .and_then(|product| catalog.add(product));

        if let Err(error) = added {
            warn!(index, %error, "skipped entry");
            skipped += 1;
        }
    }

    Ok(LoadOutcome { catalog, skipped })
}

/// Write the catalog to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns a [`StorageError`] if the file cannot be created or written.
pub fn save(catalog: &Catalog, path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    write(catalog, &mut writer)?;
    writer.flush()?;

    info!(path = %path.display(), products = catalog.len(), "saved catalog");

    Ok(())
}

/// Write the catalog file contents to `writer`, indented by four spaces.
///
/// # Errors
///
/// Returns a [`StorageError`] if writing fails.
pub fn write(catalog: &Catalog, writer: &mut impl Write) -> Result<(), StorageError> {
    let file = CatalogFile {
        products: catalog.iter().map(documents::to_document).collect(),
    };

    let mut serializer =
        serde_json::Serializer::with_formatter(&mut *writer, PrettyFormatter::with_indent(b"    "));

    file.serialize(&mut serializer)?;
    writer.write_all(b"\n")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::ProductKind;

    use super::*;

    const LAPTOP: &str = r#"{
        "type": "Laptop",
        "serialNumber": "SN1",
        "name": "ThinkPad",
        "brand": "Lenovo",
        "price": 999.0,
        "quantity": 5,
        "categoryId": 1,
        "cpu": "i7",
        "ramGB": 16,
        "storageGB": 512
    }"#;

    #[test]
    fn parse_skips_entries_without_type() -> TestResult {
        let contents = format!(
            r#"{{ "products": [ {LAPTOP}, {{ "serialNumber": "SN2", "name": "Mystery" }} ] }}"#
        );

        let outcome = parse(&contents)?;

        assert_eq!(outcome.catalog.len(), 1);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(
            outcome.catalog.find_by_serial("SN1").map(|product| product.kind()),
            Some(ProductKind::Laptop)
        );

        Ok(())
    }

    #[test]
    fn parse_skips_non_objects_and_duplicates() -> TestResult {
        let contents = format!(r#"{{ "products": [ 42, "x", {LAPTOP}, {LAPTOP} ] }}"#);

        let outcome = parse(&contents)?;

        assert_eq!(outcome.catalog.len(), 1);
        assert_eq!(outcome.skipped, 3);

        Ok(())
    }

    #[test]
    fn parse_without_products_array_is_empty() -> TestResult {
        for contents in ["{}", r#"{ "products": {} }"#, r#"{ "products": null }"#] {
            let outcome = parse(contents)?;

            assert!(outcome.catalog.is_empty());
            assert_eq!(outcome.skipped, 0);
        }

        Ok(())
    }

    #[test]
    fn parse_rejects_malformed_top_level() {
        assert!(matches!(parse("{ not json"), Err(StorageError::Json(_))));
        assert!(matches!(parse("[]"), Err(StorageError::NotAnObject)));
    }

    #[test]
    fn write_indents_with_four_spaces() -> TestResult {
        let outcome = parse(&format!(r#"{{ "products": [ {LAPTOP} ] }}"#))?;
        let mut buffer = Vec::new();

        write(&outcome.catalog, &mut buffer)?;

        let written = String::from_utf8(buffer)?;

        assert!(written.starts_with("{\n    \"products\": [\n        {\n"));
        assert!(written.contains("\"type\": \"Laptop\""));
        assert!(written.ends_with("}\n"));

        Ok(())
    }

    #[test]
    fn write_empty_catalog() -> TestResult {
        let mut buffer = Vec::new();

        write(&Catalog::new(), &mut buffer)?;

        assert_eq!(String::from_utf8(buffer)?, "{\n    \"products\": []\n}\n");

        Ok(())
    }
}
