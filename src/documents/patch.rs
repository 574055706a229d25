//! Product patches
//!
//! A patch is a partial document. Only the fields it carries are written over
//! the current document, and the product is then rebuilt from the result. A
//! patch that sets `"type"` can turn a product into another variant, as long as
//! the merged document has every field the new variant needs.

use std::num::NonZeroU32;

use serde::Deserialize;
use serde_json::Value;

use crate::{
    categories::CategoryId,
    documents::{Document, DocumentError, keys},
    products::{ProductKind, UnknownKind},
};

/// A partial product update.
///
/// Deserializes from a [`Document`]. The older spellings `serial`,
/// `SerialNumber`, `Serial`, `Type`, `ram`, `storage` and `has5g` are accepted
/// next to the canonical keys. Unknown keys are rejected rather than carried
/// into the merged document, and a key given as `null` is rejected rather than
/// treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductPatch {
    /// New variant
    #[serde(
        rename = "type",
        alias = "Type",
        default,
        deserialize_with = "deserialize_kind"
    )]
    pub kind: Option<ProductKind>,

    /// New serial number
    #[serde(
        rename = "serialNumber",
        alias = "serial",
        alias = "SerialNumber",
        alias = "Serial",
        default,
        deserialize_with = "deserialize_present"
    )]
    pub serial_number: Option<String>,

    /// New display name
    #[serde(default, deserialize_with = "deserialize_present")]
    pub name: Option<String>,

    /// New brand
    #[serde(default, deserialize_with = "deserialize_present")]
    pub brand: Option<String>,

    /// New unit price
    #[serde(default, deserialize_with = "deserialize_present")]
    pub price: Option<f64>,

    /// New quantity on hand
    #[serde(default, deserialize_with = "deserialize_present")]
    pub quantity: Option<u32>,

    /// New category
    #[serde(
        rename = "categoryId",
        default,
        deserialize_with = "deserialize_present"
    )]
    pub category_id: Option<CategoryId>,

    /// New processor description
    #[serde(default, deserialize_with = "deserialize_present")]
    pub cpu: Option<String>,

    /// New graphics card description
    #[serde(default, deserialize_with = "deserialize_present")]
    pub gpu: Option<String>,

    /// New RAM size in GB
    #[serde(
        rename = "ramGB",
        alias = "ram",
        default,
        deserialize_with = "deserialize_present"
    )]
    pub ram_gb: Option<NonZeroU32>,

    /// New storage size in GB
    #[serde(
        rename = "storageGB",
        alias = "storage",
        default,
        deserialize_with = "deserialize_present"
    )]
    pub storage_gb: Option<NonZeroU32>,

    /// New 5G flag
    #[serde(
        rename = "has5G",
        alias = "has5g",
        default,
        deserialize_with = "deserialize_present"
    )]
    pub has_5g: Option<bool>,
}

/// A key that is present must hold a value of the field's type.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<Option<ProductKind>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let kind = String::deserialize(deserializer)?;

    kind.parse()
        .map(Some)
        .map_err(|UnknownKind(kind)| {
            serde::de::Error::invalid_value(serde::de::Unexpected::Str(&kind), &"a product type")
        })
}

impl ProductPatch {
    /// Parse a patch from a partial document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Malformed`] if a key is unknown or a value has
    /// the wrong JSON type.
    pub fn from_document(document: &Document) -> Result<Self, DocumentError> {
        let value = Value::Object(document.clone());

        Self::deserialize(&value).map_err(DocumentError::from)
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The fields carried by this patch, under their canonical keys.
    pub fn into_document(self) -> Document {
        let mut document = Document::new();

        let mut set = |key: &str, value: Option<Value>| {
            if let Some(value) = value {
                document.insert(key.into(), value);
            }
        };

        set(keys::TYPE, self.kind.map(|kind| kind.as_str().into()));
        set(keys::SERIAL_NUMBER, self.serial_number.map(Value::from));
        set(keys::NAME, self.name.map(Value::from));
        set(keys::BRAND, self.brand.map(Value::from));
        set(keys::PRICE, self.price.map(Value::from));
        set(keys::QUANTITY, self.quantity.map(Value::from));
        set(keys::CATEGORY_ID, self.category_id.map(Value::from));
        set(keys::CPU, self.cpu.map(Value::from));
        set(keys::GPU, self.gpu.map(Value::from));
        set(keys::RAM_GB, self.ram_gb.map(|ram| ram.get().into()));
        set(keys::STORAGE_GB, self.storage_gb.map(|storage| storage.get().into()));
        set(keys::HAS_5G, self.has_5g.map(Value::from));

        document
    }

    /// Write the patch over `base`. Keys the patch does not carry keep their
    /// current values.
    pub fn merge_into(self, mut base: Document) -> Document {
        base.extend(self.into_document());

        base
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn object(value: Value) -> Result<Document, &'static str> {
        match value {
            Value::Object(map) => Ok(map),
            _ => Err("expected a JSON object"),
        }
    }

    #[test]
    fn from_document_reads_canonical_keys() -> TestResult {
        let patch = ProductPatch::from_document(&object(json!({
            "type": "Phone",
            "serialNumber": "SN2",
            "price": 10,
            "has5G": true
        }))?)?;

        assert_eq!(patch.kind, Some(ProductKind::Phone));
        assert_eq!(patch.serial_number.as_deref(), Some("SN2"));
        assert_eq!(patch.price, Some(10.0));
        assert_eq!(patch.has_5g, Some(true));
        assert_eq!(patch.name, None);

        Ok(())
    }

    #[test]
    fn from_document_accepts_aliases() -> TestResult {
        for serial_key in ["serial", "SerialNumber", "Serial"] {
            let mut document = Document::new();
            document.insert(serial_key.into(), json!("SN9"));

            let patch = ProductPatch::from_document(&document)?;

            assert_eq!(patch.serial_number.as_deref(), Some("SN9"));
        }

        let patch = ProductPatch::from_document(&object(json!({
            "Type": "DesktopComputer",
            "ram": 64,
            "storage": 2048,
            "has5g": false
        }))?)?;

        assert_eq!(patch.kind, Some(ProductKind::Desktop));
        assert_eq!(patch.ram_gb.map(NonZeroU32::get), Some(64));
        assert_eq!(patch.storage_gb.map(NonZeroU32::get), Some(2048));
        assert_eq!(patch.has_5g, Some(false));

        Ok(())
    }

    #[test]
    fn from_document_rejects_unknown_keys_and_types() -> TestResult {
        let unknown_key = object(json!({ "colour": "red" }))?;
        let unknown_type = object(json!({ "type": "Tablet" }))?;
        let wrong_value = object(json!({ "quantity": "many" }))?;

        assert!(ProductPatch::from_document(&unknown_key).is_err());
        assert!(ProductPatch::from_document(&unknown_type).is_err());
        assert!(ProductPatch::from_document(&wrong_value).is_err());

        Ok(())
    }

    #[test]
    fn from_document_rejects_null_values() {
        for key in [
            "type", "serial", "name", "brand", "price", "quantity", "categoryId", "cpu", "gpu",
            "ram", "storageGB", "has5G",
        ] {
            let mut document = Document::new();
            document.insert(key.into(), Value::Null);

            assert!(
                ProductPatch::from_document(&document).is_err(),
                "null {key} should be rejected"
            );
        }
    }

    #[test]
    fn into_document_uses_canonical_keys() -> TestResult {
        let patch = ProductPatch::from_document(&object(json!({
            "serial": "SN3",
            "ram": 8
        }))?)?;

        assert_eq!(
            Value::Object(patch.into_document()),
            json!({ "serialNumber": "SN3", "ramGB": 8 })
        );

        Ok(())
    }

    #[test]
    fn merge_into_overwrites_only_present_keys() -> TestResult {
        let base = object(json!({
            "type": "Laptop",
            "name": "Old",
            "brand": "Acme",
            "ramGB": 8
        }))?;

        let patch = ProductPatch {
            name: Some("New".into()),
            ram_gb: NonZeroU32::new(16),
            ..ProductPatch::default()
        };

        assert_eq!(
            Value::Object(patch.merge_into(base)),
            json!({
                "type": "Laptop",
                "name": "New",
                "brand": "Acme",
                "ramGB": 16
            })
        );

        Ok(())
    }

    #[test]
    fn empty_document_is_an_empty_patch() -> TestResult {
        let patch = ProductPatch::from_document(&Document::new())?;

        assert!(patch.is_empty());
        assert!(patch.into_document().is_empty());

        Ok(())
    }
}
