//! Documents
//!
//! A document is the JSON object form of a product. It carries a `"type"`
//! discriminator, the shared fields, and exactly the fields of its variant.
//! Documents are used for the catalog file and as the base that patches are
//! merged into.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::products::{Product, ProductError, ProductKind};

pub mod patch;
mod records;

pub use patch::ProductPatch;

use records::{DesktopRecord, LaptopRecord, PhoneRecord};

/// A string-keyed JSON object holding one serialized product.
pub type Document = Map<String, Value>;

/// Canonical document keys.
pub mod keys {
    /// Variant discriminator
    pub const TYPE: &str = "type";
    /// Serial number
    pub const SERIAL_NUMBER: &str = "serialNumber";
    /// Display name
    pub const NAME: &str = "name";
    /// Brand
    pub const BRAND: &str = "brand";
    /// Unit price
    pub const PRICE: &str = "price";
    /// Units on hand
    pub const QUANTITY: &str = "quantity";
    /// Category identifier
    pub const CATEGORY_ID: &str = "categoryId";
    /// Processor description
    pub const CPU: &str = "cpu";
    /// Graphics card description
    pub const GPU: &str = "gpu";
    /// RAM in GB
    pub const RAM_GB: &str = "ramGB";
    /// Storage in GB
    pub const STORAGE_GB: &str = "storageGB";
    /// 5G support
    pub const HAS_5G: &str = "has5G";
}

/// Errors raised while turning a document back into a product.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document has no `"type"` field.
    #[error("document has no \"type\" field")]
    MissingType,

    /// The `"type"` field does not name a known variant.
    #[error("unknown product type: {0}")]
    UnknownType(String),

    /// A required field is missing or holds the wrong kind of value.
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The fields parsed but describe an invalid product.
    #[error(transparent)]
    Invalid(#[from] ProductError),
}

/// Serialize a product into a document.
pub fn to_document(product: &Product) -> Document {
    let details = product.details();

    let mut document = Document::new();

    document.insert(keys::TYPE.into(), product.kind().as_str().into());
    document.insert(keys::SERIAL_NUMBER.into(), details.serial_number().into());
    document.insert(keys::NAME.into(), details.name().into());
    document.insert(keys::BRAND.into(), details.brand().into());
    document.insert(keys::PRICE.into(), details.price().into());
    document.insert(keys::QUANTITY.into(), details.quantity().into());
    document.insert(keys::CATEGORY_ID.into(), details.category_id().into());

    match product {
        Product::Laptop(laptop) => {
            document.insert(keys::CPU.into(), laptop.cpu().into());
            document.insert(keys::RAM_GB.into(), laptop.ram_gb().get().into());
            document.insert(keys::STORAGE_GB.into(), laptop.storage_gb().get().into());
        }
        Product::Phone(phone) => {
            document.insert(keys::CPU.into(), phone.cpu().into());
            document.insert(keys::STORAGE_GB.into(), phone.storage_gb().get().into());
            document.insert(keys::HAS_5G.into(), phone.has_5g().into());
        }
        Product::Desktop(desktop) => {
            document.insert(keys::CPU.into(), desktop.cpu().into());
            document.insert(keys::GPU.into(), desktop.gpu().into());
            document.insert(keys::RAM_GB.into(), desktop.ram_gb().get().into());
        }
    }

    document
}

/// Read the variant discriminator of a document.
///
/// # Errors
///
/// Returns [`DocumentError::MissingType`] if there is no `"type"` field, or
/// [`DocumentError::UnknownType`] if it does not name a known variant.
pub fn document_kind(document: &Document) -> Result<ProductKind, DocumentError> {
    match document.get(keys::TYPE) {
        None => Err(DocumentError::MissingType),
        Some(Value::String(kind)) => kind
            .parse()
            .map_err(|_err| DocumentError::UnknownType(kind.clone())),
        Some(other) => Err(DocumentError::UnknownType(other.to_string())),
    }
}

/// Build a product from a document.
///
/// Nothing is produced unless every field of the variant is present, has the
/// right JSON type, and passes validation.
///
/// # Errors
///
/// Returns a [`DocumentError`] describing the first problem found.
pub fn from_document(document: &Document) -> Result<Product, DocumentError> {
    let kind = document_kind(document)?;
    let value = Value::Object(document.clone());

    let product = match kind {
        ProductKind::Laptop => Product::try_from(LaptopRecord::deserialize(&value)?)?,
        ProductKind::Phone => Product::try_from(PhoneRecord::deserialize(&value)?)?,
        ProductKind::Desktop => Product::try_from(DesktopRecord::deserialize(&value)?)?,
    };

    Ok(product)
}
