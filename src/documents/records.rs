//! Typed document records
//!
//! One record per variant. The JSON type of every field is checked while
//! deserializing, and the domain invariants are checked by `TryFrom`.

use std::num::NonZeroU32;

use serde::Deserialize;

use crate::{
    categories::CategoryId,
    products::{Desktop, Laptop, Phone, Product, ProductDetails, ProductError},
};

/// Shared fields
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DetailsRecord {
    serial_number: String,
    name: String,
    brand: String,
    price: f64,
    quantity: u32,
    category_id: CategoryId,
}

impl TryFrom<DetailsRecord> for ProductDetails {
    type Error = ProductError;

    fn try_from(record: DetailsRecord) -> Result<Self, Self::Error> {
        ProductDetails::new(
            record.serial_number,
            record.name,
            record.brand,
            record.price,
            record.quantity,
            record.category_id,
        )
    }
}

/// `"type": "Laptop"`
#[derive(Debug, Deserialize)]
pub(super) struct LaptopRecord {
    #[serde(flatten)]
    details: DetailsRecord,
    cpu: String,
    #[serde(rename = "ramGB")]
    ram_gb: NonZeroU32,
    #[serde(rename = "storageGB")]
    storage_gb: NonZeroU32,
}

impl TryFrom<LaptopRecord> for Product {
    type Error = ProductError;

    fn try_from(record: LaptopRecord) -> Result<Self, Self::Error> {
        let details = record.details.try_into()?;

        Ok(Laptop::new(details, record.cpu, record.ram_gb, record.storage_gb).into())
    }
}

/// `"type": "Phone"`
#[derive(Debug, Deserialize)]
pub(super) struct PhoneRecord {
    #[serde(flatten)]
    details: DetailsRecord,
    cpu: String,
    #[serde(rename = "storageGB")]
    storage_gb: NonZeroU32,
    #[serde(rename = "has5G")]
    has_5g: bool,
}

impl TryFrom<PhoneRecord> for Product {
    type Error = ProductError;

    fn try_from(record: PhoneRecord) -> Result<Self, Self::Error> {
        let details = record.details.try_into()?;

        Ok(Phone::new(details, record.cpu, record.storage_gb, record.has_5g).into())
    }
}

/// `"type": "DesktopComputer"`
#[derive(Debug, Deserialize)]
pub(super) struct DesktopRecord {
    #[serde(flatten)]
    details: DetailsRecord,
    cpu: String,
    gpu: String,
    #[serde(rename = "ramGB")]
    ram_gb: NonZeroU32,
}

impl TryFrom<DesktopRecord> for Product {
    type Error = ProductError;

    fn try_from(record: DesktopRecord) -> Result<Self, Self::Error> {
        let details = record.details.try_into()?;

        Ok(Desktop::new(details, record.cpu, record.gpu, record.ram_gb).into())
    }
}
