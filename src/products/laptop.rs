//! Laptops

use std::num::NonZeroU32;

use crate::products::ProductDetails;

/// Portable computer
#[derive(Debug, Clone, PartialEq)]
pub struct Laptop {
    details: ProductDetails,
    cpu: String,
    ram_gb: NonZeroU32,
    storage_gb: NonZeroU32,
}

impl Laptop {
    /// Create a new laptop.
    pub fn new(
        details: ProductDetails,
        cpu: impl Into<String>,
        ram_gb: NonZeroU32,
        storage_gb: NonZeroU32,
    ) -> Self {
        Self {
            details,
            cpu: cpu.into(),
            ram_gb,
            storage_gb,
        }
    }

    /// Shared product fields
    pub fn details(&self) -> &ProductDetails {
        &self.details
    }

    pub(crate) fn details_mut(&mut self) -> &mut ProductDetails {
        &mut self.details
    }

    /// Processor description
    pub fn cpu(&self) -> &str {
        &self.cpu
    }

    /// RAM in GB
    pub fn ram_gb(&self) -> NonZeroU32 {
        self.ram_gb
    }

    /// Storage in GB
    pub fn storage_gb(&self) -> NonZeroU32 {
        self.storage_gb
    }
}
