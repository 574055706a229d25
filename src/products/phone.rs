//! Phones

use std::num::NonZeroU32;

use crate::products::ProductDetails;

/// Mobile phone
#[derive(Debug, Clone, PartialEq)]
pub struct Phone {
    details: ProductDetails,
    cpu: String,
    storage_gb: NonZeroU32,
    has_5g: bool,
}

impl Phone {
    /// Create a new phone.
    pub fn new(
        details: ProductDetails,
        cpu: impl Into<String>,
        storage_gb: NonZeroU32,
        has_5g: bool,
    ) -> Self {
        Self {
            details,
            cpu: cpu.into(),
            storage_gb,
            has_5g,
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

    /// Storage in GB
    pub fn storage_gb(&self) -> NonZeroU32 {
        self.storage_gb
    }

    /// Whether the phone supports 5G
    pub fn has_5g(&self) -> bool {
        self.has_5g
    }
}
