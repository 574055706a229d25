//! Desktop computers

use std::num::NonZeroU32;

use crate::products::ProductDetails;

/// Desktop computer
#[derive(Debug, Clone, PartialEq)]
pub struct Desktop {
    details: ProductDetails,
    cpu: String,
    gpu: String,
    ram_gb: NonZeroU32,
}

impl Desktop {
    /// Create a new desktop computer.
    pub fn new(
        details: ProductDetails,
        cpu: impl Into<String>,
        gpu: impl Into<String>,
        ram_gb: NonZeroU32,
    ) -> Self {
        Self {
            details,
            cpu: cpu.into(),
            gpu: gpu.into(),
            ram_gb,
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

    /// Graphics card description
    pub fn gpu(&self) -> &str {
        &self.gpu
    }

    /// RAM in GB
    pub fn ram_gb(&self) -> NonZeroU32 {
        self.ram_gb
    }
}
