//! Products
//!
//! A product is one of a closed set of variants. Every variant embeds the same
//! [`ProductDetails`] and adds its own hardware fields on top.

use std::{fmt, num::NonZeroU32, str::FromStr};

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::categories::CategoryId;

pub mod desktop;
pub mod laptop;
pub mod phone;

pub use desktop::Desktop;
pub use laptop::Laptop;
pub use phone::Phone;

/// Errors raised when a product value would break one of its invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProductError {
    /// Serial numbers act as the primary key and cannot be blank.
    #[error("serial number cannot be empty")]
    EmptySerialNumber,

    /// Display names cannot be blank.
    #[error("name cannot be empty")]
    EmptyName,

    /// Prices must be finite and non-negative.
    #[error("invalid price: {0}")]
    InvalidPrice(f64),

    /// Stock adjustments must move at least one unit.
    #[error("amount must be greater than zero")]
    InvalidAmount,

    /// A stock decrease asked for more units than are on hand.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock {
        /// Units requested
        requested: u32,

        /// Units on hand
        available: u32,
    },

    /// A stock increase would not fit in the quantity counter.
    #[error("quantity overflow: {quantity} + {amount}")]
    QuantityOverflow {
        /// Units on hand
        quantity: u32,

        /// Units requested
        amount: u32,
    },
}

/// Product variant discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKind {
    /// Portable computer
    Laptop,

    /// Mobile phone
    Phone,

    /// Desktop computer, stored as `"DesktopComputer"`
    Desktop,
}

impl ProductKind {
    /// Every kind, in registry order.
    pub const ALL: [ProductKind; 3] = [Self::Laptop, Self::Phone, Self::Desktop];

    /// The discriminator string written to the `"type"` field of a document.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Laptop => "Laptop",
            Self::Phone => "Phone",
            Self::Desktop => "DesktopComputer",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProductKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Returned when a string is not one of the known discriminators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown product type: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ProductKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Fields shared by every product variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    serial_number: String,
    name: String,
    brand: String,
    price: f64,
    quantity: u32,
    category_id: CategoryId,
}

impl ProductDetails {
    /// Create the shared product fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError`] if the serial number or name is empty, or if
    /// the price is negative or not finite.
    pub fn new(
        serial_number: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: f64,
        quantity: u32,
        category_id: CategoryId,
    ) -> Result<Self, ProductError> {
        let serial_number = serial_number.into();
        let name = name.into();

        if serial_number.is_empty() {
            return Err(ProductError::EmptySerialNumber);
        }

        if name.is_empty() {
            return Err(ProductError::EmptyName);
        }

        if !valid_price(price) {
            return Err(ProductError::InvalidPrice(price));
        }

        Ok(Self {
            serial_number,
            name,
            brand: brand.into(),
            price,
            quantity,
            category_id,
        })
    }

    /// Serial number
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Brand, possibly empty
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Unit price
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Units on hand
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Category identifier
    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    /// Set the name. Empty names are ignored.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();

        if name.is_empty() {
            return false;
        }

        self.name = name;

        true
    }

    /// Set the brand.
    pub fn set_brand(&mut self, brand: impl Into<String>) -> bool {
        self.brand = brand.into();

        true
    }

    /// Set the price. Negative and non-finite prices are ignored.
    pub fn set_price(&mut self, price: f64) -> bool {
        if !valid_price(price) {
            return false;
        }

        self.price = price;

        true
    }

    /// Set the quantity on hand.
    pub fn set_quantity(&mut self, quantity: u32) -> bool {
        self.quantity = quantity;

        true
    }

    /// Add `amount` units, returning the new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::InvalidAmount`] for a zero amount, or
    /// [`ProductError::QuantityOverflow`] if the counter would overflow.
    pub fn increase_quantity(&mut self, amount: u32) -> Result<u32, ProductError> {
        if amount == 0 {
            return Err(ProductError::InvalidAmount);
        }

        self.quantity =
            self.quantity
                .checked_add(amount)
                .ok_or(ProductError::QuantityOverflow {
                    quantity: self.quantity,
                    amount,
                })?;

        Ok(self.quantity)
    }

    /// Remove `amount` units, returning the new quantity.
    ///
    /// The quantity is left untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::InvalidAmount`] for a zero amount, or
    /// [`ProductError::InsufficientStock`] if fewer than `amount` units are on hand.
    pub fn decrease_quantity(&mut self, amount: u32) -> Result<u32, ProductError> {
        if amount == 0 {
            return Err(ProductError::InvalidAmount);
        }

        self.quantity =
            self.quantity
                .checked_sub(amount)
                .ok_or(ProductError::InsufficientStock {
                    requested: amount,
                    available: self.quantity,
                })?;

        Ok(self.quantity)
    }
}

fn valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

/// A product held in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum Product {
    /// Laptop
    Laptop(Laptop),

    /// Phone
    Phone(Phone),

    /// Desktop computer
    Desktop(Desktop),
}

impl Product {
    /// Variant discriminator
    pub fn kind(&self) -> ProductKind {
        match self {
            Self::Laptop(_) => ProductKind::Laptop,
            Self::Phone(_) => ProductKind::Phone,
            Self::Desktop(_) => ProductKind::Desktop,
        }
    }

    /// Shared product fields
    pub fn details(&self) -> &ProductDetails {
        match self {
            Self::Laptop(laptop) => laptop.details(),
            Self::Phone(phone) => phone.details(),
            Self::Desktop(desktop) => desktop.details(),
        }
    }

    /// Mutable access to the shared product fields
    pub fn details_mut(&mut self) -> &mut ProductDetails {
        match self {
            Self::Laptop(laptop) => laptop.details_mut(),
            Self::Phone(phone) => phone.details_mut(),
            Self::Desktop(desktop) => desktop.details_mut(),
        }
    }

    /// Serial number
    pub fn serial_number(&self) -> &str {
        self.details().serial_number()
    }

    /// Display name
    pub fn name(&self) -> &str {
        self.details().name()
    }

    /// Brand, possibly empty
    pub fn brand(&self) -> &str {
        self.details().brand()
    }

    /// Unit price
    pub fn price(&self) -> f64 {
        self.details().price()
    }

    /// Units on hand
    pub fn quantity(&self) -> u32 {
        self.details().quantity()
    }

    /// Category identifier
    pub fn category_id(&self) -> CategoryId {
        self.details().category_id()
    }

    /// Processor description. Every current variant carries one.
    pub fn cpu(&self) -> &str {
        match self {
            Self::Laptop(laptop) => laptop.cpu(),
            Self::Phone(phone) => phone.cpu(),
            Self::Desktop(desktop) => desktop.cpu(),
        }
    }

    /// RAM in GB, for laptops and desktops
    pub fn ram_gb(&self) -> Option<NonZeroU32> {
        match self {
            Self::Laptop(laptop) => Some(laptop.ram_gb()),
            Self::Desktop(desktop) => Some(desktop.ram_gb()),
            Self::Phone(_) => None,
        }
    }

    /// Storage in GB, for laptops and phones
    pub fn storage_gb(&self) -> Option<NonZeroU32> {
        match self {
            Self::Laptop(laptop) => Some(laptop.storage_gb()),
            Self::Phone(phone) => Some(phone.storage_gb()),
            Self::Desktop(_) => None,
        }
    }

    /// 5G support, for phones
    pub fn has_5g(&self) -> Option<bool> {
        match self {
            Self::Phone(phone) => Some(phone.has_5g()),
            Self::Laptop(_) | Self::Desktop(_) => None,
        }
    }

    /// Graphics card, for desktops
    pub fn gpu(&self) -> Option<&str> {
        match self {
            Self::Desktop(desktop) => Some(desktop.gpu()),
            Self::Laptop(_) | Self::Phone(_) => None,
        }
    }

    /// See [`ProductDetails::set_name`].
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        self.details_mut().set_name(name)
    }

    /// See [`ProductDetails::set_brand`].
    pub fn set_brand(&mut self, brand: impl Into<String>) -> bool {
        self.details_mut().set_brand(brand)
    }

    /// See [`ProductDetails::set_price`].
    pub fn set_price(&mut self, price: f64) -> bool {
        self.details_mut().set_price(price)
    }

    /// See [`ProductDetails::set_quantity`].
    pub fn set_quantity(&mut self, quantity: u32) -> bool {
        self.details_mut().set_quantity(quantity)
    }

    /// See [`ProductDetails::increase_quantity`].
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError`] if the amount is zero or would overflow.
    pub fn increase_quantity(&mut self, amount: u32) -> Result<u32, ProductError> {
        self.details_mut().increase_quantity(amount)
    }

    /// See [`ProductDetails::decrease_quantity`].
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError`] if the amount is zero or exceeds the stock on hand.
    pub fn decrease_quantity(&mut self, amount: u32) -> Result<u32, ProductError> {
        self.details_mut().decrease_quantity(amount)
    }
}

impl From<Laptop> for Product {
    fn from(laptop: Laptop) -> Self {
        Self::Laptop(laptop)
    }
}

impl From<Phone> for Product {
    fn from(phone: Phone) -> Self {
        Self::Phone(phone)
    }
}

impl From<Desktop> for Product {
    fn from(desktop: Desktop) -> Self {
        Self::Desktop(desktop)
    }
}
