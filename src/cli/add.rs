use std::{io::Write, num::NonZeroU32};

use clap::{Args, Subcommand};
use warehouse::{
    catalog::Catalog,
    categories::{Category, CategoryId, CategoryRegistry},
    products::{Desktop, Laptop, Phone, Product, ProductDetails, ProductKind},
};

use super::CliError;

#[derive(Debug, Args)]
pub(crate) struct AddCommand {
    #[command(subcommand)]
    product: AddProduct,
}

#[derive(Debug, Subcommand)]
enum AddProduct {
    /// Add a laptop
    Laptop(LaptopArgs),

    /// Add a phone
    Phone(PhoneArgs),

    /// Add a desktop computer
    Desktop(DesktopArgs),
}

#[derive(Debug, Args)]
struct DetailsArgs {
    /// Unique serial number
    #[arg(long)]
    serial: String,

    /// Display name
    #[arg(long)]
    name: String,

    /// Brand
    #[arg(long, default_value = "")]
    brand: String,

    /// Unit price
    #[arg(long)]
    price: f64,

    /// Units in stock
    #[arg(long, default_value_t = 0)]
    quantity: u32,

    /// Category identifier; defaults to the category of the product type
    #[arg(long)]
    category: Option<CategoryId>,
}

#[derive(Debug, Args)]
struct LaptopArgs {
    #[command(flatten)]
    details: DetailsArgs,

    /// Processor
    #[arg(long)]
    cpu: String,

    /// RAM in GB
    #[arg(long)]
    ram: NonZeroU32,

    /// Storage in GB
    #[arg(long)]
    storage: NonZeroU32,
}

#[derive(Debug, Args)]
struct PhoneArgs {
    #[command(flatten)]
    details: DetailsArgs,

    /// Processor
    #[arg(long)]
    cpu: String,

    /// Storage in GB
    #[arg(long)]
    storage: NonZeroU32,

    /// Supports 5G
    #[arg(long)]
    has_5g: bool,
}

#[derive(Debug, Args)]
struct DesktopArgs {
    #[command(flatten)]
    details: DetailsArgs,

    /// Processor
    #[arg(long)]
    cpu: String,

    /// Graphics card
    #[arg(long)]
    gpu: String,

    /// RAM in GB
    #[arg(long)]
    ram: NonZeroU32,
}

impl DetailsArgs {
    fn into_details(
        self,
        kind: ProductKind,
        categories: CategoryRegistry,
    ) -> Result<ProductDetails, CliError> {
        if self.price <= 0.0 {
            return Err(CliError::NonPositivePrice);
        }

        let category_id = match self.category {
            Some(category) => match categories.kind_for(category) {
                Some(expected) if expected == kind => category,
                Some(expected) => {
                    return Err(CliError::CategoryMismatch {
                        category,
                        expected,
                        kind,
                    });
                }
                None => return Err(CliError::UnknownCategory(category)),
            },
            None => categories
                .default_for(kind)
                .map(Category::id)
                .ok_or(CliError::NoCategory(kind))?,
        };

        Ok(ProductDetails::new(
            self.serial,
            self.name,
            self.brand,
            self.price,
            self.quantity,
            category_id,
        )?)
    }
}

pub(crate) fn run(
    command: AddCommand,
    catalog: &mut Catalog,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let categories = *catalog.categories();

    let product: Product = match command.product {
        AddProduct::Laptop(args) => Laptop::new(
            args.details.into_details(ProductKind::Laptop, categories)?,
            args.cpu,
            args.ram,
            args.storage,
        )
        .into(),
        AddProduct::Phone(args) => Phone::new(
            args.details.into_details(ProductKind::Phone, categories)?,
            args.cpu,
            args.storage,
            args.has_5g,
        )
        .into(),
        AddProduct::Desktop(args) => Desktop::new(
            args.details.into_details(ProductKind::Desktop, categories)?,
            args.cpu,
            args.gpu,
            args.ram,
        )
        .into(),
    };

    let serial = product.serial_number().to_string();

    catalog.add(product)?;

    writeln!(out, "Added {serial}")?;

    Ok(())
}
