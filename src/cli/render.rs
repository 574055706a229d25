//! Table and JSON output

use std::io::Write;

use serde::Serialize;
use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use warehouse::{
    catalog::Catalog,
    categories::{Category, CategoryRegistry},
    documents,
    products::Product,
};

use super::{CliError, OutputFormat};

pub(super) fn products(
    out: &mut impl Write,
    catalog: &Catalog,
    products: &[Product],
    format: OutputFormat,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        let documents: Vec<Value> = products
            .iter()
            .map(|product| Value::Object(documents::to_document(product)))
            .collect();

        return write_json(out, &documents);
    }

    if products.is_empty() {
        writeln!(out, "No products.")?;

        return Ok(());
    }

    let categories = *catalog.categories();
    let mut builder = Builder::default();

    builder.push_record([
        "Serial", "Type", "Name", "Brand", "Price", "Qty", "Category", "Specs",
    ]);

    for product in products {
        builder.push_record([
            product.serial_number().to_string(),
            product.kind().to_string(),
            product.name().to_string(),
            product.brand().to_string(),
            format!("{:.2}", product.price()),
            product.quantity().to_string(),
            category_name(categories, product),
            specs(product),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(4..6), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

pub(super) fn product(
    out: &mut impl Write,
    catalog: &Catalog,
    product: &Product,
    format: OutputFormat,
) -> Result<(), CliError> {
    let document = documents::to_document(product);

    if format == OutputFormat::Json {
        return write_json(out, &document);
    }

    let mut builder = Builder::default();

    builder.push_record(["Field", "Value"]);

    for (key, value) in document {
        let value = match value {
            Value::String(text) => text,
            other => other.to_string(),
        };

        builder.push_record([key, value]);
    }

    builder.push_record([
        "category".to_string(),
        category_name(*catalog.categories(), product),
    ]);

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Alignment::center());

    writeln!(out, "{table}")?;

    Ok(())
}

pub(super) fn categories(
    out: &mut impl Write,
    categories: CategoryRegistry,
    format: OutputFormat,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        return write_json(out, categories.all());
    }

    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Description", "Type"]);

    for category in categories.all() {
        builder.push_record([
            category.id().to_string(),
            category.name().to_string(),
            category.description().to_string(),
            category.kind().to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());

    writeln!(out, "{table}")?;

    Ok(())
}

fn write_json<T>(out: &mut impl Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;

    Ok(())
}

fn category_name(categories: CategoryRegistry, product: &Product) -> String {
    categories
        .by_id(product.category_id())
        .map_or("Unknown", Category::name)
        .to_string()
}

fn specs(product: &Product) -> String {
    match product {
        Product::Laptop(laptop) => format!(
            "{}, {} GB RAM, {} GB storage",
            laptop.cpu(),
            laptop.ram_gb(),
            laptop.storage_gb()
        ),
        Product::Phone(phone) => format!(
            "{}, {} GB storage, {}",
            phone.cpu(),
            phone.storage_gb(),
            if phone.has_5g() { "5G" } else { "no 5G" }
        ),
        Product::Desktop(desktop) => format!(
            "{}, {}, {} GB RAM",
            desktop.cpu(),
            desktop.gpu(),
            desktop.ram_gb()
        ),
    }
}
