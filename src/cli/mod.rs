//! Command line interface
//!
//! Every command loads the catalog file, runs against the in-memory catalog,
//! and commands that change the catalog save it back before returning.

use std::{
    io::{self, Write},
    path::Path,
};

use clap::{Args, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::warn;
use warehouse::{
    catalog::{Catalog, CatalogError},
    categories::CategoryId,
    products::{ProductError, ProductKind},
    storage::{self, LoadOutcome, StorageError},
};

mod add;
mod edit;
mod render;

/// Errors reported by CLI commands.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Reading or writing the catalog file failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The catalog rejected the operation.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Product values were rejected.
    #[error(transparent)]
    Product(#[from] ProductError),

    /// A price of zero or less was given for a new product.
    #[error("price must be greater than zero")]
    NonPositivePrice,

    /// The category does not exist.
    #[error("unknown category: {0}")]
    UnknownCategory(CategoryId),

    /// The category holds products of another kind.
    #[error("category {category} holds {expected} products, not {kind}")]
    CategoryMismatch {
        /// Requested category
        category: CategoryId,

        /// Kind the category holds
        expected: ProductKind,

        /// Kind being added
        kind: ProductKind,
    },

    /// No category holds products of this kind.
    #[error("no category holds {0} products")]
    NoCategory(ProductKind),

    /// The edit changes nothing.
    #[error("nothing to change: pass --set or --json")]
    EmptyPatch,

    /// The `--json` argument is not a JSON object.
    #[error("--json must be a JSON object")]
    PatchNotAnObject,

    /// A JSON argument could not be parsed, or JSON output failed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Output format for commands that print products.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,

    /// JSON documents.
    Json,
}

/// Output options.
#[derive(Debug, Args)]
pub(crate) struct OutputArgs {
    /// Output format (table, json)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

/// Warehouse commands.
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Add a new product
    Add(add::AddCommand),

    /// List every product in insertion order
    List(OutputArgs),

    /// Find products whose name contains a term
    Search {
        /// Case-sensitive part of the product name
        term: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show a single product
    Show {
        /// Serial number
        serial: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the products of one category
    Category {
        /// Category identifier
        id: CategoryId,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the known categories
    Categories(OutputArgs),

    /// Update fields of a product
    Edit(edit::EditArgs),

    /// Remove a product
    Remove {
        /// Serial number
        serial: String,
    },

    /// Receive stock for a product
    StockIn {
        /// Serial number
        serial: String,

        /// Units received
        amount: u32,
    },

    /// Ship stock of a product
    StockOut {
        /// Serial number
        serial: String,

        /// Units shipped
        amount: u32,
    },
}

impl Command {
    /// Run the command against the catalog stored at `path`.
    pub(crate) fn run(self, path: &Path, out: &mut impl Write) -> Result<(), CliError> {
        let mut catalog = load_catalog(path)?;

        match self {
            Self::Add(command) => {
                add::run(command, &mut catalog, out)?;
                storage::save(&catalog, path)?;
            }
            Self::List(OutputArgs { output }) => {
                render::products(out, &catalog, &catalog.products(), output)?;
            }
            Self::Search { term, output } => {
                let found = catalog.search_by_name(&term);

                render::products(out, &catalog, &found, output.output)?;
            }
            Self::Show { serial, output } => {
                let product = catalog
                    .find_by_serial(&serial)
                    .ok_or(CatalogError::NotFound(serial))?;

                render::product(out, &catalog, product, output.output)?;
            }
            Self::Category { id, output } => {
                let found = catalog.list_by_category(id);

                render::products(out, &catalog, &found, output.output)?;
            }
            Self::Categories(OutputArgs { output }) => {
                render::categories(out, *catalog.categories(), output)?;
            }
            Self::Edit(args) => {
                edit::run(args, &mut catalog, out)?;
                storage::save(&catalog, path)?;
            }
            Self::Remove { serial } => {
                catalog
                    .remove_by_serial(&serial)
                    .ok_or_else(|| CatalogError::NotFound(serial.clone()))?;

                storage::save(&catalog, path)?;
                writeln!(out, "Removed {serial}")?;
            }
            Self::StockIn { serial, amount } => {
                let quantity = catalog.stock_in(&serial, amount)?;

                storage::save(&catalog, path)?;
                writeln!(out, "{serial}: {quantity} in stock")?;
            }
            Self::StockOut { serial, amount } => {
                let quantity = catalog.stock_out(&serial, amount)?;

                storage::save(&catalog, path)?;
                writeln!(out, "{serial}: {quantity} in stock")?;
            }
        }

        Ok(())
    }
}

/// Load the catalog, starting empty when the file cannot be read.
///
/// A file that reads but does not parse is an error, so that a later save
/// cannot overwrite it.
fn load_catalog(path: &Path) -> Result<Catalog, CliError> {
    match storage::load(path) {
        Ok(LoadOutcome { catalog, skipped }) => {
            if skipped > 0 {
                warn!(path = %path.display(), skipped, "some catalog entries were skipped");
            }

            Ok(catalog)
        }
        Err(StorageError::Io(error)) => {
            warn!(
                path = %path.display(),
                %error,
                "failed to read catalog file, starting with an empty catalog"
            );

            Ok(Catalog::new())
        }
        Err(error) => Err(error.into()),
    }
}
