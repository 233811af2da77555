use partcat_core::{CatalogError, CatalogResult, Entity};
use partcat_products::{Describe, Product, ProductCreator};

use crate::report::{Report, StdoutReport};

/// Emitted before the listing produced by [`Inventory::show_inventory`].
pub const INVENTORY_HEADER: &str = "Full component inventory:";

/// Emitted before the description of a product found by part number.
pub const DETAILS_HEADER: &str = "Product details:";

/// Emitted when no product matches a part number.
pub const NOT_FOUND: &str = "Product not found.";

/// Appended to a product description once it has been stored.
pub const ADDED_SUFFIX: &str = " added to inventory.";

/// Append-only, insertion-ordered product store.
///
/// Duplicate part numbers are accepted; lookups resolve to the first product
/// inserted with a given part number.
#[derive(Debug)]
pub struct Inventory<R = StdoutReport> {
    products: Vec<Product>,
    report: R,
}

impl Inventory<StdoutReport> {
    /// Inventory that prints to standard output.
    pub fn stdout() -> Self {
        Self::new(StdoutReport)
    }
}

impl Default for Inventory<StdoutReport> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<R: Report> Inventory<R> {
    pub fn new(report: R) -> Self {
        Self {
            products: Vec::new(),
            report,
        }
    }

    /// Produce a product through `creator`, store it at the end, and report it.
    pub fn add_product<C: ProductCreator>(&mut self, creator: C) {
        let product = creator.create();
        tracing::debug!(
            part_number = %product.part_number(),
            kind = %product.kind(),
            count = self.products.len() + 1,
            "product added"
        );
        self.report.line(&format!("{}{ADDED_SUFFIX}", product.describe()));
        self.products.push(product);
    }

    /// List every stored product, in insertion order.
    ///
    /// The header is reported immediately; each description reaches the sink
    /// as the returned iterator yields it. Calling this again restarts over the
    /// same stored products.
    pub fn show_inventory(&mut self) -> impl Iterator<Item = String> + '_ {
        tracing::debug!(count = self.products.len(), "listing inventory");
        self.report.line(INVENTORY_HEADER);

        let report = &mut self.report;
        self.products.iter().map(move |product| {
            let line = product.describe();
            report.line(&line);
            line
        })
    }

    /// Report the first product whose part number equals `part_number` exactly.
    ///
    /// Absence is a normal outcome: it is reported and `None` is returned.
    pub fn show_product_details(&mut self, part_number: &str) -> Option<&Product> {
        let position = self.position(part_number);
        tracing::debug!(part_number, found = position.is_some(), "product lookup");

        match position {
            Some(idx) => {
                let product = &self.products[idx];
                self.report.line(DETAILS_HEADER);
                self.report.line(&product.describe());
                Some(product)
            }
            None => {
                self.report.line(NOT_FOUND);
                None
            }
        }
    }

    /// Silent lookup with the same first-match rule as [`Self::show_product_details`].
    pub fn find(&self, part_number: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == part_number)
    }

    /// Lookup for callers that treat absence as an error.
    pub fn require(&self, part_number: &str) -> CatalogResult<&Product> {
        self.find(part_number).ok_or_else(|| CatalogError::not_found(part_number))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn report(&self) -> &R {
        &self.report
    }

    pub fn report_mut(&mut self) -> &mut R {
        &mut self.report
    }

    fn position(&self, part_number: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id() == part_number)
    }
}
