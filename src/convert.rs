//! End-to-end conversion: workbook → catalog → YML file

use crate::error::{FeedResult, Stage};
use crate::excel::{SheetSource, Workbook};
use crate::mapper;
use crate::types::{Catalog, Category, Currency, Product, ShopSettings};
use crate::xml;
use std::path::PathBuf;
use tracing::info;

/// Where to read from and where to write to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub output: PathBuf,
    pub currencies: usize,
    pub categories: usize,
    pub offers: usize,
}

/// Everything the four sheets hold
#[derive(Debug, Clone, PartialEq)]
pub struct SheetData {
    pub shop: ShopSettings,
    pub currencies: Vec<Currency>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl SheetData {
    /// Read all four sheets, stopping at the first failure
    pub fn read<S: SheetSource>(source: &mut S) -> FeedResult<Self> {
        let shop =
            mapper::read_shop_settings(source).map_err(|e| e.in_stage(Stage::ShopSettings))?;
        let currencies =
            mapper::read_currencies(source).map_err(|e| e.in_stage(Stage::Currencies))?;
        let categories =
            mapper::read_categories(source).map_err(|e| e.in_stage(Stage::Categories))?;
        let products = mapper::read_products(source).map_err(|e| e.in_stage(Stage::Products))?;

        Ok(Self {
            shop,
            currencies,
            categories,
            products,
        })
    }

    /// Assemble the catalog, stamped with the current local time
    pub fn into_catalog(self) -> Catalog {
        Catalog::assemble_now(self.shop, self.currencies, self.categories, self.products)
    }
}

/// Run the whole conversion. Nothing is written unless every sheet was read.
pub fn convert(options: &ConvertOptions) -> FeedResult<ConvertReport> {
    let data = {
        let mut workbook =
            Workbook::open(&options.input).map_err(|e| e.in_stage(Stage::OpenWorkbook))?;
        SheetData::read(&mut workbook)?
        // workbook released here
    };

    let catalog = data.into_catalog();
    xml::write_catalog_file(&options.output, &catalog)
        .map_err(|e| e.in_stage(Stage::WriteXml))?;

    let report = ConvertReport {
        output: options.output.clone(),
        currencies: catalog.currencies.len(),
        categories: catalog.categories.len(),
        offers: catalog.offers.len(),
    };
    info!(
        input = %options.input.display(),
        output = %report.output.display(),
        offers = report.offers,
        "conversion finished"
    );
    Ok(report)
}
