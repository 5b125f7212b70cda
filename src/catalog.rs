//! Catalog assembly: records → render-ready catalog

use crate::types::{Catalog, Category, Currency, Offer, Product, ShopSettings};
use chrono::{Local, NaiveDateTime};

/// Timestamp format of the `date` attribute
pub const CATALOG_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

impl Catalog {
    /// Build the catalog with an explicit generation time
    pub fn assemble(
        shop: ShopSettings,
        currencies: Vec<Currency>,
        categories: Vec<Category>,
        products: Vec<Product>,
        generated_at: NaiveDateTime,
    ) -> Self {
        Self {
            date: generated_at.format(CATALOG_DATE_FORMAT).to_string(),
            shop,
            currencies,
            categories,
            offers: products.into_iter().map(Offer::from).collect(),
        }
    }

    /// Build the catalog stamped with the current local time
    pub fn assemble_now(
        shop: ShopSettings,
        currencies: Vec<Currency>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Self {
        Self::assemble(
            shop,
            currencies,
            categories,
            products,
            Local::now().naive_local(),
        )
    }
}

impl From<Product> for Offer {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            available: product.available.to_string(),
            url: product.url,
            price: format_price(product.price),
            currency_id: product.currency_id,
            category_id: product.category_id,
            pictures: product.pictures,
            name: product.name,
            vendor: product.vendor,
            description: product.description,
            sales_notes: product.sales_notes,
            params: product.params,
        }
    }
}

/// Fixed two decimal places: 19.5 → "19.50"
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}
