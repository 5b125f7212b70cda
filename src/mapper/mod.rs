//! Field mapping: sheet rows → typed records
//!
//! Settings, currencies and categories are positional sheets; products are
//! looked up by header text. Row 0 of every sheet is a header and never
//! becomes a record.

mod coerce;
pub mod params;
mod products;

use crate::error::{CollectionKind, FeedError, FeedResult};
use crate::excel::SheetSource;
use crate::types::{Category, Currency, ShopSettings};
use std::collections::HashMap;
use tracing::{debug, info};

pub use coerce::{parse_available, parse_price, split_pictures, Coerced};
pub use params::{ParamColumn, ParamColumns};
pub use products::{read_products, ProductColumn};

/// Sheet holding `key | value` shop settings
pub const SHOP_SETTINGS_SHEET: &str = "Настройки магазина";
/// Sheet holding `id | rate` currency rows
pub const CURRENCIES_SHEET: &str = "Валюты";
/// Sheet holding `id | name | parent id` category rows
pub const CATEGORIES_SHEET: &str = "Категории";
/// Sheet holding one product per row, columns keyed by header
pub const PRODUCTS_SHEET: &str = "Товары";

/// Settings keys, each with its Russian label and English alias
const SHOP_NAME_KEYS: [&str; 2] = ["Название магазина", "Shop name"];
const COMPANY_NAME_KEYS: [&str; 2] = ["Название компании", "Company name"];
const SITE_URL_KEYS: [&str; 2] = ["URL сайта", "Site URL"];

/// Header text → column index, built from a sheet's first row.
///
/// Duplicate headers resolve to the rightmost column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap(HashMap<String, usize>);

impl HeaderMap {
    pub fn from_row(header: &[String]) -> Self {
        Self(
            header
                .iter()
                .enumerate()
                .map(|(idx, label)| (label.clone(), idx))
                .collect(),
        )
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.0.get(label).copied()
    }

    /// First of `labels` present in the header
    pub fn find(&self, labels: &[&str]) -> Option<usize> {
        labels.iter().find_map(|label| self.get(label))
    }

    /// Entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(label, idx)| (label.as_str(), *idx))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read the shop settings sheet. Unknown keys are ignored, missing ones fall back to placeholders.
pub fn read_shop_settings<S: SheetSource>(source: &mut S) -> FeedResult<ShopSettings> {
    let rows = source.sheet_rows(SHOP_SETTINGS_SHEET)?;

    let mut name = String::new();
    let mut company = String::new();
    let mut url = String::new();

    for row in rows.iter().skip(1) {
        let [key, value, ..] = row.as_slice() else {
            continue;
        };
        let key = key.as_str();
        if SHOP_NAME_KEYS.contains(&key) {
            name = value.clone();
        } else if COMPANY_NAME_KEYS.contains(&key) {
            company = value.clone();
        } else if SITE_URL_KEYS.contains(&key) {
            url = value.clone();
        } else {
            debug!(key, "ignoring unknown shop setting");
        }
    }

    let settings = ShopSettings::with_defaults(name, company, url);
    info!(shop = %settings.name, "read shop settings");
    Ok(settings)
}

/// Read currencies. Rows without an id are skipped; an empty result is an error.
pub fn read_currencies<S: SheetSource>(source: &mut S) -> FeedResult<Vec<Currency>> {
    let rows = source.sheet_rows(CURRENCIES_SHEET)?;

    let currencies: Vec<Currency> = rows
        .iter()
        .skip(1)
        .filter_map(|row| match row.as_slice() {
            [id, rate, ..] if !id.is_empty() => Some(Currency {
                id: id.clone(),
                rate: rate.clone(),
            }),
            _ => None,
        })
        .collect();

    if currencies.is_empty() {
        return Err(FeedError::EmptyCollection {
            sheet: CURRENCIES_SHEET.to_string(),
            kind: CollectionKind::Currencies,
        });
    }

    info!(count = currencies.len(), "read currencies");
    Ok(currencies)
}

/// Read categories. Rows missing an id or a name are skipped; an empty result is an error.
pub fn read_categories<S: SheetSource>(source: &mut S) -> FeedResult<Vec<Category>> {
    let rows = source.sheet_rows(CATEGORIES_SHEET)?;

    let categories: Vec<Category> = rows
        .iter()
        .skip(1)
        .filter_map(|row| match row.as_slice() {
            [id, name, rest @ ..] if !id.is_empty() && !name.is_empty() => Some(Category {
                id: id.clone(),
                name: name.clone(),
                parent_id: rest.first().cloned().unwrap_or_default(),
            }),
            _ => None,
        })
        .collect();

    if categories.is_empty() {
        return Err(FeedError::EmptyCollection {
            sheet: CATEGORIES_SHEET.to_string(),
            kind: CollectionKind::Categories,
        });
    }

    info!(count = categories.len(), "read categories");
    Ok(categories)
}
