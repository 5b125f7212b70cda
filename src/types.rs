//==============================================================================
// Source records (one per spreadsheet row)
//==============================================================================

/// Placeholder shop name used when the settings sheet does not provide one
pub const DEFAULT_SHOP_NAME: &str = "Мой магазин";
/// Placeholder company name
pub const DEFAULT_COMPANY_NAME: &str = "Моя компания";
/// Placeholder site URL
pub const DEFAULT_SHOP_URL: &str = "https://example.com";

/// Shop-level settings from the key/value settings sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopSettings {
    pub name: String,
    pub company: String,
    pub url: String,
}

impl ShopSettings {
    /// Build settings, replacing empty values with the placeholders
    pub fn with_defaults(name: String, company: String, url: String) -> Self {
        fn or_default(value: String, default: &str) -> String {
            if value.is_empty() {
                default.to_string()
            } else {
                value
            }
        }

        Self {
            name: or_default(name, DEFAULT_SHOP_NAME),
            company: or_default(company, DEFAULT_COMPANY_NAME),
            url: or_default(url, DEFAULT_SHOP_URL),
        }
    }
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self::with_defaults(String::new(), String::new(), String::new())
    }
}

/// A currency and its rate. The rate is passed through as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub id: String,
    pub rate: String,
}

/// A catalog category. An empty `parent_id` marks a root category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub parent_id: String,
    pub name: String,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_empty()
    }
}

/// A product characteristic taken from a `Parameter: Name (Unit)` column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub unit: String,
    pub value: String,
}

/// A product row after field mapping and coercion
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub available: bool,
    pub url: String,
    pub price: f64,
    pub currency_id: String,
    pub category_id: String,
    pub pictures: Vec<String>,
    pub vendor: String,
    pub description: String,
    pub sales_notes: String,
    pub params: Vec<Param>,
}

impl Product {
    /// A product with only the required fields set and every optional field at its default
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            available: true,
            url: String::new(),
            price: 0.0,
            currency_id: String::new(),
            category_id: String::new(),
            pictures: Vec::new(),
            vendor: String::new(),
            description: String::new(),
            sales_notes: String::new(),
            params: Vec::new(),
        }
    }
}

//==============================================================================
// Catalog (render-ready)
//==============================================================================

/// The XML projection of a [`Product`]; every field is already rendered text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub id: String,
    pub available: String,
    pub url: String,
    pub price: String,
    pub currency_id: String,
    pub category_id: String,
    pub pictures: Vec<String>,
    pub name: String,
    pub vendor: String,
    pub description: String,
    pub sales_notes: String,
    pub params: Vec<Param>,
}

/// Root export record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Generation timestamp, `YYYY-MM-DD HH:MM`
    pub date: String,
    pub shop: ShopSettings,
    pub currencies: Vec<Currency>,
    pub categories: Vec<Category>,
    pub offers: Vec<Offer>,
}
