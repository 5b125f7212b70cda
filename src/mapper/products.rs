//! Products sheet: columns are located by header text.

use super::coerce::{parse_available, parse_price, split_pictures};
use super::params::ParamColumns;
use super::{HeaderMap, PRODUCTS_SHEET};
use crate::error::{CollectionKind, FeedError, FeedResult};
use crate::excel::SheetSource;
use crate::types::Product;
use tracing::{debug, info};

/// Known product columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductColumn {
    Id,
    Name,
    Available,
    Url,
    Price,
    CurrencyId,
    CategoryId,
    Pictures,
    Vendor,
    Description,
    SalesNotes,
}

impl ProductColumn {
    /// Accepted header labels: template label first, English alias second
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            ProductColumn::Id => &["ID товара", "Product ID"],
            ProductColumn::Name => &["Название товара", "Product name"],
            ProductColumn::Available => &["Доступность (true/false)", "Available"],
            ProductColumn::Url => &["URL товара", "Product URL"],
            ProductColumn::Price => &["Цена", "Price"],
            ProductColumn::CurrencyId => &["Валюта (ID)", "Currency ID"],
            ProductColumn::CategoryId => &["ID категории", "Category ID"],
            ProductColumn::Pictures => &["URL изображения", "Picture URL"],
            ProductColumn::Vendor => &["Производитель", "Vendor"],
            ProductColumn::Description => &["Описание", "Description"],
            ProductColumn::SalesNotes => &["Примечания", "Sales notes"],
        }
    }
}

/// Resolves product fields of a single row through the header map
struct RowView<'a> {
    header: &'a HeaderMap,
    row: &'a [String],
}

impl<'a> RowView<'a> {
    /// The cell under `column`, or `None` when the column is absent or the row is too short
    fn cell(&self, column: ProductColumn) -> Option<&'a str> {
        let idx = self.header.find(column.labels())?;
        self.row.get(idx).map(String::as_str)
    }

    fn text(&self, column: ProductColumn) -> String {
        self.cell(column).unwrap_or_default().to_string()
    }
}

/// Read the products sheet.
///
/// Rows without an id or a name are skipped silently. Malformed prices and
/// availability values fall back to defaults. Fails when no product remains.
pub fn read_products<S: SheetSource>(source: &mut S) -> FeedResult<Vec<Product>> {
    let rows = source.sheet_rows(PRODUCTS_SHEET)?;

    let no_products = || FeedError::EmptyCollection {
        sheet: PRODUCTS_SHEET.to_string(),
        kind: CollectionKind::Products,
    };

    let (header_row, data_rows) = rows.split_first().ok_or_else(no_products)?;
    let header = HeaderMap::from_row(header_row);
    let params = ParamColumns::from_header(&header);
    debug!(
        columns = header.len(),
        param_columns = params.len(),
        "indexed products header"
    );

    let mut products = Vec::new();
    for (offset, row) in data_rows.iter().enumerate() {
        let view = RowView {
            header: &header,
            row: row.as_slice(),
        };
        match map_product(&view, &params) {
            Some(product) => products.push(product),
            None => debug!(row = offset + 2, "skipping product row without id or name"),
        }
    }

    if products.is_empty() {
        return Err(no_products());
    }

    info!(count = products.len(), "read products");
    Ok(products)
}

fn map_product(view: &RowView<'_>, params: &ParamColumns) -> Option<Product> {
    let id = view.text(ProductColumn::Id);
    let name = view.text(ProductColumn::Name);
    if id.is_empty() || name.is_empty() {
        return None;
    }

    let price = parse_price(view.cell(ProductColumn::Price));
    if price.used_default && view.cell(ProductColumn::Price).is_some() {
        debug!(product = %id, "unparseable price, using 0");
    }

    Some(Product {
        available: parse_available(view.cell(ProductColumn::Available)).value,
        url: view.text(ProductColumn::Url),
        price: price.value,
        currency_id: view.text(ProductColumn::CurrencyId),
        category_id: view.text(ProductColumn::CategoryId),
        pictures: view
            .cell(ProductColumn::Pictures)
            .map(split_pictures)
            .unwrap_or_default(),
        vendor: view.text(ProductColumn::Vendor),
        description: view.text(ProductColumn::Description),
        sales_notes: view.text(ProductColumn::SalesNotes),
        params: params.extract(view.row),
        id,
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::MemorySheets;
    use crate::types::Param;

    const HEADER: [&str; 13] = [
        "ID товара",
        "Название товара",
        "Доступность (true/false)",
        "URL товара",
        "Цена",
        "Валюта (ID)",
        "ID категории",
        "URL изображения",
        "Производитель",
        "Описание",
        "Примечания",
        "Параметр: Вес (кг)",
        "Параметр: Цвет",
    ];

    fn sheets(rows: Vec<Vec<&str>>) -> MemorySheets {
        let mut all = vec![HEADER.to_vec()];
        all.extend(rows);
        MemorySheets::new().with_sheet(PRODUCTS_SHEET, all)
    }

    #[test]
    fn test_full_row() {
        let mut source = sheets(vec![vec![
            "101",
            "Стул",
            "да",
            "https://shop/101",
            "19.5",
            "RUR",
            "2",
            "a.jpg, b.jpg ,  , c.jpg",
            "ИКЕА",
            "Деревянный стул",
            "Самовывоз",
            "2.5",
            "",
        ]]);
        let products = read_products(&mut source).unwrap();
        assert_eq!(products.len(), 1);

        let p = &products[0];
        assert_eq!(p.id, "101");
        assert_eq!(p.name, "Стул");
        assert!(p.available);
        assert_eq!(p.url, "https://shop/101");
        assert_eq!(p.price, 19.5);
        assert_eq!(p.currency_id, "RUR");
        assert_eq!(p.category_id, "2");
        assert_eq!(p.pictures, vec!["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(p.vendor, "ИКЕА");
        assert_eq!(p.description, "Деревянный стул");
        assert_eq!(p.sales_notes, "Самовывоз");
        assert_eq!(
            p.params,
            vec![Param {
                name: "Вес".to_string(),
                unit: "кг".to_string(),
                value: "2.5".to_string(),
            }]
        );
    }

    #[test]
    fn test_rows_missing_id_or_name_are_skipped() {
        let mut source = sheets(vec![
            vec!["1", "Стол"],
            vec!["", "Без ID"],
            vec!["3", ""],
            vec![],
            vec!["5", "Шкаф"],
        ]);
        let products = read_products(&mut source).unwrap();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    #[test]
    fn test_short_row_uses_defaults() {
        let mut source = sheets(vec![vec!["1", "Стол"]]);
        let p = &read_products(&mut source).unwrap()[0];
        // availability column exists but the row has no cell there
        assert!(p.available);
        assert_eq!(p.price, 0.0);
        assert!(p.pictures.is_empty());
        assert!(p.params.is_empty());
    }

    #[test]
    fn test_availability_other_text_is_false() {
        let mut source = sheets(vec![vec!["1", "Стол", "нет"], vec!["2", "Стул", ""]]);
        let products = read_products(&mut source).unwrap();
        assert!(!products[0].available);
        assert!(!products[1].available);
    }

    #[test]
    fn test_availability_absent_column_defaults_true() {
        let mut source = MemorySheets::new().with_sheet(
            PRODUCTS_SHEET,
            vec![vec!["Product ID", "Product name", "Price"], vec!["7", "Lamp", "oops"]],
        );
        let p = &read_products(&mut source).unwrap()[0];
        assert!(p.available);
        assert_eq!(p.price, 0.0);
    }

    #[test]
    fn test_no_qualifying_rows_is_error() {
        let mut source = sheets(vec![vec!["", "Без ID"], vec!["2"]]);
        let err = read_products(&mut source).unwrap_err();
        assert!(matches!(
            err,
            FeedError::EmptyCollection {
                kind: CollectionKind::Products,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_sheet_is_error() {
        let mut source =
            MemorySheets::new().with_sheet(PRODUCTS_SHEET, Vec::<Vec<String>>::new());
        assert!(read_products(&mut source).is_err());
    }

    #[test]
    fn test_params_keep_column_order() {
        let mut source = MemorySheets::new().with_sheet(
            PRODUCTS_SHEET,
            vec![
                vec![
                    "Product ID",
                    "Product name",
                    "Parameter: Weight (kg)",
                    "Parameter: Color",
                    "Parameter: Assembly",
                ],
                vec!["1", "Chair", "2.5", "red", "yes"],
                vec!["2", "Table", "", "oak"],
            ],
        );
        let products = read_products(&mut source).unwrap();

        let names: Vec<&str> = products[0].params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Weight", "Color", "Assembly"]);
        assert_eq!(products[0].params[0].unit, "kg");

        assert_eq!(products[1].params.len(), 1);
        assert_eq!(products[1].params[0].name, "Color");
        assert_eq!(products[1].params[0].value, "oak");
    }
}
