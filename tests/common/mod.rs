//! Shared fixtures: build .xlsx workbooks on disk with rust_xlsxwriter

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::Path;

pub const SETTINGS: &str = "Настройки магазина";
pub const CURRENCIES: &str = "Валюты";
pub const CATEGORIES: &str = "Категории";
pub const PRODUCTS: &str = "Товары";

pub type Sheet = (&'static str, Vec<Vec<&'static str>>);

pub const PRODUCT_HEADER: [&str; 13] = [
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
    "Parameter: Weight (kg)",
    "Параметр: Цвет",
];

/// Write `sheets` into a new workbook at `path`. Empty strings leave the cell blank.
pub fn write_workbook(path: &Path, sheets: &[Sheet]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if !cell.is_empty() {
                    worksheet.write_string(r as u32, c as u16, *cell).unwrap();
                }
            }
        }
    }
    workbook.save(path).unwrap();
}

pub fn settings_sheet() -> Sheet {
    (
        SETTINGS,
        vec![
            vec!["Параметр", "Значение"],
            vec!["Название магазина", "Ромашка"],
            vec!["Название компании", "ООО Ромашка"],
            vec!["URL сайта", "https://romashka.ru"],
        ],
    )
}

pub fn currencies_sheet() -> Sheet {
    (
        CURRENCIES,
        vec![vec!["ID", "Курс"], vec!["RUR", "1"], vec!["USD", "CBRF"]],
    )
}

pub fn categories_sheet() -> Sheet {
    (
        CATEGORIES,
        vec![
            vec!["ID", "Название", "Родительская категория"],
            vec!["1", "Мебель"],
            vec!["2", "Стулья", "1"],
        ],
    )
}

/// Products sheet with the standard header followed by `rows`
pub fn products_sheet(rows: Vec<Vec<&'static str>>) -> Sheet {
    let mut all = vec![PRODUCT_HEADER.to_vec()];
    all.extend(rows);
    (PRODUCTS, all)
}

/// All four sheets with the given product rows
pub fn standard_sheets(product_rows: Vec<Vec<&'static str>>) -> Vec<Sheet> {
    vec![
        settings_sheet(),
        currencies_sheet(),
        categories_sheet(),
        products_sheet(product_rows),
    ]
}
