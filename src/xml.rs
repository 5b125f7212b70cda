//! YML catalog XML writer
//!
//! Layout (two-space indentation):
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <yml_catalog date="2024-03-07 09:05">
//!   <shop>
//!     <name>…</name> <company>…</company> <url>…</url>
//!     <currencies> <currency id rate/>* </currencies>
//!     <categories> <category id parentId?>name</category>* </categories>
//!     <offers> <offer id available> … </offer>* </offers>
//!   </shop>
//! </yml_catalog>
//! ```

use crate::error::{FeedError, FeedResult};
use crate::types::{Catalog, Category, Currency, Offer, Param};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

const INDENT_SIZE: usize = 2;

/// Write the full document (declaration included) to `out`
pub fn write_catalog<W: Write>(mut out: W, catalog: &Catalog) -> io::Result<()> {
    out.write_all(XML_DECLARATION.as_bytes())?;
    out.write_all(b"\n")?;

    let mut writer = Writer::new_with_indent(&mut out, b' ', INDENT_SIZE);
    let mut root = BytesStart::new("yml_catalog");
    push_attr(&mut root, "date", &catalog.date);
    writer.write_event(Event::Start(root))?;
    write_shop(&mut writer, catalog)?;
    writer.write_event(Event::End(BytesEnd::new("yml_catalog")))?;

    out.flush()
}

/// Render the document into a string
pub fn render_catalog(catalog: &Catalog) -> io::Result<String> {
    let mut buf = Vec::new();
    write_catalog(&mut buf, catalog)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Create `path` and write the document into it
pub fn write_catalog_file(path: &Path, catalog: &Catalog) -> FeedResult<()> {
    let to_write_error = |source: io::Error| FeedError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    write_catalog(BufWriter::new(file), catalog).map_err(to_write_error)?;

    info!(path = %path.display(), offers = catalog.offers.len(), "wrote YML feed");
    Ok(())
}

fn write_shop<W: Write>(w: &mut Writer<W>, catalog: &Catalog) -> io::Result<()> {
    w.write_event(Event::Start(BytesStart::new("shop")))?;

    text_element(w, "name", &[], &catalog.shop.name)?;
    text_element(w, "company", &[], &catalog.shop.company)?;
    text_element(w, "url", &[], &catalog.shop.url)?;

    w.write_event(Event::Start(BytesStart::new("currencies")))?;
    for currency in &catalog.currencies {
        write_currency(w, currency)?;
    }
    w.write_event(Event::End(BytesEnd::new("currencies")))?;

    w.write_event(Event::Start(BytesStart::new("categories")))?;
    for category in &catalog.categories {
        write_category(w, category)?;
    }
    w.write_event(Event::End(BytesEnd::new("categories")))?;

    w.write_event(Event::Start(BytesStart::new("offers")))?;
    for offer in &catalog.offers {
        write_offer(w, offer)?;
    }
    w.write_event(Event::End(BytesEnd::new("offers")))?;

    w.write_event(Event::End(BytesEnd::new("shop")))
}

fn write_currency<W: Write>(w: &mut Writer<W>, currency: &Currency) -> io::Result<()> {
    let mut elem = BytesStart::new("currency");
    push_attr(&mut elem, "id", &currency.id);
    push_attr(&mut elem, "rate", &currency.rate);
    w.write_event(Event::Empty(elem))
}

fn write_category<W: Write>(w: &mut Writer<W>, category: &Category) -> io::Result<()> {
    let mut attrs = vec![("id", category.id.as_str())];
    if !category.is_root() {
        attrs.push(("parentId", category.parent_id.as_str()));
    }
    text_element(w, "category", &attrs, &category.name)
}

fn write_offer<W: Write>(w: &mut Writer<W>, offer: &Offer) -> io::Result<()> {
    let mut start = BytesStart::new("offer");
    push_attr(&mut start, "id", &offer.id);
    push_attr(&mut start, "available", &offer.available);
    w.write_event(Event::Start(start))?;

    text_element(w, "url", &[], &offer.url)?;
    text_element(w, "price", &[], &offer.price)?;
    text_element(w, "currencyId", &[], &offer.currency_id)?;
    text_element(w, "categoryId", &[], &offer.category_id)?;
    for picture in &offer.pictures {
        text_element(w, "picture", &[], picture)?;
    }
    text_element(w, "name", &[], &offer.name)?;
    optional_element(w, "vendor", &offer.vendor)?;
    optional_element(w, "description", &offer.description)?;
    optional_element(w, "sales_notes", &offer.sales_notes)?;
    for param in &offer.params {
        write_param(w, param)?;
    }

    w.write_event(Event::End(BytesEnd::new("offer")))
}

fn write_param<W: Write>(w: &mut Writer<W>, param: &Param) -> io::Result<()> {
    let mut attrs = vec![("name", param.name.as_str())];
    if !param.unit.is_empty() {
        attrs.push(("unit", param.unit.as_str()));
    }
    text_element(w, "param", &attrs, &param.value)
}

/// `<name attrs…>text</name>` on a single line
fn text_element<W: Write>(
    w: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
    text: &str,
) -> io::Result<()> {
    let mut start = BytesStart::new(name);
    for &(key, value) in attrs {
        push_attr(&mut start, key, value);
    }
    w.write_event(Event::Start(start))?;
    w.write_event(Event::Text(BytesText::new(&sanitize(text))))?;
    w.write_event(Event::End(BytesEnd::new(name)))
}

/// Escaped attribute with illegal characters replaced
fn push_attr(elem: &mut BytesStart<'_>, key: &str, value: &str) {
    elem.push_attribute((key, sanitize(value).as_ref()));
}

/// Replace characters XML 1.0 does not allow (C0 controls other than tab/LF/CR,
/// U+FFFE, U+FFFF) with U+FFFD. Borrows when nothing needs replacing.
fn sanitize(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|c| if is_xml_char(c) { c } else { '\u{FFFD}' })
                .collect(),
        )
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Like [`text_element`], but nothing at all for empty text
fn optional_element<W: Write>(w: &mut Writer<W>, name: &str, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    text_element(w, name, &[], text)
}
