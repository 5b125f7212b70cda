//! Permissive cell coercion.
//!
//! Malformed cells never fail the conversion: they fall back to a default,
//! and the fallback is reported through [`Coerced::used_default`].

/// A coerced value plus whether the default was substituted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coerced<T> {
    pub value: T,
    pub used_default: bool,
}

impl<T> Coerced<T> {
    fn parsed(value: T) -> Self {
        Self {
            value,
            used_default: false,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            used_default: true,
        }
    }
}

/// Cell texts that mean "in stock" (compared case-insensitively)
const AVAILABLE_WORDS: [&str; 3] = ["да", "yes", "true"];

/// Availability flag. `None` means the column is absent, which defaults to available.
pub fn parse_available(cell: Option<&str>) -> Coerced<bool> {
    match cell {
        None => Coerced::fallback(true),
        Some(text) => {
            let lowered = text.to_lowercase();
            Coerced::parsed(AVAILABLE_WORDS.contains(&lowered.as_str()))
        }
    }
}

/// Price as a float; absent, unparseable or non-finite cells become 0.
pub fn parse_price(cell: Option<&str>) -> Coerced<f64> {
    match cell.map(str::parse::<f64>) {
        Some(Ok(price)) if price.is_finite() => Coerced::parsed(price),
        _ => Coerced::fallback(0.0),
    }
}

/// Comma-separated picture URLs, trimmed, empties dropped, order kept
pub fn split_pictures(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(String::from)
        .collect()
}
