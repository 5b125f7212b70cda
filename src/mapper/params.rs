//! Parameter columns: headers of the form `Parameter: Label (Unit)`.

use super::HeaderMap;
use crate::types::Param;

/// Header prefixes that mark a parameter column
pub const PARAM_PREFIXES: [&str; 2] = ["Параметр:", "Parameter:"];

/// A parsed parameter header bound to its column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamColumn {
    pub index: usize,
    pub name: String,
    pub unit: String,
}

impl ParamColumn {
    /// Parse a parameter header. Returns `None` for ordinary columns.
    pub fn parse(header: &str, index: usize) -> Option<Self> {
        let rest = PARAM_PREFIXES
            .iter()
            .find_map(|prefix| header.strip_prefix(prefix))?;

        let (name, unit) = match rest.split_once('(') {
            Some((name, unit)) => {
                let unit = unit.trim();
                let unit = unit.strip_suffix(')').unwrap_or(unit);
                (name.trim(), unit)
            }
            None => (rest.trim(), ""),
        };

        Some(Self {
            index,
            name: name.to_string(),
            unit: unit.to_string(),
        })
    }

    /// The parameter for this row, if its cell holds a value
    pub fn extract(&self, row: &[String]) -> Option<Param> {
        let value = row.get(self.index)?;
        if value.is_empty() {
            return None;
        }
        Some(Param {
            name: self.name.clone(),
            unit: self.unit.clone(),
            value: value.clone(),
        })
    }
}

/// All parameter columns of a sheet, in column order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamColumns(Vec<ParamColumn>);

impl ParamColumns {
    pub fn from_header(header: &HeaderMap) -> Self {
        let mut columns: Vec<ParamColumn> = header
            .iter()
            .filter_map(|(label, index)| ParamColumn::parse(label, index))
            .collect();
        // the header map is unordered; column order decides output order
        columns.sort_by_key(|c| c.index);
        Self(columns)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Non-empty parameters of one row
    pub fn extract(&self, row: &[String]) -> Vec<Param> {
        self.0.iter().filter_map(|c| c.extract(row)).collect()
    }
}
