use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type FeedResult<T> = Result<T, FeedError>;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("cannot open workbook {}: {message}", .path.display())]
    DocumentOpen { path: PathBuf, message: String },

    #[error("sheet '{0}' not found")]
    SheetNotFound(String),

    #[error("cannot read sheet '{sheet}': {message}")]
    SheetRead { sheet: String, message: String },

    #[error("{}", empty_collection_message(.kind, .sheet))]
    EmptyCollection { sheet: String, kind: CollectionKind },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{stage}: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<FeedError>,
    },
}

impl FeedError {
    /// Attach the pipeline stage that produced this error.
    pub fn in_stage(self, stage: Stage) -> Self {
        FeedError::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// The innermost error, with every stage wrapper peeled off.
    pub fn kind_root(&self) -> &FeedError {
        match self {
            FeedError::Stage { source, .. } => source.kind_root(),
            other => other,
        }
    }
}

fn empty_collection_message(kind: &CollectionKind, sheet: &str) -> String {
    match kind {
        CollectionKind::Products => "no products found to put into the YML feed".to_string(),
        other => format!("no {other} listed in sheet '{sheet}'"),
    }
}

/// Which record collection came out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Currencies,
    Categories,
    Products,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CollectionKind::Currencies => "currencies",
            CollectionKind::Categories => "categories",
            CollectionKind::Products => "products",
        };
        f.write_str(name)
    }
}

/// Conversion stages, used as error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    OpenWorkbook,
    ShopSettings,
    Currencies,
    Categories,
    Products,
    WriteXml,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Stage::OpenWorkbook => "failed to open the workbook",
            Stage::ShopSettings => "failed to read shop settings",
            Stage::Currencies => "failed to read currencies",
            Stage::Categories => "failed to read categories",
            Stage::Products => "failed to read products",
            Stage::WriteXml => "failed to write XML",
        };
        f.write_str(what)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_wrapping_renders_chain() {
        let err = FeedError::SheetNotFound("Валюты".to_string()).in_stage(Stage::Currencies);
        assert_eq!(
            err.to_string(),
            "failed to read currencies: sheet 'Валюты' not found"
        );
        assert!(matches!(err.kind_root(), FeedError::SheetNotFound(name) if name == "Валюты"));
    }

    #[test]
    fn test_empty_products_message() {
        let err = FeedError::EmptyCollection {
            sheet: "Товары".to_string(),
            kind: CollectionKind::Products,
        };
        assert_eq!(err.to_string(), "no products found to put into the YML feed");

        let err = FeedError::EmptyCollection {
            sheet: "Валюты".to_string(),
            kind: CollectionKind::Currencies,
        };
        assert_eq!(err.to_string(), "no currencies listed in sheet 'Валюты'");
    }
}
