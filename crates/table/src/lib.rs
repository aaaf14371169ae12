use ::model::Error;
use async_trait::async_trait;
use std::fmt::{Debug, Display, Formatter};

/// A full table item, attribute name to JSON value.
pub type Item = serde_json::Map<String, serde_json::Value>;

/// Destination for decoded records.
///
/// Each call writes one whole item. The table's own key schema decides
/// whether an existing item is replaced.
#[async_trait]
pub trait TableWriter: Send + Sync {
    fn table_name(&self) -> &str;

    async fn put_item(&self, item: Item) -> Result<(), TableError>;
}

/// Errors arising from writing an item.
#[derive(Debug)]
pub struct TableError {
    pub table_name: String,

    pub reason: TableErrorReason,
}

#[derive(Debug)]
pub enum TableErrorReason {
    // An error from the underlying table
    BackendFailure(Error),
}

impl TableError {
    pub fn new(table_name: &str, reason: TableErrorReason) -> Self {
        TableError {
            table_name: table_name.to_string(),
            reason,
        }
    }
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            TableErrorReason::BackendFailure(err) => {
                write!(f, "Write to table {} failed: {}", self.table_name, err)
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.reason {
            TableErrorReason::BackendFailure(err) => Some(err.as_ref()),
        }
    }
}
