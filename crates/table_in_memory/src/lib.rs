use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};
use table::{Item, TableError, TableWriter};

/// Records every written item in write order.
#[derive(Clone)]
pub struct InMemoryTable {
    table_name: String,
    items: Arc<Mutex<Vec<Item>>>,
}

impl Default for InMemoryTable {
    fn default() -> Self {
        InMemoryTable::new("in_memory")
    }
}

impl InMemoryTable {
    pub fn new(table_name: &str) -> Self {
        InMemoryTable {
            table_name: table_name.to_string(),
            items: Arc::new(Mutex::new(Default::default())),
        }
    }

    /// Items written so far, oldest first.
    pub fn items(&self) -> Vec<Item> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn put_count(&self) -> usize {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl TableWriter for InMemoryTable {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    async fn put_item(&self, item: Item) -> Result<(), TableError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: serde_json::Value) -> Item {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn keeps_items_in_write_order() {
        let table = InMemoryTable::new("likes");

        table.put_item(item(json!({ "user": "alice" }))).await.unwrap();
        table.put_item(item(json!({ "user": "bob" }))).await.unwrap();

        assert_eq!(2, table.put_count());
        assert_eq!(
            vec![item(json!({ "user": "alice" })), item(json!({ "user": "bob" }))],
            table.items()
        );
    }

    #[tokio::test]
    async fn clones_share_items() {
        let table = InMemoryTable::default();
        let writer: Arc<dyn TableWriter> = Arc::new(table.clone());

        writer.put_item(item(json!({ "id": 1 }))).await.unwrap();

        assert_eq!("in_memory", writer.table_name());
        assert_eq!(1, table.put_count());
    }
}
