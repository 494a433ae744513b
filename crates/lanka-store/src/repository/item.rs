//! # Item Repository
//!
//! Catalog operations. Items are never deleted and keep their insertion
//! order; stock only changes through sale processing.

use lanka_core::{Item, NewItem};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::store::Store;

/// Repository for catalog operations.
///
/// ## Usage
/// ```rust
/// use lanka_store::{Store, StoreConfig};
///
/// let store = Store::new(StoreConfig::default());
/// let results = store.items().search("dhal").unwrap();
/// assert_eq!(results[0].id, "ITM002");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ItemRepository<'a> {
    store: &'a Store,
}

impl<'a> ItemRepository<'a> {
    /// Creates a new ItemRepository.
    pub fn new(store: &'a Store) -> Self {
        ItemRepository { store }
    }

    /// Returns a snapshot of every item, in insertion order.
    pub fn list(&self) -> StoreResult<Vec<Item>> {
        Ok(self.store.lock()?.items.clone())
    }

    /// Case-insensitive match on name, category or id.
    ///
    /// An empty query returns the full catalog.
    pub fn search(&self, query: &str) -> StoreResult<Vec<Item>> {
        let query = query.trim();
        debug!(query = %query, "Searching items");

        let data = self.store.lock()?;
        if query.is_empty() {
            return Ok(data.items.clone());
        }

        let items: Vec<Item> = data
            .items
            .iter()
            .filter(|item| item.matches(query))
            .cloned()
            .collect();

        debug!(count = items.len(), "Search returned items");
        Ok(items)
    }

    /// Gets an item by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - Item not found
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<Item>> {
        let data = self.store.lock()?;
        Ok(data.items.iter().find(|item| item.id == id).cloned())
    }

    /// Gets an item by id, failing with `NotFound` if absent.
    pub fn require(&self, id: &str) -> StoreResult<Item> {
        self.get_by_id(id)?
            .ok_or_else(|| StoreError::not_found("Item", id))
    }

    /// Assigns a fresh id and appends the item to the catalog.
    ///
    /// The input is assumed valid (see `lanka_core::validation`).
    pub fn add(&self, new_item: NewItem) -> StoreResult<Item> {
        let mut data = self.store.lock()?;
        let item = new_item.with_id(data.next_item_id());
        data.items.push(item.clone());

        info!(item_id = %item.id, name = %item.name, stock = item.stock, "Item added");
        Ok(item)
    }

    /// Number of catalog entries.
    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.store.lock()?.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreConfig;
    use lanka_core::Money;

    fn new_item(name: &str, stock: u32) -> NewItem {
        NewItem {
            name: name.to_string(),
            price: Money::from_major_minor(120, 0),
            stock,
            category: Some("Snacks".to_string()),
        }
    }

    #[test]
    fn test_seeded_catalog() {
        let store = Store::new(StoreConfig::default());
        let items = store.items().list().unwrap();

        assert_eq!(items.len(), 7);
        assert_eq!(items[0].id, "ITM001");
        assert_eq!(items[0].name, "Keerisamba Rice 1kg");
        assert_eq!(items[6].id, "ITM007");
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let store = Store::new(StoreConfig::default());
        let first = store.items().add(new_item("Cream Crackers", 40)).unwrap();
        let second = store.items().add(new_item("Cream Crackers", 40)).unwrap();

        assert_eq!(first.id, "ITM008");
        assert_eq!(second.id, "ITM009");
        assert_eq!(store.items().count().unwrap(), 9);
    }

    #[test]
    fn test_add_zero_stock_is_kept() {
        let store = Store::new(StoreConfig::empty());
        let item = store.items().add(new_item("Papadam Pack", 0)).unwrap();

        assert_eq!(item.id, "ITM001");
        assert!(store.items().require("ITM001").unwrap().is_out_of_stock());
    }

    #[test]
    fn test_search() {
        let store = Store::new(StoreConfig::default());

        let beverages = store.items().search("beverages").unwrap();
        let ids: Vec<_> = beverages.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["ITM005", "ITM007"]);

        assert_eq!(store.items().search("COCA").unwrap().len(), 1);
        assert_eq!(store.items().search("  ").unwrap().len(), 7);
        assert!(store.items().search("durian").unwrap().is_empty());
    }

    #[test]
    fn test_require_missing() {
        let store = Store::new(StoreConfig::default());
        assert!(store.items().get_by_id("ITM999").unwrap().is_none());
        assert!(matches!(
            store.items().require("ITM999"),
            Err(StoreError::NotFound { .. })
        ));
    }
}
