use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::WardrobeItem,
};

/// Source of wardrobe items
///
/// The recommendation engine never fetches or persists items itself; handlers ask a
/// provider for the current catalog and pass it through.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// All items, in catalog order
    async fn list_items(&self) -> AppResult<Vec<WardrobeItem>>;

    /// Adds an item; ids must be unique within the catalog
    async fn add_item(&self, item: WardrobeItem) -> AppResult<()>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Catalog held in process memory, in insertion order
#[derive(Default)]
pub struct InMemoryCatalog {
    items: RwLock<Vec<WardrobeItem>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<WardrobeItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn list_items(&self) -> AppResult<Vec<WardrobeItem>> {
        Ok(self.items.read().await.clone())
    }

    async fn add_item(&self, item: WardrobeItem) -> AppResult<()> {
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.id == item.id) {
            tracing::warn!(item_id = %item.id, "Rejected duplicate wardrobe item");
            return Err(AppError::InvalidInput(format!(
                "Item with id {} already exists",
                item.id
            )));
        }
        tracing::debug!(item_id = %item.id, name = %item.name, "Added wardrobe item");
        items.push(item);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "in_memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_and_list_preserves_order() {
        let catalog = InMemoryCatalog::new();
        catalog.add_item(WardrobeItem::new("b", "Jeans")).await.unwrap();
        catalog.add_item(WardrobeItem::new("a", "Tee")).await.unwrap();

        let ids: Vec<String> = catalog
            .list_items()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let catalog = InMemoryCatalog::with_items(vec![WardrobeItem::new("a", "Tee")]);
        let result = catalog.add_item(WardrobeItem::new("a", "Other Tee")).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert_eq!(catalog.list_items().await.unwrap().len(), 1);
    }
}
