use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::IdStrategy;
use crate::models::Item;

#[derive(Debug, Default)]
struct Inner {
    items: Vec<Item>,
    /// Successful creations since startup, deletions do not decrement it
    created: u64,
}

/// In-memory item collection shared by all handlers
///
/// Insertion order is preserved. All mutations go through a single write lock,
/// so each request observes a consistent view of the collection.
#[derive(Clone)]
pub struct ItemStore {
    inner: Arc<RwLock<Inner>>,
    id_strategy: IdStrategy,
}

impl ItemStore {
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            id_strategy,
        }
    }

    /// Snapshot of every item in insertion order
    pub async fn list(&self) -> Vec<Item> {
        self.inner.read().await.items.clone()
    }

    /// Append a new item and return it with its freshly assigned id
    pub async fn create(&self, name: String) -> Item {
        let mut inner = self.inner.write().await;

        let id = match self.id_strategy {
            IdStrategy::Length => inner.items.len() as u64 + 1,
            IdStrategy::Monotonic => inner.created + 1,
        };

        let item = Item { id, name };
        inner.items.push(item.clone());
        inner.created += 1;

        tracing::debug!("Created item with id: {} (store size: {})", id, inner.items.len());
        item
    }

    /// First item carrying `id`, if any
    pub async fn get(&self, id: u64) -> Option<Item> {
        self.inner
            .read()
            .await
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
    }

    /// Replace the name of the first item carrying `id`
    pub async fn update(&self, id: u64, name: String) -> Option<Item> {
        let mut inner = self.inner.write().await;
        let item = inner.items.iter_mut().find(|item| item.id == id)?;
        item.name = name;

        tracing::debug!("Updated item with id: {}", id);
        Some(item.clone())
    }

    /// Remove every item carrying `id`.
    ///
    /// Returns the number of items left, or `None` when nothing matched.
    pub async fn delete(&self, id: u64) -> Option<usize> {
        let mut inner = self.inner.write().await;
        let before = inner.items.len();
        inner.items.retain(|item| item.id != id);
        let remaining = inner.items.len();

        if remaining == before {
            return None;
        }

        tracing::debug!(
            "Deleted {} item(s) with id: {} ({} remaining)",
            before - remaining,
            id,
            remaining
        );
        Some(remaining)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }
}
