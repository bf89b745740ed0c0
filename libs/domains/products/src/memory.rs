//! In-process implementation of [`Repository`].

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::error::{ProductError, ProductResult};
use crate::repository::{Entity, Repository};

/// Map-backed store shared between clones.
///
/// `get_all` yields entities in ascending id order. The lock is only held
/// for a single map operation, never across an await point.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    entities: Arc<RwLock<BTreeMap<i32, T>>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Seeds the store. A later entity replaces an earlier one with the same id.
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Self {
        let map = entities.into_iter().map(|e| (e.id(), e)).collect();
        Self {
            entities: Arc::new(RwLock::new(map)),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> ProductResult<Vec<T>> {
        let entities = self.entities.read()?;
        Ok(entities.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<T>> {
        let entities = self.entities.read()?;
        Ok(entities.get(&id).cloned())
    }

    async fn create(&self, entity: T) -> ProductResult<()> {
        let id = entity.id();
        let mut entities = self.entities.write()?;

        if entities.contains_key(&id) {
            return Err(ProductError::DuplicateId(id));
        }

        entities.insert(id, entity);
        tracing::info!(entity_id = id, "Created entity");
        Ok(())
    }

    fn update(&self, entity: T) -> ProductResult<()> {
        let id = entity.id();
        let mut entities = self.entities.write()?;

        let slot = entities.get_mut(&id).ok_or(ProductError::NotFound(id))?;
        *slot = entity;

        tracing::info!(entity_id = id, "Updated entity");
        Ok(())
    }

    fn delete(&self, entity: T) -> ProductResult<()> {
        let id = entity.id();
        let mut entities = self.entities.write()?;

        entities.remove(&id).ok_or(ProductError::NotFound(id))?;

        tracing::info!(entity_id = id, "Deleted entity");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn product(id: i32, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let repo: InMemoryRepository<Product> = InMemoryRepository::new();

        repo.create(product(1, "Kalem")).await.unwrap();

        let fetched = repo.get_by_id(1).await.unwrap();
        assert_eq!(fetched.map(|p| p.name), Some("Kalem".to_string()));
        assert!(repo.get_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_all_is_ordered_by_id() {
        let repo = InMemoryRepository::with_entities([
            product(3, "Silgi"),
            product(1, "Kalem"),
            product(2, "Çanta"),
        ]);

        let ids: Vec<i32> = repo.get_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_duplicate_id_error() {
        let repo = InMemoryRepository::with_entities([product(1, "Kalem")]);

        let result = repo.create(product(1, "Kalem 2")).await;
        assert!(matches!(result, Err(ProductError::DuplicateId(1))));
    }

    #[tokio::test]
    async fn test_update_replaces_entity() {
        let repo = InMemoryRepository::with_entities([product(1, "Kalem")]);

        repo.update(product(1, "Dolma Kalem")).unwrap();

        let fetched = repo.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Dolma Kalem");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_entity() {
        let repo: InMemoryRepository<Product> = InMemoryRepository::new();

        assert!(matches!(
            repo.update(product(9, "Ghost")),
            Err(ProductError::NotFound(9))
        ));
        assert!(matches!(
            repo.delete(product(9, "Ghost")),
            Err(ProductError::NotFound(9))
        ));
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo: InMemoryRepository<Product> = InMemoryRepository::new();
        let other = repo.clone();

        repo.create(product(1, "Kalem")).await.unwrap();
        other.delete(product(1, "Kalem")).unwrap();

        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
