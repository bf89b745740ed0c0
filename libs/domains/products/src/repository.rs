use async_trait::async_trait;

use crate::error::ProductResult;

/// A record addressable by an externally assigned integer id.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> i32;
}

/// Generic repository over an entity type
///
/// Reads and `create` may suspend on the backing store; `update` and
/// `delete` complete synchronously.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Repository<T: Send + Sync + 'static>: Send + Sync {
    /// All entities currently stored
    async fn get_all(&self) -> ProductResult<Vec<T>>;

    /// Look up an entity; `None` when no entity has this id
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<T>>;

    /// Store a new entity
    async fn create(&self, entity: T) -> ProductResult<()>;

    /// Replace the stored entity with the same id
    fn update(&self, entity: T) -> ProductResult<()>;

    /// Remove the stored entity with the same id
    fn delete(&self, entity: T) -> ProductResult<()>;
}
