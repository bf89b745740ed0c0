use std::sync::Arc;
use tracing::{debug, instrument};

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::Repository;
use crate::results::ActionResult;

/// Machine-facing product flow returning status results with payloads.
pub struct ProductsApiController<R> {
    repository: Arc<R>,
}

impl<R> Clone for ProductsApiController<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Repository<Product>> ProductsApiController<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Full listing. An empty store still yields `200 OK`.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> ProductResult<ActionResult<Vec<Product>>> {
        let products = self.repository.get_all().await?;
        Ok(ActionResult::ok(products))
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<ActionResult<Product>> {
        match self.repository.get_by_id(id).await? {
            Some(product) => Ok(ActionResult::ok(product)),
            None => Ok(ActionResult::not_found()),
        }
    }

    #[instrument(skip(self, product), fields(product_id = product.id))]
    pub fn put_product(&self, id: i32, product: Product) -> ProductResult<ActionResult<Product>> {
        if id != product.id {
            debug!(route_id = id, "route id does not match product");
            return Ok(ActionResult::bad_request());
        }

        self.repository.update(product)?;
        Ok(ActionResult::no_content())
    }

    /// Stores the product and returns it as `201 Created`.
    #[instrument(skip(self, product), fields(product_id = product.id))]
    pub async fn post_product(&self, product: Product) -> ProductResult<ActionResult<Product>> {
        self.repository.create(product.clone()).await?;
        Ok(ActionResult::created(product))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<ActionResult<Product>> {
        let Some(product) = self.repository.get_by_id(id).await? else {
            return Ok(ActionResult::not_found());
        };

        self.repository.delete(product)?;
        Ok(ActionResult::no_content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::fixtures::{product, products};
    use crate::error::ProductError;
    use crate::repository::MockRepository;
    use axum::http::StatusCode;
    use mockall::predicate::eq;

    fn controller(mock: MockRepository<Product>) -> ProductsApiController<MockRepository<Product>> {
        ProductsApiController::new(mock)
    }

    #[tokio::test]
    async fn test_get_products_returns_full_listing() {
        let mut mock = MockRepository::<Product>::new();
        mock.expect_get_all().times(1).returning(|| Ok(products()));

        let result = controller(mock).get_products().await.unwrap();

        assert_eq!(result.status_code(), StatusCode::OK);
        assert_eq!(result.into_model().map(|p| p.len()), Some(3));
    }

    #[tokio::test]
    async fn test_get_products_empty_store_is_still_ok() {
        let mut mock = MockRepository::<Product>::new();
        mock.expect_get_all().returning(|| Ok(Vec::new()));

        let result = controller(mock).get_products().await.unwrap();

        assert_eq!(result.status_code(), StatusCode::OK);
        assert_eq!(result.into_model(), Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_get_product_found_and_missing() {
        let mut mock = MockRepository::<Product>::new();
        mock.expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(product(id))));
        mock.expect_get_by_id().with(eq(99)).returning(|_| Ok(None));

        let controller = controller(mock);

        let found = controller.get_product(1).await.unwrap();
        assert_eq!(found.status_code(), StatusCode::OK);
        assert_eq!(found.model().map(|p| p.name.as_str()), Some("Kalem"));

        let missing = controller.get_product(99).await.unwrap();
        assert!(missing.is_not_found());
    }

    #[test]
    fn test_put_product_id_mismatch_is_bad_request() {
        let mut mock = MockRepository::<Product>::new();
        mock.expect_update().never();

        let result = controller(mock).put_product(3, product(1)).unwrap();

        assert!(result.is_bad_request());
    }

    #[test]
    fn test_put_product_updates_once() {
        let mut mock = MockRepository::<Product>::new();
        mock.expect_update()
            .withf(|p: &Product| p.id == 2)
            .times(1)
            .returning(|_| Ok(()));

        let result = controller(mock).put_product(2, product(2)).unwrap();

        assert_eq!(result.status_code(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_put_product_missing_entity_propagates() {
        let mut mock = MockRepository::<Product>::new();
        mock.expect_update()
            .returning(|p| Err(ProductError::NotFound(p.id)));

        let result = controller(mock).put_product(7, Product { id: 7, ..product(1) });

        assert!(matches!(result, Err(ProductError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_post_product_creates_and_returns_created() {
        let mut mock = MockRepository::<Product>::new();
        mock.expect_create()
            .withf(|p: &Product| p.id == 3)
            .times(1)
            .returning(|_| Ok(()));

        let result = controller(mock).post_product(product(3)).await.unwrap();

        assert_eq!(result.status_code(), StatusCode::CREATED);
        assert_eq!(result.model().map(|p| p.id), Some(3));
    }

    #[tokio::test]
    async fn test_delete_product() {
        let mut mock = MockRepository::<Product>::new();
        mock.expect_get_by_id()
            .with(eq(2))
            .returning(|id| Ok(Some(product(id))));
        mock.expect_get_by_id().with(eq(8)).returning(|_| Ok(None));
        mock.expect_delete()
            .withf(|p: &Product| p.id == 2)
            .times(1)
            .returning(|_| Ok(()));

        let controller = controller(mock);

        let deleted = controller.delete_product(2).await.unwrap();
        assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);

        let missing = controller.delete_product(8).await.unwrap();
        assert!(missing.is_not_found());
    }
}
