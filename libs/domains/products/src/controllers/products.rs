use std::sync::Arc;
use tracing::{debug, instrument};

use super::action;
use crate::error::ProductResult;
use crate::model_state::ModelState;
use crate::models::Product;
use crate::repository::Repository;
use crate::results::ActionResult;

/// Page flow for products: list, details, create, edit and delete.
pub struct ProductsController<R> {
    repository: Arc<R>,
}

impl<R> Clone for ProductsController<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Repository<Product>> ProductsController<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Builds a controller over a repository already shared elsewhere.
    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn index(&self) -> ProductResult<ActionResult<Vec<Product>>> {
        let products = self.repository.get_all().await?;
        debug!(count = products.len(), "listing products");
        Ok(ActionResult::view(action::INDEX, products))
    }

    #[instrument(skip(self))]
    pub async fn details(&self, id: Option<i32>) -> ProductResult<ActionResult<Product>> {
        self.show(action::DETAILS, id).await
    }

    /// Empty form for a new product.
    pub fn create(&self) -> ActionResult<Product> {
        ActionResult::view(action::CREATE, Product::default())
    }

    #[instrument(skip(self, product, model_state), fields(product_id = product.id))]
    pub async fn create_post(
        &self,
        product: Product,
        model_state: &ModelState,
    ) -> ProductResult<ActionResult<Product>> {
        if !model_state.is_valid() {
            debug!(errors = model_state.error_count(), "rejecting invalid product");
            return Ok(ActionResult::view(action::CREATE, product));
        }

        self.repository.create(product).await?;
        Ok(ActionResult::redirect_to_action(action::INDEX))
    }

    #[instrument(skip(self))]
    pub async fn edit(&self, id: Option<i32>) -> ProductResult<ActionResult<Product>> {
        self.show(action::EDIT, id).await
    }

    /// A route id that disagrees with the submitted product is treated as
    /// not found, whatever the model state says.
    #[instrument(skip(self, product, model_state), fields(product_id = product.id))]
    pub fn edit_post(
        &self,
        id: i32,
        product: Product,
        model_state: &ModelState,
    ) -> ProductResult<ActionResult<Product>> {
        if id != product.id {
            debug!(route_id = id, "route id does not match product");
            return Ok(ActionResult::not_found());
        }

        if !model_state.is_valid() {
            debug!(errors = model_state.error_count(), "rejecting invalid product");
            return Ok(ActionResult::view(action::EDIT, product));
        }

        self.repository.update(product)?;
        Ok(ActionResult::redirect_to_action(action::INDEX))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Option<i32>) -> ProductResult<ActionResult<Product>> {
        self.show(action::DELETE, id).await
    }

    /// Removes the product if it still exists. Always returns to the list.
    #[instrument(skip(self))]
    pub async fn delete_confirmed(&self, id: i32) -> ProductResult<ActionResult<Product>> {
        if let Some(product) = self.repository.get_by_id(id).await? {
            self.repository.delete(product)?;
        }
        Ok(ActionResult::redirect_to_action(action::INDEX))
    }

    async fn show(
        &self,
        view: &'static str,
        id: Option<i32>,
    ) -> ProductResult<ActionResult<Product>> {
        let Some(id) = id else {
            return Ok(ActionResult::redirect_to_action(action::INDEX));
        };

        match self.repository.get_by_id(id).await? {
            Some(product) => Ok(ActionResult::view(view, product)),
            None => Ok(ActionResult::not_found()),
        }
    }
}
