use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::model_state::ModelState;
use crate::repository::Entity;

/// Product entity
///
/// `id` is assigned by the caller; nothing in this crate generates ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier
    pub id: i32,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Unit price, serialized as a decimal string
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Units on hand
    #[serde(default)]
    pub stock: Option<i32>,
    /// Free-form color label
    #[serde(default)]
    pub color: String,
}

impl Entity for Product {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Raw form submission from the page surface.
///
/// Every field arrives as text; [`ProductForm::bind`] converts it into a
/// [`Product`] and records conversion failures in a [`ModelState`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub color: Option<String>,
}

impl ProductForm {
    /// Binds the form into a product.
    ///
    /// Empty numeric fields bind to their default (`0` for `id`, `None` for
    /// `price` and `stock`). Unparseable ones do the same and add an error
    /// keyed by the field name.
    pub fn bind(self) -> (Product, ModelState) {
        let mut state = ModelState::new();

        let id = bind_value::<i32>(self.id, "Id", &mut state).unwrap_or_default();
        let price = bind_value::<Decimal>(self.price, "Price", &mut state);
        let stock = bind_value::<i32>(self.stock, "Stock", &mut state);

        let product = Product {
            id,
            name: self.name.unwrap_or_default(),
            price,
            stock,
            color: self.color.unwrap_or_default(),
        };

        (product, state)
    }
}

fn bind_value<V: FromStr>(raw: Option<String>, field: &str, state: &mut ModelState) -> Option<V> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<V>() {
        Ok(value) => Some(value),
        Err(_) => {
            state.add_model_error(
                field,
                format!("The value '{}' is not valid for {}.", trimmed, field),
            );
            None
        }
    }
}
