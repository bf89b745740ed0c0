//! Application state management

use domain_products::{InMemoryRepository, Product};
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::config::Config;

/// Shared state for the catalog app
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<InMemoryRepository<Product>>,
}

impl AppState {
    /// Builds the store, seeded with [`demo_products`] when configured.
    pub fn new(config: Config) -> Self {
        let store = if config.seed_demo_data {
            InMemoryRepository::with_entities(demo_products())
        } else {
            InMemoryRepository::new()
        };

        Self {
            config,
            store: Arc::new(store),
        }
    }
}

pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Kalem".to_string(),
            price: Some(Decimal::from(100)),
            stock: Some(250),
            color: "Mavi".to_string(),
        },
        Product {
            id: 2,
            name: "Çanta".to_string(),
            price: Some(Decimal::from(200)),
            stock: Some(180),
            color: "Bordo".to_string(),
        },
        Product {
            id: 3,
            name: "Silgi".to_string(),
            price: Some(Decimal::from(75)),
            stock: Some(140),
            color: "Siyah".to_string(),
        },
    ]
}
