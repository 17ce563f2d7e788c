//! In-memory favorites store
//!
//! Favorite restaurant ids plus favorite menu items, per the single demo
//! user. Duplicate adds are rejected; removal is always permitted.

use nosh_common::FavoriteItem;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum FavoritesError {
    #[error("Restaurant already in favorites or not found")]
    RestaurantNotAdded,

    #[error("Item already in favorites")]
    DuplicateItem,
}

#[derive(Default)]
pub struct Favorites {
    restaurant_ids: Vec<String>,
    items: Vec<FavoriteItem>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restaurant_ids(&self) -> &[String] {
        &self.restaurant_ids
    }

    /// Add a restaurant id. The caller is responsible for catalog
    /// validation; this rejects duplicates only.
    pub fn add_restaurant(&mut self, restaurant_id: &str) -> Result<(), FavoritesError> {
        if self.restaurant_ids.iter().any(|id| id == restaurant_id) {
            return Err(FavoritesError::RestaurantNotAdded);
        }
        self.restaurant_ids.push(restaurant_id.to_string());
        Ok(())
    }

    /// Remove a restaurant id. Removing an absent id is not an error.
    pub fn remove_restaurant(&mut self, restaurant_id: &str) -> bool {
        let before = self.restaurant_ids.len();
        self.restaurant_ids.retain(|id| id != restaurant_id);
        self.restaurant_ids.len() != before
    }

    pub fn items(&self) -> &[FavoriteItem] {
        &self.items
    }

    pub fn add_item(
        &mut self,
        restaurant_id: &str,
        item_id: &str,
        item_name: &str,
    ) -> Result<(), FavoritesError> {
        let exists = self
            .items
            .iter()
            .any(|f| f.restaurant_id == restaurant_id && f.item_id == item_id);
        if exists {
            return Err(FavoritesError::DuplicateItem);
        }
        self.items.push(FavoriteItem {
            restaurant_id: restaurant_id.to_string(),
            item_id: item_id.to_string(),
            item_name: item_name.to_string(),
        });
        Ok(())
    }

    pub fn remove_item(&mut self, restaurant_id: &str, item_id: &str) {
        self.items
            .retain(|f| !(f.restaurant_id == restaurant_id && f.item_id == item_id));
    }
}
