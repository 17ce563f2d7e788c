//! Wire data model for the nosh API
//!
//! Every type here crosses the HTTP boundary as JSON, so the field names are
//! the wire contract. Optional flags default to false/None on deserialization
//! so partial payloads stay valid.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog records
// ============================================================================

/// Street address with optional coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

/// A restaurant record. Immutable for the lifetime of the process,
/// owned exclusively by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub location: Location,
    /// 0.0 - 5.0
    pub rating: f64,
    /// Ordinal price tier, e.g. "$$"
    pub price_range: String,
    /// Textual range, e.g. "30-45 min"
    pub delivery_time: String,
    pub minimum_order: f64,
    pub delivery_fee: f64,
    pub is_open: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub spicy: bool,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Menu {
    pub categories: Vec<MenuCategory>,
}

impl Menu {
    /// The degenerate menu returned for unknown restaurant ids
    pub fn empty() -> Self {
        Self::default()
    }
}

// ============================================================================
// Orders
// ============================================================================

/// Order lifecycle states, in progression order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    ReadyForPickup,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::ReadyForPickup => "ready_for_pickup",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
        }
    }

    /// Parse the wire form, for the manual status-override endpoint
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "preparing" => Some(Self::Preparing),
            "ready_for_pickup" => Some(Self::ReadyForPickup),
            "out_for_delivery" => Some(Self::OutForDelivery),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub restaurant_id: String,
    pub restaurant_name: Option<String>,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub tax: f64,
    pub total: f64,
    pub delivery_address: Location,
    pub special_instructions: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub estimated_delivery: String,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub restaurant_id: String,
    pub items: Vec<OrderItem>,
    pub delivery_address: Location,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// credit_card, debit_card, paypal, apple_pay
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub last_four: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub success: bool,
    pub transaction_id: Option<String>,
    pub message: String,
}

/// Live tracking snapshot derived from elapsed wall-clock time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingInfo {
    pub order_id: String,
    pub status: OrderStatus,
    pub status_message: String,
    pub estimated_delivery: String,
    pub minutes_remaining: u32,
    pub restaurant: String,
    pub total: f64,
    pub items_count: usize,
    pub delivery_address: String,
    pub created_at: DateTime<Utc>,
    pub elapsed_minutes: i64,
}

// ============================================================================
// Favorites
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub restaurant_id: String,
    pub item_id: String,
    pub item_name: String,
}

/// Outcome envelope for favorites mutations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesOutcome {
    pub success: bool,
    pub message: String,
}

// ============================================================================
// Intelligent search DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Natural language query, e.g. "spicy food in 15 minutes under $10"
    pub query: String,
    /// Optional user id for personalization
    #[serde(default)]
    pub user_id: Option<String>,
    /// Optional user city
    #[serde(default)]
    pub location: Option<String>,
}

/// A single menu item surfaced alongside a restaurant result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedItem {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub item_id: String,
    pub item_name: String,
    pub price: f64,
    pub category: String,
    pub spicy: bool,
    pub vegetarian: bool,
}

// ============================================================================
// Meta endpoints
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub restaurants: usize,
    pub cities: usize,
}

/// Simulated geolocation result. Real deployments would resolve the user's
/// position; the demo answers from the catalog or a fixed default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLocationResponse {
    pub city: String,
    pub state: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuisinesResponse {
    pub cuisines: Vec<String>,
    pub count: usize,
    pub message: String,
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitiesResponse {
    pub cities: Vec<String>,
    pub count: usize,
    pub message: String,
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_round_trips_wire_form() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::ReadyForPickup,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
        ] {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("en_route"), None);
    }

    #[test]
    fn order_item_quantity_defaults_to_one() {
        let item: OrderItem =
            serde_json::from_str(r#"{"item_id":"item_001","name":"Samosa","price":5.99}"#)
                .unwrap();
        assert_eq!(item.quantity, 1);
        assert!(item.special_instructions.is_none());
    }

    #[test]
    fn menu_item_flags_default_false() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id":"item_001","name":"Samosa","description":"Crispy pastry","price":5.99}"#,
        )
        .unwrap();
        assert!(!item.vegetarian);
        assert!(!item.spicy);
        assert!(!item.popular);
    }
}
