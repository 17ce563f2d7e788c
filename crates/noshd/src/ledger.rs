//! In-memory order ledger
//!
//! Create/read/update over a HashMap of orders, plus the simulated payment
//! and the demo-mode tracking progression. Held behind a `tokio::sync::RwLock`
//! in the shared app state; wiped on restart by design.

use chrono::{Duration, Utc};
use nosh_common::{
    CreateOrderRequest, Order, OrderSettings, OrderStatus, PaymentMethod, PaymentResponse,
    PaymentStatus, Restaurant, TrackingInfo,
};
use rand::Rng;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    #[error("Order '{0}' not found")]
    OrderNotFound(String),

    #[error("Invalid order status '{0}'")]
    InvalidStatus(String),
}

/// Demo-mode tracking stages: status derived from elapsed minutes since
/// order creation, six 2-minute stages for a 12-minute end-to-end demo.
/// (upper elapsed bound, status, message, ETA minutes)
const TRACKING_STAGES: &[(i64, OrderStatus, &str, u32)] = &[
    (2, OrderStatus::Pending, "Order received! Waiting for restaurant confirmation.", 12),
    (4, OrderStatus::Confirmed, "Restaurant confirmed your order!", 10),
    (6, OrderStatus::Preparing, "Your food is being prepared!", 8),
    (8, OrderStatus::ReadyForPickup, "Order is ready! Waiting for delivery driver.", 6),
    (10, OrderStatus::OutForDelivery, "On the way to you!", 4),
    (12, OrderStatus::OutForDelivery, "Almost there! Driver is nearby!", 2),
];

const DELIVERED_MESSAGE: &str = "Delivered! Enjoy your meal!";

#[derive(Default)]
pub struct OrderLedger {
    orders: HashMap<String, Order>,
    created: usize,
    settings: OrderSettings,
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: OrderSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Create a new order. The restaurant record supplies the display name
    /// and delivery fee; totals are computed here and rounded to cents.
    pub fn create(&mut self, req: CreateOrderRequest, restaurant: &Restaurant) -> Order {
        self.created += 1;
        let id = format!("order_{:04}", self.created);

        let subtotal: f64 = req
            .items
            .iter()
            .map(|item| item.price * item.quantity as f64)
            .sum();
        let subtotal = round_cents(subtotal);
        let tax = round_cents(subtotal * self.settings.tax_rate);
        let delivery_fee = restaurant.delivery_fee;
        let total = round_cents(subtotal + delivery_fee + tax);

        let created_at = Utc::now();
        let eta_minutes = rand::thread_rng().gen_range(self.settings.eta_window()) as i64;
        let estimated_delivery = (created_at + Duration::minutes(eta_minutes)).to_rfc3339();

        let order = Order {
            id: id.clone(),
            restaurant_id: req.restaurant_id,
            restaurant_name: Some(restaurant.name.clone()),
            items: req.items,
            subtotal,
            delivery_fee,
            tax,
            total,
            delivery_address: req.delivery_address,
            special_instructions: req.special_instructions,
            status: OrderStatus::Pending,
            created_at,
            estimated_delivery,
            payment_status: PaymentStatus::Pending,
        };

        self.orders.insert(id, order.clone());
        order
    }

    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(order_id)
    }

    /// Manual status override (simulation endpoint)
    pub fn update_status(&mut self, order_id: &str, status: &str) -> Result<Order, LedgerError> {
        let status =
            OrderStatus::parse(status).ok_or_else(|| LedgerError::InvalidStatus(status.into()))?;
        let order = self
            .orders
            .get_mut(order_id)
            .ok_or_else(|| LedgerError::OrderNotFound(order_id.into()))?;
        order.status = status;
        Ok(order.clone())
    }

    /// Always-succeeds payment simulation: marks the payment completed and
    /// the order confirmed.
    pub fn process_payment(
        &mut self,
        order_id: &str,
        _method: PaymentMethod,
    ) -> Result<PaymentResponse, LedgerError> {
        let order = self
            .orders
            .get_mut(order_id)
            .ok_or_else(|| LedgerError::OrderNotFound(order_id.into()))?;

        order.payment_status = PaymentStatus::Completed;
        order.status = OrderStatus::Confirmed;

        let txn: u32 = rand::thread_rng().gen_range(100_000..=999_999);
        Ok(PaymentResponse {
            success: true,
            transaction_id: Some(format!("txn_{}", txn)),
            message: "Payment processed successfully".to_string(),
        })
    }

    /// Derive the tracking snapshot from elapsed wall-clock time and persist
    /// the derived status on the order.
    pub fn track(&mut self, order_id: &str) -> Result<TrackingInfo, LedgerError> {
        let order = self
            .orders
            .get_mut(order_id)
            .ok_or_else(|| LedgerError::OrderNotFound(order_id.into()))?;

        let elapsed_minutes = (Utc::now() - order.created_at).num_minutes();

        let (status, status_message, eta_minutes) = TRACKING_STAGES
            .iter()
            .find(|(bound, _, _, _)| elapsed_minutes < *bound)
            .map(|(_, status, message, eta)| (*status, *message, *eta))
            .unwrap_or((OrderStatus::Delivered, DELIVERED_MESSAGE, 0));

        order.status = status;

        let estimated_delivery = if eta_minutes > 0 {
            (Utc::now() + Duration::minutes(eta_minutes as i64))
                .format("%I:%M %p")
                .to_string()
        } else {
            "Delivered".to_string()
        };

        Ok(TrackingInfo {
            order_id: order.id.clone(),
            status,
            status_message: status_message.to_string(),
            estimated_delivery,
            minutes_remaining: eta_minutes,
            restaurant: order
                .restaurant_name
                .clone()
                .unwrap_or_else(|| "Restaurant".to_string()),
            total: order.total,
            items_count: order.items.len(),
            delivery_address: order.delivery_address.address.clone(),
            created_at: order.created_at,
            elapsed_minutes,
        })
    }
}
