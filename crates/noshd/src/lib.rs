//! Nosh daemon - mock restaurant-ordering backend with intelligent search
//!
//! The interesting part is the search core under [`search`]: a deterministic
//! natural-language intent parser plus a relevance filter over the injected
//! read-only [`catalog::Catalog`]. The rest is bookkeeping: an in-memory
//! order ledger, a favorites store, and the axum transport layer.

pub mod catalog;
pub mod favorites;
pub mod ledger;
pub mod routes;
pub mod search;
pub mod server;
