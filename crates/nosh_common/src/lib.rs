//! Nosh Common - Shared types and configuration for the nosh mock ordering API
//!
//! Wire-level data model (restaurants, menus, orders, search DTOs) and the
//! daemon configuration. No business logic lives here; the search core and
//! the stores are in `noshd`.

pub mod config;
pub mod model;

pub use config::*;
pub use model::*;
