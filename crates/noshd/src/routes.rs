//! API routes for noshd

use crate::catalog::Catalog;
use crate::search;
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use nosh_common::{
    CitiesResponse, CreateOrderRequest, CuisinesResponse, FavoriteItem, FavoritesOutcome,
    HealthResponse, Menu, Order, PaymentRequest, PaymentResponse, Restaurant, SearchRequest,
    TrackingInfo, UserLocationResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

// ============================================================================
// Meta Routes
// ============================================================================

pub fn meta_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/v1/cuisines", get(get_cuisines))
        .route("/api/v1/cities", get(get_cities))
        .route("/api/v1/user/location", get(get_user_location))
}

#[derive(Debug, Serialize)]
struct RootInfo {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    endpoints: &'static [&'static str],
}

async fn root() -> Json<RootInfo> {
    Json(RootInfo {
        name: "Nosh Mock Ordering API",
        version: env!("CARGO_PKG_VERSION"),
        description: "Mock restaurant-ordering backend with intelligent search",
        endpoints: &[
            "/api/v1/restaurants/search",
            "/api/v1/restaurants/:id/menu",
            "/api/v1/search/intelligent",
            "/api/v1/orders/create",
        ],
    })
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        restaurants: state.catalog.restaurants().len(),
        cities: state.catalog.cities().len(),
    })
}

async fn get_cuisines() -> Json<CuisinesResponse> {
    let mut cuisines: Vec<String> =
        crate::catalog::CUISINES.iter().map(|c| c.to_string()).collect();
    cuisines.sort();
    Json(CuisinesResponse {
        count: cuisines.len(),
        cuisines,
        message: "Available cuisine types".to_string(),
        prompt: "Which cuisine are you in the mood for? Choose one from the list above."
            .to_string(),
    })
}

async fn get_cities(State(state): State<AppStateArc>) -> Json<CitiesResponse> {
    let mut cities = state.catalog.cities();
    cities.sort();
    Json(CitiesResponse {
        count: cities.len(),
        cities,
        message: "Available cities for food delivery".to_string(),
        prompt: "Which city are you in? Just type or click one of the options above.".to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct UserLocationParams {
    city: Option<String>,
}

async fn get_user_location(
    State(state): State<AppStateArc>,
    Query(params): Query<UserLocationParams>,
) -> Json<UserLocationResponse> {
    info!("  Resolving user location: {:?}", params.city);
    Json(resolve_user_location(&state.catalog, params.city.as_deref()))
}

/// Simulated geolocation: a known city resolves to the location of its
/// first catalog restaurant; anything else falls back to San Francisco.
fn resolve_user_location(catalog: &Catalog, city: Option<&str>) -> UserLocationResponse {
    if let Some(city) = city {
        if let Some(restaurant) = catalog.lookup(Some(city), None).first() {
            return UserLocationResponse {
                city: restaurant.location.city.clone(),
                state: restaurant.location.state.clone(),
                lat: restaurant.location.lat,
                lng: restaurant.location.lng,
                available: true,
                note: None,
            };
        }
    }
    UserLocationResponse {
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        lat: Some(37.7749),
        lng: Some(-122.4194),
        available: true,
        note: Some("Demo location - in production, would use actual geolocation".to_string()),
    }
}

// ============================================================================
// Restaurant Routes
// ============================================================================

pub fn restaurant_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/v1/restaurants/search", get(search_restaurants))
        .route("/api/v1/restaurants/:restaurant_id", get(get_restaurant))
        .route("/api/v1/restaurants/:restaurant_id/menu", get(get_menu))
}

#[derive(Debug, Deserialize)]
struct RestaurantSearchParams {
    city: Option<String>,
    cuisine: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
}

async fn search_restaurants(
    State(state): State<AppStateArc>,
    Query(params): Query<RestaurantSearchParams>,
) -> Json<Vec<Restaurant>> {
    info!(
        "  Searching restaurants: city={:?}, cuisine={:?}",
        params.city, params.cuisine
    );
    let city = params.city.as_deref();
    let cuisine = params.cuisine.as_deref();
    // Proximity ordering only when both coordinates are supplied
    let results = match (params.lat, params.lng) {
        (Some(lat), Some(lng)) => state.catalog.lookup_near(city, cuisine, lat, lng),
        _ => state.catalog.lookup(city, cuisine),
    };
    info!("  Found {} restaurants", results.len());
    Json(results)
}

async fn get_restaurant(
    State(state): State<AppStateArc>,
    Path(restaurant_id): Path<String>,
) -> Result<Json<Restaurant>, (StatusCode, String)> {
    state
        .catalog
        .restaurant_by_id(&restaurant_id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Restaurant not found".to_string()))
}

async fn get_menu(
    State(state): State<AppStateArc>,
    Path(restaurant_id): Path<String>,
) -> Result<Json<Menu>, (StatusCode, String)> {
    // Direct lookups validate the id; the search core never does
    if state.catalog.restaurant_by_id(&restaurant_id).is_none() {
        return Err((StatusCode::NOT_FOUND, "Restaurant not found".to_string()));
    }
    Ok(Json(state.catalog.menu_for(&restaurant_id)))
}

// ============================================================================
// Intelligent Search Route
// ============================================================================

pub fn search_routes() -> Router<AppStateArc> {
    Router::new().route("/api/v1/search/intelligent", post(intelligent_search))
}

async fn intelligent_search(
    State(state): State<AppStateArc>,
    Json(req): Json<SearchRequest>,
) -> Json<search::SearchOutcome> {
    info!("  Intelligent search: '{}'", req.query);
    let outcome = search::run_search(
        &state.catalog,
        &req.query,
        req.user_id.as_deref(),
        req.location.as_deref(),
    );
    info!(
        "  Returning {} restaurants, {} suggestions",
        outcome.restaurants.len(),
        outcome.suggested_items.len()
    );
    Json(outcome)
}

// ============================================================================
// Order Routes
// ============================================================================

pub fn order_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/v1/orders/create", post(create_order))
        .route("/api/v1/orders/:order_id", get(get_order))
        .route("/api/v1/orders/:order_id/track", get(track_order))
        .route("/api/v1/orders/:order_id/status", patch(update_order_status))
        .route("/api/v1/orders/:order_id/payment", post(process_payment))
}

async fn create_order(
    State(state): State<AppStateArc>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<Order>, (StatusCode, String)> {
    info!(
        "  Creating order: restaurant={}, items={}",
        req.restaurant_id,
        req.items.len()
    );

    let restaurant = state
        .catalog
        .restaurant_by_id(&req.restaurant_id)
        .cloned()
        .ok_or((StatusCode::NOT_FOUND, "Restaurant not found".to_string()))?;

    let mut ledger = state.ledger.write().await;
    let order = ledger.create(req, &restaurant);
    info!("  Order created: {}, total=${}", order.id, order.total);
    Ok(Json(order))
}

async fn get_order(
    State(state): State<AppStateArc>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, (StatusCode, String)> {
    let ledger = state.ledger.read().await;
    ledger
        .get(&order_id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Order not found".to_string()))
}

async fn track_order(
    State(state): State<AppStateArc>,
    Path(order_id): Path<String>,
) -> Result<Json<TrackingInfo>, (StatusCode, String)> {
    let mut ledger = state.ledger.write().await;
    ledger
        .track(&order_id)
        .map(Json)
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))
}

#[derive(Debug, Deserialize)]
struct StatusParams {
    status: String,
}

async fn update_order_status(
    State(state): State<AppStateArc>,
    Path(order_id): Path<String>,
    Query(params): Query<StatusParams>,
) -> Result<Json<Order>, (StatusCode, String)> {
    info!("  Updating order status: {} -> {}", order_id, params.status);
    let mut ledger = state.ledger.write().await;
    ledger.update_status(&order_id, &params.status).map(Json).map_err(|e| {
        use crate::ledger::LedgerError;
        match e {
            LedgerError::OrderNotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            LedgerError::InvalidStatus(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        }
    })
}

async fn process_payment(
    State(state): State<AppStateArc>,
    Path(order_id): Path<String>,
    Json(req): Json<PaymentRequest>,
) -> Result<Json<PaymentResponse>, (StatusCode, String)> {
    info!(
        "  Processing payment for order: {}, method={}",
        order_id, req.payment_method.kind
    );
    let mut ledger = state.ledger.write().await;
    ledger
        .process_payment(&order_id, req.payment_method)
        .map(Json)
        .map_err(|e| {
            error!("  Payment failed: {}", e);
            (StatusCode::NOT_FOUND, e.to_string())
        })
}

// ============================================================================
// Favorites Routes
// ============================================================================

pub fn favorites_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/v1/favorites/restaurants", get(get_favorite_restaurants))
        .route(
            "/api/v1/favorites/restaurants/:restaurant_id",
            post(add_favorite_restaurant).delete(remove_favorite_restaurant),
        )
        .route(
            "/api/v1/favorites/items",
            get(get_favorite_items)
                .post(add_favorite_item)
                .delete(remove_favorite_item),
        )
}

async fn get_favorite_restaurants(State(state): State<AppStateArc>) -> Json<Vec<Restaurant>> {
    let favorites = state.favorites.read().await;
    let results: Vec<Restaurant> = favorites
        .restaurant_ids()
        .iter()
        .filter_map(|id| state.catalog.restaurant_by_id(id).cloned())
        .collect();
    Json(results)
}

async fn add_favorite_restaurant(
    State(state): State<AppStateArc>,
    Path(restaurant_id): Path<String>,
) -> Result<Json<FavoritesOutcome>, (StatusCode, String)> {
    let restaurant = state
        .catalog
        .restaurant_by_id(&restaurant_id)
        .cloned()
        .ok_or((
            StatusCode::BAD_REQUEST,
            "Restaurant already in favorites or not found".to_string(),
        ))?;

    let mut favorites = state.favorites.write().await;
    favorites
        .add_restaurant(&restaurant_id)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Json(FavoritesOutcome {
        success: true,
        message: format!("Added {} to favorites", restaurant.name),
    }))
}

async fn remove_favorite_restaurant(
    State(state): State<AppStateArc>,
    Path(restaurant_id): Path<String>,
) -> Json<FavoritesOutcome> {
    let mut favorites = state.favorites.write().await;
    let removed = favorites.remove_restaurant(&restaurant_id);
    Json(FavoritesOutcome {
        success: removed,
        message: if removed {
            "Removed from favorites".to_string()
        } else {
            "Restaurant not in favorites".to_string()
        },
    })
}

#[derive(Debug, Serialize)]
struct FavoriteItemsResponse {
    favorites: Vec<FavoriteItem>,
}

async fn get_favorite_items(State(state): State<AppStateArc>) -> Json<FavoriteItemsResponse> {
    let favorites = state.favorites.read().await;
    Json(FavoriteItemsResponse {
        favorites: favorites.items().to_vec(),
    })
}

#[derive(Debug, Deserialize)]
struct FavoriteItemParams {
    restaurant_id: String,
    item_id: String,
    item_name: Option<String>,
}

async fn add_favorite_item(
    State(state): State<AppStateArc>,
    Query(params): Query<FavoriteItemParams>,
) -> Result<Json<FavoritesOutcome>, (StatusCode, String)> {
    let item_name = params.item_name.unwrap_or_default();
    let mut favorites = state.favorites.write().await;
    favorites
        .add_item(&params.restaurant_id, &params.item_id, &item_name)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    Ok(Json(FavoritesOutcome {
        success: true,
        message: format!("Added {} to favorites", item_name),
    }))
}

async fn remove_favorite_item(
    State(state): State<AppStateArc>,
    Query(params): Query<FavoriteItemParams>,
) -> Json<FavoritesOutcome> {
    let mut favorites = state.favorites.write().await;
    favorites.remove_item(&params.restaurant_id, &params.item_id);
    Json(FavoritesOutcome {
        success: true,
        message: "Removed from favorites".to_string(),
    })
}
