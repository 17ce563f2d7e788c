//! Intelligent search: parser, relevance filter, and orchestration
//!
//! `run_search` composes the stages: parse the query, select the candidate
//! restaurant set from the catalog, narrow and order it, pick best-effort
//! menu suggestions for the top results, and assemble a human-readable
//! response. Every stage is total; an empty result set is a normal outcome
//! carrying alternative suggestions, never an error.

pub mod intent;
pub mod relevance;

use crate::catalog::Catalog;
use intent::{ParsedIntent, Urgency};
use nosh_common::{Restaurant, SuggestedItem};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Restaurants returned per response
const MAX_RESULTS: usize = 5;
/// Restaurants whose menus are scanned for suggestions
const SUGGESTION_RESTAURANTS: usize = 2;
/// Suggested items kept per restaurant
const SUGGESTIONS_PER_RESTAURANT: usize = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub parsed_query: ParsedIntent,
    pub restaurants: Vec<Restaurant>,
    pub suggested_items: Vec<SuggestedItem>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
}

/// Run the full search pipeline for one query.
pub fn run_search(
    catalog: &Catalog,
    query: &str,
    _user_id: Option<&str>,
    location: Option<&str>,
) -> SearchOutcome {
    let parsed = intent::parse_query(query, location);
    debug!("Parsed intent: {:?}", parsed);

    // Candidate set: city-restricted when a location is known, else everything
    let candidates = match parsed.location_hint.as_deref() {
        Some(city) => catalog.lookup(Some(city), None),
        None => catalog.restaurants().to_vec(),
    };
    info!(
        "Search candidates: {} (intent: {:?})",
        candidates.len(),
        parsed.intent_kind
    );

    let filtered = relevance::filter_restaurants(&parsed, &candidates);
    info!("Filtered to {} restaurants", filtered.len());

    let suggested_items = build_suggestions(catalog, &parsed, &filtered);

    if filtered.is_empty() {
        let alternatives = empty_result_alternatives(&parsed);
        return SearchOutcome {
            parsed_query: parsed,
            restaurants: Vec::new(),
            suggested_items: Vec::new(),
            message: "No restaurants match your criteria.".to_string(),
            alternatives,
        };
    }

    let message = success_message(&parsed, &filtered);
    let restaurants: Vec<Restaurant> = filtered.into_iter().take(MAX_RESULTS).collect();

    SearchOutcome {
        parsed_query: parsed,
        restaurants,
        suggested_items,
        message,
        alternatives: None,
    }
}

/// Best-effort suggestion pass over the top filtered restaurants.
///
/// Only runs when the intent carries a dish, a price ceiling, or a dietary
/// preference. Empty-handed menus degrade to no suggestions for that
/// restaurant; they never fail the search.
fn build_suggestions(
    catalog: &Catalog,
    parsed: &ParsedIntent,
    filtered: &[Restaurant],
) -> Vec<SuggestedItem> {
    if parsed.dish.is_none() && parsed.price_ceiling.is_none() && parsed.dietary_preferences.is_empty() {
        return Vec::new();
    }

    let mut suggestions = Vec::new();
    for restaurant in filtered.iter().take(SUGGESTION_RESTAURANTS) {
        let menu = catalog.menu_for(&restaurant.id);
        let items = relevance::filter_menu_items(parsed, &menu);
        if items.is_empty() {
            warn!(
                "No menu suggestions for {} despite constrained query",
                restaurant.id
            );
            continue;
        }
        for (category, item) in items.into_iter().take(SUGGESTIONS_PER_RESTAURANT) {
            suggestions.push(SuggestedItem {
                restaurant_id: restaurant.id.clone(),
                restaurant_name: restaurant.name.clone(),
                item_id: item.id,
                item_name: item.name,
                price: item.price,
                category,
                spicy: item.spicy,
                vegetarian: item.vegetarian,
            });
        }
    }
    suggestions
}

/// Alternatives offered when nothing matched, one per active constraint
fn empty_result_alternatives(parsed: &ParsedIntent) -> Option<Vec<String>> {
    let mut alternatives = Vec::new();
    if let Some(price) = parsed.price_ceiling {
        alternatives.push(format!("Try increasing your budget above ${}", price));
    }
    if let Some(time) = parsed.time_ceiling {
        alternatives.push(format!("Allow more than {} minutes for delivery", time));
    }
    if !parsed.cuisines.is_empty() {
        alternatives.push("Try a different cuisine".to_string());
    }
    if alternatives.is_empty() {
        None
    } else {
        Some(alternatives)
    }
}

/// Message priority: dish > cuisine list > urgency > generic, then ceiling
/// qualifiers.
fn success_message(parsed: &ParsedIntent, filtered: &[Restaurant]) -> String {
    let mut message = if let Some(dish) = &parsed.dish {
        format!("Found {} restaurants with {}", filtered.len(), dish)
    } else if !parsed.cuisines.is_empty() {
        format!(
            "Found {} {} restaurants",
            filtered.len(),
            parsed.cuisines.join(", ")
        )
    } else if parsed.urgency == Some(Urgency::High) {
        format!(
            "Found {} restaurants, fastest delivery in {}",
            filtered.len(),
            filtered[0].delivery_time
        )
    } else {
        format!("Found {} restaurants matching your criteria", filtered.len())
    };

    if let Some(time) = parsed.time_ceiling {
        message.push_str(&format!(" (delivery within {} minutes)", time));
    }
    if let Some(price) = parsed.price_ceiling {
        message.push_str(&format!(" (items under ${})", price));
    }
    message
}

pub use intent::parse_query;
pub use relevance::{filter_menu_items, filter_restaurants, max_delivery_minutes};
