//! Relevance filter over restaurants and menu items
//!
//! Pure functions: the candidate list is never mutated, a new ordering is
//! produced. Sorting is stable, so restaurants with equal keys keep their
//! catalog order.

use super::intent::{DietaryTag, ParsedIntent, Urgency};
use nosh_common::{Menu, MenuItem, Restaurant};
use once_cell::sync::Lazy;
use regex::Regex;

/// Categories scanned per menu
const MAX_CATEGORIES: usize = 5;
/// Items scanned per category
const MAX_ITEMS_PER_CATEGORY: usize = 10;
/// Items returned, and the re-cap applied after every filter step
const MAX_MENU_RESULTS: usize = 5;

/// Fallback when a delivery-time range cannot be parsed. Permissive enough
/// to survive loose ceilings, large enough that tight ceilings exclude it.
const UNPARSEABLE_DELIVERY_MINUTES: u32 = 60;

static RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)-(\d+)").unwrap());

/// Extract the maximum bound from a delivery-time range like "30-45 min".
pub fn max_delivery_minutes(delivery_time: &str) -> u32 {
    RANGE_RE
        .captures(delivery_time)
        .and_then(|caps| caps[2].parse::<u32>().ok())
        .unwrap_or(UNPARSEABLE_DELIVERY_MINUTES)
}

/// Narrow and order a candidate restaurant list per the parsed intent.
///
/// Cuisine membership first, then the delivery-time ceiling against the
/// maximum bound of each restaurant's range. High urgency sorts fastest
/// first; otherwise best-rated first. No cap is applied here - the caller
/// truncates for display.
pub fn filter_restaurants(intent: &ParsedIntent, candidates: &[Restaurant]) -> Vec<Restaurant> {
    let mut results: Vec<Restaurant> = candidates.to_vec();

    if !intent.cuisines.is_empty() {
        results.retain(|r| intent.cuisines.iter().any(|c| c == &r.cuisine));
    }

    if let Some(ceiling) = intent.time_ceiling {
        results.retain(|r| max_delivery_minutes(&r.delivery_time) <= ceiling);
    }

    match intent.urgency {
        Some(Urgency::High) => {
            results.sort_by_key(|r| max_delivery_minutes(&r.delivery_time));
        }
        None => {
            results.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
    }

    results
}

/// Pick up to five menu items matching the intent, tagged with their
/// category name.
///
/// Only the first five categories and the first ten items of each are ever
/// inspected - a deliberate scan-size cap. Each filter step re-truncates the
/// working set to five.
pub fn filter_menu_items(intent: &ParsedIntent, menu: &Menu) -> Vec<(String, MenuItem)> {
    let mut results: Vec<(String, MenuItem)> = menu
        .categories
        .iter()
        .take(MAX_CATEGORIES)
        .flat_map(|cat| {
            cat.items
                .iter()
                .take(MAX_ITEMS_PER_CATEGORY)
                .map(|item| (cat.name.clone(), item.clone()))
        })
        .collect();

    if let Some(dish) = &intent.dish {
        let dish_lower = dish.to_lowercase();
        results.retain(|(_, item)| item.name.to_lowercase().contains(&dish_lower));
        results.truncate(MAX_MENU_RESULTS);
    }

    if let Some(ceiling) = intent.price_ceiling {
        results.retain(|(_, item)| item.price <= ceiling);
        results.truncate(MAX_MENU_RESULTS);
    }

    if intent.dietary_preferences.contains(&DietaryTag::Spicy) {
        results.retain(|(_, item)| item.spicy);
        results.truncate(MAX_MENU_RESULTS);
    }

    if intent.dietary_preferences.contains(&DietaryTag::Vegetarian) {
        results.retain(|(_, item)| item.vegetarian);
        results.truncate(MAX_MENU_RESULTS);
    }

    results.truncate(MAX_MENU_RESULTS);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::intent::parse_query;
    use nosh_common::{Location, MenuCategory};

    fn restaurant(id: &str, cuisine: &str, rating: f64, delivery_time: &str) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: format!("Test {}", id),
            cuisine: cuisine.to_string(),
            location: Location {
                address: "1 Test St".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                zip: "94100".to_string(),
                lat: None,
                lng: None,
            },
            rating,
            price_range: "$$".to_string(),
            delivery_time: delivery_time.to_string(),
            minimum_order: 10.0,
            delivery_fee: 2.99,
            is_open: true,
            image_url: None,
        }
    }

    fn plain_item(id: &str, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            vegetarian: false,
            spicy: false,
            popular: false,
            image_url: None,
        }
    }

    #[test]
    fn delivery_time_max_bound_extracted() {
        assert_eq!(max_delivery_minutes("30-45 min"), 45);
        assert_eq!(max_delivery_minutes("15-25 min"), 25);
    }

    #[test]
    fn unparseable_delivery_time_defaults_to_sixty() {
        assert_eq!(max_delivery_minutes("about an hour"), 60);
        assert_eq!(max_delivery_minutes(""), 60);
    }

    #[test]
    fn cuisine_filter_keeps_only_members() {
        let candidates = vec![
            restaurant("a", "Indian", 4.5, "30-45 min"),
            restaurant("b", "Chinese", 4.3, "25-35 min"),
            restaurant("c", "Indian", 4.1, "15-25 min"),
        ];
        let intent = parse_query("indian", None);
        let results = filter_restaurants(&intent, &candidates);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.cuisine == "Indian"));
    }

    #[test]
    fn cuisine_filter_is_idempotent() {
        let candidates = vec![
            restaurant("a", "Indian", 4.5, "30-45 min"),
            restaurant("b", "Chinese", 4.3, "25-35 min"),
        ];
        let intent = parse_query("indian", None);
        let once = filter_restaurants(&intent, &candidates);
        let twice = filter_restaurants(&intent, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn time_ceiling_excludes_slow_restaurants() {
        let candidates = vec![
            restaurant("a", "Indian", 4.5, "30-45 min"),
            restaurant("b", "Indian", 4.3, "15-25 min"),
            restaurant("c", "Indian", 4.1, "unknown"),
        ];
        let intent = parse_query("indian in 25 minutes", None);
        let results = filter_restaurants(&intent, &candidates);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "b");
        assert!(results
            .iter()
            .all(|r| max_delivery_minutes(&r.delivery_time) <= 25));
    }

    #[test]
    fn default_sort_is_rating_descending_with_stable_ties() {
        let candidates = vec![
            restaurant("a", "Indian", 4.1, "30-45 min"),
            restaurant("b", "Chinese", 4.5, "25-35 min"),
            restaurant("c", "Thai", 4.5, "15-25 min"),
        ];
        let intent = parse_query("", None);
        let results = filter_restaurants(&intent, &candidates);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        // b and c tie on rating; catalog order breaks the tie
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn urgency_sorts_fastest_first() {
        let candidates = vec![
            restaurant("a", "Indian", 4.9, "30-45 min"),
            restaurant("b", "Chinese", 4.0, "15-25 min"),
        ];
        let intent = parse_query("I'm hungry", None);
        let results = filter_restaurants(&intent, &candidates);
        assert_eq!(results[0].id, "b");
    }

    fn big_menu() -> Menu {
        // 8 categories x 20 items; only 5 x 10 may ever be inspected
        Menu {
            categories: (0..8)
                .map(|c| MenuCategory {
                    name: format!("cat{}", c),
                    items: (0..20)
                        .map(|i| plain_item(&format!("item_{}_{}", c, i), "Filler Dish", 9.99))
                        .collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn menu_filter_never_returns_more_than_five() {
        let intent = parse_query("", None);
        let results = filter_menu_items(&intent, &big_menu());
        assert!(results.len() <= 5);
    }

    #[test]
    fn menu_scan_is_bounded_to_first_categories_and_items() {
        let mut menu = big_menu();
        // Plant a unique match beyond both bounds; it must never be found
        menu.categories[6].items[0] = plain_item("late_cat", "Pizza Speciale", 9.99);
        menu.categories[0].items[15] = plain_item("late_item", "Pizza Tardiva", 9.99);

        let intent = parse_query("pizza", None);
        let results = filter_menu_items(&intent, &menu);
        assert!(results
            .iter()
            .all(|(_, item)| item.id != "late_cat" && item.id != "late_item"));
    }

    #[test]
    fn dish_filter_matches_name_substring() {
        let menu = Menu {
            categories: vec![MenuCategory {
                name: "Pizza".to_string(),
                items: vec![
                    plain_item("p1", "Margherita Pizza", 14.99),
                    plain_item("s1", "Spaghetti Carbonara", 15.99),
                ],
            }],
        };
        let intent = parse_query("pizza", None);
        let results = filter_menu_items(&intent, &menu);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1.id, "p1");
        assert_eq!(results[0].0, "Pizza");
    }

    #[test]
    fn price_and_dietary_filters_compose() {
        let mut cheap_spicy = plain_item("ok", "Spicy Beans", 6.99);
        cheap_spicy.spicy = true;
        let mut pricey_spicy = plain_item("pricey", "Spicy Lamb", 18.99);
        pricey_spicy.spicy = true;
        let cheap_mild = plain_item("mild", "Plain Rice", 3.99);

        let menu = Menu {
            categories: vec![MenuCategory {
                name: "Mains".to_string(),
                items: vec![cheap_spicy, pricey_spicy, cheap_mild],
            }],
        };
        let intent = parse_query("something spicy under $10", None);
        let results = filter_menu_items(&intent, &menu);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1.id, "ok");
    }

    #[test]
    fn empty_menu_yields_empty_results() {
        let intent = parse_query("pizza under $10", None);
        assert!(filter_menu_items(&intent, &Menu::empty()).is_empty());
    }
}
