//! Natural-language query parser
//!
//! Maps a free-text query (plus an optional location hint) to a structured
//! [`ParsedIntent`]. Every extraction rule is an independent predicate over
//! the lowercased query; no rule ever fails, so the parser is total. Only
//! the derived intent kind is exclusive.

use crate::catalog::CUISINES;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Known dish phrases, scanned in order; the first match wins.
///
/// The order is part of the observable behavior (e.g. "tandoori chicken"
/// must be tried before "chicken" would ever be), so this is a fixed list,
/// not a set.
const DISHES: &[&str] = &[
    "tandoori chicken",
    "butter chicken",
    "biryani",
    "naan",
    "pizza",
    "pasta",
    "margherita",
    "pepperoni",
    "sushi",
    "ramen",
    "tempura",
    "tacos",
    "burrito",
    "quesadilla",
    "pad thai",
    "curry",
    "fried rice",
    "noodles",
];

/// When quick/fast/asap appears without an explicit time, assume this many
/// minutes.
const URGENT_DEFAULT_MINUTES: u32 = 20;

static PRICE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\d+)").unwrap());
static UNDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:under|below)\s+\$?(\d+)").unwrap());
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*(?:min|minute)").unwrap());

/// Derived query intent, exclusive by priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Search,
    Favorites,
    Urgent,
    Browse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryTag {
    Spicy,
    Vegetarian,
    Vegan,
    Healthy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
}

/// Structured result of parsing one query. Created fresh per request,
/// consumed by the relevance filter, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIntent {
    pub intent_kind: IntentKind,
    /// Cuisine tags matched verbatim in the query, in vocabulary order
    pub cuisines: Vec<String>,
    /// First matching dish phrase, title-cased
    pub dish: Option<String>,
    pub price_ceiling: Option<f64>,
    /// Minutes
    pub time_ceiling: Option<u32>,
    pub dietary_preferences: Vec<DietaryTag>,
    pub wants_favorites: bool,
    pub urgency: Option<Urgency>,
    /// Explicit parameter only; never mined from the free text
    pub location_hint: Option<String>,
}

/// Parse a free-text query into a [`ParsedIntent`]. Total and
/// case-insensitive; an empty query yields an all-unset intent of kind
/// [`IntentKind::Browse`].
pub fn parse_query(query: &str, location: Option<&str>) -> ParsedIntent {
    let q = query.to_lowercase();

    let cuisines: Vec<String> = CUISINES
        .iter()
        .filter(|c| q.contains(&c.to_lowercase()))
        .map(|c| c.to_string())
        .collect();

    let dish = DISHES
        .iter()
        .find(|d| q.contains(*d))
        .map(|d| title_case(d));

    // $N takes precedence over "under/below N"
    let price_ceiling = PRICE_RE
        .captures(&q)
        .or_else(|| UNDER_RE.captures(&q))
        .and_then(|caps| caps[1].parse::<f64>().ok());

    let time_ceiling = match TIME_RE.captures(&q) {
        Some(caps) => caps[1].parse::<u32>().ok(),
        None if q.contains("quick") || q.contains("fast") || q.contains("asap") => {
            Some(URGENT_DEFAULT_MINUTES)
        }
        None => None,
    };

    let mut dietary = Vec::new();
    if q.contains("spicy") || q.contains("hot") {
        dietary.push(DietaryTag::Spicy);
    }
    // "veg" also fires on "vegetarian" and "vegan"; a vegan query therefore
    // carries both tags
    if q.contains("vegetarian") || q.contains("veg") {
        dietary.push(DietaryTag::Vegetarian);
    }
    if q.contains("vegan") {
        dietary.push(DietaryTag::Vegan);
    }
    if q.contains("healthy") {
        dietary.push(DietaryTag::Healthy);
    }

    let wants_favorites =
        q.contains("favorite") || q.contains("usual") || q.contains("regular");

    let urgency = if q.contains("hungry") || q.contains("starving") {
        Some(Urgency::High)
    } else {
        None
    };

    let intent = if wants_favorites {
        IntentKind::Favorites
    } else if dish.is_some() || !cuisines.is_empty() {
        IntentKind::Search
    } else if urgency.is_some() {
        IntentKind::Urgent
    } else {
        IntentKind::Browse
    };

    ParsedIntent {
        intent_kind: intent,
        cuisines,
        dish,
        price_ceiling,
        time_ceiling,
        dietary_preferences: dietary,
        wants_favorites,
        urgency,
        location_hint: location.map(|s| s.to_string()),
    }
}

fn title_case(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuisine_matched_verbatim_case_insensitive() {
        let intent = parse_query("I want Italian food", None);
        assert_eq!(intent.cuisines, vec!["Italian"]);
        assert_eq!(intent.intent_kind, IntentKind::Search);
    }

    #[test]
    fn multiple_cuisines_collected_in_vocabulary_order() {
        let intent = parse_query("chinese or indian tonight?", None);
        assert_eq!(intent.cuisines, vec!["Indian", "Chinese"]);
    }

    #[test]
    fn first_dish_match_wins() {
        // "tandoori chicken" precedes "curry" in the vocabulary
        let intent = parse_query("tandoori chicken curry", None);
        assert_eq!(intent.dish.as_deref(), Some("Tandoori Chicken"));
    }

    #[test]
    fn dish_is_title_cased() {
        let intent = parse_query("craving pad thai", None);
        assert_eq!(intent.dish.as_deref(), Some("Pad Thai"));
    }

    #[test]
    fn dollar_pattern_sets_price_ceiling() {
        let intent = parse_query("tacos under $12", None);
        assert_eq!(intent.price_ceiling, Some(12.0));
    }

    #[test]
    fn under_without_dollar_sign_sets_price_ceiling() {
        let intent = parse_query("something under 15 bucks", None);
        assert_eq!(intent.price_ceiling, Some(15.0));
    }

    #[test]
    fn explicit_minutes_set_time_ceiling() {
        assert_eq!(parse_query("deliver in 15 minutes", None).time_ceiling, Some(15));
        assert_eq!(parse_query("30 min tops", None).time_ceiling, Some(30));
    }

    #[test]
    fn urgency_words_default_time_to_twenty() {
        let intent = parse_query("I'm starving, get me food fast", None);
        assert_eq!(intent.time_ceiling, Some(20));
        assert_eq!(intent.urgency, Some(Urgency::High));
        assert_eq!(intent.intent_kind, IntentKind::Urgent);
    }

    #[test]
    fn explicit_time_beats_urgency_default() {
        let intent = parse_query("quick, 10 minutes", None);
        assert_eq!(intent.time_ceiling, Some(10));
    }

    #[test]
    fn dietary_tags_are_independent() {
        let intent = parse_query("spicy vegetarian healthy options", None);
        assert_eq!(
            intent.dietary_preferences,
            vec![DietaryTag::Spicy, DietaryTag::Vegetarian, DietaryTag::Healthy]
        );
    }

    #[test]
    fn vegan_query_sets_both_tags() {
        // Pinned behavior: the "veg" substring fires on "vegan" too
        let intent = parse_query("vegan dinner", None);
        assert_eq!(intent.dietary_preferences, vec![DietaryTag::Vegetarian, DietaryTag::Vegan]);
    }

    #[test]
    fn favorites_keywords_win_kind_derivation() {
        let intent = parse_query("Order my usual", None);
        assert!(intent.wants_favorites);
        assert_eq!(intent.intent_kind, IntentKind::Favorites);
        assert!(intent.cuisines.is_empty());
        assert!(intent.dish.is_none());
    }

    #[test]
    fn favorites_beats_search_when_both_present() {
        let intent = parse_query("my favorite pizza place", None);
        assert_eq!(intent.intent_kind, IntentKind::Favorites);
        assert_eq!(intent.dish.as_deref(), Some("Pizza"));
    }

    #[test]
    fn empty_query_is_browse_with_nothing_set() {
        let intent = parse_query("", None);
        assert_eq!(intent.intent_kind, IntentKind::Browse);
        assert!(intent.cuisines.is_empty());
        assert!(intent.dish.is_none());
        assert!(intent.price_ceiling.is_none());
        assert!(intent.time_ceiling.is_none());
        assert!(intent.dietary_preferences.is_empty());
        assert!(!intent.wants_favorites);
        assert!(intent.urgency.is_none());
        assert!(intent.location_hint.is_none());
    }

    #[test]
    fn location_comes_from_parameter_not_text() {
        let intent = parse_query("pizza in San Francisco", Some("New York"));
        assert_eq!(intent.location_hint.as_deref(), Some("New York"));
    }

    #[test]
    fn scenario_tandoori_from_indian_restaurant() {
        let intent = parse_query(
            "I would like Tandoori Chicken from an Indian restaurant",
            Some("San Francisco"),
        );
        assert_eq!(intent.cuisines, vec!["Indian"]);
        assert_eq!(intent.dish.as_deref(), Some("Tandoori Chicken"));
        assert_eq!(intent.intent_kind, IntentKind::Search);
        assert_eq!(intent.location_hint.as_deref(), Some("San Francisco"));
    }
}
