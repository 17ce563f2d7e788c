//! Golden tests for the deterministic query parser.
//!
//! Verifies that known query classes parse to the expected intent kind and
//! that every extraction rule fires independently of the others.

use noshd::search::intent::{parse_query, DietaryTag, IntentKind, Urgency};

/// Golden corpus: query text and the intent kind it must classify to
const GOLDEN_KINDS: &[(&str, IntentKind)] = &[
    // Favorites beats everything
    ("order my usual", IntentKind::Favorites),
    ("my regular order please", IntentKind::Favorites),
    ("show my favorite restaurants", IntentKind::Favorites),
    ("my favorite pizza", IntentKind::Favorites),
    // Dish or cuisine => search
    ("I want Italian food", IntentKind::Search),
    ("tandoori chicken from an indian place", IntentKind::Search),
    ("sushi tonight", IntentKind::Search),
    ("best ramen in town", IntentKind::Search),
    // Urgency without dish/cuisine => urgent
    ("I'm hungry", IntentKind::Urgent),
    ("starving, anything works", IntentKind::Urgent),
    // Nothing recognized => browse
    ("", IntentKind::Browse),
    ("show me some options", IntentKind::Browse),
    ("what can I get delivered", IntentKind::Browse),
    // Urgency words plus a cuisine still classify as search
    ("I'm starving, get me Chinese", IntentKind::Search),
];

#[test]
fn golden_intent_kinds() {
    for (query, expected) in GOLDEN_KINDS {
        let parsed = parse_query(query, None);
        assert_eq!(
            parsed.intent_kind, *expected,
            "query {:?} classified as {:?}, expected {:?}",
            query, parsed.intent_kind, expected
        );
    }
}

#[test]
fn overlapping_keywords_set_all_fields() {
    let parsed = parse_query(
        "I'm starving, spicy chicken biryani from an Indian place under $20 in 30 minutes",
        None,
    );
    assert_eq!(parsed.intent_kind, IntentKind::Search);
    assert_eq!(parsed.cuisines, vec!["Indian"]);
    assert_eq!(parsed.dish.as_deref(), Some("Biryani"));
    assert_eq!(parsed.price_ceiling, Some(20.0));
    assert_eq!(parsed.time_ceiling, Some(30));
    assert_eq!(parsed.dietary_preferences, vec![DietaryTag::Spicy]);
    assert_eq!(parsed.urgency, Some(Urgency::High));
    assert!(!parsed.wants_favorites);
}

#[test]
fn price_patterns() {
    assert_eq!(parse_query("tacos under $12", None).price_ceiling, Some(12.0));
    assert_eq!(parse_query("pizza for $8", None).price_ceiling, Some(8.0));
    assert_eq!(parse_query("below 25 dollars", None).price_ceiling, Some(25.0));
    assert_eq!(parse_query("cheap eats", None).price_ceiling, None);
    // Digits only; decimals are not recognized beyond the integer part
    assert_eq!(parse_query("under $9.50", None).price_ceiling, Some(9.0));
}

#[test]
fn time_patterns() {
    assert_eq!(parse_query("deliver in 15 minutes", None).time_ceiling, Some(15));
    assert_eq!(parse_query("45 min is fine", None).time_ceiling, Some(45));
    assert_eq!(parse_query("need it asap", None).time_ceiling, Some(20));
    assert_eq!(parse_query("something quick", None).time_ceiling, Some(20));
    assert_eq!(parse_query("no rush at all", None).time_ceiling, None);
}

#[test]
fn dietary_rules_fire_independently() {
    assert_eq!(parse_query("hot wings", None).dietary_preferences, vec![DietaryTag::Spicy]);
    assert_eq!(
        parse_query("veg options", None).dietary_preferences,
        vec![DietaryTag::Vegetarian]
    );
    assert_eq!(
        parse_query("vegan dinner", None).dietary_preferences,
        vec![DietaryTag::Vegetarian, DietaryTag::Vegan]
    );
    assert_eq!(
        parse_query("healthy bowls", None).dietary_preferences,
        vec![DietaryTag::Healthy]
    );
    assert!(parse_query("a large pizza", None).dietary_preferences.is_empty());
}
