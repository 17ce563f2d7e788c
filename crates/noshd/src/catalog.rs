//! Read-only restaurant/menu catalog
//!
//! Constructed once at startup and shared behind an `Arc`; nothing here
//! mutates after construction, so concurrent readers need no locking.
//! Tests inject synthetic catalogs through [`Catalog::new`].

use nosh_common::{Location, Menu, MenuCategory, MenuItem, Restaurant};
use std::collections::HashMap;

/// Canonical cuisine vocabulary, in a fixed scan order.
///
/// The query parser iterates this slice in order, so the order is part of
/// the observable behavior and must stay stable.
pub const CUISINES: &[&str] = &[
    "Indian",
    "Chinese",
    "Italian",
    "Japanese",
    "Mexican",
    "Mediterranean",
    "Thai",
    "Korean",
];

pub struct Catalog {
    restaurants: Vec<Restaurant>,
    menus: HashMap<String, Menu>,
}

impl Catalog {
    pub fn new(restaurants: Vec<Restaurant>, menus: HashMap<String, Menu>) -> Self {
        Self { restaurants, menus }
    }

    /// All restaurants in catalog order
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Filter by city and/or cuisine, both case-insensitive and optional
    pub fn lookup(&self, city: Option<&str>, cuisine: Option<&str>) -> Vec<Restaurant> {
        self.restaurants
            .iter()
            .filter(|r| match city {
                Some(c) => r.location.city.eq_ignore_ascii_case(c),
                None => true,
            })
            .filter(|r| match cuisine {
                Some(c) => r.cuisine.eq_ignore_ascii_case(c),
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Like [`Catalog::lookup`], then ordered by Manhattan distance to the
    /// given point. Demo-grade proximity, not geodesic; restaurants without
    /// coordinates sort last.
    pub fn lookup_near(
        &self,
        city: Option<&str>,
        cuisine: Option<&str>,
        lat: f64,
        lng: f64,
    ) -> Vec<Restaurant> {
        let mut results = self.lookup(city, cuisine);
        results.sort_by(|a, b| {
            manhattan_distance(a, lat, lng)
                .partial_cmp(&manhattan_distance(b, lat, lng))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results
    }

    pub fn restaurant_by_id(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Menu for a restaurant. Unknown ids yield an empty-categories menu,
    /// never an error.
    pub fn menu_for(&self, restaurant_id: &str) -> Menu {
        self.menus
            .get(restaurant_id)
            .cloned()
            .unwrap_or_else(Menu::empty)
    }

    /// Distinct cities in catalog order
    pub fn cities(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for r in &self.restaurants {
            if !seen.iter().any(|c| c == &r.location.city) {
                seen.push(r.location.city.clone());
            }
        }
        seen
    }

    /// The built-in demo catalog
    pub fn builtin() -> Self {
        let restaurants = builtin_restaurants();
        let menus = builtin_menus();
        Self::new(restaurants, menus)
    }
}

const MISSING_COORDS_DISTANCE: f64 = 999.0;

fn manhattan_distance(restaurant: &Restaurant, lat: f64, lng: f64) -> f64 {
    match (restaurant.location.lat, restaurant.location.lng) {
        (Some(rlat), Some(rlng)) => (rlat - lat).abs() + (rlng - lng).abs(),
        _ => MISSING_COORDS_DISTANCE,
    }
}

// ============================================================================
// Built-in demo data
// ============================================================================

fn restaurant(
    id: &str,
    name: &str,
    cuisine: &str,
    address: &str,
    city: &str,
    state: &str,
    zip: &str,
    coords: (f64, f64),
    rating: f64,
    price_range: &str,
    delivery_time: &str,
    minimum_order: f64,
    delivery_fee: f64,
) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        location: Location {
            address: address.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
            lat: Some(coords.0),
            lng: Some(coords.1),
        },
        rating,
        price_range: price_range.to_string(),
        delivery_time: delivery_time.to_string(),
        minimum_order,
        delivery_fee,
        is_open: true,
        image_url: None,
    }
}

fn item(id: &str, name: &str, description: &str, price: f64) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        vegetarian: false,
        spicy: false,
        popular: false,
        image_url: None,
    }
}

fn veg(mut i: MenuItem) -> MenuItem {
    i.vegetarian = true;
    i
}

fn spicy(mut i: MenuItem) -> MenuItem {
    i.spicy = true;
    i
}

fn popular(mut i: MenuItem) -> MenuItem {
    i.popular = true;
    i
}

fn category(name: &str, items: Vec<MenuItem>) -> MenuCategory {
    MenuCategory {
        name: name.to_string(),
        items,
    }
}

fn builtin_restaurants() -> Vec<Restaurant> {
    vec![
        restaurant(
            "rest_001",
            "Taj Palace Indian Cuisine",
            "Indian",
            "123 Market St, San Francisco, CA 94103",
            "San Francisco",
            "CA",
            "94103",
            (37.7749, -122.4194),
            4.5,
            "$$",
            "30-45 min",
            15.00,
            3.99,
        ),
        restaurant(
            "rest_002",
            "Golden Dragon Chinese",
            "Chinese",
            "456 Mission St, San Francisco, CA 94105",
            "San Francisco",
            "CA",
            "94105",
            (37.7899, -122.3965),
            4.3,
            "$$",
            "25-35 min",
            20.00,
            2.99,
        ),
        restaurant(
            "rest_003",
            "Mama Mia Italian Kitchen",
            "Italian",
            "789 Columbus Ave, San Francisco, CA 94133",
            "San Francisco",
            "CA",
            "94133",
            (37.8024, -122.4058),
            4.7,
            "$$$",
            "25-40 min",
            25.00,
            4.99,
        ),
        restaurant(
            "rest_004",
            "Tokyo Sushi Bar",
            "Japanese",
            "321 Geary St, San Francisco, CA 94102",
            "San Francisco",
            "CA",
            "94102",
            (37.7871, -122.4108),
            4.6,
            "$$$",
            "30-45 min",
            30.00,
            5.99,
        ),
        restaurant(
            "rest_005",
            "El Mariachi Mexican Grill",
            "Mexican",
            "555 Valencia St, San Francisco, CA 94110",
            "San Francisco",
            "CA",
            "94110",
            (37.7625, -122.4216),
            4.4,
            "$$",
            "20-30 min",
            15.00,
            2.99,
        ),
        restaurant(
            "rest_006",
            "Mediterranean Delight",
            "Mediterranean",
            "888 Polk St, San Francisco, CA 94109",
            "San Francisco",
            "CA",
            "94109",
            (37.7913, -122.4199),
            4.2,
            "$$",
            "25-40 min",
            18.00,
            3.49,
        ),
        restaurant(
            "rest_007",
            "Bangkok Street Thai",
            "Thai",
            "210 Smith St, New York, NY 10002",
            "New York",
            "NY",
            "10002",
            (40.7155, -73.9870),
            4.5,
            "$$",
            "20-35 min",
            15.00,
            2.49,
        ),
        restaurant(
            "rest_008",
            "Curry Leaf Express",
            "Indian",
            "77 Lexington Ave, New York, NY 10010",
            "New York",
            "NY",
            "10010",
            (40.7406, -73.9840),
            4.1,
            "$",
            "15-25 min",
            10.00,
            1.99,
        ),
        restaurant(
            "rest_009",
            "Trattoria Roma",
            "Italian",
            "350 Mulberry St, New York, NY 10012",
            "New York",
            "NY",
            "10012",
            (40.7243, -73.9957),
            4.8,
            "$$$",
            "35-50 min",
            30.00,
            5.49,
        ),
        restaurant(
            "rest_010",
            "Seoul Kitchen",
            "Korean",
            "642 Wilshire Blvd, Los Angeles, CA 90017",
            "Los Angeles",
            "CA",
            "90017",
            (34.0488, -118.2591),
            4.4,
            "$$",
            "25-40 min",
            20.00,
            3.99,
        ),
        restaurant(
            "rest_011",
            "Taqueria del Sol",
            "Mexican",
            "1200 Sunset Blvd, Los Angeles, CA 90026",
            "Los Angeles",
            "CA",
            "90026",
            (34.0775, -118.2531),
            4.6,
            "$",
            "15-25 min",
            12.00,
            1.49,
        ),
        restaurant(
            "rest_012",
            "Spice Garden",
            "Indian",
            "45 MG Road, Bangalore, KA 560001",
            "Bangalore",
            "KA",
            "560001",
            (12.9757, 77.6050),
            4.3,
            "$$",
            "30-45 min",
            12.00,
            1.99,
        ),
    ]
}

fn builtin_menus() -> HashMap<String, Menu> {
    let mut menus = HashMap::new();

    menus.insert(
        "rest_001".to_string(),
        Menu {
            categories: vec![
                category(
                    "Appetizers",
                    vec![
                        spicy(veg(item(
                            "item_001",
                            "Samosa (2 pieces)",
                            "Crispy pastry filled with spiced potatoes and peas",
                            5.99,
                        ))),
                        spicy(item(
                            "item_002",
                            "Chicken Tikka",
                            "Marinated chicken pieces grilled in tandoor",
                            9.99,
                        )),
                    ],
                ),
                category(
                    "Main Course",
                    vec![
                        popular(veg(item(
                            "item_003",
                            "Paneer Butter Masala",
                            "Cottage cheese in rich tomato cream sauce",
                            14.99,
                        ))),
                        popular(spicy(item(
                            "item_004",
                            "Chicken Tikka Masala",
                            "Grilled chicken in creamy tomato sauce",
                            16.99,
                        ))),
                        spicy(item(
                            "item_005",
                            "Tandoori Chicken (Half)",
                            "Chicken marinated in yogurt and spices, clay-oven roasted",
                            15.99,
                        )),
                    ],
                ),
                category(
                    "Breads",
                    vec![
                        popular(veg(item(
                            "item_006",
                            "Garlic Naan",
                            "Leavened bread with garlic and butter",
                            3.99,
                        ))),
                        veg(item(
                            "item_007",
                            "Butter Naan",
                            "Classic leavened bread with butter",
                            2.99,
                        )),
                    ],
                ),
                category(
                    "Rice & Biryani",
                    vec![
                        spicy(veg(item(
                            "item_008",
                            "Vegetable Biryani",
                            "Aromatic basmati rice with mixed vegetables",
                            13.99,
                        ))),
                        popular(spicy(item(
                            "item_009",
                            "Chicken Biryani",
                            "Fragrant rice with tender chicken pieces",
                            15.99,
                        ))),
                    ],
                ),
            ],
        },
    );

    menus.insert(
        "rest_002".to_string(),
        Menu {
            categories: vec![
                category(
                    "Appetizers",
                    vec![
                        veg(item(
                            "item_101",
                            "Spring Rolls (4 pieces)",
                            "Crispy vegetable spring rolls",
                            6.99,
                        )),
                        item(
                            "item_102",
                            "Chicken Dumplings (6 pieces)",
                            "Steamed chicken dumplings",
                            8.99,
                        ),
                    ],
                ),
                category(
                    "Entrees",
                    vec![
                        popular(spicy(item(
                            "item_103",
                            "Kung Pao Chicken",
                            "Diced chicken with peanuts and dried chilies",
                            13.99,
                        ))),
                        spicy(veg(item(
                            "item_104",
                            "Mapo Tofu",
                            "Silken tofu in fiery Sichuan sauce",
                            11.99,
                        ))),
                        item(
                            "item_105",
                            "Sweet and Sour Pork",
                            "Crispy pork with pineapple and peppers",
                            12.99,
                        ),
                    ],
                ),
                category(
                    "Rice & Noodles",
                    vec![
                        veg(item(
                            "item_106",
                            "Vegetable Fried Rice",
                            "Wok-fried rice with seasonal vegetables",
                            9.99,
                        )),
                        popular(item(
                            "item_107",
                            "Beef Chow Fun Noodles",
                            "Wide rice noodles with tender beef",
                            12.99,
                        )),
                    ],
                ),
            ],
        },
    );

    menus.insert(
        "rest_003".to_string(),
        Menu {
            categories: vec![
                category(
                    "Antipasti",
                    vec![
                        veg(item(
                            "item_201",
                            "Bruschetta al Pomodoro",
                            "Grilled bread with tomatoes, garlic and basil",
                            7.99,
                        )),
                        item(
                            "item_202",
                            "Prosciutto e Melone",
                            "Cured ham with fresh cantaloupe",
                            11.99,
                        ),
                    ],
                ),
                category(
                    "Pizza",
                    vec![
                        popular(veg(item(
                            "item_203",
                            "Margherita Pizza",
                            "San Marzano tomatoes, mozzarella, fresh basil",
                            14.99,
                        ))),
                        spicy(item(
                            "item_204",
                            "Pepperoni Pizza",
                            "Spicy pepperoni with mozzarella",
                            16.99,
                        )),
                    ],
                ),
                category(
                    "Pasta",
                    vec![
                        popular(item(
                            "item_205",
                            "Spaghetti Carbonara",
                            "Guanciale, egg, pecorino romano",
                            15.99,
                        )),
                        veg(item(
                            "item_206",
                            "Penne Arrabbiata",
                            "Penne in spicy tomato sauce",
                            13.99,
                        )),
                    ],
                ),
            ],
        },
    );

    menus.insert(
        "rest_005".to_string(),
        Menu {
            categories: vec![
                category(
                    "Tacos",
                    vec![
                        popular(spicy(item(
                            "item_401",
                            "Tacos al Pastor (3)",
                            "Marinated pork with pineapple and cilantro",
                            9.99,
                        ))),
                        veg(item(
                            "item_402",
                            "Veggie Tacos (3)",
                            "Grilled vegetables with black beans",
                            8.99,
                        )),
                    ],
                ),
                category(
                    "Burritos",
                    vec![
                        popular(item(
                            "item_403",
                            "Carne Asada Burrito",
                            "Grilled steak, rice, beans, salsa",
                            11.99,
                        )),
                        spicy(veg(item(
                            "item_404",
                            "Spicy Bean Burrito",
                            "Refried beans, jalapenos, cheese",
                            8.49,
                        ))),
                    ],
                ),
                category(
                    "Sides",
                    vec![
                        veg(item(
                            "item_405",
                            "Chips & Guacamole",
                            "House-made guacamole with tortilla chips",
                            6.99,
                        )),
                        veg(item(
                            "item_406",
                            "Quesadilla",
                            "Flour tortilla with melted cheese",
                            7.99,
                        )),
                    ],
                ),
            ],
        },
    );

    menus.insert(
        "rest_008".to_string(),
        Menu {
            categories: vec![
                category(
                    "Express Combos",
                    vec![
                        spicy(item(
                            "item_701",
                            "Butter Chicken Combo",
                            "Butter chicken with rice and naan",
                            10.99,
                        )),
                        spicy(veg(item(
                            "item_702",
                            "Chana Masala Combo",
                            "Chickpea curry with rice and naan",
                            8.99,
                        ))),
                    ],
                ),
                category(
                    "Street Snacks",
                    vec![
                        veg(item(
                            "item_703",
                            "Pav Bhaji",
                            "Spiced vegetable mash with buttered rolls",
                            7.49,
                        )),
                        popular(spicy(veg(item(
                            "item_704",
                            "Vada Pav",
                            "Fried potato dumpling in a bun",
                            4.99,
                        )))),
                    ],
                ),
            ],
        },
    );

    menus.insert(
        "rest_011".to_string(),
        Menu {
            categories: vec![category(
                "Tacos",
                vec![
                    popular(spicy(item(
                        "item_801",
                        "Carnitas Tacos (3)",
                        "Slow-braised pork with onion and cilantro",
                        8.49,
                    ))),
                    item(
                        "item_802",
                        "Fish Tacos (3)",
                        "Baja-style fried fish with cabbage slaw",
                        9.49,
                    ),
                ],
            )],
        },
    );

    menus
}
