use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use weekbasket_grocery::{IngredientInfo, MemoryStore};
use weekbasket_shared::{
    MealSlot, PantryEntry, PlannerEntry, PlannerWeekSnapshot, Quantity, RecipeLine, Unit,
};

/// Identities created by [`seed_demo_data`], logged at startup so the API can
/// be exercised immediately.
#[derive(Clone, Copy, Debug)]
pub struct DemoSeed {
    pub user_id: Uuid,
    pub household_id: Uuid,
    pub week_id: Uuid,
}

/// Seed one demo household: a planned week starting on the current Monday,
/// two recipes, pantry stock and an ingredient catalog.
#[tracing::instrument(skip(store))]
pub fn seed_demo_data(store: &MemoryStore) -> DemoSeed {
    let user_id = Uuid::new_v4();
    let household_id = Uuid::new_v4();
    let week_id = Uuid::new_v4();

    let flour = Uuid::new_v4();
    let milk = Uuid::new_v4();
    let eggs = Uuid::new_v4();
    let tomatoes = Uuid::new_v4();
    let butter = Uuid::new_v4();

    let baking = Uuid::new_v4();
    let dairy = Uuid::new_v4();
    let produce = Uuid::new_v4();

    let catalog = [
        (flour, "Wheat flour", baking, "Baking"),
        (milk, "Whole milk", dairy, "Dairy"),
        (eggs, "Eggs", dairy, "Dairy"),
        (tomatoes, "Tomatoes", produce, "Produce"),
        (butter, "Butter", dairy, "Dairy"),
    ];
    for (id, name, category_id, category_name) in catalog {
        store.put_ingredient(
            id,
            IngredientInfo {
                name: name.to_string(),
                category_id: Some(category_id),
                category_name: Some(category_name.to_string()),
            },
        );
    }

    // Per portion: 0.5 kg flour, 0.3 l milk, 2 eggs.
    let pancakes = Uuid::new_v4();
    store.put_recipe(
        pancakes,
        vec![
            RecipeLine::new(flour, Quantity::new(Decimal::new(5, 1), Unit::Kilogram)),
            RecipeLine::new(milk, Quantity::new(Decimal::new(3, 1), Unit::Liter)),
            RecipeLine::new(eggs, Quantity::new(Decimal::TWO, Unit::Piece)),
        ],
    );

    // Per portion: 0.4 kg tomatoes, 0.02 kg butter.
    let tomato_soup = Uuid::new_v4();
    store.put_recipe(
        tomato_soup,
        vec![
            RecipeLine::new(tomatoes, Quantity::new(Decimal::new(4, 1), Unit::Kilogram)),
            RecipeLine::new(butter, Quantity::new(Decimal::new(2, 2), Unit::Kilogram)),
        ],
    );

    let today = OffsetDateTime::now_utc().date();
    let monday = today - Duration::days(i64::from(today.weekday().number_days_from_monday()));

    store.put_week(PlannerWeekSnapshot {
        id: week_id,
        start_date: monday,
        user_id: Some(user_id),
        household_id: Some(household_id),
        entries: vec![
            PlannerEntry {
                date: monday,
                slot: MealSlot::Dinner,
                recipe_id: Some(pancakes),
                portions: 2,
            },
            PlannerEntry {
                date: monday + Duration::days(1),
                slot: MealSlot::Dinner,
                recipe_id: Some(tomato_soup),
                portions: 4,
            },
            PlannerEntry {
                date: monday + Duration::days(2),
                slot: MealSlot::Breakfast,
                recipe_id: Some(pancakes),
                portions: 1,
            },
            // Eating out, nothing to buy.
            PlannerEntry {
                date: monday + Duration::days(3),
                slot: MealSlot::Lunch,
                recipe_id: None,
                portions: 2,
            },
        ],
    });

    store.put_user_pantry(
        user_id,
        PantryEntry::new(flour, Quantity::new(Decimal::new(3, 1), Unit::Kilogram)),
    );
    store.put_household_pantry(
        household_id,
        PantryEntry::new(milk, Quantity::new(Decimal::ONE, Unit::Liter)),
    );

    let seed = DemoSeed {
        user_id,
        household_id,
        week_id,
    };

    tracing::info!(
        user = %seed.user_id,
        household = %seed.household_id,
        week = %seed.week_id,
        "demo data seeded"
    );

    seed
}
