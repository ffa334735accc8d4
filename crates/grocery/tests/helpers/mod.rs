use time::macros::date;
use time::Date;
use uuid::Uuid;

use weekbasket_grocery::{GroceryService, IngredientInfo, MemoryStore};
use weekbasket_shared::{
    MealSlot, PantryEntry, PlannerEntry, PlannerWeekSnapshot, Quantity, RecipeLine, Requester, Unit,
};

pub const WEEK_START: Date = date!(2024 - 01 - 01);

/// One seeded household week:
///
/// - Monday dinner, 2 portions of a recipe needing 0.5 kg flour, 0.3 l milk
///   and 2 eggs per portion
/// - a recipe-less entry and an entry whose recipe was deleted, which must
///   not disturb the totals
/// - user pantry holding 0.3 kg flour, household pantry holding 1 l milk
/// - catalog entries for flour and milk; eggs are deliberately uncatalogued
///
/// Flour therefore nets to 700 g open need, milk nets to zero and eggs stay
/// at 4 pieces.
#[allow(dead_code)]
pub struct Fixture {
    pub store: MemoryStore,
    pub service: GroceryService,
    pub requester: Requester,
    pub user_id: Uuid,
    pub household_id: Uuid,
    pub week_id: Uuid,
    pub pancakes: Uuid,
    pub flour: Uuid,
    pub milk: Uuid,
    pub eggs: Uuid,
}

#[allow(dead_code)]
pub fn qty(amount: &str, unit: Unit) -> Quantity {
    Quantity::new(amount.parse().unwrap(), unit)
}

#[allow(dead_code)]
pub fn setup() -> Fixture {
    let store = MemoryStore::new();
    let user_id = Uuid::new_v4();
    let household_id = Uuid::new_v4();
    let week_id = Uuid::new_v4();
    let pancakes = Uuid::new_v4();
    let flour = Uuid::new_v4();
    let milk = Uuid::new_v4();
    let eggs = Uuid::new_v4();

    store.put_recipe(
        pancakes,
        vec![
            RecipeLine::new(flour, qty("0.5", Unit::Kilogram)),
            RecipeLine::new(milk, qty("0.3", Unit::Liter)),
            RecipeLine::new(eggs, qty("2", Unit::Piece)),
        ],
    );

    store.put_week(PlannerWeekSnapshot {
        id: week_id,
        start_date: WEEK_START,
        user_id: Some(user_id),
        household_id: Some(household_id),
        entries: vec![
            PlannerEntry {
                date: WEEK_START,
                slot: MealSlot::Dinner,
                recipe_id: Some(pancakes),
                portions: 2,
            },
            PlannerEntry {
                date: date!(2024 - 01 - 02),
                slot: MealSlot::Lunch,
                recipe_id: None,
                portions: 4,
            },
            PlannerEntry {
                date: date!(2024 - 01 - 03),
                slot: MealSlot::Breakfast,
                recipe_id: Some(Uuid::new_v4()),
                portions: 1,
            },
        ],
    });

    store.put_user_pantry(user_id, PantryEntry::new(flour, qty("0.3", Unit::Kilogram)));
    store.put_household_pantry(household_id, PantryEntry::new(milk, qty("1", Unit::Liter)));

    store.put_ingredient(
        flour,
        IngredientInfo {
            name: "Wheat flour".to_string(),
            category_id: Some(Uuid::new_v4()),
            category_name: Some("Baking".to_string()),
        },
    );
    store.put_ingredient(
        milk,
        IngredientInfo {
            name: "Milk".to_string(),
            category_id: Some(Uuid::new_v4()),
            category_name: Some("Dairy".to_string()),
        },
    );

    let service = store.service();
    let requester = Requester::household(user_id, household_id);

    Fixture {
        store,
        service,
        requester,
        user_id,
        household_id,
        week_id,
        pancakes,
        flour,
        milk,
        eggs,
    }
}
