use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use uuid::Uuid;

use weekbasket_shared::{PlannerEntry, Quantity, RecipeLine};

/// Walk a week's planner entries and accumulate how much of every ingredient
/// the planned meals consume, in base units.
///
/// Entries without a recipe contribute nothing. Entries whose recipe id is
/// absent from the materialized map (the recipe was deleted after planning)
/// are skipped silently as well. An ingredient used by several recipes
/// accumulates across all of them, and a total of exactly zero stays tracked.
/// The returned map iterates in ingredient id order, which is the stable item
/// order every later stage relies on.
pub fn aggregate_demand(
    entries: &[PlannerEntry],
    recipes: &HashMap<Uuid, Vec<RecipeLine>>,
) -> BTreeMap<Uuid, Quantity> {
    let mut needed: BTreeMap<Uuid, Quantity> = BTreeMap::new();

    for entry in entries {
        let Some(recipe_id) = entry.recipe_id else {
            continue;
        };
        let Some(lines) = recipes.get(&recipe_id) else {
            continue;
        };

        for line in lines {
            let base = line.quantity.to_base_unit();
            let amount = base.amount * Decimal::from(entry.portions);
            needed
                .entry(line.ingredient_id)
                .and_modify(|total| total.amount += amount)
                .or_insert_with(|| Quantity::new(amount, base.unit));
        }
    }

    needed
}
