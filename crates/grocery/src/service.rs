use std::collections::HashMap;
use std::sync::Arc;

use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

use weekbasket_shared::{Requester, Result};

use crate::aggregate::aggregate_demand;
use crate::dto::{map_list, ComputeGroceryInput, GroceryListDto, UpdateChecklistInput};
use crate::model::GroceryList;
use crate::pantry::net_against_pantry;
use crate::store::{
    GroceryListStore, IngredientDirectory, PantrySource, PlannerSource, RecipeSource,
};
use crate::trips::{build_trips, split_week};

/// Orchestrates the grocery pipeline over the collaborator traits. The
/// pipeline itself is pure; everything I/O shaped lives behind the traits.
#[derive(Clone)]
pub struct GroceryService {
    planner: Arc<dyn PlannerSource>,
    recipes: Arc<dyn RecipeSource>,
    pantry: Arc<dyn PantrySource>,
    ingredients: Arc<dyn IngredientDirectory>,
    lists: Arc<dyn GroceryListStore>,
}

impl GroceryService {
    pub fn new(
        planner: Arc<dyn PlannerSource>,
        recipes: Arc<dyn RecipeSource>,
        pantry: Arc<dyn PantrySource>,
        ingredients: Arc<dyn IngredientDirectory>,
        lists: Arc<dyn GroceryListStore>,
    ) -> Self {
        Self {
            planner,
            recipes,
            pantry,
            ingredients,
            lists,
        }
    }

    /// Compute, or recompute, the grocery list for a planner week.
    ///
    /// Recomputation is destructive: the existing list keeps its identity but
    /// its trip collection is replaced wholesale and every `checked` flag
    /// starts over as false. Two concurrent computes for the same week are
    /// last-writer-wins.
    pub async fn compute(
        &self,
        requester: &Requester,
        input: ComputeGroceryInput,
    ) -> Result<GroceryListDto> {
        input.validate()?;

        let week = self
            .planner
            .planner_week(requester, input.plan_week_id)
            .await?;

        let mut recipes = HashMap::new();
        for entry in &week.entries {
            let Some(recipe_id) = entry.recipe_id else {
                continue;
            };
            if recipes.contains_key(&recipe_id) {
                continue;
            }
            // A recipe deleted since planning resolves to None and simply
            // never enters the map.
            if let Some(lines) = self.recipes.ingredient_lines(recipe_id).await? {
                recipes.insert(recipe_id, lines);
            }
        }

        let stock = self
            .pantry
            .snapshot(requester.user_id, week.household_id)
            .await?;

        let needed = aggregate_demand(&week.entries, &recipes);
        let netted = net_against_pantry(needed, &stock);
        let policy = input.split_policy();
        let trips = build_trips(split_week(&policy, week.start_date), &netted);

        tracing::debug!(
            week = %week.id,
            trips = trips.len(),
            items = trips.first().map(|t| t.items.len()).unwrap_or(0),
            "computed grocery trips"
        );

        let list = match self.lists.find_for_week(requester, week.id).await? {
            Some(existing) => self.lists.replace_trips(existing.id, trips).await?,
            None => {
                let now = OffsetDateTime::now_utc();
                self.lists
                    .insert(GroceryList {
                        id: Uuid::new_v4(),
                        plan_week_id: week.id,
                        user_id: requester.user_id,
                        household_id: week.household_id,
                        trips,
                        created_at: now,
                        updated_at: now,
                    })
                    .await?
            }
        };

        map_list(list, self.ingredients.as_ref()).await
    }

    /// Overwrite `checked` flags positionally, without recomputation.
    ///
    /// Trip updates whose index is outside the stored trip list are skipped;
    /// item positions beyond either list's length are left untouched.
    /// Matching is by position, not ingredient id, so a recompute between
    /// read and update shifts flags onto whatever ingredient now occupies the
    /// position.
    pub async fn apply_checklist_update(
        &self,
        requester: &Requester,
        list_id: Uuid,
        input: UpdateChecklistInput,
    ) -> Result<GroceryListDto> {
        let list = self.lists.get(requester, list_id).await?;

        let mut trips = list.trips;
        for update in &input.trips {
            let Some(trip) = trips.get_mut(update.trip_index as usize) else {
                continue;
            };
            let overlap = trip.items.len().min(update.items.len());
            for i in 0..overlap {
                trip.items[i].checked = update.items[i].checked;
            }
        }

        let updated = self.lists.replace_trips(list.id, trips).await?;
        map_list(updated, self.ingredients.as_ref()).await
    }

    /// Fetch a stored list as its wire shape.
    pub async fn get(&self, requester: &Requester, list_id: Uuid) -> Result<GroceryListDto> {
        let list = self.lists.get(requester, list_id).await?;
        map_list(list, self.ingredients.as_ref()).await
    }
}
