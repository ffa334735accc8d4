use async_trait::async_trait;
use uuid::Uuid;

use weekbasket_shared::{PantryEntry, PlannerWeekSnapshot, RecipeLine, Requester, Result};

use crate::model::{GroceryList, Trip};

/// Supplies planner weeks. Implementations perform the owner/household access
/// check and answer with `NotFound` or `Forbidden` before any data leaves.
#[async_trait]
pub trait PlannerSource: Send + Sync {
    async fn planner_week(
        &self,
        requester: &Requester,
        week_id: Uuid,
    ) -> Result<PlannerWeekSnapshot>;
}

/// Resolves recipes into their ingredient lines. A recipe that no longer
/// exists resolves to `None` and is skipped by aggregation.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn ingredient_lines(&self, recipe_id: Uuid) -> Result<Option<Vec<RecipeLine>>>;
}

/// Supplies the pantry snapshot for a user and, when the planner week belongs
/// to one, its household.
#[async_trait]
pub trait PantrySource: Send + Sync {
    async fn snapshot(
        &self,
        user_id: Uuid,
        household_id: Option<Uuid>,
    ) -> Result<Vec<PantryEntry>>;
}

/// Display metadata for one ingredient.
#[derive(Clone, Debug, PartialEq)]
pub struct IngredientInfo {
    pub name: String,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
}

/// Name and category lookup for ingredients, consulted only at the DTO
/// mapping boundary.
#[async_trait]
pub trait IngredientDirectory: Send + Sync {
    async fn describe(&self, ingredient_id: Uuid) -> Result<Option<IngredientInfo>>;
}

/// Owns grocery list persistence. Reads carry the requester so access checks
/// happen here; the trip replacement is atomic per list.
#[async_trait]
pub trait GroceryListStore: Send + Sync {
    /// The list previously computed by this requester for the given week, if
    /// any.
    async fn find_for_week(
        &self,
        requester: &Requester,
        plan_week_id: Uuid,
    ) -> Result<Option<GroceryList>>;

    async fn get(&self, requester: &Requester, list_id: Uuid) -> Result<GroceryList>;

    async fn insert(&self, list: GroceryList) -> Result<GroceryList>;

    /// Swap the entire trip collection of an existing list and bump its
    /// `updated_at`. Returns the stored result.
    async fn replace_trips(&self, list_id: Uuid, trips: Vec<Trip>) -> Result<GroceryList>;
}
