use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use weekbasket_shared::{Error, PantryEntry, PlannerWeekSnapshot, RecipeLine, Requester, Result};

use crate::model::{GroceryList, Trip};
use crate::service::GroceryService;
use crate::store::{
    GroceryListStore, IngredientDirectory, IngredientInfo, PantrySource, PlannerSource,
    RecipeSource,
};

struct PantryRow {
    user_id: Option<Uuid>,
    household_id: Option<Uuid>,
    entry: PantryEntry,
}

#[derive(Default)]
struct Inner {
    weeks: HashMap<Uuid, PlannerWeekSnapshot>,
    recipes: HashMap<Uuid, Vec<RecipeLine>>,
    pantry: Vec<PantryRow>,
    ingredients: HashMap<Uuid, IngredientInfo>,
    lists: HashMap<Uuid, GroceryList>,
}

/// In-memory implementation of every collaborator trait. Backs the dev
/// server and the test suites; clones share the same underlying data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A grocery service wired entirely to this store.
    pub fn service(&self) -> GroceryService {
        GroceryService::new(
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
        )
    }

    pub fn put_week(&self, week: PlannerWeekSnapshot) {
        self.write().weeks.insert(week.id, week);
    }

    pub fn put_recipe(&self, recipe_id: Uuid, lines: Vec<RecipeLine>) {
        self.write().recipes.insert(recipe_id, lines);
    }

    pub fn remove_recipe(&self, recipe_id: Uuid) {
        self.write().recipes.remove(&recipe_id);
    }

    pub fn put_user_pantry(&self, user_id: Uuid, entry: PantryEntry) {
        self.write().pantry.push(PantryRow {
            user_id: Some(user_id),
            household_id: None,
            entry,
        });
    }

    pub fn put_household_pantry(&self, household_id: Uuid, entry: PantryEntry) {
        self.write().pantry.push(PantryRow {
            user_id: None,
            household_id: Some(household_id),
            entry,
        });
    }

    pub fn put_ingredient(&self, ingredient_id: Uuid, info: IngredientInfo) {
        self.write().ingredients.insert(ingredient_id, info);
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A requester may read data owned by themselves or by a household they are
/// part of.
fn can_access(requester: &Requester, user_id: Option<Uuid>, household_id: Option<Uuid>) -> bool {
    user_id == Some(requester.user_id)
        || (household_id.is_some() && household_id == requester.household_id)
}

#[async_trait]
impl PlannerSource for MemoryStore {
    async fn planner_week(
        &self,
        requester: &Requester,
        week_id: Uuid,
    ) -> Result<PlannerWeekSnapshot> {
        let inner = self.read();
        let week = inner
            .weeks
            .get(&week_id)
            .ok_or_else(|| Error::not_found("planner week"))?;

        if !can_access(requester, week.user_id, week.household_id) {
            return Err(Error::Forbidden);
        }

        Ok(week.clone())
    }
}

#[async_trait]
impl RecipeSource for MemoryStore {
    async fn ingredient_lines(&self, recipe_id: Uuid) -> Result<Option<Vec<RecipeLine>>> {
        Ok(self.read().recipes.get(&recipe_id).cloned())
    }
}

#[async_trait]
impl PantrySource for MemoryStore {
    async fn snapshot(
        &self,
        user_id: Uuid,
        household_id: Option<Uuid>,
    ) -> Result<Vec<PantryEntry>> {
        let inner = self.read();
        let entries = inner
            .pantry
            .iter()
            .filter(|row| {
                row.user_id == Some(user_id)
                    || (household_id.is_some() && row.household_id == household_id)
            })
            .map(|row| row.entry.clone())
            .collect();
        Ok(entries)
    }
}

#[async_trait]
impl IngredientDirectory for MemoryStore {
    async fn describe(&self, ingredient_id: Uuid) -> Result<Option<IngredientInfo>> {
        Ok(self.read().ingredients.get(&ingredient_id).cloned())
    }
}

#[async_trait]
impl GroceryListStore for MemoryStore {
    async fn find_for_week(
        &self,
        requester: &Requester,
        plan_week_id: Uuid,
    ) -> Result<Option<GroceryList>> {
        let inner = self.read();
        let list = inner
            .lists
            .values()
            .find(|list| list.plan_week_id == plan_week_id && list.user_id == requester.user_id)
            .cloned();
        Ok(list)
    }

    async fn get(&self, requester: &Requester, list_id: Uuid) -> Result<GroceryList> {
        let inner = self.read();
        let list = inner
            .lists
            .get(&list_id)
            .ok_or_else(|| Error::not_found("grocery list"))?;

        if !can_access(requester, Some(list.user_id), list.household_id) {
            return Err(Error::Forbidden);
        }

        Ok(list.clone())
    }

    async fn insert(&self, list: GroceryList) -> Result<GroceryList> {
        self.write().lists.insert(list.id, list.clone());
        Ok(list)
    }

    async fn replace_trips(&self, list_id: Uuid, trips: Vec<Trip>) -> Result<GroceryList> {
        let mut inner = self.write();
        let list = inner
            .lists
            .get_mut(&list_id)
            .ok_or_else(|| Error::not_found("grocery list"))?;

        list.trips = trips;
        list.updated_at = OffsetDateTime::now_utc();

        Ok(list.clone())
    }
}
