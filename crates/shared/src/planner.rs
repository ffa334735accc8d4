use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::MealSlot;

/// One scheduled meal of a planner week. Entries without a recipe (free-form
/// notes, eating out) contribute nothing to grocery aggregation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannerEntry {
    pub date: Date,
    pub slot: MealSlot,
    pub recipe_id: Option<Uuid>,
    pub portions: u32,
}

/// A planner week as handed over by the planner collaborator: fully
/// materialized, nothing lazy behind it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannerWeekSnapshot {
    pub id: Uuid,
    /// Monday of the planned week.
    pub start_date: Date,
    pub user_id: Option<Uuid>,
    pub household_id: Option<Uuid>,
    pub entries: Vec<PlannerEntry>,
}
