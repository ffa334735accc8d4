use time::OffsetDateTime;
use uuid::Uuid;

use weekbasket_shared::{DateRange, Quantity};

/// One ingredient on a shopping trip: the week's gross demand and what is
/// still to buy once pantry stock is netted out.
#[derive(Clone, Debug, PartialEq)]
pub struct IngredientNeed {
    pub ingredient_id: Uuid,
    /// Display metadata owned by the ingredient catalog, never consulted by
    /// any computation. Left unset by aggregation.
    pub category_id: Option<Uuid>,
    pub needed: Quantity,
    pub after_pantry: Quantity,
    pub checked: bool,
}

/// One shopping excursion covering a sub-range of the planner week.
#[derive(Clone, Debug, PartialEq)]
pub struct Trip {
    pub index: u32,
    pub date_range: DateRange,
    pub items: Vec<IngredientNeed>,
}

/// The computed grocery list for one planner week and requesting identity.
/// At most one exists per (week, identity) pair; recomputation swaps the trip
/// collection of the existing list instead of creating a second one.
#[derive(Clone, Debug, PartialEq)]
pub struct GroceryList {
    pub id: Uuid,
    pub plan_week_id: Uuid,
    pub user_id: Uuid,
    pub household_id: Option<Uuid>,
    pub trips: Vec<Trip>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}
