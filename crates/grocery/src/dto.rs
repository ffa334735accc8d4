use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

use weekbasket_shared::{DateRange, Quantity, Result};

use crate::model::GroceryList;
use crate::store::IngredientDirectory;
use crate::trips::SplitPolicy;

pub const DEFAULT_SPLIT_RULE: &str = "Sun-Wed_Thu-Sun";
pub const CUSTOM_SPLIT_RULE: &str = "custom";

/// Body of `POST /grocery/compute`.
#[derive(Deserialize, Validate, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ComputeGroceryInput {
    pub plan_week_id: Uuid,
    #[serde(default = "default_trips")]
    #[validate(range(min = 1, max = 7))]
    pub trips: u8,
    /// Free-form rule name. Anything other than the literal `custom` selects
    /// the counted calendar split.
    #[serde(default = "default_split_rule")]
    pub split_rule: String,
    #[serde(default)]
    pub custom_splits: Option<Vec<DateRange>>,
}

fn default_trips() -> u8 {
    2
}

fn default_split_rule() -> String {
    DEFAULT_SPLIT_RULE.to_string()
}

impl ComputeGroceryInput {
    pub fn new(plan_week_id: Uuid) -> Self {
        Self {
            plan_week_id,
            trips: default_trips(),
            split_rule: default_split_rule(),
            custom_splits: None,
        }
    }

    /// Custom ranges are honored whenever the rule says `custom` and the
    /// field was present, even as an empty list; everything else falls back
    /// to the counted split.
    pub fn split_policy(&self) -> SplitPolicy {
        match &self.custom_splits {
            Some(ranges) if self.split_rule == CUSTOM_SPLIT_RULE => {
                SplitPolicy::Custom(ranges.clone())
            }
            _ => SplitPolicy::Count(self.trips),
        }
    }
}

/// Body of `PATCH /grocery/lists/{id}`. Only the `checked` flags are read;
/// an item's position in the array selects the stored item it applies to.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChecklistInput {
    #[serde(default)]
    pub trips: Vec<TripChecklistInput>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TripChecklistInput {
    pub trip_index: u32,
    #[serde(default)]
    pub items: Vec<ItemChecklistInput>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ItemChecklistInput {
    #[serde(default)]
    pub checked: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GroceryListDto {
    pub id: Uuid,
    pub plan_week_id: Uuid,
    pub trips: Vec<GroceryTripDto>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GroceryTripDto {
    pub trip_index: u32,
    pub date_range: DateRange,
    pub items: Vec<GroceryItemDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItemDto {
    pub ingredient_id: Uuid,
    pub ingredient_name: Option<String>,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub needed: Quantity,
    pub after_pantry: Quantity,
    pub checked: bool,
}

/// Project a stored list onto the wire shape, enriching every item with
/// display names from the ingredient catalog. An ingredient the catalog no
/// longer knows keeps null names instead of failing the response.
pub async fn map_list(
    list: GroceryList,
    ingredients: &dyn IngredientDirectory,
) -> Result<GroceryListDto> {
    let mut trips = Vec::with_capacity(list.trips.len());

    for trip in list.trips {
        let mut items = Vec::with_capacity(trip.items.len());
        for item in trip.items {
            let info = ingredients.describe(item.ingredient_id).await?;
            let ingredient_name = info.as_ref().map(|i| i.name.clone());
            let category_id = item
                .category_id
                .or_else(|| info.as_ref().and_then(|i| i.category_id));
            let category_name = info.and_then(|i| i.category_name);

            items.push(GroceryItemDto {
                ingredient_id: item.ingredient_id,
                ingredient_name,
                category_id,
                category_name,
                needed: item.needed,
                after_pantry: item.after_pantry,
                checked: item.checked,
            });
        }

        trips.push(GroceryTripDto {
            trip_index: trip.index,
            date_range: trip.date_range,
            items,
        });
    }

    Ok(GroceryListDto {
        id: list.id,
        plan_week_id: list.plan_week_id,
        trips,
        created_at: list.created_at,
        updated_at: list.updated_at,
    })
}
