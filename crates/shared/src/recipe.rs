use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Quantity;

/// One ingredient requirement of a recipe, for a single portion.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeLine {
    pub ingredient_id: Uuid,
    pub quantity: Quantity,
    pub note: Option<String>,
}

impl RecipeLine {
    pub fn new(ingredient_id: Uuid, quantity: Quantity) -> Self {
        Self {
            ingredient_id,
            quantity,
            note: None,
        }
    }
}
