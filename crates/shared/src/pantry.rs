use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Quantity;

/// Current pantry stock for one ingredient. The supplying collaborator has
/// already scoped the snapshot to the requesting user and household.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PantryEntry {
    pub ingredient_id: Uuid,
    pub quantity: Quantity,
}

impl PantryEntry {
    pub fn new(ingredient_id: Uuid, quantity: Quantity) -> Self {
        Self {
            ingredient_id,
            quantity,
        }
    }
}
