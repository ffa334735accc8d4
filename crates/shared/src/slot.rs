use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// The five meal slots a planner day is divided into.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
pub enum MealSlot {
    #[strum(serialize = "breakfast")]
    #[serde(rename = "breakfast")]
    Breakfast,
    #[strum(serialize = "snackAM")]
    #[serde(rename = "snackAM")]
    SnackAm,
    #[strum(serialize = "lunch")]
    #[serde(rename = "lunch")]
    Lunch,
    #[strum(serialize = "snackPM")]
    #[serde(rename = "snackPM")]
    SnackPm,
    #[strum(serialize = "dinner")]
    #[serde(rename = "dinner")]
    Dinner,
}
