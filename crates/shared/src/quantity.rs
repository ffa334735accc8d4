use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Units a quantity can be expressed in. Mass and volume units convert to a
/// canonical base unit for merging; count-like units do not convert.
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
    Hash,
)]
pub enum Unit {
    #[strum(serialize = "g")]
    #[serde(rename = "g")]
    Gram,
    #[strum(serialize = "kg")]
    #[serde(rename = "kg")]
    Kilogram,
    #[strum(serialize = "ml")]
    #[serde(rename = "ml")]
    Milliliter,
    #[strum(serialize = "l")]
    #[serde(rename = "l")]
    Liter,
    #[strum(serialize = "piece")]
    #[serde(rename = "piece")]
    Piece,
    #[strum(serialize = "pack")]
    #[serde(rename = "pack")]
    Pack,
}

impl Unit {
    /// Canonical unit used to merge quantities of the same family. Units
    /// outside the mass and volume families are their own base unit.
    pub fn base(self) -> Unit {
        match self {
            Unit::Kilogram => Unit::Gram,
            Unit::Liter => Unit::Milliliter,
            other => other,
        }
    }
}

/// An amount paired with its unit. Amounts are exact decimals and serialize
/// as plain JSON numbers.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quantity {
    pub amount: Decimal,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(amount: Decimal, unit: Unit) -> Self {
        Self { amount, unit }
    }

    /// Convert into the unit family's base unit: kg scales by 1000 into g,
    /// l scales by 1000 into ml, everything else is already canonical and
    /// passes through unchanged. There is no cross-family conversion and no
    /// error path for uncatalogued units.
    pub fn to_base_unit(self) -> Self {
        match self.unit {
            Unit::Kilogram => Self {
                amount: self.amount * Decimal::ONE_THOUSAND,
                unit: Unit::Gram,
            },
            Unit::Liter => Self {
                amount: self.amount * Decimal::ONE_THOUSAND,
                unit: Unit::Milliliter,
            },
            _ => self,
        }
    }
}
