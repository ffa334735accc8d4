use std::collections::BTreeMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use weekbasket_shared::{PantryEntry, Quantity};

/// A tracked ingredient after netting: the gross demand and what remains to
/// buy once pantry stock has been subtracted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NettedNeed {
    pub needed: Quantity,
    pub after_pantry: Quantity,
}

/// Subtract pantry stock from aggregated demand, clamping at zero: a
/// household cannot have negative need. Pantry rows for ingredients the week
/// does not use are ignored. Subtraction is keyed by ingredient id alone, in
/// base units, with no unit family check.
pub fn net_against_pantry(
    needed: BTreeMap<Uuid, Quantity>,
    pantry: &[PantryEntry],
) -> BTreeMap<Uuid, NettedNeed> {
    let mut netted: BTreeMap<Uuid, NettedNeed> = needed
        .into_iter()
        .map(|(id, needed)| {
            (
                id,
                NettedNeed {
                    needed,
                    after_pantry: needed,
                },
            )
        })
        .collect();

    for stock in pantry {
        let Some(entry) = netted.get_mut(&stock.ingredient_id) else {
            continue;
        };
        let held = stock.quantity.to_base_unit().amount;
        entry.after_pantry.amount = (entry.after_pantry.amount - held).max(Decimal::ZERO);
    }

    netted
}
