use std::collections::BTreeMap;

use rust_decimal::Decimal;
use time::{Date, Duration};
use uuid::Uuid;

use weekbasket_shared::DateRange;

use crate::model::{IngredientNeed, Trip};
use crate::pantry::NettedNeed;

/// How the seven day week is cut into shopping trips.
#[derive(Clone, Debug, PartialEq)]
pub enum SplitPolicy {
    /// Caller-supplied ranges, used exactly as given. Overlap and week
    /// coverage are not validated.
    Custom(Vec<DateRange>),
    /// Calendar bucketing into `n` trips, `1..=7` (enforced at the request
    /// boundary).
    Count(u8),
}

/// Partition the week starting at `week_start` into trip date ranges.
///
/// One trip covers the whole week. Two trips cut it after the fourth day.
/// Any higher count yields `7 / n` days per trip, with the last trip running
/// to the end of the week and so absorbing the remainder; the union of the
/// ranges is always exactly the seven day span.
pub fn split_week(policy: &SplitPolicy, week_start: Date) -> Vec<DateRange> {
    let week_end = week_start + Duration::days(6);

    match policy {
        SplitPolicy::Custom(ranges) => ranges.clone(),
        SplitPolicy::Count(1) => vec![DateRange::new(week_start, week_end)],
        SplitPolicy::Count(2) => {
            let mid = week_start + Duration::days(3);
            vec![
                DateRange::new(week_start, mid),
                DateRange::new(mid + Duration::days(1), week_end),
            ]
        }
        SplitPolicy::Count(n) => {
            let n = i64::from(*n);
            let days_per_trip = 7 / n;
            (0..n)
                .map(|i| {
                    let from = week_start + Duration::days(i * days_per_trip);
                    let to = if i == n - 1 {
                        week_end
                    } else {
                        from + Duration::days(days_per_trip - 1)
                    };
                    DateRange::new(from, to)
                })
                .collect()
        }
    }
}

/// Turn the computed ranges into trips and attach the netted items.
///
/// Every item with an open need lands on the first trip; later trips are
/// created with empty item lists and fresh `checked` flags are false.
// TODO: distribute items onto the trip whose date range actually consumes
// them instead of putting everything on trip 0.
pub fn build_trips(ranges: Vec<DateRange>, needs: &BTreeMap<Uuid, NettedNeed>) -> Vec<Trip> {
    ranges
        .into_iter()
        .enumerate()
        .map(|(index, date_range)| Trip {
            index: index as u32,
            date_range,
            items: if index == 0 {
                open_items(needs)
            } else {
                Vec::new()
            },
        })
        .collect()
}

/// Items still needing purchase after netting, in ingredient id order.
fn open_items(needs: &BTreeMap<Uuid, NettedNeed>) -> Vec<IngredientNeed> {
    needs
        .iter()
        .filter(|(_, need)| need.after_pantry.amount > Decimal::ZERO)
        .map(|(id, need)| IngredientNeed {
            ingredient_id: *id,
            category_id: None,
            needed: need.needed,
            after_pantry: need.after_pantry,
            checked: false,
        })
        .collect()
}
