// Selector - read-only projections over the quote store

use crate::domain::{Category, Mood, QuoteRecord, TimeOfDay, TimePeriod};
use crate::port::Picker;
use chrono::Timelike;

/// Hour (inclusive) at which the morning period starts
pub const MORNING_START_HOUR: u32 = 5;
/// Hour (inclusive) at which the evening period starts
pub const EVENING_START_HOUR: u32 = 18;
/// Hour (inclusive) at which the night period starts
pub const NIGHT_START_HOUR: u32 = 22;

pub fn by_category<'a>(records: &[&'a QuoteRecord], category: Category) -> Vec<&'a QuoteRecord> {
    records
        .iter()
        .copied()
        .filter(|r| r.category == category)
        .collect()
}

pub fn by_mood<'a>(records: &[&'a QuoteRecord], mood: Mood) -> Vec<&'a QuoteRecord> {
    records.iter().copied().filter(|r| r.mood == mood).collect()
}

/// Records tagged with `period` plus every `any`-tagged record
pub fn by_time_of_day<'a>(records: &[&'a QuoteRecord], period: TimePeriod) -> Vec<&'a QuoteRecord> {
    let wanted = TimeOfDay::from(period);
    records
        .iter()
        .copied()
        .filter(|r| r.time_of_day == wanted || r.time_of_day == TimeOfDay::Any)
        .collect()
}

/// Case-insensitive substring match against text and author.
///
/// A blank keyword matches everything.
pub fn search<'a>(records: &[&'a QuoteRecord], keyword: &str) -> Vec<&'a QuoteRecord> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .copied()
        .filter(|r| {
            r.text.to_lowercase().contains(&needle)
                || r.author
                    .as_deref()
                    .is_some_and(|a| a.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Map a wall-clock time to a period.
///
/// - 05:00-17:59 morning (daytime has no separate period)
/// - 18:00-21:59 evening
/// - 22:00-04:59 night
pub fn current_time_period<T: Timelike>(clock_time: &T) -> TimePeriod {
    match clock_time.hour() {
        h if (MORNING_START_HOUR..EVENING_START_HOUR).contains(&h) => TimePeriod::Morning,
        h if (EVENING_START_HOUR..NIGHT_START_HOUR).contains(&h) => TimePeriod::Evening,
        _ => TimePeriod::Night,
    }
}

/// Pick one record from `filtered`, or from `all` when nothing matched.
///
/// `all` is the full store, which is never empty.
pub fn pick_one<'a>(
    filtered: &[&'a QuoteRecord],
    all: &'a [QuoteRecord],
    picker: &dyn Picker,
) -> &'a QuoteRecord {
    if filtered.is_empty() {
        tracing::debug!(store_size = all.len(), "Filter matched nothing, picking from full store");
        &all[picker.pick_index(all.len())]
    } else {
        filtered[picker.pick_index(filtered.len())]
    }
}

/// Borrow every record of a slice (entry point for chaining filters)
pub fn refs(records: &[QuoteRecord]) -> Vec<&QuoteRecord> {
    records.iter().collect()
}
