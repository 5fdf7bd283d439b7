//! Percentages and shares over ridership totals.

use crate::state::{DayType, DayTypeTotal};

/// `part` as a percentage of `whole`, or `None` when `whole` is not positive.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percent(part: i64, whole: i64) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64 * 100.0)
}

/// One row of a breakdown: a count and its share of the total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Share {
    pub riders: i64,
    pub percent: f64,
}

/// Ridership at a station split by day type.
#[derive(Debug, Clone, PartialEq)]
pub struct DayTypeBreakdown {
    pub weekday: Share,
    pub saturday: Share,
    pub sunday_holiday: Share,
    pub total: i64,
}

impl DayTypeBreakdown {
    /// Fold per-day-type totals into a breakdown.
    ///
    /// Missing day types count as zero. Returns `None` when the station has
    /// no riders at all.
    #[must_use]
    pub fn from_totals(totals: &[DayTypeTotal]) -> Option<Self> {
        let riders_for = |day_type: DayType| -> i64 {
            totals
                .iter()
                .filter(|t| t.day_type == day_type)
                .map(|t| t.riders)
                .sum()
        };

        let weekday = riders_for(DayType::Weekday);
        let saturday = riders_for(DayType::Saturday);
        let sunday_holiday = riders_for(DayType::SundayHoliday);
        let total = weekday + saturday + sunday_holiday;

        let share = |riders: i64| -> Option<Share> {
            Some(Share {
                riders,
                percent: percent(riders, total)?,
            })
        };

        Some(Self {
            weekday: share(weekday)?,
            saturday: share(saturday)?,
            sunday_holiday: share(sunday_holiday)?,
            total,
        })
    }

    /// Share of one day type.
    #[must_use]
    pub const fn share(&self, day_type: DayType) -> Share {
        match day_type {
            DayType::Weekday => self.weekday,
            DayType::Saturday => self.saturday,
            DayType::SundayHoliday => self.sunday_holiday,
        }
    }

    /// Shares in reporting order, paired with their day type.
    #[must_use]
    pub fn rows(&self) -> [(DayType, Share); 3] {
        DayType::ALL.map(|day_type| (day_type, self.share(day_type)))
    }
}

/// Pair each value with its share of the sum of all values.
///
/// When the sum is zero every share is zero.
pub fn shares_of_total<'a, T>(items: &'a [T], riders: impl Fn(&T) -> i64) -> Vec<(&'a T, f64)> {
    let total: i64 = items.iter().map(&riders).sum();
    items
        .iter()
        .map(|item| (item, percent(riders(item), total).unwrap_or(0.0)))
        .collect()
}

/// The first `n` and last `n` items of a slice, without repeating any item
/// when the slice is shorter than `2 * n`.
#[must_use]
pub fn head_and_tail<T>(items: &[T], n: usize) -> Vec<&T> {
    if items.len() <= 2 * n {
        return items.iter().collect();
    }
    items[..n].iter().chain(&items[items.len() - n..]).collect()
}
