//! End date computation for a subscription period.

use crate::domain::foundation::Timestamp;

use super::PlanInterval;

/// Computes when a period that starts at a given instant ends.
///
/// Month and year steps use calendar arithmetic where a missing day overflows
/// into the next month (Jan 31 + 1 month = Mar 2 in 2024). Week and day steps
/// add 7 and 1 days. The time of day is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndDateMapper;

impl EndDateMapper {
    pub fn new() -> Self {
        Self
    }

    /// Returns the end of one `interval` starting at `start`.
    ///
    /// `None` only when the result falls outside the representable calendar.
    pub fn map(&self, start: Timestamp, interval: PlanInterval) -> Option<Timestamp> {
        match interval {
            PlanInterval::Month => start.add_calendar_months(1),
            PlanInterval::Year => start.add_calendar_years(1),
            PlanInterval::Week => start.add_days(7),
            PlanInterval::Day => start.add_days(1),
        }
    }

    /// Like [`map`](Self::map) for a raw interval code.
    ///
    /// Unrecognized codes describe non-expiring plans and yield `None`.
    pub fn map_code(&self, start: Timestamp, code: &str) -> Option<Timestamp> {
        PlanInterval::from_code(code)
            .ok()
            .and_then(|interval| self.map(start, interval))
    }
}
