use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::CycleRecord;

/// Standard luteal-phase assumption: ovulation happens this many days before
/// the next period starts.
const LUTEAL_PHASE_DAYS: i64 = 14;

/// Fertile window bounds relative to the estimated ovulation day: five days
/// of sperm survival before, one day of egg viability after.
const FERTILE_DAYS_BEFORE_OVULATION: i64 = 5;
const FERTILE_DAYS_AFTER_OVULATION: i64 = 1;

/// All four fields are None together when the user has no logged cycles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CyclePrediction {
    pub next_period_date: Option<NaiveDate>,
    pub ovulation_date: Option<NaiveDate>,
    pub fertile_window_start: Option<NaiveDate>,
    pub fertile_window_end: Option<NaiveDate>,
}

/// Derives next period date, ovulation day and fertile window from the most
/// recent cycle record. Pure: no clock, no I/O.
pub fn predict(last_cycle: Option<&CycleRecord>) -> CyclePrediction {
    let Some(cycle) = last_cycle else {
        return CyclePrediction::default();
    };

    let cycle_length = i64::from(cycle.cycle_length);
    let next_period_date = cycle.cycle_start_date + Duration::days(cycle_length);
    let ovulation_date = cycle.cycle_start_date + Duration::days(cycle_length - LUTEAL_PHASE_DAYS);

    CyclePrediction {
        next_period_date: Some(next_period_date),
        ovulation_date: Some(ovulation_date),
        fertile_window_start: Some(ovulation_date - Duration::days(FERTILE_DAYS_BEFORE_OVULATION)),
        fertile_window_end: Some(ovulation_date + Duration::days(FERTILE_DAYS_AFTER_OVULATION)),
    }
}
