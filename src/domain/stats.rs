use serde::Serialize;

use crate::models::CycleRecord;

/// Users need at least this many logged cycles before averages are treated
/// as meaningful for insight generation.
const MIN_CYCLES_FOR_INSIGHTS: usize = 3;

/// Averages are None (not zero) when no cycles are logged, so the UI can
/// prompt for more data instead of showing a misleading metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleStats {
    pub average_cycle_length: Option<i32>,
    pub average_period_length: Option<i32>,
    pub cycle_count: usize,
    pub has_sufficient_data: bool,
}

/// Summarizes the full record set: round-half-up averages and a
/// tracking-consistency flag.
pub fn summarize(records: &[CycleRecord]) -> CycleStats {
    if records.is_empty() {
        return CycleStats {
            average_cycle_length: None,
            average_period_length: None,
            cycle_count: 0,
            has_sufficient_data: false,
        };
    }

    let count = records.len();
    let cycle_sum: i64 = records.iter().map(|r| i64::from(r.cycle_length)).sum();
    let period_sum: i64 = records.iter().map(|r| i64::from(r.period_length)).sum();

    CycleStats {
        average_cycle_length: Some(round_mean(cycle_sum, count)),
        average_period_length: Some(round_mean(period_sum, count)),
        cycle_count: count,
        has_sufficient_data: count >= MIN_CYCLES_FOR_INSIGHTS,
    }
}

fn round_mean(sum: i64, count: usize) -> i32 {
    (sum as f64 / count as f64).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlowIntensity, Mood};
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn cycle(cycle_length: i32, period_length: i32) -> CycleRecord {
        CycleRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            cycle_start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            cycle_length,
            period_length,
            symptoms: vec![],
            mood: Mood::Normal,
            flow_intensity: FlowIntensity::Medium,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_input_yields_no_data_sentinels() {
        let stats = summarize(&[]);
        assert_eq!(stats.average_cycle_length, None);
        assert_eq!(stats.average_period_length, None);
        assert_eq!(stats.cycle_count, 0);
        assert!(!stats.has_sufficient_data);
    }

    #[test]
    fn identical_records_average_to_their_length() {
        for n in 1..=6usize {
            let records: Vec<_> = (0..n).map(|_| cycle(30, 6)).collect();
            let stats = summarize(&records);
            assert_eq!(stats.average_cycle_length, Some(30));
            assert_eq!(stats.average_period_length, Some(6));
            assert_eq!(stats.cycle_count, n);
        }
    }

    #[test]
    fn averages_round_half_up() {
        // mean cycle length 28.5, mean period length 4.5
        let records = vec![cycle(28, 4), cycle(29, 5)];
        let stats = summarize(&records);
        assert_eq!(stats.average_cycle_length, Some(29));
        assert_eq!(stats.average_period_length, Some(5));
    }

    #[test]
    fn sufficiency_threshold_is_three_records() {
        let two: Vec<_> = (0..2).map(|_| cycle(28, 5)).collect();
        assert!(!summarize(&two).has_sufficient_data);

        let three: Vec<_> = (0..3).map(|_| cycle(28, 5)).collect();
        assert!(summarize(&three).has_sufficient_data);
    }

    #[test]
    fn input_records_are_untouched() {
        let records = vec![cycle(25, 3), cycle(35, 7)];
        let before: Vec<_> = records.iter().map(|r| r.cycle_length).collect();
        let _ = summarize(&records);
        let after: Vec<_> = records.iter().map(|r| r.cycle_length).collect();
        assert_eq!(before, after);
    }
}
