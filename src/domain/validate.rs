use std::collections::HashSet;
use std::ops::RangeInclusive;
use thiserror::Error;

use crate::models::NewCycleRecord;

pub const CYCLE_LENGTH_RANGE: RangeInclusive<i32> = 21..=45;
pub const PERIOD_LENGTH_RANGE: RangeInclusive<i32> = 1..=10;

/// Fixed symptom vocabulary. Tags outside this list are rejected at intake.
pub const SYMPTOM_VOCABULARY: &[&str] = &[
    "cramping",
    "bloating",
    "headache",
    "backache",
    "fatigue",
    "nausea",
    "breast-tenderness",
    "acne",
    "mood-swings",
    "insomnia",
];

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("cycle_length {0} is outside the accepted range 21-45 days")]
    CycleLengthOutOfRange(i32),
    #[error("period_length {0} is outside the accepted range 1-10 days")]
    PeriodLengthOutOfRange(i32),
    #[error("unknown symptom tag: {0}")]
    UnknownSymptom(String),
    #[error("duplicate symptom tag: {0}")]
    DuplicateSymptom(String),
    #[error("unknown mood: {0}")]
    UnknownMood(String),
    #[error("unknown flow intensity: {0}")]
    UnknownFlowIntensity(String),
}

/// Intake validation for a new cycle record. Runs at the API boundary so the
/// calculators can assume range-valid input; a cycle_length below 14 days
/// would put the estimated ovulation day before the cycle start, and the
/// 21-day floor rules that out.
pub fn validate_new_cycle(record: &NewCycleRecord) -> Result<(), DomainError> {
    if !CYCLE_LENGTH_RANGE.contains(&record.cycle_length) {
        return Err(DomainError::CycleLengthOutOfRange(record.cycle_length));
    }
    if !PERIOD_LENGTH_RANGE.contains(&record.period_length) {
        return Err(DomainError::PeriodLengthOutOfRange(record.period_length));
    }

    let mut seen = HashSet::new();
    for tag in &record.symptoms {
        if !SYMPTOM_VOCABULARY.contains(&tag.as_str()) {
            return Err(DomainError::UnknownSymptom(tag.clone()));
        }
        if !seen.insert(tag.as_str()) {
            return Err(DomainError::DuplicateSymptom(tag.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlowIntensity, Mood, NewCycleRecord};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn new_record(cycle_length: i32, period_length: i32, symptoms: &[&str]) -> NewCycleRecord {
        NewCycleRecord {
            user_id: Uuid::new_v4(),
            cycle_start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            cycle_length,
            period_length,
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            mood: Mood::Normal,
            flow_intensity: FlowIntensity::Medium,
            notes: None,
        }
    }

    #[test]
    fn accepts_range_boundaries() {
        assert!(validate_new_cycle(&new_record(21, 1, &[])).is_ok());
        assert!(validate_new_cycle(&new_record(45, 10, &[])).is_ok());
    }

    #[test]
    fn rejects_cycle_length_outside_range() {
        assert!(matches!(
            validate_new_cycle(&new_record(20, 5, &[])),
            Err(DomainError::CycleLengthOutOfRange(20))
        ));
        assert!(matches!(
            validate_new_cycle(&new_record(46, 5, &[])),
            Err(DomainError::CycleLengthOutOfRange(46))
        ));
    }

    #[test]
    fn rejects_period_length_outside_range() {
        assert!(matches!(
            validate_new_cycle(&new_record(28, 0, &[])),
            Err(DomainError::PeriodLengthOutOfRange(0))
        ));
        assert!(matches!(
            validate_new_cycle(&new_record(28, 11, &[])),
            Err(DomainError::PeriodLengthOutOfRange(11))
        ));
    }

    #[test]
    fn accepts_known_symptoms() {
        assert!(validate_new_cycle(&new_record(28, 5, &["cramping", "bloating"])).is_ok());
    }

    #[test]
    fn rejects_unknown_symptom() {
        let err = validate_new_cycle(&new_record(28, 5, &["cramping", "vertigo"])).unwrap_err();
        assert!(matches!(err, DomainError::UnknownSymptom(tag) if tag == "vertigo"));
    }

    #[test]
    fn rejects_duplicate_symptom() {
        let err = validate_new_cycle(&new_record(28, 5, &["headache", "headache"])).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateSymptom(tag) if tag == "headache"));
    }
}
