use serde::{ Serialize, Deserialize };
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use chrono::{NaiveDate, DateTime, Utc};

use crate::domain::DomainError;

/// One logged menstrual cycle. Immutable after creation.
#[derive(Debug, Clone, Serialize)]
pub struct CycleRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub cycle_start_date: NaiveDate,
    pub cycle_length: i32,
    pub period_length: i32,
    pub symptoms: Vec<String>,
    pub mood: Mood,
    pub flow_intensity: FlowIntensity,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewCycleRecord {
    pub user_id: Uuid,
    pub cycle_start_date: NaiveDate,
    pub cycle_length: i32,
    pub period_length: i32,
    pub symptoms: Vec<String>,
    pub mood: Mood,
    pub flow_intensity: FlowIntensity,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Normal,
    Anxious,
    Sad,
    Irritable,
    Energetic,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Normal => "normal",
            Mood::Anxious => "anxious",
            Mood::Sad => "sad",
            Mood::Irritable => "irritable",
            Mood::Energetic => "energetic",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(Mood::Happy),
            "normal" => Ok(Mood::Normal),
            "anxious" => Ok(Mood::Anxious),
            "sad" => Ok(Mood::Sad),
            "irritable" => Ok(Mood::Irritable),
            "energetic" => Ok(Mood::Energetic),
            other => Err(DomainError::UnknownMood(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowIntensity {
    Light,
    Medium,
    Heavy,
}

impl FlowIntensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowIntensity::Light => "light",
            FlowIntensity::Medium => "medium",
            FlowIntensity::Heavy => "heavy",
        }
    }
}

impl fmt::Display for FlowIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowIntensity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(FlowIntensity::Light),
            "medium" => Ok(FlowIntensity::Medium),
            "heavy" => Ok(FlowIntensity::Heavy),
            other => Err(DomainError::UnknownFlowIntensity(other.to_string())),
        }
    }
}

/// Raw `cycle_records` row; mood and flow intensity come back as text and
/// are parsed into their enums in `TryFrom`.
#[derive(Debug, sqlx::FromRow)]
pub struct CycleRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub cycle_start_date: NaiveDate,
    pub cycle_length: i32,
    pub period_length: i32,
    pub symptoms: Vec<String>,
    pub mood: String,
    pub flow_intensity: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<CycleRow> for CycleRecord {
    type Error = DomainError;

    fn try_from(row: CycleRow) -> Result<Self, Self::Error> {
        Ok(CycleRecord {
            id: row.id,
            user_id: row.user_id,
            cycle_start_date: row.cycle_start_date,
            cycle_length: row.cycle_length,
            period_length: row.period_length,
            symptoms: row.symptoms,
            mood: row.mood.parse()?,
            flow_intensity: row.flow_intensity.parse()?,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}
