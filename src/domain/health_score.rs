use serde::{Deserialize, Serialize};

/// Engagement and wellness counts gathered from the collaborator tables.
/// A source that could not be read contributes 0 / None rather than failing
/// the whole computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignalBundle {
    pub total_appointments: u32,
    pub completed_appointments: u32,
    pub upcoming_appointments: u32,
    pub symptom_check_count: u32,
    pub community_engagement_count: u32,
    /// Mean mood sample on a 1-10 scale; None when no samples exist.
    pub average_mood: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl HealthStatus {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            HealthStatus::Excellent
        } else if score >= 60 {
            HealthStatus::Good
        } else {
            HealthStatus::NeedsImprovement
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub health_score: u8,
    pub status: HealthStatus,
    /// Never empty; falls back to a neutral message when no rule fires.
    pub insights: Vec<String>,
}

// Capped linear points per signal. Caps sum to 100, so the score is bounded
// without clamping, and each term is non-decreasing in its signal.
const APPOINTMENT_POINTS_EACH: u32 = 8;
const APPOINTMENT_POINTS_CAP: u32 = 25;
const TRACKING_POINTS_EACH: u32 = 5;
const TRACKING_POINTS_CAP: u32 = 25;
const COMMUNITY_POINTS_EACH: u32 = 5;
const COMMUNITY_POINTS_CAP: u32 = 20;
const MOOD_POINTS_PER_UNIT: f64 = 3.0;

const LOW_MOOD_THRESHOLD: f64 = 5.0;

/// Combines the signal bundle into a bounded 0-100 score, a status band and
/// an ordered list of insights.
pub fn score(signals: &SignalBundle) -> HealthReport {
    let appointment_points = signals
        .completed_appointments
        .saturating_mul(APPOINTMENT_POINTS_EACH)
        .min(APPOINTMENT_POINTS_CAP);
    let tracking_points = signals
        .symptom_check_count
        .saturating_mul(TRACKING_POINTS_EACH)
        .min(TRACKING_POINTS_CAP);
    let community_points = signals
        .community_engagement_count
        .saturating_mul(COMMUNITY_POINTS_EACH)
        .min(COMMUNITY_POINTS_CAP);
    let mood_points = signals
        .average_mood
        .map(|mood| (mood.clamp(0.0, 10.0) * MOOD_POINTS_PER_UNIT).round() as u32)
        .unwrap_or(0);

    let health_score =
        (appointment_points + tracking_points + community_points + mood_points).min(100) as u8;

    HealthReport {
        health_score,
        status: HealthStatus::from_score(health_score),
        insights: generate_insights(signals),
    }
}

/// Threshold rules evaluated in declaration order; every firing rule appends
/// its message. Consumers always get at least one entry.
fn generate_insights(signals: &SignalBundle) -> Vec<String> {
    let mut insights = Vec::new();

    if signals.average_mood.is_some_and(|mood| mood < LOW_MOOD_THRESHOLD) {
        insights.push(
            "Your recent mood entries are on the low side - consider reaching out for mental health support"
                .to_string(),
        );
    }
    if signals.community_engagement_count == 0 {
        insights.push(
            "Join the community forums to connect with others on a similar journey".to_string(),
        );
    }
    if signals.symptom_check_count == 0 {
        insights.push(
            "Start tracking your symptoms regularly to build a clearer health picture".to_string(),
        );
    }
    if signals.completed_appointments == 0 {
        insights.push("Book a checkup - regular appointments keep your care on track".to_string());
    }
    if signals.upcoming_appointments > 0 {
        insights.push(format!(
            "You have {} upcoming appointment(s) - don't forget to prepare your questions",
            signals.upcoming_appointments
        ));
    }

    if insights.is_empty() {
        insights.push("You're keeping up well - keep logging to maintain your streak".to_string());
    }

    insights
}
