//! Final score of a quiz: percentage, encouragement message and color tier.

use crate::models::QuizSession;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTier {
    Good,
    Warn,
    Bad,
}

impl ColorTier {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            70.. => ColorTier::Good,
            50..=69 => ColorTier::Warn,
            _ => ColorTier::Bad,
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            ColorTier::Good => "#2A9D8F",
            ColorTier::Warn => "#E9C46A",
            ColorTier::Bad => "#E76F51",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u8,
    pub message: String,
    pub color_tier: ColorTier,
}

/// Rounded share of correct answers; 0 for an empty quiz.
pub fn score_percentage(score: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = score.min(total) as f64 / total as f64;
    (ratio * 100.0).round() as u8
}

pub fn score_message(percentage: u8) -> &'static str {
    match percentage {
        90.. => "Excellent!",
        80..=89 => "Very good!",
        70..=79 => "Well done!",
        60..=69 => "Good attempt",
        50..=59 => "Keep practicing",
        _ => "Don't give up",
    }
}

pub fn summarize(session: &QuizSession) -> ScoreSummary {
    let percentage = score_percentage(session.score(), session.total_count());
    ScoreSummary {
        score: session.score(),
        total: session.total_count(),
        percentage,
        message: score_message(percentage).to_string(),
        color_tier: ColorTier::from_percentage(percentage),
    }
}
