use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;

/// A maximal run of consecutive check-in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub length: u32,
}

/// Output of a from-scratch streak computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Externally visible derived state of a check-in log
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_check_in_date: Option<CalendarDate>,
    pub total_check_ins: u32,
}

impl StreakStats {
    /// The current run matches the best ever and is more than a single day.
    pub fn is_new_record(&self) -> bool {
        self.current_streak == self.longest_streak && self.current_streak > 1
    }
}

/// Encouragement tier picked from the current streak length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakTier {
    Start,
    Building,
    Strong,
    Excellent,
    Legendary,
}

impl StreakTier {
    /// Tier for a streak of `days`; lower bounds inclusive. No tier for 0.
    pub fn for_streak(days: u32) -> Option<Self> {
        match days {
            0 => None,
            1 => Some(StreakTier::Start),
            2..=6 => Some(StreakTier::Building),
            7..=29 => Some(StreakTier::Strong),
            30..=99 => Some(StreakTier::Excellent),
            _ => Some(StreakTier::Legendary),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StreakTier::Start => "start",
            StreakTier::Building => "building",
            StreakTier::Strong => "strong",
            StreakTier::Excellent => "excellent",
            StreakTier::Legendary => "legendary",
        }
    }

    pub fn message(&self, days: u32) -> String {
        match self {
            StreakTier::Start => "Great start! You've begun your streak journey! 🌱".to_string(),
            StreakTier::Building => {
                format!("Awesome! You're on a {}-day streak! Keep it up! 🔥", days)
            }
            StreakTier::Strong => {
                format!("Amazing! {} days strong! You're on fire! ⚡", days)
            }
            StreakTier::Excellent => {
                format!("Incredible! {}-day streak! You're unstoppable! 🚀", days)
            }
            StreakTier::Legendary => {
                format!("LEGENDARY! {} days! You're a streak master! 👑", days)
            }
        }
    }
}
