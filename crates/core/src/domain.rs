use serde::{Deserialize, Serialize};

/// Statistics returned by the profile API for a single user.
///
/// Extra fields in the payload are ignored; a missing field fails decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStatistics {
    pub ranking: i64,
    pub reputation: i64,
    #[serde(rename = "contributionPoint", alias = "contributionPoints")]
    pub contribution_points: i64,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
    pub total_easy: u32,
    pub total_medium: u32,
    pub total_hard: u32,
}

impl ProfileStatistics {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    pub fn total_solved(&self) -> u64 {
        Difficulty::ALL
            .iter()
            .map(|tier| u64::from(tier.solved(self)))
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    pub const fn solved(self, stats: &ProfileStatistics) -> u32 {
        match self {
            Self::Easy => stats.easy_solved,
            Self::Medium => stats.medium_solved,
            Self::Hard => stats.hard_solved,
        }
    }

    pub const fn total(self, stats: &ProfileStatistics) -> u32 {
        match self {
            Self::Easy => stats.total_easy,
            Self::Medium => stats.total_medium,
            Self::Hard => stats.total_hard,
        }
    }

    /// Solved share of the tier in percent. Not clamped: a solved count above
    /// the total yields more than 100, a zero total yields NaN or infinity.
    pub fn progress(self, stats: &ProfileStatistics) -> f64 {
        f64::from(self.solved(stats)) / f64::from(self.total(stats)) * 100.0
    }

    pub fn labels() -> Vec<String> {
        Self::ALL
            .iter()
            .map(|tier| tier.label().to_string())
            .collect()
    }
}
