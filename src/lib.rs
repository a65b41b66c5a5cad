pub mod config;
pub mod rank;
pub mod scoring;
pub mod validate;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub handle: String,
    pub avatar: String,
    #[serde(default)]
    pub is_verified: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngagementMetrics {
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub replies: u64,
    #[serde(default)]
    pub retweets: u64,
    #[serde(default)]
    pub views: u64,
}

impl EngagementMetrics {
    /// Weighted interaction count: replies and retweets take more effort
    /// to produce than likes, so they count 2x and 3x.
    pub fn weighted_engagement(&self) -> u64 {
        self.likes + self.replies * 2 + self.retweets * 3
    }
}

/// Timestamps stay as strings because the generator emits both ISO-8601
/// instants and relative forms like "10 minutes ago". Each scoring formula
/// parses the form it understands and falls back to a documented default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub author: Author,
    pub content: String,
    pub timestamp: String,
    pub metrics: EngagementMetrics,
    #[serde(default)]
    pub viral_potential: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub content: String,
    pub strengths: Vec<String>,
    #[serde(default)]
    pub estimated_engagement: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub min_engagement: u32,
    pub topics: Vec<String>,
    pub exclude_replies: bool,
    pub only_verified: bool,
    pub min_viral_potential: u8,
    pub max_results: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_engagement: 100,
            topics: Vec::new(),
            exclude_replies: false,
            only_verified: false,
            min_viral_potential: 50,
            max_results: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReplyRequest {
    pub tweet_id: String,
    pub tweet_content: String,
    pub tweet_author: String,
    pub custom_instructions: Option<String>,
    pub num_replies: usize,
}

pub(crate) fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(0.0).min(1.0)
}
