use serde::{Deserialize, Serialize};

use replyguy::{FilterCriteria, Reply, ReplyRequest, Tweet};

#[derive(Debug, Default, Deserialize)]
pub struct TweetSearchRequest {
    pub min_engagement: Option<u32>,
    pub topics: Option<Vec<String>>,
    pub exclude_replies: Option<bool>,
    pub only_verified: Option<bool>,
    pub min_viral_potential: Option<u8>,
    pub max_results: Option<usize>,
}

impl TweetSearchRequest {
    pub fn into_criteria(self) -> Result<FilterCriteria, String> {
        let mut criteria = FilterCriteria::default();

        if let Some(value) = self.min_engagement {
            criteria.min_engagement = value;
        }
        if let Some(topics) = self.topics {
            criteria.topics = topics
                .into_iter()
                .map(|topic| topic.trim().to_string())
                .filter(|topic| !topic.is_empty())
                .collect();
        }
        if let Some(value) = self.exclude_replies {
            criteria.exclude_replies = value;
        }
        if let Some(value) = self.only_verified {
            criteria.only_verified = value;
        }
        if let Some(value) = self.min_viral_potential {
            if value > 100 {
                return Err(format!("min_viral_potential must be 0-100: {}", value));
            }
            criteria.min_viral_potential = value;
        }
        if let Some(value) = self.max_results {
            if value == 0 {
                return Err("max_results must be positive".to_string());
            }
            criteria.max_results = value;
        }

        Ok(criteria)
    }
}

#[derive(Debug, Serialize)]
pub struct TweetSearchResponse {
    pub tweets: Vec<Tweet>,
}

#[derive(Debug, Deserialize)]
pub struct ReplyGenerateRequest {
    pub tweet_id: Option<String>,
    pub tweet_content: Option<String>,
    pub tweet_author: Option<String>,
    pub custom_instructions: Option<String>,
    pub num_replies: Option<usize>,
}

impl ReplyGenerateRequest {
    pub fn into_request(self) -> Result<ReplyRequest, String> {
        let tweet_id = require_field(self.tweet_id, "tweet_id")?;
        let tweet_content = require_field(self.tweet_content, "tweet_content")?;
        let tweet_author = require_field(self.tweet_author, "tweet_author")?;
        let num_replies = self.num_replies.unwrap_or(3);
        if num_replies == 0 {
            return Err("num_replies must be positive".to_string());
        }

        Ok(ReplyRequest {
            tweet_id,
            tweet_content,
            tweet_author: tweet_author.trim_start_matches('@').to_string(),
            custom_instructions: self
                .custom_instructions
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            num_replies,
        })
    }
}

fn require_field(value: Option<String>, name: &str) -> Result<String, String> {
    let value = value.unwrap_or_default().trim().to_string();
    if value.is_empty() {
        return Err(format!("{} is required", name));
    }
    Ok(value)
}

#[derive(Debug, Serialize)]
pub struct ReplyGenerateResponse {
    pub replies: Vec<Reply>,
    pub tweet_id: String,
}
