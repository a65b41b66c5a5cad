use tracing::debug;

use replyguy::config::AppConfig;
use replyguy::rank::rank_tweets;
use replyguy::scoring::{estimate_engagement, potential_score, reply_strengths};
use replyguy::validate::{validate_replies, validate_tweets};
use replyguy::{Author, EngagementMetrics, FilterCriteria, Reply, ReplyRequest, Tweet};

use crate::llm::{GeneratedTweet, LlmClient};

#[derive(Clone)]
pub struct TweetFinderAgent {
    llm: LlmClient,
    config: AppConfig,
}

impl TweetFinderAgent {
    pub fn new(llm: LlmClient, config: AppConfig) -> Self {
        Self { llm, config }
    }

    pub async fn find_tweets(&self, criteria: &FilterCriteria) -> Result<Vec<Tweet>, String> {
        let query = build_search_query(criteria);
        let max_results = criteria
            .max_results
            .min(self.config.limits.max_tweets_to_fetch);
        debug!(query = %query, max_results, "searching tweets");

        let prompt = format!(
            "Generate {max_results} realistic tweets that match this search query: {query}.\n\
             \n\
             For each tweet:\n\
             1. Create a unique ID\n\
             2. Generate a realistic author name and handle\n\
             3. Set verified status appropriately (about 20% should be verified)\n\
             4. Write tweet content that matches the query and feels authentic\n\
             5. Set realistic relative timestamps (within the last few hours)\n\
             6. Include realistic engagement metrics (likes, replies, retweets, views)"
        );

        let generated = self.llm.generate_tweets(&prompt).await?;
        let received = generated.len();

        let tweets: Vec<Tweet> = generated
            .into_iter()
            .map(|raw| self.into_tweet(raw))
            .collect();
        let tweets = validate_tweets(tweets);
        if tweets.len() < received {
            debug!(dropped = received - tweets.len(), "dropped invalid generated tweets");
        }

        Ok(rank_tweets(
            tweets,
            criteria,
            self.config.limits.max_tweets_to_fetch,
        ))
    }

    fn into_tweet(&self, raw: GeneratedTweet) -> Tweet {
        let metrics = EngagementMetrics {
            likes: raw.likes,
            replies: raw.replies,
            retweets: raw.retweets,
            views: raw.views,
        };
        // The scoring engine owns this field: whatever provisional value the
        // generator produced is overwritten before ranking.
        let viral_potential = potential_score(
            &metrics,
            &raw.timestamp,
            raw.author_verified,
            &self.config.potential,
        );
        Tweet {
            id: raw.id,
            author: Author {
                name: raw.author_name,
                avatar: format!("https://unavatar.io/x/{}", raw.author_handle),
                handle: raw.author_handle,
                is_verified: raw.author_verified,
            },
            content: raw.content,
            timestamp: raw.timestamp,
            metrics,
            viral_potential,
        }
    }
}

fn build_search_query(criteria: &FilterCriteria) -> String {
    let mut parts = Vec::new();
    if !criteria.topics.is_empty() {
        parts.push(format!("({})", criteria.topics.join(" OR ")));
    }
    if criteria.min_engagement > 0 {
        parts.push("min_faves:100".to_string());
    }
    if criteria.only_verified {
        parts.push("is:verified".to_string());
    }
    if criteria.exclude_replies {
        parts.push("-is:reply".to_string());
    }
    if parts.is_empty() {
        parts.push("is:popular".to_string());
    }
    parts.join(" ")
}

#[derive(Clone)]
pub struct ReplyGeneratorAgent {
    llm: LlmClient,
    config: AppConfig,
}

impl ReplyGeneratorAgent {
    pub fn new(llm: LlmClient, config: AppConfig) -> Self {
        Self { llm, config }
    }

    pub async fn generate_replies(&self, request: &ReplyRequest) -> Result<Vec<Reply>, String> {
        let num_replies = request
            .num_replies
            .min(self.config.limits.max_replies_to_generate)
            .max(1);
        debug!(tweet_id = %request.tweet_id, num_replies, "generating replies");

        let prompt = format!(
            "Generate {num_replies} high-quality, diverse replies to this tweet by @{author}:\n\
             \n\
             \"{content}\"\n\
             \n\
             {instructions}\n\
             \n\
             For each reply:\n\
             1. Keep it under 280 characters\n\
             2. Make it engaging and likely to get a response\n\
             3. Be authentic and add value",
            author = request.tweet_author,
            content = request.tweet_content,
            instructions = request.custom_instructions.as_deref().unwrap_or(""),
        );

        let drafts = self.llm.generate_replies(&prompt).await?;
        let replies: Vec<Reply> = drafts
            .into_iter()
            .map(|draft| {
                let content = draft.content.trim().to_string();
                Reply {
                    strengths: reply_strengths(&content),
                    estimated_engagement: estimate_engagement(&content, &request.tweet_content),
                    content,
                }
            })
            .collect();

        let mut replies = validate_replies(replies);
        replies.truncate(num_replies);
        Ok(replies)
    }
}
