use std::cmp::Reverse;

use crate::{FilterCriteria, Tweet};

/// Threshold-filter and sort validated tweets. Topic keywords are already
/// part of the upstream search query, but generated records are not
/// guaranteed to honor it, so they are matched against the content here as
/// well. The sort is stable: ties keep their original relative order.
pub fn rank_tweets(tweets: Vec<Tweet>, criteria: &FilterCriteria, hard_cap: usize) -> Vec<Tweet> {
    let mut tweets: Vec<Tweet> = tweets
        .into_iter()
        .filter(|tweet| matches_topics(tweet, &criteria.topics))
        .filter(|tweet| tweet.viral_potential >= criteria.min_viral_potential)
        .filter(|tweet| !criteria.only_verified || tweet.author.is_verified)
        .collect();

    tweets.sort_by_key(|tweet| Reverse(tweet.viral_potential));
    tweets.truncate(criteria.max_results.min(hard_cap));
    tweets
}

fn matches_topics(tweet: &Tweet, topics: &[String]) -> bool {
    if topics.is_empty() {
        return true;
    }
    let content = tweet.content.to_lowercase();
    topics
        .iter()
        .any(|topic| content.contains(&topic.to_lowercase()))
}
