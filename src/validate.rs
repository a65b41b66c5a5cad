use crate::{Reply, Tweet};

/// Generated records are routinely malformed, so invalid entries are
/// dropped rather than failing the batch. All `validate_*` batch functions
/// preserve the order of the records they keep.
pub fn validate_tweet(tweet: &Tweet) -> bool {
    if tweet.id.is_empty() || tweet.content.is_empty() {
        return false;
    }
    if tweet.author.name.is_empty() || tweet.author.handle.is_empty() {
        return false;
    }
    true
}

pub fn validate_tweets(tweets: Vec<Tweet>) -> Vec<Tweet> {
    tweets.into_iter().filter(validate_tweet).collect()
}

pub fn validate_reply(reply: &Reply) -> bool {
    !reply.content.is_empty() && reply.estimated_engagement >= 0
}

pub fn validate_replies(replies: Vec<Reply>) -> Vec<Reply> {
    replies.into_iter().filter(validate_reply).collect()
}
