use replyguy::rank::rank_tweets;
use replyguy::validate::{validate_replies, validate_tweets};
use replyguy::{Author, EngagementMetrics, FilterCriteria, Reply, Tweet};

fn author(handle: &str, verified: bool) -> Author {
    Author {
        name: format!("User {}", handle),
        handle: handle.to_string(),
        avatar: format!("https://unavatar.io/x/{}", handle),
        is_verified: verified,
    }
}

fn tweet(id: &str, viral_potential: u8) -> Tweet {
    Tweet {
        id: id.to_string(),
        author: author("someone", false),
        content: "Shipping a new release today".to_string(),
        timestamp: "5 minutes ago".to_string(),
        metrics: EngagementMetrics::default(),
        viral_potential,
    }
}

fn reply(content: &str, estimated_engagement: i64) -> Reply {
    Reply {
        content: content.to_string(),
        strengths: vec!["Concise and direct".to_string()],
        estimated_engagement,
    }
}

fn ids(tweets: &[Tweet]) -> Vec<&str> {
    tweets.iter().map(|tweet| tweet.id.as_str()).collect()
}

#[test]
fn validator_drops_tweet_missing_handle() {
    let mut broken = tweet("t1", 60);
    broken.author.handle = String::new();

    let kept = validate_tweets(vec![broken, tweet("t2", 60)]);
    assert_eq!(ids(&kept), vec!["t2"]);
}

#[test]
fn validator_keeps_three_of_five() {
    let mut no_content = tweet("t2", 60);
    no_content.content = String::new();
    let mut no_name = tweet("t4", 60);
    no_name.author.name = String::new();

    let batch = vec![
        tweet("t1", 60),
        no_content,
        tweet("t3", 60),
        no_name,
        tweet("t5", 60),
    ];
    let kept = validate_tweets(batch);
    assert_eq!(ids(&kept), vec!["t1", "t3", "t5"]);
}

#[test]
fn validator_drops_empty_id() {
    let kept = validate_tweets(vec![tweet("", 60)]);
    assert!(kept.is_empty());
}

#[test]
fn validator_is_idempotent() {
    let mut broken = tweet("bad", 60);
    broken.content = String::new();

    let once = validate_tweets(vec![tweet("a", 10), broken, tweet("b", 20)]);
    let twice = validate_tweets(once.clone());
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn reply_validator_enforces_content_and_engagement() {
    let batch = vec![
        reply("Great point, have you tried this?", 70),
        reply("", 70),
        reply("Interesting take", -1),
        reply("Works for zero engagement too", 0),
    ];
    let kept = validate_replies(batch);
    let contents: Vec<&str> = kept.iter().map(|reply| reply.content.as_str()).collect();
    assert_eq!(
        contents,
        vec![
            "Great point, have you tried this?",
            "Works for zero engagement too",
        ]
    );
}

#[test]
fn ranking_filters_threshold_and_sorts_descending() {
    let batch = vec![tweet("low", 40), tweet("top", 90), tweet("mid", 70)];
    let criteria = FilterCriteria::default();

    let ranked = rank_tweets(batch, &criteria, 10);
    assert_eq!(ids(&ranked), vec!["top", "mid"]);
}

#[test]
fn ranking_keeps_original_order_on_ties() {
    let batch = vec![
        tweet("first", 70),
        tweet("second", 70),
        tweet("third", 90),
    ];
    let criteria = FilterCriteria::default();

    let ranked = rank_tweets(batch, &criteria, 10);
    assert_eq!(ids(&ranked), vec!["third", "first", "second"]);
}

#[test]
fn ranking_respects_only_verified() {
    let mut verified = tweet("verified", 60);
    verified.author = author("famous", true);

    let criteria = FilterCriteria {
        only_verified: true,
        ..FilterCriteria::default()
    };
    let ranked = rank_tweets(vec![tweet("plain", 80), verified], &criteria, 10);
    assert_eq!(ids(&ranked), vec!["verified"]);
}

#[test]
fn ranking_topic_filter_matches_case_insensitively() {
    let mut on_topic = tweet("on", 80);
    on_topic.content = "Excited about the new AI model drop".to_string();
    let mut off_topic = tweet("off", 90);
    off_topic.content = "Best sourdough crumb so far".to_string();

    let criteria = FilterCriteria {
        topics: vec!["ai".to_string()],
        ..FilterCriteria::default()
    };
    let ranked = rank_tweets(vec![off_topic, on_topic], &criteria, 10);
    assert_eq!(ids(&ranked), vec!["on"]);
}

#[test]
fn ranking_truncates_to_max_results_and_hard_cap() {
    let batch: Vec<Tweet> = (0..8).map(|n| tweet(&format!("t{}", n), 90)).collect();

    let criteria = FilterCriteria {
        max_results: 3,
        ..FilterCriteria::default()
    };
    assert_eq!(rank_tweets(batch.clone(), &criteria, 10).len(), 3);

    // The configured cap wins when the caller asks for more.
    let criteria = FilterCriteria {
        max_results: 100,
        ..FilterCriteria::default()
    };
    assert_eq!(rank_tweets(batch, &criteria, 5).len(), 5);
}

#[test]
fn ranking_is_idempotent() {
    let batch = vec![tweet("a", 95), tweet("b", 80), tweet("c", 65)];
    let criteria = FilterCriteria::default();

    let once = rank_tweets(batch, &criteria, 10);
    let twice = rank_tweets(once.clone(), &criteria, 10);
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn empty_batch_yields_empty_batch() {
    let criteria = FilterCriteria::default();
    assert!(validate_tweets(Vec::new()).is_empty());
    assert!(rank_tweets(Vec::new(), &criteria, 10).is_empty());
}
