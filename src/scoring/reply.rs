use std::collections::HashSet;

/// Estimated engagement in [0, 100] for a drafted reply. Replies have no
/// engagement counters yet, so this is a heuristic over text features:
/// length, question marks, and lexical overlap with the original tweet.
pub fn estimate_engagement(reply: &str, original_tweet: &str) -> i64 {
    let mut score: i64 = 50;

    let length = reply.chars().count();
    if (80..=150).contains(&length) {
        score += 20;
    } else if length > 200 {
        score -= 10;
    }

    if reply.contains('?') {
        score += 15;
    }

    let original_lower = original_tweet.to_lowercase();
    let reply_lower = reply.to_lowercase();
    let original_words: HashSet<&str> = original_lower.split_whitespace().collect();
    let overlap = reply_lower
        .split_whitespace()
        .collect::<HashSet<&str>>()
        .intersection(&original_words)
        .count();
    if overlap > 0 {
        score += (overlap as i64 * 2).min(15);
    }

    score.clamp(0, 100)
}

/// Up to three short tags describing why a reply should perform well,
/// kept in the fixed check order below.
pub fn reply_strengths(reply: &str) -> Vec<String> {
    let mut strengths = Vec::new();
    let lowercase = reply.to_lowercase();
    let length = reply.chars().count();

    if reply.contains('?') {
        strengths.push("Asks an open-ended question".to_string());
    }
    if length < 140 {
        strengths.push("Concise and direct".to_string());
    }
    if lowercase.contains("consider") {
        strengths.push("Encourages deeper thinking".to_string());
    }
    if ["i've", "i'd", "i think", "in my experience"]
        .iter()
        .any(|phrase| lowercase.contains(phrase))
    {
        strengths.push("Personal and authentic tone".to_string());
    }
    if reply.split_whitespace().count() > 5 && length < 280 {
        strengths.push("Appropriate length for platform".to_string());
    }

    strengths.truncate(3);
    strengths
}
