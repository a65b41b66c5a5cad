use crate::config::PotentialWeights;
use crate::EngagementMetrics;

/// Integer viral potential in [0, 100], the score stored on
/// `Tweet::viral_potential` in the generation path. Uses the same
/// engagement weights as the normalized formula but a fixed view floor
/// instead of a like-based estimate, and reads generator-style relative
/// timestamps ("10 minutes ago").
pub fn potential_score(
    metrics: &EngagementMetrics,
    timestamp: &str,
    is_verified: bool,
    weights: &PotentialWeights,
) -> u8 {
    let views_safe = metrics.views.max(weights.views_floor);
    let engagement_rate = metrics.weighted_engagement() as f64 / views_safe as f64;

    let verified_bonus = if is_verified {
        weights.verified_bonus
    } else {
        0.0
    };
    let recency = relative_recency(timestamp);

    let score = engagement_rate * weights.rate_scale + verified_bonus + recency * weights.recency_scale;
    (score as i64).clamp(0, 100) as u8
}

/// Recency points in [0, 10] from a relative timestamp. Anything that does
/// not match "<N> minutes ago" / "<N> hours ago" counts as fully recent,
/// which covers "just now" and unparsed formats.
fn relative_recency(timestamp: &str) -> f64 {
    let amount = timestamp
        .split_whitespace()
        .next()
        .and_then(|value| value.parse::<f64>().ok());
    if let Some(amount) = amount {
        if timestamp.contains("minutes ago") {
            return (10.0 - amount / 60.0).max(0.0);
        }
        if timestamp.contains("hours ago") {
            return (10.0 - amount).max(0.0);
        }
    }
    10.0
}
