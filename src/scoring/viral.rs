use chrono::{DateTime, Utc};

use crate::clamp01;
use crate::config::ViralWeights;
use crate::EngagementMetrics;

/// Normalized viral potential in [0.0, 1.0], the canonical tweet score:
/// engagement rate blended with a linear recency decay, with a multiplier
/// for verified authors.
pub fn viral_potential(
    metrics: &EngagementMetrics,
    timestamp: &str,
    is_verified: bool,
    weights: &ViralWeights,
) -> f64 {
    viral_potential_at(metrics, timestamp, is_verified, Utc::now(), weights)
}

pub fn viral_potential_at(
    metrics: &EngagementMetrics,
    timestamp: &str,
    is_verified: bool,
    now: DateTime<Utc>,
    weights: &ViralWeights,
) -> f64 {
    // Missing view counts are estimated from likes, assuming a 1%
    // like-to-view conversion.
    let views_effective = if metrics.views > 0 {
        metrics.views
    } else {
        metrics.likes * weights.views_per_like
    };
    let engagement_rate = metrics.weighted_engagement() as f64 / views_effective.max(1) as f64;

    let hours_ago = hours_since(timestamp, now);
    let recency_factor = (1.0 - hours_ago / weights.recency_window_hours).max(0.0);

    let mut score =
        weights.engagement_weight * engagement_rate + weights.recency_weight * recency_factor;
    if is_verified {
        score *= weights.verified_multiplier;
    }
    clamp01(score)
}

fn hours_since(timestamp: &str, now: DateTime<Utc>) -> f64 {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(instant) => {
            let elapsed = now.signed_duration_since(instant.with_timezone(&Utc));
            (elapsed.num_milliseconds() as f64 / 3_600_000.0).max(0.0)
        }
        // Relative and malformed timestamps count as just posted.
        Err(_) => 0.0,
    }
}
