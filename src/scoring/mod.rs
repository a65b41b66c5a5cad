pub mod potential;
pub mod reply;
pub mod viral;

pub use potential::potential_score;
pub use reply::{estimate_engagement, reply_strengths};
pub use viral::{viral_potential, viral_potential_at};
