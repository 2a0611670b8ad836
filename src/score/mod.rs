mod engine;
mod metrics;
mod normalize;
mod weights;

pub use engine::{rank, score_candidates, MetricSet, Ranking, ScoredNeighborhood};
pub use metrics::{bike_access, is_grocery, RawMetrics};
pub use normalize::{Maxima, NormalizedMetrics};
pub use weights::{Criterion, WeightVector};
