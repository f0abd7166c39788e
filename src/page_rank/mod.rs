//! Two estimators of the same PageRank vector over a [`LinkGraph`](crate::LinkGraph).
//!
//! Both follow one dangling-page policy: a page without outgoing links behaves
//! as if it linked to every page of the corpus, itself included. The random
//! surfer therefore always has somewhere to go, and the iterated recurrence
//! spreads a dangling page's rank evenly instead of dropping it.

use std::collections::HashMap;

pub mod iterated;
pub mod sampled;
pub mod transition;
mod traits;
pub use self::traits::*;

pub use self::iterated::{iterate_ranks, IteratedPageRank};
pub use self::sampled::{sample_ranks, SampledPageRank};
pub use self::transition::{transition_model, TransitionModel};

/// Estimated rank per page, summing to 1.
pub type RankMap = HashMap<String, f64, ahash::RandomState>;

/// Probability of each page being the next one visited, summing to 1.
pub type TransitionDistribution = HashMap<String, f64, ahash::RandomState>;

#[cfg(test)]
pub(crate) mod testing;
