use super::*;
use crate::{Error, LinkGraph};
use algograph::graph::VertexId;
use rand::{seq::IndexedRandom, Rng};
use std::collections::HashMap;

/// Estimates PageRank by the visit frequencies of one long random walk.
///
/// The first page is drawn uniformly; every later page is drawn from the
/// [`TransitionModel`] of the page before it. The walk never restarts.
pub struct SampledPageRank<'a> {
    model: TransitionModel<'a>,
    samples: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: RankMap,
    pub visits: HashMap<String, usize, ahash::RandomState>,
}

impl<'a> SampledPageRank<'a> {
    pub fn new(graph: &'a LinkGraph, config: &Config) -> crate::Result<Self> {
        let model = TransitionModel::new(graph, config.damping)?;
        if config.samples < 1 {
            return Err(Error::InvalidArgument(format!(
                "samples={}, expected at least 1",
                config.samples
            )));
        }
        Ok(Self {
            model,
            samples: config.samples,
        })
    }

    /// Runs the walk with randomness drawn from `rng` only, so a seeded `rng`
    /// reproduces the result exactly.
    pub fn calc<R: Rng + ?Sized>(&self, rng: &mut R) -> crate::Result<self::Result> {
        let graph = self.model.graph();
        let vertices = graph.vertices();
        tracing::debug!(
            "sampling {} pages with {} samples, damping={}",
            vertices.len(),
            self.samples,
            self.model.damping()
        );

        let mut visits: HashMap<VertexId, usize, ahash::RandomState> =
            vertices.iter().map(|v| (*v, 0)).collect();
        let mut transitions: HashMap<VertexId, Vec<(VertexId, f64)>, ahash::RandomState> =
            HashMap::with_hasher(ahash::RandomState::new());

        let mut cur = *vertices
            .choose(rng)
            .ok_or_else(|| Error::InvalidGraph("no pages".to_string()))?;
        *visits.get_mut(&cur).unwrap() += 1;
        for _ in 1..self.samples {
            let weights = transitions.entry(cur).or_insert_with(|| {
                vertices
                    .iter()
                    .copied()
                    .zip(self.model.weights(cur))
                    .collect()
            });
            let (next, _) = weights
                .choose_weighted(rng, |&(_, w)| w)
                .map_err(|e| Error::Sampling(e.to_string()))?;
            cur = *next;
            *visits.get_mut(&cur).unwrap() += 1;
        }

        let n = self.samples as f64;
        let page_rank: HashMap<_, _, ahash::RandomState> =
            visits.iter().map(|(v, c)| (*v, *c as f64 / n)).collect();
        Ok(self::Result {
            page_rank: graph.named(&page_rank),
            visits: graph.named(&visits),
        })
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &RankMap {
        &self.page_rank
    }
}

/// Visit frequencies of an `n`-step random walk over `graph`.
pub fn sample_ranks<R: Rng + ?Sized>(
    graph: &LinkGraph,
    damping: f64,
    n: usize,
    rng: &mut R,
) -> crate::Result<RankMap> {
    let config = Config { damping, samples: n };
    let res = SampledPageRank::new(graph, &config)?.calc(rng)?;
    Ok(res.page_rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{norm_1, page_rank::testing::*};
    use quickcheck_macros::quickcheck;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn single_page() {
        let g = graph(&[("only", &[])]);
        let mut rng = SmallRng::seed_from_u64(3407);
        let pr = sample_ranks(&g, 0.85, 100, &mut rng).unwrap();
        assert_eq!(pr.len(), 1);
        assert_eq!(pr["only"], 1.0);
    }

    #[test]
    fn one_sample() {
        let g = corpus0();
        let mut rng = SmallRng::seed_from_u64(3407);
        let res = SampledPageRank::new(&g, &Config { damping: 0.85, samples: 1 })
            .unwrap()
            .calc(&mut rng)
            .unwrap();
        assert_eq!(res.visits.values().sum::<usize>(), 1);
        assert_eq!(res.page_rank.values().filter(|x| **x == 1.0).count(), 1);
        assert_eq!(res.page_rank.values().filter(|x| **x == 0.0).count(), 3);
    }

    #[test]
    fn visits_add_up() {
        let g = dangling();
        let mut rng = SmallRng::seed_from_u64(3407);
        let res = SampledPageRank::new(&g, &Config::default())
            .unwrap()
            .calc(&mut rng)
            .unwrap();
        assert_eq!(res.visits.len(), 3);
        assert_eq!(res.visits.values().sum::<usize>(), 10_000);
        for (page, rank) in res.page_rank.iter() {
            assert_eq!(*rank, res.visits[page] as f64 / 10_000.0);
        }
        assert!((norm_1(&res.page_rank) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn reproducible() {
        let g = corpus0();
        let trial = sample_ranks(&g, 0.85, 2_000, &mut SmallRng::seed_from_u64(7)).unwrap();
        let oracle = sample_ranks(&g, 0.85, 2_000, &mut SmallRng::seed_from_u64(7)).unwrap();
        assert_eq!(trial, oracle);
    }

    #[test]
    fn independent_of_page_order() {
        let g0 = graph(&[("a", &["b", "c"]), ("b", &["a", "c"]), ("c", &[])]);
        let g1 = graph(&[("c", &[]), ("b", &["c", "a"]), ("a", &["c", "b"])]);
        let trial = sample_ranks(&g0, 0.85, 2_000, &mut SmallRng::seed_from_u64(11)).unwrap();
        let oracle = sample_ranks(&g1, 0.85, 2_000, &mut SmallRng::seed_from_u64(11)).unwrap();
        assert_eq!(trial, oracle);
    }

    #[test]
    fn agrees_with_iteration() {
        let g = dangling();
        let mut rng = SmallRng::seed_from_u64(3407);
        let sampled = sample_ranks(&g, 0.85, 10_000, &mut rng).unwrap();
        let (iterated, converged) = iterate_ranks(&g, 0.85, 1e-10, 10_000).unwrap();
        assert!(converged);
        for page in g.pages() {
            let s = sampled[page];
            let i = iterated[page];
            assert!((s - i).abs() / i < 0.05, "{page}: sampled {s} vs iterated {i}");
        }
    }

    #[test]
    fn agrees_with_iteration_on_corpus0() {
        let g = corpus0();
        let mut rng = SmallRng::seed_from_u64(3407);
        let sampled = sample_ranks(&g, 0.85, 10_000, &mut rng).unwrap();
        let config = iterated::Config::default();
        let (iterated, converged) =
            iterate_ranks(&g, config.damping, config.threshold, config.max_iterations).unwrap();
        assert!(converged);
        for page in g.pages() {
            let s = sampled[page];
            let i = iterated[page];
            assert!((s - i).abs() / i < 0.05, "{page}: sampled {s} vs iterated {i}");
        }
    }

    #[test]
    fn invalid_arguments() {
        let g = corpus0();
        let mut rng = SmallRng::seed_from_u64(3407);
        let res = sample_ranks(&g, 0.85, 0, &mut rng);
        assert!(matches!(res, Err(Error::InvalidArgument(_))), "{res:?}");
        let res = sample_ranks(&g, 1.0, 10, &mut rng);
        assert!(matches!(res, Err(Error::InvalidArgument(_))), "{res:?}");
    }

    #[quickcheck]
    fn sums_to_one(g: RandomGraph, seed: u64) -> bool {
        let g = g.build();
        let mut rng = SmallRng::seed_from_u64(seed);
        let res = SampledPageRank::new(&g, &Config { damping: 0.85, samples: 500 })
            .unwrap()
            .calc(&mut rng)
            .unwrap();
        res.page_rank.len() == g.page_count()
            && res.visits.values().sum::<usize>() == 500
            && (norm_1(&res.page_rank) - 1.0).abs() < 1e-9
    }
}
