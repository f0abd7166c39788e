use super::*;
use crate::{error::check_damping, norm_inf, Error, LinkGraph};
use algograph::graph::VertexId;
use std::collections::{BTreeMap, HashMap};

/// Power iteration of the PageRank recurrence
///
/// ```text
/// rank(p) = (1 - d) / N
///         + d * Σ_{q -> p} rank(q) / outdegree(q)
///         + d * Σ_{q dangling} rank(q) / N
/// ```
///
/// starting from `1 / N` everywhere. Every sweep reads one snapshot of the
/// previous ranks and writes a fresh one.
pub struct IteratedPageRank<'a> {
    graph: &'a LinkGraph,
    damping: f64,
    threshold: f64,
    max_iterations: usize,
    transitions: BTreeMap<(VertexId, VertexId), f64>,
    dangling: Vec<VertexId>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Largest per-page change between two sweeps still counted as converged.
    pub threshold: f64,
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            threshold: 0.0005,
            max_iterations: 1000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: RankMap,
    /// Per-page change made by the last sweep.
    pub delta: RankMap,
    pub converged: bool,
    pub iterations: usize,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(g: &'a LinkGraph, config: &Config) -> crate::Result<Self> {
        let damping = config.damping;
        check_damping(damping)?;
        let threshold = config.threshold;
        if !(threshold > 0.0 && threshold.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "threshold={threshold}, expected a positive number"
            )));
        }
        let max_iterations = config.max_iterations;
        if max_iterations < 1 {
            return Err(Error::InvalidArgument(format!(
                "max_iterations={max_iterations}, expected at least 1"
            )));
        }

        let mut transitions = BTreeMap::new();
        let mut dangling = vec![];
        for u in g.vertices().iter().copied() {
            let n = g.successors(u).count();
            if n == 0 {
                dangling.push(u);
                continue;
            }
            let unit = damping / (n as f64);
            for v in g.successors(u) {
                transitions.insert((u, v), unit);
            }
        }
        Ok(Self {
            graph: g,
            damping,
            threshold,
            max_iterations,
            transitions,
            dangling,
        })
    }

    pub fn calc(&self) -> self::Result {
        let damping = self.damping;
        let vertices = self.graph.vertices();
        let n = vertices.len() as f64;

        let mut p: HashMap<_, _, ahash::RandomState> =
            vertices.iter().map(|v| (*v, 1.0 / n)).collect();
        let mut r = HashMap::with_hasher(ahash::RandomState::new());
        let mut delta = HashMap::with_hasher(ahash::RandomState::new());
        let mut iterations = 0;
        loop {
            iterations += 1;

            let dangling: f64 = self.dangling.iter().map(|v| p.get(v).unwrap()).sum();
            let base = (1.0 - damping) / n + damping * dangling / n;
            for v in vertices.iter() {
                r.insert(*v, base);
            }
            for ((v0, v1), w) in self.transitions.iter() {
                let from = p.get(v0).unwrap();
                let to = r.get_mut(v1).unwrap();
                *to += from * w;
            }

            delta.clear();
            for v in vertices.iter() {
                let a = p.get(v).unwrap();
                let b = r.get(v).unwrap();
                delta.insert(*v, b - a);
            }

            let converged = norm_inf(&delta) < self.threshold;
            if converged || iterations >= self.max_iterations {
                if converged {
                    tracing::debug!("converged after {iterations} sweeps");
                } else {
                    tracing::warn!(
                        "no convergence within {} sweeps, largest change {}",
                        self.max_iterations,
                        norm_inf(&delta)
                    );
                }
                return self::Result {
                    page_rank: self.graph.named(&r),
                    delta: self.graph.named(&delta),
                    converged,
                    iterations,
                };
            }

            std::mem::swap(&mut p, &mut r);
            r.clear();
        }
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &RankMap {
        &self.page_rank
    }
}

/// Ranks of `graph` and whether they converged within `max_iterations` sweeps.
pub fn iterate_ranks(
    graph: &LinkGraph,
    damping: f64,
    threshold: f64,
    max_iterations: usize,
) -> crate::Result<(RankMap, bool)> {
    let config = Config {
        damping,
        threshold,
        max_iterations,
    };
    let res = IteratedPageRank::new(graph, &config)?.calc();
    Ok((res.page_rank, res.converged))
}
