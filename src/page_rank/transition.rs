use super::*;
use crate::{error::check_damping, LinkGraph};
use algograph::graph::VertexId;

/// One step of the random surfer.
///
/// From a page with `k > 0` links, the next page is any of the `N` pages with
/// probability `(1 - damping) / N`, plus `damping / k` if it is one of the `k`
/// linked pages. From a dangling page (`k = 0`) every page, the page itself
/// included, is equally likely: `1 / N`.
#[derive(Debug, Clone, Copy)]
pub struct TransitionModel<'a> {
    graph: &'a LinkGraph,
    damping: f64,
}

impl<'a> TransitionModel<'a> {
    pub fn new(graph: &'a LinkGraph, damping: f64) -> crate::Result<Self> {
        check_damping(damping)?;
        Ok(Self { graph, damping })
    }

    pub fn graph(&self) -> &'a LinkGraph {
        self.graph
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn distribution(&self, page: &str) -> crate::Result<TransitionDistribution> {
        let u = self.graph.vertex(page)?;
        Ok(self
            .graph
            .pages()
            .zip(self.weights(u))
            .map(|(page, w)| (page.to_string(), w))
            .collect())
    }

    /// Next-page probabilities from `u`, indexed like `LinkGraph::vertices`.
    pub(crate) fn weights(&self, u: VertexId) -> Vec<f64> {
        let n = self.graph.page_count();
        let k = self.graph.successors(u).count();
        if k == 0 {
            return vec![1.0 / n as f64; n];
        }
        let mut weights = vec![(1.0 - self.damping) / n as f64; n];
        let unit = self.damping / k as f64;
        for v in self.graph.successors(u) {
            weights[self.graph.position(v)] += unit;
        }
        weights
    }
}

pub fn transition_model(
    graph: &LinkGraph,
    page: &str,
    damping: f64,
) -> crate::Result<TransitionDistribution> {
    TransitionModel::new(graph, damping)?.distribution(page)
}
