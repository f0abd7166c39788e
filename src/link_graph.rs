use crate::{Error, Result};
use algograph::graph::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A closed corpus of pages and the links between them.
///
/// Every page is a vertex of a directed [`directed::TreeBackedGraph`] and every
/// link an edge. Pages get their vertices in lexical order of their names, so
/// the order of [`LinkGraph::pages`] (and everything seeded sampling derives
/// from it) does not depend on the order pages were handed in.
///
/// Invariants checked by [`LinkGraph::from_links`]:
/// * there is at least one page;
/// * page names are unique;
/// * every link target is itself a page;
/// * no page links to itself.
///
/// A page may have no outgoing links at all (a dangling page).
pub struct LinkGraph {
    graph: directed::TreeBackedGraph,
    pages: Vec<String>,
    vertices: Vec<VertexId>,
    positions: HashMap<VertexId, usize, ahash::RandomState>,
    ids: HashMap<String, VertexId, ahash::RandomState>,
}

impl LinkGraph {
    pub fn from_links<I, P, L, T>(pages: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut adjacency: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, links) in pages {
            let page = page.into();
            let links = links.into_iter().map(Into::into).collect();
            if adjacency.contains_key(&page) {
                return Err(Error::InvalidGraph(format!("duplicate page {page:?}")));
            }
            adjacency.insert(page, links);
        }
        if adjacency.is_empty() {
            return Err(Error::InvalidGraph("no pages".to_string()));
        }

        let mut graph = directed::TreeBackedGraph::new();
        let mut vertices = Vec::with_capacity(adjacency.len());
        let mut positions = HashMap::with_hasher(ahash::RandomState::new());
        let mut ids = HashMap::with_hasher(ahash::RandomState::new());
        for page in adjacency.keys() {
            let v = graph.add_vertex();
            positions.insert(v, vertices.len());
            vertices.push(v);
            ids.insert(page.clone(), v);
        }
        for (page, links) in adjacency.iter() {
            let u = *ids.get(page).unwrap();
            for link in links.iter() {
                if link == page {
                    return Err(Error::InvalidGraph(format!("{page:?} links to itself")));
                }
                let Some(v) = ids.get(link) else {
                    return Err(Error::InvalidGraph(format!(
                        "{page:?} links to {link:?}, which is not in the corpus"
                    )));
                };
                graph.add_edge(u, *v);
            }
        }

        Ok(Self {
            graph,
            pages: adjacency.into_keys().collect(),
            vertices,
            positions,
            ids,
        })
    }

    pub fn page_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_size()
    }

    /// Page names in lexical order.
    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.pages.iter().map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn contains_page(&self, page: &str) -> bool {
        self.ids.contains_key(page)
    }

    /// Pages linked to by `page`.
    pub fn links(&self, page: &str) -> Result<impl Iterator<Item = &str> + '_> {
        let u = self.vertex(page)?;
        Ok(self.successors(u).map(|v| self.name(v)))
    }

    #[cfg(test)]
    pub(crate) fn out_degree(&self, page: &str) -> Result<usize> {
        let u = self.vertex(page)?;
        Ok(self.graph.out_edges(&u).count())
    }

    /// Vertices in the same order as [`LinkGraph::pages`].
    pub(crate) fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub(crate) fn vertex(&self, page: &str) -> Result<VertexId> {
        self.ids
            .get(page)
            .copied()
            .ok_or_else(|| Error::UnknownPage(page.to_string()))
    }

    pub(crate) fn position(&self, v: VertexId) -> usize {
        *self.positions.get(&v).unwrap()
    }

    pub(crate) fn name(&self, v: VertexId) -> &str {
        &self.pages[self.position(v)]
    }

    pub(crate) fn successors(&self, u: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.out_edges(&u).map(|e| e.sink)
    }

    /// Re-keys a per-vertex map by page name.
    pub(crate) fn named<T: Copy>(
        &self,
        values: &HashMap<VertexId, T, ahash::RandomState>,
    ) -> HashMap<String, T, ahash::RandomState> {
        self.vertices
            .iter()
            .zip(self.pages.iter())
            .filter_map(|(v, page)| values.get(v).map(|x| (page.clone(), *x)))
            .collect()
    }
}

impl std::fmt::Debug for LinkGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.vertices.iter().map(|u| {
                let mut links: Vec<_> = self.successors(*u).map(|v| self.name(v)).collect();
                links.sort_unstable();
                (self.name(*u), links)
            }))
            .finish()
    }
}
