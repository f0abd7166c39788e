use crate::LinkGraph;
use quickcheck::Arbitrary;
use std::collections::{BTreeMap, BTreeSet};

pub fn graph(links: &[(&str, &[&str])]) -> LinkGraph {
    LinkGraph::from_links(links.iter().map(|(page, links)| (*page, links.iter().copied()))).unwrap()
}

/// 1.html -> 2.html, 2.html -> {1.html, 3.html}, 3.html -> {2.html, 4.html}, 4.html -> 2.html
pub fn corpus0() -> LinkGraph {
    graph(&[
        ("1.html", &["2.html"]),
        ("2.html", &["1.html", "3.html"]),
        ("3.html", &["2.html", "4.html"]),
        ("4.html", &["2.html"]),
    ])
}

/// `a` and `b` link to each other and to `c`, which links nowhere.
pub fn dangling() -> LinkGraph {
    graph(&[("a", &["b", "c"]), ("b", &["a", "c"]), ("c", &[])])
}

#[derive(Debug, Clone)]
pub struct RandomGraph {
    pub links: BTreeMap<String, BTreeSet<String>>,
}

impl RandomGraph {
    pub fn build(&self) -> LinkGraph {
        LinkGraph::from_links(self.links.clone()).unwrap()
    }
}

impl Arbitrary for RandomGraph {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const N: usize = 50;

        let n: usize = usize::arbitrary(g) % N + 1;
        let pages: Vec<_> = (0..n).map(|i| format!("{i}.html")).collect();
        let mut links: BTreeMap<_, BTreeSet<_>> =
            pages.iter().map(|p| (p.clone(), BTreeSet::new())).collect();
        for _ in 0..(usize::arbitrary(g) % (2 * n + 1)) {
            let u = &pages[usize::arbitrary(g) % n];
            let v = &pages[usize::arbitrary(g) % n];
            if u != v {
                links.get_mut(u).unwrap().insert(v.clone());
            }
        }
        Self { links }
    }
}
