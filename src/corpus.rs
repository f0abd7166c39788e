//! Loading a [`LinkGraph`] from a directory of HTML pages.

use crate::{LinkGraph, Result};
use regex::Regex;
use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
    sync::LazyLock,
};

static ANCHOR_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex"));

/// Targets of every `<a ... href="...">` in `content`, in document order.
pub fn extract_links(content: &str) -> Vec<String> {
    ANCHOR_HREF
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Builds the link graph of the `.html` files directly inside `dir`.
///
/// Pages are named by file name. Links back to the page itself and links to
/// anything that is not another page of the corpus are dropped.
pub fn crawl(dir: impl AsRef<Path>) -> Result<LinkGraph> {
    let dir = dir.as_ref();
    let mut pages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            tracing::warn!("Skipping non UTF-8 file name {:?}", path);
            continue;
        };
        if !name.ends_with(".html") {
            continue;
        }
        let content = fs::read_to_string(&path)?;
        let links = extract_links(&content)
            .into_iter()
            .filter(|link| link != name)
            .collect();
        pages.insert(name.to_string(), links);
    }

    let names: BTreeSet<String> = pages.keys().cloned().collect();
    for links in pages.values_mut() {
        links.retain(|link| names.contains(link));
    }
    let graph = LinkGraph::from_links(pages)?;
    tracing::debug!(
        "Crawled {} pages with {} links from {}",
        graph.page_count(),
        graph.link_count(),
        dir.display()
    );
    Ok(graph)
}
