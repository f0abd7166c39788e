use super::RankMap;

pub trait PageRankResult {
    fn page_rank(&self) -> &RankMap;

    /// One `  page: rank` line per page, sorted by page.
    fn debug(&self) -> impl std::fmt::Debug + '_ {
        RankDebug {
            page_rank: self.page_rank(),
        }
    }
}

pub struct RankDebug<'a> {
    page_rank: &'a RankMap,
}

impl std::fmt::Debug for RankDebug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pages: Vec<_> = self.page_rank.iter().collect();
        pages.sort_by(|a, b| a.0.cmp(b.0));
        for (page, rank) in pages {
            writeln!(f, "  {page}: {rank:.4}")?;
        }
        Ok(())
    }
}
