//! Prints the PageRank of every page in a directory of HTML files, once
//! estimated by sampling and once by iteration.

use anyhow::Result;
use clap::Parser;
use link_rank::{
    corpus,
    page_rank::{iterated, sampled, IteratedPageRank, PageRankResult, SampledPageRank},
};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagerank")]
#[command(author, version, about = "PageRank of a corpus of linked HTML pages")]
struct Cli {
    /// Directory holding the `.html` pages
    corpus: PathBuf,

    /// Probability of following a link instead of jumping to a random page
    #[arg(long, default_value_t = sampled::Config::default().damping)]
    damping: f64,

    /// Length of the random walk
    #[arg(long, default_value_t = sampled::Config::default().samples)]
    samples: usize,

    /// Largest per-page change at which iteration stops
    #[arg(long, default_value_t = iterated::Config::default().threshold)]
    threshold: f64,

    #[arg(long, default_value_t = iterated::Config::default().max_iterations)]
    max_iterations: usize,

    /// Seed of the random walk; drawn from the OS when absent
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let graph = corpus::crawl(&cli.corpus)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let sampled_config = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
    };
    let by_sampling = SampledPageRank::new(&graph, &sampled_config)?.calc(&mut rng)?;
    println!("PageRank Results from Sampling (n = {})", cli.samples);
    print!("{:?}", by_sampling.debug());

    let iterated_config = iterated::Config {
        damping: cli.damping,
        threshold: cli.threshold,
        max_iterations: cli.max_iterations,
    };
    let by_iteration = IteratedPageRank::new(&graph, &iterated_config)?.calc();
    println!("PageRank Results from Iteration");
    print!("{:?}", by_iteration.debug());

    Ok(())
}
