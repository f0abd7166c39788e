mod common;
pub use self::common::*;
mod error;
pub use self::error::{Error, Result};
mod link_graph;
pub use self::link_graph::LinkGraph;

pub mod corpus;
pub mod page_rank;
