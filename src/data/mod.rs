//! Feed ingestion layer.

pub mod feed;

pub use feed::{aggregate_groups, load_groups, load_rows, FeedRow};
