pub mod poller;
pub mod source;

pub use poller::{FeedPoller, POLL_INTERVAL};
pub use source::{FeedError, FeedSource, HttpFeedSource};
