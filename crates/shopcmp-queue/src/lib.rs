//! The comparison queue: a bounded, deduplicated, paginated list of products
//! and the workflow that turns it into one comparison request.

pub mod error;
pub mod manager;
pub mod prompt;
pub mod queue;

pub use error::QueueError;
pub use manager::QueueManager;
pub use prompt::build_prompt;
pub use queue::{ComparisonQueue, PaginationWindow, QueueEntry, MIN_COMPARE_ITEMS};
