mod cache;
mod pack;
mod stats;

pub use cache::{Layout, LayoutCache};
pub use pack::{PackBoards, DEFAULT_SEARCH_STEP, MAX_SHRINK_STEPS, MIN_SEARCH_STEP};
pub use stats::LayoutStats;
