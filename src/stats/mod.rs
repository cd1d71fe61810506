//! Game statistics
//!
//! Counts of attempts-to-win and failures, persisted across sessions.

mod record;
mod storage;
mod store;

pub use record::{HistogramRow, MIN_BAR_PERCENT, StatsRecord};
pub use storage::{FileStorage, MemoryStorage, StatsStorage};
pub use store::{Persisted, STATS_KEY, StatsStore};
