pub mod stats;

pub use stats::HeaderStats;
