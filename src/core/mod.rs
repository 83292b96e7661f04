pub mod aggregator;
pub mod classifier;
pub mod parser;
pub mod pivot;
