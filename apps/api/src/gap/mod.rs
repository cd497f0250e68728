// Skill-gap engine: per-position completion, focused-set aggregation and the
// recompute entry point that ties them together. Pure functions only; the
// handlers load data from the store and call in.

pub mod aggregator;
pub mod analysis;
pub mod completion;
pub mod handlers;
