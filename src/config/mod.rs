//! Configuration for tally

pub mod paths;

pub use paths::TallyPaths;
