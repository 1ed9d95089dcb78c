pub mod config;
pub mod filters;
pub mod load;
pub mod prompt;
pub mod raw;
pub mod session;
pub mod stats;
