pub mod config;
pub mod workflow;
