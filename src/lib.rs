pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod repository;
pub mod selection;
pub mod utils;
pub mod view;
pub mod workflow;
