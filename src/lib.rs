pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod model;
pub mod output;
pub mod report;
pub mod validate;
