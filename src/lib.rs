pub mod cart;
pub mod cli;
pub mod config;
pub mod jobs;
pub mod lifecycle;
pub mod logging;
pub mod store;
pub mod web;
