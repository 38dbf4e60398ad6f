pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod report;
pub mod storage;
pub mod test_utils;
