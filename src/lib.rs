pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod github;
pub mod likes;
pub mod rank;
pub mod render;
pub mod share;
pub mod storage;
pub mod types;
