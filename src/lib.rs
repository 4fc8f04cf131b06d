//! recursion-scan library — call graph construction and recursion detection.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod server;
